//! # 能带图渲染
//!
//! 使用 `plotters` 库绘制 fatband 能带图：每条能带画距离-能量曲线，
//! 谱权重画成对称误差棒，高对称点处画竖直参考线并标注刻度。
//!
//! ## 依赖关系
//! - 被 `commands/band.rs` 调用
//! - 使用 `models/band.rs` 的 BandSet
//! - 使用 `plotters` 渲染图表

use crate::error::{BandkitError, Result};
use crate::models::{BandSet, OrbitalChannel};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// 误差棒配色（Tableau 10）
const ERRORBAR_PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// 轨道通道对应的误差棒颜色
pub fn channel_color(channel: &OrbitalChannel) -> RGBColor {
    ERRORBAR_PALETTE[channel.palette_index(ERRORBAR_PALETTE.len())]
}

/// 渲染 fatband 能带图
///
/// x 轴范围固定为 `[0, axis_len-1]`，刻度文本放在 `special_indices`
/// 处；y 轴是关于零能级对称的固定窗口 `±window`。按输出文件扩展名
/// 选择 SVG 或位图后端。
#[allow(clippy::too_many_arguments)]
pub fn render_fatband(
    bands: &BandSet,
    special_indices: &[usize],
    special_labels: &[String],
    axis_len: usize,
    title: &str,
    ecolor: RGBColor,
    window: f64,
    width: u32,
    height: u32,
    output_path: &Path,
) -> Result<()> {
    if bands.is_empty() {
        return Err(BandkitError::RenderPrecondition(
            "band set contains no records".to_string(),
        ));
    }
    if special_indices.len() < 2 {
        return Err(BandkitError::RenderPrecondition(format!(
            "need at least 2 special points, got {}",
            special_indices.len()
        )));
    }
    if special_indices.len() != special_labels.len() {
        return Err(BandkitError::RenderPrecondition(format!(
            "{} special indices vs {} labels",
            special_indices.len(),
            special_labels.len()
        )));
    }
    if axis_len < 2 || window <= 0.0 {
        return Err(BandkitError::RenderPrecondition(
            "degenerate plot axes".to_string(),
        ));
    }

    let use_svg = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_band_chart(
            &root,
            bands,
            special_indices,
            special_labels,
            axis_len,
            title,
            ecolor,
            window,
        )?;
        root.present()
            .map_err(|e| BandkitError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_band_chart(
            &root,
            bands,
            special_indices,
            special_labels,
            axis_len,
            title,
            ecolor,
            window,
        )?;
        root.present()
            .map_err(|e| BandkitError::Other(e.to_string()))?;
    }

    Ok(())
}

/// 绘制能带图的核心逻辑
#[allow(clippy::too_many_arguments)]
fn draw_band_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    bands: &BandSet,
    special_indices: &[usize],
    special_labels: &[String],
    axis_len: usize,
    title: &str,
    ecolor: RGBColor,
    window: f64,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| BandkitError::Other(format!("{:?}", e)))?;

    let x_max = (axis_len - 1) as f64;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, -window..window)
        .map_err(|e| BandkitError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(0)
        .y_desc("E - E_F (eV)")
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| BandkitError::Other(format!("{:?}", e)))?;

    let marker_color = BLACK.mix(0.2);

    // 零能级参考线
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), (x_max, 0.0)],
            marker_color.stroke_width(2),
        )))
        .map_err(|e| BandkitError::Other(format!("{:?}", e)))?;

    // 内部高对称点的竖直参考线（不含首尾）
    for &idx in &special_indices[1..special_indices.len() - 1] {
        let x = idx as f64;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x, -window), (x, window)],
                marker_color.stroke_width(2),
            )))
            .map_err(|e| BandkitError::Other(format!("{:?}", e)))?;
    }

    for band in bands.iter() {
        // 误差棒：以谱权重为半宽，端点收进能量窗口
        let bars = band
            .iter()
            .filter(|r| (r.energy - r.weight) <= window && (r.energy + r.weight) >= -window)
            .map(|r| {
                let lo = (r.energy - r.weight).max(-window);
                let hi = (r.energy + r.weight).min(window);
                PathElement::new(vec![(r.distance, lo), (r.distance, hi)], ecolor.stroke_width(1))
            });
        chart
            .draw_series(bars)
            .map_err(|e| BandkitError::Other(format!("{:?}", e)))?;

        // 能带曲线：窗口外的区段不画
        for run in band.split(|r| r.energy.abs() > window) {
            if run.len() < 2 {
                continue;
            }
            chart
                .draw_series(LineSeries::new(
                    run.iter().map(|r| (r.distance, r.energy)),
                    BLACK.stroke_width(1),
                ))
                .map_err(|e| BandkitError::Other(format!("{:?}", e)))?;
        }
    }

    // 高对称点刻度文本，画在 x 轴标签区
    let tick_style = ("sans-serif", 16)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (&idx, label) in special_indices.iter().zip(special_labels.iter()) {
        let (px, py) = chart.backend_coord(&(idx as f64, -window));
        root.draw(&Text::new(label.clone(), (px, py + 6), tick_style.clone()))
            .map_err(|e| BandkitError::Other(format!("{:?}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BandRecord;

    fn record(distance: f64, energy: f64, weight: f64) -> BandRecord {
        BandRecord {
            distance,
            energy,
            weight,
        }
    }

    fn tiny_band_set() -> BandSet {
        BandSet::from_groups(vec![vec![
            record(0.0, -1.0, 0.1),
            record(1.0, 0.0, 0.2),
            record(2.0, 1.0, 0.1),
        ]])
    }

    fn labels(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_band_set_rejected() {
        let empty = BandSet::from_groups(vec![]);
        let err = render_fatband(
            &empty,
            &[0, 2],
            &labels(&["Γ", "X"]),
            3,
            "l = 0",
            channel_color(&OrbitalChannel::new(0, None)),
            5.0,
            400,
            300,
            Path::new("unused.svg"),
        )
        .unwrap_err();
        assert!(matches!(err, BandkitError::RenderPrecondition(_)));
    }

    #[test]
    fn test_single_special_point_rejected() {
        let err = render_fatband(
            &tiny_band_set(),
            &[0],
            &labels(&["Γ"]),
            3,
            "l = 0",
            channel_color(&OrbitalChannel::new(0, None)),
            5.0,
            400,
            300,
            Path::new("unused.svg"),
        )
        .unwrap_err();
        assert!(matches!(err, BandkitError::RenderPrecondition(_)));
    }

    #[test]
    fn test_mismatched_labels_rejected() {
        let err = render_fatband(
            &tiny_band_set(),
            &[0, 2],
            &labels(&["Γ"]),
            3,
            "l = 0",
            channel_color(&OrbitalChannel::new(0, None)),
            5.0,
            400,
            300,
            Path::new("unused.svg"),
        )
        .unwrap_err();
        assert!(matches!(err, BandkitError::RenderPrecondition(_)));
    }

    #[test]
    fn test_degenerate_axis_rejected() {
        let err = render_fatband(
            &tiny_band_set(),
            &[0, 2],
            &labels(&["Γ", "X"]),
            1,
            "l = 0",
            channel_color(&OrbitalChannel::new(0, None)),
            5.0,
            400,
            300,
            Path::new("unused.svg"),
        )
        .unwrap_err();
        assert!(matches!(err, BandkitError::RenderPrecondition(_)));
    }

    #[test]
    fn test_channel_color_is_stable() {
        let a = channel_color(&OrbitalChannel::new(2, None));
        let b = channel_color(&OrbitalChannel::new(2, None));
        assert_eq!(a, b);
        // l=2 与 m=-1 落在不同的调色板槽位
        assert_ne!(a, channel_color(&OrbitalChannel::new(2, Some(-1))));
    }
}
