//! # k 路径构造
//!
//! 把高对称点标签序列离散化为 k 点序列：各线段按倒空间长度分摊
//! 采样点，线性插值分数坐标，并沿路径累计笛卡尔距离；随后在距离
//! 轴上用容差最近匹配定位每个高对称点的下标。
//!
//! ## 依赖关系
//! - 被 `commands/kpath.rs` 和 `commands/band.rs` 使用
//! - 使用 `bands/catalog.rs` 的 SpecialPointSource
//! - 使用 `models/structure.rs` 的 Lattice

use crate::bands::catalog::{display_label, SpecialPointSource};
use crate::error::{BandkitError, Result};
use crate::models::Lattice;

/// 高对称点在距离轴上的绝对匹配容差
pub const KPOINT_MATCH_TOL: f64 = 1e-6;

/// 离散化的 k 路径
#[derive(Debug, Clone, PartialEq)]
pub struct KpointPath {
    /// 请求的标签序列（原始写法）
    pub labels: Vec<String>,
    /// k 点分数坐标，长度 = 请求的总点数
    pub kpoints: Vec<[f64; 3]>,
    /// 各点的累计倒空间距离，单调不减
    pub distances: Vec<f64>,
    /// 每个标签在 k 点序列里的下标，单调不减
    pub special_indices: Vec<usize>,
    /// 标签的展示写法（G 显示为 Γ）
    pub special_labels: Vec<String>,
}

impl KpointPath {
    /// k 点总数
    pub fn npoints(&self) -> usize {
        self.kpoints.len()
    }

    /// 相邻高对称点之间的采样点数（外部输入文件常用的 ndivk）
    pub fn segment_divisions(&self) -> Vec<usize> {
        self.special_indices
            .windows(2)
            .map(|w| w[1] - w[0])
            .collect()
    }
}

/// 把路径字符串拆成标签序列
///
/// 含逗号时按逗号分隔（允许多字符标签），否则每个字符一个标签。
pub fn parse_path_labels(path: &str) -> Vec<String> {
    if path.contains(',') {
        path.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    } else {
        path.chars().map(|c| c.to_string()).collect()
    }
}

/// 构造离散化 k 路径
///
/// `total_points` 个采样点按倒空间线段长度成比例分摊到各段（每段
/// 至少 1 点），段内对分数坐标线性插值。纯函数：相同输入给出逐位
/// 相同的输出。
pub fn build_kpoint_path<S: SpecialPointSource + ?Sized>(
    lattice: &Lattice,
    source: &S,
    labels: &[String],
    total_points: usize,
) -> Result<KpointPath> {
    if labels.len() < 2 {
        return Err(BandkitError::InvalidArgument(format!(
            "k-path needs at least 2 labels, got {}",
            labels.len()
        )));
    }
    if total_points < labels.len() {
        return Err(BandkitError::InvalidArgument(format!(
            "{} k-points cannot cover a path through {} labels",
            total_points,
            labels.len()
        )));
    }

    // 端点坐标：分数坐标与倒空间笛卡尔坐标
    let recip = lattice.reciprocal();
    let frac: Vec<[f64; 3]> = labels
        .iter()
        .map(|label| {
            source
                .coordinate(label)
                .ok_or_else(|| BandkitError::UnknownSymmetryPoint {
                    label: label.clone(),
                    kind: source.family(),
                })
        })
        .collect::<Result<_>>()?;
    let cart: Vec<[f64; 3]> = frac.iter().map(|f| frac_to_cart(f, &recip)).collect();

    let nseg = labels.len() - 1;
    let seg_len: Vec<f64> = cart.windows(2).map(|w| distance(&w[0], &w[1])).collect();
    let total_len: f64 = seg_len.iter().sum();

    // 采样点分摊：每段先保底 1 点，剩余点位逐个给欠额最大的段
    let navail = total_points - 1;
    let targets: Vec<f64> = if total_len > 0.0 {
        seg_len
            .iter()
            .map(|len| navail as f64 * len / total_len)
            .collect()
    } else {
        vec![navail as f64 / nseg as f64; nseg]
    };

    let mut counts = vec![1usize; nseg];
    for _ in 0..navail - nseg {
        let mut best = 0;
        let mut best_deficit = f64::NEG_INFINITY;
        for (i, target) in targets.iter().enumerate() {
            let deficit = target - counts[i] as f64;
            if deficit > best_deficit {
                best_deficit = deficit;
                best = i;
            }
        }
        counts[best] += 1;
    }

    // 段内插值并累计距离
    let mut kpoints = Vec::with_capacity(total_points);
    let mut distances = Vec::with_capacity(total_points);
    kpoints.push(frac[0]);
    distances.push(0.0);

    let mut acc = 0.0;
    let mut prev = cart[0];
    for i in 0..nseg {
        for j in 1..=counts[i] {
            let t = j as f64 / counts[i] as f64;
            let f = lerp(&frac[i], &frac[i + 1], t);
            let k = frac_to_cart(&f, &recip);
            acc += distance(&prev, &k);
            prev = k;
            kpoints.push(f);
            distances.push(acc);
        }
    }

    // 每个标签的期望距离，与距离轴做容差最近匹配
    let mut expected = Vec::with_capacity(labels.len());
    expected.push(0.0);
    let mut cum = 0.0;
    for len in &seg_len {
        cum += len;
        expected.push(cum);
    }

    let special_indices = labels
        .iter()
        .zip(expected.iter())
        .map(|(label, &target)| {
            find_nearest_index(&distances, target, KPOINT_MATCH_TOL).ok_or_else(|| {
                BandkitError::PathResolution {
                    label: label.clone(),
                    expected: target,
                }
            })
        })
        .collect::<Result<Vec<usize>>>()?;

    let special_labels = labels.iter().map(|l| display_label(l)).collect();

    Ok(KpointPath {
        labels: labels.to_vec(),
        kpoints,
        distances,
        special_indices,
        special_labels,
    })
}

/// 在距离轴上找目标值的最近下标
///
/// 只接受绝对偏差不超过 `tol` 的候选；偏差相同时取最靠前的下标。
/// 没有候选落在容差内时返回 None。
pub fn find_nearest_index(values: &[f64], target: f64, tol: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, v) in values.iter().enumerate() {
        let diff = (v - target).abs();
        if diff > tol {
            continue;
        }
        match best {
            Some((_, best_diff)) if best_diff <= diff => {}
            _ => best = Some((i, diff)),
        }
    }

    best.map(|(i, _)| i)
}

/// 线性插值，t=0 和 t=1 精确落在端点上
fn lerp(a: &[f64; 3], b: &[f64; 3], t: f64) -> [f64; 3] {
    let s = 1.0 - t;
    [
        a[0] * s + b[0] * t,
        a[1] * s + b[1] * t,
        a[2] * s + b[2] * t,
    ]
}

/// 分数坐标转倒空间笛卡尔坐标: k = f1*b1 + f2*b2 + f3*b3
fn frac_to_cart(f: &[f64; 3], recip: &[[f64; 3]; 3]) -> [f64; 3] {
    [
        f[0] * recip[0][0] + f[1] * recip[1][0] + f[2] * recip[2][0],
        f[0] * recip[0][1] + f[1] * recip[1][1] + f[2] * recip[2][1],
        f[0] * recip[0][2] + f[1] * recip[1][2] + f[2] * recip[2][2],
    ]
}

fn distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let dz = b[2] - a[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LatticeKind;

    fn fcc_lattice(a: f64) -> Lattice {
        let h = a / 2.0;
        Lattice::from_vectors([[0.0, h, h], [h, 0.0, h], [h, h, 0.0]])
    }

    fn labels(path: &str) -> Vec<String> {
        parse_path_labels(path)
    }

    #[test]
    fn test_parse_path_labels() {
        assert_eq!(labels("GXWKG"), vec!["G", "X", "W", "K", "G"]);
        assert_eq!(labels("G,X,W"), vec!["G", "X", "W"]);
    }

    #[test]
    fn test_build_basic_properties() {
        let lat = fcc_lattice(3.92);
        let path = build_kpoint_path(&lat, &LatticeKind::Fcc, &labels("GXW"), 100).unwrap();

        assert_eq!(path.npoints(), 100);
        assert_eq!(path.special_indices.len(), 3);
        for w in path.distances.windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn test_gxwkg_300_over_fcc() {
        let lat = fcc_lattice(3.92);
        let path = build_kpoint_path(&lat, &LatticeKind::Fcc, &labels("GXWKG"), 300).unwrap();

        assert_eq!(path.npoints(), 300);
        assert_eq!(path.special_indices.len(), 5);
        assert_eq!(path.special_indices[0], 0);
        assert_eq!(*path.special_indices.last().unwrap(), 299);
        for w in path.special_indices.windows(2) {
            assert!(w[1] > w[0]);
        }
        assert_eq!(
            path.special_labels,
            vec!["Γ", "X", "W", "K", "Γ"]
        );

        // ndivk 覆盖全部 299 个间隔
        assert_eq!(path.segment_divisions().iter().sum::<usize>(), 299);
    }

    #[test]
    fn test_two_labels_two_points_boundary() {
        let lat = fcc_lattice(3.92);
        let path = build_kpoint_path(&lat, &LatticeKind::Fcc, &labels("GX"), 2).unwrap();

        assert_eq!(path.npoints(), 2);
        assert_eq!(path.special_indices, vec![0, 1]);
    }

    #[test]
    fn test_symmetric_path_splits_evenly() {
        let lat = fcc_lattice(3.92);
        let path = build_kpoint_path(&lat, &LatticeKind::Fcc, &labels("GXG"), 11).unwrap();

        assert_eq!(path.special_indices, vec![0, 5, 10]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let lat = fcc_lattice(3.92);
        let a = build_kpoint_path(&lat, &LatticeKind::Fcc, &labels("GXWKG"), 300).unwrap();
        let b = build_kpoint_path(&lat, &LatticeKind::Fcc, &labels("GXWKG"), 300).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicate_consecutive_labels() {
        let lat = fcc_lattice(3.92);
        let path = build_kpoint_path(&lat, &LatticeKind::Fcc, &labels("GGX"), 10).unwrap();

        assert_eq!(path.npoints(), 10);
        assert_eq!(path.special_indices[0], path.special_indices[1]);
        for w in path.special_indices.windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn test_unknown_label() {
        let lat = fcc_lattice(3.92);
        let err = build_kpoint_path(&lat, &LatticeKind::Fcc, &labels("GQ"), 10).unwrap_err();
        assert!(matches!(err, BandkitError::UnknownSymmetryPoint { .. }));
    }

    #[test]
    fn test_too_few_points() {
        let lat = fcc_lattice(3.92);
        let err = build_kpoint_path(&lat, &LatticeKind::Fcc, &labels("GXW"), 2).unwrap_err();
        assert!(matches!(err, BandkitError::InvalidArgument(_)));
    }

    #[test]
    fn test_single_label_rejected() {
        let lat = fcc_lattice(3.92);
        let err = build_kpoint_path(&lat, &LatticeKind::Fcc, &labels("G"), 10).unwrap_err();
        assert!(matches!(err, BandkitError::InvalidArgument(_)));
    }

    #[test]
    fn test_find_nearest_index() {
        let axis = [0.0, 0.5, 1.0, 1.5];

        assert_eq!(find_nearest_index(&axis, 1.0, 1e-6), Some(2));
        assert_eq!(find_nearest_index(&axis, 1.0 + 5e-7, 1e-6), Some(2));
        assert_eq!(find_nearest_index(&axis, 0.25, 1e-6), None);
        // 同值重复时取最靠前的下标
        let dup = [0.0, 1.0, 1.0, 2.0];
        assert_eq!(find_nearest_index(&dup, 1.0, 1e-6), Some(1));
    }
}
