//! # band 子命令实现
//!
//! 渲染一个轨道通道的 fatband 能带图：按文件名约定定位数据文件，
//! 解析并按能带切分记录，构造 k 路径取刻度位置，输出矢量图。
//!
//! ## 依赖关系
//! - 使用 `cli/band.rs` 定义的 BandArgs
//! - 使用 `parsers/fatband.rs` 解析数据
//! - 使用 `bands/` 模块构造路径和渲染

use crate::bands::{build_kpoint_path, export, kpath::parse_path_labels, plot};
use crate::cli::band::BandArgs;
use crate::commands::resolve_lattice;
use crate::error::{BandkitError, Result};
use crate::models::{Crystal, OrbitalChannel};
use crate::parsers;
use crate::utils::output;

use std::fs;
use std::path::PathBuf;

/// 执行 band 命令
pub fn execute(args: BandArgs) -> Result<()> {
    output::print_header("Fatband Plot");

    let crystal = parsers::parse_structure_file(&args.structure)?;
    let kind = resolve_lattice(args.lattice, &crystal)?;

    let channel = OrbitalChannel::new(args.l, args.m);
    let data_file = resolve_data_file(&args, &channel, &crystal)?;

    output::print_info(&format!(
        "Channel {}: reading {}",
        channel,
        data_file.display()
    ));

    // 显式给的数据文件也按文件名约定核对一遍量子数
    if args.data_file.is_some() {
        if let Some(name) = data_file.file_name().and_then(|n| n.to_str()) {
            match OrbitalChannel::from_filename(name) {
                Some(encoded) if encoded != channel => {
                    output::print_warning(&format!(
                        "file name encodes channel {}, but {} was requested",
                        encoded, channel
                    ));
                }
                _ => {}
            }
        }
    }

    let bands = parsers::fatband::parse_fatband_file(&data_file, args.nband)?;
    output::print_info(&format!(
        "{} bands x {} k-points",
        bands.nbands(),
        bands.rows_per_band()
    ));

    let labels = parse_path_labels(&args.path);
    let kpath = build_kpoint_path(&crystal.lattice, &kind, &labels, args.npoints)?;

    if bands.rows_per_band() != kpath.npoints() {
        output::print_warning(&format!(
            "data file has {} k-points per band, path was sampled with {}",
            bands.rows_per_band(),
            kpath.npoints()
        ));
    }

    fs::create_dir_all(&args.outdir).map_err(|e| BandkitError::FileWriteError {
        path: args.outdir.display().to_string(),
        source: e,
    })?;

    let stem = data_file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| channel.to_string());
    let figure = args.outdir.join(format!("{}.svg", stem));

    let title = args.title.clone().unwrap_or_else(|| channel.title());

    plot::render_fatband(
        &bands,
        &kpath.special_indices,
        &kpath.special_labels,
        kpath.npoints(),
        &title,
        plot::channel_color(&channel),
        args.window,
        args.width,
        args.height,
        &figure,
    )?;

    if let Some(csv_path) = &args.csv {
        export::bands_to_csv(&bands, csv_path)?;
        output::print_success(&format!("band records written to {}", csv_path.display()));
    }

    output::print_success(&format!("Figure saved to {}", figure.display()));

    Ok(())
}

/// 定位 fatband 数据文件：--data-file 优先，否则按文件名约定拼接
fn resolve_data_file(
    args: &BandArgs,
    channel: &OrbitalChannel,
    crystal: &Crystal,
) -> Result<PathBuf> {
    if let Some(path) = &args.data_file {
        return Ok(path.clone());
    }

    let species = match &args.species {
        Some(s) => s.clone(),
        None => crystal
            .atoms
            .first()
            .map(|a| a.element.clone())
            .ok_or_else(|| {
                BandkitError::InvalidArgument(
                    "structure contains no atoms, pass --species".to_string(),
                )
            })?,
    };

    Ok(PathBuf::from(channel.fatband_filename(
        &args.seed,
        args.atom,
        &species,
        args.spin,
    )))
}
