//! # kpath 子命令实现
//!
//! 从结构文件构造高对称 k 路径并打印检查信息：结构概要、分段采样
//! 点数 (ndivk)、各高对称点的分数坐标和在 k 点序列里的下标。
//!
//! ## 依赖关系
//! - 使用 `cli/kpath.rs` 定义的 KpathArgs
//! - 使用 `bands/` 模块构造路径
//! - 使用 `parsers/` 读取结构

use crate::bands::{build_kpoint_path, catalog, export, kpath::parse_path_labels};
use crate::cli::kpath::KpathArgs;
use crate::commands::resolve_lattice;
use crate::error::Result;
use crate::parsers;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 高对称点列表的表格行
#[derive(Debug, Clone, Tabled)]
struct SpecialPointRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "Distance")]
    distance: String,
    #[tabled(rename = "k1")]
    k1: String,
    #[tabled(rename = "k2")]
    k2: String,
    #[tabled(rename = "k3")]
    k3: String,
}

/// 执行 kpath 命令
pub fn execute(args: KpathArgs) -> Result<()> {
    output::print_header("High-Symmetry k-Path Inspection");

    let crystal = parsers::parse_structure_file(&args.structure)?;
    let kind = resolve_lattice(args.lattice, &crystal)?;

    let (a, b, c, alpha, beta, gamma) = crystal.lattice.parameters();
    output::print_info(&format!(
        "Structure: {} ({}), {} lattice",
        crystal.name,
        crystal.formula(),
        kind
    ));
    output::print_info(&format!(
        "Cell: a={:.4} b={:.4} c={:.4} Å, α={:.2}° β={:.2}° γ={:.2}°",
        a, b, c, alpha, beta, gamma
    ));

    let labels = parse_path_labels(&args.path);
    let kpath = build_kpoint_path(&crystal.lattice, &kind, &labels, args.npoints)?;

    output::print_info(&format!(
        "Path {} sampled with {} k-points",
        args.path,
        kpath.npoints()
    ));

    let rows: Vec<SpecialPointRow> = kpath
        .labels
        .iter()
        .zip(kpath.special_labels.iter())
        .zip(kpath.special_indices.iter())
        .map(|((label, display), &index)| {
            let coord = catalog::lookup(kind, label)?;
            Ok(SpecialPointRow {
                label: display.clone(),
                index,
                distance: format!("{:.6}", kpath.distances[index]),
                k1: format!("{:+.4}", coord[0]),
                k2: format!("{:+.4}", coord[1]),
                k3: format!("{:+.4}", coord[2]),
            })
        })
        .collect::<Result<_>>()?;

    println!("{}", Table::new(&rows));

    let ndivk: Vec<String> = kpath
        .segment_divisions()
        .iter()
        .map(|n| n.to_string())
        .collect();
    output::print_info(&format!("Segment divisions (ndivk): {}", ndivk.join(" ")));

    if let Some(csv_path) = &args.csv {
        export::kpath_to_csv(&kpath, csv_path)?;
        output::print_success(&format!("k-path written to {}", csv_path.display()));
    }

    Ok(())
}
