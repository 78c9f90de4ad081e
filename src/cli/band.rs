//! # band 子命令 CLI 定义
//!
//! 渲染角动量通道 l（可选 m）的 fatband 能带图。数据文件名默认按
//! 文件名约定从 seed/原子/元素/自旋推导，也可以用 --data-file 直接
//! 指定。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/band.rs`

use crate::cli::kpath::LatticeArg;

use clap::Args;
use std::path::PathBuf;

/// band 子命令参数
#[derive(Args, Debug)]
pub struct BandArgs {
    /// Orbital angular momentum quantum number l
    pub l: u32,

    /// Magnetic quantum number m (m-resolved output only)
    #[arg(allow_negative_numbers = true)]
    pub m: Option<i32>,

    /// Fatband data file (overrides the filename convention)
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Calculation output seed used by the filename convention
    #[arg(long, default_value = "band_o_DS2")]
    pub seed: String,

    /// Atom index in the filename convention
    #[arg(long, default_value_t = 1)]
    pub atom: u32,

    /// Species symbol in the filename convention (default: first element of the structure)
    #[arg(long)]
    pub species: Option<String>,

    /// Spin channel in the filename convention
    #[arg(long, default_value_t = 1)]
    pub spin: u32,

    /// Number of electronic bands stored in the data file
    #[arg(long, default_value_t = 30)]
    pub nband: usize,

    /// Structure file (POSCAR/CONTCAR or *.vasp)
    #[arg(short, long, default_value = "POSCAR")]
    pub structure: PathBuf,

    /// Bravais lattice family (auto-detected from the cell if omitted)
    #[arg(long, value_enum)]
    pub lattice: Option<LatticeArg>,

    /// High-symmetry path, one letter per point (e.g. GXWKG)
    #[arg(short, long, default_value = "GXWKG")]
    pub path: String,

    /// Total number of k-points along the path
    #[arg(short, long, default_value_t = 300)]
    pub npoints: usize,

    /// Symmetric energy window around the Fermi level (eV)
    #[arg(long, default_value_t = 5.0)]
    pub window: f64,

    /// Output directory for figures
    #[arg(short, long, default_value = "fig")]
    pub outdir: PathBuf,

    /// Figure width in points
    #[arg(long, default_value_t = 960)]
    pub width: u32,

    /// Figure height in points
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Title for the plot (default: quantum-number label)
    #[arg(long)]
    pub title: Option<String>,

    /// Export the parsed band records to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
