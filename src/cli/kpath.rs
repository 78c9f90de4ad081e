//! # kpath 子命令 CLI 定义
//!
//! 检查结构的高对称 k 路径：打印分段点数和高对称点坐标表。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/kpath.rs`

use crate::models::LatticeKind;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 布拉维格子族（命令行写法）
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LatticeArg {
    /// Simple cubic
    Cubic,
    /// Face-centered cubic (primitive cell)
    Fcc,
    /// Body-centered cubic (primitive cell)
    Bcc,
    /// Tetragonal
    Tetragonal,
    /// Orthorhombic
    Orthorhombic,
    /// Hexagonal
    Hexagonal,
}

impl From<LatticeArg> for LatticeKind {
    fn from(arg: LatticeArg) -> Self {
        match arg {
            LatticeArg::Cubic => LatticeKind::Cubic,
            LatticeArg::Fcc => LatticeKind::Fcc,
            LatticeArg::Bcc => LatticeKind::Bcc,
            LatticeArg::Tetragonal => LatticeKind::Tetragonal,
            LatticeArg::Orthorhombic => LatticeKind::Orthorhombic,
            LatticeArg::Hexagonal => LatticeKind::Hexagonal,
        }
    }
}

impl std::fmt::Display for LatticeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", LatticeKind::from(*self))
    }
}

/// kpath 子命令参数
#[derive(Args, Debug)]
pub struct KpathArgs {
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

    /// Export the discretized path to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
