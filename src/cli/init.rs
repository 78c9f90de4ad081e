//! # init 子命令 CLI 定义
//!
//! 生成单元素原胞 POSCAR，替代外部数据库取数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/init.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 可生成的格子类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum GeneratedLattice {
    /// Simple cubic
    Cubic,
    /// Face-centered cubic (primitive cell)
    #[default]
    Fcc,
    /// Body-centered cubic (primitive cell)
    Bcc,
}

impl std::fmt::Display for GeneratedLattice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratedLattice::Cubic => write!(f, "cubic"),
            GeneratedLattice::Fcc => write!(f, "fcc"),
            GeneratedLattice::Bcc => write!(f, "bcc"),
        }
    }
}

/// init 子命令参数
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Element symbol (e.g. Pt)
    #[arg(short, long)]
    pub element: String,

    /// Conventional lattice constant a (Å)
    #[arg(short, long)]
    pub alat: f64,

    /// Lattice to generate
    #[arg(long, value_enum, default_value_t = GeneratedLattice::Fcc)]
    pub lattice: GeneratedLattice,

    /// Output path of the structure file
    #[arg(short, long, default_value = "POSCAR")]
    pub output: PathBuf,

    /// Overwrite an existing structure file
    #[arg(long, default_value_t = false)]
    pub force: bool,
}
