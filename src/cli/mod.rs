//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `kpath`: 检查高对称 k 路径
//! - `band`: 渲染 fatband 能带图
//! - `init`: 生成原胞 POSCAR
//! - `clean`: 清理工作目录
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: kpath, band, init, clean

pub mod band;
pub mod clean;
pub mod init;
pub mod kpath;

use clap::{Parser, Subcommand};

/// bandkit - 能带计算工作流工具箱
#[derive(Parser)]
#[command(name = "bandkit")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A band-structure workflow toolkit for electronic-structure calculations", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the high-symmetry k-path of a structure
    Kpath(kpath::KpathArgs),

    /// Render a fatband plot for an orbital channel
    Band(band::BandArgs),

    /// Generate a primitive-cell POSCAR for a single element
    Init(init::InitArgs),

    /// Remove working-directory entries not on the keep list
    Clean(clean::CleanArgs),
}
