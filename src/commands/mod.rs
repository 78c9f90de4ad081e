//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `bands/`, `models/`, `utils/`
//! - 子模块: kpath, band, init, clean

pub mod band;
pub mod clean;
pub mod init;
pub mod kpath;

use crate::cli::kpath::LatticeArg;
use crate::cli::Commands;
use crate::error::{BandkitError, Result};
use crate::models::{Crystal, LatticeKind};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Kpath(args) => kpath::execute(args),
        Commands::Band(args) => band::execute(args),
        Commands::Init(args) => init::execute(args),
        Commands::Clean(args) => clean::execute(args),
    }
}

/// 确定结构的布拉维格子族：命令行显式指定优先，其次用解析时的
/// 自动分类，都没有则要求用户指定
pub(crate) fn resolve_lattice(arg: Option<LatticeArg>, crystal: &Crystal) -> Result<LatticeKind> {
    if let Some(lattice) = arg {
        return Ok(lattice.into());
    }

    crystal.kind.ok_or_else(|| {
        BandkitError::UnknownLattice(format!(
            "cell of '{}' does not match a supported Bravais family, pass --lattice",
            crystal.name
        ))
    })
}
