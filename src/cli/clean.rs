//! # clean 子命令 CLI 定义
//!
//! 清理计算工作目录：keep 列表之外的顶层条目全部删除。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/clean.rs`

use clap::Args;
use std::path::PathBuf;

/// clean 子命令参数
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Working directory to clean
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Entries to keep (glob patterns, repeatable)
    #[arg(
        short,
        long,
        default_values_t = [
            "fig".to_string(),
            "log".to_string(),
            "*.sh".to_string(),
            "*.abi".to_string(),
            "*.py".to_string(),
        ]
    )]
    pub keep: Vec<String>,

    /// List what would be removed without deleting anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
