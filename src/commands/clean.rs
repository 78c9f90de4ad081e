//! # clean 子命令实现
//!
//! 清理计算工作目录：keep 列表（glob 模式）之外的顶层条目全部删除。
//!
//! ## 依赖关系
//! - 使用 `cli/clean.rs` 定义的 CleanArgs
//! - 使用 `utils/workdir.rs`

use crate::cli::clean::CleanArgs;
use crate::error::Result;
use crate::utils::{output, workdir};

/// 执行 clean 命令
pub fn execute(args: CleanArgs) -> Result<()> {
    output::print_header("Working Directory Cleanup");

    output::print_info(&format!(
        "Cleaning '{}', keeping: {}",
        args.dir.display(),
        args.keep.join(" ")
    ));

    let report = workdir::clean_workdir(&args.dir, &args.keep, args.dry_run)?;

    for name in &report.removed {
        if args.dry_run {
            output::print_skip(&format!("would remove {}", name));
        } else {
            output::print_info(&format!("removed {}", name));
        }
    }

    output::print_separator();
    if args.dry_run {
        output::print_done(&format!(
            "dry run: {} entries would be removed, {} kept",
            report.removed.len(),
            report.kept.len()
        ));
    } else {
        output::print_done(&format!(
            "{} entries removed, {} kept",
            report.removed.len(),
            report.kept.len()
        ));
    }

    Ok(())
}
