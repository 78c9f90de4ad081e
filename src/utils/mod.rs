//! # 工具函数模块
//!
//! 提供美化输出和工作目录清理等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: output, workdir

pub mod output;
pub mod workdir;
