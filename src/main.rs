//! # bandkit - 能带计算工作流工具箱
//!
//! 把围绕电子结构计算的零散辅助脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `kpath` - 检查高对称 k 路径（分段点数、坐标表）
//! - `band`  - 渲染轨道投影 fatband 能带图
//! - `init`  - 生成单元素原胞 POSCAR
//! - `clean` - 按 keep 列表清理工作目录
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (POSCAR/fatband 解析器)
//!   │     ├── bands/     (k 路径构造与绘图)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod bands;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
