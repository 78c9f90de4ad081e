//! # 能带计算模块
//!
//! 提供 k 路径构造和 fatband 能带图渲染功能。
//!
//! ## 子模块
//! - `catalog`: 各布拉维格子族的高对称点表
//! - `kpath`: k 路径离散化与高对称点定位
//! - `plot`: 能带图渲染
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/kpath.rs` 和 `commands/band.rs` 使用
//! - 使用 `models/structure.rs`, `models/band.rs`

pub mod catalog;
pub mod export;
pub mod kpath;
pub mod plot;

pub use catalog::SpecialPointSource;
pub use kpath::{build_kpoint_path, KpointPath};
