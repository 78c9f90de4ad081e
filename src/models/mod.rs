//! # 数据模型模块
//!
//! 定义晶体结构、能带数据和轨道通道的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `bands/` 和 `commands/` 使用
//! - 子模块: structure, band, orbital

pub mod band;
pub mod orbital;
pub mod structure;

pub use band::{BandRecord, BandSet};
pub use orbital::OrbitalChannel;
pub use structure::{Atom, Crystal, Lattice, LatticeKind};
