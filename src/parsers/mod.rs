//! # 解析器模块
//!
//! 提供结构文件和 fatband 输出文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: poscar, fatband

pub mod fatband;
pub mod poscar;

use crate::error::{BandkitError, Result};
use crate::models::Crystal;
use std::path::Path;

/// 从文件路径推断格式并解析结构
pub fn parse_structure_file(path: &Path) -> Result<Crystal> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    if ext == "vasp" || ext == "poscar" {
        return poscar::parse_poscar_file(path);
    }

    // POSCAR/CONTCAR (无扩展名)
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if name.starts_with("POSCAR") || name.starts_with("CONTCAR") {
            return poscar::parse_poscar_file(path);
        }
    }

    Err(BandkitError::UnsupportedFormat(format!(
        "Cannot determine format for: {}",
        path.display()
    )))
}
