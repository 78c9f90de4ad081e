//! # 高对称点目录
//!
//! 各布拉维格子族的倒空间高对称点约定坐标（倒格矢分数坐标）。
//! 坐标值取常用的晶体学约定表，与原胞选择配套。
//!
//! ## 依赖关系
//! - 被 `bands/kpath.rs` 和 `commands/` 使用
//! - 使用 `models/structure.rs` 的 LatticeKind

use crate::error::{BandkitError, Result};
use crate::models::LatticeKind;

/// 标签到倒格矢分数坐标的查询能力
///
/// k 路径构造只依赖这一接口，具体坐标表按格子族注入。
pub trait SpecialPointSource {
    /// 查询标签的分数坐标；未知标签返回 None
    fn coordinate(&self, label: &str) -> Option<[f64; 3]>;

    /// 坐标表所属格子族的名字，用于错误报告
    fn family(&self) -> String {
        "lattice".to_string()
    }
}

/// 简单立方
const CUBIC: &[(&str, [f64; 3])] = &[
    ("G", [0.0, 0.0, 0.0]),
    ("M", [0.5, 0.5, 0.0]),
    ("R", [0.5, 0.5, 0.5]),
    ("X", [0.0, 0.5, 0.0]),
];

/// 面心立方（原胞）
const FCC: &[(&str, [f64; 3])] = &[
    ("G", [0.0, 0.0, 0.0]),
    ("K", [0.375, 0.375, 0.75]),
    ("L", [0.5, 0.5, 0.5]),
    ("U", [0.625, 0.25, 0.625]),
    ("W", [0.5, 0.25, 0.75]),
    ("X", [0.5, 0.0, 0.5]),
];

/// 体心立方（原胞）
const BCC: &[(&str, [f64; 3])] = &[
    ("G", [0.0, 0.0, 0.0]),
    ("H", [0.5, -0.5, 0.5]),
    ("N", [0.0, 0.0, 0.5]),
    ("P", [0.25, 0.25, 0.25]),
];

/// 四方
const TETRAGONAL: &[(&str, [f64; 3])] = &[
    ("G", [0.0, 0.0, 0.0]),
    ("A", [0.5, 0.5, 0.5]),
    ("M", [0.5, 0.5, 0.0]),
    ("R", [0.0, 0.5, 0.5]),
    ("X", [0.0, 0.5, 0.0]),
    ("Z", [0.0, 0.0, 0.5]),
];

/// 正交
const ORTHORHOMBIC: &[(&str, [f64; 3])] = &[
    ("G", [0.0, 0.0, 0.0]),
    ("R", [0.5, 0.5, 0.5]),
    ("S", [0.5, 0.5, 0.0]),
    ("T", [0.0, 0.5, 0.5]),
    ("U", [0.5, 0.0, 0.5]),
    ("X", [0.5, 0.0, 0.0]),
    ("Y", [0.0, 0.5, 0.0]),
    ("Z", [0.0, 0.0, 0.5]),
];

/// 六角
const HEXAGONAL: &[(&str, [f64; 3])] = &[
    ("G", [0.0, 0.0, 0.0]),
    ("A", [0.0, 0.0, 0.5]),
    ("H", [1.0 / 3.0, 1.0 / 3.0, 0.5]),
    ("K", [1.0 / 3.0, 1.0 / 3.0, 0.0]),
    ("L", [0.5, 0.0, 0.5]),
    ("M", [0.5, 0.0, 0.0]),
];

/// 某一格子族的全部高对称点（有序表，供展示）
pub fn special_points(kind: LatticeKind) -> &'static [(&'static str, [f64; 3])] {
    match kind {
        LatticeKind::Cubic => CUBIC,
        LatticeKind::Fcc => FCC,
        LatticeKind::Bcc => BCC,
        LatticeKind::Tetragonal => TETRAGONAL,
        LatticeKind::Orthorhombic => ORTHORHOMBIC,
        LatticeKind::Hexagonal => HEXAGONAL,
    }
}

impl SpecialPointSource for LatticeKind {
    fn coordinate(&self, label: &str) -> Option<[f64; 3]> {
        special_points(*self)
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, coord)| *coord)
    }

    fn family(&self) -> String {
        self.to_string()
    }
}

/// 查询坐标，未知标签转为错误
pub fn lookup(kind: LatticeKind, label: &str) -> Result<[f64; 3]> {
    kind.coordinate(label)
        .ok_or_else(|| BandkitError::UnknownSymmetryPoint {
            label: label.to_string(),
            kind: kind.to_string(),
        })
}

/// 标签的展示写法：布里渊区中心 G 显示为 Γ
///
/// 仅用于展示，查表仍用原始标签。
pub fn display_label(label: &str) -> String {
    if label == "G" {
        "Γ".to_string()
    } else {
        label.to_string()
    }
}
