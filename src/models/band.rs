//! # 能带数据模型
//!
//! fatband 文件解析后的逐 k 点谱权重记录及其按能带分组的集合。
//!
//! ## 依赖关系
//! - 被 `parsers/fatband.rs` 和 `bands/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 单条 fatband 记录：路径距离、相对参考能级的能量、谱权重
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandRecord {
    /// 沿 k 路径的横坐标
    pub distance: f64,
    /// 能量 E - E_F (eV)
    pub energy: f64,
    /// 非负谱权重（误差棒半宽）
    pub weight: f64,
}

/// 按能带分组的记录集合
///
/// 不变量：各组等长，组序对应文件中能带的升序。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandSet {
    bands: Vec<Vec<BandRecord>>,
}

impl BandSet {
    /// 由等长分组构造；仅供解析器使用
    pub(crate) fn from_groups(bands: Vec<Vec<BandRecord>>) -> Self {
        BandSet { bands }
    }

    /// 能带条数
    pub fn nbands(&self) -> usize {
        self.bands.len()
    }

    /// 每条能带的记录数
    pub fn rows_per_band(&self) -> usize {
        self.bands.first().map(|b| b.len()).unwrap_or(0)
    }

    /// 是否没有任何可绘制记录
    pub fn is_empty(&self) -> bool {
        self.bands.iter().all(|b| b.is_empty())
    }

    /// 逐能带迭代
    pub fn iter(&self) -> impl Iterator<Item = &[BandRecord]> {
        self.bands.iter().map(|b| b.as_slice())
    }
}
