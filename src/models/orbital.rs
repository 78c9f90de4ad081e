//! # 轨道通道数据模型
//!
//! 角量子数 l（及可选磁量子数 m）的结构化表示。fatband 输出文件
//! 把量子数编码在文件名里，这里提供唯一的正反向转换边界，其余
//! 代码只操作结构化的 `OrbitalChannel`。
//!
//! ## 文件名约定
//! ```text
//! {seed}_FATBANDS_at{iatom:04}_{species}_is{spin}_l{l:04}        # 仅 l
//! {seed}_FATBANDS_at{iatom:04}_{species}_is{spin}_l{l}_m{m:+}   # l 和 m
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/band.rs` 和 `bands/plot.rs` 使用
//! - 使用 `regex` 解码文件名

use regex::Regex;
use serde::{Deserialize, Serialize};

/// 轨道角动量通道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbitalChannel {
    /// 角量子数 l
    pub l: u32,
    /// 磁量子数 m（分辨 m 的输出才有）
    pub m: Option<i32>,
}

impl OrbitalChannel {
    pub fn new(l: u32, m: Option<i32>) -> Self {
        OrbitalChannel { l, m }
    }

    /// 按文件名约定拼出 fatband 数据文件名
    pub fn fatband_filename(&self, seed: &str, iatom: u32, species: &str, spin: u32) -> String {
        match self.m {
            None => format!(
                "{}_FATBANDS_at{:04}_{}_is{}_l{:04}",
                seed, iatom, species, spin, self.l
            ),
            Some(m) => format!(
                "{}_FATBANDS_at{:04}_{}_is{}_l{}_m{:+}",
                seed, iatom, species, spin, self.l, m
            ),
        }
    }

    /// 从 fatband 文件名解码通道
    pub fn from_filename(name: &str) -> Option<OrbitalChannel> {
        let re = Regex::new(r"_l(\d+)(?:_m([+-]\d+))?$").ok()?;
        let caps = re.captures(name)?;

        let l: u32 = caps.get(1)?.as_str().parse().ok()?;
        let m = match caps.get(2) {
            Some(s) => Some(s.as_str().parse::<i32>().ok()?),
            None => None,
        };

        Some(OrbitalChannel { l, m })
    }

    /// 图标题
    pub fn title(&self) -> String {
        match self.m {
            None => format!("l = {}", self.l),
            Some(m) => format!("l = {}, m = {}", self.l, m),
        }
    }

    /// 误差棒配色索引：分辨 m 时按 m 取色，否则按 l 取色
    pub fn palette_index(&self, palette_len: usize) -> usize {
        let raw = match self.m {
            Some(m) => m,
            None => self.l as i32,
        };
        raw.rem_euclid(palette_len as i32) as usize
    }
}

impl std::fmt::Display for OrbitalChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.m {
            None => write!(f, "l{}", self.l),
            Some(m) => write!(f, "l{}_m{:+}", self.l, m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_l_only() {
        let ch = OrbitalChannel::new(2, None);
        assert_eq!(
            ch.fatband_filename("Pt_band_o_DS2", 1, "Pt", 1),
            "Pt_band_o_DS2_FATBANDS_at0001_Pt_is1_l0002"
        );
    }

    #[test]
    fn test_filename_with_m() {
        let ch = OrbitalChannel::new(2, Some(-1));
        assert_eq!(
            ch.fatband_filename("NiO_o_DS2", 1, "Ni", 1),
            "NiO_o_DS2_FATBANDS_at0001_Ni_is1_l2_m-1"
        );

        let ch = OrbitalChannel::new(1, Some(1));
        assert_eq!(
            ch.fatband_filename("NiO_o_DS2", 2, "O", 2),
            "NiO_o_DS2_FATBANDS_at0002_O_is2_l1_m+1"
        );
    }

    #[test]
    fn test_from_filename_round_trip() {
        for ch in [
            OrbitalChannel::new(0, None),
            OrbitalChannel::new(3, None),
            OrbitalChannel::new(2, Some(0)),
            OrbitalChannel::new(2, Some(-2)),
            OrbitalChannel::new(1, Some(1)),
        ] {
            let name = ch.fatband_filename("X_o_DS2", 1, "X", 1);
            assert_eq!(OrbitalChannel::from_filename(&name), Some(ch));
        }
    }

    #[test]
    fn test_from_filename_rejects_unrelated() {
        assert_eq!(OrbitalChannel::from_filename("POSCAR"), None);
        assert_eq!(OrbitalChannel::from_filename("band.log"), None);
    }

    #[test]
    fn test_palette_index_wraps_negative_m() {
        assert_eq!(OrbitalChannel::new(2, None).palette_index(10), 2);
        assert_eq!(OrbitalChannel::new(2, Some(-1)).palette_index(10), 9);
        assert_eq!(OrbitalChannel::new(2, Some(1)).palette_index(10), 1);
    }

    #[test]
    fn test_title() {
        assert_eq!(OrbitalChannel::new(2, None).title(), "l = 2");
        assert_eq!(OrbitalChannel::new(2, Some(-1)).title(), "l = 2, m = -1");
    }
}
