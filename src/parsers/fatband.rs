//! # fatband 输出文件解析器
//!
//! 解析逐 k 点谱权重的定长文本记录，并按能带数切分成等长分组。
//!
//! ## 文件格式说明
//! ```text
//! # Abinit FATBANDS header          <- `#` `@` `&` 开头的行忽略
//! @    legend line
//!   0.000000   -5.123456   0.031415  <- distance  energy  weight
//!   1.000000   -5.098765   0.027182
//! &
//! ```
//! 数据行至少三列，多余列忽略；全部数据行数必须被能带数整除，
//! 第 i 组对应文件中第 i 条能带。
//!
//! ## 依赖关系
//! - 被 `commands/band.rs` 使用
//! - 使用 `models/band.rs`

use crate::error::{BandkitError, Result};
use crate::models::{BandRecord, BandSet};
use std::fs;
use std::path::Path;

/// 注释/标头行的起始标记
const COMMENT_MARKERS: [char; 3] = ['#', '@', '&'];

/// 解析 fatband 文件
pub fn parse_fatband_file(path: &Path, nband: usize) -> Result<BandSet> {
    if !path.exists() {
        return Err(BandkitError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| BandkitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_fatband_content(&content, &path.display().to_string(), nband)
}

/// 从字符串内容解析 fatband 记录
pub fn parse_fatband_content(content: &str, name: &str, nband: usize) -> Result<BandSet> {
    if nband == 0 {
        return Err(BandkitError::InvalidArgument(
            "band count must be at least 1".to_string(),
        ));
    }

    let malformed = |reason: String| BandkitError::MalformedRecord {
        path: name.to_string(),
        reason,
    };

    let mut rows: Vec<BandRecord> = Vec::new();

    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with(&COMMENT_MARKERS[..]) {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(malformed(format!(
                "line {}: expected at least 3 numeric fields, found {}",
                lineno + 1,
                fields.len()
            )));
        }

        let mut values = [0.0f64; 3];
        for (i, field) in fields.iter().take(3).enumerate() {
            values[i] = field.parse().map_err(|_| {
                malformed(format!(
                    "line {}: cannot parse numeric field '{}'",
                    lineno + 1,
                    field
                ))
            })?;
        }

        rows.push(BandRecord {
            distance: values[0],
            energy: values[1],
            weight: values[2],
        });
    }

    if rows.len() % nband != 0 {
        return Err(malformed(format!(
            "{} data rows cannot be split into {} equal bands",
            rows.len(),
            nband
        )));
    }

    let rows_per_band = rows.len() / nband;
    let mut bands: Vec<Vec<BandRecord>> = Vec::with_capacity(nband);
    let mut rest = rows.as_slice();
    for _ in 0..nband {
        let (group, tail) = rest.split_at(rows_per_band);
        bands.push(group.to_vec());
        rest = tail;
    }

    Ok(BandSet::from_groups(bands))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 生成 nrows 条合成数据行，随带若干标头行
    fn synthetic(nrows: usize) -> String {
        let mut s = String::from("# fatband header\n@ legend\n");
        for i in 0..nrows {
            s.push_str(&format!("{} {:.6} {:.6}\n", i % 300, -5.0 + i as f64 * 1e-3, 0.01));
        }
        s.push_str("&\n");
        s
    }

    #[test]
    fn test_parse_splits_into_equal_bands() {
        let content = synthetic(12000);
        let set = parse_fatband_content(&content, "test", 30).unwrap();

        assert_eq!(set.nbands(), 30);
        assert_eq!(set.rows_per_band(), 400);
        for band in set.iter() {
            assert_eq!(band.len(), 400);
        }
    }

    #[test]
    fn test_parse_preserves_row_order() {
        let content = "\
1 -1.0 0.1
2 -2.0 0.2
3 -3.0 0.3
4 -4.0 0.4
";
        let set = parse_fatband_content(content, "test", 2).unwrap();
        let flat: Vec<f64> = set.iter().flatten().map(|r| r.distance).collect();
        assert_eq!(flat, vec![1.0, 2.0, 3.0, 4.0]);

        let first: Vec<f64> = set.iter().next().unwrap().iter().map(|r| r.energy).collect();
        assert_eq!(first, vec![-1.0, -2.0]);
    }

    #[test]
    fn test_parse_rejects_indivisible_row_count() {
        let content = synthetic(12001);
        let err = parse_fatband_content(&content, "test", 30).unwrap_err();
        assert!(matches!(err, BandkitError::MalformedRecord { .. }));
    }

    #[test]
    fn test_comment_and_blank_lines_excluded() {
        let content = "\
# header
0 -1.0 0.1

@ G
1 -1.1 0.2
& legend
2 -1.2 0.3
3 -1.3 0.4
";
        let set = parse_fatband_content(content, "test", 2).unwrap();
        assert_eq!(set.nbands(), 2);
        assert_eq!(set.rows_per_band(), 2);
    }

    #[test]
    fn test_extra_fields_tolerated() {
        // 前三列之外的列不参与解析
        let set = parse_fatband_content("0 -1.0 0.1 0.9 1.2\n", "test", 1).unwrap();
        assert_eq!(set.rows_per_band(), 1);
    }

    #[test]
    fn test_short_row_rejected() {
        let err = parse_fatband_content("0 -1.0\n", "test", 1).unwrap_err();
        assert!(matches!(err, BandkitError::MalformedRecord { .. }));
    }

    #[test]
    fn test_non_numeric_field_rejected() {
        let err = parse_fatband_content("0 abc 0.1\n", "test", 1).unwrap_err();
        assert!(matches!(err, BandkitError::MalformedRecord { .. }));
    }

    #[test]
    fn test_zero_band_count_rejected() {
        let err = parse_fatband_content("0 -1.0 0.1\n", "test", 0).unwrap_err();
        assert!(matches!(err, BandkitError::InvalidArgument(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_fatband_file(Path::new("no_such_fatband_file"), 1).unwrap_err();
        assert!(matches!(err, BandkitError::FileNotFound { .. }));
    }
}
