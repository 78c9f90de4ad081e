//! # 工作目录清理工具
//!
//! 按 keep 列表清理计算工作目录：目录顶层中不匹配任何保留模式的
//! 文件和子目录全部删除。
//!
//! ## 依赖关系
//! - 被 `commands/clean.rs` 调用

use crate::error::{BandkitError, Result};

use std::fs;
use std::path::Path;

/// 单次清理的统计结果
#[derive(Debug, Default)]
pub struct CleanReport {
    /// 已删除的条目名
    pub removed: Vec<String>,
    /// 被保留的条目名
    pub kept: Vec<String>,
}

/// 清理工作目录
///
/// 遍历 `dir` 的顶层条目，名字不匹配任何 `keep` 模式的一律删除
/// （文件直接删除，目录递归删除）。删除时条目已不存在则忽略，
/// 其余 I/O 错误（如权限不足）向上传播。
///
/// `dry_run` 为 true 时只统计，不实际删除。
pub fn clean_workdir(dir: &Path, keep: &[String], dry_run: bool) -> Result<CleanReport> {
    if !dir.is_dir() {
        return Err(BandkitError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|e| BandkitError::FileReadError {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut report = CleanReport::default();

    for entry in entries.filter_map(|e| e.ok()) {
        let name = entry.file_name().to_string_lossy().to_string();

        if keep.iter().any(|pattern| glob_match(pattern, &name)) {
            report.kept.push(name);
            continue;
        }

        if !dry_run {
            let path = entry.path();
            let result = if path.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };

            match result {
                Ok(()) => {}
                // 并发删除或失效的目录项：当作已删除
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(BandkitError::RemoveError {
                        path: path.display().to_string(),
                        source: e,
                    })
                }
            }
        }

        report.removed.push(name);
    }

    Ok(report)
}

/// 简单 glob 匹配（支持 * 和 ? 通配符）
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern = pattern.as_bytes();
    let text = text.as_bytes();

    let mut p = 0;
    let mut t = 0;
    let mut star_p = None;
    let mut star_t = 0;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == b'?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == b'*' {
            star_p = Some(p);
            star_t = t;
            p += 1;
        } else if let Some(sp) = star_p {
            p = sp + 1;
            star_t += 1;
            t = star_t;
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == b'*' {
        p += 1;
    }

    p == pattern.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_match() {
        assert!(glob_match("*.abi", "Pt_band_.abi"));
        assert!(glob_match("*.sh", "Pt.sh"));
        assert!(!glob_match("*.abi", "Pt.sh"));
        assert!(glob_match("POSCAR*", "POSCAR"));
        assert!(glob_match("POSCAR*", "POSCAR_001"));
        assert!(glob_match("fig", "fig"));
        assert!(!glob_match("fig", "figure"));
        assert!(glob_match("band?.log", "band1.log"));
        assert!(!glob_match("band?.log", "band12.log"));
    }

    #[test]
    fn test_clean_workdir_keeps_and_removes() {
        let dir = std::env::temp_dir().join(format!("bandkit_clean_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("fig")).unwrap();
        fs::write(dir.join("run.sh"), "#!/bin/sh\n").unwrap();
        fs::write(dir.join("scratch.out"), "tmp\n").unwrap();
        fs::create_dir(dir.join("tmpdir")).unwrap();

        let keep = vec!["fig".to_string(), "*.sh".to_string()];
        let report = clean_workdir(&dir, &keep, false).unwrap();

        assert_eq!(report.removed.len(), 2);
        assert!(dir.join("fig").exists());
        assert!(dir.join("run.sh").exists());
        assert!(!dir.join("scratch.out").exists());
        assert!(!dir.join("tmpdir").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_clean_workdir_dry_run() {
        let dir = std::env::temp_dir().join(format!("bandkit_dry_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("scratch.out"), "tmp\n").unwrap();

        let report = clean_workdir(&dir, &[], true).unwrap();

        assert_eq!(report.removed, vec!["scratch.out".to_string()]);
        assert!(dir.join("scratch.out").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_clean_workdir_missing_dir() {
        let dir = std::env::temp_dir().join("bandkit_no_such_dir_xyzzy");
        assert!(clean_workdir(&dir, &[], false).is_err());
    }
}
