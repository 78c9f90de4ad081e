//! # 能带数据导出
//!
//! 导出离散化 k 路径和解析后的能带记录到 CSV。
//!
//! ## 依赖关系
//! - 被 `commands/kpath.rs` 和 `commands/band.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::bands::KpointPath;
use crate::error::{BandkitError, Result};
use crate::models::BandSet;

use std::path::Path;

/// 导出 k 路径为 CSV 格式
pub fn kpath_to_csv(kpath: &KpointPath, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["index", "distance", "kx", "ky", "kz"])?;

    for (i, (kpt, dist)) in kpath.kpoints.iter().zip(kpath.distances.iter()).enumerate() {
        wtr.write_record(&[
            i.to_string(),
            format!("{:.6}", dist),
            format!("{:.6}", kpt[0]),
            format!("{:.6}", kpt[1]),
            format!("{:.6}", kpt[2]),
        ])?;
    }

    wtr.flush().map_err(|e| BandkitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出能带记录为 CSV 格式
pub fn bands_to_csv(bands: &BandSet, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["band", "distance", "energy", "weight"])?;

    for (iband, band) in bands.iter().enumerate() {
        for record in band {
            wtr.write_record(&[
                (iband + 1).to_string(),
                format!("{:.6}", record.distance),
                format!("{:.6}", record.energy),
                format!("{:.6}", record.weight),
            ])?;
        }
    }

    wtr.flush().map_err(|e| BandkitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
