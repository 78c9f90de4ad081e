//! # init 子命令实现
//!
//! 生成单元素原胞并写出 POSCAR。结构文件已存在时跳过，除非
//! --force。
//!
//! ## 依赖关系
//! - 使用 `cli/init.rs` 定义的 InitArgs
//! - 使用 `models/structure.rs` 和 `parsers/poscar.rs`

use crate::cli::init::{GeneratedLattice, InitArgs};
use crate::error::{BandkitError, Result};
use crate::models::{Atom, Crystal, Lattice};
use crate::parsers::poscar;
use crate::utils::output;

use std::fs;

/// 执行 init 命令
pub fn execute(args: InitArgs) -> Result<()> {
    output::print_header("Structure Initialization");

    if args.alat <= 0.0 {
        return Err(BandkitError::InvalidArgument(format!(
            "lattice constant must be positive, got {}",
            args.alat
        )));
    }

    if args.output.exists() && !args.force {
        output::print_skip(&format!(
            "{} already exists, use --force to overwrite",
            args.output.display()
        ));
        return Ok(());
    }

    let lattice = primitive_lattice(args.lattice, args.alat);
    let crystal = Crystal::new(
        args.element.clone(),
        lattice,
        vec![Atom::new(args.element.clone(), [0.0, 0.0, 0.0])],
    );

    let content = poscar::to_poscar_string(&crystal);
    fs::write(&args.output, content).map_err(|e| BandkitError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    output::print_success(&format!(
        "{} {} cell (a = {} Å) written to {}",
        args.element,
        args.lattice,
        args.alat,
        args.output.display()
    ));

    Ok(())
}

/// 常规晶格常数 a 对应的原胞晶格
fn primitive_lattice(kind: GeneratedLattice, a: f64) -> Lattice {
    let h = a / 2.0;
    match kind {
        GeneratedLattice::Cubic => {
            Lattice::from_vectors([[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]])
        }
        GeneratedLattice::Fcc => {
            Lattice::from_vectors([[0.0, h, h], [h, 0.0, h], [h, h, 0.0]])
        }
        GeneratedLattice::Bcc => {
            Lattice::from_vectors([[-h, h, h], [h, -h, h], [h, h, -h]])
        }
    }
}
