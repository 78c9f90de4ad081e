//! # 晶体结构数据模型
//!
//! 定义统一的晶体结构表示和布拉维格子分类。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `bands/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// 晶格参数表示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// 从晶格参数 (a, b, c, alpha, beta, gamma) 创建晶格
    /// 角度单位：度
    pub fn from_parameters(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        let alpha_rad = alpha.to_radians();
        let beta_rad = beta.to_radians();
        let gamma_rad = gamma.to_radians();

        // 计算晶格向量
        let cos_alpha = alpha_rad.cos();
        let cos_beta = beta_rad.cos();
        let cos_gamma = gamma_rad.cos();
        let sin_gamma = gamma_rad.sin();

        let a_vec = [a, 0.0, 0.0];
        let b_vec = [b * cos_gamma, b * sin_gamma, 0.0];

        let c1 = c * cos_beta;
        let c2 = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let c3 = (c * c - c1 * c1 - c2 * c2).sqrt();
        let c_vec = [c1, c2, c3];

        Lattice {
            matrix: [a_vec, b_vec, c_vec],
        }
    }

    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: [[f64; 3]; 3]) -> Self {
        Lattice { matrix }
    }

    /// 获取晶格参数 (a, b, c, alpha, beta, gamma)
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let a_vec = self.matrix[0];
        let b_vec = self.matrix[1];
        let c_vec = self.matrix[2];

        let a = norm(&a_vec);
        let b = norm(&b_vec);
        let c = norm(&c_vec);

        let alpha = (dot(&b_vec, &c_vec) / (b * c)).acos().to_degrees();
        let beta = (dot(&a_vec, &c_vec) / (a * c)).acos().to_degrees();
        let gamma = (dot(&a_vec, &b_vec) / (a * b)).acos().to_degrees();

        (a, b, c, alpha, beta, gamma)
    }

    /// 计算晶格体积
    pub fn volume(&self) -> f64 {
        let a = self.matrix[0];
        let b = self.matrix[1];
        let c = self.matrix[2];

        dot(&a, &cross(&b, &c))
    }

    /// 计算倒格矢矩阵（含 2π 因子）
    ///
    /// 行向量为 b1 = 2π(b×c)/V, b2 = 2π(c×a)/V, b3 = 2π(a×b)/V。
    pub fn reciprocal(&self) -> [[f64; 3]; 3] {
        let m = self.matrix;

        let a = m[0];
        let b = m[1];
        let c = m[2];

        let volume = self.volume();
        if volume.abs() < 1e-10 {
            return [[0.0; 3]; 3];
        }

        let b_cross_c = cross(&b, &c);

        let c_cross_a = cross(&c, &a);
        let a_cross_b = cross(&a, &b);

        let factor = 2.0 * PI / volume;

        [
            [
                b_cross_c[0] * factor,
                b_cross_c[1] * factor,
                b_cross_c[2] * factor,
            ],
            [
                c_cross_a[0] * factor,
                c_cross_a[1] * factor,
                c_cross_a[2] * factor,
            ],
            [
                a_cross_b[0] * factor,
                a_cross_b[1] * factor,
                a_cross_b[2] * factor,
            ],
        ]
    }
}

/// 布拉维格子分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatticeKind {
    /// 简单立方
    Cubic,
    /// 面心立方（原胞）
    Fcc,
    /// 体心立方（原胞）
    Bcc,
    /// 四方
    Tetragonal,
    /// 正交
    Orthorhombic,
    /// 六角
    Hexagonal,
}

impl std::fmt::Display for LatticeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LatticeKind::Cubic => write!(f, "cubic"),
            LatticeKind::Fcc => write!(f, "fcc"),
            LatticeKind::Bcc => write!(f, "bcc"),
            LatticeKind::Tetragonal => write!(f, "tetragonal"),
            LatticeKind::Orthorhombic => write!(f, "orthorhombic"),
            LatticeKind::Hexagonal => write!(f, "hexagonal"),
        }
    }
}

/// 长度相对容差
const LEN_TOL: f64 = 1e-3;
/// 角度容差（度）
const ANG_TOL: f64 = 0.1;
/// 体心立方原胞的轴间角 arccos(-1/3)
const BCC_ANGLE: f64 = 109.47122063449069;

impl LatticeKind {
    /// 从晶格向量推断布拉维格子类型
    ///
    /// 基于 (a, b, c, α, β, γ) 的容差比较，只覆盖常见高对称族；
    /// 无法分类时返回 None，由调用方显式指定。
    pub fn detect(lattice: &Lattice) -> Option<LatticeKind> {
        let (a, b, c, alpha, beta, gamma) = lattice.parameters();

        let len_eq = |x: f64, y: f64| ((x - y) / y).abs() < LEN_TOL;
        let ang_eq = |x: f64, y: f64| (x - y).abs() < ANG_TOL;

        let all_lengths_equal = len_eq(a, b) && len_eq(b, c);
        let all_right = ang_eq(alpha, 90.0) && ang_eq(beta, 90.0) && ang_eq(gamma, 90.0);

        if all_lengths_equal {
            if all_right {
                return Some(LatticeKind::Cubic);
            }
            if ang_eq(alpha, 60.0) && ang_eq(beta, 60.0) && ang_eq(gamma, 60.0) {
                return Some(LatticeKind::Fcc);
            }
            if ang_eq(alpha, BCC_ANGLE) && ang_eq(beta, BCC_ANGLE) && ang_eq(gamma, BCC_ANGLE) {
                return Some(LatticeKind::Bcc);
            }
        }

        if len_eq(a, b) && ang_eq(alpha, 90.0) && ang_eq(beta, 90.0) && ang_eq(gamma, 120.0) {
            return Some(LatticeKind::Hexagonal);
        }

        if all_right {
            if len_eq(a, b) || len_eq(b, c) || len_eq(a, c) {
                return Some(LatticeKind::Tetragonal);
            }
            return Some(LatticeKind::Orthorhombic);
        }

        None
    }
}

/// 原子信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Atom {
    /// 元素符号
    pub element: String,

    /// 分数坐标 [x, y, z]
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            element: element.into(),
            position,
        }
    }
}

/// 晶体结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crystal {
    /// 结构名称
    pub name: String,

    /// 晶格
    pub lattice: Lattice,

    /// 原子列表
    pub atoms: Vec<Atom>,

    /// 布拉维格子分类（解析后标注，一经构造不再修改）
    pub kind: Option<LatticeKind>,
}

impl Crystal {
    pub fn new(name: impl Into<String>, lattice: Lattice, atoms: Vec<Atom>) -> Self {
        let kind = LatticeKind::detect(&lattice);
        Crystal {
            name: name.into(),
            lattice,
            atoms,
            kind,
        }
    }

    /// 计算化学式
    pub fn formula(&self) -> String {
        use std::collections::BTreeMap;
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

        for atom in &self.atoms {
            *counts.entry(atom.element.as_str()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(el, count)| {
                if count == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

/// 向量叉积
fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// 向量点积
fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// 向量模长
fn norm(a: &[f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pt 原胞 (a = 3.92 Å 的面心立方)
    fn fcc_primitive(a: f64) -> Lattice {
        let h = a / 2.0;
        Lattice::from_vectors([[0.0, h, h], [h, 0.0, h], [h, h, 0.0]])
    }

    fn bcc_primitive(a: f64) -> Lattice {
        let h = a / 2.0;
        Lattice::from_vectors([[-h, h, h], [h, -h, h], [h, h, -h]])
    }

    #[test]
    fn test_lattice_from_parameters_cubic() {
        let lattice = Lattice::from_parameters(5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
        let (a, b, c, alpha, beta, gamma) = lattice.parameters();

        assert!((a - 5.0).abs() < 1e-6);
        assert!((b - 5.0).abs() < 1e-6);
        assert!((c - 5.0).abs() < 1e-6);
        assert!((alpha - 90.0).abs() < 1e-6);
        assert!((beta - 90.0).abs() < 1e-6);
        assert!((gamma - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_lattice_volume_cubic() {
        let lattice = Lattice::from_parameters(5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
        let vol = lattice.volume().abs();

        // 5^3 = 125
        assert!((vol - 125.0).abs() < 1e-6);
    }

    #[test]
    fn test_reciprocal_simple_cubic() {
        let a = 4.0;
        let lattice = Lattice::from_vectors([[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]]);
        let recip = lattice.reciprocal();

        let expected = 2.0 * PI / a;
        assert!((recip[0][0] - expected).abs() < 1e-10);
        assert!((recip[1][1] - expected).abs() < 1e-10);
        assert!((recip[2][2] - expected).abs() < 1e-10);
        assert!(recip[0][1].abs() < 1e-10);
        assert!(recip[0][2].abs() < 1e-10);
    }

    #[test]
    fn test_detect_fcc_primitive() {
        assert_eq!(
            LatticeKind::detect(&fcc_primitive(3.92)),
            Some(LatticeKind::Fcc)
        );
    }

    #[test]
    fn test_detect_bcc_primitive() {
        assert_eq!(
            LatticeKind::detect(&bcc_primitive(2.87)),
            Some(LatticeKind::Bcc)
        );
    }

    #[test]
    fn test_detect_cubic_and_hexagonal() {
        let cubic = Lattice::from_parameters(5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
        assert_eq!(LatticeKind::detect(&cubic), Some(LatticeKind::Cubic));

        let hex = Lattice::from_parameters(3.0, 3.0, 5.0, 90.0, 90.0, 120.0);
        assert_eq!(LatticeKind::detect(&hex), Some(LatticeKind::Hexagonal));
    }

    #[test]
    fn test_detect_tetragonal_orthorhombic() {
        let tet = Lattice::from_parameters(3.0, 3.0, 5.0, 90.0, 90.0, 90.0);
        assert_eq!(LatticeKind::detect(&tet), Some(LatticeKind::Tetragonal));

        let ortho = Lattice::from_parameters(3.0, 4.0, 5.0, 90.0, 90.0, 90.0);
        assert_eq!(LatticeKind::detect(&ortho), Some(LatticeKind::Orthorhombic));
    }

    #[test]
    fn test_detect_unclassified() {
        let triclinic = Lattice::from_parameters(3.0, 4.0, 5.0, 80.0, 95.0, 100.0);
        assert_eq!(LatticeKind::detect(&triclinic), None);
    }

    #[test]
    fn test_crystal_formula_and_kind() {
        let crystal = Crystal::new(
            "Pt",
            fcc_primitive(3.92),
            vec![Atom::new("Pt", [0.0, 0.0, 0.0])],
        );

        assert_eq!(crystal.formula(), "Pt");
        assert_eq!(crystal.kind, Some(LatticeKind::Fcc));
    }
}
