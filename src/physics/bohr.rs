//! # 玻尔模型能量计算
//!
//! 类氢原子（单电子体系）中电子跃迁能量的闭式公式。
//!
//! ## 公式
//! ```text
//! E = R · Z² · (1/n_f² − 1/n_i²)
//! ```
//! 其中 R 为里德伯常量（以电子伏特表示）。当 n_i > n_f 时
//! 1/n_f² > 1/n_i²，E 为正值，对应跃迁向低能级释放的能量。
//!
//! ## 依赖关系
//! - 被 `commands/session.rs` 调用
//! - 无外部模块依赖

/// 里德伯常量（电子伏特）
pub const RYDBERG_CONSTANT_EV: f64 = 13.60569300984;

/// 电子伏特到焦耳的换算常数
///
/// 注意：这是元电荷的低精度近似值，输出数值依赖此精度，
/// 勿替换为 CODATA 高精度值。
pub const EV_TO_JOULES: f64 = 1.6e-19;

/// 能量单位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyUnit {
    ElectronVolt,
    Joule,
}

impl EnergyUnit {
    /// 输出时附在数值后的单位符号
    pub fn suffix(&self) -> &'static str {
        match self {
            EnergyUnit::ElectronVolt => "eV",
            EnergyUnit::Joule => "J",
        }
    }
}

/// 一次跃迁的完整描述
///
/// 三个正整数：原子序数 Z 与初末主量子数。仅在一次循环迭代内
/// 存活，构造后不再修改。
#[derive(Debug, Clone, Copy)]
pub struct TransitionSpec {
    /// 原子序数 Z
    pub atomic_number: u32,
    /// 初始主量子数 n₁
    pub n_initial: u32,
    /// 末态主量子数 n₂
    pub n_final: u32,
}

impl TransitionSpec {
    /// 跃迁是否向低能级（发射型）
    ///
    /// 调用方要求 n₁ > n₂；n₁ < n₂ 时整组输入被丢弃重新收集。
    pub fn is_emissive(&self) -> bool {
        self.n_initial >= self.n_final
    }
}

/// 计算电子跃迁能量
///
/// 纯函数，无副作用。整数先提升为浮点再取平方；Z = 0 不做特殊处理。
/// `Joule` 时对电子伏特结果乘以固定换算常数。
pub fn bohr_energy(spec: &TransitionSpec, unit: EnergyUnit) -> f64 {
    let z = f64::from(spec.atomic_number);
    let n_initial = f64::from(spec.n_initial);
    let n_final = f64::from(spec.n_final);

    let energy =
        RYDBERG_CONSTANT_EV * z.powi(2) * (1.0 / n_final.powi(2) - 1.0 / n_initial.powi(2));

    match unit {
        EnergyUnit::ElectronVolt => energy,
        EnergyUnit::Joule => energy * EV_TO_JOULES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(z: u32, n_initial: u32, n_final: u32) -> TransitionSpec {
        TransitionSpec {
            atomic_number: z,
            n_initial,
            n_final,
        }
    }

    #[test]
    fn test_emission_is_positive() {
        // 所有 n₁ > n₂ ≥ 1、Z ≥ 1 的组合都应释放能量
        for z in 1..=5 {
            for n_final in 1..=4 {
                for n_initial in (n_final + 1)..=6 {
                    let e = bohr_energy(&spec(z, n_initial, n_final), EnergyUnit::ElectronVolt);
                    assert!(
                        e > 0.0,
                        "expected positive energy for Z={} n_i={} n_f={}",
                        z,
                        n_initial,
                        n_final
                    );
                }
            }
        }
    }

    #[test]
    fn test_hydrogen_lyman_alpha() {
        // H 的 2→1 跃迁: E = 13.60569300984 × (1 − 1/4) = 10.2043 eV
        let e = bohr_energy(&spec(1, 2, 1), EnergyUnit::ElectronVolt);
        assert!((e - 10.20426975738).abs() < 1e-9);
    }

    #[test]
    fn test_joule_conversion_is_exact_multiply() {
        // 焦耳结果必须与电子伏特结果做同一次浮点乘法完全一致
        let s = spec(2, 3, 1);
        let ev = bohr_energy(&s, EnergyUnit::ElectronVolt);
        let j = bohr_energy(&s, EnergyUnit::Joule);
        assert_eq!(j, ev * EV_TO_JOULES);
    }

    #[test]
    fn test_helium_like_joules() {
        // Z=2, 3→1: E_eV = 13.60569300984 × 4 × (1 − 1/9) ≈ 48.3758 eV
        let ev = bohr_energy(&spec(2, 3, 1), EnergyUnit::ElectronVolt);
        assert!((ev - 48.37579737).abs() < 1e-6);
        let j = bohr_energy(&spec(2, 3, 1), EnergyUnit::Joule);
        assert!((j - 7.740e-18).abs() < 1e-20);
    }

    #[test]
    fn test_pure_function() {
        let s = spec(3, 5, 2);
        let first = bohr_energy(&s, EnergyUnit::ElectronVolt);
        let second = bohr_energy(&s, EnergyUnit::ElectronVolt);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_atomic_number_not_special_cased() {
        let e = bohr_energy(&spec(0, 2, 1), EnergyUnit::ElectronVolt);
        assert_eq!(e, 0.0);
    }

    #[test]
    fn test_is_emissive_ordering() {
        assert!(spec(1, 3, 1).is_emissive());
        assert!(spec(1, 2, 2).is_emissive());
        assert!(!spec(1, 1, 2).is_emissive());
    }
}
