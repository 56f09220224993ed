//! # 物理模型模块
//!
//! 玻尔模型的常量与能量公式。
//!
//! ## 依赖关系
//! - 被 `commands/`、`input/` 模块使用
//! - 子模块: bohr

pub mod bohr;

pub use bohr::{bohr_energy, EnergyUnit, TransitionSpec, EV_TO_JOULES, RYDBERG_CONSTANT_EV};
