//! # 输入处理模块
//!
//! 通用的行输入读取器，以及面向领域语义的两个适配器：
//! 能量单位选择与是否继续。
//!
//! ## 依赖关系
//! - 被 `commands/session.rs` 使用
//! - 使用 `physics/` 的 EnergyUnit
//! - 子模块: reader

pub mod reader;

pub use reader::{read_bounded_integer, read_choice, Choice};

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::physics::EnergyUnit;

/// 电子伏特的同义词（大小写不敏感）
const ELECTRON_VOLT_SYNONYMS: &[&str] = &[
    "e",
    "ev",
    "electron volt",
    "electronvolt",
    "electron-volt",
    "electron volts",
    "electronvolts",
    "electron-volts",
];

/// 焦耳的同义词
const JOULE_SYNONYMS: &[&str] = &["j", "joule", "joules"];

/// 表示继续的同义词
const CONTINUE_SYNONYMS: &[&str] = &["yes", "y", "true", "1"];

/// 表示停止的同义词
const STOP_SYNONYMS: &[&str] = &["no", "n", "false", "0"];

/// 读取能量单位选择
pub fn read_energy_unit<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<EnergyUnit> {
    let choice = read_choice(
        reader,
        writer,
        "Electron-volts or joules? ['e', 'J']:",
        ELECTRON_VOLT_SYNONYMS,
        JOULE_SYNONYMS,
    )?;
    match choice {
        Choice::Accept => Ok(EnergyUnit::ElectronVolt),
        Choice::Reject => Ok(EnergyUnit::Joule),
    }
}

/// 读取是否继续的选择
pub fn read_continue<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<bool> {
    let choice = read_choice(
        reader,
        writer,
        "Yay, or nay? [y/n]:",
        CONTINUE_SYNONYMS,
        STOP_SYNONYMS,
    )?;
    Ok(choice == Choice::Accept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn unit_of(input: &str) -> EnergyUnit {
        let mut reader = Cursor::new(input.to_string());
        let mut output = Vec::new();
        read_energy_unit(&mut reader, &mut output).unwrap()
    }

    fn continue_of(input: &str) -> bool {
        let mut reader = Cursor::new(input.to_string());
        let mut output = Vec::new();
        read_continue(&mut reader, &mut output).unwrap()
    }

    #[test]
    fn test_energy_unit_synonyms() {
        assert_eq!(unit_of("e\n"), EnergyUnit::ElectronVolt);
        assert_eq!(unit_of("EV\n"), EnergyUnit::ElectronVolt);
        assert_eq!(unit_of("Electron-Volts\n"), EnergyUnit::ElectronVolt);
        assert_eq!(unit_of("J\n"), EnergyUnit::Joule);
        assert_eq!(unit_of("joules\n"), EnergyUnit::Joule);
    }

    #[test]
    fn test_energy_unit_reprompts_on_unknown() {
        let mut reader = Cursor::new("watt\nev\n".to_string());
        let mut output = Vec::new();
        let unit = read_energy_unit(&mut reader, &mut output).unwrap();
        assert_eq!(unit, EnergyUnit::ElectronVolt);
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Electron-volts or joules? ['e', 'J']:"));
    }

    #[test]
    fn test_continue_synonyms() {
        assert!(continue_of("yes\n"));
        assert!(continue_of("Y\n"));
        assert!(continue_of("TRUE\n"));
        assert!(continue_of("1\n"));
        assert!(!continue_of("no\n"));
        assert!(!continue_of("N\n"));
        assert!(!continue_of("false\n"));
        assert!(!continue_of("0\n"));
    }
}
