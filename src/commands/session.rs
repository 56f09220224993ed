//! # 交互式会话
//!
//! 程序的主循环：收集跃迁描述 → 校验能级顺序 → 选择单位 →
//! 计算 → 输出 → 询问是否继续。
//!
//! 状态机（隐式）：
//! ```text
//! CollectSpec → ValidateOrdering → CollectUnit → Compute → Report → AskContinue
//!      ↑              |                                                  |
//!      └── 顺序违规 ───┘                    继续 ──────────────────────────┘
//! ```
//!
//! 循环体对 `BufRead`/`Write` 泛型，端到端场景可以用脚本化
//! 输入直接测试。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `input/`, `physics/`, `utils/format`, `utils/output`

use std::io::{self, BufRead, Write};

use crate::error::Result;
use crate::input;
use crate::physics::{bohr_energy, TransitionSpec};
use crate::utils::format::format_significant;
use crate::utils::output;

/// 量子数与原子序数的输入上限
///
/// 计算前整数会提升为 f64，上限取 u32 的范围即可。
const MAX_QUANTUM_INPUT: i64 = u32::MAX as i64;

/// 绑定标准输入输出并运行会话
pub fn execute() -> Result<()> {
    output::print_header("Welcome to the electron transition energy calculator!");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();
    run_session(&mut reader, &mut writer)
}

/// 交互循环主体
pub fn run_session<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<()> {
    loop {
        // 收集跃迁描述：Z、n₁、n₂，均为正整数
        writeln!(
            writer,
            "\nPlease specify a value for the atomic number of the system under consideration."
        )?;
        let atomic_number =
            input::read_bounded_integer(reader, writer, 1, MAX_QUANTUM_INPUT)? as u32;

        writeln!(
            writer,
            "\nPlease specify a value for the initial principal quantum number of the electron under consideration."
        )?;
        let n_initial = input::read_bounded_integer(reader, writer, 1, MAX_QUANTUM_INPUT)? as u32;

        writeln!(
            writer,
            "\nPlease specify a value for the final principal quantum number of the electron under consideration."
        )?;
        let n_final = input::read_bounded_integer(reader, writer, 1, MAX_QUANTUM_INPUT)? as u32;

        let spec = TransitionSpec {
            atomic_number,
            n_initial,
            n_final,
        };

        // 顺序违规：丢弃整组输入重新收集，不询问是否继续
        if !spec.is_emissive() {
            writeln!(
                writer,
                "\nThe initial principal quantum number must be greater than the final principal quantum number!"
            )?;
            writeln!(writer, "Let's start again!")?;
            continue;
        }

        writeln!(
            writer,
            "\nDo you want the results in electron-volts or joules?"
        )?;
        let unit = input::read_energy_unit(reader, writer)?;

        let energy = bohr_energy(&spec, unit);

        writeln!(
            writer,
            "\nFor a ({}, {}, {}) transition the energy was calculated to be:",
            spec.atomic_number, spec.n_initial, spec.n_final
        )?;
        writeln!(
            writer,
            "    E = {}{}",
            format_significant(energy, 3),
            unit.suffix()
        )?;

        writeln!(writer, "\nDo you wish to continue? [y/n]:")?;
        if !input::read_continue(reader, writer)? {
            return Ok(());
        }
    }
}
