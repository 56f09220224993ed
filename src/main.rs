//! # Bohrcalc - 玻尔模型电子跃迁能量计算器
//!
//! 交互式控制台程序：根据玻尔模型计算类氢原子中电子跃迁释放的能量，
//! 循环接受用户输入直到用户选择退出。
//!
//! ## 计算流程
//! - 输入原子序数 Z 与初末主量子数 n₁、n₂
//! - 校验 n₁ > n₂（跃迁必须向低能级）
//! - 选择能量单位（电子伏特或焦耳）
//! - 按 E = R·Z²·(1/n₂² − 1/n₁²) 计算并以 3 位有效数字输出
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (交互循环执行逻辑)
//!   ├── input/      (行输入读取器)
//!   ├── physics/    (玻尔模型公式)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod input;
mod physics;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let _cli = Cli::parse();

    if let Err(e) = commands::run() {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
