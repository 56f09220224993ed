//! # CLI 模块
//!
//! 使用 `clap` 定义命令行入口。
//!
//! 本程序是纯交互式的：不读取任何业务参数、配置文件或环境变量，
//! clap 仅提供 `--help` 与 `--version`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用

use clap::Parser;

/// Bohrcalc - 玻尔模型电子跃迁能量计算器
#[derive(Parser)]
#[command(name = "bohrcalc")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "An interactive Bohr model electron transition energy calculator", long_about = None)]
pub struct Cli {}
