//! # 命令执行模块
//!
//! 实现程序的业务逻辑。本程序只有一个交互式会话，没有子命令。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `input/`, `physics/`, `utils/`
//! - 子模块: session

pub mod session;

use crate::error::Result;

/// 执行交互式会话
pub fn run() -> Result<()> {
    session::execute()
}
