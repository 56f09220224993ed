//! # 统一错误处理模块
//!
//! 定义 Bohrcalc 的所有错误类型，使用 `thiserror` 派生。
//!
//! 所有格式错误的用户输入都在读取器内部通过重新提示恢复，
//! 不构成错误；这里只剩控制台流本身失效的情况。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Bohrcalc 统一错误类型
#[derive(Error, Debug)]
pub enum BohrcalcError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 输入流终止
    // ─────────────────────────────────────────────────────────────
    #[error("Input stream ended before a valid {expected} was provided")]
    UnexpectedEof { expected: &'static str },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BohrcalcError>;
