//! # 行输入读取器
//!
//! 从行缓冲输入流读取有界整数与二选一选项，解析失败时
//! 重新提示，直到获得有效输入。输入流耗尽视为终止错误。
//!
//! 读取器对 `BufRead`/`Write` 泛型，便于在测试中用
//! `Cursor`/`Vec<u8>` 驱动。
//!
//! ## 依赖关系
//! - 被 `input/mod.rs` 与 `commands/session.rs` 使用
//! - 使用 `error.rs`

use std::io::{BufRead, Write};

use crate::error::{BohrcalcError, Result};

/// 二选一选项的匹配结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// 输入命中第一组字符串
    Accept,
    /// 输入命中第二组字符串
    Reject,
}

/// 从行首解析最长的整数前缀
///
/// 返回解析出的值与行内剩余文本。用 `i128` 作为中间表示，
/// 保证"没有解析到数字"与极端合法值可以区分开。
fn parse_leading_integer(line: &str) -> Option<(i128, &str)> {
    let s = line.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digit_len = digits
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digit_len == 0 {
        return None;
    }

    // 超出 i128 的数字串直接视为无效
    let magnitude: i128 = digits[..digit_len].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    Some((value, &digits[digit_len..]))
}

/// 读取 `[min, max]` 范围内的整数
///
/// 每行尝试解析最长整数前缀；要求 (a) 确有数字、(b) 落在范围内、
/// (c) 数字之后只剩空白。不满足时打印范围提示并重新读取。
pub fn read_bounded_integer<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    min: i64,
    max: i64,
) -> Result<i64> {
    let mut line = String::new();
    loop {
        line.clear();
        let bytes = reader.read_line(&mut line)?;
        if bytes == 0 {
            return Err(BohrcalcError::UnexpectedEof { expected: "integer" });
        }

        if let Some((value, rest)) = parse_leading_integer(&line) {
            if value >= i128::from(min) && value <= i128::from(max) && rest.trim().is_empty() {
                // i128 值已确认落在 [min, max] ⊆ i64 内
                return Ok(value as i64);
            }
        }

        writeln!(writer, "Sorry, the value you inputted was not valid.")?;
        writeln!(writer, "Input an integer between {} and {}:", min, max)?;
    }
}

/// 读取命中两组字符串之一的选项
///
/// 逐行与两组字符串做 ASCII 大小写不敏感的精确比较，第一组
/// 优先。两组都未命中时打印 `prompt` 并重试。
pub fn read_choice<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    accept_set: &[&str],
    reject_set: &[&str],
) -> Result<Choice> {
    let mut line = String::new();
    loop {
        line.clear();
        let bytes = reader.read_line(&mut line)?;
        if bytes == 0 {
            return Err(BohrcalcError::UnexpectedEof { expected: "choice" });
        }

        // 只剥掉行终止符，行内空白参与比较
        let answer = line.trim_end_matches(|c| c == '\r' || c == '\n');

        if accept_set.iter().any(|s| s.eq_ignore_ascii_case(answer)) {
            return Ok(Choice::Accept);
        }
        if reject_set.iter().any(|s| s.eq_ignore_ascii_case(answer)) {
            return Ok(Choice::Reject);
        }

        writeln!(writer, "Sorry, the value you inputted was not valid.")?;
        writeln!(writer, "{}", prompt)?;
    }
}
