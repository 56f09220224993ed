//! # 数值格式化工具
//!
//! 按有效数字位数格式化浮点数：十进制指数落在 `[-4, digits)`
//! 时用定点表示，否则用科学计数法，并去掉无意义的尾随零。
//!
//! ## 依赖关系
//! - 被 `commands/session.rs` 使用
//! - 无外部模块依赖

/// 以给定有效数字位数格式化浮点数
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return format!("{}", value);
    }

    // 指数先按原值估计，舍入可能进位（如 999.9 → 1000），再校正
    let mut exponent = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(digits as i32 - 1 - exponent);
    let rounded = (value * scale).round() / scale;
    if rounded != 0.0 {
        exponent = rounded.abs().log10().floor() as i32;
    }

    if exponent < -4 || exponent >= digits as i32 {
        trim_exponential(&format!("{:.*e}", digits - 1, value))
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fixed(&format!("{:.*}", decimals, value))
    }
}

/// 去掉定点表示的尾随零与孤立小数点
fn trim_fixed(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// 去掉科学计数法尾数部分的尾随零
fn trim_exponential(s: &str) -> String {
    match s.split_once('e') {
        Some((mantissa, exponent)) => {
            format!("{}e{}", trim_fixed(mantissa), exponent)
        }
        None => s.to_string(),
    }
}
