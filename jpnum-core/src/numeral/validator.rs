//! 输入校验
//!
//! 阿拉伯数字：字符集 + 上限（99,999）
//!
//! 汉数字两种策略：
//! - `Structural`：逐位状态遍历（万 → 千 → 百 → 十 → 个），同时检查字符集、
//!   单位顺序、"一" 的省略规则和上限
//! - `CharacterSet`：只检查字符集和长度（最多 9 个字符）

use serde::{Deserialize, Serialize};

use crate::error::{JpnumError, JpnumResult};
use crate::numeral::alphabet::{
    digit_value, is_kanji_char, multiplier_position, ARABIC_ALPHABET, KANJI_ALPHABET,
    MAX_KANJI, MAX_KANJI_LEN, MAX_VALUE, POSITIONS,
};
use crate::numeral::models::Coefficient;

/// 99999 的位数
const MAX_DIGITS: usize = 5;

/// 汉数字校验策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    /// 结构校验（推荐）
    #[default]
    Structural,
    /// 仅字符集 + 长度校验
    CharacterSet,
}

/// 校验阿拉伯数字字符串
pub fn validate_arabic(text: &str) -> JpnumResult<()> {
    parse_arabic(text).map(|_| ())
}

/// 校验汉数字字符串
pub fn validate_kanji(text: &str, policy: ValidationPolicy) -> JpnumResult<()> {
    match policy {
        ValidationPolicy::Structural => parse_coefficients(text).map(|_| ()),
        ValidationPolicy::CharacterSet => check_kanji_charset(text),
    }
}

/// 校验并计算阿拉伯数字的值
pub(crate) fn parse_arabic(text: &str) -> JpnumResult<u32> {
    if text.is_empty() {
        return Err(JpnumError::EmptyInput);
    }

    if !text.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(JpnumError::InvalidCharacter {
            input: text.to_string(),
            allowed: ARABIC_ALPHABET.to_string(),
        });
    }

    // 前导零不计入位数，避免超长输入溢出
    let significant = text.trim_start_matches('0');
    if significant.len() > MAX_DIGITS {
        return Err(out_of_range(text));
    }

    let value = significant
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));

    if value > MAX_VALUE {
        return Err(out_of_range(text));
    }

    Ok(value)
}

pub(crate) fn out_of_range(value: &str) -> JpnumError {
    JpnumError::OutOfRange {
        value: value.to_string(),
        max: "99,999".to_string(),
    }
}

fn malformed(text: &str) -> JpnumError {
    JpnumError::MalformedNumeral {
        input: text.to_string(),
        max: MAX_KANJI.to_string(),
    }
}

/// 结构校验：按位从高到低遍历，返回每一位的系数（下标 = 10 的幂）
///
/// 文法：`([一-九]万)?([二-九]?千)?([二-九]?百)?([二-九]?十)?([一-九])?`，且不能为空
pub fn parse_coefficients(text: &str) -> JpnumResult<[Coefficient; 5]> {
    if text.is_empty() {
        return Err(JpnumError::EmptyInput);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut coefficients = [Coefficient::Absent; 5];
    // 下一段只能落在比 ceiling 更低的位上
    let mut ceiling = POSITIONS.len();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        let (position, coefficient, consumed) = if let Some(digit) = digit_value(ch) {
            match chars.get(i + 1).copied().and_then(multiplier_position) {
                Some(position) => {
                    if digit == 1 && POSITIONS[position].omit_one_coefficient {
                        return Err(malformed(text));
                    }
                    (position, Coefficient::Digit(digit), 2)
                }
                None => {
                    // 个位数字必须在末尾
                    if i + 1 != chars.len() {
                        return Err(malformed(text));
                    }
                    (0, Coefficient::Digit(digit), 1)
                }
            }
        } else if let Some(position) = multiplier_position(ch) {
            // 万 必须写出系数
            if !POSITIONS[position].omit_one_coefficient {
                return Err(malformed(text));
            }
            (position, Coefficient::ImplicitOne, 1)
        } else {
            return Err(malformed(text));
        };

        if position >= ceiling {
            return Err(malformed(text));
        }

        coefficients[position] = coefficient;
        ceiling = position;
        i += consumed;
    }

    Ok(coefficients)
}

/// 字符集 + 长度校验
fn check_kanji_charset(text: &str) -> JpnumResult<()> {
    if text.is_empty() {
        return Err(JpnumError::EmptyInput);
    }

    if !text.chars().all(is_kanji_char) {
        return Err(JpnumError::InvalidCharacter {
            input: text.to_string(),
            allowed: KANJI_ALPHABET.to_string(),
        });
    }

    let length = text.chars().count();
    if length > MAX_KANJI_LEN {
        return Err(JpnumError::TooLong {
            length,
            max: MAX_KANJI_LEN,
        });
    }

    Ok(())
}
