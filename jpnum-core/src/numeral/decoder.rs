//! 汉数字 → 阿拉伯数字
//!
//! 结构校验过的汉数字直接累加各位系数；
//! 字符集校验的汉数字按位查找，不依赖结构

use crate::numeral::alphabet::{digit_value, is_multiplier_glyph, POSITIONS};
use crate::numeral::models::KanjiNumeral;

/// 将汉数字解码为阿拉伯数字字符串（无前导零）
///
/// # 示例
/// ```
/// # use jpnum_core::numeral::{decode, KanjiNumeral, ValidationPolicy};
/// let k = KanjiNumeral::parse("一万六千五百七十八", ValidationPolicy::Structural).unwrap();
/// assert_eq!(decode(&k), "16578");
/// ```
pub fn decode(kanji: &KanjiNumeral) -> String {
    decode_value(kanji).to_string()
}

/// 将汉数字解码为数值
pub fn decode_value(kanji: &KanjiNumeral) -> u32 {
    if let Some(coefficients) = kanji.coefficients() {
        return coefficients
            .iter()
            .zip(POSITIONS.iter())
            .map(|(c, position)| c.value() * position.weight())
            .sum();
    }

    scan_value(kanji.as_str())
}

/// 按位查找各单位字符
fn scan_value(text: &str) -> u32 {
    let chars: Vec<char> = text.chars().collect();

    POSITIONS
        .iter()
        .map(|position| {
            let coefficient = match position.glyph {
                None => ones_coefficient(&chars),
                Some(glyph) => multiplier_coefficient(&chars, glyph),
            };
            coefficient * position.weight()
        })
        .sum()
}

/// 个位：末尾的数字字符（后面没有单位）
fn ones_coefficient(chars: &[char]) -> u32 {
    chars
        .last()
        .filter(|&&ch| !is_multiplier_glyph(ch))
        .and_then(|&ch| digit_value(ch))
        .unwrap_or(0)
}

/// 单位位：第一次出现的单位字符，前面有数字则取该数字，否则隐含为 1
fn multiplier_coefficient(chars: &[char], glyph: char) -> u32 {
    let Some(idx) = chars.iter().position(|&ch| ch == glyph) else {
        return 0;
    };

    idx.checked_sub(1)
        .and_then(|prev| digit_value(chars[prev]))
        .unwrap_or(1)
}
