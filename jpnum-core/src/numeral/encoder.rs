//! 阿拉伯数字 → 汉数字

use crate::error::JpnumResult;
use crate::numeral::alphabet::{digit_glyph, Position, POSITIONS};
use crate::numeral::models::ArabicNumeral;

/// 将阿拉伯数字编码为汉数字
///
/// 逐位独立渲染后从高位到低位拼接：
/// - 0 → 空
/// - 1 且该位省略 "一"（十、百、千）→ 只写单位
/// - 其他 → 数字 + 单位（个位无单位）
///
/// 0 编码为空字符串（所有位都为空）
///
/// # 示例
/// ```
/// # use jpnum_core::numeral::{encode, ArabicNumeral};
/// let n = ArabicNumeral::parse("3073").unwrap();
/// assert_eq!(encode(&n), "三千七十三");
/// ```
pub fn encode(arabic: &ArabicNumeral) -> String {
    let mut kanji = String::new();
    for (idx, position) in POSITIONS.iter().enumerate().rev() {
        push_segment(&mut kanji, arabic.digit_at(idx), position);
    }
    kanji
}

/// 校验数值后编码
pub fn encode_value(value: u32) -> JpnumResult<String> {
    let arabic = ArabicNumeral::from_value(value)?;
    Ok(encode(&arabic))
}

/// 渲染单个位
fn push_segment(kanji: &mut String, digit: u32, position: &Position) {
    if digit == 0 {
        return;
    }

    if !(digit == 1 && position.omit_one_coefficient) {
        kanji.extend(digit_glyph(digit));
    }
    kanji.extend(position.glyph);
}
