//! 数字字母表
//!
//! 汉数字的数字字符（一 ~ 九）与位数单位（十、百、千、万）
//!
//! 0 没有对应字符：某一位缺省即表示该位为 0

/// 数字字符，下标 + 1 即为数值
pub const DIGITS: [char; 9] = ['一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// 可转换的最大值
pub const MAX_VALUE: u32 = 99_999;

/// 最大值的汉数字写法
pub const MAX_KANJI: &str = "九万九千九百九十九";

/// 最大值汉数字的字符数
pub const MAX_KANJI_LEN: usize = 9;

/// 全部合法汉数字字符（用于错误信息）
pub const KANJI_ALPHABET: &str = "一二三四五六七八九十百千万";

/// 阿拉伯数字字符集（用于错误信息）
pub const ARABIC_ALPHABET: &str = "0123456789";

/// 位数定义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 单位字符（个位没有）
    pub glyph: Option<char>,
    /// 10 的幂
    pub power: u32,
    /// 系数为 1 时是否省略 "一"
    pub omit_one_coefficient: bool,
}

impl Position {
    /// 该位的权值（10^power）
    pub const fn weight(&self) -> u32 {
        10u32.pow(self.power)
    }
}

/// 位数表，下标即 10 的幂：个、十、百、千、万
pub const POSITIONS: [Position; 5] = [
    Position { glyph: None, power: 0, omit_one_coefficient: false },
    Position { glyph: Some('十'), power: 1, omit_one_coefficient: true },
    Position { glyph: Some('百'), power: 2, omit_one_coefficient: true },
    Position { glyph: Some('千'), power: 3, omit_one_coefficient: true },
    Position { glyph: Some('万'), power: 4, omit_one_coefficient: false },
];

/// 数字字符 → 数值（1 ~ 9）
pub fn digit_value(ch: char) -> Option<u32> {
    DIGITS
        .iter()
        .position(|&d| d == ch)
        .map(|idx| idx as u32 + 1)
}

/// 数值（1 ~ 9）→ 数字字符
pub fn digit_glyph(value: u32) -> Option<char> {
    match value {
        1..=9 => Some(DIGITS[value as usize - 1]),
        _ => None,
    }
}

/// 单位字符 → 位数下标（1 ~ 4）
pub fn multiplier_position(ch: char) -> Option<usize> {
    POSITIONS.iter().position(|p| p.glyph == Some(ch))
}

/// 是否为数字字符
pub fn is_digit_glyph(ch: char) -> bool {
    digit_value(ch).is_some()
}

/// 是否为单位字符
pub fn is_multiplier_glyph(ch: char) -> bool {
    multiplier_position(ch).is_some()
}

/// 是否属于汉数字字母表
pub fn is_kanji_char(ch: char) -> bool {
    is_digit_glyph(ch) || is_multiplier_glyph(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value('一'), Some(1));
        assert_eq!(digit_value('五'), Some(5));
        assert_eq!(digit_value('九'), Some(9));
        assert_eq!(digit_value('十'), None);
        assert_eq!(digit_value('零'), None);
        assert_eq!(digit_value('1'), None);
    }

    #[test]
    fn test_digit_glyph() {
        assert_eq!(digit_glyph(1), Some('一'));
        assert_eq!(digit_glyph(9), Some('九'));
        assert_eq!(digit_glyph(0), None);
        assert_eq!(digit_glyph(10), None);
    }

    #[test]
    fn test_multiplier_position() {
        assert_eq!(multiplier_position('十'), Some(1));
        assert_eq!(multiplier_position('百'), Some(2));
        assert_eq!(multiplier_position('千'), Some(3));
        assert_eq!(multiplier_position('万'), Some(4));
        assert_eq!(multiplier_position('一'), None);
        assert_eq!(multiplier_position('亿'), None);
    }

    #[test]
    fn test_position_table() {
        let weights: Vec<u32> = POSITIONS.iter().map(Position::weight).collect();
        assert_eq!(weights, vec![1, 10, 100, 1000, 10000]);

        // 十、百、千省略 "一"，万和个位不省略
        assert!(!POSITIONS[0].omit_one_coefficient);
        assert!(POSITIONS[1].omit_one_coefficient);
        assert!(POSITIONS[2].omit_one_coefficient);
        assert!(POSITIONS[3].omit_one_coefficient);
        assert!(!POSITIONS[4].omit_one_coefficient);
    }

    #[test]
    fn test_alphabet_consistency() {
        assert!(KANJI_ALPHABET.chars().all(is_kanji_char));
        assert_eq!(KANJI_ALPHABET.chars().count(), 13);
        assert_eq!(MAX_KANJI.chars().count(), MAX_KANJI_LEN);
        assert!(!is_kanji_char('a'));
        assert!(!is_kanji_char('零'));
    }
}
