//! 输入分类
//!
//! 判断输入字符串是阿拉伯数字、汉数字，还是两者都不是

use crate::numeral::alphabet::{is_digit_glyph, is_multiplier_glyph};

/// 字符类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII 数字 0-9
    ArabicDigit,
    /// 汉数字 一 ~ 九
    KanjiDigit,
    /// 单位 十、百、千、万
    KanjiMultiplier,
    /// 其他字符
    Other,
}

impl CharClass {
    /// 对字符进行分类
    pub fn of(ch: char) -> Self {
        if ch.is_ascii_digit() {
            return Self::ArabicDigit;
        }

        if is_digit_glyph(ch) {
            return Self::KanjiDigit;
        }

        if is_multiplier_glyph(ch) {
            return Self::KanjiMultiplier;
        }

        Self::Other
    }

    /// 是否属于汉数字字母表
    pub fn is_kanji(self) -> bool {
        matches!(self, Self::KanjiDigit | Self::KanjiMultiplier)
    }
}

/// 整个输入的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// 空字符串
    Empty,
    /// 全部为 ASCII 数字
    Arabic,
    /// 全部为汉数字字符
    Kanji,
    /// 混合或含其他字符
    Mixed,
}

impl InputKind {
    /// 对输入字符串进行分类
    pub fn of(text: &str) -> Self {
        if text.is_empty() {
            return Self::Empty;
        }

        let mut classes = text.chars().map(CharClass::of);

        if classes.clone().all(|c| c == CharClass::ArabicDigit) {
            Self::Arabic
        } else if classes.all(CharClass::is_kanji) {
            Self::Kanji
        } else {
            Self::Mixed
        }
    }
}

/// 是否含有任何汉数字字符
pub fn contains_kanji(text: &str) -> bool {
    text.chars().any(|ch| CharClass::of(ch).is_kanji())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_class() {
        assert_eq!(CharClass::of('0'), CharClass::ArabicDigit);
        assert_eq!(CharClass::of('9'), CharClass::ArabicDigit);
        assert_eq!(CharClass::of('三'), CharClass::KanjiDigit);
        assert_eq!(CharClass::of('万'), CharClass::KanjiMultiplier);
        assert_eq!(CharClass::of('s'), CharClass::Other);
        // 全角数字不是 ASCII 数字
        assert_eq!(CharClass::of('５'), CharClass::Other);
        assert_eq!(CharClass::of('零'), CharClass::Other);
    }

    #[test]
    fn test_input_kind() {
        assert_eq!(InputKind::of(""), InputKind::Empty);
        assert_eq!(InputKind::of("16578"), InputKind::Arabic);
        assert_eq!(InputKind::of("一万六千五百七十八"), InputKind::Kanji);
        assert_eq!(InputKind::of("九九万"), InputKind::Kanji);
        assert_eq!(InputKind::of("二十s三"), InputKind::Mixed);
        assert_eq!(InputKind::of("ten"), InputKind::Mixed);
        assert_eq!(InputKind::of("1万"), InputKind::Mixed);
    }

    #[test]
    fn test_contains_kanji() {
        assert!(contains_kanji("二十s三"));
        assert!(contains_kanji("1万"));
        assert!(!contains_kanji("ten"));
        assert!(!contains_kanji("123"));
    }
}
