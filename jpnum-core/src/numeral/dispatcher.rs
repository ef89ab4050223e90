//! 转换分发
//!
//! 判断输入方向，再走对应的 校验 → 编码/解码 流程

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ConverterConfig;
use crate::error::{JpnumError, JpnumResult};
use crate::numeral::alphabet::{ARABIC_ALPHABET, KANJI_ALPHABET};
use crate::numeral::classify::{contains_kanji, InputKind};
use crate::numeral::models::{ArabicNumeral, KanjiNumeral};
use crate::numeral::{decode, encode};

/// 输入方向判定策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DispatchPolicy {
    /// 全部为阿拉伯数字或全部为汉数字，否则直接报错（推荐）
    #[default]
    Pattern,
    /// 含任意汉数字字符即视为汉数字，否则视为阿拉伯数字
    Character,
}

/// 转换方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// 阿拉伯数字 → 汉数字
    ArabicToKanji,
    /// 汉数字 → 阿拉伯数字
    KanjiToArabic,
}

/// 单次转换结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// 原始输入
    pub input: String,
    /// 转换结果
    pub output: String,
    /// 转换方向
    pub direction: Direction,
}

/// 数字转换器
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// 创建新的转换器
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// 判断输入方向
    pub fn classify(&self, input: &str) -> JpnumResult<Direction> {
        let kind = InputKind::of(input);

        let direction = match self.config.dispatch {
            DispatchPolicy::Pattern => match kind {
                InputKind::Arabic => Direction::ArabicToKanji,
                InputKind::Kanji => Direction::KanjiToArabic,
                InputKind::Empty => return Err(JpnumError::EmptyInput),
                InputKind::Mixed => {
                    return Err(JpnumError::InvalidCharacter {
                        input: input.to_string(),
                        allowed: format!(
                            "arabic digits {} (no commas), or kanji {}",
                            ARABIC_ALPHABET, KANJI_ALPHABET
                        ),
                    })
                }
            },
            DispatchPolicy::Character => {
                if contains_kanji(input) {
                    Direction::KanjiToArabic
                } else {
                    Direction::ArabicToKanji
                }
            }
        };

        debug!(input, ?kind, ?direction, "classified input");
        Ok(direction)
    }

    /// 转换输入，返回另一种写法
    pub fn convert(&self, input: &str) -> JpnumResult<String> {
        self.convert_detailed(input).map(|conversion| conversion.output)
    }

    /// 转换输入，同时返回方向
    pub fn convert_detailed(&self, input: &str) -> JpnumResult<Conversion> {
        let direction = self.classify(input)?;

        let output = match direction {
            Direction::ArabicToKanji => {
                let arabic = ArabicNumeral::parse(input)?;
                encode(&arabic)
            }
            Direction::KanjiToArabic => {
                let kanji = KanjiNumeral::parse(input, self.config.validation)?;
                decode(&kanji)
            }
        };

        debug!(input, output = output.as_str(), "converted");

        Ok(Conversion {
            input: input.to_string(),
            output,
            direction,
        })
    }

    /// 设置配置
    pub fn set_config(&mut self, config: ConverterConfig) {
        self.config = config;
    }

    /// 获取当前配置
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }
}

/// 使用默认配置转换（结构校验 + 模式分发）
pub fn convert(input: &str) -> JpnumResult<String> {
    Converter::default().convert(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeral::ValidationPolicy;

    fn with_policies(validation: ValidationPolicy, dispatch: DispatchPolicy) -> Converter {
        Converter::new(ConverterConfig { validation, dispatch })
    }

    #[test]
    fn test_convert_both_directions() {
        assert_eq!(convert("16578").unwrap(), "一万六千五百七十八");
        assert_eq!(convert("一万六千五百七十八").unwrap(), "16578");
    }

    #[test]
    fn test_classify_pattern() {
        let converter = Converter::default();
        assert_eq!(converter.classify("123").unwrap(), Direction::ArabicToKanji);
        assert_eq!(converter.classify("百").unwrap(), Direction::KanjiToArabic);
        assert!(matches!(converter.classify(""), Err(JpnumError::EmptyInput)));
        assert!(matches!(
            converter.classify("二十s三"),
            Err(JpnumError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_pattern_error_names_both_alphabets() {
        let err = convert("ten").unwrap_err();
        let message = err.to_string();
        assert!(message.contains(ARABIC_ALPHABET));
        assert!(message.contains(KANJI_ALPHABET));
    }

    #[test]
    fn test_classify_character() {
        let converter = with_policies(ValidationPolicy::Structural, DispatchPolicy::Character);
        assert_eq!(converter.classify("二十s三").unwrap(), Direction::KanjiToArabic);
        assert_eq!(converter.classify("ten").unwrap(), Direction::ArabicToKanji);

        // 不含汉数字的输入按阿拉伯数字校验
        assert!(matches!(
            converter.convert("ten"),
            Err(JpnumError::InvalidCharacter { .. })
        ));
        // 含汉数字但结构不合法
        assert!(matches!(
            converter.convert("二十s三"),
            Err(JpnumError::MalformedNumeral { .. })
        ));
    }

    #[test]
    fn test_charset_validation_through_converter() {
        let converter = with_policies(ValidationPolicy::CharacterSet, DispatchPolicy::Pattern);
        assert_eq!(converter.convert("一十").unwrap(), "10");
        assert!(matches!(
            converter.convert("九九万九千九百九十九"),
            Err(JpnumError::TooLong { .. })
        ));
    }

    #[test]
    fn test_convert_detailed() {
        let conversion = Converter::default().convert_detailed("104").unwrap();
        assert_eq!(conversion.input, "104");
        assert_eq!(conversion.output, "百四");
        assert_eq!(conversion.direction, Direction::ArabicToKanji);
    }

    #[test]
    fn test_config_switching() {
        let mut converter = Converter::default();
        assert!(converter.convert("一十").is_err());

        converter.set_config(ConverterConfig {
            validation: ValidationPolicy::CharacterSet,
            dispatch: DispatchPolicy::Pattern,
        });
        assert_eq!(converter.config().validation, ValidationPolicy::CharacterSet);
        assert_eq!(converter.convert("一十").unwrap(), "10");
    }

    #[test]
    fn test_zero() {
        assert_eq!(convert("0").unwrap(), "");
    }
}
