//! 数字值类型
//!
//! 经过校验的阿拉伯数字与汉数字，每次转换时新建，不可变

use std::fmt;

use crate::error::{JpnumError, JpnumResult};
use crate::numeral::alphabet::{MAX_VALUE, POSITIONS};
use crate::numeral::validator::{self, ValidationPolicy};

/// 某一位的系数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Coefficient {
    /// 该位缺省（值为 0）
    #[default]
    Absent,
    /// 只写了单位，系数隐含为 1（如 "十"）
    ImplicitOne,
    /// 写出了数字（1 ~ 9）
    Digit(u32),
}

impl Coefficient {
    /// 系数的数值
    pub fn value(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::ImplicitOne => 1,
            Self::Digit(d) => d,
        }
    }
}

/// 已校验的阿拉伯数字（0 ~ 99999）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArabicNumeral(u32);

impl ArabicNumeral {
    /// 校验并解析阿拉伯数字字符串
    ///
    /// 允许前导零（"000123" 即 123）
    pub fn parse(text: &str) -> JpnumResult<Self> {
        validator::parse_arabic(text).map(Self)
    }

    /// 由数值创建
    pub fn from_value(value: u32) -> JpnumResult<Self> {
        if value > MAX_VALUE {
            return Err(validator::out_of_range(&value.to_string()));
        }
        Ok(Self(value))
    }

    /// 数值
    pub fn value(self) -> u32 {
        self.0
    }

    /// 第 `position` 位（0 = 个位）上的数字，超出万位时为 0
    pub(crate) fn digit_at(self, position: usize) -> u32 {
        POSITIONS
            .get(position)
            .map_or(0, |p| (self.0 / p.weight()) % 10)
    }
}

impl fmt::Display for ArabicNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for ArabicNumeral {
    type Error = JpnumError;

    fn try_from(value: u32) -> JpnumResult<Self> {
        Self::from_value(value)
    }
}

/// 已校验的汉数字
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KanjiNumeral {
    text: String,
    /// 结构校验得到的各位系数（下标 = 10 的幂）；字符集策略下为 None
    coefficients: Option<[Coefficient; 5]>,
}

impl KanjiNumeral {
    /// 按指定策略校验汉数字字符串
    pub fn parse(text: &str, policy: ValidationPolicy) -> JpnumResult<Self> {
        let coefficients = match policy {
            ValidationPolicy::Structural => Some(validator::parse_coefficients(text)?),
            ValidationPolicy::CharacterSet => {
                validator::validate_kanji(text, policy)?;
                None
            }
        };

        Ok(Self {
            text: text.to_string(),
            coefficients,
        })
    }

    /// 原始文本
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// 各位系数（仅结构校验时可用）
    pub fn coefficients(&self) -> Option<&[Coefficient; 5]> {
        self.coefficients.as_ref()
    }
}

impl fmt::Display for KanjiNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
