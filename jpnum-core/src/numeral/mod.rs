//! 数字转换模块
//!
//! 阿拉伯数字与日文汉数字互转（1 ~ 99,999）

pub mod alphabet;
pub mod classify;
pub mod models;
pub mod validator;
pub mod encoder;
pub mod decoder;
pub mod dispatcher;

// 导出核心类型
pub use classify::{CharClass, InputKind};
pub use models::{ArabicNumeral, Coefficient, KanjiNumeral};
pub use validator::{parse_coefficients, validate_arabic, validate_kanji, ValidationPolicy};
pub use encoder::{encode, encode_value};
pub use decoder::{decode, decode_value};
pub use dispatcher::{convert, Conversion, Converter, Direction, DispatchPolicy};
