//! jpnum Core
//!
//! 阿拉伯数字与日文汉数字互转核心库（1 ~ 99,999）

#![warn(rust_2018_idioms)]

pub mod numeral;
pub mod config;
pub mod error;

// Re-export key types
pub use config::ConverterConfig;
pub use error::{JpnumError, JpnumResult};
pub use numeral::{
    convert, decode, encode, validate_arabic, validate_kanji, ArabicNumeral, Conversion,
    Converter, Direction, DispatchPolicy, KanjiNumeral, ValidationPolicy,
};

/// 初始化日志系统
///
/// 需要 `debug-logs` feature；由 JPNUM_LOG 控制级别（默认 warn）
///
/// 日志输出到 stderr，stdout 只输出转换结果
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("JPNUM_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    }
}
