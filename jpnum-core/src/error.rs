use thiserror::Error;

#[derive(Error, Debug)]
pub enum JpnumError {
    // 输入校验错误
    #[error("Input is empty. Expected an arabic number (0-9) or a kanji number")]
    EmptyInput,

    #[error("Input contains invalid characters: {input:?}. Allowed characters: {allowed}")]
    InvalidCharacter { input: String, allowed: String },

    #[error("Number is too large: {value}. Only numbers up to {max} can be converted")]
    OutOfRange { value: String, max: String },

    #[error("Kanji number is too long: {length} characters (max {max})")]
    TooLong { length: usize, max: usize },

    #[error("Input is not a well-formed kanji number: {input:?}. Only well-formed kanji numbers up to {max} can be converted")]
    MalformedNumeral { input: String, max: String },

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl JpnumError {
    /// 错误类别名称（命令行输出前缀）
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EmptyInput",
            Self::InvalidCharacter { .. } => "InvalidCharacter",
            Self::OutOfRange { .. } => "OutOfRange",
            Self::TooLong { .. } => "TooLong",
            Self::MalformedNumeral { .. } => "MalformedNumeral",
            Self::ConfigParse { .. } => "ConfigParse",
            Self::ConfigNotFound(_) => "ConfigNotFound",
            Self::Io(_) => "Io",
        }
    }

    /// 是否为输入校验错误（而非环境/配置错误）
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::InvalidCharacter { .. }
                | Self::OutOfRange { .. }
                | Self::TooLong { .. }
                | Self::MalformedNumeral { .. }
        )
    }
}

pub type JpnumResult<T> = Result<T, JpnumError>;
