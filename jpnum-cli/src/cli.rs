//! 命令行参数与执行

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use jpnum_core::{Conversion, Converter, ConverterConfig, DispatchPolicy, JpnumResult, ValidationPolicy};

/// Convert between arabic and Japanese kanji numbers
#[derive(Debug, Parser)]
#[command(name = "jpnum", version)]
#[command(about = "Convert between arabic and Japanese kanji numbers")]
pub struct CliArgs {
    /// The input: an arabic number or a kanji number, up to 99,999
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Config file (defaults to $JPNUM_CONFIG or ~/.config/jpnum/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Kanji validation policy (overrides the config file)
    #[arg(long, value_enum)]
    pub validation: Option<ValidationArg>,

    /// Input classification policy (overrides the config file)
    #[arg(long, value_enum)]
    pub dispatch: Option<DispatchArg>,

    /// Print the detected conversion direction to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidationArg {
    Structural,
    CharacterSet,
}

impl From<ValidationArg> for ValidationPolicy {
    fn from(arg: ValidationArg) -> Self {
        match arg {
            ValidationArg::Structural => Self::Structural,
            ValidationArg::CharacterSet => Self::CharacterSet,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DispatchArg {
    Pattern,
    Character,
}

impl From<DispatchArg> for DispatchPolicy {
    fn from(arg: DispatchArg) -> Self {
        match arg {
            DispatchArg::Pattern => Self::Pattern,
            DispatchArg::Character => Self::Character,
        }
    }
}

impl CliArgs {
    /// 合并配置文件与命令行覆盖项
    pub fn resolve_config(&self) -> JpnumResult<ConverterConfig> {
        let mut config = match &self.config {
            Some(path) => ConverterConfig::load_from(path)?,
            None => ConverterConfig::load()?,
        };

        if let Some(validation) = self.validation {
            config.validation = validation.into();
        }
        if let Some(dispatch) = self.dispatch {
            config.dispatch = dispatch.into();
        }

        Ok(config)
    }
}

/// 执行一次转换
pub fn run(args: &CliArgs) -> JpnumResult<Conversion> {
    let config = args.resolve_config()?;
    tracing::debug!(?config, "resolved config");

    Converter::new(config).convert_detailed(&args.input)
}
