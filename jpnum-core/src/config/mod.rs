//! 配置模块
//!
//! 从 ~/.config/jpnum/config.toml 加载（可用 JPNUM_CONFIG 指定其他路径）

use crate::error::{JpnumError, JpnumResult};
use crate::numeral::{DispatchPolicy, ValidationPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "JPNUM_CONFIG";

/// 转换器配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConverterConfig {
    /// 汉数字校验策略
    pub validation: ValidationPolicy,
    /// 输入方向判定策略
    pub dispatch: DispatchPolicy,
}

impl ConverterConfig {
    /// 加载配置文件
    ///
    /// JPNUM_CONFIG 指定的文件必须存在；默认位置的文件不存在时使用默认配置
    pub fn load() -> JpnumResult<Self> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_or_default(explicit.as_deref(), Self::config_path().as_deref())
    }

    fn load_or_default(explicit: Option<&Path>, default_path: Option<&Path>) -> JpnumResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let Some(config_path) = default_path else {
            tracing::info!("无法获取配置目录，使用默认配置");
            return Ok(Self::default());
        };

        if !config_path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        Self::load_from(config_path)
    }

    /// 从指定文件加载配置
    pub fn load_from(path: &Path) -> JpnumResult<Self> {
        if !path.exists() {
            return Err(JpnumError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| JpnumError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!(
            "加载配置成功: {:?} (validation={:?}, dispatch={:?})",
            path,
            config.validation,
            config.dispatch
        );
        Ok(config)
    }

    /// 保存配置到指定文件
    pub fn save_to(&self, path: &Path) -> JpnumResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| JpnumError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 默认配置文件路径
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jpnum").join("config.toml"))
    }
}
