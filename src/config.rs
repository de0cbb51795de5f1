//! 程序配置
//!
//! 加载顺序：默认值 → `USER_FORM_CONFIG` 指向的 TOML 文件 → 环境变量
use crate::error::{AppError, AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "USER_FORM_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 用户 API 的基础地址
    pub base_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout_secs: 10,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 只从环境变量读取（未设置或解析失败时使用默认值）
    pub fn from_env() -> Self {
        Self::default().overlay_env(|name| std::env::var(name).ok())
    }

    /// 从 TOML 文件读取，缺失字段使用默认值
    pub async fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::toml_parse_failed(path.display().to_string(), e))?;

        debug!("已从 {} 加载配置", path.display());
        Ok(config)
    }

    /// 完整加载：TOML 文件（可选）叠加环境变量，并做校验
    pub async fn load() -> AppResult<Self> {
        let config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::from_toml_file(Path::new(&path))
                .await?
                .overlay_env(|name| std::env::var(name).ok()),
            _ => Self::from_env(),
        };

        config.validate()?;
        Ok(config)
    }

    /// 用环境变量覆盖当前值
    ///
    /// `lookup` 抽出来是为了测试时不必修改进程环境
    pub fn overlay_env(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup("USER_FORM_BASE_URL").unwrap_or(self.base_url),
            request_timeout_secs: lookup("USER_FORM_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.request_timeout_secs),
            verbose_logging: lookup("USER_FORM_VERBOSE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
        }
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        reqwest::Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            value: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
