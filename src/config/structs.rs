use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumMessage, IntoEnumIterator};

use crate::errors::{Result, TrustMeBroError};

/// Environment variable prefix, e.g. `TMB__API__BASE_URL`
pub const ENV_PREFIX: &str = "TMB";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 静态配置（从 TOML 与环境变量加载，启动时使用）
///
/// - api: 后端地址与超时
/// - frontend: 生成短链时使用的公开地址
/// - session: token 保存位置
/// - ui: 轮询间隔、复制提示时长、截断长度
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：TMB，分隔符：__
    /// 示例：TMB__UI__POLL_INTERVAL_SECS=10
    pub fn load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let explicit = path.is_some();
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        if explicit && !Path::new(path).exists() {
            return Err(TrustMeBroError::config(format!(
                "Config file not found: {}",
                path
            )));
        }

        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| TrustMeBroError::config(format!("Failed to build config: {}", e)))?;

        settings
            .try_deserialize::<StaticConfig>()
            .map_err(|e| TrustMeBroError::config(format!("Failed to deserialize config: {}", e)))
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> Result<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 后端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_timeout")]
    pub timeout_secs: u64,
}

/// 前端公开地址，短链 = `{public_url}/{short_code}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    #[serde(default = "default_frontend_url")]
    pub public_url: String,
}

/// 会话 token 存储
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_dir")]
    pub dir: String,
    #[serde(default = "default_session_key")]
    pub key: String,
}

impl SessionConfig {
    pub fn token_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.key)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_copy_ack_ms")]
    pub copy_ack_ms: u64,
    #[serde(default = "default_truncate_wide")]
    pub url_truncate_wide: usize,
    #[serde(default = "default_truncate_narrow")]
    pub url_truncate_narrow: usize,
    /// 终端宽度低于该值时使用卡片布局
    #[serde(default = "default_narrow_width")]
    pub narrow_width: u16,
}

/// 日志输出格式
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter, AsRefStr, EnumMessage,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    #[strum(message = "Human readable lines")]
    Text,
    #[strum(message = "One JSON object per line")]
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::iter()
            .find(|format| format.as_ref().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let valid: Vec<String> = Self::iter()
                    .map(|format| {
                        format!(
                            "{} ({})",
                            format.as_ref(),
                            format.get_message().unwrap_or_default()
                        )
                    })
                    .collect();
                format!("Invalid log format: '{}'. Valid: {}", s, valid.join(", "))
            })
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_api_base_url() -> String {
    "http://localhost:3062".to_string()
}

fn default_api_timeout() -> u64 {
    10
}

fn default_frontend_url() -> String {
    "http://localhost:3061".to_string()
}

fn default_session_dir() -> String {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| Path::new(&home).join(".trustmebro"))
        .unwrap_or_else(|| PathBuf::from(".trustmebro"))
        .to_string_lossy()
        .into_owned()
}

fn default_session_key() -> String {
    "token".to_string()
}

fn default_poll_interval() -> u64 {
    30
}

fn default_copy_ack_ms() -> u64 {
    2000
}

fn default_truncate_wide() -> usize {
    40
}

fn default_truncate_narrow() -> usize {
    50
}

fn default_narrow_width() -> u16 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: default_api_timeout(),
        }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            public_url: default_frontend_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: default_session_dir(),
            key: default_session_key(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
            copy_ack_ms: default_copy_ack_ms(),
            url_truncate_wide: default_truncate_wide(),
            url_truncate_narrow: default_truncate_narrow(),
            narrow_width: default_narrow_width(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = StaticConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3062");
        assert_eq!(config.frontend.public_url, "http://localhost:3061");
        assert_eq!(config.session.key, "token");
        assert_eq!(config.ui.poll_interval_secs, 30);
        assert_eq!(config.ui.copy_ack_ms, 2000);
        assert_eq!(config.ui.url_truncate_wide, 40);
        assert_eq!(config.ui.url_truncate_narrow, 50);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_sample_config_parses_back() {
        let sample = StaticConfig::generate_sample_config().unwrap();
        assert!(sample.contains("[api]"));
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed.ui.narrow_width, 100);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[api]\nbase_url = \"https://api.example\"\n").unwrap();

        let config = StaticConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.api.base_url, "https://api.example");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.frontend.public_url, "http://localhost:3061");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = StaticConfig::load(Some("/nonexistent/trustmebro.toml")).unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert!(err.contains("text (Human readable lines)"));

        let parsed: StaticConfig = toml::from_str("[logging]\nformat = \"json\"\n").unwrap();
        assert_eq!(parsed.logging.format, LogFormat::Json);
        assert_eq!(parsed.logging.format.to_string(), "json");
    }

    #[test]
    fn test_save_to_file_creates_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        StaticConfig::default().save_to_file(&path).unwrap();
        assert!(path.exists());
    }
}
