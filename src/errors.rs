use std::fmt;

use crate::client::ApiError;

#[derive(Debug, Clone)]
pub enum TrustMeBroError {
    Config(String),
    Session(String),
    Validation(String),
    Api(ApiError),
    FileOperation(String),
    Serialization(String),
    Terminal(String),
}

impl TrustMeBroError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            TrustMeBroError::Config(_) => "E001",
            TrustMeBroError::Session(_) => "E002",
            TrustMeBroError::Validation(_) => "E003",
            TrustMeBroError::Api(_) => "E004",
            TrustMeBroError::FileOperation(_) => "E005",
            TrustMeBroError::Serialization(_) => "E006",
            TrustMeBroError::Terminal(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            TrustMeBroError::Config(_) => "Configuration Error",
            TrustMeBroError::Session(_) => "Session Error",
            TrustMeBroError::Validation(_) => "Validation Error",
            TrustMeBroError::Api(_) => "API Error",
            TrustMeBroError::FileOperation(_) => "File Operation Error",
            TrustMeBroError::Serialization(_) => "Serialization Error",
            TrustMeBroError::Terminal(_) => "Terminal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> String {
        match self {
            TrustMeBroError::Api(err) => err.to_string(),
            TrustMeBroError::Config(msg)
            | TrustMeBroError::Session(msg)
            | TrustMeBroError::Validation(msg)
            | TrustMeBroError::FileOperation(msg)
            | TrustMeBroError::Serialization(msg)
            | TrustMeBroError::Terminal(msg) => msg.clone(),
        }
    }

    /// Unauthorized responses are handled by logging out, never shown inline
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, TrustMeBroError::Api(ApiError::Unauthorized))
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI/TUI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TrustMeBroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TrustMeBroError {}

// 便捷的构造函数
impl TrustMeBroError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        TrustMeBroError::Config(msg.into())
    }

    pub fn session<T: Into<String>>(msg: T) -> Self {
        TrustMeBroError::Session(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        TrustMeBroError::Validation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        TrustMeBroError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        TrustMeBroError::Serialization(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        TrustMeBroError::Terminal(msg.into())
    }
}

impl From<ApiError> for TrustMeBroError {
    fn from(err: ApiError) -> Self {
        TrustMeBroError::Api(err)
    }
}

impl From<std::io::Error> for TrustMeBroError {
    fn from(err: std::io::Error) -> Self {
        TrustMeBroError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TrustMeBroError {
    fn from(err: serde_json::Error) -> Self {
        TrustMeBroError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for TrustMeBroError {
    fn from(err: toml::ser::Error) -> Self {
        TrustMeBroError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrustMeBroError>;
