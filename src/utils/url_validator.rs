//! URL 验证模块
//!
//! 创建短链前的本地校验：只接受带主机名的 http(s) 地址

use url::Url;

/// Message shown when the create-link input is rejected locally
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

/// URL 验证错误
#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    UnsupportedScheme(String),
    MissingHost,
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "Unsupported scheme: {}. Only http:// and https:// are allowed",
                scheme
            ),
            Self::MissingHost => write!(f, "URL has no host"),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 校验待缩短的目标地址
///
/// Returns the trimmed URL on success so callers submit exactly what was checked.
pub fn validate_target_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let parsed =
        Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert_eq!(
            validate_target_url("  https://example.com/path?q=1 ").unwrap(),
            "https://example.com/path?q=1"
        );
        assert!(validate_target_url("http://localhost:8080").is_ok());
        assert!(validate_target_url("HTTPS://EXAMPLE.COM").is_ok());
    }

    #[test]
    fn test_rejected_schemes() {
        assert!(matches!(
            validate_target_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            validate_target_url("ftp://example.com"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_empty_and_garbage() {
        assert_eq!(validate_target_url("   "), Err(UrlValidationError::EmptyUrl));
        assert!(matches!(
            validate_target_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }
}
