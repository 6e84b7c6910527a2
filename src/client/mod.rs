//! Client layer for the shortener HTTP API
//!
//! Every state change goes through the remote API; nothing here keeps
//! durable state.
//!
//! # Architecture
//!
//! ```text
//! Dashboard / Forms / Miner → ShortenerApi ──→ HttpApi (ureq, spawn_blocking)
//!                                          └→ any test double
//! ```
//!
//! # Error taxonomy
//!
//! - `Network` → generic "failed to connect", user may resubmit
//! - `Unauthorized` → forced logout, never an inline error
//! - `NotFound` / `Rejected` → server `detail` verbatim, or a caller fallback
//! - `Decode` → 2xx with a body we could not read

mod api;
mod http;

pub use api::ShortenerApi;
pub use http::HttpApi;

use std::fmt;

/// Message shown for transport failures
pub const CONNECT_FAILED: &str = "Failed to connect to server";

// ============ ApiError ============

/// Errors from the API layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection refused, timeout, DNS, worker join failure
    Network(String),
    /// 401, the session is no longer valid
    Unauthorized,
    /// 404 with optional server detail
    NotFound(Option<String>),
    /// Any other non-success status
    Rejected { status: u16, detail: Option<String> },
    /// Success status but the body did not decode
    Decode(String),
}

impl ApiError {
    /// Server-supplied detail, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::NotFound(detail) | ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text to show inline for this error.
    ///
    /// Network failures always read [`CONNECT_FAILED`]; everything else shows
    /// the server detail or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Network(_) => CONNECT_FAILED.to_string(),
            other => other.detail().unwrap_or(fallback).to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "network error: {}", e),
            ApiError::Unauthorized => write!(f, "unauthorized"),
            ApiError::NotFound(Some(detail)) => write!(f, "not found: {}", detail),
            ApiError::NotFound(None) => write!(f, "not found"),
            ApiError::Rejected {
                status,
                detail: Some(detail),
            } => write!(f, "HTTP {}: {}", status, detail),
            ApiError::Rejected {
                status,
                detail: None,
            } => write!(f, "HTTP {}", status),
            ApiError::Decode(e) => write!(f, "invalid response: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

/// Map an HTTP status and raw body onto the error taxonomy.
///
/// Returns the body back on 2xx so the caller can decode it.
pub fn classify_response(status: u16, body: String) -> ApiResult<String> {
    match status {
        200..=299 => Ok(body),
        401 => Err(ApiError::Unauthorized),
        404 => Err(ApiError::NotFound(extract_detail(&body))),
        _ => Err(ApiError::Rejected {
            status,
            detail: extract_detail(&body),
        }),
    }
}

/// Pull `detail` out of a FastAPI-style error body.
///
/// Validation errors carry a list there instead of a string; those are
/// treated as absent so the caller's fallback is used.
pub fn extract_detail(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("detail")?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_success_returns_body() {
        let body = classify_response(200, "{\"ok\":true}".into()).unwrap();
        assert_eq!(body, "{\"ok\":true}");
        assert!(classify_response(204, String::new()).is_ok());
    }

    #[test]
    fn test_classify_unauthorized() {
        let err = classify_response(401, r#"{"detail":"Could not validate"}"#.into());
        assert_eq!(err, Err(ApiError::Unauthorized));
    }

    #[test]
    fn test_classify_not_found_keeps_detail() {
        let err = classify_response(404, r#"{"detail":"Link not found"}"#.into()).unwrap_err();
        assert_eq!(err, ApiError::NotFound(Some("Link not found".into())));
    }

    #[test]
    fn test_classify_rejected() {
        let err = classify_response(403, r#"{"detail":"Admin access required"}"#.into())
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 403,
                detail: Some("Admin access required".into())
            }
        );
    }

    #[test]
    fn test_extract_detail_ignores_validation_lists() {
        let body = r#"{"detail":[{"loc":["body","url"],"msg":"invalid url"}]}"#;
        assert_eq!(extract_detail(body), None);
        assert_eq!(extract_detail("not json"), None);
        assert_eq!(extract_detail(r#"{"detail":""}"#), None);
    }

    #[test]
    fn test_user_message() {
        assert_eq!(
            ApiError::Network("refused".into()).user_message("Login failed"),
            CONNECT_FAILED
        );
        assert_eq!(
            ApiError::Rejected {
                status: 400,
                detail: None
            }
            .user_message("Login failed"),
            "Login failed"
        );
        assert_eq!(
            ApiError::Rejected {
                status: 400,
                detail: Some("Username already registered".into())
            }
            .user_message("Registration failed"),
            "Username already registered"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Unauthorized.to_string(), "unauthorized");
        assert_eq!(
            ApiError::Rejected {
                status: 500,
                detail: None
            }
            .to_string(),
            "HTTP 500"
        );
    }
}
