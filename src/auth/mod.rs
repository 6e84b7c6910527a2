//! Login and registration forms
//!
//! Both forms keep only their inputs plus error/loading flags. Submission
//! talks to [`ShortenerApi`](crate::client::ShortenerApi); the login form
//! also persists the token into the [`Session`](crate::session::Session).

mod login;
mod register;

pub use login::{LOGIN_FAILED, LoginForm};
pub use register::{
    MIN_PASSWORD_LEN, PASSWORD_MISMATCH, PASSWORD_TOO_SHORT, REDIRECT_DELAY, REGISTER_FAILED,
    RegisterForm,
};

use std::fmt;

/// Why a form submission did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Blocked locally; no request was sent
    Invalid(String),
    /// The request went out and failed
    Server(String),
}

impl FormError {
    pub fn message(&self) -> &str {
        match self {
            FormError::Invalid(msg) | FormError::Server(msg) => msg,
        }
    }

    pub fn reached_network(&self) -> bool {
        matches!(self, FormError::Server(_))
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FormError {}

impl From<FormError> for crate::errors::TrustMeBroError {
    fn from(err: FormError) -> Self {
        crate::errors::TrustMeBroError::validation(err.message())
    }
}
