use std::time::Duration;

use tracing::info;

use super::FormError;
use crate::client::ShortenerApi;
use crate::models::Credentials;
use crate::router::Route;

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const MIN_PASSWORD_LEN: usize = 8;

/// Pause on the success screen before moving on to login
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub error: Option<String>,
    pub success: bool,
    pub is_loading: bool,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(username: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
            ..Default::default()
        }
    }

    /// Local checks run before any request: confirmation first, then length
    pub fn validate(&self) -> Result<(), FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::Invalid(PASSWORD_MISMATCH.to_string()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::Invalid(PASSWORD_TOO_SHORT.to_string()));
        }
        Ok(())
    }

    /// Register the account. Success does not log in; new accounts wait
    /// for an admin to activate them.
    pub async fn submit(&mut self, api: &dyn ShortenerApi) -> Result<(), FormError> {
        self.error = None;

        if let Err(e) = self.validate() {
            self.error = Some(e.message().to_string());
            return Err(e);
        }

        self.is_loading = true;
        let credentials = Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        };
        let result = api
            .register(&credentials)
            .await
            .map_err(|e| FormError::Server(e.user_message(REGISTER_FAILED)));
        self.is_loading = false;

        match &result {
            Ok(()) => {
                info!("Registered {} (pending activation)", self.username);
                self.success = true;
            }
            Err(e) => self.error = Some(e.message().to_string()),
        }
        result
    }

    /// Where the success screen leads after [`REDIRECT_DELAY`]
    pub fn redirect_target(&self) -> Route {
        Route::Dashboard
    }
}
