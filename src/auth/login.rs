use tracing::{info, warn};

use super::FormError;
use crate::client::ShortenerApi;
use crate::models::Credentials;
use crate::session::Session;

pub const LOGIN_FAILED: &str = "Login failed";

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    /// Post the credentials; on success the token is stored in `session`
    /// and returned.
    pub async fn submit(
        &mut self,
        api: &dyn ShortenerApi,
        session: &Session,
    ) -> Result<String, FormError> {
        self.is_loading = true;
        self.error = None;

        let credentials = Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        };
        let result = match api.login(&credentials).await {
            Ok(token) => match session.update(&token) {
                Ok(()) => {
                    info!("Logged in as {}", self.username);
                    Ok(token)
                }
                Err(e) => {
                    warn!("Failed to persist session: {}", e);
                    Err(FormError::Server(e.message()))
                }
            },
            Err(e) => Err(FormError::Server(e.user_message(LOGIN_FAILED))),
        };

        if let Err(e) = &result {
            self.error = Some(e.message().to_string());
        }
        self.is_loading = false;
        result
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
