use async_trait::async_trait;

use super::ApiResult;
use crate::models::{Credentials, CurrentUser, Link, User, UserPatch};

/// Remote operations of the shortener backend.
///
/// Authenticated calls take the bearer token explicitly; only `login`,
/// `register` and `resolve` go out without one.
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    /// `POST /auth/login` → access token
    async fn login(&self, credentials: &Credentials) -> ApiResult<String>;

    /// `POST /auth/register`; new accounts stay inactive until an admin approves
    async fn register(&self, credentials: &Credentials) -> ApiResult<()>;

    /// `GET /auth/me`
    async fn me(&self, token: &str) -> ApiResult<CurrentUser>;

    /// `GET /links`
    async fn list_links(&self, token: &str) -> ApiResult<Vec<Link>>;

    /// `POST /links/create`
    async fn create_link(&self, token: &str, url: &str) -> ApiResult<Link>;

    /// `DELETE /links/{short_code}`
    async fn delete_link(&self, token: &str, short_code: &str) -> ApiResult<()>;

    /// `GET /redirect/{short_code}` → destination URL
    async fn resolve(&self, short_code: &str) -> ApiResult<String>;

    /// `GET /users` (admin)
    async fn list_users(&self, token: &str) -> ApiResult<Vec<User>>;

    /// `PATCH /users/{id}` (admin)
    async fn update_user(&self, token: &str, user_id: i64, patch: &UserPatch) -> ApiResult<User>;

    /// `DELETE /users/{id}` (admin)
    async fn delete_user(&self, token: &str, user_id: i64) -> ApiResult<()>;

    fn name(&self) -> &'static str;
}
