//! HTTP implementation of [`ShortenerApi`]
//!
//! 使用 ureq 同步客户端，在 spawn_blocking 中执行请求

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use ureq::{Agent, RequestBuilder};

use super::{ApiError, ApiResult, ShortenerApi, classify_response};
use crate::models::{
    CreateLinkRequest, Credentials, CurrentUser, Link, RedirectResponse, TokenResponse, User,
    UserPatch,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// A request ready to be handed to the blocking pool
#[derive(Debug)]
struct PreparedRequest {
    method: Method,
    url: String,
    token: Option<String>,
    body: Option<serde_json::Value>,
}

/// ureq-backed API client.
///
/// The agent is shared by clones; each call runs on tokio's blocking pool.
#[derive(Clone)]
pub struct HttpApi {
    base_url: String,
    agent: Agent,
}

impl HttpApi {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> PreparedRequest {
        PreparedRequest {
            method,
            url: self.url(path),
            token: None,
            body: None,
        }
    }

    async fn execute(&self, req: PreparedRequest) -> ApiResult<String> {
        debug!("API {:?} {}", req.method, req.url);
        let agent = self.agent.clone();

        tokio::task::spawn_blocking(move || send_blocking(&agent, req))
            .await
            .unwrap_or_else(|e| {
                warn!("API spawn_blocking failed: {}", e);
                Err(ApiError::Network(format!("request task failed: {}", e)))
            })
    }
}

impl PreparedRequest {
    fn bearer(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    fn json<T: serde::Serialize>(mut self, body: &T) -> ApiResult<Self> {
        let value =
            serde_json::to_value(body).map_err(|e| ApiError::Decode(format!("encode: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }
}

fn with_auth<B>(builder: RequestBuilder<B>, auth: Option<&str>) -> RequestBuilder<B> {
    match auth {
        Some(value) => builder.header("Authorization", value),
        None => builder,
    }
}

/// Perform the request on the current thread and classify the response
fn send_blocking(agent: &Agent, req: PreparedRequest) -> ApiResult<String> {
    let auth = req.token.as_ref().map(|t| format!("Bearer {}", t));
    let auth = auth.as_deref();
    let body = req.body.unwrap_or(serde_json::Value::Null);

    let result = match req.method {
        Method::Get => with_auth(agent.get(&req.url), auth).call(),
        Method::Delete => with_auth(agent.delete(&req.url), auth).call(),
        Method::Post => with_auth(agent.post(&req.url), auth).send_json(&body),
        Method::Patch => with_auth(agent.patch(&req.url), auth).send_json(&body),
    };

    let mut resp = result.map_err(|e| {
        warn!("API request to \"{}\" failed: {}", req.url, e);
        ApiError::Network(e.to_string())
    })?;

    let status = resp.status().as_u16();
    let text = resp
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Network(format!("read body: {}", e)))?;

    trace!("API {} -> {} ({} bytes)", req.url, status, text.len());
    classify_response(status, text)
}

fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[async_trait]
impl ShortenerApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        let req = self.request(Method::Post, "/auth/login").json(credentials)?;
        let body = self.execute(req).await?;
        let token: TokenResponse = decode(&body)?;
        Ok(token.access_token)
    }

    async fn register(&self, credentials: &Credentials) -> ApiResult<()> {
        let req = self
            .request(Method::Post, "/auth/register")
            .json(credentials)?;
        self.execute(req).await.map(|_| ())
    }

    async fn me(&self, token: &str) -> ApiResult<CurrentUser> {
        let req = self.request(Method::Get, "/auth/me").bearer(token);
        decode(&self.execute(req).await?)
    }

    async fn list_links(&self, token: &str) -> ApiResult<Vec<Link>> {
        let req = self.request(Method::Get, "/links").bearer(token);
        decode(&self.execute(req).await?)
    }

    async fn create_link(&self, token: &str, url: &str) -> ApiResult<Link> {
        let req = self
            .request(Method::Post, "/links/create")
            .bearer(token)
            .json(&CreateLinkRequest {
                url: url.to_string(),
            })?;
        decode(&self.execute(req).await?)
    }

    async fn delete_link(&self, token: &str, short_code: &str) -> ApiResult<()> {
        let path = format!("/links/{}", segment(short_code));
        let req = self.request(Method::Delete, &path).bearer(token);
        self.execute(req).await.map(|_| ())
    }

    async fn resolve(&self, short_code: &str) -> ApiResult<String> {
        let path = format!("/redirect/{}", segment(short_code));
        let req = self.request(Method::Get, &path);
        let resp: RedirectResponse = decode(&self.execute(req).await?)?;
        Ok(resp.url)
    }

    async fn list_users(&self, token: &str) -> ApiResult<Vec<User>> {
        let req = self.request(Method::Get, "/users").bearer(token);
        decode(&self.execute(req).await?)
    }

    async fn update_user(&self, token: &str, user_id: i64, patch: &UserPatch) -> ApiResult<User> {
        let path = format!("/users/{}", user_id);
        let req = self.request(Method::Patch, &path).bearer(token).json(patch)?;
        decode(&self.execute(req).await?)
    }

    async fn delete_user(&self, token: &str, user_id: i64) -> ApiResult<()> {
        let path = format!("/users/{}", user_id);
        let req = self.request(Method::Delete, &path).bearer(token);
        self.execute(req).await.map(|_| ())
    }

    fn name(&self) -> &'static str {
        "HTTP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = HttpApi::new("http://localhost:3062/", Duration::from_secs(1));
        assert_eq!(api.base_url(), "http://localhost:3062");
        assert_eq!(api.url("/links"), "http://localhost:3062/links");
    }

    #[test]
    fn test_segment_is_percent_encoded() {
        assert_eq!(segment("abc"), "abc");
        assert_eq!(segment("a b/c"), "a%20b%2Fc");
    }

    #[test]
    fn test_prepared_request_bearer_and_body() {
        let api = HttpApi::new("http://api", Duration::from_secs(1));
        let req = api
            .request(Method::Post, "/links/create")
            .bearer("tok")
            .json(&CreateLinkRequest {
                url: "https://example.com".into(),
            })
            .unwrap();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url, "http://api/links/create");
        assert_eq!(req.token.as_deref(), Some("tok"));
        assert_eq!(
            req.body.unwrap()["url"].as_str(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_decode_error_is_decode_variant() {
        let err = decode::<CurrentUser>("{}").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    /// 连接不可达地址应返回 Network 错误
    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let api = HttpApi::new("http://127.0.0.1:9", Duration::from_millis(500));
        let err = api.resolve("abc").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got: {:?}", err);
    }
}
