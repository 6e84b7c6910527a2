//! Shared test doubles
//!
//! `MockApi` is a scripted in-memory backend: it keeps links and users,
//! accepts one bearer token, counts every call and can be told to fail
//! or stall specific operations.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;

use trustmebro::client::{ApiError, ApiResult, ShortenerApi};
use trustmebro::models::{Credentials, CurrentUser, Link, User, UserPatch};
use trustmebro::session::Session;

pub const TOKEN: &str = "valid-token";

pub fn link(code: &str, url: &str, clicks: u64) -> Link {
    Link {
        short_code: code.to_string(),
        original_url: url.to_string(),
        clicks,
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        created_by_username: None,
    }
}

pub fn user(id: i64, name: &str, is_active: bool, is_admin: bool) -> User {
    User {
        id,
        username: name.to_string(),
        is_active,
        is_admin,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn admin_me() -> CurrentUser {
    CurrentUser {
        id: 1,
        username: "root".to_string(),
        is_admin: true,
    }
}

pub fn plain_me() -> CurrentUser {
    CurrentUser {
        id: 2,
        username: "bob".to_string(),
        is_admin: false,
    }
}

#[derive(Default)]
struct MockState {
    token: Option<String>,
    me: Option<CurrentUser>,
    links: Vec<Link>,
    users: Vec<User>,
    destinations: HashMap<String, String>,
    /// One-shot failures keyed by operation name
    failures: HashMap<&'static str, VecDeque<ApiError>>,
    /// Scripted `list_links` replies: (delay, links)
    link_script: VecDeque<(Duration, Vec<Link>)>,
    resolve_delay: Duration,
    calls: HashMap<&'static str, usize>,
    patches: Vec<(i64, UserPatch)>,
    next_code: usize,
}

#[derive(Default)]
pub struct MockApi {
    state: Mutex<MockState>,
}

impl MockApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.state.lock().token = Some(TOKEN.to_string());
        api
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn with_me(self, me: CurrentUser) -> Self {
        self.state.lock().me = Some(me);
        self
    }

    pub fn with_links(self, links: Vec<Link>) -> Self {
        self.state.lock().links = links;
        self
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        self.state.lock().users = users;
        self
    }

    pub fn with_destination(self, code: &str, url: &str) -> Self {
        self.state
            .lock()
            .destinations
            .insert(code.to_string(), url.to_string());
        self
    }

    pub fn with_resolve_delay(self, delay: Duration) -> Self {
        self.state.lock().resolve_delay = delay;
        self
    }

    /// Make the next `op` call fail with `err`
    pub fn fail_next(&self, op: &'static str, err: ApiError) {
        self.state
            .lock()
            .failures
            .entry(op)
            .or_default()
            .push_back(err);
    }

    /// Queue a `list_links` reply that arrives after `delay`
    pub fn script_links(&self, delay: Duration, links: Vec<Link>) {
        self.state.lock().link_script.push_back((delay, links));
    }

    pub fn set_links(&self, links: Vec<Link>) {
        self.state.lock().links = links;
    }

    /// Server-side token revocation
    pub fn revoke_token(&self) {
        self.state.lock().token = None;
    }

    pub fn calls(&self, op: &str) -> usize {
        self.state.lock().calls.get(op).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.state.lock().calls.values().sum()
    }

    pub fn patches(&self) -> Vec<(i64, UserPatch)> {
        self.state.lock().patches.clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.state.lock().users.clone()
    }

    fn enter(&self, op: &'static str, token: Option<&str>) -> ApiResult<()> {
        let mut state = self.state.lock();
        *state.calls.entry(op).or_default() += 1;
        if let Some(err) = state.failures.get_mut(op).and_then(|q| q.pop_front()) {
            return Err(err);
        }
        if let Some(token) = token
            && state.token.as_deref() != Some(token)
        {
            return Err(ApiError::Unauthorized);
        }
        Ok(())
    }
}

#[async_trait]
impl ShortenerApi for MockApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        self.enter("login", None)?;
        if credentials.password == "hunter22" {
            Ok(TOKEN.to_string())
        } else {
            Err(ApiError::Unauthorized)
        }
    }

    async fn register(&self, credentials: &Credentials) -> ApiResult<()> {
        self.enter("register", None)?;
        let mut state = self.state.lock();
        if state.users.iter().any(|u| u.username == credentials.username) {
            return Err(ApiError::Rejected {
                status: 400,
                detail: Some("Username already registered".to_string()),
            });
        }
        let id = state.users.len() as i64 + 100;
        state
            .users
            .push(user(id, &credentials.username, false, false));
        Ok(())
    }

    async fn me(&self, token: &str) -> ApiResult<CurrentUser> {
        self.enter("me", Some(token))?;
        self.state
            .lock()
            .me
            .clone()
            .ok_or(ApiError::Unauthorized)
    }

    async fn list_links(&self, token: &str) -> ApiResult<Vec<Link>> {
        self.enter("list_links", Some(token))?;
        let scripted = self.state.lock().link_script.pop_front();
        match scripted {
            Some((delay, links)) => {
                tokio::time::sleep(delay).await;
                Ok(links)
            }
            None => Ok(self.state.lock().links.clone()),
        }
    }

    async fn create_link(&self, token: &str, url: &str) -> ApiResult<Link> {
        self.enter("create_link", Some(token))?;
        let mut state = self.state.lock();
        state.next_code += 1;
        let created = link(&format!("gen{}", state.next_code), url, 0);
        state.links.insert(0, created.clone());
        Ok(created)
    }

    async fn delete_link(&self, token: &str, short_code: &str) -> ApiResult<()> {
        self.enter("delete_link", Some(token))?;
        let mut state = self.state.lock();
        let before = state.links.len();
        state.links.retain(|l| l.short_code != short_code);
        if state.links.len() == before {
            return Err(ApiError::NotFound(Some("Link not found".to_string())));
        }
        Ok(())
    }

    async fn resolve(&self, short_code: &str) -> ApiResult<String> {
        self.enter("resolve", None)?;
        let delay = self.state.lock().resolve_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.state
            .lock()
            .destinations
            .get(short_code)
            .cloned()
            .ok_or(ApiError::NotFound(None))
    }

    async fn list_users(&self, token: &str) -> ApiResult<Vec<User>> {
        self.enter("list_users", Some(token))?;
        Ok(self.state.lock().users.clone())
    }

    async fn update_user(&self, token: &str, user_id: i64, patch: &UserPatch) -> ApiResult<User> {
        self.enter("update_user", Some(token))?;
        let mut state = self.state.lock();
        state.patches.push((user_id, patch.clone()));
        let target = state
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(ApiError::NotFound(Some("User not found".to_string())))?;
        if let Some(active) = patch.is_active {
            target.is_active = active;
        }
        if let Some(admin) = patch.is_admin {
            target.is_admin = admin;
        }
        Ok(target.clone())
    }

    async fn delete_user(&self, token: &str, user_id: i64) -> ApiResult<()> {
        self.enter("delete_user", Some(token))?;
        self.state.lock().users.retain(|u| u.id != user_id);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// In-memory session already holding [`TOKEN`]
pub fn logged_in_session() -> Session {
    let session = Session::ephemeral();
    session.update(TOKEN).unwrap();
    session
}
