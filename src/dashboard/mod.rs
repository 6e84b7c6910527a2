//! Dashboard controller
//!
//! Owns all server-derived state of the authenticated console: current
//! user, links, users, and the transient UI bits around them. Front ends
//! read it through [`Dashboard::snapshot`] and drive it through the async
//! operations below.

mod copy;
mod poller;
mod sequence;

pub use copy::{COPY_ACK, Clipboard, CopyTracker, MemoryClipboard};
pub use sequence::SequenceGate;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::client::{ApiError, ShortenerApi};
use crate::config::StaticConfig;
use crate::errors::{Result, TrustMeBroError};
use crate::models::{CurrentUser, Link, User, UserPatch};
use crate::session::Session;
use crate::utils::url_validator::{INVALID_URL_MESSAGE, validate_target_url};

pub const CREATE_FAILED: &str = "Failed to create link";
pub const CONFIRM_DELETE_LINK: &str = "Are you sure you want to delete this link?";
pub const CONFIRM_DELETE_USER: &str = "Are you sure you want to delete this user?";
pub const SELF_ACTION_REJECTED: &str = "You cannot change your own account";
/// tokio 的 interval 不接受 0
pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Interactive yes/no step before destructive requests
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirmer for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Links,
    Users,
}

#[derive(Debug, Clone)]
pub struct DashboardSettings {
    /// Prefix of generated and copied short links
    pub frontend_url: String,
    pub poll_interval: Duration,
    pub copy_ack: Duration,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:3061".to_string(),
            poll_interval: Duration::from_secs(30),
            copy_ack: COPY_ACK,
        }
    }
}

impl DashboardSettings {
    pub fn from_config(config: &StaticConfig) -> Self {
        Self {
            frontend_url: config.frontend.public_url.clone(),
            poll_interval: Duration::from_secs(config.ui.poll_interval_secs)
                .max(MIN_POLL_INTERVAL),
            copy_ack: Duration::from_millis(config.ui.copy_ack_ms),
        }
    }
}

/// Point-in-time copy of the dashboard view state
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub current_user: Option<CurrentUser>,
    pub links: Vec<Link>,
    pub users: Vec<User>,
    pub generated_link: Option<String>,
    pub error: Option<String>,
    pub is_loading: bool,
    pub active_tab: Tab,
    pub url_input: String,
}

impl DashboardSnapshot {
    pub fn is_admin(&self) -> bool {
        self.current_user.as_ref().is_some_and(|u| u.is_admin)
    }
}

#[derive(Default)]
struct DashboardState {
    view: DashboardSnapshot,
    me_seq: SequenceGate,
    links_seq: SequenceGate,
    users_seq: SequenceGate,
    copy: CopyTracker,
    poller: Option<JoinHandle<()>>,
}

pub(crate) struct DashboardInner {
    api: Arc<dyn ShortenerApi>,
    session: Session,
    settings: DashboardSettings,
    state: Mutex<DashboardState>,
}

impl Drop for DashboardInner {
    fn drop(&mut self) {
        if let Some(handle) = self.state.get_mut().poller.take() {
            handle.abort();
        }
    }
}

/// Shared handle; clones drive the same dashboard
#[derive(Clone)]
pub struct Dashboard {
    inner: Arc<DashboardInner>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn ShortenerApi>, session: Session, settings: DashboardSettings) -> Self {
        let state = DashboardState {
            copy: CopyTracker::new(settings.copy_ack),
            ..Default::default()
        };
        Self {
            inner: Arc::new(DashboardInner {
                api,
                session,
                settings,
                state: Mutex::new(state),
            }),
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.inner.state.lock().view.clone()
    }

    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.inner.settings
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.session.is_authenticated()
    }

    pub fn is_polling(&self) -> bool {
        self.inner
            .state
            .lock()
            .poller
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    /// Fully qualified short link for `code`
    pub fn short_link(&self, code: &str) -> String {
        format!(
            "{}/{}",
            self.inner.settings.frontend_url.trim_end_matches('/'),
            code
        )
    }

    /// Load identity and data, then start polling.
    ///
    /// Returns whether the dashboard is authenticated afterwards.
    pub async fn mount(&self) -> bool {
        if !self.load().await {
            return false;
        }
        self.start_polling();
        true
    }

    /// One-shot load without the poller
    pub async fn load(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }

        match self.refresh_me().await {
            Err(e) if e.is_unauthorized() => return false,
            Err(e) => warn!("Error fetching current user: {}", e),
            Ok(()) => {}
        }
        if let Err(e) = self.refresh_links().await {
            if e.is_unauthorized() {
                return false;
            }
            warn!("Error fetching links: {}", e);
        }
        if let Err(e) = self.refresh_users().await {
            if e.is_unauthorized() {
                return false;
            }
            warn!("Error fetching users: {}", e);
        }
        self.is_authenticated()
    }

    /// Adopt a token obtained by the login form and enter the console
    pub async fn on_login_success(&self, token: &str) -> Result<bool> {
        self.inner.session.update(token)?;
        Ok(self.mount().await)
    }

    pub fn start_polling(&self) {
        let mut state = self.inner.state.lock();
        if state.poller.as_ref().is_some_and(|h| !h.is_finished()) {
            return;
        }
        let weak = Arc::downgrade(&self.inner);
        let period = self.inner.settings.poll_interval.max(MIN_POLL_INTERVAL);
        state.poller = Some(poller::spawn(weak, period));
        debug!("Link polling started ({}s)", period.as_secs());
    }

    pub fn stop_polling(&self) {
        if let Some(handle) = self.inner.state.lock().poller.take() {
            handle.abort();
        }
    }

    /// Clear the session and every cached collection
    pub fn logout(&self) {
        let poller = {
            let mut state = self.inner.state.lock();
            state.me_seq.invalidate();
            state.links_seq.invalidate();
            state.users_seq.invalidate();
            state.copy.clear();
            state.view = DashboardSnapshot::default();
            state.poller.take()
        };
        if let Some(handle) = poller {
            handle.abort();
        }
        if let Err(e) = self.inner.session.teardown() {
            warn!("Failed to clear stored session: {}", e);
        }
        info!("Logged out");
    }

    fn require_token(&self) -> Result<String> {
        self.inner
            .session
            .token()
            .ok_or_else(|| TrustMeBroError::session("Not logged in"))
    }

    /// Route an API failure: 401 logs out (if `token` is still current)
    fn api_failure(&self, token: &str, what: &str, err: ApiError) -> TrustMeBroError {
        if err.is_unauthorized() {
            if self.inner.session.token().as_deref() == Some(token) {
                warn!("Unauthorized while {}, logging out", what);
                self.logout();
            }
        } else {
            debug!("Error {}: {}", what, err);
        }
        err.into()
    }

    pub async fn refresh_me(&self) -> Result<()> {
        let token = self.require_token()?;
        let seq = self.inner.state.lock().me_seq.issue();

        match self.inner.api.me(&token).await {
            Ok(user) => {
                let mut state = self.inner.state.lock();
                if state.me_seq.try_apply(seq) {
                    if !user.is_admin {
                        state.view.active_tab = Tab::Links;
                        state.view.users.clear();
                    }
                    state.view.current_user = Some(user);
                }
                Ok(())
            }
            Err(e) => Err(self.api_failure(&token, "fetching current user", e)),
        }
    }

    pub async fn refresh_links(&self) -> Result<()> {
        let token = self.require_token()?;
        let seq = self.inner.state.lock().links_seq.issue();

        match self.inner.api.list_links(&token).await {
            Ok(links) => {
                let mut state = self.inner.state.lock();
                if state.links_seq.try_apply(seq) {
                    state.view.links = links;
                } else {
                    debug!("Discarding stale link list (seq {})", seq);
                }
                Ok(())
            }
            Err(e) => Err(self.api_failure(&token, "fetching links", e)),
        }
    }

    /// Re-fetch users; a no-op unless the current user is an admin
    pub async fn refresh_users(&self) -> Result<()> {
        let token = self.require_token()?;
        let seq = {
            let mut state = self.inner.state.lock();
            if !state.view.is_admin() {
                return Ok(());
            }
            state.users_seq.issue()
        };

        match self.inner.api.list_users(&token).await {
            Ok(users) => {
                let mut state = self.inner.state.lock();
                if state.users_seq.try_apply(seq) {
                    state.view.users = users;
                } else {
                    debug!("Discarding stale user list (seq {})", seq);
                }
                Ok(())
            }
            Err(e) => Err(self.api_failure(&token, "fetching users", e)),
        }
    }

    pub fn set_url_input(&self, value: &str) {
        self.inner.state.lock().view.url_input = value.to_string();
    }

    pub fn clear_error(&self) {
        self.inner.state.lock().view.error = None;
    }

    /// Switch tabs; the users tab needs admin rights
    pub fn select_tab(&self, tab: Tab) -> Tab {
        let mut state = self.inner.state.lock();
        state.view.active_tab = match tab {
            Tab::Users if !state.view.is_admin() => Tab::Links,
            other => other,
        };
        state.view.active_tab
    }

    /// Submit `raw` for shortening and return the generated short link
    pub async fn create_link(&self, raw: &str) -> Result<String> {
        let token = self.require_token()?;

        let url = match validate_target_url(raw) {
            Ok(url) => url,
            Err(e) => {
                debug!("Rejected link target {:?}: {}", raw, e);
                self.inner.state.lock().view.error = Some(INVALID_URL_MESSAGE.to_string());
                return Err(TrustMeBroError::validation(INVALID_URL_MESSAGE));
            }
        };

        {
            let mut state = self.inner.state.lock();
            state.view.is_loading = true;
            state.view.error = None;
        }

        let result = self.inner.api.create_link(&token, &url).await;
        let outcome = match result {
            Ok(link) => {
                let generated = self.short_link(&link.short_code);
                info!("Created short link {} -> {}", generated, url);
                {
                    let mut state = self.inner.state.lock();
                    state.view.generated_link = Some(generated.clone());
                }
                if let Err(e) = self.refresh_links().await
                    && !e.is_unauthorized()
                {
                    warn!("Error fetching links: {}", e);
                }
                self.inner.state.lock().view.url_input.clear();
                Ok(generated)
            }
            Err(e) => {
                if !e.is_unauthorized() {
                    self.inner.state.lock().view.error = Some(e.user_message(CREATE_FAILED));
                }
                Err(self.api_failure(&token, "creating link", e))
            }
        };

        self.inner.state.lock().view.is_loading = false;
        outcome
    }

    /// Delete a link after confirmation; `Ok(false)` when declined
    pub async fn delete_link(&self, short_code: &str, confirmer: &dyn Confirmer) -> Result<bool> {
        let token = self.require_token()?;
        if !confirmer.confirm(CONFIRM_DELETE_LINK) {
            return Ok(false);
        }

        match self.inner.api.delete_link(&token, short_code).await {
            Ok(()) => {
                info!("Deleted link {}", short_code);
                self.refresh_after_mutation(self.refresh_links().await, "links");
                Ok(true)
            }
            Err(e) => Err(self.api_failure(&token, "deleting link", e)),
        }
    }

    /// The mutation already went through; a failed re-fetch only gets logged
    fn refresh_after_mutation(&self, result: Result<()>, what: &str) {
        if let Err(e) = result
            && !e.is_unauthorized()
        {
            warn!("Error fetching {}: {}", what, e);
        }
    }

    fn ensure_not_self(&self, user_id: i64) -> Result<()> {
        let state = self.inner.state.lock();
        if state
            .view
            .current_user
            .as_ref()
            .is_some_and(|me| me.is_self(user_id))
        {
            return Err(TrustMeBroError::validation(SELF_ACTION_REJECTED));
        }
        Ok(())
    }

    async fn patch_user(&self, user_id: i64, patch: UserPatch) -> Result<User> {
        let token = self.require_token()?;
        self.ensure_not_self(user_id)?;

        match self.inner.api.update_user(&token, user_id, &patch).await {
            Ok(user) => {
                debug!("Updated user {}: {:?}", user_id, patch);
                self.refresh_after_mutation(self.refresh_users().await, "users");
                Ok(user)
            }
            Err(e) => Err(self.api_failure(&token, "updating user", e)),
        }
    }

    /// Send `{is_active: !current}`
    pub async fn toggle_user_active(&self, user_id: i64, current: bool) -> Result<User> {
        self.patch_user(user_id, UserPatch::active(!current)).await
    }

    /// Send `{is_admin: !current}`
    pub async fn toggle_user_admin(&self, user_id: i64, current: bool) -> Result<User> {
        self.patch_user(user_id, UserPatch::admin(!current)).await
    }

    /// Delete a user after confirmation; `Ok(false)` when declined
    pub async fn delete_user(&self, user_id: i64, confirmer: &dyn Confirmer) -> Result<bool> {
        let token = self.require_token()?;
        self.ensure_not_self(user_id)?;
        if !confirmer.confirm(CONFIRM_DELETE_USER) {
            return Ok(false);
        }

        match self.inner.api.delete_user(&token, user_id).await {
            Ok(()) => {
                info!("Deleted user {}", user_id);
                self.refresh_after_mutation(self.refresh_users().await, "users");
                Ok(true)
            }
            Err(e) => Err(self.api_failure(&token, "deleting user", e)),
        }
    }

    /// Put the short link on the clipboard and mark `short_code` as copied
    pub fn copy_link(&self, short_code: &str, clipboard: &dyn Clipboard) -> Result<String> {
        let url = self.short_link(short_code);
        clipboard.set_text(&url)?;
        self.inner.state.lock().copy.mark(short_code);
        Ok(url)
    }

    pub fn is_copied(&self, short_code: &str) -> bool {
        self.inner.state.lock().copy.is_copied(short_code)
    }

    pub fn copied_code(&self) -> Option<String> {
        self.inner
            .state
            .lock()
            .copy
            .copied_code()
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.poll_interval, Duration::from_secs(30));
        assert_eq!(settings.copy_ack, Duration::from_secs(2));
    }

    #[test]
    fn test_zero_poll_interval_is_clamped() {
        let mut config = StaticConfig::default();
        config.ui.poll_interval_secs = 0;
        let settings = DashboardSettings::from_config(&config);
        assert_eq!(settings.poll_interval, MIN_POLL_INTERVAL);

        config.ui.poll_interval_secs = 45;
        let settings = DashboardSettings::from_config(&config);
        assert_eq!(settings.poll_interval, Duration::from_secs(45));
    }

    #[test]
    fn test_closure_confirmer() {
        let yes = |_: &str| true;
        let no = |prompt: &str| prompt.is_empty();
        assert!(yes.confirm(CONFIRM_DELETE_LINK));
        assert!(!no.confirm(CONFIRM_DELETE_USER));
    }
}
