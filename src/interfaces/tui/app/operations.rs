//! Actions that talk to the API

use tokio::time::Instant;
use tracing::{debug, warn};

use super::{App, CurrentScreen, DeleteTarget, SystemClipboard};
use crate::auth::REDIRECT_DELAY;
use crate::errors::{Result, TrustMeBroError};
use crate::router::{Route, short_code_from_target};

impl App {
    /// Surface a dashboard failure; 401s already logged out and are not shown
    fn report(&mut self, err: TrustMeBroError) {
        if err.is_unauthorized() {
            return;
        }
        let msg = match &err {
            TrustMeBroError::Api(api) => api.user_message("Request failed"),
            other => other.message(),
        };
        self.set_error(msg);
    }

    pub async fn submit_login(&mut self) {
        if self.login.is_loading {
            return;
        }
        let result = self
            .login
            .submit(self.ctx.api.as_ref(), &self.ctx.session)
            .await;

        match result {
            Ok(token) => match self.dashboard.on_login_success(&token).await {
                Ok(true) => {
                    self.login.clear();
                    self.link_index = 0;
                    self.user_index = 0;
                    self.current_screen = CurrentScreen::Dashboard;
                    self.set_status("Logged in");
                }
                Ok(false) => self.set_error("Session was rejected by the server"),
                Err(e) => self.report(e),
            },
            Err(e) => debug!("Login form error: {}", e),
        }
    }

    pub async fn submit_register(&mut self) {
        if self.register.is_loading || self.register.success {
            return;
        }
        match self.register.submit(self.ctx.api.as_ref()).await {
            Ok(()) => {
                self.register_redirect_at = Some(Instant::now() + REDIRECT_DELAY);
            }
            Err(e) => debug!("Register form error: {}", e),
        }
    }

    /// Landing page: open the miner for whatever was typed
    pub async fn visit_from_landing(&mut self) {
        match short_code_from_target(&self.visit_input, &self.ctx.config.frontend.public_url) {
            Some(code) => {
                self.visit_editing = false;
                self.navigate(Route::Redirect(code)).await;
            }
            None => self.set_error("Not a short link"),
        }
    }

    pub async fn create_link(&mut self) {
        let raw = self.snapshot().url_input;
        match self.dashboard.create_link(&raw).await {
            Ok(generated) => {
                self.url_editing = false;
                self.set_status(format!("Created {}", generated));
            }
            // create_link 自己把错误写进 snapshot.error
            Err(e) => debug!("Create link failed: {}", e),
        }
    }

    pub fn copy_selected(&mut self) {
        let Some(link) = self.selected_link() else {
            return;
        };

        if self.clipboard.is_none() {
            match SystemClipboard::open() {
                Ok(clipboard) => self.clipboard = Some(clipboard),
                Err(e) => {
                    warn!("{}", e);
                    self.set_error(e.message());
                    return;
                }
            }
        }
        let Some(clipboard) = self.clipboard.as_ref() else {
            return;
        };

        match self.dashboard.copy_link(&link.short_code, clipboard) {
            Ok(url) => self.set_status(format!("Copied {}", url)),
            Err(e) => self.set_error(e.message()),
        }
    }

    pub fn request_delete_link(&mut self) {
        if let Some(link) = self.selected_link() {
            self.delete_target = Some(DeleteTarget::Link {
                short_code: link.short_code,
                url: link.original_url,
            });
            self.open_overlay(CurrentScreen::DeleteConfirm);
        }
    }

    pub fn request_delete_user(&mut self) {
        let Some(user) = self.selected_user() else {
            return;
        };
        let is_self = self
            .snapshot()
            .current_user
            .is_some_and(|me| me.is_self(user.id));
        if is_self {
            self.set_error(crate::dashboard::SELF_ACTION_REJECTED);
            return;
        }
        self.delete_target = Some(DeleteTarget::User {
            id: user.id,
            username: user.username,
        });
        self.open_overlay(CurrentScreen::DeleteConfirm);
    }

    /// The popup already asked, so the confirmer always agrees
    pub async fn confirm_delete(&mut self) {
        let Some(target) = self.delete_target.take() else {
            self.close_overlay();
            return;
        };
        self.close_overlay();

        let agree = |_: &str| true;
        let result = match &target {
            DeleteTarget::Link { short_code, .. } => {
                self.dashboard.delete_link(short_code, &agree).await
            }
            DeleteTarget::User { id, .. } => self.dashboard.delete_user(*id, &agree).await,
        };

        match result {
            Ok(_) => {
                self.clamp_selection();
                let what = match target {
                    DeleteTarget::Link { short_code, .. } => format!("link {}", short_code),
                    DeleteTarget::User { username, .. } => format!("user {}", username),
                };
                self.set_status(format!("Deleted {}", what));
            }
            Err(e) => self.report(e),
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
        self.close_overlay();
    }

    pub async fn toggle_selected_active(&mut self) {
        let Some(user) = self.selected_user() else {
            return;
        };
        match self
            .dashboard
            .toggle_user_active(user.id, user.is_active)
            .await
        {
            Ok(updated) => self.set_status(format!(
                "{} is now {}",
                updated.username,
                if updated.is_active { "active" } else { "inactive" }
            )),
            Err(e) => self.report(e),
        }
    }

    pub async fn toggle_selected_admin(&mut self) {
        let Some(user) = self.selected_user() else {
            return;
        };
        match self.dashboard.toggle_user_admin(user.id, user.is_admin).await {
            Ok(updated) => self.set_status(format!(
                "{} is now {}",
                updated.username,
                if updated.is_admin { "an admin" } else { "a regular user" }
            )),
            Err(e) => self.report(e),
        }
    }

    async fn reload(&self) -> Result<()> {
        self.dashboard.refresh_me().await?;
        self.dashboard.refresh_links().await?;
        self.dashboard.refresh_users().await
    }

    pub async fn refresh(&mut self) {
        match self.reload().await {
            Ok(()) => {
                self.clamp_selection();
                self.set_status("Refreshed");
            }
            Err(e) => self.report(e),
        }
    }

    pub fn logout(&mut self) {
        self.dashboard.logout();
        self.show_login();
        self.set_status("Logged out");
    }

    /// Run the selected link through the miner page
    pub async fn open_selected(&mut self) {
        if let Some(link) = self.selected_link() {
            self.navigate(Route::Redirect(link.short_code)).await;
        }
    }

    pub fn retry_miner(&mut self) {
        if let Some(miner) = self.miner.as_mut()
            && miner.snapshot().can_retry()
        {
            miner.retry();
        }
    }
}
