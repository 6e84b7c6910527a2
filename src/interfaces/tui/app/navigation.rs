//! Page routing and list selection

use tokio::time::Instant;
use tracing::{debug, info};

use super::{App, CurrentScreen, LoginField, RegisterField};
use crate::auth::{LoginForm, RegisterForm};
use crate::dashboard::Tab;
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;
use crate::miner::Miner;
use crate::router::Route;

const SESSION_EXPIRED: &str = "Session expired, please log in again";

impl App {
    /// Switch page; leaving a page cancels its timers
    pub async fn navigate(&mut self, route: Route) {
        debug!("Navigating to {}", route);
        self.leave_page(&route);
        self.clear_messages();

        match route {
            Route::Landing => {
                self.visit_input.clear();
                self.visit_editing = false;
                self.current_screen = CurrentScreen::Landing;
            }
            Route::Register => {
                self.register = RegisterForm::new();
                self.register_field = RegisterField::default();
                self.current_screen = CurrentScreen::Register;
            }
            Route::Dashboard => {
                if self.dashboard.mount().await {
                    self.link_index = 0;
                    self.user_index = 0;
                    self.current_screen = CurrentScreen::Dashboard;
                } else {
                    self.show_login();
                }
            }
            Route::Redirect(code) => {
                match self.miner.as_mut() {
                    Some(miner) => miner.set_short_code(&code),
                    None => {
                        self.miner = Some(Miner::start(
                            &code,
                            self.ctx.api.clone(),
                            self.navigator.clone(),
                        ));
                    }
                }
                self.current_screen = CurrentScreen::Miner;
            }
        }
    }

    fn leave_page(&mut self, next: &Route) {
        if !matches!(next, Route::Redirect(_)) {
            // Miner 在 drop 时取消所有计时器
            self.miner = None;
        }
        if !matches!(next, Route::Dashboard) {
            self.dashboard.stop_polling();
            self.url_editing = false;
            self.filter.clear();
        }
        if !matches!(next, Route::Register) {
            self.register_redirect_at = None;
        }
    }

    pub fn show_login(&mut self) {
        self.login = LoginForm::new();
        self.login_field = LoginField::default();
        self.current_screen = CurrentScreen::Login;
    }

    /// Called every loop iteration for time-driven transitions
    pub async fn tick(&mut self) {
        if let Some(at) = self.register_redirect_at
            && Instant::now() >= at
        {
            self.register_redirect_at = None;
            let target = self.register.redirect_target();
            self.navigate(target).await;
            return;
        }

        // 后台轮询遇到 401 会直接登出
        if self.current_screen == CurrentScreen::Dashboard && !self.dashboard.is_authenticated() {
            info!("Session ended while on the dashboard");
            self.show_login();
            self.set_error(SESSION_EXPIRED);
        }
    }

    fn list_len(&mut self) -> usize {
        match self.active_tab() {
            Tab::Links => self.visible_links().len(),
            Tab::Users => self.snapshot().users.len(),
        }
    }

    fn index_mut(&mut self) -> &mut usize {
        match self.active_tab() {
            Tab::Links => &mut self.link_index,
            Tab::Users => &mut self.user_index,
        }
    }

    /// Keep the selection inside the current list after refreshes
    pub fn clamp_selection(&mut self) {
        let len = self.list_len();
        let index = self.index_mut();
        *index = (*index).min(len.saturating_sub(1));
    }

    pub fn move_selection_up(&mut self) {
        let index = self.index_mut();
        *index = index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let len = self.list_len();
        let index = self.index_mut();
        if *index + 1 < len {
            *index += 1;
        }
    }

    pub fn page_up(&mut self) {
        let index = self.index_mut();
        *index = index.saturating_sub(PAGE_SCROLL_STEP);
    }

    pub fn page_down(&mut self) {
        let len = self.list_len();
        let index = self.index_mut();
        *index = (*index + PAGE_SCROLL_STEP).min(len.saturating_sub(1));
    }

    pub fn jump_to_top(&mut self) {
        *self.index_mut() = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        let len = self.list_len();
        *self.index_mut() = len.saturating_sub(1);
    }

    pub fn switch_tab(&mut self) {
        let next = match self.active_tab() {
            Tab::Links => Tab::Users,
            Tab::Users => Tab::Links,
        };
        if self.dashboard.select_tab(next) != next {
            self.set_error("User management requires admin rights");
        }
    }
}
