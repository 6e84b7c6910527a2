//! TUI application state
//!
//! `App` owns the screen stack, the form inputs and the per-page
//! controllers. Remote state lives in [`Dashboard`] and [`Miner`];
//! the app only keeps what the terminal needs on top of them.

mod clipboard;
mod filter;
mod navigation;
mod operations;

pub use clipboard::SystemClipboard;
pub use filter::LinkFilter;

use std::sync::Arc;

use tokio::time::Instant;

use crate::auth::{LoginForm, RegisterForm};
use crate::dashboard::{Dashboard, DashboardSnapshot, Tab};
use crate::miner::Miner;
use crate::models::{Link, User};
use crate::navigator::{Navigator, SystemNavigator};
use crate::runtime::lifetime::ClientContext;
use crate::views::{LayoutMode, TruncateLimits};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Landing,
    Login,
    Register,
    Dashboard,
    Miner,
    DeleteConfirm,
    Help,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Username,
    Password,
    Confirm,
}

impl RegisterField {
    pub fn next(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Confirm,
            Self::Confirm => Self::Username,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Username => Self::Confirm,
            Self::Password => Self::Username,
            Self::Confirm => Self::Password,
        }
    }
}

/// What the delete popup is about to remove
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Link { short_code: String, url: String },
    User { id: i64, username: String },
}

pub struct App {
    pub ctx: ClientContext,
    pub dashboard: Dashboard,
    navigator: Arc<dyn Navigator>,

    pub current_screen: CurrentScreen,
    /// Screen to return to from Help / Exiting / DeleteConfirm
    pub previous_screen: CurrentScreen,

    // Landing
    pub visit_input: String,
    pub visit_editing: bool,

    // Auth forms
    pub login: LoginForm,
    pub login_field: LoginField,
    pub register: RegisterForm,
    pub register_field: RegisterField,
    pub register_redirect_at: Option<Instant>,

    // Dashboard
    pub url_editing: bool,
    pub filter: LinkFilter,
    pub link_index: usize,
    pub user_index: usize,
    pub delete_target: Option<DeleteTarget>,
    clipboard: Option<SystemClipboard>,

    // Miner page
    pub miner: Option<Miner>,

    // UI state
    pub layout_mode: LayoutMode,
    pub limits: TruncateLimits,
    pub narrow_below: u16,
    pub status_message: String,
    pub error_message: String,
}

impl App {
    pub fn new(ctx: ClientContext) -> Self {
        Self::with_navigator(ctx, Arc::new(SystemNavigator))
    }

    pub fn with_navigator(ctx: ClientContext, navigator: Arc<dyn Navigator>) -> Self {
        let dashboard = ctx.dashboard();
        let limits = ctx.truncate_limits();
        let narrow_below = ctx.config.ui.narrow_width;

        Self {
            ctx,
            dashboard,
            navigator,
            current_screen: CurrentScreen::Landing,
            previous_screen: CurrentScreen::Landing,
            visit_input: String::new(),
            visit_editing: false,
            login: LoginForm::new(),
            login_field: LoginField::default(),
            register: RegisterForm::new(),
            register_field: RegisterField::default(),
            register_redirect_at: None,
            url_editing: false,
            filter: LinkFilter::default(),
            link_index: 0,
            user_index: 0,
            delete_target: None,
            clipboard: None,
            miner: None,
            layout_mode: LayoutMode::Wide,
            limits,
            narrow_below,
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.dashboard.snapshot()
    }

    /// Links after the `/` filter, in server order
    pub fn visible_links(&mut self) -> Vec<Link> {
        let links = self.dashboard.snapshot().links;
        self.filter.apply(&links)
    }

    pub fn selected_link(&mut self) -> Option<Link> {
        let index = self.link_index;
        self.visible_links().into_iter().nth(index)
    }

    pub fn selected_user(&self) -> Option<User> {
        self.snapshot().users.into_iter().nth(self.user_index)
    }

    pub fn active_tab(&self) -> Tab {
        self.snapshot().active_tab
    }

    /// Track terminal width for the wide/narrow switch
    pub fn set_width(&mut self, width: u16) {
        self.layout_mode = LayoutMode::for_width(width, self.narrow_below);
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.error_message.clear();
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = msg.into();
        self.status_message.clear();
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message.clear();
    }

    /// Open Help / Exiting on top of the current screen
    pub fn open_overlay(&mut self, screen: CurrentScreen) {
        if !matches!(
            self.current_screen,
            CurrentScreen::Help | CurrentScreen::Exiting | CurrentScreen::DeleteConfirm
        ) {
            self.previous_screen = self.current_screen;
        }
        self.current_screen = screen;
    }

    pub fn close_overlay(&mut self) {
        self.current_screen = self.previous_screen;
    }
}
