//! View models for the links and users tabs
//!
//! Pure functions of data + UI state; no network access. The CLI and the
//! TUI both render from these so the two front ends agree on wording.

use chrono::{DateTime, Utc};

use crate::models::{CurrentUser, Link, User};
use crate::utils::{format_local, truncate_url};

pub const COPIED_LABEL: &str = "✓ Copied!";
pub const LINKS_EMPTY: &str = "No links created yet. Create your first suspicious link above! 😈";
pub const USERS_EMPTY: &str = "No users found.";

/// Table (wide) or card (narrow) rendering of the same dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Wide,
    Narrow,
}

impl LayoutMode {
    /// Pick a layout for a terminal `width` columns wide
    pub fn for_width(width: u16, narrow_below: u16) -> Self {
        if width < narrow_below {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }
}

/// URL truncation limits per layout
#[derive(Debug, Clone, Copy)]
pub struct TruncateLimits {
    pub wide: usize,
    pub narrow: usize,
}

impl Default for TruncateLimits {
    fn default() -> Self {
        Self {
            wide: 40,
            narrow: 50,
        }
    }
}

impl TruncateLimits {
    pub fn for_mode(&self, mode: LayoutMode) -> usize {
        match mode {
            LayoutMode::Wide => self.wide,
            LayoutMode::Narrow => self.narrow,
        }
    }
}

/// One link as displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRow {
    pub short_code: String,
    pub display_url: String,
    pub full_url: String,
    pub clicks: u64,
    pub clicks_label: String,
    pub has_clicks: bool,
    pub created: String,
    pub copy_label: &'static str,
    pub copied: bool,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinksView {
    pub mode: LayoutMode,
    pub header: String,
    pub rows: Vec<LinkRow>,
}

impl LinksView {
    /// Build the view; order and count follow `links` exactly.
    ///
    /// `is_copied` decides which rows show the copy acknowledgment.
    pub fn build(
        links: &[Link],
        mode: LayoutMode,
        limits: TruncateLimits,
        is_copied: impl Fn(&str) -> bool,
        format_date: impl Fn(&DateTime<Utc>) -> String,
    ) -> Self {
        let max = limits.for_mode(mode);
        let idle_label = match mode {
            LayoutMode::Wide => "Copy",
            LayoutMode::Narrow => "Copy Link",
        };

        let rows = links
            .iter()
            .map(|link| {
                let copied = is_copied(&link.short_code);
                LinkRow {
                    short_code: link.short_code.clone(),
                    display_url: truncate_url(&link.original_url, max),
                    full_url: link.original_url.clone(),
                    clicks: link.clicks,
                    clicks_label: match mode {
                        LayoutMode::Wide => link.clicks.to_string(),
                        LayoutMode::Narrow => format!("{} clicks", link.clicks),
                    },
                    has_clicks: link.clicks > 0,
                    created: format_date(&link.created_at),
                    copy_label: if copied { COPIED_LABEL } else { idle_label },
                    copied,
                    created_by: link.created_by_username.clone(),
                }
            })
            .collect();

        Self {
            mode,
            header: format!("Statistics ({} links)", links.len()),
            rows,
        }
    }

    /// Same as [`LinksView::build`] with local-time dates
    pub fn with_local_dates(
        links: &[Link],
        mode: LayoutMode,
        limits: TruncateLimits,
        is_copied: impl Fn(&str) -> bool,
    ) -> Self {
        Self::build(links, mode, limits, is_copied, format_local)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn empty_text(&self) -> &'static str {
        LINKS_EMPTY
    }
}

/// One user as displayed in the admin tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub status_label: &'static str,
    pub role_label: &'static str,
    pub created: String,
    pub active_action: &'static str,
    pub admin_action: &'static str,
    /// False for the signed-in account; self-targeting actions are disabled
    pub actions_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersView {
    pub mode: LayoutMode,
    pub header: String,
    pub rows: Vec<UserRow>,
}

impl UsersView {
    pub fn build(
        users: &[User],
        current: Option<&CurrentUser>,
        mode: LayoutMode,
        format_date: impl Fn(&DateTime<Utc>) -> String,
    ) -> Self {
        let rows = users
            .iter()
            .map(|user| UserRow {
                id: user.id,
                username: user.username.clone(),
                is_active: user.is_active,
                is_admin: user.is_admin,
                status_label: if user.is_active { "Active" } else { "Inactive" },
                role_label: if user.is_admin { "Admin" } else { "User" },
                created: format_date(&user.created_at),
                active_action: if user.is_active {
                    "Deactivate"
                } else {
                    "Activate"
                },
                admin_action: if user.is_admin {
                    "Remove Admin"
                } else {
                    "Make Admin"
                },
                actions_enabled: current.is_none_or(|me| !me.is_self(user.id)),
            })
            .collect();

        Self {
            mode,
            header: format!("User Management ({})", users.len()),
            rows,
        }
    }

    pub fn with_local_dates(
        users: &[User],
        current: Option<&CurrentUser>,
        mode: LayoutMode,
    ) -> Self {
        Self::build(users, current, mode, format_local)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn empty_text(&self) -> &'static str {
        USERS_EMPTY
    }
}
