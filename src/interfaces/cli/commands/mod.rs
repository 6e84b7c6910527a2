//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod auth;
mod config_gen;
mod helpers;
mod links;
mod users;
mod visit;

pub use auth::{login, logout, register, whoami};
pub use config_gen::config_generate;
pub use links::{create_link, delete_link, list_links};
pub use users::{delete_user, list_users, toggle_user_active, toggle_user_admin};
pub use visit::visit;
