//! CLI interface module
//!
//! One command per invocation against the shortener API.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands, LinkCommands, UserCommands};
use crate::errors::TrustMeBroError;
use crate::runtime::lifetime::ClientContext;
use commands::{
    config_generate, create_link, delete_link, delete_user, list_links, list_users, login, logout,
    register, toggle_user_active, toggle_user_admin, visit, whoami,
};

#[derive(Debug)]
pub enum CliError {
    /// Missing or expired session
    AuthError(String),
    /// Request reached the server and failed, or never reached it
    ApiError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::AuthError(msg) => format!("Auth error: {}", msg),
            CliError::ApiError(msg) => format!("API error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::AuthError(msg) => {
                format!("{} {}", "Auth error:".yellow().bold(), msg.white())
            }
            CliError::ApiError(msg) => format!("{} {}", "API error:".red().bold(), msg.white()),
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<TrustMeBroError> for CliError {
    fn from(err: TrustMeBroError) -> Self {
        match err {
            e if e.is_unauthorized() => {
                CliError::AuthError("Session expired, please log in again".to_string())
            }
            TrustMeBroError::Session(msg) => CliError::AuthError(msg),
            TrustMeBroError::Api(e) => CliError::ApiError(e.to_string()),
            TrustMeBroError::Validation(msg) => CliError::ParseError(msg),
            other => CliError::CommandError(other.message()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(ctx: &ClientContext, cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Login { username, password } => login(ctx, username, password).await,
        Commands::Logout => logout(ctx),
        Commands::Register { username } => register(ctx, username).await,
        Commands::Whoami => whoami(ctx).await,

        Commands::Links { action } => match action {
            LinkCommands::List { narrow } => list_links(ctx, narrow).await,
            LinkCommands::Create { url } => create_link(ctx, url).await,
            LinkCommands::Delete { short_code, yes } => delete_link(ctx, short_code, yes).await,
        },

        Commands::Users { action } => match action {
            UserCommands::List => list_users(ctx).await,
            UserCommands::ToggleActive { id } => toggle_user_active(ctx, id).await,
            UserCommands::ToggleAdmin { id } => toggle_user_admin(ctx, id).await,
            UserCommands::Delete { id, yes } => delete_user(ctx, id, yes).await,
        },

        Commands::Visit { target, no_open } => visit(ctx, target, no_open).await,

        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                config_generate(output_path, force).await
            }
        },

        #[cfg(feature = "tui")]
        Commands::Tui { .. } => Err(CliError::CommandError(
            "TUI is started from main".to_string(),
        )),
    }
}
