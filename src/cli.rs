//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for trustmebro using clap's derive macros.

use clap::{Parser, Subcommand};

/// Trust Me Bro - The most suspicious URL shortener on the internet
#[derive(Parser)]
#[command(name = "trustmebro")]
#[command(version)]
#[command(about = "Terminal client for the Trust Me Bro URL shortener", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start TUI mode
    #[cfg(feature = "tui")]
    Tui {
        /// Initial path: /, /dashboard, /register or /{short_code}
        path: Option<String>,
    },

    /// Log in and store the session token
    Login {
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Password (if not provided, will prompt interactively)
        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// Create an account (requires admin approval)
    Register {
        #[arg(long, short = 'u')]
        username: Option<String>,
    },

    /// Show the logged-in account
    Whoami,

    /// Manage your short links
    Links {
        #[command(subcommand)]
        action: LinkCommands,
    },

    /// Manage users (admin only)
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// "Mine" a short link and follow it
    Visit {
        /// Short code, `/code` path, or full short link
        target: String,

        /// Print the destination instead of opening the browser
        #[arg(long)]
        no_open: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum LinkCommands {
    /// List links with click statistics
    List {
        /// Card layout instead of the table
        #[arg(long)]
        narrow: bool,
    },

    /// Shorten a URL
    Create {
        url: String,
    },

    /// Delete a short link
    Delete {
        short_code: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List all users
    List,

    /// Activate or deactivate a user
    ToggleActive {
        id: i64,
    },

    /// Grant or revoke admin rights
    ToggleAdmin {
        id: i64,
    },

    /// Delete a user
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
