//! Mode routing
//!
//! - Landing (no subcommand): print the landing page and exit
//! - CLI mode: one command against the API
//! - TUI mode: interactive terminal app
//!
//! The mode selection is based on the parsed command and feature flags.

mod landing;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

pub use landing::print_landing;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    Landing,
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

/// Detect which mode to run
///
/// 1. `tui` subcommand and TUI feature enabled -> TUI mode
/// 2. any other subcommand and CLI feature enabled -> CLI mode
/// 3. no subcommand -> landing page
/// 4. otherwise -> Unknown (feature disabled)
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        None => Mode::Landing,
        #[cfg(feature = "tui")]
        Some(Commands::Tui { .. }) => Mode::Tui,
        #[cfg(feature = "cli")]
        Some(_) => Mode::Cli,
        #[cfg(not(feature = "cli"))]
        Some(_) => Mode::Unknown,
    }
}
