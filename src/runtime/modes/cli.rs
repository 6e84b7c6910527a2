//! CLI mode
//!
//! Builds the client context and delegates to the actual CLI implementation.

use std::sync::Arc;

use crate::cli::Commands;
use crate::config::StaticConfig;
use crate::interfaces::cli::{CliError, run_cli_command};
use crate::runtime::lifetime::prepare_client;

/// Run CLI mode
pub async fn run_cli(config: Arc<StaticConfig>, cmd: Commands) -> Result<(), CliError> {
    let ctx = prepare_client(config)?;
    run_cli_command(&ctx, cmd).await
}
