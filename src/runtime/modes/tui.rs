//! TUI mode
//!
//! Builds the client context and delegates to the actual TUI implementation.

use std::sync::Arc;

use crate::config::StaticConfig;
use crate::router::Route;
use crate::runtime::lifetime::prepare_client;

/// Run TUI mode, starting at `path` (defaults to `/`)
pub async fn run_tui(config: Arc<StaticConfig>, path: Option<String>) -> color_eyre::Result<()> {
    let ctx = prepare_client(config)?;
    let route = Route::parse(path.as_deref().unwrap_or("/"));
    crate::interfaces::tui::run_tui(ctx, route).await
}
