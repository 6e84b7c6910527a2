//! Terminal User Interface (TUI) module
//!
//! Interactive front end: landing page, login/register forms, the
//! dashboard and the miner page.

use std::io;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{error, info};

mod app;
mod constants;
mod event_handler;
mod ui;

use app::App;
use constants::TICK_RATE;
use ui::ui;

use crate::router::Route;
use crate::runtime::lifetime::ClientContext;

/// Run the TUI application, starting at `route`
pub async fn run_tui(ctx: ClientContext, route: Route) -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    info!("TUI started at {}", route);
    let mut app = App::new(ctx);
    app.navigate(route).await;
    let res = run_app(&mut terminal, &mut app).await;

    // 先停掉后台任务再恢复终端
    app.dashboard.stop_polling();
    drop(app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("TUI exited with error: {}", err);
    }
    res.map_err(Into::into)
}

/// Main application loop
///
/// Input is polled every [`TICK_RATE`] so timer-driven state (miner
/// progress, polling results, the copy acknowledgment) is redrawn.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        app.tick().await;
        terminal.draw(|f| ui(f, app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key).await?
        {
            return Ok(());
        }
    }
}
