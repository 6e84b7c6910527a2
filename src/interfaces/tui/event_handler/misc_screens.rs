//! Event handlers for miscellaneous screens
//!
//! Handles: Miner, Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::App;
use crate::router::Route;

pub async fn handle_miner_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('r') | KeyCode::Char('R') => app.retry_miner(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.navigate(Route::Dashboard).await,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.navigate(Route::Landing).await
        }
        _ => {}
    }
    Ok(false)
}

pub fn handle_help_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    if matches!(
        key_code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter
    ) {
        app.close_overlay();
    }
    Ok(false)
}

pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return Ok(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_overlay(),
        _ => {}
    }
    Ok(false)
}
