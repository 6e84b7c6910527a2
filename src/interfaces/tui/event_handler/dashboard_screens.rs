//! Event handlers for the signed-in console
//!
//! Handles: Dashboard (links / users tabs), DeleteConfirm

use ratatui::crossterm::event::KeyCode;

use super::edit_text;
use crate::dashboard::Tab;
use crate::interfaces::tui::app::{App, CurrentScreen};

pub async fn handle_dashboard_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    if app.url_editing {
        handle_url_input(app, key_code).await;
        return Ok(false);
    }
    if app.filter.editing {
        handle_filter_input(app, key_code);
        return Ok(false);
    }

    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Tab | KeyCode::BackTab => app.switch_tab(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.refresh().await,
        KeyCode::Char('L') => app.logout(),
        KeyCode::Char('?') => app.open_overlay(CurrentScreen::Help),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.open_overlay(CurrentScreen::Exiting),
        KeyCode::Esc => {
            if app.filter.is_active() {
                app.filter.clear();
                app.link_index = 0;
            } else {
                app.dashboard.clear_error();
                app.clear_messages();
            }
        }
        other => match app.active_tab() {
            Tab::Links => handle_links_tab(app, other).await,
            Tab::Users => handle_users_tab(app, other).await,
        },
    }
    Ok(false)
}

async fn handle_url_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter => app.create_link().await,
        KeyCode::Esc => app.url_editing = false,
        other => {
            let mut value = app.snapshot().url_input;
            if edit_text(&mut value, other) {
                app.dashboard.set_url_input(&value);
            }
        }
    }
}

fn handle_filter_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter => app.filter.editing = false,
        KeyCode::Esc => app.filter.clear(),
        other => {
            edit_text(&mut app.filter.query, other);
        }
    }
    app.link_index = 0;
}

async fn handle_links_tab(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('i') | KeyCode::Char('a') => {
            app.url_editing = true;
            app.dashboard.clear_error();
        }
        KeyCode::Char('/') => {
            app.filter.editing = true;
            app.filter.query.clear();
        }
        KeyCode::Char('c') | KeyCode::Char('y') => app.copy_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_link(),
        KeyCode::Char('o') | KeyCode::Enter => app.open_selected().await,
        _ => {}
    }
}

async fn handle_users_tab(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('t') => app.toggle_selected_active().await,
        KeyCode::Char('m') => app.toggle_selected_admin().await,
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_user(),
        _ => {}
    }
}

pub async fn handle_delete_confirm_screen(
    app: &mut App,
    key_code: KeyCode,
) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete().await,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
    Ok(false)
}
