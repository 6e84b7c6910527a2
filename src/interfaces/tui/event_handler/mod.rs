//! Event handling for TUI
//!
//! Handles keyboard events and delegates to the per-screen handlers:
//! - auth_screens: Landing, Login, Register
//! - dashboard_screens: Dashboard, DeleteConfirm
//! - misc_screens: Miner, Help, Exiting

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};

mod auth_screens;
mod dashboard_screens;
mod misc_screens;

use auth_screens::*;
use dashboard_screens::*;
use misc_screens::*;

/// Handle one key press; `Ok(true)` ends the app
pub async fn handle_key_event(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    let code = key.code;
    match app.current_screen {
        CurrentScreen::Landing => handle_landing_screen(app, code).await,
        CurrentScreen::Login => handle_login_screen(app, code).await,
        CurrentScreen::Register => handle_register_screen(app, code).await,
        CurrentScreen::Dashboard => handle_dashboard_screen(app, code).await,
        CurrentScreen::DeleteConfirm => handle_delete_confirm_screen(app, code).await,
        CurrentScreen::Miner => handle_miner_screen(app, code).await,
        CurrentScreen::Help => handle_help_screen(app, code),
        CurrentScreen::Exiting => handle_exiting_screen(app, code),
    }
}

/// Shared line editing; returns whether the key was consumed
pub(super) fn edit_text(buf: &mut String, code: KeyCode) -> bool {
    match code {
        KeyCode::Char(c) => {
            buf.push(c);
            true
        }
        KeyCode::Backspace => {
            buf.pop();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_text() {
        let mut buf = String::from("ab");
        assert!(edit_text(&mut buf, KeyCode::Char('ç')));
        assert_eq!(buf, "abç");
        assert!(edit_text(&mut buf, KeyCode::Backspace));
        assert_eq!(buf, "ab");
        assert!(!edit_text(&mut buf, KeyCode::Enter));
    }
}
