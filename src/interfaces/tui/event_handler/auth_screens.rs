//! Event handlers for the public pages
//!
//! Handles: Landing, Login, Register

use ratatui::crossterm::event::KeyCode;

use super::edit_text;
use crate::interfaces::tui::app::{App, CurrentScreen, LoginField, RegisterField};
use crate::router::Route;

pub async fn handle_landing_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    if app.visit_editing {
        match key_code {
            KeyCode::Enter => app.visit_from_landing().await,
            KeyCode::Esc => {
                app.visit_editing = false;
                app.visit_input.clear();
            }
            other => {
                edit_text(&mut app.visit_input, other);
            }
        }
        return Ok(false);
    }

    match key_code {
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Enter => {
            app.navigate(Route::Dashboard).await
        }
        KeyCode::Char('r') | KeyCode::Char('R') => app.navigate(Route::Register).await,
        KeyCode::Char('v') | KeyCode::Char('V') | KeyCode::Char('/') => {
            app.visit_editing = true;
            app.clear_messages();
        }
        KeyCode::Char('?') => app.open_overlay(CurrentScreen::Help),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.open_overlay(CurrentScreen::Exiting)
        }
        _ => {}
    }
    Ok(false)
}

pub async fn handle_login_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    if app.login.is_loading {
        return Ok(false);
    }

    match key_code {
        KeyCode::Esc => app.navigate(Route::Landing).await,
        KeyCode::Tab | KeyCode::Down | KeyCode::Up | KeyCode::BackTab => {
            app.login_field = match app.login_field {
                LoginField::Username => LoginField::Password,
                LoginField::Password => LoginField::Username,
            };
        }
        KeyCode::Enter => match app.login_field {
            LoginField::Username if app.login.password.is_empty() => {
                app.login_field = LoginField::Password;
            }
            _ => app.submit_login().await,
        },
        other => {
            let buf = match app.login_field {
                LoginField::Username => &mut app.login.username,
                LoginField::Password => &mut app.login.password,
            };
            edit_text(buf, other);
        }
    }
    Ok(false)
}

pub async fn handle_register_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    if app.register.is_loading {
        return Ok(false);
    }

    // 注册成功后只等待跳转，Enter 立即前往登录
    if app.register.success {
        match key_code {
            KeyCode::Enter => {
                app.register_redirect_at = None;
                let target = app.register.redirect_target();
                app.navigate(target).await;
            }
            KeyCode::Esc => app.navigate(Route::Landing).await,
            _ => {}
        }
        return Ok(false);
    }

    match key_code {
        KeyCode::Esc => app.navigate(Route::Landing).await,
        KeyCode::Tab | KeyCode::Down => app.register_field = app.register_field.next(),
        KeyCode::BackTab | KeyCode::Up => app.register_field = app.register_field.prev(),
        KeyCode::Enter => app.submit_register().await,
        other => {
            let form = &mut app.register;
            let buf = match app.register_field {
                RegisterField::Username => &mut form.username,
                RegisterField::Password => &mut form.password,
                RegisterField::Confirm => &mut form.confirm_password,
            };
            edit_text(buf, other);
        }
    }
    Ok(false)
}
