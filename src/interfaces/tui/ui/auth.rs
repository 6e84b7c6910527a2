//! Login and register forms

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::{InputField, Popup};
use crate::auth::{MIN_PASSWORD_LEN, REDIRECT_DELAY};
use crate::interfaces::tui::app::{App, LoginField, RegisterField};
use crate::interfaces::tui::constants::{colors, popup};

fn error_line(error: Option<&str>) -> Paragraph<'_> {
    Paragraph::new(error.unwrap_or_default())
        .style(Style::default().fg(colors::ERROR).bold())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

pub fn draw_login_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner = Popup::new("Login", popup::LOGIN)
        .hint("Esc: back to landing")
        .render(frame, area);

    let [user_area, pass_area, error_area, button_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .spacing(1)
    .areas(inner);

    let form = &app.login;
    InputField::new("Username", &form.username)
        .active(app.login_field == LoginField::Username)
        .disabled(form.is_loading)
        .render(frame, user_area);
    InputField::new("Password", &form.password)
        .active(app.login_field == LoginField::Password)
        .disabled(form.is_loading)
        .masked()
        .render(frame, pass_area);

    frame.render_widget(error_line(form.error.as_deref()), error_area);

    let label = if form.is_loading {
        "Logging in..."
    } else {
        "[Enter] Login"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, Style::default().fg(colors::SUCCESS).bold()))
            .alignment(Alignment::Center),
        button_area,
    );
}

pub fn draw_register_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner = Popup::new("Create Account", popup::REGISTER)
        .hint("Esc: back to landing")
        .render(frame, area);
    let form = &app.register;

    if form.success {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Registration successful!",
                Style::default().fg(colors::SUCCESS).bold(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "Redirecting to login in {} seconds... (Enter to go now)",
                    REDIRECT_DELAY.as_secs()
                ),
                Style::default().fg(colors::MUTED),
            )),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
        return;
    }

    let [user_area, pass_area, confirm_area, error_area, button_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .spacing(1)
    .areas(inner);

    let min_hint = format!("min {} characters", MIN_PASSWORD_LEN);
    InputField::new("Username", &form.username)
        .active(app.register_field == RegisterField::Username)
        .disabled(form.is_loading)
        .render(frame, user_area);
    InputField::new("Password", &form.password)
        .active(app.register_field == RegisterField::Password)
        .disabled(form.is_loading)
        .placeholder(&min_hint)
        .masked()
        .render(frame, pass_area);
    InputField::new("Confirm Password", &form.confirm_password)
        .active(app.register_field == RegisterField::Confirm)
        .disabled(form.is_loading)
        .masked()
        .render(frame, confirm_area);

    frame.render_widget(error_line(form.error.as_deref()), error_area);

    let label = if form.is_loading {
        "Creating account..."
    } else {
        "[Enter] Register"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, Style::default().fg(colors::SUCCESS).bold()))
            .alignment(Alignment::Center),
        button_area,
    );
}
