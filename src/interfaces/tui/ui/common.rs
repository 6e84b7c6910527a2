use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::dashboard::Tab;
use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::colors;

/// Draw title bar with version and session info
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.snapshot();

    let mut spans = vec![
        Span::styled("🔗 Trust Me Bro", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
    ];
    if let Some(me) = &snapshot.current_user {
        spans.push(Span::styled("| ", Style::default().fg(colors::MUTED)));
        spans.push(Span::styled(
            format!("{} ", me.username),
            Style::default().fg(colors::WARNING),
        ));
        if me.is_admin {
            spans.push(Span::styled("[admin] ", Style::default().fg(Color::Magenta)));
        }
        spans.push(Span::styled(
            format!("| Links: {} ", snapshot.links.len()),
            Style::default().fg(colors::MUTED),
        ));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.snapshot();
    let dashboard_error = if app.current_screen == CurrentScreen::Dashboard {
        snapshot.error.clone()
    } else {
        None
    };

    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(colors::ERROR).bold(),
        )
    } else if let Some(error) = dashboard_error {
        (
            format!("[ERROR] {}", error),
            Style::default().fg(Color::White).bg(colors::ERROR).bold(),
        )
    } else if snapshot.is_loading || app.login.is_loading || app.register.is_loading {
        (
            "Loading...".to_string(),
            Style::default().fg(colors::WARNING),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[SUCCESS] {}", app.status_message),
            Style::default().fg(Color::Black).bg(colors::SUCCESS).bold(),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(colors::PRIMARY))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

fn shortcuts(app: &App) -> Vec<(&'static str, &'static str, Color)> {
    match app.current_screen {
        CurrentScreen::Landing if app.visit_editing => vec![
            ("Enter", "Visit", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::Landing => vec![
            ("d", "Dashboard", Color::Cyan),
            ("r", "Register", Color::Green),
            ("v", "Visit link", Color::Yellow),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Login | CurrentScreen::Register => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Submit", Color::Green),
            ("Esc", "Back", Color::Red),
        ],
        CurrentScreen::Dashboard if app.url_editing => vec![
            ("Enter", "Shorten", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::Dashboard if app.filter.editing => vec![
            ("Enter", "Apply", Color::Green),
            ("Esc", "Clear", Color::Red),
        ],
        CurrentScreen::Dashboard => match app.active_tab() {
            Tab::Links => vec![
                ("j/k", "Navigate", Color::Cyan),
                ("i", "New link", Color::Green),
                ("c", "Copy", Color::Yellow),
                ("o", "Open", Color::Cyan),
                ("d", "Delete", Color::Red),
                ("/", "Search", Color::Cyan),
                ("Tab", "Users", Color::Blue),
                ("L", "Logout", Color::Magenta),
                ("?", "Help", Color::Blue),
            ],
            Tab::Users => vec![
                ("j/k", "Navigate", Color::Cyan),
                ("t", "Toggle active", Color::Yellow),
                ("m", "Toggle admin", Color::Yellow),
                ("d", "Delete", Color::Red),
                ("Tab", "Links", Color::Blue),
                ("L", "Logout", Color::Magenta),
                ("?", "Help", Color::Blue),
            ],
        },
        CurrentScreen::Miner => vec![
            ("r", "Retry", Color::Yellow),
            ("d", "Dashboard", Color::Cyan),
            ("Esc", "Home", Color::Red),
        ],
        CurrentScreen::DeleteConfirm | CurrentScreen::Exiting => {
            vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
        }
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
    }
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
