use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::dashboard::{CONFIRM_DELETE_LINK, CONFIRM_DELETE_USER};
use crate::interfaces::tui::app::{App, DeleteTarget};
use crate::interfaces::tui::constants::{colors, popup};

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(colors::MUTED)),
        Span::styled(value, Style::default().fg(colors::PRIMARY).bold()),
    ])
}

pub fn draw_delete_confirm_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(target) = app.delete_target.as_ref() else {
        return;
    };

    let inner = Popup::new("Confirm Delete", popup::DELETE_CONFIRM)
        .theme_color(colors::ERROR)
        .margin(Margin::new(2, 2))
        .render(frame, area);

    let (prompt, details) = match target {
        DeleteTarget::Link { short_code, url } => (
            CONFIRM_DELETE_LINK,
            vec![
                field("Code: ", short_code.clone()),
                field("URL: ", url.clone()),
            ],
        ),
        DeleteTarget::User { id, username } => (
            CONFIRM_DELETE_USER,
            vec![
                field("User: ", username.clone()),
                field("ID: ", id.to_string()),
            ],
        ),
    };

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled(
            prompt,
            Style::default().fg(colors::WARNING).bold(),
        )),
        Line::from(""),
    ];
    text.extend(details);
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "This action cannot be undone!",
        Style::default().fg(colors::ERROR).bold(),
    )));

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
