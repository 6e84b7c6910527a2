use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::{colors, popup};

const SECTIONS: &[(&str, &[(&str, &str, Color)])] = &[
    (
        "NAVIGATION",
        &[
            ("Up/Down, j/k", "Move selection", Color::Cyan),
            ("Home/End, g/G", "Jump to top / bottom", Color::Cyan),
            ("PageUp/PageDown", "Scroll 10 items", Color::Cyan),
            ("Tab", "Switch Links / Users tab (admins)", Color::Cyan),
        ],
    ),
    (
        "LINKS",
        &[
            ("i, a", "Type a URL to shorten, Enter submits", Color::Green),
            ("c, y", "Copy the short link", Color::Yellow),
            ("o, Enter", "Open through the miner page", Color::Cyan),
            ("d", "Delete selected link", Color::Red),
            ("/", "Fuzzy search, Esc clears", Color::Cyan),
        ],
    ),
    (
        "USERS",
        &[
            ("t", "Activate / deactivate", Color::Yellow),
            ("m", "Grant / revoke admin", Color::Yellow),
            ("d", "Delete selected user", Color::Red),
        ],
    ),
    (
        "GENERAL",
        &[
            ("r", "Refresh (retry on the miner page)", Color::Cyan),
            ("L", "Log out", Color::Magenta),
            ("?", "This help", Color::Blue),
            ("q, Ctrl+C", "Quit", Color::Magenta),
        ],
    ),
];

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner = Popup::new("Help - Keyboard Shortcuts", popup::HELP)
        .hint("q/Esc: close")
        .render(frame, area);

    let mut lines = Vec::new();
    for (heading, keys) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            *heading,
            Style::default().fg(colors::WARNING).bold(),
        )));
        for (key, desc, color) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<18}", key), Style::default().fg(*color)),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
