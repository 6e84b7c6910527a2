use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::widgets::InputField;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;

fn feature(icon: &'static str, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{}  ", icon)),
        Span::styled(text, Style::default().fg(Color::White).bold()),
    ])
}

pub fn draw_landing_screen(frame: &mut Frame, app: &App, area: Rect) {
    let [hero_area, visit_area] =
        Layout::vertical([Constraint::Min(14), Constraint::Length(4)]).areas(area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🔗 Trust Me Bro",
            Style::default().fg(colors::PRIMARY).bold(),
        )),
        Line::from(Span::styled(
            "The most suspicious URL shortener on the internet",
            Style::default().fg(colors::MUTED),
        )),
        Line::from(""),
        feature("⚡", "Lightning fast redirects"),
        feature("⛏", "Definitely not a miner"),
        feature("🤝", "Trust me bro"),
        Line::from(""),
        Line::from(Span::styled(
            "Want to create your own suspicious links?",
            Style::default().fg(colors::WARNING),
        )),
        Line::from(vec![
            Span::styled("[d] ", Style::default().fg(colors::PRIMARY).bold()),
            Span::raw("Dashboard   "),
            Span::styled("[r] ", Style::default().fg(colors::SUCCESS).bold()),
            Span::raw("Register"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Made with 💀 for maximum suspicion",
            Style::default().fg(colors::MUTED),
        )),
        Line::from(Span::styled(
            "* No actual miners were harmed in the making of this website",
            Style::default().fg(colors::MUTED).italic(),
        )),
    ];

    let hero = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::MUTED)),
    );
    frame.render_widget(hero, hero_area);

    if app.visit_editing {
        InputField::new("Visit a short link", &app.visit_input)
            .active(true)
            .placeholder("code or full link")
            .render(frame, visit_area);
    } else {
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[v] ", Style::default().fg(colors::WARNING).bold()),
            Span::styled(
                "Got a link? Let the miner verify it first",
                Style::default().fg(colors::MUTED),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, visit_area);
    }
}
