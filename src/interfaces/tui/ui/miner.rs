use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};
use crate::miner::MinerState;

pub fn draw_miner_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(miner) = app.miner.as_ref() else {
        return;
    };
    let snapshot = miner.snapshot();

    let color = match snapshot.state {
        MinerState::Failed(_) => colors::ERROR,
        MinerState::Redirecting(_) => colors::SUCCESS,
        MinerState::Mining => colors::WARNING,
    };
    let title = format!("⛏ Mining /{}", snapshot.short_code);
    let inner = Popup::new(&title, popup::MINER)
        .theme_color(color)
        .margin(Margin::new(3, 1))
        .render(frame, area);

    let [heading_area, status_area, gauge_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(2),
    ])
    .areas(inner);

    let heading = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Verifying your link with blockchain technology™",
            Style::default().fg(colors::PRIMARY).bold(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(heading).alignment(Alignment::Center),
        heading_area,
    );

    let (status, status_color) = match &snapshot.state {
        MinerState::Mining => (snapshot.status_text.to_string(), colors::MUTED),
        MinerState::Redirecting(url) => (format!("Redirecting to {}", url), colors::SUCCESS),
        MinerState::Failed(message) => (message.clone(), colors::ERROR),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(status, Style::default().fg(status_color)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        status_area,
    );

    let ratio = (snapshot.progress / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(colors::MUTED))
        .ratio(ratio)
        .label(format!("{:.0}%", snapshot.progress));
    frame.render_widget(gauge, gauge_area);

    let footer = if snapshot.can_retry() {
        Line::from(vec![
            Span::styled("[r] ", Style::default().fg(colors::WARNING).bold()),
            Span::raw("Try again"),
        ])
    } else {
        Line::from(Span::styled(
            "* No actual miners were harmed in the making of this redirect",
            Style::default().fg(colors::MUTED).italic(),
        ))
    };
    frame.render_widget(
        Paragraph::new(vec![Line::from(""), footer]).alignment(Alignment::Center),
        footer_area,
    );
}
