//! Links and users tabs

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Row, Table, TableState,
        Tabs,
    },
};

use super::widgets::InputField;
use crate::dashboard::{DashboardSnapshot, Tab};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;
use crate::views::{LayoutMode, LinksView, UsersView};

fn panel(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(colors::PRIMARY).bold())
}

fn highlight() -> Style {
    Style::default().bg(colors::MUTED).fg(Color::White)
}

fn empty_state(frame: &mut Frame, area: Rect, title: String, text: &str) {
    let empty = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::Gray).bold(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(panel(title).border_style(Style::default().fg(colors::MUTED)));
    frame.render_widget(empty, area);
}

pub fn draw_dashboard_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let snapshot = app.snapshot();

    let [tabs_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(5)]).areas(area);
    draw_tabs(frame, &snapshot, tabs_area);

    match snapshot.active_tab {
        Tab::Links => draw_links_tab(frame, app, &snapshot, body_area),
        Tab::Users => draw_users_tab(frame, app, &snapshot, body_area),
    }
}

fn draw_tabs(frame: &mut Frame, snapshot: &DashboardSnapshot, area: Rect) {
    let mut titles = vec!["My Links"];
    if snapshot.is_admin() {
        titles.push("Users");
    }
    let selected = match snapshot.active_tab {
        Tab::Links => 0,
        Tab::Users => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(colors::MUTED))
        .highlight_style(
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|");
    frame.render_widget(tabs, area);
}

fn draw_links_tab(frame: &mut Frame, app: &mut App, snapshot: &DashboardSnapshot, area: Rect) {
    let show_filter = app.filter.editing || app.filter.is_active();
    let [create_area, filter_area, list_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(if show_filter { 3 } else { 0 }),
        Constraint::Min(3),
    ])
    .areas(area);

    draw_create_panel(frame, app, snapshot, create_area);

    if show_filter {
        InputField::new("Search", &app.filter.query)
            .active(app.filter.editing)
            .placeholder("fuzzy match on code or URL")
            .render(frame, filter_area);
    }

    let links = app.visible_links();
    let dashboard = app.dashboard.clone();
    let view = LinksView::with_local_dates(&links, app.layout_mode, app.limits, |code| {
        dashboard.is_copied(code)
    });
    let title = if app.filter.is_active() {
        format!("{} | Search: \"{}\"", view.header, app.filter.query)
    } else {
        view.header.clone()
    };

    if view.is_empty() {
        let text = if app.filter.is_active() {
            "No links match your search"
        } else {
            view.empty_text()
        };
        empty_state(frame, list_area, title, text);
        return;
    }

    app.link_index = app.link_index.min(view.rows.len() - 1);
    match view.mode {
        LayoutMode::Wide => draw_links_table(frame, &view, app.link_index, title, list_area),
        LayoutMode::Narrow => draw_link_cards(frame, &view, app.link_index, title, list_area),
    }
}

fn draw_create_panel(frame: &mut Frame, app: &App, snapshot: &DashboardSnapshot, area: Rect) {
    let [input_area, result_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

    let title = if snapshot.is_loading {
        "Shortening..."
    } else {
        "Paste a URL to shorten"
    };
    InputField::new(title, &snapshot.url_input)
        .active(app.url_editing)
        .disabled(snapshot.is_loading)
        .placeholder("press i")
        .render(frame, input_area);

    if let Some(generated) = &snapshot.generated_link {
        let line = Line::from(vec![
            Span::styled("Your suspicious link: ", Style::default().fg(colors::MUTED)),
            Span::styled(
                generated.clone(),
                Style::default().fg(colors::SUCCESS).bold(),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), result_area);
    }
}

fn draw_links_table(frame: &mut Frame, view: &LinksView, selected: usize, title: String, area: Rect) {
    let header = Row::new(["Short Code", "Original URL", "Clicks", "Created", ""])
        .style(Style::default().fg(colors::WARNING).bold())
        .bottom_margin(1);

    let rows = view.rows.iter().map(|row| {
        let clicks_style = if row.has_clicks {
            Style::default().fg(colors::SUCCESS).bold()
        } else {
            Style::default().fg(colors::MUTED)
        };
        let copy_style = if row.copied {
            Style::default().fg(colors::SUCCESS).bold()
        } else {
            Style::default().fg(colors::MUTED)
        };
        Row::new(vec![
            Span::styled(row.short_code.clone(), Style::default().fg(colors::PRIMARY).bold()),
            Span::styled(row.display_url.clone(), Style::default().fg(colors::LINK)),
            Span::styled(row.clicks_label.clone(), clicks_style),
            Span::raw(row.created.clone()),
            Span::styled(row.copy_label, copy_style),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(18),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(panel(title))
    .row_highlight_style(highlight())
    .highlight_symbol("▶ ")
    .column_spacing(1);

    let mut state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_link_cards(frame: &mut Frame, view: &LinksView, selected: usize, title: String, area: Rect) {
    let items: Vec<ListItem> = view
        .rows
        .iter()
        .map(|row| {
            let copy_style = if row.copied {
                Style::default().fg(colors::SUCCESS).bold()
            } else {
                Style::default().fg(colors::MUTED)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(row.short_code.clone(), Style::default().fg(colors::PRIMARY).bold()),
                    Span::raw("  "),
                    Span::styled(row.copy_label, copy_style),
                ]),
                Line::from(Span::styled(
                    row.display_url.clone(),
                    Style::default().fg(colors::LINK),
                )),
                Line::from(vec![
                    Span::styled(row.clicks_label.clone(), Style::default().fg(colors::SUCCESS)),
                    Span::styled(format!("  {}", row.created), Style::default().fg(colors::MUTED)),
                ]),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(panel(title))
        .highlight_style(highlight())
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_users_tab(frame: &mut Frame, app: &mut App, snapshot: &DashboardSnapshot, area: Rect) {
    let view = UsersView::with_local_dates(
        &snapshot.users,
        snapshot.current_user.as_ref(),
        app.layout_mode,
    );
    let title = view.header.clone();

    if view.is_empty() {
        empty_state(frame, area, title, view.empty_text());
        return;
    }

    app.user_index = app.user_index.min(view.rows.len() - 1);
    let selected = app.user_index;

    let action_style = |enabled: bool| {
        if enabled {
            Style::default().fg(colors::WARNING)
        } else {
            Style::default().fg(colors::MUTED).add_modifier(Modifier::CROSSED_OUT)
        }
    };
    let status_style = |active: bool| {
        if active {
            Style::default().fg(colors::SUCCESS)
        } else {
            Style::default().fg(colors::ERROR)
        }
    };

    match view.mode {
        LayoutMode::Wide => {
            let header = Row::new(["ID", "Username", "Status", "Role", "Created", "Actions"])
                .style(Style::default().fg(colors::WARNING).bold())
                .bottom_margin(1);
            let rows = view.rows.iter().map(|row| {
                Row::new(vec![
                    Span::raw(row.id.to_string()),
                    Span::styled(row.username.clone(), Style::default().bold()),
                    Span::styled(row.status_label, status_style(row.is_active)),
                    Span::raw(row.role_label),
                    Span::raw(row.created.clone()),
                    Span::styled(
                        format!("[t] {}  [m] {}", row.active_action, row.admin_action),
                        action_style(row.actions_enabled),
                    ),
                ])
            });
            let table = Table::new(
                rows,
                [
                    Constraint::Length(6),
                    Constraint::Min(12),
                    Constraint::Length(9),
                    Constraint::Length(6),
                    Constraint::Length(18),
                    Constraint::Length(36),
                ],
            )
            .header(header)
            .block(panel(title))
            .row_highlight_style(highlight())
            .highlight_symbol("▶ ")
            .column_spacing(1);
            let mut state = TableState::default().with_selected(Some(selected));
            frame.render_stateful_widget(table, area, &mut state);
        }
        LayoutMode::Narrow => {
            let items: Vec<ListItem> = view
                .rows
                .iter()
                .map(|row| {
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(row.username.clone(), Style::default().bold()),
                            Span::styled(
                                format!("  #{}", row.id),
                                Style::default().fg(colors::MUTED),
                            ),
                        ]),
                        Line::from(vec![
                            Span::styled(row.status_label, status_style(row.is_active)),
                            Span::raw(format!(" · {} · {}", row.role_label, row.created)),
                        ]),
                        Line::from(Span::styled(
                            format!("[t] {}  [m] {}", row.active_action, row.admin_action),
                            action_style(row.actions_enabled),
                        )),
                        Line::from(""),
                    ])
                })
                .collect();
            let list = List::new(items)
                .block(panel(title))
                .highlight_style(highlight())
                .highlight_symbol("▶ ");
            let mut state = ListState::default().with_selected(Some(selected));
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}
