//! 居中弹窗容器

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::interfaces::tui::constants::{PopupSize, colors};

/// Centered bordered box; `render` returns the usable inner area
pub struct Popup<'a> {
    title: &'a str,
    color: Color,
    size: PopupSize,
    margin: Margin,
    hint: Option<&'a str>,
}

impl<'a> Popup<'a> {
    pub fn new(title: &'a str, size: PopupSize) -> Self {
        Self {
            title,
            color: colors::PRIMARY,
            size,
            margin: Margin::new(2, 1),
            hint: None,
        }
    }

    /// 同时设置标题和边框颜色
    pub fn theme_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// 底部边框上的按键提示
    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let popup_area = centered_rect(self.size, area);

        frame.render_widget(Clear, popup_area);

        let mut block = Block::default()
            .title(self.title)
            .title_style(Style::default().fg(self.color).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.color));
        if let Some(hint) = self.hint {
            block = block.title_bottom(
                Line::styled(format!(" {} ", hint), Style::default().fg(colors::MUTED))
                    .centered(),
            );
        }
        frame.render_widget(block, popup_area);

        popup_area.inner(self.margin)
    }
}

/// 按百分比在 `r` 中取一个居中矩形
pub fn centered_rect(size: PopupSize, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(size.height)])
        .flex(Flex::Center)
        .areas(r);
    let [cell] = Layout::horizontal([Constraint::Percentage(size.width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
