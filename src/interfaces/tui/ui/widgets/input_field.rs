//! 表单输入框
//!
//! 支持激活高亮、错误提示、占位符和密码遮蔽

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// Builder-style text input
///
/// ```rust,ignore
/// InputField::new("Username", &app.login.username)
///     .active(true)
///     .placeholder("your handle")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    error: Option<&'a str>,
    placeholder: Option<&'a str>,
    masked: bool,
    disabled: bool,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            placeholder: None,
            masked: false,
            disabled: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 密码模式
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// 请求进行中时禁用
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// 输入框 3 行，有错误时多一行
    pub fn height(&self) -> u16 {
        if self.error.is_some() { 4 } else { 3 }
    }

    fn display_title(&self) -> String {
        match self.placeholder {
            Some(placeholder) if self.value.is_empty() => {
                format!("{} ({})", self.title, placeholder)
            }
            _ => self.title.to_string(),
        }
    }

    fn border_style(&self) -> Style {
        if self.disabled {
            Style::default().fg(colors::MUTED)
        } else if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn display_value(&self) -> String {
        let mut shown = if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        };
        if self.is_active && !self.disabled {
            shown.push('▏');
        }
        shown
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [input_area, error_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

        let input = Paragraph::new(self.display_value()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, input_area);

        if let Some(error) = self.error {
            let error_text = Paragraph::new(error).style(Style::default().fg(colors::ERROR));
            frame.render_widget(error_text, error_area);
        }
    }
}
