// UI submodules
mod auth;
mod common;
mod dashboard;
mod delete_confirm;
mod exiting;
mod help;
mod landing;
mod miner;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};

pub use auth::{draw_login_screen, draw_register_screen};
pub use dashboard::draw_dashboard_screen;
pub use delete_confirm::draw_delete_confirm_screen;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use landing::draw_landing_screen;
pub use miner::draw_miner_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    app.set_width(frame.area().width);

    let [title_area, content_area, status_area, footer_area] = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Status
        Constraint::Length(2), // Footer
    ])
    .areas(frame.area());

    draw_title_bar(frame, app, title_area);

    match app.current_screen {
        CurrentScreen::Help | CurrentScreen::Exiting | CurrentScreen::DeleteConfirm => {
            // 弹窗下方保留原页面
            let below = app.previous_screen;
            draw_page(frame, app, below, content_area);
            match app.current_screen {
                CurrentScreen::Help => draw_help_screen(frame, content_area),
                CurrentScreen::Exiting => draw_exiting_screen(frame, content_area),
                _ => draw_delete_confirm_screen(frame, app, content_area),
            }
        }
        screen => draw_page(frame, app, screen, content_area),
    }

    draw_status_bar(frame, app, status_area);
    draw_footer(frame, app, footer_area);
}

fn draw_page(frame: &mut Frame, app: &mut App, screen: CurrentScreen, area: Rect) {
    match screen {
        CurrentScreen::Landing => draw_landing_screen(frame, app, area),
        CurrentScreen::Login => draw_login_screen(frame, app, area),
        CurrentScreen::Register => draw_register_screen(frame, app, area),
        CurrentScreen::Dashboard => draw_dashboard_screen(frame, app, area),
        CurrentScreen::Miner => draw_miner_screen(frame, app, area),
        CurrentScreen::Help | CurrentScreen::Exiting | CurrentScreen::DeleteConfirm => {}
    }
}
