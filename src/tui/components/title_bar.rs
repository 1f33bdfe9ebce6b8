// Title bar component
//
// Renders the app title with the current layout mode and effective width.

use crate::theme::Theme;
use crate::window::WindowInfo;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const APP_TITLE: &str = "Shopfront";

/// Title line text, e.g. " ◆ Shopfront ──── narrow (375 units)"
pub fn title_text(window: WindowInfo) -> String {
    format!(
        " ◆ {} ──── {} ({} units)",
        APP_TITLE,
        window.mode().name(),
        window.width
    )
}

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, theme: &Theme, window: WindowInfo) {
    let title = Paragraph::new(title_text(window))
        .style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.title))
                .title_top(Line::from(" q:quit ").right_aligned()),
        );

    f.render_widget(title, area);
}
