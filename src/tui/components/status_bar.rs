// Status bar component
//
// Renders mode, width, key hints and the most recent log line (with its
// time) at the bottom.

use super::formatters::truncate_to_width;
use crate::logging::LogEntry;
use crate::theme::Theme;
use crate::window::WindowInfo;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Keys that work regardless of focus
pub const GLOBAL_HINTS: &str = "t:theme  q:quit";

/// Everything the status bar shows
pub struct StatusLine<'a> {
    pub window: WindowInfo,
    pub focus_hint: Option<&'static str>,
    pub latest_log: Option<&'a LogEntry>,
}

impl StatusLine<'_> {
    /// Build the status text, dropping the log message first when space is short
    pub fn text(&self, max_width: usize) -> String {
        let mut text = format!(
            " {} │ {} units │ ",
            self.window.mode().name(),
            self.window.width
        );
        if let Some(hint) = self.focus_hint {
            text.push_str(hint);
            text.push_str("  ");
        }
        text.push_str(GLOBAL_HINTS);

        if let Some(entry) = self.latest_log {
            let prefix = format!(" │ {} {} ", entry.time(), entry.level.as_str());
            let remaining = max_width.saturating_sub(text.width() + prefix.width());
            if remaining > 3 {
                text.push_str(&prefix);
                text.push_str(&truncate_to_width(&entry.message, remaining));
            }
        }
        text
    }
}

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, theme: &Theme, status: &StatusLine) {
    let status = Paragraph::new(status.text(area.width as usize))
        .style(Style::default().fg(theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
