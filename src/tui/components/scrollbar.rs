//! Scrollbar rendering helper

use ratatui::{
    layout::Rect,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Render a vertical scrollbar on the right edge of `area`
///
/// Only renders when `total` rows exceed the `viewport`.
///
/// # Arguments
///
/// * `f` - Frame to render to
/// * `area` - The panel area
/// * `total` - Total number of rows
/// * `viewport` - Visible rows
/// * `offset` - First visible row
pub fn render_scrollbar(f: &mut Frame, area: Rect, total: usize, viewport: usize, offset: usize) {
    if total <= viewport {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"));

    let content_length = total.saturating_sub(viewport);
    let mut scrollbar_state = ScrollbarState::new(content_length).position(offset);

    f.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
}
