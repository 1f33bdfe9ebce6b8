// Components module - reusable UI building blocks
//
// Shell components are rendered in every arrangement:
// - Title bar: App name, layout mode, effective width
// - Status bar: Mode, width, key hints, latest log line
// - Toast: Transient feedback (clipboard, theme switch)
//
// Pane components (product list, product detail) implement the traits in
// `tui::traits` and are rendered into the content slot.

pub mod formatters;
pub mod product_detail;
pub mod product_list;
pub mod scrollbar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use product_detail::{DetailAction, ProductDetail};
pub use product_list::{ListAction, ProductList};
pub use toast::Toast;

use crate::theme::Theme;
use ratatui::{
    style::Style,
    widgets::{Block, Borders, Padding},
};

/// Bordered block shared by both panes
///
/// Layout code calls this with `None` to compute the same inner area that
/// rendering gets with a theme.
pub fn pane_block(style: Option<(&Theme, bool)>) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1));

    match style {
        Some((theme, focused)) => block
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.pane_border(focused))),
        None => block,
    }
}
