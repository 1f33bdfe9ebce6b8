//! Product list component
//!
//! Displays the catalog as one selectable row per product, in catalog order.
//! Implements Component, Navigable and Interactive.
//!
//! # Cursor vs Selection
//!
//! The list keeps a keyboard cursor (`›` marker) but never owns the
//! selection. Enter (or a click, routed by the App) reports the row through
//! [`ListAction::Selected`]; the App decides what selecting means. The row
//! equal to the App's selection is drawn on the selection background.

use super::formatters::truncate_to_width;
use super::pane_block;
use super::scrollbar::render_scrollbar;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, Navigable, RenderContext,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Section header shown above the rows
pub const HEADER: &str = "Products";

/// Rows between the header and the first product
const HEADER_HEIGHT: u16 = 2;

/// What the list asks the App to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    /// The user picked this catalog row
    Selected(usize),
}

/// Where everything in the list lands for a given area
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListLayout {
    pub header: Option<Rect>,
    /// (row area, catalog index) for every visible row
    pub rows: Vec<(Rect, usize)>,
    /// First visible catalog index
    pub offset: usize,
    /// Number of rows that fit
    pub viewport: usize,
}

/// Product list component
pub struct ProductList {
    /// Keyboard cursor row (None until the user navigates)
    cursor: Option<usize>,

    /// Cached catalog size (for bounds checking)
    item_count: usize,
}

impl ProductList {
    pub fn new(item_count: usize) -> Self {
        Self {
            cursor: None,
            item_count,
        }
    }

    /// Sync with the catalog size, clamping the cursor
    pub fn sync(&mut self, item_count: usize) {
        self.item_count = item_count;
        if let Some(idx) = self.cursor {
            if idx >= item_count {
                self.cursor = item_count.checked_sub(1);
            }
        }
    }

    /// First visible row: keeps the cursor on screen
    fn offset(&self, total: usize, viewport: usize) -> usize {
        if viewport == 0 || total <= viewport {
            return 0;
        }
        match self.cursor {
            Some(idx) if idx >= viewport => (idx + 1 - viewport).min(total - viewport),
            _ => 0,
        }
    }

    /// Compute header and row areas inside the panel
    pub fn layout(&self, area: Rect, total: usize) -> ListLayout {
        let inner = pane_block(None).inner(area);
        if inner.height == 0 || inner.width == 0 {
            return ListLayout::default();
        }

        let header = Rect::new(inner.x, inner.y, inner.width, 1);
        let viewport = inner.height.saturating_sub(HEADER_HEIGHT) as usize;
        let offset = self.offset(total, viewport);
        let end = (offset + viewport).min(total);

        let rows = (offset..end)
            .enumerate()
            .map(|(i, idx)| {
                let y = inner.y + HEADER_HEIGHT + i as u16;
                (Rect::new(inner.x, y, inner.width, 1), idx)
            })
            .collect();

        ListLayout {
            header: Some(header),
            rows,
            offset,
            viewport,
        }
    }
}

impl Default for ProductList {
    fn default() -> Self {
        Self::new(0)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Component for ProductList {
    fn id(&self) -> ComponentId {
        ComponentId::ProductList
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());
        f.render_widget(pane_block(Some((theme, focused))), area);

        let total = ctx.catalog.len();
        let layout = self.layout(area, total);

        if let Some(header) = layout.header {
            let title = Paragraph::new(HEADER).style(
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            );
            f.render_widget(title, header);
        }

        for &(row, idx) in &layout.rows {
            let Some(product) = ctx.catalog.get(idx) else {
                continue;
            };

            let marker = if focused && self.cursor == Some(idx) {
                "› "
            } else {
                "  "
            };
            // Two marker columns plus one trailing pad column
            let name_width = (row.width as usize).saturating_sub(3);
            let name = truncate_to_width(&product.name, name_width);

            // Selected row gets the alternate background across its full width
            let style = if ctx.is_selected(product) {
                Style::default().fg(theme.selection_fg).bg(theme.selection)
            } else {
                Style::default().fg(theme.foreground)
            };
            let marker_style = Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD);

            let line = Line::from(vec![Span::styled(marker, marker_style), Span::raw(name)]);
            f.render_widget(Paragraph::new(line).style(style), row);
        }

        render_scrollbar(f, area, total, layout.viewport, layout.offset);
    }
}

impl Navigable for ProductList {
    fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    fn set_cursor(&mut self, index: usize) {
        self.cursor = if self.item_count == 0 {
            None
        } else {
            Some(index.min(self.item_count - 1))
        };
    }

    fn item_count(&self) -> usize {
        self.item_count
    }
}

impl Interactive for ProductList {
    type Action = ListAction;

    fn handle_key(&mut self, key: KeyEvent) -> Handled<ListAction> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor_previous();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor_next();
                Handled::Yes
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor_first();
                Handled::Yes
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor_last();
                Handled::Yes
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.item_count == 0 {
                    return Handled::No;
                }
                let idx = self.cursor.unwrap_or(0);
                self.cursor = Some(idx);
                Handled::Action(ListAction::Selected(idx))
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:move  Enter:select")
    }
}
