//! Product detail component
//!
//! Shows the selected product's name, price and description centered in the
//! pane, or an empty-state message when nothing is selected. In the narrow
//! layout it also offers "< Go back", reported as [`DetailAction::GoBack`].
//! The component keeps no state: whether going back applies is decided by the
//! App from the live arrangement when the action arrives.

use super::formatters::wrap_to_width;
use super::pane_block;
use crate::catalog::Product;
use crate::tui::traits::{Component, ComponentId, Copyable, Handled, Interactive, RenderContext};
use crate::window::WindowInfo;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Label of the narrow-layout back affordance
pub const GO_BACK_LABEL: &str = "< Go back";

/// Shown when nothing is selected
pub const EMPTY_STATE: &str = "No product selected";

/// What the detail pane asks the App to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    GoBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Body,
    Link,
    Empty,
    Blank,
}

/// One rendered line of the detail pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub text: String,
    pub kind: LineKind,
}

impl DetailLine {
    fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    fn blank() -> Self {
        Self::new("", LineKind::Blank)
    }
}

/// Lines for a product (or the empty state), wrapped to `width` columns
pub fn detail_lines(product: Option<&Product>, show_go_back: bool, width: usize) -> Vec<DetailLine> {
    let Some(product) = product else {
        return wrap_to_width(EMPTY_STATE, width)
            .into_iter()
            .map(|l| DetailLine::new(l, LineKind::Empty))
            .collect();
    };

    let wrapped = |text: &str, kind: LineKind| -> Vec<DetailLine> {
        wrap_to_width(text, width)
            .into_iter()
            .map(|l| DetailLine::new(l, kind))
            .collect()
    };

    let mut lines = wrapped(&format!("Details for {}", product.name), LineKind::Heading);
    lines.push(DetailLine::blank());
    lines.extend(wrapped(&format!("Price: {}", product.price), LineKind::Body));
    lines.push(DetailLine::blank());
    lines.extend(wrapped(&product.description, LineKind::Body));

    if show_go_back {
        lines.push(DetailLine::blank());
        lines.push(DetailLine::new(GO_BACK_LABEL, LineKind::Link));
    }
    lines
}

/// Fit lines into `height` rows
///
/// Spacer lines go first, then lines are cut from the bottom. A trailing
/// "< Go back" always keeps the last row.
fn fit_to_height(mut lines: Vec<DetailLine>, height: usize) -> Vec<DetailLine> {
    if lines.len() <= height {
        return lines;
    }
    lines.retain(|l| l.kind != LineKind::Blank);
    if lines.len() <= height {
        return lines;
    }

    let link = match lines.last() {
        Some(last) if last.kind == LineKind::Link => lines.pop(),
        _ => None,
    };
    lines.truncate(height.saturating_sub(usize::from(link.is_some())));
    lines.extend(link);
    lines
}

/// Where every line of the pane lands for a given area
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailLayout {
    pub lines: Vec<(Rect, DetailLine)>,
    /// Clickable area of "< Go back" (only the label itself)
    pub go_back: Option<Rect>,
}

/// Product detail component
#[derive(Debug, Default)]
pub struct ProductDetail;

impl ProductDetail {
    pub fn new() -> Self {
        Self
    }

    /// Status bar hint, depending on whether going back is available
    pub fn hint(go_back: bool) -> &'static str {
        if go_back {
            "Esc:back  y/Y:copy"
        } else {
            "y/Y:copy"
        }
    }

    /// Vertically centered line placement inside the panel
    pub fn layout(area: Rect, product: Option<&Product>, window: WindowInfo) -> DetailLayout {
        let inner = pane_block(None).inner(area);
        if inner.height == 0 || inner.width == 0 {
            return DetailLayout::default();
        }

        let lines = fit_to_height(
            detail_lines(product, !window.is_wide_screen, inner.width as usize),
            inner.height as usize,
        );
        let used = lines.len() as u16;
        let top = inner.y + (inner.height - used) / 2;

        let mut layout = DetailLayout::default();
        for (i, line) in lines.into_iter().enumerate() {
            let rect = Rect::new(inner.x, top + i as u16, inner.width, 1);
            if line.kind == LineKind::Link {
                // Same centering as Alignment::Center
                let width = (line.text.width() as u16).min(inner.width);
                let x = inner.x + (inner.width - width) / 2;
                layout.go_back = Some(Rect::new(x, rect.y, width, 1));
            }
            layout.lines.push((rect, line));
        }
        layout
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for ProductDetail {
    fn id(&self) -> ComponentId {
        ComponentId::ProductDetail
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        f.render_widget(
            pane_block(Some((theme, ctx.is_focused(self.id())))),
            area,
        );

        for (rect, line) in Self::layout(area, ctx.selected, ctx.window).lines {
            let style = match line.kind {
                LineKind::Heading => Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
                LineKind::Empty => Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
                LineKind::Link => Style::default()
                    .fg(theme.link)
                    .add_modifier(Modifier::UNDERLINED),
                LineKind::Body | LineKind::Blank => Style::default().fg(theme.foreground),
            };
            let paragraph = Paragraph::new(Line::styled(line.text, style)).alignment(Alignment::Center);
            f.render_widget(paragraph, rect);
        }
    }
}

impl Interactive for ProductDetail {
    type Action = DetailAction;

    fn handle_key(&mut self, key: KeyEvent) -> Handled<DetailAction> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => {
                Handled::Action(DetailAction::GoBack)
            }
            _ => Handled::No,
        }
    }
}

impl Copyable for Product {
    fn copy_text(&self) -> Option<String> {
        Some(format!(
            "{}\nPrice: {}\n{}",
            self.name, self.price, self.description
        ))
    }

    fn copy_data(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    fn copy_description(&self) -> String {
        "product details".to_string()
    }
}
