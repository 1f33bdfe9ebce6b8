// TUI application state
//
// App owns the only mutable state of the browser: the current selection.
// Everything on screen (arrangement, pane contents, go-back affordance) is
// derived from it plus the window classification on every draw, so nothing
// is lost when the terminal resizes or the layout flips between wide and
// narrow.

use super::clipboard;
use super::components::{DetailAction, ListAction, ProductDetail, ProductList, Toast};
use super::layout::Arrangement;
use super::traits::{ComponentId, Copyable, Handled, Interactive};
use crate::catalog::{Catalog, Product};
use crate::logging::LogBuffer;
use crate::theme::{Theme, ThemeConfig};
use crate::window::{LayoutMode, Viewport, WindowInfo};
use crossterm::event::KeyEvent;
use ratatui::layout::{Position, Rect};

/// Clipboard formats offered by `y` / `Y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFormat {
    /// Human-readable text
    Readable,
    /// serde_json encoding of the product
    Json,
}

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A list row (catalog index)
    Row(usize),
    GoBack,
    /// Anywhere else inside a pane
    Pane(ComponentId),
}

/// Clickable areas recorded during the last draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub rows: Vec<(Rect, usize)>,
    pub go_back: Option<Rect>,
    pub list: Option<Rect>,
    pub detail: Option<Rect>,
}

impl HitAreas {
    /// Most specific target under (column, row)
    pub fn target_at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let pos = Position::new(column, row);

        if let Some(&(_, idx)) = self.rows.iter().find(|(rect, _)| rect.contains(pos)) {
            return Some(ClickTarget::Row(idx));
        }
        if self.go_back.is_some_and(|rect| rect.contains(pos)) {
            return Some(ClickTarget::GoBack);
        }
        if self.list.is_some_and(|rect| rect.contains(pos)) {
            return Some(ClickTarget::Pane(ComponentId::ProductList));
        }
        if self.detail.is_some_and(|rect| rect.contains(pos)) {
            return Some(ClickTarget::Pane(ComponentId::ProductDetail));
        }
        None
    }
}

/// Main application state for the TUI
pub struct App {
    /// Fixed catalog for the whole run
    catalog: Catalog,

    /// Current selection, always a catalog member
    selected: Option<Product>,

    /// Where the display width comes from
    viewport: Viewport,

    /// Terminal width in columns, as of the last draw
    terminal_cols: u16,

    /// Layout mode of the last draw (for switch logging only)
    last_mode: Option<LayoutMode>,

    /// Pane focused in the side-by-side arrangement
    split_focus: ComponentId,

    // ─── Components ───
    pub product_list: ProductList,
    pub product_detail: ProductDetail,

    // ─── Presentation ───
    pub theme: Theme,
    theme_config: ThemeConfig,
    pub log_buffer: LogBuffer,
    pub toast: Option<Toast>,

    /// Filled by `views::draw`, read by mouse handling
    pub hit_areas: HitAreas,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(
        catalog: Catalog,
        viewport: Viewport,
        theme: Theme,
        theme_config: ThemeConfig,
        log_buffer: LogBuffer,
    ) -> Self {
        let product_list = ProductList::new(catalog.len());
        Self {
            catalog,
            selected: None,
            viewport,
            terminal_cols: 0,
            last_mode: None,
            split_focus: ComponentId::ProductList,
            product_list,
            product_detail: ProductDetail::new(),
            theme,
            theme_config,
            log_buffer,
            toast: None,
            hit_areas: HitAreas::default(),
            should_quit: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Make `product` the current selection
    ///
    /// Returns false (and leaves the selection alone) when the product is not
    /// part of the catalog. Re-selecting the current product is a no-op.
    pub fn select(&mut self, product: &Product) -> bool {
        if !self.catalog.contains(product) {
            tracing::warn!("Rejected selection of unknown product {:?}", product.name);
            return false;
        }

        // The list cursor is left alone so going back shows the list as it was
        if self.selected.as_ref() == Some(product) {
            return true;
        }

        self.selected = Some(product.clone());
        tracing::debug!("Selected product {}", product.name);
        true
    }

    /// Select the product at a catalog index
    pub fn select_row(&mut self, index: usize) -> bool {
        match self.catalog.get(index).cloned() {
            Some(product) => self.select(&product),
            None => {
                tracing::warn!("Rejected selection of row {}", index);
                false
            }
        }
    }

    /// Clear the selection (narrow layout returns to the list)
    pub fn go_back(&mut self) {
        if let Some(product) = self.selected.take() {
            tracing::debug!("Went back from {}", product.name);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Window and layout
    // ─────────────────────────────────────────────────────────────────────────

    pub fn window_info(&self) -> WindowInfo {
        self.viewport.window_info(self.terminal_cols)
    }

    pub fn arrangement(&self) -> Arrangement {
        Arrangement::resolve(self.window_info().mode(), self.selected.is_some())
    }

    /// Component receiving keyboard input
    pub fn focused(&self) -> ComponentId {
        match self.arrangement() {
            Arrangement::ListOnly => ComponentId::ProductList,
            Arrangement::DetailOnly => ComponentId::ProductDetail,
            Arrangement::Split => self.split_focus,
        }
    }

    /// Move focus to the other pane (side-by-side arrangement only)
    pub fn toggle_focus(&mut self) {
        if self.arrangement() == Arrangement::Split {
            self.split_focus = match self.split_focus {
                ComponentId::ProductList => ComponentId::ProductDetail,
                ComponentId::ProductDetail => ComponentId::ProductList,
            };
        }
    }

    /// Record the terminal width and clamp the list cursor
    ///
    /// Called at the start of every draw. Returns this frame's classification.
    pub fn observe_terminal_width(&mut self, columns: u16) -> WindowInfo {
        self.terminal_cols = columns;
        let window = self.window_info();

        let mode = window.mode();
        if self.last_mode.is_some_and(|last| last != mode) {
            tracing::debug!("Layout switched to {} at {} units", mode.name(), window.width);
        }
        self.last_mode = Some(mode);

        self.product_list.sync(self.catalog.len());
        window
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────

    /// Route a key to the focused component and apply what it asks for
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> bool {
        match self.focused() {
            ComponentId::ProductList => match self.product_list.handle_key(key) {
                Handled::Action(action) => {
                    self.apply_list_action(action);
                    true
                }
                handled => handled.was_handled(),
            },
            ComponentId::ProductDetail => match self.product_detail.handle_key(key) {
                Handled::Action(action) => self.apply_detail_action(action),
                handled => handled.was_handled(),
            },
        }
    }

    fn apply_list_action(&mut self, action: ListAction) {
        match action {
            ListAction::Selected(idx) => {
                self.select_row(idx);
            }
        }
    }

    /// Returns false when the action does not apply to the current arrangement
    fn apply_detail_action(&mut self, action: DetailAction) -> bool {
        match action {
            // Going back only exists while the detail replaces the list
            DetailAction::GoBack if self.arrangement() == Arrangement::DetailOnly => {
                self.go_back();
                true
            }
            DetailAction::GoBack => false,
        }
    }

    /// Act on a left click at (column, row), using the areas of the last draw
    pub fn handle_click(&mut self, column: u16, row: u16) {
        match self.hit_areas.target_at(column, row) {
            Some(ClickTarget::Row(idx)) => {
                self.split_focus = ComponentId::ProductList;
                self.select_row(idx);
            }
            Some(ClickTarget::GoBack) => self.go_back(),
            Some(ClickTarget::Pane(id)) => {
                if self.arrangement() == Arrangement::Split {
                    self.split_focus = id;
                }
            }
            None => {}
        }
    }

    /// Hint for the status bar from the focused component
    pub fn focus_hint(&self) -> Option<&'static str> {
        match self.focused() {
            ComponentId::ProductList => self.product_list.focus_hint(),
            ComponentId::ProductDetail => Some(ProductDetail::hint(
                self.arrangement() == Arrangement::DetailOnly,
            )),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Theme, clipboard, toast
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next_theme(&mut self) {
        self.theme = self.theme.next(&self.theme_config);
        tracing::info!("Theme changed to {}", self.theme.name);
        self.show_toast(format!("Theme: {}", self.theme.name));
    }

    /// Clipboard content for the current selection
    pub fn copy_content(&self, format: CopyFormat) -> Option<String> {
        let product = self.selected.as_ref()?;
        match format {
            CopyFormat::Readable => product.copy_text(),
            CopyFormat::Json => product.copy_data(),
        }
    }

    /// Copy the selection to the system clipboard, reporting in a toast
    pub fn copy_selected(&mut self, format: CopyFormat) {
        let (Some(product), Some(content)) = (self.selected.as_ref(), self.copy_content(format))
        else {
            self.show_toast("✗ No product selected");
            return;
        };

        let what = match format {
            CopyFormat::Readable => product.copy_description(),
            CopyFormat::Json => format!("{} as JSON", product.copy_description()),
        };
        match clipboard::copy_to_clipboard(&content) {
            Ok(()) => self.show_toast(format!("✓ Copied {}", what)),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app_with_width(width: u32) -> App {
        let mut app = app_following_terminal();
        app.viewport = Viewport::new(Some(width), 8);
        app.observe_terminal_width(80);
        app
    }

    /// App whose width comes from the terminal (8 units per column)
    fn app_following_terminal() -> App {
        let config = ThemeConfig::default();
        App::new(
            Catalog::builtin(),
            Viewport::new(None, 8),
            Theme::light(&config),
            config,
            LogBuffer::new(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn starts_with_nothing_selected() {
        let app = app_with_width(375);
        assert!(app.selected().is_none());
        assert_eq!(app.arrangement(), Arrangement::ListOnly);
        assert_eq!(app.focused(), ComponentId::ProductList);
    }

    #[test]
    fn select_then_go_back_round_trips() {
        let mut app = app_with_width(375);
        let product = app.catalog().get(0).cloned().unwrap();

        assert!(app.select(&product));
        assert_eq!(app.selected(), Some(&product));
        assert_eq!(app.arrangement(), Arrangement::DetailOnly);
        assert_eq!(app.focused(), ComponentId::ProductDetail);

        app.go_back();
        assert!(app.selected().is_none());
        assert_eq!(app.arrangement(), Arrangement::ListOnly);
    }

    #[test]
    fn reselecting_is_idempotent() {
        let mut app = app_with_width(820);
        let product = app.catalog().get(1).cloned().unwrap();
        app.select(&product);
        app.select(&product);
        assert_eq!(app.selected(), Some(&product));
    }

    #[test]
    fn rejects_products_outside_catalog() {
        let mut app = app_with_width(820);
        let stranger = Product::new("Chanel | No. 5", "$150", "Not in this shop.");
        assert!(!app.select(&stranger));
        assert!(app.selected().is_none());
        assert!(!app.select_row(99));
    }

    #[test]
    fn selection_survives_width_changes() {
        let mut app = app_following_terminal();
        app.observe_terminal_width(120);
        app.select_row(2);
        let chosen = app.selected().cloned();

        app.observe_terminal_width(40);
        assert_eq!(app.selected().cloned(), chosen);
        assert_eq!(app.arrangement(), Arrangement::DetailOnly);

        app.observe_terminal_width(120);
        assert!(app.window_info().is_wide_screen);
        assert_eq!(app.selected().cloned(), chosen);
    }

    #[test]
    fn enter_on_list_selects_cursor_row() {
        let mut app = app_with_width(375);
        app.dispatch_to_focused(key(KeyCode::Down));
        app.dispatch_to_focused(key(KeyCode::Down));
        assert!(app.dispatch_to_focused(key(KeyCode::Enter)));
        assert_eq!(app.selected().map(|p| p.name.as_str()), Some("YSL | Black Opium"));
    }

    #[test]
    fn esc_goes_back_only_in_narrow_layout() {
        let mut app = app_with_width(375);
        app.select_row(0);
        app.observe_terminal_width(80);
        assert!(app.dispatch_to_focused(key(KeyCode::Esc)));
        assert!(app.selected().is_none());

        let mut wide = app_with_width(820);
        wide.select_row(0);
        wide.toggle_focus();
        assert_eq!(wide.focused(), ComponentId::ProductDetail);
        assert!(!wide.dispatch_to_focused(key(KeyCode::Esc)));
        assert!(wide.selected().is_some());
    }

    #[test]
    fn esc_after_widening_keeps_selection() {
        let mut app = app_following_terminal();
        app.observe_terminal_width(40);
        app.select_row(0);
        assert_eq!(app.focused(), ComponentId::ProductDetail);

        // Terminal grows past the threshold; nothing has been drawn since
        app.observe_terminal_width(100);
        assert_eq!(app.arrangement(), Arrangement::Split);
        app.toggle_focus();
        assert_eq!(app.focused(), ComponentId::ProductDetail);

        assert!(!app.dispatch_to_focused(key(KeyCode::Esc)));
        assert_eq!(app.selected().map(|p| p.name.as_str()), Some("Kayali | Vanilla"));
        assert_eq!(app.focus_hint(), Some("y/Y:copy"));
    }

    #[test]
    fn esc_after_narrowing_goes_back() {
        let mut app = app_following_terminal();
        app.observe_terminal_width(100);
        app.select_row(1);
        app.toggle_focus();

        app.observe_terminal_width(40);
        assert_eq!(app.focus_hint(), Some("Esc:back  y/Y:copy"));
        assert!(app.dispatch_to_focused(key(KeyCode::Esc)));
        assert!(app.selected().is_none());
    }

    #[test]
    fn focus_toggle_is_ignored_outside_split() {
        let mut app = app_with_width(375);
        app.toggle_focus();
        assert_eq!(app.focused(), ComponentId::ProductList);
    }

    #[test]
    fn copy_content_needs_selection() {
        let mut app = app_with_width(820);
        assert!(app.copy_content(CopyFormat::Readable).is_none());
        app.select_row(0);
        let text = app.copy_content(CopyFormat::Readable).unwrap();
        assert!(text.starts_with("Kayali | Vanilla\nPrice: $100"));
        assert!(app.copy_content(CopyFormat::Json).unwrap().contains("\"price\":\"$100\""));
    }

    #[test]
    fn hit_areas_prefer_rows_over_panes() {
        let hits = HitAreas {
            rows: vec![(Rect::new(2, 3, 20, 1), 0)],
            go_back: None,
            list: Some(Rect::new(0, 0, 24, 10)),
            detail: None,
        };
        assert_eq!(hits.target_at(5, 3), Some(ClickTarget::Row(0)));
        assert_eq!(
            hits.target_at(5, 6),
            Some(ClickTarget::Pane(ComponentId::ProductList))
        );
        assert_eq!(hits.target_at(50, 6), None);
    }

    #[test]
    fn theme_cycles_with_toast() {
        let mut app = app_with_width(820);
        app.next_theme();
        assert_eq!(app.theme.name, "Dark");
        assert_eq!(app.toast.as_ref().map(|t| t.message.as_str()), Some("Theme: Dark"));
    }
}
