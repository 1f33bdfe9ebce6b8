//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.
//! This trait provides identity and rendering capability.

use crate::catalog::{Catalog, Product};
use crate::theme::Theme;
use crate::window::WindowInfo;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
///
/// Used for focus tracking (which component receives input) and
/// focus-dependent styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Scrollable product rows
    ProductList,
    /// Selected product fields or the empty state
    ProductDetail,
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to mutable app state.
/// Rendering is therefore a pure function of this context, which is what lets
/// views be rebuilt on every frame without losing anything.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Fixed product catalog, in display order
    pub catalog: &'a Catalog,

    /// Current selection (always a catalog member)
    pub selected: Option<&'a Product>,

    /// Wide/narrow classification for this frame
    pub window: WindowInfo,

    /// Which component currently receives keyboard input
    pub focus: ComponentId,
}

impl RenderContext<'_> {
    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }

    /// Check whether a product is the current selection (value equality)
    pub fn is_selected(&self, product: &Product) -> bool {
        self.selected == Some(product)
    }
}

/// Base trait for all UI components
///
/// A component is anything that can render itself to the terminal.
/// Most components will also implement `Interactive`.
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    ///
    /// # Arguments
    ///
    /// * `f` - The frame to render to
    /// * `area` - The rectangular area allocated for this component
    /// * `ctx` - Immutable render context (theme, catalog, selection, window)
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
