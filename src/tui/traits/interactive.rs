//! Interactive trait for components that handle keyboard input
//!
//! Components that can receive and process keyboard events implement
//! this trait. The App routes input to the focused component.

use super::Component;
use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// Tells the App whether the component consumed the event, emitted an
/// action for the App to apply, or let it bubble up for global handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled<A = ()> {
    /// Event was consumed by the component
    Yes,
    /// Event was consumed and the App should apply this action
    Action(A),
    /// Event was not handled, should bubble up
    No,
}

impl<A> Handled<A> {
    /// Check if the event was handled
    pub fn was_handled(&self) -> bool {
        !matches!(self, Self::No)
    }
}

/// Trait for components that handle keyboard input
///
/// # Event Flow
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (global handlers: q, y/Y, t)
///    │
///    │ if not handled
///    ▼
/// Focused Component (via Interactive trait)
///    │
///    │ returns Handled::Yes, Handled::Action(..) or Handled::No
///    ▼
/// App (applies the action to its state)
/// ```
pub trait Interactive: Component {
    /// What this component asks the App to do
    type Action;

    /// Handle a key event
    fn handle_key(&mut self, key: KeyEvent) -> Handled<Self::Action>;

    /// Hint text for status bar when this component is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
