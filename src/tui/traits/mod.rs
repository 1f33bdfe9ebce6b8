//! Component trait system for TUI architecture
//!
//! This module defines the contracts that UI components implement.
//! The App owns the only piece of mutable product state (the selection);
//! components render from a read-only context and report user intent back
//! as actions instead of mutating anything themselves.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │    (owns catalog + selection, picks the arrangement)        │
//! └─────────────────────────────────────────────────────────────┘
//!              │ RenderContext                ▲ ListAction /
//!              ▼                              │ DetailAction
//!        ┌──────────────┐             ┌────────────────┐
//!        │ Product List │             │ Product Detail │
//!        └──────────────┘             └────────────────┘
//! ```
//!
//! # Traits Overview
//!
//! - [`Component`] - Base trait: render + identity
//! - [`Interactive`] - Components that handle keyboard input
//! - [`Navigable`] - Keyboard cursor over a list of rows
//! - [`Copyable`] - Things that provide clipboard content

mod component;
mod copyable;
mod interactive;
mod navigable;

pub use component::{Component, ComponentId, RenderContext};
pub use copyable::Copyable;
pub use interactive::{Handled, Interactive};
pub use navigable::Navigable;
