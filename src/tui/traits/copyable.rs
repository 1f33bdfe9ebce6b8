//! Copyable trait for values that provide clipboard content
//!
//! Supports both human-readable and machine-readable formats.

/// Trait for anything that can provide content for the clipboard
///
/// # Two Copy Modes
///
/// - **Text** (`y`): Human-readable format for pasting into docs, chat, etc.
/// - **Data** (`Y`): Machine-readable format (JSON) for scripting
pub trait Copyable {
    /// Human-readable text for the clipboard
    fn copy_text(&self) -> Option<String>;

    /// Machine-readable data for the clipboard
    fn copy_data(&self) -> Option<String> {
        None
    }

    /// Short description used in toast messages ("Copied product details")
    fn copy_description(&self) -> String {
        "content".to_string()
    }
}
