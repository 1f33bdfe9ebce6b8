//! Clipboard helper for copying product details to the system clipboard
//!
//! Uses `arboard` for cross-platform support. The clipboard is opened fresh
//! for every copy so nothing is held between key presses.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Fails when no clipboard is reachable (headless Linux, no display server).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
