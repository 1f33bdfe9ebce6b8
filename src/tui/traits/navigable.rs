//! Keyboard cursor over a list of rows
//!
//! The cursor is where the user is pointing with the keyboard; it is not the
//! selection. Moving the cursor never changes what the detail pane shows.

use super::Component;

/// Extension trait for components with a row cursor
///
/// Implementors provide the cursor accessors and row count; movement
/// comes for free with bounds checking.
pub trait Navigable: Component {
    /// Current cursor row, if the cursor has been placed
    fn cursor(&self) -> Option<usize>;

    /// Place the cursor (implementations clamp to the row count)
    fn set_cursor(&mut self, index: usize);

    /// Total number of rows
    fn item_count(&self) -> usize;

    /// Move to the next row (places the cursor on the first row if unset)
    fn cursor_next(&mut self) {
        if let Some(current) = self.cursor() {
            let max = self.item_count().saturating_sub(1);
            if current < max {
                self.set_cursor(current + 1);
            }
        } else if self.item_count() > 0 {
            self.set_cursor(0);
        }
    }

    /// Move to the previous row (places the cursor on the last row if unset)
    fn cursor_previous(&mut self) {
        if let Some(current) = self.cursor() {
            if current > 0 {
                self.set_cursor(current - 1);
            }
        } else if self.item_count() > 0 {
            self.set_cursor(self.item_count() - 1);
        }
    }

    fn cursor_first(&mut self) {
        if self.item_count() > 0 {
            self.set_cursor(0);
        }
    }

    fn cursor_last(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.set_cursor(count - 1);
        }
    }
}
