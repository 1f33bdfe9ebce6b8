//! Window classification: wide (two-pane) or narrow (stacked).
//!
//! Single source of truth for the width threshold. Layout is a pure function of
//! the current width and is recomputed on every draw, never stored.

/// Widths at or above this many units get the two-pane layout
pub const WIDE_THRESHOLD: u32 = 600;

/// Default number of width units one terminal column stands for
pub const DEFAULT_UNITS_PER_COLUMN: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// < 600 units: one pane at a time
    Narrow,
    /// 600+ units: list and detail side by side
    Wide,
}

impl LayoutMode {
    pub fn from_width(width: u32) -> Self {
        if width >= WIDE_THRESHOLD {
            LayoutMode::Wide
        } else {
            LayoutMode::Narrow
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LayoutMode::Narrow => "narrow",
            LayoutMode::Wide => "wide",
        }
    }
}

/// Classification derived from the reported display width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowInfo {
    /// Display width in device-independent units
    pub width: u32,
    pub is_wide_screen: bool,
}

impl WindowInfo {
    pub fn calculate(width: u32) -> Self {
        Self {
            width,
            is_wide_screen: LayoutMode::from_width(width) == LayoutMode::Wide,
        }
    }

    pub fn mode(&self) -> LayoutMode {
        if self.is_wide_screen {
            LayoutMode::Wide
        } else {
            LayoutMode::Narrow
        }
    }
}

/// Where the display width comes from
///
/// A fixed width pins the layout regardless of terminal size (useful for
/// previewing phone/tablet widths); otherwise terminal columns are scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub fixed_width: Option<u32>,
    pub units_per_column: u32,
}

impl Viewport {
    pub fn new(fixed_width: Option<u32>, units_per_column: u32) -> Self {
        Self {
            fixed_width,
            units_per_column: units_per_column.max(1),
        }
    }

    /// Display width for a terminal that is `columns` cells wide
    pub fn width_for_columns(&self, columns: u16) -> u32 {
        self.fixed_width
            .unwrap_or_else(|| u32::from(columns).saturating_mul(self.units_per_column))
    }

    pub fn window_info(&self, columns: u16) -> WindowInfo {
        WindowInfo::calculate(self.width_for_columns(columns))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(None, DEFAULT_UNITS_PER_COLUMN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(LayoutMode::from_width(0), LayoutMode::Narrow);
        assert_eq!(LayoutMode::from_width(375), LayoutMode::Narrow);
        assert_eq!(LayoutMode::from_width(599), LayoutMode::Narrow);
        assert_eq!(LayoutMode::from_width(600), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_width(820), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_width(u32::MAX), LayoutMode::Wide);
    }

    #[test]
    fn classification_is_monotonic() {
        let mut seen_wide = false;
        for width in (0..2000).step_by(7) {
            let wide = WindowInfo::calculate(width).is_wide_screen;
            assert!(!(seen_wide && !wide), "width {} went back to narrow", width);
            assert_eq!(wide, width >= WIDE_THRESHOLD);
            seen_wide |= wide;
        }
    }

    #[test]
    fn columns_scale_to_units() {
        let viewport = Viewport::default();
        assert_eq!(viewport.width_for_columns(74), 592);
        assert_eq!(viewport.window_info(74).mode(), LayoutMode::Narrow);
        assert_eq!(viewport.window_info(75).mode(), LayoutMode::Wide);
    }

    #[test]
    fn fixed_width_ignores_terminal() {
        let viewport = Viewport::new(Some(375), 8);
        assert_eq!(viewport.width_for_columns(200), 375);
        assert!(!viewport.window_info(200).is_wide_screen);
    }

    #[test]
    fn zero_units_per_column_is_clamped() {
        let viewport = Viewport::new(None, 0);
        assert_eq!(viewport.width_for_columns(80), 80);
    }
}
