// Theme system for the TUI
//
// Themes are resolved once into a `Theme` with every color ready for use.
// Two themes ship with the binary:
// - Light: white surface, pale green selection, blue link (the storefront look)
// - Dark: One Half Dark palette for dark terminals

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Names accepted by [`Theme::by_name`], in cycle order
const AVAILABLE: &[&str] = &["Light", "Dark"];

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub status_bar: Color,
    pub border: Color,
    pub highlight: Color, // Focused pane border

    // ─── Selection Colors ────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Content Colors ──────────────────────────────────────
    pub heading: Color,
    pub link: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,
}

impl Theme {
    /// Load a theme by name (case-insensitive)
    ///
    /// Unknown names fall back to the Light theme.
    pub fn by_name(name: &str, config: &ThemeConfig) -> Self {
        if name.eq_ignore_ascii_case("dark") {
            Self::dark(config)
        } else {
            if !name.eq_ignore_ascii_case("light") {
                tracing::warn!("Unknown theme '{}', using Light", name);
            }
            Self::light(config)
        }
    }

    /// Storefront palette: white surface, #def2d8 selection, blue link
    pub fn light(config: &ThemeConfig) -> Self {
        let background = if config.use_theme_background {
            Color::Rgb(255, 255, 255)
        } else {
            Color::Reset
        };

        Self {
            name: "Light".to_string(),
            background,
            foreground: Color::Rgb(33, 33, 33),
            title: Color::Rgb(46, 125, 50),
            status_bar: Color::Rgb(97, 97, 97),
            border: Color::Rgb(189, 189, 189),
            highlight: Color::Rgb(46, 125, 50),
            selection: Color::Rgb(0xde, 0xf2, 0xd8),
            selection_fg: Color::Rgb(33, 33, 33),
            heading: Color::Rgb(0, 0, 0),
            link: Color::Rgb(0, 0, 255),
            border_type: BorderType::Rounded,
        }
    }

    /// One Half Dark palette
    pub fn dark(config: &ThemeConfig) -> Self {
        let background = if config.use_theme_background {
            Color::Rgb(40, 44, 52)
        } else {
            Color::Reset
        };

        Self {
            name: "Dark".to_string(),
            background,
            foreground: Color::Rgb(220, 223, 228),
            title: Color::Rgb(86, 182, 194),
            status_bar: Color::Rgb(220, 223, 228),
            border: Color::Rgb(92, 99, 112),
            highlight: Color::Rgb(229, 192, 123),
            selection: Color::Rgb(71, 78, 93),
            selection_fg: Color::Rgb(220, 223, 228),
            heading: Color::Rgb(229, 192, 123),
            link: Color::Rgb(97, 175, 239),
            border_type: BorderType::Plain,
        }
    }

    /// Theme after this one in the cycle
    pub fn next(&self, config: &ThemeConfig) -> Self {
        let current = AVAILABLE
            .iter()
            .position(|n| n.eq_ignore_ascii_case(&self.name))
            .unwrap_or(0);
        Self::by_name(AVAILABLE[(current + 1) % AVAILABLE.len()], config)
    }

    /// Border color for a pane based on focus state
    pub fn pane_border(&self, focused: bool) -> Color {
        if focused {
            self.highlight
        } else {
            self.border
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light(&ThemeConfig::default())
    }
}
