//! Viewport configuration: how terminal columns map to layout width

use crate::window::{Viewport, DEFAULT_UNITS_PER_COLUMN};
use serde::Deserialize;

/// Viewport settings
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportConfig {
    /// Pin the display width (units) instead of measuring the terminal
    pub width: Option<u32>,
    /// Units per terminal column when measuring
    pub units_per_column: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: None,
            units_per_column: DEFAULT_UNITS_PER_COLUMN,
        }
    }
}

/// Viewport settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileViewport {
    pub width: Option<u32>,
    pub units_per_column: Option<u32>,
}

impl ViewportConfig {
    /// Create from file config, with an env-provided width taking precedence
    pub fn from_file(file: Option<FileViewport>, env_width: Option<u32>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            width: env_width.or(file.width),
            units_per_column: file
                .units_per_column
                .filter(|&u| u > 0)
                .unwrap_or(defaults.units_per_column),
        }
    }

    pub fn to_viewport(&self) -> Viewport {
        Viewport::new(self.width, self.units_per_column)
    }
}
