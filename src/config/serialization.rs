//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        let catalog = match &self.catalog {
            Some(path) => format!("catalog = {:?}\n", path.display().to_string()),
            None => "# catalog = \"~/products.toml\"\n".to_string(),
        };
        let width = match self.viewport.width {
            Some(width) => format!("width = {}\n", width),
            None => "# width = 375              # pin the layout width (units)\n".to_string(),
        };

        format!(
            r#"# shopfront configuration

# Theme: Light, Dark
theme = "{theme}"

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Product catalog file ([[products]] tables with name, price, description).
# Without it the built-in catalog is shown.
{catalog}
# Layout width. Widths of 600 units and above show list and detail side by side.
[viewport]
{width}units_per_column = {units_per_column}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the in-app log line)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir:?}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            use_bg = self.use_theme_background,
            catalog = catalog,
            width = width,
            units_per_column = self.viewport.units_per_column,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
