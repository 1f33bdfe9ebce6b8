// CLI module - command-line argument parsing and handlers
//
// Running without a subcommand opens the interactive browser. Subcommands:
// - snapshot: Render one frame headlessly to stdout
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Print the config file location

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Shopfront - adaptive product browser for the terminal
#[derive(Parser, Debug)]
#[command(name = "shopfront")]
#[command(version = VERSION)]
#[command(about = "Browse a product catalog with a wide/narrow adaptive layout", long_about = None)]
pub struct Cli {
    /// Pin the display width in units (600 and up shows both panes)
    #[arg(long, global = true)]
    pub width: Option<u32>,

    /// TOML catalog file replacing the built-in products
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Theme name (Light or Dark)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a single frame as plain text and exit
    Snapshot {
        /// Select the product with this name before rendering
        #[arg(long)]
        select: Option<String>,

        /// Frame width in terminal columns
        #[arg(long, default_value_t = 100)]
        cols: u16,

        /// Frame height in terminal rows
        #[arg(long, default_value_t = 24)]
        rows: u16,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Apply command-line flags on top of env/file/default configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(width) = self.width {
            config.viewport.width = Some(width);
        }
        if let Some(ref catalog) = self.catalog {
            config.catalog = Some(catalog.clone());
        }
        if let Some(ref theme) = self.theme {
            config.theme = theme.clone();
        }
    }
}

/// Handle `config` subcommand flags
pub fn handle_config_command(show: bool, reset: bool, path: bool) {
    if path {
        handle_config_path();
    } else if show {
        handle_config_show();
    } else if reset {
        handle_config_reset();
    } else {
        // No flag provided, show help
        println!("Usage: shopfront config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}
