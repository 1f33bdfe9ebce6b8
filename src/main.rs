// Shopfront - adaptive product browser for the terminal
//
// Shows a fixed product catalog as a list plus a detail pane. Terminals at
// least 600 width units wide get both panes side by side; narrower ones show
// the list, then the detail of the picked product with a way back.
//
// Architecture:
// - Catalog: immutable products, built in or loaded from TOML
// - Window: wide/narrow classification from the display width
// - TUI (ratatui): App state, components, per-frame layout
// - Snapshot: headless single-frame rendering
// - Config + logging: env > file > defaults, tracing into an in-memory buffer

mod catalog;
mod cli;
mod config;
mod logging;
mod snapshot;
mod theme;
mod tui;
mod window;

use anyhow::{Context, Result};
use catalog::Catalog;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, VERSION};
use logging::{LogBuffer, TuiLogLayer};
use theme::{Theme, ThemeConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tui::app::App;

/// Where log events go besides the optional file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogOutput {
    /// In-memory buffer shown in the status bar (keeps the alternate screen clean)
    Tui,
    /// Plain fmt output on stderr (snapshot mode keeps stdout for the frame)
    Stderr,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config subcommands exit before anything else is set up
    if let Some(Commands::Config { show, reset, path }) = cli.command {
        cli::handle_config_command(show, reset, path);
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    cli.apply_overrides(&mut config);

    let log_buffer = LogBuffer::new();
    let output = match cli.command {
        Some(Commands::Snapshot { .. }) => LogOutput::Stderr,
        _ => LogOutput::Tui,
    };

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = init_tracing(&config, output, &log_buffer)?;

    let catalog = load_catalog(&config)?;

    let theme_config = ThemeConfig {
        use_theme_background: config.use_theme_background,
    };
    let theme = Theme::by_name(&config.theme, &theme_config);

    let mut app = App::new(
        catalog,
        config.viewport.to_viewport(),
        theme,
        theme_config,
        log_buffer,
    );

    match cli.command {
        Some(Commands::Snapshot { select, cols, rows }) => {
            let frame = snapshot::run(&mut app, select.as_deref(), cols, rows)?;
            print!("{}", frame);
            Ok(())
        }
        _ => {
            tracing::info!("Shopfront v{} started", VERSION);
            tui::run_tui(app).await
        }
    }
}

/// Initialize tracing
///
/// Precedence: RUST_LOG env var > config file > default "info". File logging
/// writes JSON lines through a non-blocking rolling appender, in addition to
/// the TUI buffer or stderr.
fn init_tracing(
    config: &Config,
    output: LogOutput,
    log_buffer: &LogBuffer,
) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.filter_directive().into());

    let (file_layer, guard) = if config.logging.file_enabled {
        match config.logging.file_appender() {
            Ok(file_appender) => {
                // Writes happen in a background thread
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                // Fall back to non-file logging
                eprintln!("Warning: {:#}", e);
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    let tui_layer = (output == LogOutput::Tui).then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer = (output == LogOutput::Stderr)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(guard)
}

/// Catalog from the configured file, or the built-in products
fn load_catalog(config: &Config) -> Result<Catalog> {
    let catalog = match &config.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    if catalog.is_empty() {
        tracing::warn!("Catalog is empty");
    } else {
        tracing::info!("Loaded catalog with {} products", catalog.len());
    }
    Ok(catalog)
}
