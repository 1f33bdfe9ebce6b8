//! Headless rendering: draw one frame into ratatui's `TestBackend` and return
//! it as plain text. Backs the `snapshot` subcommand, which is handy for
//! checking both layouts without resizing a terminal.

use crate::tui::app::App;
use crate::tui::views;
use anyhow::{bail, Context, Result};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Render the App once at `cols` x `rows`
pub fn render_to_string(app: &mut App, cols: u16, rows: u16) -> Result<String> {
    let mut terminal =
        Terminal::new(TestBackend::new(cols, rows)).context("Failed to create test terminal")?;
    terminal
        .draw(|f| views::draw(f, app))
        .context("Failed to render snapshot")?;
    Ok(buffer_text(terminal.backend().buffer()))
}

/// Select `select` (by product name) if given, then render
pub fn run(app: &mut App, select: Option<&str>, cols: u16, rows: u16) -> Result<String> {
    if let Some(name) = select {
        let Some(product) = app.catalog().find_by_name(name).cloned() else {
            let names: Vec<&str> = app.catalog().iter().map(|p| p.name.as_str()).collect();
            bail!("No product named {:?} (available: {})", name, names.join(", "));
        };
        app.select(&product);
    }

    let window = app.observe_terminal_width(cols);
    tracing::info!(
        "Rendering {}x{} snapshot ({} units)",
        cols,
        rows,
        window.width
    );
    render_to_string(app, cols, rows)
}

/// Buffer contents, one line per row, trailing blanks trimmed
fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
