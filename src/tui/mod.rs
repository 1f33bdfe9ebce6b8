// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard, mouse and resize input, timer ticks)
// - Rendering the UI
// - Routing input to the App and its components

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod traits;
pub mod views;

use anyhow::{Context, Result};
use app::{App, CopyFormat};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done (also when the loop fails).
pub async fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on terminal input and a redraw tick with tokio::select!. Resize
/// events need no handling beyond the redraw: `views::draw` reads the frame
/// width on every pass.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // Redraw tick (expires toasts, picks up new log lines)
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            input = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            } => {
                match input {
                    Some(Event::Key(key_event)) => handle_key_event(app, key_event),
                    Some(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                    Some(Event::Resize(cols, rows)) => {
                        tracing::trace!("Terminal resized to {}x{}", cols, rows);
                    }
                    _ => {}
                }
            }

            _ = tick_interval.tick() => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Global → Focused component
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Terminals with keyboard enhancement also report releases and repeats
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    app.dispatch_to_focused(key_event);
}

/// Handle global keys - returns true if handled
/// Global keys work the same regardless of focus and arrangement
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        if key_event.code == KeyCode::Char('c') {
            app.should_quit = true;
            return true;
        }
        return false;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('t') => {
            app.next_theme();
            true
        }
        // Copy to clipboard: y = readable, Y = JSON
        KeyCode::Char('y') => {
            app.copy_selected(CopyFormat::Readable);
            true
        }
        KeyCode::Char('Y') => {
            app.copy_selected(CopyFormat::Json);
            true
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_focus();
            true
        }
        _ => false,
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.handle_click(mouse_event.column, mouse_event.row);
        }
        MouseEventKind::ScrollUp => {
            // Synthesize Up key event for trait dispatch
            let key_event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
            app.dispatch_to_focused(key_event);
        }
        MouseEventKind::ScrollDown => {
            let key_event = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
            app.dispatch_to_focused(key_event);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::logging::LogBuffer;
    use crate::theme::{Theme, ThemeConfig};
    use crate::tui::traits::{ComponentId, Navigable};
    use crate::window::Viewport;

    fn app_at(width: u32) -> App {
        let config = ThemeConfig::default();
        let mut app = App::new(
            Catalog::builtin(),
            Viewport::new(Some(width), 8),
            Theme::light(&config),
            config,
            LogBuffer::new(),
        );
        app.observe_terminal_width(80);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut app = app_at(375);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = app_at(375);
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn keyboard_select_and_go_back() {
        let mut app = app_at(375);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected().map(|p| p.price.as_str()), Some("$100"));

        app.observe_terminal_width(80);
        press(&mut app, KeyCode::Backspace);
        assert!(app.selected().is_none());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app_at(375);
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_key_event(&mut app, release);
        assert!(!app.should_quit);
    }

    #[test]
    fn tab_switches_focus_in_split() {
        let mut app = app_at(820);
        assert_eq!(app.focused(), ComponentId::ProductList);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused(), ComponentId::ProductDetail);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused(), ComponentId::ProductList);
    }

    #[test]
    fn copy_without_selection_reports_in_toast() {
        let mut app = app_at(820);
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("✗ No product selected")
        );
    }

    #[test]
    fn scroll_wheel_moves_cursor() {
        let mut app = app_at(820);
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown, 0, 0));
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown, 0, 0));
        assert_eq!(app.product_list.cursor(), Some(1));
        assert!(app.selected().is_none());
    }

    #[test]
    fn left_click_outside_any_pane_does_nothing() {
        let mut app = app_at(820);
        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), 500, 500),
        );
        assert!(app.selected().is_none());
    }
}
