// Views module - screen-level rendering
//
// One screen with a fixed shell (title bar, content slot, status bar). The
// content slot holds the panes chosen by the current `Arrangement`:
// - Split: product list and product detail side by side
// - ListOnly: product list
// - DetailOnly: product detail
//
// Everything is rebuilt from App state on every frame.

use super::app::{App, HitAreas};
use super::components::{status_bar, title_bar, ProductDetail};
use super::layout::pane_areas;
use super::traits::{Component, RenderContext};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Shell heights: bordered title, bottom-bordered status
const TITLE_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 2;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let window = app.observe_terminal_width(f.area().width);

    // Apply theme background to entire frame (respects use_theme_background toggle)
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], &app.theme, window);

    let arrangement = app.arrangement();
    let panes = pane_areas(arrangement, chunks[1]);
    let ctx = RenderContext {
        theme: &app.theme,
        catalog: app.catalog(),
        selected: app.selected(),
        window,
        focus: app.focused(),
    };

    let mut hits = HitAreas {
        list: panes.list,
        detail: panes.detail,
        ..HitAreas::default()
    };

    if let Some(area) = panes.list {
        app.product_list.render(f, area, &ctx);
        hits.rows = app.product_list.layout(area, ctx.catalog.len()).rows;
    }
    if let Some(area) = panes.detail {
        app.product_detail.render(f, area, &ctx);
        hits.go_back = ProductDetail::layout(area, ctx.selected, window).go_back;
    }

    let latest_log = app.log_buffer.latest();
    let status = status_bar::StatusLine {
        window,
        focus_hint: app.focus_hint(),
        latest_log: latest_log.as_ref(),
    };
    status_bar::render(f, chunks[2], &app.theme, &status);

    app.hit_areas = hits;

    // Toast on top of everything
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    // Clear expired toast after render
    app.clear_expired_toast();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::logging::{LogBuffer, LogEntry, LogLevel};
    use crate::theme::{Theme, ThemeConfig};
    use crate::tui::components::product_detail::{EMPTY_STATE, GO_BACK_LABEL};
    use crate::tui::components::product_list::HEADER;
    use crate::window::Viewport;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use ratatui::Terminal;

    const COLS: u16 = 100;
    const ROWS: u16 = 24;
    const SELECTION_BG: Color = Color::Rgb(0xde, 0xf2, 0xd8);

    fn app(width: u32, catalog: Catalog) -> App {
        let config = ThemeConfig::default();
        App::new(
            catalog,
            Viewport::new(Some(width), 8),
            Theme::light(&config),
            config,
            LogBuffer::new(),
        )
    }

    /// App whose width follows the terminal (8 units per column)
    fn app_following_terminal() -> App {
        let config = ThemeConfig::default();
        App::new(
            Catalog::builtin(),
            Viewport::new(None, 8),
            Theme::light(&config),
            config,
            LogBuffer::new(),
        )
    }

    fn render(app: &mut App) -> Buffer {
        render_sized(app, COLS, ROWS)
    }

    fn render_sized(app: &mut App, cols: u16, rows: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Text inside `area` only
    fn area_text(buffer: &Buffer, area: Rect) -> String {
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn row_y(buffer: &Buffer, needle: &str) -> Option<u16> {
        text(buffer)
            .lines()
            .position(|line| line.contains(needle))
            .map(|y| y as u16)
    }

    /// Whether any cell of the row at `y` carries the selection background
    fn row_highlighted(buffer: &Buffer, y: u16) -> bool {
        (0..buffer.area.width).any(|x| buffer[(x, y)].bg == SELECTION_BG)
    }

    #[test]
    fn narrow_without_selection_shows_list_only() {
        let mut app = app(375, Catalog::builtin());
        let buffer = render(&mut app);
        let screen = text(&buffer);

        assert!(screen.contains(HEADER));
        for product in Catalog::builtin().iter() {
            let y = row_y(&buffer, &product.name).unwrap();
            assert!(!row_highlighted(&buffer, y), "{} highlighted", product.name);
        }
        assert_eq!(app.hit_areas.rows.len(), 3);
        assert!(!screen.contains("Details for"));
        assert!(!screen.contains(EMPTY_STATE));
    }

    #[test]
    fn narrow_selection_shows_detail_with_go_back() {
        let mut app = app(375, Catalog::builtin());
        render(&mut app);
        app.select_row(0);
        let screen = text(&render(&mut app));

        assert!(screen.contains("Details for Kayali | Vanilla"));
        assert!(screen.contains("Price: $100"));
        assert!(screen.contains("This is a 1.7oz bottle of perfume."));
        assert!(screen.contains(GO_BACK_LABEL));
        assert!(!screen.contains(HEADER));
        assert!(!screen.contains("YSL | Black Opium"));
    }

    #[test]
    fn go_back_restores_the_list_exactly() {
        let mut app = app(375, Catalog::builtin());
        let before = render(&mut app);

        app.select_row(0);
        render(&mut app);
        app.go_back();
        let after = render(&mut app);

        assert_eq!(text(&before), text(&after));
    }

    #[test]
    fn wide_without_selection_shows_both_panes() {
        let mut app = app(820, Catalog::builtin());
        let buffer = render(&mut app);
        let screen = text(&buffer);

        assert!(screen.contains(HEADER));
        assert!(screen.contains(EMPTY_STATE));
        assert!(!screen.contains(GO_BACK_LABEL));

        // List on the left half, detail on the right
        let list_line = screen.lines().find(|l| l.contains(HEADER)).unwrap();
        assert!(list_line.find(HEADER).unwrap() < (COLS / 2) as usize);
        let empty_line = screen.lines().find(|l| l.contains(EMPTY_STATE)).unwrap();
        assert!(empty_line.find(EMPTY_STATE).unwrap() > (COLS / 2) as usize);
    }

    #[test]
    fn wide_selection_highlights_row_and_fills_detail() {
        let mut app = app(820, Catalog::builtin());
        let before = render(&mut app);
        let list_area = app.hit_areas.list.unwrap();
        app.select_row(2);
        let buffer = render(&mut app);
        let screen = text(&buffer);

        // The list stays in place with the same rows
        assert_eq!(app.hit_areas.list, Some(list_area));
        assert_eq!(area_text(&before, list_area), area_text(&buffer, list_area));

        assert!(screen.contains("Details for Marc Jacobs | Daisy"));
        assert!(screen.contains("Price: $186"));
        assert!(!screen.contains(GO_BACK_LABEL));
        assert!(!screen.contains("Price: $100"));

        let row_at = |idx: usize| {
            app.hit_areas
                .rows
                .iter()
                .find(|(_, i)| *i == idx)
                .map(|(rect, _)| rect.y)
                .unwrap()
        };
        assert!(row_highlighted(&buffer, row_at(2)));
        assert!(!row_highlighted(&buffer, row_at(0)));
    }

    #[test]
    fn selection_retained_across_threshold() {
        let mut app = app_following_terminal();
        render_sized(&mut app, 103, ROWS);
        assert!(app.window_info().is_wide_screen);
        app.select_row(1);

        // 47 columns = 376 units
        let screen = text(&render_sized(&mut app, 47, ROWS));
        assert!(!app.window_info().is_wide_screen);
        assert!(screen.contains("Details for YSL | Black Opium"));
        assert!(screen.contains(GO_BACK_LABEL));
        assert!(!screen.contains(HEADER));

        // 75 columns = exactly 600 units
        let buffer = render_sized(&mut app, 75, ROWS);
        let screen = text(&buffer);
        assert_eq!(app.window_info().width, 600);
        assert!(screen.contains("Details for YSL | Black Opium"));
        assert!(screen.contains(HEADER));
        assert!(!screen.contains(GO_BACK_LABEL));
    }

    #[test]
    fn short_terminal_keeps_go_back_reachable() {
        let mut app = app(375, Catalog::builtin());
        render_sized(&mut app, 40, 14);
        app.select_row(0);
        let screen = text(&render_sized(&mut app, 40, 14));

        assert!(screen.contains(GO_BACK_LABEL));
        assert!(screen.contains("Details for Kayali | Vanilla"));
        let go_back = app.hit_areas.go_back.unwrap();
        app.handle_click(go_back.x, go_back.y);
        assert!(app.selected().is_none());
    }

    #[test]
    fn every_product_detail_shows_only_that_product() {
        let catalog = Catalog::builtin();
        for (idx, product) in catalog.iter().enumerate() {
            let mut app = app(820, catalog.clone());
            render(&mut app);
            app.select_row(idx);
            let screen = text(&render(&mut app));

            assert!(screen.contains(&format!("Details for {}", product.name)));
            assert!(screen.contains(&format!("Price: {}", product.price)));
            for other in catalog.iter().filter(|p| *p != product) {
                assert!(!screen.contains(&format!("Price: {}", other.price)));
                assert!(!screen.contains(&format!("Details for {}", other.name)));
            }
        }
    }

    #[test]
    fn empty_catalog_renders_header_only() {
        let mut app = app(375, Catalog::new(Vec::new()));
        let screen = text(&render(&mut app));
        assert!(screen.contains(HEADER));
        assert!(app.hit_areas.rows.is_empty());
    }

    #[test]
    fn clicks_select_rows_and_go_back() {
        let mut app = app(375, Catalog::builtin());
        render(&mut app);

        let (row, idx) = app.hit_areas.rows[1];
        app.handle_click(row.x + 1, row.y);
        assert_eq!(idx, 1);
        assert_eq!(app.selected().map(|p| p.price.as_str()), Some("$130"));

        render(&mut app);
        let go_back = app.hit_areas.go_back.unwrap();
        app.handle_click(go_back.x, go_back.y);
        assert!(app.selected().is_none());
    }

    #[test]
    fn status_bar_reports_latest_log() {
        let mut app = app(820, Catalog::builtin());
        let entry = LogEntry::new(LogLevel::Info, "Loaded 3 products");
        let time = entry.time();
        app.log_buffer.add(entry);
        let screen = text(&render(&mut app));
        assert!(screen.contains("820 units"));
        assert!(screen.contains(&format!("{} INFO Loaded 3 products", time)));
    }
}
