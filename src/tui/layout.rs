//! Screen arrangement: which panes are visible for a layout mode and selection.
//!
//! Pure functions only - the arrangement is derived on every frame from the
//! window classification and the current selection, never stored.
use crate::window::LayoutMode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Columns between list and detail in the side-by-side arrangement
pub const PANE_GAP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Wide: list and detail side by side, regardless of selection
    Split,
    /// Narrow with nothing selected
    ListOnly,
    /// Narrow with a product selected
    DetailOnly,
}

impl Arrangement {
    pub fn resolve(mode: LayoutMode, has_selection: bool) -> Self {
        match (mode, has_selection) {
            (LayoutMode::Wide, _) => Arrangement::Split,
            (LayoutMode::Narrow, false) => Arrangement::ListOnly,
            (LayoutMode::Narrow, true) => Arrangement::DetailOnly,
        }
    }
}

/// Content slot areas for each visible pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaneAreas {
    pub list: Option<Rect>,
    pub detail: Option<Rect>,
}

/// Divide the content slot between the visible panes
pub fn pane_areas(arrangement: Arrangement, area: Rect) -> PaneAreas {
    match arrangement {
        Arrangement::Split => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Fill(1),
                    Constraint::Length(PANE_GAP),
                    Constraint::Fill(1),
                ])
                .split(area);
            PaneAreas {
                list: Some(chunks[0]),
                detail: Some(chunks[2]),
            }
        }
        Arrangement::ListOnly => PaneAreas {
            list: Some(area),
            detail: None,
        },
        Arrangement::DetailOnly => PaneAreas {
            list: None,
            detail: Some(area),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrangement_table() {
        assert_eq!(
            Arrangement::resolve(LayoutMode::Wide, false),
            Arrangement::Split
        );
        assert_eq!(
            Arrangement::resolve(LayoutMode::Wide, true),
            Arrangement::Split
        );
        assert_eq!(
            Arrangement::resolve(LayoutMode::Narrow, false),
            Arrangement::ListOnly
        );
        assert_eq!(
            Arrangement::resolve(LayoutMode::Narrow, true),
            Arrangement::DetailOnly
        );
    }

    #[test]
    fn split_gives_equal_halves_with_gap() {
        let areas = pane_areas(Arrangement::Split, Rect::new(0, 0, 102, 20));
        let list = areas.list.unwrap();
        let detail = areas.detail.unwrap();
        assert_eq!(list.width, 50);
        assert_eq!(detail.width, 50);
        assert_eq!(detail.x, list.right() + PANE_GAP);
    }

    #[test]
    fn single_pane_takes_whole_slot() {
        let area = Rect::new(0, 3, 40, 20);
        assert_eq!(
            pane_areas(Arrangement::ListOnly, area),
            PaneAreas {
                list: Some(area),
                detail: None
            }
        );
        assert_eq!(pane_areas(Arrangement::DetailOnly, area).detail, Some(area));
    }
}
