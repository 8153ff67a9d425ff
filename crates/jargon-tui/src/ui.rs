//! View-local UI state
//!
//! Which mode is showing and where the cursor sits. These are display
//! concerns, so they live with the view instead of the aggregate state.

use ratatui::widgets::TableState;

/// The two display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// All fetched terms.
    #[default]
    Browse,
    /// Only the favorited terms.
    Favorites,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Browse => Mode::Favorites,
            Mode::Favorites => Mode::Browse,
        }
    }
}

/// UI-specific state (mode, table cursor)
#[derive(Debug, Default)]
pub struct UiState {
    pub mode: Mode,
    pub table: TableState,
}

impl UiState {
    /// Toggle between browse and favorites, resetting the cursor.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.table = TableState::default();
    }

    /// Move the cursor to the next row, wrapping at the end.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.table.select(None);
            return;
        }
        let i = match self.table.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table.select(Some(i));
    }

    /// Move the cursor to the previous row, wrapping at the start.
    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            self.table.select(None);
            return;
        }
        let i = match self.table.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table.select(Some(i));
    }

    /// Keep the cursor inside the list after it shrinks.
    pub fn clamp(&mut self, len: usize) {
        match self.table.selected() {
            Some(_) if len == 0 => self.table.select(None),
            Some(i) if i >= len => self.table.select(Some(len - 1)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_around() {
        let mut ui = UiState::default();
        ui.next(2);
        assert_eq!(ui.table.selected(), Some(0));
        ui.next(2);
        assert_eq!(ui.table.selected(), Some(1));
        ui.next(2);
        assert_eq!(ui.table.selected(), Some(0));
    }

    #[test]
    fn test_previous_wraps_around() {
        let mut ui = UiState::default();
        ui.previous(3);
        assert_eq!(ui.table.selected(), Some(0));
        ui.previous(3);
        assert_eq!(ui.table.selected(), Some(2));
    }

    #[test]
    fn test_navigation_on_empty_list_selects_nothing() {
        let mut ui = UiState::default();
        ui.next(0);
        assert_eq!(ui.table.selected(), None);
        ui.previous(0);
        assert_eq!(ui.table.selected(), None);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut ui = UiState::default();
        ui.table.select(Some(2));

        ui.clamp(2);
        assert_eq!(ui.table.selected(), Some(1));

        ui.clamp(0);
        assert_eq!(ui.table.selected(), None);
    }

    #[test]
    fn test_toggle_resets_cursor() {
        let mut ui = UiState::default();
        ui.table.select(Some(4));
        ui.toggle_mode();
        assert_eq!(ui.mode, Mode::Favorites);
        assert_eq!(ui.table.selected(), None);
    }
}
