//! View rendering
//!
//! Renders the current mode as a table of terms plus a one-line footer
//! with the active key bindings.

use jargon_store::{AppState, Term};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::{Mode, UiState};

/// Terms visible in the given mode.
pub fn visible_terms(state: &AppState, mode: Mode) -> &[Term] {
    match mode {
        Mode::Browse => &state.terms,
        Mode::Favorites => &state.favorites,
    }
}

/// Render the active mode.
pub fn render(state: &AppState, ui: &mut UiState, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Term table
            Constraint::Length(1), // Key hints
        ])
        .split(f.area());

    render_table(state, ui, chunks[0], f);
    render_footer(ui.mode, chunks[1], f);
}

fn render_table(state: &AppState, ui: &mut UiState, area: Rect, f: &mut Frame) {
    let terms = visible_terms(state, ui.mode);

    let title = match ui.mode {
        Mode::Browse => format!("JS Jargon ({} terms)", terms.len()),
        Mode::Favorites => format!("Favorites ({})", terms.len()),
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let header = Row::new([
        Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .height(1);

    let rows = terms.iter().map(|term| {
        Row::new([
            Cell::from(term.name.clone()),
            Cell::from(term.description.clone()),
        ])
        .height(1)
    });

    let widths = [Constraint::Percentage(25), Constraint::Percentage(75)];

    let selected_row_style = Style::default()
        .add_modifier(Modifier::REVERSED)
        .fg(Color::Cyan);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(selected_row_style);

    f.render_stateful_widget(table, area, &mut ui.table);
}

fn render_footer(mode: Mode, area: Rect, f: &mut Frame) {
    let hint = match mode {
        Mode::Browse => "j/k move | Enter add to favorites | f favorites | q quit",
        Mode::Favorites => "j/k move | Enter remove from favorites | f browse | q quit",
    };
    f.render_widget(Paragraph::new(Line::from(hint)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_terms_follows_mode() {
        let state = AppState {
            terms: vec![Term::new("Closure", "A function plus its environment")],
            favorites: vec![Term::new("Scope", "Where a binding is visible")],
        };

        assert_eq!(visible_terms(&state, Mode::Browse)[0].name, "Closure");
        assert_eq!(visible_terms(&state, Mode::Favorites)[0].name, "Scope");
    }
}
