use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use tokio::runtime::Runtime;

mod fetch;
mod logger;
mod ui;
mod views;

use jargon_client::HttpTermsClient;
use jargon_config::{load_persisted_favorites, save_persisted_favorites, AppConfig};
use jargon_store::{Action, AppState, Store};
use ui::{Mode, UiState};

fn main() -> io::Result<()> {
    logger::init();
    log::info!("Starting jargon-tui");

    let config = AppConfig::load();

    // Seed initial state from the persisted favorites, if any
    let mut initial_state = AppState::default();
    if let Some(persisted) = load_persisted_favorites() {
        initial_state.favorites = persisted.favorites;
    }

    let mut store = Store::new(initial_state);

    // Persist the favorites slice after every state transition
    store.subscribe(|state| {
        if let Err(e) = save_persisted_favorites(&state.favorites) {
            log::error!("Failed to persist favorites: {:#}", e);
        }
    });

    // One-shot fetch; on failure the terms list just stays empty
    let runtime = Runtime::new()?;
    let client = HttpTermsClient::new(&config.endpoint);
    if let Err(e) = fetch::fetch_into_store(&runtime, &client, &mut store) {
        log::error!("Failed to fetch terms: {}", e);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting jargon-tui");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> io::Result<()> {
    let mut ui = UiState::default();

    loop {
        terminal.draw(|frame| views::render(store.state(), &mut ui, frame))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (ignore key release)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('f') | KeyCode::Tab => ui.toggle_mode(),
                KeyCode::Down | KeyCode::Char('j') => {
                    ui.next(views::visible_terms(store.state(), ui.mode).len());
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    ui.previous(views::visible_terms(store.state(), ui.mode).len());
                }
                KeyCode::Enter | KeyCode::Char(' ') => toggle_favorite(store, &mut ui),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Dispatch the favorite action for the row under the cursor.
///
/// In browse mode the selected term is copied into the favorites; in
/// favorites mode the selected entry is removed by name.
fn toggle_favorite(store: &mut Store, ui: &mut UiState) {
    let Some(selected) = ui.table.selected() else {
        return;
    };

    match ui.mode {
        Mode::Browse => {
            let term = store.state().terms.get(selected).cloned();
            if let Some(term) = term {
                store.dispatch(Action::add_favorite(term.name, term.description));
            }
        }
        Mode::Favorites => {
            let name = store.state().favorites.get(selected).map(|t| t.name.clone());
            if let Some(name) = name {
                store.dispatch(Action::remove_favorite(name));
            }
            ui.clamp(store.state().favorites.len());
        }
    }
}
