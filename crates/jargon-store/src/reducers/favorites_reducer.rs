//! Favorites Reducer
//!
//! Handles the list of favorited terms.

use crate::actions::Action;
use crate::state::Term;

/// Reduce the favorites slice.
///
/// Adds append at the end and duplicates are allowed. Removes filter by
/// name, so if several entries share a name they all go.
pub fn reduce(mut state: Vec<Term>, action: &Action) -> Vec<Term> {
    match action {
        Action::AddFavorite { name, description } => {
            log::debug!("Adding favorite {}", name);
            state.push(Term::new(name.clone(), description.clone()));
            state
        }
        Action::RemoveFavorite { name } => {
            log::debug!("Removing favorite {}", name);
            state.retain(|term| term.name != *name);
            state
        }
        Action::FetchCompleted(_) => state,
    }
}
