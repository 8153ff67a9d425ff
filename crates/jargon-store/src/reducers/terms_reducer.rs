//! Terms Reducer
//!
//! Handles the list of fetched terms.

use crate::actions::Action;
use crate::state::Term;

/// Reduce the terms slice.
///
/// A completed fetch replaces the slice wholesale; nothing is merged.
pub fn reduce(state: Vec<Term>, action: &Action) -> Vec<Term> {
    match action {
        Action::FetchCompleted(payload) => {
            log::info!("Loaded {} terms", payload.len());
            payload.clone()
        }
        Action::AddFavorite { .. } | Action::RemoveFavorite { .. } => state,
    }
}
