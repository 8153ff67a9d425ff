//! Actions
//!
//! The closed set of state transition requests. Reducers match on this enum
//! exhaustively, so adding a variant forces every reducer to decide how to
//! handle it.

use crate::state::Term;

/// Root action enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A remote fetch finished; the payload replaces the terms slice wholesale.
    FetchCompleted(Vec<Term>),
    /// Copy a term into the favorites list.
    AddFavorite { name: String, description: String },
    /// Drop every favorite with this name.
    RemoveFavorite { name: String },
}

impl Action {
    /// Wrap an already-retrieved list of terms.
    pub fn fetch_completed(terms: Vec<Term>) -> Action {
        Action::FetchCompleted(terms)
    }

    /// Build an add action from explicit fields.
    ///
    /// Nothing is validated here; callers decide what is worth favoriting.
    pub fn add_favorite(name: impl Into<String>, description: impl Into<String>) -> Action {
        Action::AddFavorite {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Build a remove action keyed only by name.
    pub fn remove_favorite(name: impl Into<String>) -> Action {
        Action::RemoveFavorite { name: name.into() }
    }
}
