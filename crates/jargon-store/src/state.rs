//! Application state
//!
//! The root state tree and the term data it holds.

use serde::{Deserialize, Serialize};

/// A jargon entry with a name and description.
///
/// Favorites are stored as independent copies of the fetched term, so a
/// later refetch never mutates what the user has saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub name: String,
    pub description: String,
}

impl Term {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Term {
        Term {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Root application state following Redux pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Terms from the last successful fetch, in response order.
    pub terms: Vec<Term>,
    /// Terms the user marked as favorites, in order of addition.
    pub favorites: Vec<Term>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_new() {
        let term = Term::new("Closure", "A function plus its environment");
        assert_eq!(term.name, "Closure");
        assert_eq!(term.description, "A function plus its environment");
    }

    #[test]
    fn test_term_serde() {
        let json = r#"{"name": "Hoisting", "description": "Declarations move up"}"#;
        let parsed: Term = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, Term::new("Hoisting", "Declarations move up"));

        let round_trip: Term = serde_json::from_str(&serde_json::to_string(&parsed).unwrap()).unwrap();
        assert_eq!(round_trip, parsed);
    }

    #[test]
    fn test_default_state_is_empty() {
        let state = AppState::default();
        assert!(state.terms.is_empty());
        assert!(state.favorites.is_empty());
    }
}
