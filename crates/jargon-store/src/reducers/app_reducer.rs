//! Root reducer
//!
//! Composes the slice reducers into the aggregate state tree. Each slice
//! reducer receives only its own slice plus the full action; no action
//! currently touches both slices.

use crate::actions::Action;
use crate::reducers::{favorites_reducer, terms_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
pub fn reduce(state: AppState, action: &Action) -> AppState {
    AppState {
        terms: terms_reducer::reduce(state.terms, action),
        favorites: favorites_reducer::reduce(state.favorites, action),
    }
}
