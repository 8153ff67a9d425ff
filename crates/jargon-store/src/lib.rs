//! Redux-style state container for the jargon browser
//!
//! This crate provides:
//! - The root state tree (`AppState`) and the term data it holds (`Term`)
//! - The closed action vocabulary (`Action`)
//! - Pure slice reducers composed by a root reducer
//! - The aggregate `Store` with dispatch/subscribe

pub mod actions;
pub mod reducers;
pub mod state;
pub mod store;

pub use actions::Action;
pub use state::{AppState, Term};
pub use store::Store;
