//! Store - holds application state and manages the Redux loop

use crate::actions::Action;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;

/// Callback invoked after every state transition.
pub type Subscriber = Box<dyn FnMut(&AppState)>;

/// Store - holds application state and manages the Redux loop
///
/// The store is the only shared mutable resource in the application.
/// All mutation goes through `dispatch`, all reads are synchronous
/// snapshots via `state`.
pub struct Store {
    state: AppState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    /// Create a store seeded with an initial state, typically restored
    /// from the persisted favorites.
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            subscribers: Vec::new(),
        }
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register a callback invoked after every state transition.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&AppState) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Process an action through the root reducer, then notify subscribers.
    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(self.state.clone(), &action);
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Term;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_initial_state_is_preserved() {
        let initial = AppState {
            terms: Vec::new(),
            favorites: vec![Term::new("Restored", "came from disk")],
        };
        let store = Store::new(initial.clone());
        assert_eq!(store.state(), &initial);
    }

    #[test]
    fn test_fetch_add_remove_scenario() {
        let mut store = Store::new(AppState::default());

        store.dispatch(Action::fetch_completed(vec![Term::new(
            "Closure",
            "A function plus its environment",
        )]));
        assert_eq!(
            store.state().terms,
            vec![Term::new("Closure", "A function plus its environment")]
        );

        store.dispatch(Action::add_favorite(
            "Closure",
            "A function plus its environment",
        ));
        assert_eq!(
            store.state().favorites,
            vec![Term::new("Closure", "A function plus its environment")]
        );

        store.dispatch(Action::remove_favorite("Closure"));
        assert!(store.state().favorites.is_empty());
        assert_eq!(store.state().terms.len(), 1);
    }

    #[test]
    fn test_subscribers_notified_after_every_dispatch() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = Store::new(AppState::default());
        store.subscribe(move |state| sink.borrow_mut().push(state.favorites.len()));

        store.dispatch(Action::add_favorite("A", "descA"));
        store.dispatch(Action::add_favorite("B", "descB"));
        store.dispatch(Action::remove_favorite("A"));

        // The subscriber sees the state after each transition, not before.
        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn test_subscriber_sees_non_favorite_transitions_too() {
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);

        let mut store = Store::new(AppState::default());
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.dispatch(Action::fetch_completed(Vec::new()));
        assert_eq!(*calls.borrow(), 1);
    }
}
