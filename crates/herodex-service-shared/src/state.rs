//! Application state for the Herodex HTTP service.
//!
//! This module provides the shared state structure that axum handlers use
//! to reach the roster and the configured environment name.

use std::sync::{Arc, Mutex, MutexGuard};

use herodex_lib::Roster;

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable (`Arc` internally); share it via axum's `State`
/// extractor. The roster starts empty and lives for the process lifetime.
///
/// # Example
///
/// ```ignore
/// use axum::{extract::State, routing::get, Router};
/// use herodex_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let heroes = state.roster().by_humility();
///     // ... use heroes
/// }
///
/// let state = AppState::new("development");
/// let app = Router::new()
///     .route("/superheroes", get(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    roster: Mutex<Roster>,
    environment: String,
}

impl AppState {
    /// Create state with an empty roster and the given environment name.
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                roster: Mutex::new(Roster::new()),
                environment: environment.into(),
            }),
        }
    }

    /// Lock the roster for the duration of one repository operation.
    ///
    /// Handlers run on a multi-threaded runtime, so the duplicate-name
    /// check and the append in `create` must happen under a single guard.
    /// A poisoned lock is recovered rather than propagated: the roster is a
    /// plain vector and remains structurally valid after a panic.
    pub fn roster(&self) -> MutexGuard<'_, Roster> {
        match self.inner.roster.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Name of the active environment (e.g. "development").
    pub fn environment(&self) -> &str {
        &self.inner.environment
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("hero_count", &self.roster().len())
            .field("environment", &self.inner.environment)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herodex_lib::NewSuperhero;

    fn candidate(name: &str) -> NewSuperhero {
        NewSuperhero {
            name: name.to_string(),
            superpower: "Flight".to_string(),
            humility_score: 5,
        }
    }

    #[test]
    fn test_state_starts_empty() {
        let state = AppState::new("test");
        assert!(state.roster().is_empty());
        assert_eq!(state.environment(), "test");
    }

    #[test]
    fn test_clones_share_the_roster() {
        let state1 = AppState::new("test");
        let state2 = state1.clone();

        state1.roster().create(candidate("Atlas")).unwrap();

        assert_eq!(state2.roster().len(), 1);
    }

    #[test]
    fn test_fresh_states_are_independent() {
        let state1 = AppState::new("test");
        let state2 = AppState::new("test");

        state1.roster().create(candidate("Atlas")).unwrap();

        assert!(state2.roster().is_empty());
    }

    #[test]
    fn test_debug_output() {
        let state = AppState::new("staging");
        let debug = format!("{state:?}");

        assert!(debug.contains("AppState"));
        assert!(debug.contains("hero_count"));
        assert!(debug.contains("staging"));
    }
}
