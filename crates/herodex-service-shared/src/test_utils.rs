//! Test utilities for service handler testing.
//!
//! Provides a pre-seeded [`AppState`] and payload builders so handler tests
//! do not repeat roster setup.

use serde_json::{json, Value};

use herodex_lib::NewSuperhero;

use crate::AppState;

/// Known heroes seeded by [`seeded_state`], in insertion order.
///
/// Atlas and Comet share a humility score so ordering tests can exercise
/// tie stability.
pub const SEED_HEROES: [(&str, &str, i64); 3] = [
    ("Atlas", "Super strength", 7),
    ("Nightwatch", "Darkvision", 9),
    ("Comet", "Flight", 7),
];

/// Build an `AppState` pre-populated with [`SEED_HEROES`].
///
/// # Panics
///
/// Panics if seeding fails; that indicates a test configuration issue.
pub fn seeded_state() -> AppState {
    let state = AppState::new("test");
    {
        let mut roster = state.roster();
        for (name, superpower, humility_score) in SEED_HEROES {
            roster
                .create(NewSuperhero {
                    name: name.to_string(),
                    superpower: superpower.to_string(),
                    humility_score,
                })
                .unwrap_or_else(|e| panic!("failed to seed hero {name}: {e}"));
        }
    }
    state
}

/// JSON body for a superhero creation request.
pub fn hero_payload(name: &str, superpower: &str, humility_score: i64) -> Value {
    json!({
        "name": name,
        "superpower": superpower,
        "humilityScore": humility_score,
    })
}
