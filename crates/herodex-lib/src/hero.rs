//! Superhero record types and field bounds.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Minimum superhero name length in characters.
pub const NAME_MIN: usize = 3;

/// Maximum superhero name length in characters.
pub const NAME_MAX: usize = 50;

/// Minimum superpower description length in characters.
pub const SUPERPOWER_MIN: usize = 3;

/// Maximum superpower description length in characters.
pub const SUPERPOWER_MAX: usize = 100;

/// Lowest allowed humility score.
pub const HUMILITY_MIN: i64 = 1;

/// Highest allowed humility score.
pub const HUMILITY_MAX: i64 = 10;

/// A stored superhero record.
///
/// Records are never mutated after creation; the roster hands out clones.
/// Ids are 1-based and assigned at insertion time (`count + 1`), which is
/// only stable because deletion is unsupported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Superhero {
    pub id: i64,
    pub name: String,
    pub superpower: String,
    pub humility_score: i64,
}

/// Candidate data for creating a superhero; the roster assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSuperhero {
    pub name: String,
    pub superpower: String,
    pub humility_score: i64,
}

impl NewSuperhero {
    /// Deserialize a candidate from a payload that already passed the
    /// creation schema.
    ///
    /// The schema checks presence, types, and bounds first, so a failure
    /// here means the schema and this type have drifted apart; it is still
    /// reported as a validation error rather than a panic.
    pub fn from_value(payload: &Value) -> Result<Self> {
        serde_json::from_value(payload.clone()).map_err(|err| Error::Validation {
            message: err.to_string(),
        })
    }
}
