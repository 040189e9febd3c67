//! The in-memory superhero roster.

use crate::error::{Error, Result};
use crate::hero::{NewSuperhero, Superhero};

/// The in-memory superhero collection and its two operations.
///
/// The roster exclusively owns the collection: callers only see it through
/// cloned query results. It is explicitly constructed and passed to whoever
/// needs it, never an ambient singleton, so tests get a fresh instance
/// each.
///
/// The roster performs no locking of its own. A multi-threaded host must
/// serialize calls to [`Roster::create`] externally so the duplicate check
/// and the append stay one atomic step.
#[derive(Debug, Default)]
pub struct Roster {
    heroes: Vec<Superhero>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    /// Whether the roster holds no records.
    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    /// Add a superhero, enforcing name uniqueness.
    ///
    /// The duplicate check is an exact string match against every existing
    /// record. On collision nothing is mutated and
    /// [`Error::DuplicateName`] is returned. On success the record gets
    /// `id = count + 1`, is appended, and a clone of the stored record is
    /// returned. This is the sole mutation path; there is no update or
    /// delete.
    pub fn create(&mut self, candidate: NewSuperhero) -> Result<Superhero> {
        if self.heroes.iter().any(|hero| hero.name == candidate.name) {
            return Err(Error::DuplicateName {
                name: candidate.name,
            });
        }

        let hero = Superhero {
            id: self.heroes.len() as i64 + 1,
            name: candidate.name,
            superpower: candidate.superpower,
            humility_score: candidate.humility_score,
        };
        tracing::debug!(id = hero.id, name = %hero.name, "superhero added to roster");
        self.heroes.push(hero.clone());
        Ok(hero)
    }

    /// Snapshot of all records sorted by humility score, highest first.
    ///
    /// Uses a stable sort, so records with equal scores keep their insertion
    /// order. The backing storage order is never touched.
    pub fn by_humility(&self) -> Vec<Superhero> {
        let mut snapshot = self.heroes.clone();
        snapshot.sort_by(|a, b| b.humility_score.cmp(&a.humility_score));
        snapshot
    }
}
