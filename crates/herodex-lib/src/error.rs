use thiserror::Error;

/// Convenient result alias for the Herodex library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// These variants are the only sanctioned failure channel out of the core.
/// The HTTP boundary maps each variant to a status code in a single place;
/// handler code propagates them untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a payload fails the creation schema. Carries the first
    /// failing rule's message verbatim.
    #[error("{message}")]
    Validation { message: String },

    /// Raised when a superhero name collides with an existing record.
    #[error("Superhero with this name already exists")]
    DuplicateName { name: String },
}
