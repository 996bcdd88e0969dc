//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`FilPiloteError`] via `From` at the port boundary.

/// Source error carried across port boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Base error for every operation exposed by the application core.
#[derive(Debug, thiserror::Error)]
pub enum FilPiloteError {
    /// Caller input was rejected before any side effect.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The addressed record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A line could not be reserved while creating an area.
    #[error("unable to reserve line {line:?}")]
    LineReservation {
        line: String,
        #[source]
        source: BoxError,
    },

    /// The line controller rejected a release or actuation request.
    #[error("line controller error")]
    Line(#[source] BoxError),

    /// The area store failed to persist or load a record.
    #[error("storage error")]
    Storage(#[source] BoxError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("area name must not be empty")]
    EmptyName,

    #[error("area name {0:?} is already in use")]
    DuplicateName(String),

    #[error("line reference must not be empty")]
    EmptyLine,

    #[error("line {0:?} cannot be bound twice to the same area")]
    SameLine(String),

    #[error("mode {0:?} does not exist")]
    InvalidMode(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
