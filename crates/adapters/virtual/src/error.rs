//! Virtual line controller error types.

use filpilote_domain::error::FilPiloteError;
use filpilote_domain::id::LineId;

/// Errors raised by the simulated line controller.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    /// The physical line is not part of the configured set.
    #[error("line {0:?} does not exist")]
    UnknownLine(String),

    /// The physical line is already owned by another reservation.
    #[error("line {0:?} is already reserved")]
    AlreadyReserved(String),

    /// No reservation matches the handle.
    #[error("line handle {0} is not reserved")]
    NotReserved(LineId),
}

impl From<LineError> for FilPiloteError {
    fn from(err: LineError) -> Self {
        Self::Line(Box::new(err))
    }
}
