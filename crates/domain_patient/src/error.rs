//! Patient domain errors

use thiserror::Error;

/// Errors that can occur in the patient domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatientError {
    /// Registry index outside the admitted range
    ///
    /// Recoverable: callers are expected to no-op and re-prompt rather
    /// than abort the session.
    #[error("Patient index {index} out of range for registry of {len}")]
    OutOfRange { index: usize, len: usize },
}
