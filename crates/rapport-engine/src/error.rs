//! Engine error types

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur during engine operations.
///
/// The scoring arithmetic itself is total; these errors all come from the
/// input policy at the engine boundary (ratios and novelty must lie in
/// [0, 1], smoothing rates in (0, 1)) or from snapshot I/O.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input ratio or novelty score was non-finite or outside [0, 1]
    #[error("{field} must be a finite value in [0.0, 1.0], got {value}")]
    OutOfRange {
        /// Name of the offending input
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A smoothing rate was non-finite or outside the open interval (0, 1)
    #[error("smoothing rate must be in (0.0, 1.0), got {0}")]
    InvalidRate(f64),

    /// Snapshot serialization or deserialization failed
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Snapshot file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
