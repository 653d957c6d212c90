//! Error types for boundary validation.

use thiserror::Error;

/// Errors raised when an instance or a configuration is rejected.
///
/// These are the only failures in the crate. Once an [`Instance`](crate::model::Instance)
/// and a validated config exist, construction and refinement cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PartitionError {
    #[error("instance must contain at least one number")]
    EmptyInstance,

    #[error("instance magnitude exceeds i64 headroom at element {index}")]
    Overflow { index: usize },

    #[error("alpha must be in [0, 1], got {0}")]
    InvalidAlpha(f64),

    #[error("iterations must be positive")]
    ZeroIterations,

    #[error("initial_temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),

    #[error("min_temperature must be positive and finite, got {0}")]
    InvalidMinTemperature(f64),

    #[error("cooling_rate must be in (0, 1), got {0}")]
    InvalidCoolingRate(f64),

    #[error("assignment has {actual} signs but the instance has {expected} numbers")]
    AssignmentLength { expected: usize, actual: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PartitionError>;
