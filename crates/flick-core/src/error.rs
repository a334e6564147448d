use thiserror::Error;

/// Errors raised while setting up the simulation.
///
/// Once an [`Animator`](crate::Animator) exists nothing in the hot path can
/// fail; degenerate input is clamped or dropped instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlickError {
    #[error("stiffness must be positive and finite, got {0}")]
    InvalidStiffness(f64),
    #[error("damping must be non-negative and finite, got {0}")]
    InvalidDamping(f64),
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    #[error("start timestamp must be finite, got {0}")]
    NonFiniteTimestamp(f64),
}
