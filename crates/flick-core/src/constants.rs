//! Physical constants and timing limits for the drag/spring simulation.
//!
//! Tuning is a build-time concern; nothing here is read at run time.

// Spring parameters (F = -k(x - target) - c*v, a = F/m)
pub const STIFFNESS: f64 = 700.0;
pub const DAMPING: f64 = 27.0;
pub const MASS: f64 = 1.0;

// Frame step clamp (milliseconds)
pub const MAX_FRAME_STEP_MS: f64 = 33.0; // bounds the step after a stall or tab switch
pub const MIN_FRAME_STEP_MS: f64 = 1.0;

// Drag velocity sampling
pub const MIN_SAMPLE_INTERVAL_MS: f64 = 1.0;

// Rest detection: squared distance (px^2) and squared speed ((px/s)^2)
pub const REST_EPSILON_SQ: f64 = 0.01;
