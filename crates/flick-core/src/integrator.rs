//! Per-frame spring integration.
//!
//! Semi-implicit Euler over a damped harmonic oscillator. The two axes share
//! parameters but never couple; glam's component-wise ops keep them apart.

use crate::constants::{MAX_FRAME_STEP_MS, MIN_FRAME_STEP_MS, REST_EPSILON_SQ};
use crate::host::RenderSink;
use crate::params::SpringParams;
use crate::state::SimState;
use glam::DVec2;

/// What a frame did to the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Dragging; the pointer owns the position.
    Suspended,
    /// Already exactly at rest; nothing integrated or rendered.
    Resting,
    /// Integrated one step and still moving.
    Moving,
    /// Integrated one step and snapped onto the target.
    Settled,
}

/// Clamp a frame's elapsed wall time into a usable step, in seconds.
#[inline]
pub fn frame_step_sec(elapsed_ms: f64) -> f64 {
    let ms = if elapsed_ms.is_finite() {
        elapsed_ms.clamp(MIN_FRAME_STEP_MS, MAX_FRAME_STEP_MS)
    } else {
        MIN_FRAME_STEP_MS
    };
    ms / 1000.0
}

/// Spring acceleration toward `target`.
#[inline]
pub fn acceleration(
    params: &SpringParams,
    position: DVec2,
    velocity: DVec2,
    target: DVec2,
) -> DVec2 {
    let restoring = -params.stiffness * (position - target);
    let damping = -params.damping * velocity;
    (restoring + damping) / params.mass
}

#[derive(Clone, Copy, Debug)]
pub struct SpringIntegrator {
    pub params: SpringParams,
}

impl SpringIntegrator {
    pub fn new(params: SpringParams) -> Self {
        Self { params }
    }

    /// Advance the frame clock to `now_ms` and, outside drag mode, the spring.
    pub fn frame(
        &self,
        state: &mut SimState,
        now_ms: f64,
        sink: &mut impl RenderSink,
    ) -> StepOutcome {
        let dt = frame_step_sec(now_ms - state.clock.previous_ms);
        state.clock.previous_ms = now_ms;
        self.step(state, dt, sink)
    }

    /// One integration step of `dt` seconds.
    pub fn step(
        &self,
        state: &mut SimState,
        dt: f64,
        sink: &mut impl RenderSink,
    ) -> StepOutcome {
        if state.is_dragging() {
            return StepOutcome::Suspended;
        }
        if state.is_at_rest() {
            return StepOutcome::Resting;
        }

        let a = acceleration(&self.params, state.position, state.velocity, state.target);
        state.velocity += a * dt;
        state.position += state.velocity * dt;
        sink.apply(state.position);

        let dist2 = (state.position - state.target).length_squared();
        let speed2 = state.velocity.length_squared();
        if dist2 < REST_EPSILON_SQ && speed2 < REST_EPSILON_SQ {
            state.position = state.target;
            state.velocity = DVec2::ZERO;
            sink.apply(state.position);
            log::debug!(
                "[spring] settled at ({:.1},{:.1})",
                state.position.x,
                state.position.y
            );
            return StepOutcome::Settled;
        }
        StepOutcome::Moving
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_step_is_clamped_on_both_ends() {
        assert_eq!(frame_step_sec(16.0), 0.016);
        assert_eq!(frame_step_sec(5_000.0), 0.033);
        assert_eq!(frame_step_sec(0.0), 0.001);
        assert_eq!(frame_step_sec(-40.0), 0.001);
        assert_eq!(frame_step_sec(f64::NAN), 0.001);
    }

    #[test]
    fn acceleration_is_restoring_and_damped() {
        let p = SpringParams::default();
        let a = acceleration(
            &p,
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 2.0),
            DVec2::ZERO,
        );
        assert_eq!(a, DVec2::new(-700.0, -54.0));
    }
}
