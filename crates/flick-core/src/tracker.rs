//! Pointer lifecycle -> drag mode transitions.
//!
//! Each handler returns `true` when the event changed the state and `false`
//! when it was ignored (wrong mode, foreign pointer, non-finite input).

use crate::constants::MIN_SAMPLE_INTERVAL_MS;
use crate::host::{PointerCapture, PointerInput, RenderSink};
use crate::state::{DragAnchor, DragSession, Mode, SimState, VelocitySample};
use glam::DVec2;

pub fn pointer_down(
    state: &mut SimState,
    input: &PointerInput,
    capture: &mut impl PointerCapture,
) -> bool {
    if !input.is_finite() {
        log::debug!("[drag] dropped non-finite pointerdown {:?}", input);
        return false;
    }
    if state.is_dragging() {
        return false;
    }

    capture.capture(input.pointer_id);
    state.velocity = DVec2::ZERO;
    state.mode = Mode::Dragging(DragSession {
        pointer_id: input.pointer_id,
        anchor: DragAnchor {
            start_pointer: input.position,
            start_position: state.position,
        },
        sample: VelocitySample {
            timestamp_ms: input.timestamp_ms,
            position: state.position,
        },
    });
    log::info!(
        "[drag] begin pointer={} at ({:.1},{:.1})",
        input.pointer_id,
        state.position.x,
        state.position.y
    );
    true
}

pub fn pointer_move(
    state: &mut SimState,
    input: &PointerInput,
    sink: &mut impl RenderSink,
) -> bool {
    let Mode::Dragging(session) = &mut state.mode else {
        return false;
    };
    if session.pointer_id != input.pointer_id {
        return false;
    }
    if !input.is_finite() {
        log::debug!("[drag] dropped non-finite pointermove {:?}", input);
        return false;
    }

    let position = session.anchor.position_for(input.position);
    let velocity = finite_difference(&session.sample, position, input.timestamp_ms);
    session.sample = VelocitySample {
        timestamp_ms: input.timestamp_ms,
        position,
    };

    state.position = position;
    state.velocity = velocity;
    sink.apply(position);
    true
}

pub fn pointer_up(state: &mut SimState, input: &PointerInput) -> bool {
    match state.drag_session() {
        Some(session) if session.pointer_id == input.pointer_id => {}
        _ => return false,
    }
    state.release_to_origin();
    log::info!(
        "[drag] release v=({:.1},{:.1})",
        state.velocity.x,
        state.velocity.y
    );
    true
}

/// Unconditional: cancel also resets the target when no drag is active.
pub fn pointer_cancel(state: &mut SimState) {
    if state.is_dragging() {
        log::info!("[drag] cancel");
    }
    state.release_to_origin();
}

/// Units per second between the last sample and `position`, with the
/// elapsed time floored so bursts of same-timestamp events stay finite.
#[inline]
pub fn finite_difference(sample: &VelocitySample, position: DVec2, now_ms: f64) -> DVec2 {
    let dt_sec = (now_ms - sample.timestamp_ms).max(MIN_SAMPLE_INTERVAL_MS) / 1000.0;
    (position - sample.position) / dt_sec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_difference_floors_elapsed_time() {
        let sample = VelocitySample {
            timestamp_ms: 100.0,
            position: DVec2::ZERO,
        };
        // same timestamp -> 1 ms
        let v = finite_difference(&sample, DVec2::new(2.0, -1.0), 100.0);
        assert_eq!(v, DVec2::new(2000.0, -1000.0));
        // clock went backwards -> still 1 ms
        let v = finite_difference(&sample, DVec2::new(2.0, 0.0), 90.0);
        assert_eq!(v, DVec2::new(2000.0, 0.0));
    }
}
