//! Simulation state shared by the interaction tracker and the spring
//! integrator.
//!
//! These types avoid platform-specific APIs so the web front-end and the
//! host-side tests drive exactly the same state machine.

use glam::DVec2;

/// Where the drag started, in pointer space and in element space.
///
/// For the whole drag the element sits at
/// `start_position + (pointer - start_pointer)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    pub start_pointer: DVec2,
    pub start_position: DVec2,
}

impl DragAnchor {
    #[inline]
    pub fn position_for(&self, pointer: DVec2) -> DVec2 {
        self.start_position + (pointer - self.start_pointer)
    }
}

/// Last sample used for the finite-difference velocity estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocitySample {
    pub timestamp_ms: f64,
    pub position: DVec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub pointer_id: i32,
    pub anchor: DragAnchor,
    pub sample: VelocitySample,
}

/// Who owns the position right now.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Mode {
    /// The spring integrator owns the position.
    #[default]
    Spring,
    /// The pointer owns the position; integration is suspended.
    Dragging(DragSession),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    pub previous_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimState {
    pub position: DVec2,
    pub velocity: DVec2,
    pub(crate) target: DVec2,
    pub(crate) mode: Mode,
    pub(crate) clock: FrameClock,
}

impl SimState {
    /// At rest on the origin, spring mode, frame clock seeded with `start_ms`.
    pub fn new(start_ms: f64) -> Self {
        Self {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            target: DVec2::ZERO,
            mode: Mode::Spring,
            clock: FrameClock {
                previous_ms: start_ms,
            },
        }
    }

    #[inline]
    pub fn target(&self) -> DVec2 {
        self.target
    }

    #[inline]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    #[inline]
    pub fn frame_clock(&self) -> FrameClock {
        self.clock
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, Mode::Dragging(_))
    }

    #[inline]
    pub fn drag_session(&self) -> Option<&DragSession> {
        match &self.mode {
            Mode::Dragging(session) => Some(session),
            Mode::Spring => None,
        }
    }

    /// Exactly on target with zero velocity.
    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.position == self.target && self.velocity == DVec2::ZERO
    }

    /// Leave drag mode and send the spring home. Shared by release and cancel.
    pub(crate) fn release_to_origin(&mut self) {
        self.mode = Mode::Spring;
        self.target = DVec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_maps_pointer_delta_onto_start_position() {
        let anchor = DragAnchor {
            start_pointer: DVec2::new(200.0, 150.0),
            start_position: DVec2::new(-12.5, 4.0),
        };
        assert_eq!(
            anchor.position_for(DVec2::new(230.0, 140.0)),
            DVec2::new(17.5, -6.0)
        );
    }

    #[test]
    fn new_state_rests_on_origin() {
        let s = SimState::new(12.0);
        assert!(s.is_at_rest());
        assert!(!s.is_dragging());
        assert_eq!(s.frame_clock().previous_ms, 12.0);
    }
}
