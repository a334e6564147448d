//! The element's whole behaviour behind one owner.
//!
//! `Animator` holds the simulation state, the spring and the render sink.
//! Hosts feed it pointer events and frame callbacks in the order their event
//! loop delivers them; nothing here is shared across threads.

use crate::error::FlickError;
use crate::host::{PointerCapture, PointerInput, RenderSink};
use crate::integrator::{SpringIntegrator, StepOutcome};
use crate::params::SpringParams;
use crate::scheduler::FrameScheduler;
use crate::state::SimState;
use crate::tracker;

pub struct Animator<S: RenderSink> {
    state: SimState,
    integrator: SpringIntegrator,
    sink: S,
}

impl<S: RenderSink> Animator<S> {
    /// Start at rest on the origin and render once, so the element shows the
    /// simulated position before the first frame arrives.
    pub fn new(params: SpringParams, mut sink: S, start_ms: f64) -> Result<Self, FlickError> {
        if !start_ms.is_finite() {
            return Err(FlickError::NonFiniteTimestamp(start_ms));
        }
        let state = SimState::new(start_ms);
        sink.apply(state.position);
        Ok(Self {
            state,
            integrator: SpringIntegrator::new(params),
            sink,
        })
    }

    #[inline]
    pub fn state(&self) -> &SimState {
        &self.state
    }

    #[inline]
    pub fn params(&self) -> &SpringParams {
        &self.integrator.params
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn on_pointer_down(
        &mut self,
        input: &PointerInput,
        capture: &mut impl PointerCapture,
    ) -> bool {
        tracker::pointer_down(&mut self.state, input, capture)
    }

    pub fn on_pointer_move(&mut self, input: &PointerInput) -> bool {
        tracker::pointer_move(&mut self.state, input, &mut self.sink)
    }

    pub fn on_pointer_up(&mut self, input: &PointerInput) -> bool {
        tracker::pointer_up(&mut self.state, input)
    }

    pub fn on_pointer_cancel(&mut self) {
        tracker::pointer_cancel(&mut self.state)
    }

    /// Frame callback. Always requests the next frame, at rest or not.
    pub fn on_frame(
        &mut self,
        timestamp_ms: f64,
        scheduler: &mut impl FrameScheduler,
    ) -> StepOutcome {
        let outcome = self
            .integrator
            .frame(&mut self.state, timestamp_ms, &mut self.sink);
        scheduler.request_frame();
        outcome
    }
}
