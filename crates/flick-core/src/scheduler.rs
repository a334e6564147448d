//! Frame scheduling seam.
//!
//! The animation loop never runs itself: every frame ends by asking the host
//! for the next one. Browsers answer with `requestAnimationFrame`; tests and
//! replays answer with [`ManualClock`].

/// One-shot request for another frame callback.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for &mut T {
    fn request_frame(&mut self) {
        (**self).request_frame()
    }
}

/// Deterministic stand-in for a display refresh source.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now_ms: f64,
    pending: bool,
    requests: u64,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now_ms: start_ms,
            pending: false,
            requests: 0,
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Total frame requests seen so far.
    #[inline]
    pub fn requests(&self) -> u64 {
        self.requests
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Move time forward without delivering a frame (pointer events, stalls).
    pub fn advance(&mut self, elapsed_ms: f64) -> f64 {
        self.now_ms += elapsed_ms;
        self.now_ms
    }

    /// Advance by `elapsed_ms` and hand out the frame timestamp, if one was
    /// requested. Consumes the request, like a real one-shot callback.
    pub fn next_frame(&mut self, elapsed_ms: f64) -> Option<f64> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(self.advance(elapsed_ms))
    }
}

impl FrameScheduler for ManualClock {
    fn request_frame(&mut self) {
        self.pending = true;
        self.requests += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_one_shot() {
        let mut clock = ManualClock::new(0.0);
        assert_eq!(clock.next_frame(16.0), None);
        clock.request_frame();
        assert_eq!(clock.next_frame(16.0), Some(16.0));
        assert_eq!(clock.next_frame(16.0), None);
        assert_eq!(clock.requests(), 1);
    }
}
