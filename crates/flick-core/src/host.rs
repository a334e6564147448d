//! Narrow interfaces implemented by whatever hosts the element.

use glam::DVec2;

/// One pointer event as the core sees it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub pointer_id: i32,
    /// Absolute pointer position in the same space as element offsets.
    pub position: DVec2,
    /// Monotonic time in milliseconds, same clock as frame timestamps.
    pub timestamp_ms: f64,
}

impl PointerInput {
    pub fn new(pointer_id: i32, x: f64, y: f64, timestamp_ms: f64) -> Self {
        Self {
            pointer_id,
            position: DVec2::new(x, y),
            timestamp_ms,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.timestamp_ms.is_finite()
    }
}

/// Applies a position to the visual element. Called every frame.
pub trait RenderSink {
    fn apply(&mut self, position: DVec2);
}

/// Routes all further events of a pointer to the element.
///
/// Release is implicit: the host drops capture when the pointer session ends.
pub trait PointerCapture {
    fn capture(&mut self, pointer_id: i32);
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn apply(&mut self, position: DVec2) {
        (**self).apply(position)
    }
}

impl<T: PointerCapture + ?Sized> PointerCapture for &mut T {
    fn capture(&mut self, pointer_id: i32) {
        (**self).capture(pointer_id)
    }
}
