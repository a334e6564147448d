use glam::DVec2;
use std::fmt::Write;

/// Format `translate(<x>px, <y>px)` into `buf`, reusing its allocation.
#[inline]
pub fn write_translate(buf: &mut String, position: DVec2) {
    buf.clear();
    _ = write!(buf, "translate({}px, {}px)", position.x, position.y);
}
