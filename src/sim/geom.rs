//! Integer screen-space primitives
//!
//! Origin is the top-left corner of the room and `y` grows downward.

use bytemuck::{Pod, Zeroable};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Per-tick displacement (velocity, acceleration)
pub type Vect = IVec2;

/// Axis-aligned bounding box: top-left corner plus size.
///
/// Laid out as four consecutive `i32` so a rect is exactly one position record.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (`x + w`)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge (`y + h`)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn pos(&self) -> Vect {
        Vect::new(self.x, self.y)
    }

    /// Move the box by `delta`, keeping its size
    #[inline]
    pub fn translate(&mut self, delta: Vect) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.pos(), Vect::new(10, 20));
    }

    #[test]
    fn test_translate_keeps_size() {
        let mut r = Rect::new(0, 0, 8, 8);
        r.translate(Vect::new(-3, 5));
        assert_eq!(r, Rect::new(-3, 5, 8, 8));
    }

    #[test]
    fn test_record_layout() {
        assert_eq!(std::mem::size_of::<Rect>(), 4 * std::mem::size_of::<i32>());
    }
}
