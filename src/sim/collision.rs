//! Collision detection and response for axis-aligned boxes
//!
//! The tricky part of the room physics: deciding which side of a box was
//! struck when two boxes overlap, then swapping velocity along that side.

use serde::{Deserialize, Serialize};

use super::geom::{Rect, Vect};

/// Where on box A's boundary box B struck.
///
/// Discriminants run clockwise from the top, so opposite sides differ by 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CollisionSide {
    Top = 1,
    TopRight = 2,
    Right = 3,
    BottomRight = 4,
    Bottom = 5,
    BottomLeft = 6,
    Left = 7,
    TopLeft = 8,
}

impl CollisionSide {
    /// All sides in clockwise order starting at the top
    pub const ALL: [CollisionSide; 8] = [
        CollisionSide::Top,
        CollisionSide::TopRight,
        CollisionSide::Right,
        CollisionSide::BottomRight,
        CollisionSide::Bottom,
        CollisionSide::BottomLeft,
        CollisionSide::Left,
        CollisionSide::TopLeft,
    ];

    /// Numeric code in `1..=8`
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code).checked_sub(1)?).copied()
    }

    /// The side diametrically across the box (four steps around the clock,
    /// wrapping from TopLeft back to Top).
    pub fn opposite(self) -> Self {
        match self {
            CollisionSide::Top => CollisionSide::Bottom,
            CollisionSide::TopRight => CollisionSide::BottomLeft,
            CollisionSide::Right => CollisionSide::Left,
            CollisionSide::BottomRight => CollisionSide::TopLeft,
            CollisionSide::Bottom => CollisionSide::Top,
            CollisionSide::BottomLeft => CollisionSide::TopRight,
            CollisionSide::Left => CollisionSide::Right,
            CollisionSide::TopLeft => CollisionSide::BottomRight,
        }
    }

    /// Whether a hit on this side exchanges horizontal velocity
    #[inline]
    pub fn exchanges_x(self) -> bool {
        !matches!(self, CollisionSide::Top | CollisionSide::Bottom)
    }

    /// Whether a hit on this side exchanges vertical velocity
    #[inline]
    pub fn exchanges_y(self) -> bool {
        !matches!(self, CollisionSide::Left | CollisionSide::Right)
    }
}

/// Candidate sides of A still in play while classifying
#[derive(Debug, Clone, Copy)]
struct SideFlags {
    top: bool,
    right: bool,
    bottom: bool,
    left: bool,
}

impl SideFlags {
    fn count(&self) -> u32 {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .filter(|&&set| set)
            .count() as u32
    }

    fn clear_vertical(&mut self) {
        self.top = false;
        self.bottom = false;
    }

    fn clear_horizontal(&mut self) {
        self.left = false;
        self.right = false;
    }

    fn side(&self) -> CollisionSide {
        if self.top {
            if self.left {
                return CollisionSide::TopLeft;
            }
            if self.right {
                return CollisionSide::TopRight;
            }
            return CollisionSide::Top;
        }
        if self.bottom {
            if self.left {
                return CollisionSide::BottomLeft;
            }
            if self.right {
                return CollisionSide::BottomRight;
            }
            return CollisionSide::Bottom;
        }
        if self.left {
            return CollisionSide::Left;
        }
        CollisionSide::Right
    }
}

/// Closed-boundary AABB overlap test.
///
/// Boxes only miss when one lies strictly beyond the other on some axis, so
/// boxes that share an edge intersect.
#[inline]
pub fn intersects(a: Rect, b: Rect) -> bool {
    if a.right() < b.x {
        return false;
    }
    if a.x > b.right() {
        return false;
    }
    if a.bottom() < b.y {
        return false;
    }
    if a.y > b.bottom() {
        return false;
    }
    true
}

/// Classify which side of `a` was struck by `b`.
///
/// Starts by assuming every side is hit and eliminates sides from relative
/// position. Corner overlaps are broken first by relative velocity, then by
/// overlap depth divided by closing speed on each axis: the axis with the
/// larger ratio is treated as the grazing one and dropped. That last rule is
/// gameplay tuning, not derived physics, and is kept bit-for-bit.
pub fn classify_side(a: Rect, vel_a: Vect, b: Rect, vel_b: Vect) -> CollisionSide {
    let mut flags = SideFlags {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    // Relative position
    if a.y > b.y {
        flags.bottom = false;
    }
    if a.x > b.x {
        flags.right = false;
    }
    if flags.bottom && a.bottom() < b.bottom() {
        flags.top = false;
    }
    if flags.right && a.right() < b.right() {
        flags.left = false;
    }

    // Three sides cannot be hit at once; drop the pair that is fully set
    if flags.count() == 3 {
        if flags.top && flags.bottom {
            flags.clear_vertical();
        } else {
            flags.clear_horizontal();
        }
    }

    // Corner: keep only sides A is moving into relative to B
    if flags.count() == 2 {
        if vel_a.y <= vel_b.y {
            flags.bottom = false;
        }
        if vel_a.y >= vel_b.y {
            flags.top = false;
        }
        if vel_a.x <= vel_b.x {
            flags.right = false;
        }
        if vel_a.x >= vel_b.x {
            flags.left = false;
        }
    }

    // Still a corner: compare overlap per unit of closing speed
    if flags.count() == 2 {
        let h_overlap = if flags.top {
            b.bottom() - a.y
        } else {
            a.bottom() - b.y
        };
        let w_overlap = if flags.left {
            b.right() - a.x
        } else {
            a.right() - b.x
        };

        let h_ratio = overlap_per_speed(h_overlap, vel_a.y, vel_b.y);
        let w_ratio = overlap_per_speed(w_overlap, vel_a.x, vel_b.x);

        if h_ratio > w_ratio {
            flags.clear_vertical();
        } else if h_ratio < w_ratio {
            flags.clear_horizontal();
        }
    }

    flags.side()
}

#[inline]
fn overlap_per_speed(overlap: i32, speed_a: i32, speed_b: i32) -> f64 {
    let speed = f64::from(speed_a).abs() + f64::from(speed_b).abs();
    if speed != 0.0 {
        f64::from(overlap) / speed
    } else {
        0.0
    }
}

/// Velocity of a body after being struck on `side` by a body moving at `other`.
///
/// Not an impulse: the struck axis simply takes the other body's component.
/// Corner sides exchange both axes.
#[inline]
pub fn resolve_velocity(own: Vect, other: Vect, side: CollisionSide) -> Vect {
    let mut vel = own;
    if side.exchanges_x() {
        vel.x = other.x;
    }
    if side.exchanges_y() {
        vel.y = other.y;
    }
    vel
}
