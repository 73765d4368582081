//! Per-frame physics pass
//!
//! One call to [`tick`] moves every physical entity, bounces it off the room
//! boundary, then resolves every overlapping pair once. Holding `&mut Room`
//! for the whole pass keeps the entity list from changing mid-frame.

use super::collision::{CollisionSide, classify_side, intersects};
use super::geom::Vect;
use super::state::{Entity, Room, RoomBounds};

/// A pair of physical entities found overlapping during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    /// Room index of the earlier entity
    pub a: usize,
    /// Room index of the later entity
    pub b: usize,
    /// Side of `a` that `b` struck
    pub side: CollisionSide,
    /// Largest per-axis closing speed before the velocities were swapped
    pub impact: i32,
}

impl Contact {
    /// Side of `b` that `a` struck
    pub fn side_b(&self) -> CollisionSide {
        self.side.opposite()
    }
}

/// Advance the room by one frame
pub fn tick(room: &mut Room, bounds: RoomBounds) {
    run_objects(room, bounds);
    detect_collisions(room);
}

/// Run each physical entity's motion, then bounce it off the room edges
pub fn run_objects(room: &mut Room, bounds: RoomBounds) {
    for entity in room.iter_mut().filter(|e| e.is_physical()) {
        entity.advance();
        handle_wall_collision(entity, bounds);
    }
}

/// Reflect velocity when the box touches or crosses a room edge.
///
/// Position is left alone, so a fast box can sit outside the room for a frame
/// before its flipped velocity brings it back.
pub fn handle_wall_collision(entity: &mut Entity, bounds: RoomBounds) {
    let rect = entity.rect;
    let Some(body) = entity.body.as_mut() else {
        return;
    };

    if rect.x <= 0 || rect.right() >= bounds.width {
        body.vel.x = -body.vel.x;
    }
    if rect.y <= 0 || rect.bottom() >= bounds.height {
        body.vel.y = -body.vel.y;
    }
}

/// Test every unordered pair of physical entities once, in room order, and
/// swap velocities for each overlapping pair.
///
/// Both velocities of a pair are read before either is written, but a later
/// pair sees the result of earlier ones.
pub fn detect_collisions(room: &mut Room) -> Vec<Contact> {
    let physical = room.physical_indices();
    let mut contacts = Vec::new();

    for (n, &i) in physical.iter().enumerate() {
        for &j in &physical[n + 1..] {
            let (Some((rect_a, vel_a)), Some((rect_b, vel_b))) = (
                room.get(i).and_then(Entity::physical_state),
                room.get(j).and_then(Entity::physical_state),
            ) else {
                continue;
            };

            if !intersects(rect_a, rect_b) {
                continue;
            }

            let side = classify_side(rect_a, vel_a, rect_b, vel_b);
            if let Some(a) = room.get_mut(i) {
                a.apply_collision(vel_b, side);
            }
            if let Some(b) = room.get_mut(j) {
                b.apply_collision(vel_a, side.opposite());
            }

            let contact = Contact {
                a: i,
                b: j,
                side,
                impact: closing_speed(vel_a, vel_b),
            };
            log::debug!(
                "collision {} <-> {}: {:?}/{:?}, impact {}",
                i,
                j,
                contact.side,
                contact.side_b(),
                contact.impact
            );
            contacts.push(contact);
        }
    }

    contacts
}

#[inline]
fn closing_speed(vel_a: Vect, vel_b: Vect) -> i32 {
    let dx = vel_a.x.saturating_sub(vel_b.x).saturating_abs();
    let dy = vel_a.y.saturating_sub(vel_b.y).saturating_abs();
    dx.max(dy)
}
