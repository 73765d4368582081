//! Room simulation module
//!
//! All physics lives here. A frame must be deterministic:
//! - Integer positions and velocities only
//! - Stable iteration order (room order, no sorting mid-frame)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geom;
pub mod state;
pub mod tick;

pub use collision::{CollisionSide, classify_side, intersects, resolve_velocity};
pub use geom::{Rect, Vect};
pub use state::{Body, Entity, EntityKind, Health, Room, RoomBounds, Sprite};
pub use tick::{Contact, detect_collisions, handle_wall_collision, run_objects, tick};
