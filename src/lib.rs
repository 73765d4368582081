//! Slingshot - room physics for a slingshot puzzle game
//!
//! Core modules:
//! - `sim`: Room simulation (bodies, collision geometry, per-frame physics)
//! - `game`: Gameplay rules layered on top of physics (damage, removal between frames)
//! - `persistence`: Position records and room files
//! - `settings`: Room bounds and gameplay tuning

pub mod game;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use game::{FrameReport, advance_frame};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default room width in pixels
    pub const ROOM_WIDTH: i32 = 640;
    /// Default room height in pixels
    pub const ROOM_HEIGHT: i32 = 480;

    /// Frames simulated by the headless runner when none are requested
    pub const DEFAULT_FRAMES: u32 = 300;

    /// Starting health of a pig
    pub const PIG_HEALTH: i32 = 12;
    /// Starting durability of a destructible wall
    pub const WALL_DURABILITY: i32 = 20;
    /// Impacts below this relative speed deal no damage
    pub const DAMAGE_THRESHOLD: i32 = 4;

    /// Projectile box size (square)
    pub const PROJECTILE_SIZE: i32 = 16;
    /// Pig box size (square)
    pub const PIG_SIZE: i32 = 32;
}
