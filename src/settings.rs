//! Simulation settings
//!
//! Stored as JSON next to the room files. Every field has a default, so a
//! partial file only overrides what it names.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::PersistenceError;
use crate::sim::RoomBounds;

/// Room bounds and gameplay tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Right edge of the room for wall bounces
    pub room_width: i32,
    /// Bottom edge of the room for wall bounces
    pub room_height: i32,
    /// Frames the headless runner simulates
    pub frames: u32,
    /// Minimum closing speed for a collision to hurt pigs and destructible walls
    pub damage_threshold: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            room_width: ROOM_WIDTH,
            room_height: ROOM_HEIGHT,
            frames: DEFAULT_FRAMES,
            damage_threshold: DAMAGE_THRESHOLD,
        }
    }
}

impl Settings {
    pub fn bounds(&self) -> RoomBounds {
        RoomBounds {
            width: self.room_width,
            height: self.room_height,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from `path`
    pub fn try_load(path: &Path) -> Result<Self, PersistenceError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings from `path`, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Using default settings ({}: {})", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
