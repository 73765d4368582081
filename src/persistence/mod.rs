//! Save/load for rooms
//!
//! Two formats:
//! - Position records: four native-endian `i32` per entity, in room order
//! - Room files: JSON list of entities with their capabilities

pub mod record;
pub mod room_file;

pub use record::{
    RECORD_LEN, load_positions, load_positions_from, read_rect, save_positions, save_positions_to,
    write_rect,
};
pub use room_file::{load_room, room_from_json, room_to_json, save_room};

/// Errors from reading or writing saved state
#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stream ended inside a position record
    #[error("position record truncated")]
    ShortRecord,

    /// Fewer position records than entities in the room
    #[error("missing position record for entity {index} of {count}")]
    MissingRecord { index: usize, count: usize },
}
