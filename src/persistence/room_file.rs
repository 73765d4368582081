//! JSON room files
//!
//! A room file is the serialized [`Room`]: an ordered list of entities with
//! whichever capabilities they carry. Entity order in the file is the order
//! physics resolves collisions in.

use std::fs;
use std::path::Path;

use super::PersistenceError;
use crate::sim::Room;

pub fn room_from_json(json: &str) -> Result<Room, PersistenceError> {
    Ok(serde_json::from_str(json)?)
}

pub fn room_to_json(room: &Room) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(room)?)
}

pub fn load_room(path: &Path) -> Result<Room, PersistenceError> {
    let json = fs::read_to_string(path)?;
    let room = room_from_json(&json)?;
    log::info!(
        "Loaded room {} ({} entities, {} physical, {} pigs)",
        path.display(),
        room.count(),
        room.physical_indices().len(),
        room.pig_count()
    );
    Ok(room)
}

pub fn save_room(room: &Room, path: &Path) -> Result<(), PersistenceError> {
    fs::write(path, room_to_json(room)?)?;
    log::info!("Room saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{EntityKind, Health, Rect, Vect};

    const ROOM: &str = r#"{
        "entities": [
            { "kind": "Sling", "rect": { "x": 100, "y": 350, "w": 20, "h": 60 },
              "sprite": { "image": "Stretchy.bmp" } },
            { "kind": "Projectile", "rect": { "x": 400, "y": 415, "w": 16, "h": 16 },
              "body": { "vel": [-7, 0] } },
            { "kind": "Pig", "rect": { "x": 425, "y": 440, "w": 32, "h": 32 },
              "body": { "vel": [0, 0], "acc": [0, 1] }, "health": { "hp": 5 } }
        ]
    }"#;

    #[test]
    fn test_parse_room_file() {
        let room = room_from_json(ROOM).unwrap();
        assert_eq!(room.count(), 3);
        assert_eq!(room.physical_indices(), vec![1, 2]);

        let sling = room.get(0).unwrap();
        assert_eq!(sling.kind, EntityKind::Sling);
        assert_eq!(sling.sprite.as_ref().map(|s| s.layer), Some(0));
        assert!(sling.body.is_none());

        let proj = room.get(1).unwrap();
        assert_eq!(proj.rect, Rect::new(400, 415, 16, 16));
        assert_eq!(proj.body.map(|b| b.acc), Some(Vect::ZERO));

        let pig = room.get(2).unwrap();
        assert_eq!(pig.body.map(|b| b.acc), Some(Vect::new(0, 1)));
        assert_eq!(pig.health, Some(Health::new(5)));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{ "entities": [ { "kind": "Catapult", "rect": { "x": 0, "y": 0, "w": 1, "h": 1 } } ] }"#;
        assert!(matches!(room_from_json(json), Err(PersistenceError::Json(_))));
    }

    #[test]
    fn test_written_room_reads_back() {
        let room = room_from_json(ROOM).unwrap();
        let json = room_to_json(&room).unwrap();
        assert_eq!(room_from_json(&json).unwrap(), room);
    }
}
