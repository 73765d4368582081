//! Gameplay frame
//!
//! Physics never removes anything. This layer reads the contacts physics
//! reports, wears down pigs and destructible walls, and removes what broke
//! once the physics pass is over.

use crate::settings::Settings;
use crate::sim::{Contact, EntityKind, Room, detect_collisions, run_objects};

/// What happened during one frame
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    /// Overlapping pairs, indexed by room order at the start of the frame
    pub contacts: Vec<Contact>,
    /// Kinds of entities removed after the physics pass
    pub removed: Vec<EntityKind>,
    /// Pigs left in the room
    pub pigs_remaining: usize,
}

impl FrameReport {
    /// No pigs left
    pub fn level_cleared(&self) -> bool {
        self.pigs_remaining == 0
    }
}

/// Run one physics pass, apply impact damage, then drop destroyed entities
pub fn advance_frame(room: &mut Room, settings: &Settings) -> FrameReport {
    run_objects(room, settings.bounds());
    let contacts = detect_collisions(room);
    apply_damage(room, &contacts, settings.damage_threshold);

    let removed: Vec<EntityKind> = room
        .reap_destroyed()
        .into_iter()
        .map(|entity| entity.kind)
        .collect();

    FrameReport {
        contacts,
        removed,
        pigs_remaining: room.pig_count(),
    }
}

/// Damage both entities of every contact whose impact reaches `threshold`.
///
/// Entities without health shrug it off.
pub fn apply_damage(room: &mut Room, contacts: &[Contact], threshold: i32) {
    for contact in contacts.iter().filter(|c| c.impact >= threshold) {
        for index in [contact.a, contact.b] {
            if let Some(health) = room.get_mut(index).and_then(|e| e.health.as_mut()) {
                health.damage(contact.impact);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{CollisionSide, Entity, Health, Rect, Vect};

    fn contact(a: usize, b: usize, impact: i32) -> Contact {
        Contact {
            a,
            b,
            side: CollisionSide::Right,
            impact,
        }
    }

    #[test]
    fn test_damage_below_threshold_ignored() {
        let mut room = Room::with_entities(vec![
            Entity::projectile(0, 0, Vect::ZERO),
            Entity::pig(10, 0, Vect::ZERO),
        ]);
        apply_damage(&mut room, &[contact(0, 1, DAMAGE_THRESHOLD - 1)], DAMAGE_THRESHOLD);
        assert_eq!(room.get(1).and_then(|e| e.health), Some(Health::new(PIG_HEALTH)));
    }

    #[test]
    fn test_damage_hits_both_sides_with_health() {
        let mut room = Room::with_entities(vec![
            Entity::pig(0, 0, Vect::ZERO),
            Entity::destructible_wall(Rect::new(10, 0, 20, 80), Vect::ZERO),
            Entity::wall(Rect::new(40, 0, 20, 80), Vect::ZERO),
        ]);
        apply_damage(&mut room, &[contact(0, 1, 5), contact(1, 2, 6)], 4);
        assert_eq!(room.get(0).and_then(|e| e.health), Some(Health::new(PIG_HEALTH - 5)));
        assert_eq!(
            room.get(1).and_then(|e| e.health),
            Some(Health::new(WALL_DURABILITY - 11))
        );
        assert!(room.get(2).is_some_and(|e| e.health.is_none()));
    }

    #[test]
    fn test_fast_projectile_pops_pig() {
        // Projectile moving 14 px/frame meets a resting pig with 12 hp
        let mut room = Room::with_entities(vec![
            Entity::projectile(100, 200, Vect::new(14, 0)),
            Entity::pig(125, 192, Vect::ZERO),
        ]);
        let settings = Settings::default();

        let report = advance_frame(&mut room, &settings);
        assert_eq!(report.contacts.len(), 1);
        assert_eq!(report.contacts[0].impact, 14);
        assert_eq!(report.removed, vec![EntityKind::Pig]);
        assert!(report.level_cleared());
        assert_eq!(room.count(), 1);
        // Projectile took the pig's velocity on the struck axis
        assert_eq!(room.get(0).and_then(Entity::vel), Some(Vect::ZERO));
    }

    #[test]
    fn test_quiet_frame_keeps_everything() {
        let mut room = Room::with_entities(vec![
            Entity::sling(Rect::new(100, 350, 20, 60)),
            Entity::pig(425, 400, Vect::ZERO),
        ]);
        let report = advance_frame(&mut room, &Settings::default());
        assert!(report.contacts.is_empty());
        assert!(report.removed.is_empty());
        assert_eq!(report.pigs_remaining, 1);
        assert!(!report.level_cleared());
    }
}
