//! Room and entity types
//!
//! An entity is a bundle of optional capabilities rather than a class
//! hierarchy. Physics only looks at entities carrying a [`Body`].

use serde::{Deserialize, Serialize};

use super::collision::{CollisionSide, resolve_velocity};
use super::geom::{Rect, Vect};
use crate::consts::*;

/// What an entity is, for gameplay and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Launcher, drawn only
    Sling,
    /// Bird launched at the structures
    Projectile,
    /// Target; level is cleared when none remain
    Pig,
    Wall,
    /// Wall that breaks after enough damage
    DestructibleWall,
    /// HUD button, drawn only
    PauseButton,
}

/// Physical capability: motion state of an entity's box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Body {
    pub vel: Vect,
    #[serde(default)]
    pub acc: Vect,
}

impl Body {
    pub fn new(vel: Vect) -> Self {
        Self { vel, acc: Vect::ZERO }
    }

    pub fn with_acc(mut self, acc: Vect) -> Self {
        self.acc = acc;
        self
    }

    /// Add a one-off push to the current velocity
    pub fn apply_force(&mut self, force: Vect) {
        self.vel += force;
    }
}

/// Render capability (consumed by the renderer, ignored by physics)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    /// Bitmap key
    pub image: String,
    /// Draw order, lower first
    #[serde(default)]
    pub layer: i32,
}

impl Sprite {
    pub fn new(image: impl Into<String>, layer: i32) -> Self {
        Self {
            image: image.into(),
            layer,
        }
    }
}

/// Hit points for entities that can be destroyed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub hp: i32,
}

impl Health {
    pub fn new(hp: i32) -> Self {
        Self { hp }
    }

    pub fn damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    pub fn is_destroyed(&self) -> bool {
        self.hp <= 0
    }
}

/// A room object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    /// Current bounding box
    pub rect: Rect,
    #[serde(default)]
    pub body: Option<Body>,
    #[serde(default)]
    pub sprite: Option<Sprite>,
    #[serde(default)]
    pub health: Option<Health>,
}

impl Entity {
    fn new(kind: EntityKind, rect: Rect, image: &str, layer: i32) -> Self {
        Self {
            kind,
            rect,
            body: None,
            sprite: Some(Sprite::new(image, layer)),
            health: None,
        }
    }

    pub fn sling(rect: Rect) -> Self {
        Self::new(EntityKind::Sling, rect, "Stretchy.bmp", 0)
    }

    pub fn pause_button(rect: Rect) -> Self {
        Self::new(EntityKind::PauseButton, rect, "Pause.bmp", 2)
    }

    pub fn projectile(x: i32, y: i32, vel: Vect) -> Self {
        let rect = Rect::new(x, y, PROJECTILE_SIZE, PROJECTILE_SIZE);
        let mut entity = Self::new(EntityKind::Projectile, rect, "Proj.bmp", 1);
        entity.body = Some(Body::new(vel));
        entity
    }

    pub fn pig(x: i32, y: i32, vel: Vect) -> Self {
        let rect = Rect::new(x, y, PIG_SIZE, PIG_SIZE);
        let mut entity = Self::new(EntityKind::Pig, rect, "Pig.bmp", 1);
        entity.body = Some(Body::new(vel));
        entity.health = Some(Health::new(PIG_HEALTH));
        entity
    }

    pub fn wall(rect: Rect, vel: Vect) -> Self {
        let mut entity = Self::new(EntityKind::Wall, rect, "Wall.bmp", 1);
        entity.body = Some(Body::new(vel));
        entity
    }

    pub fn destructible_wall(rect: Rect, vel: Vect) -> Self {
        let mut entity = Self::wall(rect, vel);
        entity.kind = EntityKind::DestructibleWall;
        entity.health = Some(Health::new(WALL_DURABILITY));
        entity
    }

    /// Whether physics moves and collides this entity
    #[inline]
    pub fn is_physical(&self) -> bool {
        self.body.is_some()
    }

    /// Box and velocity, if physical
    #[inline]
    pub fn physical_state(&self) -> Option<(Rect, Vect)> {
        self.body.map(|body| (self.rect, body.vel))
    }

    pub fn vel(&self) -> Option<Vect> {
        self.body.map(|body| body.vel)
    }

    /// Per-tick motion: acceleration into velocity, velocity into position
    pub fn advance(&mut self) {
        if let Some(body) = self.body.as_mut() {
            body.vel += body.acc;
            self.rect.translate(body.vel);
        }
    }

    /// React to being struck on `side` by a body moving at `other_vel`
    pub fn apply_collision(&mut self, other_vel: Vect, side: CollisionSide) {
        if let Some(body) = self.body.as_mut() {
            body.vel = resolve_velocity(body.vel, other_vel, side);
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.health.is_some_and(|h| h.is_destroyed())
    }
}

/// Room boundary used for wall bounces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBounds {
    pub width: i32,
    pub height: i32,
}

impl Default for RoomBounds {
    fn default() -> Self {
        Self {
            width: ROOM_WIDTH,
            height: ROOM_HEIGHT,
        }
    }
}

/// Ordered collection of entities.
///
/// Order is significant: collision pairs are resolved in room order, so it
/// must not change while a frame is being simulated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    entities: Vec<Entity>,
}

impl Room {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    pub fn with_entities(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn add(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove and return the entity at `index`, shifting later entities down.
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Entity {
        self.entities.remove(index)
    }

    pub fn count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Indices of physical entities, in room order
    pub fn physical_indices(&self) -> Vec<usize> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_physical())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn count_kind(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }

    pub fn projectile_count(&self) -> usize {
        self.count_kind(EntityKind::Projectile)
    }

    pub fn pig_count(&self) -> usize {
        self.count_kind(EntityKind::Pig)
    }

    /// Drop every entity whose health ran out, keeping the rest in order.
    ///
    /// Only call between frames.
    pub fn reap_destroyed(&mut self) -> Vec<Entity> {
        let (destroyed, alive): (Vec<Entity>, Vec<Entity>) = std::mem::take(&mut self.entities)
            .into_iter()
            .partition(Entity::is_destroyed);
        self.entities = alive;
        for entity in &destroyed {
            log::info!("{:?} destroyed at ({}, {})", entity.kind, entity.rect.x, entity.rect.y);
        }
        destroyed
    }
}
