//! Host entity views
//!
//! Entities are owned by the host engine. The rules only see:
//! - [`Actor`]: the attacking player and the direction they face
//! - [`LivingEntity`]: the target, its armor slots and velocity
//!
//! [`Creature`] is a plain in-memory target for hosts that copy entity state
//! in and out around a combat callback.

mod item;

pub use item::{CustomArmorTable, ItemKind, ItemStack, Material};

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable player identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host-assigned runtime entity id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The acting player
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    id: PlayerId,
    name: String,
    /// Horizontal rotation in degrees (0 = +Z, 90 = -X)
    yaw: f32,
    /// Vertical rotation in degrees (positive looks down)
    pitch: f32,
}

impl Actor {
    pub fn new(id: PlayerId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Set the facing rotation
    pub fn with_facing(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit vector the actor is looking along
    pub fn direction(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let xz = pitch.cos();

        Vec3::new(-xz * yaw.sin(), -pitch.sin(), xz * yaw.cos())
    }
}

/// Armor slot order, matching the host's armor contents array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArmorSlot {
    Boots = 0,
    Leggings = 1,
    Chestplate = 2,
    Helmet = 3,
}

/// Number of armor slots on a living entity
pub const ARMOR_SLOTS: usize = 4;

/// A living combat target
pub trait LivingEntity {
    fn entity_id(&self) -> EntityId;

    /// False once the entity died or despawned
    fn is_valid(&self) -> bool;

    /// Player id when the entity is a player
    fn as_player(&self) -> Option<PlayerId>;

    fn armor_contents(&self) -> &[Option<ItemStack>];

    fn armor_contents_mut(&mut self) -> &mut [Option<ItemStack>];

    fn velocity(&self) -> Vec3;

    fn set_velocity(&mut self, velocity: Vec3);
}

/// In-memory living entity
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    id: EntityId,
    player: Option<PlayerId>,
    valid: bool,
    armor: [Option<ItemStack>; ARMOR_SLOTS],
    velocity: Vec3,
}

impl Creature {
    /// A non-player entity
    pub fn mob(id: EntityId) -> Self {
        Self {
            id,
            player: None,
            valid: true,
            armor: Default::default(),
            velocity: Vec3::ZERO,
        }
    }

    /// A player entity
    pub fn player(id: EntityId, player: PlayerId) -> Self {
        Self {
            player: Some(player),
            ..Self::mob(id)
        }
    }

    /// Equip an item in a slot
    pub fn with_armor(mut self, slot: ArmorSlot, item: ItemStack) -> Self {
        self.armor[slot as usize] = Some(item);
        self
    }

    pub fn armor(&self, slot: ArmorSlot) -> Option<&ItemStack> {
        self.armor[slot as usize].as_ref()
    }

    /// Mark the entity as dead/despawned
    pub fn despawn(&mut self) {
        self.valid = false;
    }
}

impl LivingEntity for Creature {
    fn entity_id(&self) -> EntityId {
        self.id
    }

    fn is_valid(&self) -> bool {
        self.valid
    }

    fn as_player(&self) -> Option<PlayerId> {
        self.player
    }

    fn armor_contents(&self) -> &[Option<ItemStack>] {
        &self.armor
    }

    fn armor_contents_mut(&mut self) -> &mut [Option<ItemStack>] {
        &mut self.armor
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }
}
