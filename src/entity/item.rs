//! Items and armor
//!
//! Durability follows the host convention: the stored value counts wear, so
//! a fresh item is at 0 and it breaks once wear passes its max durability.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::CustomArmorEntry;

/// Vanilla item materials the rules care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    LeatherHelmet,
    LeatherChestplate,
    LeatherLeggings,
    LeatherBoots,
    ChainmailHelmet,
    ChainmailChestplate,
    ChainmailLeggings,
    ChainmailBoots,
    IronHelmet,
    IronChestplate,
    IronLeggings,
    IronBoots,
    GoldHelmet,
    GoldChestplate,
    GoldLeggings,
    GoldBoots,
    DiamondHelmet,
    DiamondChestplate,
    DiamondLeggings,
    DiamondBoots,
    /// Wearable on the head but not armor
    Pumpkin,
    /// Wearable on the head but not armor
    Skull,
    WoodAxe,
    StoneAxe,
    IronAxe,
    GoldAxe,
    DiamondAxe,
}

impl Material {
    /// Whether the material counts as armor
    pub fn is_armor(&self) -> bool {
        use Material::*;
        matches!(
            self,
            LeatherHelmet
                | LeatherChestplate
                | LeatherLeggings
                | LeatherBoots
                | ChainmailHelmet
                | ChainmailChestplate
                | ChainmailLeggings
                | ChainmailBoots
                | IronHelmet
                | IronChestplate
                | IronLeggings
                | IronBoots
                | GoldHelmet
                | GoldChestplate
                | GoldLeggings
                | GoldBoots
                | DiamondHelmet
                | DiamondChestplate
                | DiamondLeggings
                | DiamondBoots
        )
    }

    /// Maximum durability (0 for items that never wear)
    pub fn max_durability(&self) -> u16 {
        use Material::*;
        match self {
            LeatherHelmet => 55,
            LeatherChestplate => 80,
            LeatherLeggings => 75,
            LeatherBoots => 65,
            ChainmailHelmet | IronHelmet => 165,
            ChainmailChestplate | IronChestplate => 240,
            ChainmailLeggings | IronLeggings => 225,
            ChainmailBoots | IronBoots => 195,
            GoldHelmet => 77,
            GoldChestplate => 112,
            GoldLeggings => 105,
            GoldBoots => 91,
            DiamondHelmet => 363,
            DiamondChestplate => 528,
            DiamondLeggings => 495,
            DiamondBoots => 429,
            Pumpkin | Skull => 0,
            WoodAxe => 59,
            StoneAxe => 131,
            IronAxe => 250,
            GoldAxe => 32,
            DiamondAxe => 1561,
        }
    }
}

/// What an item stack is
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Vanilla(Material),
    /// Modded item, resolved through [`CustomArmorTable`]
    Custom(String),
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Vanilla(material) => write!(f, "{:?}", material),
            ItemKind::Custom(id) => write!(f, "custom:{}", id),
        }
    }
}

/// An item in an entity's equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub kind: ItemKind,
    /// Accumulated wear
    pub durability: u16,
    /// Level of the durability (unbreaking) enchantment
    pub unbreaking: u32,
}

impl ItemStack {
    /// A fresh vanilla item
    pub fn new(material: Material) -> Self {
        Self {
            kind: ItemKind::Vanilla(material),
            durability: 0,
            unbreaking: 0,
        }
    }

    /// A fresh modded item
    pub fn custom(id: &str) -> Self {
        Self {
            kind: ItemKind::Custom(id.to_string()),
            durability: 0,
            unbreaking: 0,
        }
    }

    pub fn with_durability(mut self, durability: u16) -> Self {
        self.durability = durability;
        self
    }

    pub fn with_unbreaking(mut self, level: u32) -> Self {
        self.unbreaking = level;
        self
    }

    /// Whether this item counts as armor. Custom items must be registered.
    pub fn is_armor(&self, custom: &CustomArmorTable) -> bool {
        match &self.kind {
            ItemKind::Vanilla(material) => material.is_armor(),
            ItemKind::Custom(id) => custom.is_custom_armor(id),
        }
    }

    /// Maximum durability, using the custom table for modded items
    pub fn max_durability(&self, custom: &CustomArmorTable) -> u16 {
        match &self.kind {
            ItemKind::Vanilla(material) => material.max_durability(),
            ItemKind::Custom(id) => custom.durability(id).unwrap_or(0),
        }
    }
}

/// Registered modded armor, keyed by item id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomArmorTable {
    durability: HashMap<String, u16>,
}

impl CustomArmorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from configuration entries (later entries win)
    pub fn from_entries(entries: &[CustomArmorEntry]) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.register(&entry.id, entry.durability);
        }
        table
    }

    pub fn register(&mut self, id: &str, durability: u16) {
        self.durability.insert(id.to_string(), durability);
    }

    pub fn is_custom_armor(&self, id: &str) -> bool {
        self.durability.contains_key(id)
    }

    pub fn durability(&self, id: &str) -> Option<u16> {
        self.durability.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.durability.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durability.is_empty()
    }
}
