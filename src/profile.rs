//! Player skill profiles
//!
//! A profile carries skill levels, which super abilities are currently
//! active, which tools are readied for an ability, and whether the player
//! wants chat notifications. Profiles are loaded and saved by the host;
//! [`ProfileRegistry`] is the in-memory view the rules read from.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::PlayerId;
use crate::skills::{AbilityType, SkillType, ToolType};

/// Read access to player profiles
pub trait ProfileStore: Send + Sync {
    /// Skill level, 0 for unknown players
    fn skill_level(&self, player: &PlayerId, skill: SkillType) -> u32;

    /// Whether a super ability is currently running
    fn ability_active(&self, player: &PlayerId, ability: AbilityType) -> bool;

    /// Whether the player has readied a tool for its ability
    fn tool_prepared(&self, player: &PlayerId, tool: ToolType) -> bool;

    /// Whether the player wants ability chat notifications
    fn notifications_enabled(&self, player: &PlayerId) -> bool;
}

/// One player's skill state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    skill_levels: HashMap<SkillType, u32>,
    ability_modes: HashSet<AbilityType>,
    tool_preparation: HashSet<ToolType>,
    chat_notifications: bool,
}

impl PlayerProfile {
    /// Create a fresh profile (all skills at 0, notifications on)
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            skill_levels: HashMap::new(),
            ability_modes: HashSet::new(),
            tool_preparation: HashSet::new(),
            chat_notifications: true,
        }
    }

    pub fn with_skill_level(mut self, skill: SkillType, level: u32) -> Self {
        self.set_skill_level(skill, level);
        self
    }

    pub fn skill_level(&self, skill: SkillType) -> u32 {
        self.skill_levels.get(&skill).copied().unwrap_or(0)
    }

    pub fn set_skill_level(&mut self, skill: SkillType, level: u32) {
        self.skill_levels.insert(skill, level);
    }

    pub fn ability_mode(&self, ability: AbilityType) -> bool {
        self.ability_modes.contains(&ability)
    }

    pub fn set_ability_mode(&mut self, ability: AbilityType, active: bool) {
        if active {
            self.ability_modes.insert(ability);
        } else {
            self.ability_modes.remove(&ability);
        }
    }

    pub fn tool_preparation_mode(&self, tool: ToolType) -> bool {
        self.tool_preparation.contains(&tool)
    }

    pub fn set_tool_preparation_mode(&mut self, tool: ToolType, prepared: bool) {
        if prepared {
            self.tool_preparation.insert(tool);
        } else {
            self.tool_preparation.remove(&tool);
        }
    }

    pub fn use_chat_notifications(&self) -> bool {
        self.chat_notifications
    }

    pub fn set_chat_notifications(&mut self, enabled: bool) {
        self.chat_notifications = enabled;
    }
}

/// Loaded profiles keyed by player
#[derive(Debug, Default)]
pub struct ProfileRegistry {
    profiles: RwLock<HashMap<PlayerId, PlayerProfile>>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap in Arc for sharing
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Add or replace a loaded profile
    pub fn insert(&self, player: PlayerId, profile: PlayerProfile) {
        self.profiles.write().insert(player, profile);
    }

    /// Unload a profile
    pub fn remove(&self, player: &PlayerId) -> Option<PlayerProfile> {
        self.profiles.write().remove(player)
    }

    /// Snapshot of a loaded profile
    pub fn get(&self, player: &PlayerId) -> Option<PlayerProfile> {
        self.profiles.read().get(player).cloned()
    }

    /// Mutate a loaded profile in place. Returns false if not loaded.
    pub fn update<F>(&self, player: &PlayerId, f: F) -> bool
    where
        F: FnOnce(&mut PlayerProfile),
    {
        match self.profiles.write().get_mut(player) {
            Some(profile) => {
                f(profile);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.profiles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.read().is_empty()
    }

    fn with_profile<T>(&self, player: &PlayerId, f: impl FnOnce(&PlayerProfile) -> T) -> Option<T> {
        let profiles = self.profiles.read();
        let profile = profiles.get(player);
        if profile.is_none() {
            debug!("No profile loaded for {}", player);
        }
        profile.map(f)
    }
}

impl ProfileStore for ProfileRegistry {
    fn skill_level(&self, player: &PlayerId, skill: SkillType) -> u32 {
        self.with_profile(player, |p| p.skill_level(skill))
            .unwrap_or(0)
    }

    fn ability_active(&self, player: &PlayerId, ability: AbilityType) -> bool {
        self.with_profile(player, |p| p.ability_mode(ability))
            .unwrap_or(false)
    }

    fn tool_prepared(&self, player: &PlayerId, tool: ToolType) -> bool {
        self.with_profile(player, |p| p.tool_preparation_mode(tool))
            .unwrap_or(false)
    }

    fn notifications_enabled(&self, player: &PlayerId) -> bool {
        self.with_profile(player, |p| p.use_chat_notifications())
            .unwrap_or(false)
    }
}
