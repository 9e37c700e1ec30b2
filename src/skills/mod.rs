//! Skill managers
//!
//! A skill manager binds one acting player to one skill category and
//! evaluates that skill's ability rules against a combat target. Managers
//! are cheap borrowed views built per combat event; every collaborator they
//! consult lives in the shared [`SkillContext`].

mod activation;
pub mod axes;

pub use activation::{
    ActivationChance, ActivationOracle, ActivationRoll, RandomActivation, ScriptedActivation,
    ACTIVATION_RANGE, LUCKY_ACTIVATION_RANGE,
};

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::combat::AreaDamageApplier;
use crate::config::{ConfigError, SkillsConfig};
use crate::entity::{Actor, CustomArmorTable};
use crate::locale::Locale;
use crate::permissions::{Capability, PermissionOracle};
use crate::presentation::Presenter;
use crate::profile::ProfileStore;

/// Skill categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    Acrobatics,
    Archery,
    Axes,
    Excavation,
    Fishing,
    Herbalism,
    Mining,
    Repair,
    Swords,
    Taming,
    Unarmed,
    Woodcutting,
}

impl FromStr for SkillType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "acrobatics" => Ok(SkillType::Acrobatics),
            "archery" => Ok(SkillType::Archery),
            "axes" | "axe" => Ok(SkillType::Axes),
            "excavation" => Ok(SkillType::Excavation),
            "fishing" => Ok(SkillType::Fishing),
            "herbalism" => Ok(SkillType::Herbalism),
            "mining" => Ok(SkillType::Mining),
            "repair" => Ok(SkillType::Repair),
            "swords" | "sword" => Ok(SkillType::Swords),
            "taming" => Ok(SkillType::Taming),
            "unarmed" => Ok(SkillType::Unarmed),
            "woodcutting" => Ok(SkillType::Woodcutting),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkillType::Acrobatics => "acrobatics",
            SkillType::Archery => "archery",
            SkillType::Axes => "axes",
            SkillType::Excavation => "excavation",
            SkillType::Fishing => "fishing",
            SkillType::Herbalism => "herbalism",
            SkillType::Mining => "mining",
            SkillType::Repair => "repair",
            SkillType::Swords => "swords",
            SkillType::Taming => "taming",
            SkillType::Unarmed => "unarmed",
            SkillType::Woodcutting => "woodcutting",
        };
        write!(f, "{}", s)
    }
}

/// Timed super abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityType {
    /// Axes: splash damage to nearby entities
    SkullSplitter,
}

/// Tools that can be readied for a super ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolType {
    Axe,
    Sword,
}

/// Collaborators shared by every skill manager
pub struct SkillContext {
    pub config: Arc<SkillsConfig>,
    pub locale: Arc<Locale>,
    pub permissions: Arc<dyn PermissionOracle>,
    pub profiles: Arc<dyn ProfileStore>,
    pub activation: Arc<dyn ActivationOracle>,
    pub presenter: Arc<dyn Presenter>,
    pub combat: Arc<dyn AreaDamageApplier>,
    custom_armor: CustomArmorTable,
}

impl SkillContext {
    /// Bundle the collaborators. Modded armor is indexed from `config.mods`.
    ///
    /// The config is validated here so rules never see values they cannot
    /// work with, whether or not it came through [`SkillsConfig::load`].
    pub fn new(
        config: Arc<SkillsConfig>,
        locale: Arc<Locale>,
        permissions: Arc<dyn PermissionOracle>,
        profiles: Arc<dyn ProfileStore>,
        activation: Arc<dyn ActivationOracle>,
        presenter: Arc<dyn Presenter>,
        combat: Arc<dyn AreaDamageApplier>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let custom_armor = CustomArmorTable::from_entries(&config.mods.armor);
        Ok(Self {
            config,
            locale,
            permissions,
            profiles,
            activation,
            presenter,
            combat,
            custom_armor,
        })
    }

    pub fn custom_armor(&self) -> &CustomArmorTable {
        &self.custom_armor
    }
}

impl fmt::Debug for SkillContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkillContext")
            .field("config", &self.config)
            .field("custom_armor", &self.custom_armor.len())
            .finish_non_exhaustive()
    }
}

/// Common surface of per-skill managers
pub trait SkillManager {
    /// The acting player
    fn player(&self) -> &Actor;

    /// The skill this manager evaluates
    fn skill(&self) -> SkillType;

    fn context(&self) -> &SkillContext;

    fn skill_level(&self) -> u32 {
        self.context()
            .profiles
            .skill_level(self.player().id(), self.skill())
    }

    fn ability_active(&self, ability: AbilityType) -> bool {
        self.context()
            .profiles
            .ability_active(self.player().id(), ability)
    }

    fn tool_prepared(&self, tool: ToolType) -> bool {
        self.context()
            .profiles
            .tool_prepared(self.player().id(), tool)
    }

    fn notifications_enabled(&self) -> bool {
        self.context()
            .profiles
            .notifications_enabled(self.player().id())
    }

    fn has_permission(&self, capability: Capability) -> bool {
        self.context()
            .permissions
            .has_permission(self.player().id(), capability)
    }

    fn is_lucky(&self) -> bool {
        self.has_permission(Capability::Lucky)
    }

    /// Roll an activation for this player and skill
    fn activation_successful(&self, chance: ActivationChance) -> bool {
        let roll = ActivationRoll {
            player: *self.player().id(),
            skill: self.skill(),
            skill_level: self.skill_level(),
            chance,
            lucky: self.is_lucky(),
        };
        self.context().activation.roll(&roll)
    }

    /// Send a localized message to the acting player
    fn notify_player(&self, key: &str) {
        let context = self.context();
        context
            .presenter
            .send_message(self.player().id(), &context.locale.get(key));
    }
}
