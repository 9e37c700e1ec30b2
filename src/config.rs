//! Skill configuration
//!
//! Layered with figment:
//! 1. Built-in defaults
//! 2. Optional TOML file
//! 3. `SKILLRULES_` environment variables (`__` separates nested keys,
//!    e.g. `SKILLRULES_AXES__IMPACT_CHANCE=30`)
//!
//! The merged result is validated before use so that rule arithmetic never
//! divides by zero or rolls against an impossible chance.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "SKILLRULES_";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read configuration: {0}")]
    Extract(#[from] figment::Error),

    #[error("invalid value for {field}: {value} (expected {expected})")]
    Invalid {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Axes skill tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    /// Skill level at which axe mastery reaches its maximum bonus
    pub bonus_damage_max_bonus_level: u32,
    /// Maximum axe mastery bonus damage
    pub bonus_damage_max_bonus: u32,

    /// Critical hit chance (percent) at `critical_hit_max_bonus_level`
    pub critical_hit_max_chance: f64,
    pub critical_hit_max_bonus_level: u32,
    /// Damage multiplier against players
    pub critical_hit_pvp_modifier: f64,
    /// Damage multiplier against everything else
    pub critical_hit_pve_modifier: f64,

    /// Per-armor-piece impact chance (percent)
    pub impact_chance: f64,
    /// Levels per extra point of impact durability damage
    pub impact_increase_level: u32,
    /// Largest fraction of an item's max durability one impact may remove
    pub impact_max_durability_modifier: f64,

    /// Greater impact chance (percent)
    pub greater_impact_chance: f64,
    pub greater_impact_knockback_multiplier: f32,
    pub greater_impact_bonus_damage: i32,

    /// Divisor applied to damage before it is splashed to nearby entities
    pub skull_splitter_modifier: i32,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            bonus_damage_max_bonus_level: 200,
            bonus_damage_max_bonus: 4,
            critical_hit_max_chance: 37.5,
            critical_hit_max_bonus_level: 750,
            critical_hit_pvp_modifier: 1.5,
            critical_hit_pve_modifier: 2.0,
            impact_chance: 25.0,
            impact_increase_level: 50,
            impact_max_durability_modifier: 0.2,
            greater_impact_chance: 25.0,
            greater_impact_knockback_multiplier: 1.5,
            greater_impact_bonus_damage: 2,
            skull_splitter_modifier: 2,
        }
    }
}

impl AxesConfig {
    /// Skill levels needed for each point of axe mastery bonus
    pub fn levels_per_bonus_point(&self) -> u32 {
        self.bonus_damage_max_bonus_level / self.bonus_damage_max_bonus.max(1)
    }

    /// Armor durability points one successful impact removes at a skill level
    pub fn impact_durability_damage(&self, skill_level: u32) -> u32 {
        1 + skill_level
            .checked_div(self.impact_increase_level)
            .unwrap_or(0)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bonus_damage_max_bonus == 0 || self.levels_per_bonus_point() == 0 {
            return Err(invalid(
                "axes.bonus_damage_max_bonus_level",
                self.bonus_damage_max_bonus_level,
                "at least bonus_damage_max_bonus, which must be non-zero",
            ));
        }
        if i32::try_from(self.bonus_damage_max_bonus).is_err() {
            return Err(invalid(
                "axes.bonus_damage_max_bonus",
                self.bonus_damage_max_bonus,
                "at most i32::MAX",
            ));
        }
        if self.critical_hit_max_bonus_level == 0 {
            return Err(invalid("axes.critical_hit_max_bonus_level", 0, "non-zero"));
        }
        if self.impact_increase_level == 0 {
            return Err(invalid("axes.impact_increase_level", 0, "non-zero"));
        }
        if self.skull_splitter_modifier <= 0 {
            return Err(invalid(
                "axes.skull_splitter_modifier",
                self.skull_splitter_modifier,
                "positive",
            ));
        }
        if self.greater_impact_bonus_damage < 0 {
            return Err(invalid(
                "axes.greater_impact_bonus_damage",
                self.greater_impact_bonus_damage,
                "non-negative",
            ));
        }

        for (field, value) in [
            ("axes.critical_hit_max_chance", self.critical_hit_max_chance),
            ("axes.impact_chance", self.impact_chance),
            ("axes.greater_impact_chance", self.greater_impact_chance),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(invalid(field, value, "a percentage between 0 and 100"));
            }
        }

        for (field, value) in [
            ("axes.critical_hit_pvp_modifier", self.critical_hit_pvp_modifier),
            ("axes.critical_hit_pve_modifier", self.critical_hit_pve_modifier),
        ] {
            if !value.is_finite() || value < 1.0 {
                return Err(invalid(field, value, "a multiplier of at least 1.0"));
            }
        }

        if !(0.0..=1.0).contains(&self.impact_max_durability_modifier) {
            return Err(invalid(
                "axes.impact_max_durability_modifier",
                self.impact_max_durability_modifier,
                "a fraction between 0 and 1",
            ));
        }
        if !self.greater_impact_knockback_multiplier.is_finite() {
            return Err(invalid(
                "axes.greater_impact_knockback_multiplier",
                self.greater_impact_knockback_multiplier,
                "a finite number",
            ));
        }

        Ok(())
    }
}

/// Ability duration tuning shared by all super abilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityConfig {
    /// Levels per extra second of ability duration
    pub length_increase_level: u32,
    /// Maximum ability duration in seconds (0 = unlimited)
    pub max_length: u32,
}

impl Default for AbilityConfig {
    fn default() -> Self {
        Self {
            length_increase_level: 50,
            max_length: 0,
        }
    }
}

/// A modded armor item registered by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomArmorEntry {
    pub id: String,
    pub durability: u16,
}

/// Modded item registrations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModsConfig {
    pub armor: Vec<CustomArmorEntry>,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    pub axes: AxesConfig,
    pub abilities: AbilityConfig,
    pub mods: ModsConfig,
}

impl SkillsConfig {
    /// Load configuration from defaults, an optional TOML file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(SkillsConfig::default()));

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }

        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Extract and validate from a prepared figment
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: SkillsConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check every tunable for values the rules cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.axes.validate()?;

        if self.abilities.length_increase_level == 0 {
            return Err(invalid("abilities.length_increase_level", 0, "non-zero"));
        }
        for entry in &self.mods.armor {
            if entry.id.trim().is_empty() {
                return Err(invalid("mods.armor.id", "\"\"", "a non-empty item id"));
            }
        }

        Ok(())
    }
}

fn invalid(field: &'static str, value: impl ToString, expected: &'static str) -> ConfigError {
    ConfigError::Invalid {
        field,
        value: value.to_string(),
        expected,
    }
}
