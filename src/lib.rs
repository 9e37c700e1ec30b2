//! skillrules - skill ability rules for RPG-style game servers
//!
//! Rules for the Axes skill: axe mastery bonus damage, critical hits, armor
//! impact, greater impact knockback and Skull Splitter splash damage. The host
//! engine owns entities, profiles and permissions; this crate consumes them
//! through the collaborator traits bundled in [`skills::SkillContext`].

pub mod combat;
pub mod config;
pub mod entity;
pub mod locale;
pub mod permissions;
pub mod presentation;
pub mod profile;
pub mod skills;

pub use config::{AxesConfig, ConfigError, SkillsConfig};
pub use entity::{Actor, Creature, EntityId, ItemStack, LivingEntity, PlayerId};
pub use locale::Locale;
pub use skills::axes::{AxesHit, AxesManager, AxesStats};
pub use skills::{SkillContext, SkillManager, SkillType};
