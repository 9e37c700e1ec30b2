//! Axes skill
//!
//! Abilities:
//! - Axe Mastery: flat bonus damage that grows with level
//! - Critical Strikes: chance to multiply damage
//! - Armor Impact: wears down each armor piece the target has on
//! - Greater Impact: knockback and bonus damage against unarmored targets
//! - Skull Splitter: super ability splashing damage around the target

mod manager;
mod stats;

pub use manager::{axe_mastery_bonus, impact_durability_increment, AxesHit, AxesManager};
pub use stats::AxesStats;

use crate::entity::{CustomArmorTable, LivingEntity};

/// Whether the target wears at least one piece of armor
pub fn has_armor(target: &dyn LivingEntity, custom: &CustomArmorTable) -> bool {
    target
        .armor_contents()
        .iter()
        .flatten()
        .any(|item| item.is_armor(custom))
}
