//! Axes ability rules
//!
//! Gate predicates never touch state. Effect checks assume their gate
//! already passed; [`AxesManager::resolve_hit`] runs gates and effects in
//! combat order for hosts that want the whole pipeline.

use tracing::debug;

use super::has_armor;
use crate::config::AxesConfig;
use crate::entity::{Actor, LivingEntity};
use crate::locale;
use crate::permissions::Capability;
use crate::presentation::ParticleEffect;
use crate::skills::{
    AbilityType, ActivationChance, SkillContext, SkillManager, SkillType, ToolType,
};

/// What happened during one melee hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxesHit {
    /// Final damage for the primary target
    pub damage: i32,
    /// Axe is readied and Skull Splitter may be started by the host
    pub ability_ready: bool,
    pub critical: bool,
    /// Impact was attempted against worn armor
    pub impact: bool,
    pub greater_impact: bool,
    pub skull_splitter: bool,
}

/// Axes rules for one acting player
pub struct AxesManager<'a> {
    player: &'a Actor,
    context: &'a SkillContext,
}

impl<'a> SkillManager for AxesManager<'a> {
    fn player(&self) -> &Actor {
        self.player
    }

    fn skill(&self) -> SkillType {
        SkillType::Axes
    }

    fn context(&self) -> &SkillContext {
        self.context
    }
}

impl<'a> AxesManager<'a> {
    pub fn new(player: &'a Actor, context: &'a SkillContext) -> Self {
        Self { player, context }
    }

    fn config(&self) -> &AxesConfig {
        &self.context.config.axes
    }

    pub fn can_use_axe_mastery(&self) -> bool {
        self.has_permission(Capability::BonusDamage)
    }

    pub fn can_critical_hit(&self, target: &dyn LivingEntity) -> bool {
        target.is_valid() && self.has_permission(Capability::CriticalStrikes)
    }

    pub fn can_impact(&self, target: &dyn LivingEntity) -> bool {
        target.is_valid()
            && self.has_permission(Capability::ArmorImpact)
            && has_armor(target, self.context.custom_armor())
    }

    pub fn can_greater_impact(&self, target: &dyn LivingEntity) -> bool {
        target.is_valid()
            && self.has_permission(Capability::GreaterImpact)
            && !has_armor(target, self.context.custom_armor())
    }

    pub fn can_use_skull_splitter(&self, target: &dyn LivingEntity) -> bool {
        target.is_valid()
            && self.ability_active(AbilityType::SkullSplitter)
            && self.has_permission(Capability::SkullSplitter)
    }

    /// Whether a readied axe may start Skull Splitter
    pub fn can_activate_ability(&self) -> bool {
        self.tool_prepared(ToolType::Axe) && self.has_permission(Capability::SkullSplitter)
    }

    /// Add the axe mastery bonus
    pub fn axe_mastery_check(&self, damage: i32) -> i32 {
        let bonus = i32::try_from(self.axe_mastery_bonus()).unwrap_or(i32::MAX);
        damage.saturating_add(bonus)
    }

    /// Axe mastery bonus at the player's current level
    pub fn axe_mastery_bonus(&self) -> u32 {
        axe_mastery_bonus(self.config(), self.skill_level())
    }

    /// Roll a critical hit; returns the multiplied damage on success
    pub fn critical_hit_check(&self, target: &dyn LivingEntity, damage: i32) -> i32 {
        self.roll_critical_hit(target, damage).unwrap_or(damage)
    }

    fn roll_critical_hit(&self, target: &dyn LivingEntity, damage: i32) -> Option<i32> {
        let config = self.config();
        let chance = ActivationChance::Scaled {
            max_chance: config.critical_hit_max_chance,
            max_bonus_level: config.critical_hit_max_bonus_level,
        };
        if !self.activation_successful(chance) {
            return None;
        }

        self.notify_player(locale::CRITICAL_HIT);

        let modifier = match target.as_player() {
            Some(defender) => {
                let text = self.context.locale.get(locale::CRITICAL_STRUCK);
                self.context.presenter.send_message(&defender, &text);
                config.critical_hit_pvp_modifier
            }
            None => config.critical_hit_pve_modifier,
        };

        let critical = (damage as f64 * modifier) as i32;
        debug!(
            "{} critical hit on {}: {} -> {}",
            self.player.name(),
            target.entity_id(),
            damage,
            critical
        );
        Some(critical)
    }

    /// Damage each worn armor piece that passes its own impact roll
    pub fn impact_check(&self, target: &mut dyn LivingEntity) {
        let config = self.config();
        let durability_damage = config.impact_durability_damage(self.skill_level());
        let chance = ActivationChance::Fixed {
            chance: config.impact_chance,
        };
        let custom = self.context.custom_armor();
        let entity = target.entity_id();

        for armor in target.armor_contents_mut().iter_mut().flatten() {
            if !armor.is_armor(custom) || !self.activation_successful(chance) {
                continue;
            }

            let increment = impact_durability_increment(
                durability_damage,
                armor.unbreaking,
                armor.max_durability(custom),
                config.impact_max_durability_modifier,
            );
            let before = armor.durability;
            // Float-to-int casts saturate, so wear pins at u16::MAX
            armor.durability = (increment + before as f64) as u16;

            debug!(
                "Impact on {} {}: durability {} -> {}",
                entity, armor.kind, before, armor.durability
            );
        }
    }

    /// Roll greater impact; knocks the target back and adds bonus damage
    pub fn greater_impact_check(&self, target: &mut dyn LivingEntity, damage: i32) -> i32 {
        self.roll_greater_impact(target, damage).unwrap_or(damage)
    }

    fn roll_greater_impact(&self, target: &mut dyn LivingEntity, damage: i32) -> Option<i32> {
        let config = self.config();
        let chance = ActivationChance::Fixed {
            chance: config.greater_impact_chance,
        };
        if !self.activation_successful(chance) {
            return None;
        }

        let entity = target.entity_id();
        self.context
            .presenter
            .play_effect(ParticleEffect::GreaterImpact, entity);

        let knockback =
            self.player.direction().normalize_or_zero() * config.greater_impact_knockback_multiplier;
        target.set_velocity(knockback);

        if self.notifications_enabled() {
            self.notify_player(locale::GREATER_IMPACT_PROC);
        }

        if let Some(defender) = target.as_player() {
            if self.context.profiles.notifications_enabled(&defender) {
                let text = self.context.locale.get(locale::GREATER_IMPACT_STRUCK);
                self.context.presenter.send_message(&defender, &text);
            }
        }

        debug!(
            "{} greater impact on {}, knockback {:?}",
            self.player.name(),
            entity,
            knockback
        );
        Some(damage.saturating_add(config.greater_impact_bonus_damage))
    }

    /// Splash a share of the damage to entities around the target
    pub fn skull_splitter_check(&self, target: &dyn LivingEntity, damage: i32) {
        let splash = damage
            .checked_div(self.config().skull_splitter_modifier)
            .unwrap_or(0);
        self.context.combat.apply_ability_aoe(
            self.player.id(),
            target.entity_id(),
            splash,
            SkillType::Axes,
        );
    }

    /// Run every Axes rule for one melee hit, each behind its gate
    pub fn resolve_hit(&self, target: &mut dyn LivingEntity, damage: i32) -> AxesHit {
        let mut hit = AxesHit {
            damage,
            ability_ready: self.can_activate_ability(),
            critical: false,
            impact: false,
            greater_impact: false,
            skull_splitter: false,
        };

        if self.can_use_axe_mastery() {
            hit.damage = self.axe_mastery_check(hit.damage);
        }

        if self.can_critical_hit(target) {
            if let Some(damage) = self.roll_critical_hit(target, hit.damage) {
                hit.damage = damage;
                hit.critical = true;
            }
        }

        if self.can_impact(target) {
            self.impact_check(target);
            hit.impact = true;
        } else if self.can_greater_impact(target) {
            if let Some(damage) = self.roll_greater_impact(target, hit.damage) {
                hit.damage = damage;
                hit.greater_impact = true;
            }
        }

        if self.can_use_skull_splitter(target) {
            self.skull_splitter_check(target, hit.damage);
            hit.skull_splitter = true;
        }

        hit
    }
}

/// Axe mastery bonus at a skill level
pub fn axe_mastery_bonus(config: &AxesConfig, skill_level: u32) -> u32 {
    skill_level
        .checked_div(config.levels_per_bonus_point())
        .unwrap_or(0)
        .min(config.bonus_damage_max_bonus)
}

/// Durability added to one armor piece by a successful impact
///
/// The unbreaking enchantment divides the damage by `level + 1`, and a single
/// impact never removes more than `max_modifier` of the item's max durability.
pub fn impact_durability_increment(
    durability_damage: u32,
    unbreaking: u32,
    max_durability: u16,
    max_modifier: f64,
) -> f64 {
    let modifier = 1.0 / (unbreaking as f64 + 1.0);
    let modified = durability_damage as f64 * modifier;
    let cap = max_durability as f64 * max_modifier;

    modified.min(cap)
}
