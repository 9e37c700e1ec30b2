//! Axes statistics for a skill level
//!
//! The numbers a player sees when inspecting their Axes skill.

use serde::Serialize;

use super::manager::axe_mastery_bonus;
use crate::config::SkillsConfig;
use crate::entity::PlayerId;
use crate::locale::{self, Locale};
use crate::skills::{ActivationChance, ActivationRoll, SkillType};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxesStats {
    pub level: u32,
    pub axe_mastery_bonus: u32,
    /// Percent
    pub critical_hit_chance: f64,
    /// Percent with the lucky perk, when the player has it
    pub critical_hit_lucky_chance: Option<f64>,
    /// Durability points per successful impact, before unbreaking
    pub impact_durability_damage: u32,
    /// Percent
    pub greater_impact_chance: f64,
    pub greater_impact_lucky_chance: Option<f64>,
    pub skull_splitter_seconds: u32,
}

impl AxesStats {
    pub fn at_level(config: &SkillsConfig, level: u32, lucky: bool) -> Self {
        let axes = &config.axes;
        let critical = ActivationChance::Scaled {
            max_chance: axes.critical_hit_max_chance,
            max_bonus_level: axes.critical_hit_max_bonus_level,
        };
        let greater_impact = ActivationChance::Fixed {
            chance: axes.greater_impact_chance,
        };

        let percent = |chance: ActivationChance, lucky: bool| {
            ActivationRoll {
                player: PlayerId::default(),
                skill: SkillType::Axes,
                skill_level: level,
                chance,
                lucky,
            }
            .success_percent()
        };

        let mut skull_splitter_seconds = 2 + level
            .checked_div(config.abilities.length_increase_level)
            .unwrap_or(0);
        if config.abilities.max_length != 0 {
            skull_splitter_seconds = skull_splitter_seconds.min(config.abilities.max_length);
        }

        Self {
            level,
            axe_mastery_bonus: axe_mastery_bonus(axes, level),
            critical_hit_chance: percent(critical, false),
            critical_hit_lucky_chance: lucky.then(|| percent(critical, true)),
            impact_durability_damage: axes.impact_durability_damage(level),
            greater_impact_chance: percent(greater_impact, false),
            greater_impact_lucky_chance: lucky.then(|| percent(greater_impact, true)),
            skull_splitter_seconds,
        }
    }

    /// Localized display lines
    pub fn lines(&self, locale: &Locale) -> Vec<String> {
        let pct = |value: f64| format!("{:.2}", value);

        let mut lines = vec![
            locale.format(locale::STATS_HEADER, &[&self.level]),
            locale.format(locale::STATS_AXE_MASTERY, &[&self.axe_mastery_bonus]),
            locale.format(locale::STATS_CRIT_CHANCE, &[&pct(self.critical_hit_chance)]),
        ];
        if let Some(lucky) = self.critical_hit_lucky_chance {
            lines.push(locale.format(locale::STATS_CRIT_LUCKY, &[&pct(lucky)]));
        }
        lines.push(locale.format(locale::STATS_IMPACT, &[&self.impact_durability_damage]));
        lines.push(locale.format(
            locale::STATS_GREATER_IMPACT,
            &[&pct(self.greater_impact_chance)],
        ));
        if let Some(lucky) = self.greater_impact_lucky_chance {
            lines.push(locale.format(locale::STATS_GREATER_IMPACT_LUCKY, &[&pct(lucky)]));
        }
        lines.push(locale.format(
            locale::STATS_SKULL_SPLITTER,
            &[&self.skull_splitter_seconds],
        ));
        lines
    }
}
