//! Ability activation rolls
//!
//! An activation succeeds when the chance (in percent) beats a uniform
//! integer draw from `0..range`. The range is 100, or 75 for lucky players,
//! which stretches every chance by a third.
//!
//! Chances come in two shapes:
//! - Scaled: grows linearly with skill level up to `max_chance` at `max_bonus_level`
//! - Fixed: the same chance at every level

use std::collections::VecDeque;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::SkillType;
use crate::entity::PlayerId;

/// Draw range for ordinary players
pub const ACTIVATION_RANGE: u32 = 100;

/// Draw range for players with the lucky perk
pub const LUCKY_ACTIVATION_RANGE: u32 = 75;

/// How an ability's chance depends on skill level
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivationChance {
    Scaled { max_chance: f64, max_bonus_level: u32 },
    Fixed { chance: f64 },
}

impl ActivationChance {
    /// Chance in percent at a skill level
    pub fn chance_at(&self, skill_level: u32) -> f64 {
        match *self {
            ActivationChance::Scaled {
                max_chance,
                max_bonus_level,
            } => {
                if max_bonus_level == 0 {
                    return max_chance;
                }
                let level = skill_level.min(max_bonus_level);
                (max_chance / max_bonus_level as f64) * level as f64
            }
            ActivationChance::Fixed { chance } => chance,
        }
    }
}

/// Everything an oracle needs to decide one activation
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationRoll {
    pub player: PlayerId,
    pub skill: SkillType,
    pub skill_level: u32,
    pub chance: ActivationChance,
    pub lucky: bool,
}

impl ActivationRoll {
    /// Chance in percent for this roll's level
    pub fn chance(&self) -> f64 {
        self.chance.chance_at(self.skill_level)
    }

    /// Size of the uniform draw
    pub fn range(&self) -> u32 {
        if self.lucky {
            LUCKY_ACTIVATION_RANGE
        } else {
            ACTIVATION_RANGE
        }
    }

    /// Probability of success in percent, capped at 100
    pub fn success_percent(&self) -> f64 {
        (self.chance() / self.range() as f64 * 100.0).min(100.0)
    }
}

/// Decides whether an ability activates
pub trait ActivationOracle: Send + Sync {
    fn roll(&self, roll: &ActivationRoll) -> bool;
}

/// Activation backed by a random number generator
#[derive(Debug)]
pub struct RandomActivation {
    rng: Mutex<StdRng>,
}

impl RandomActivation {
    /// Seed from the operating system
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic sequence for replays and tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomActivation {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivationOracle for RandomActivation {
    fn roll(&self, roll: &ActivationRoll) -> bool {
        let draw = self.rng.lock().random_range(0..roll.range());
        roll.chance() > draw as f64
    }
}

/// Replays a fixed list of outcomes, then a fallback
#[derive(Debug)]
pub struct ScriptedActivation {
    outcomes: Mutex<VecDeque<bool>>,
    fallback: bool,
    history: Mutex<Vec<ActivationRoll>>,
}

impl ScriptedActivation {
    /// Replay `outcomes` in order, failing once they run out
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            fallback: false,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Every roll returns `outcome`
    pub fn always(outcome: bool) -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            fallback: outcome,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Rolls requested so far
    pub fn history(&self) -> Vec<ActivationRoll> {
        self.history.lock().clone()
    }

    /// Scripted outcomes not yet consumed
    pub fn remaining(&self) -> usize {
        self.outcomes.lock().len()
    }
}

impl ActivationOracle for ScriptedActivation {
    fn roll(&self, roll: &ActivationRoll) -> bool {
        self.history.lock().push(roll.clone());
        self.outcomes.lock().pop_front().unwrap_or(self.fallback)
    }
}
