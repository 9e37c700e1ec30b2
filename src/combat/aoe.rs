//! Area-of-effect damage hand-off
//!
//! Splash abilities only decide how much damage each secondary target takes.
//! Finding nearby entities, skipping allies and applying the damage belongs
//! to the host's combat system behind [`AreaDamageApplier`].

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::entity::{EntityId, PlayerId};
use crate::skills::SkillType;

/// Applies ability splash damage around a primary target
pub trait AreaDamageApplier: Send + Sync {
    fn apply_ability_aoe(&self, attacker: &PlayerId, primary: EntityId, damage: i32, skill: SkillType);
}

/// One requested splash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AoeStrike {
    pub attacker: PlayerId,
    pub primary: EntityId,
    /// Damage for each secondary target
    pub damage: i32,
    pub skill: SkillType,
}

/// Collects splash requests for the host to resolve after the event
#[derive(Debug, Default)]
pub struct AoeQueue {
    strikes: Mutex<Vec<AoeStrike>>,
}

impl AoeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap in Arc for sharing
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Take all queued strikes
    pub fn drain(&self) -> Vec<AoeStrike> {
        std::mem::take(&mut *self.strikes.lock())
    }

    /// Copy of queued strikes
    pub fn strikes(&self) -> Vec<AoeStrike> {
        self.strikes.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.strikes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.strikes.lock().is_empty()
    }
}

impl AreaDamageApplier for AoeQueue {
    fn apply_ability_aoe(&self, attacker: &PlayerId, primary: EntityId, damage: i32, skill: SkillType) {
        debug!("{} splash around {} for {} ({})", attacker, primary, damage, skill);
        self.strikes.lock().push(AoeStrike {
            attacker: *attacker,
            primary,
            damage,
            skill,
        });
    }
}
