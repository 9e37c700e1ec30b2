//! Permission gating for Axes abilities
//!
//! Every ability is guarded by a capability node. The host resolves nodes
//! through [`PermissionOracle`]; [`PermissionTable`] is an in-memory oracle
//! with per-player grants layered over a default set.
//!
//! Check order (first match wins):
//! 1. Explicit revoke for the player → Denied
//! 2. Explicit grant for the player → Allowed
//! 3. Default set contains the capability → Allowed
//! 4. Denied

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::PlayerId;

/// Permission-checked Axes capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Axe mastery bonus damage
    BonusDamage,
    /// Critical hits
    CriticalStrikes,
    /// Armor durability damage
    ArmorImpact,
    /// Knockback against unarmored targets
    GreaterImpact,
    /// Skull Splitter super ability
    SkullSplitter,
    /// Better activation odds
    Lucky,
}

impl Capability {
    pub fn all() -> &'static [Capability] {
        &[
            Capability::BonusDamage,
            Capability::CriticalStrikes,
            Capability::ArmorImpact,
            Capability::GreaterImpact,
            Capability::SkullSplitter,
            Capability::Lucky,
        ]
    }

    /// Permission node string
    pub fn node(&self) -> &'static str {
        match self {
            Capability::BonusDamage => "skills.axes.bonusdamage",
            Capability::CriticalStrikes => "skills.axes.criticalstrikes",
            Capability::ArmorImpact => "skills.axes.impact",
            Capability::GreaterImpact => "skills.axes.greaterimpact",
            Capability::SkullSplitter => "skills.axes.skullsplitter",
            Capability::Lucky => "skills.axes.lucky",
        }
    }

    /// Capabilities every player gets unless revoked (everything but perks)
    pub fn player_defaults() -> HashSet<Capability> {
        Self::all()
            .iter()
            .copied()
            .filter(|c| *c != Capability::Lucky)
            .collect()
    }
}

impl FromStr for Capability {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        Capability::all()
            .iter()
            .copied()
            .find(|c| c.node() == s)
            .ok_or(())
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.node())
    }
}

/// Resolves whether a player holds a capability
pub trait PermissionOracle: Send + Sync {
    fn has_permission(&self, player: &PlayerId, capability: Capability) -> bool;
}

#[derive(Debug, Default)]
struct PlayerGrants {
    granted: HashSet<Capability>,
    revoked: HashSet<Capability>,
}

/// In-memory permission table
#[derive(Debug, Default)]
pub struct PermissionTable {
    defaults: HashSet<Capability>,
    players: RwLock<HashMap<PlayerId, PlayerGrants>>,
}

impl PermissionTable {
    /// Create a table with no default capabilities
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table where every player holds [`Capability::player_defaults`]
    pub fn with_player_defaults() -> Self {
        Self {
            defaults: Capability::player_defaults(),
            players: RwLock::new(HashMap::new()),
        }
    }

    /// Wrap in Arc for sharing
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Grant a capability, clearing any revoke
    pub fn grant(&self, player: &PlayerId, capability: Capability) {
        let mut players = self.players.write();
        let entry = players.entry(*player).or_default();
        entry.revoked.remove(&capability);
        entry.granted.insert(capability);
    }

    /// Grant every capability, perks included
    pub fn grant_all(&self, player: &PlayerId) {
        for capability in Capability::all() {
            self.grant(player, *capability);
        }
    }

    /// Revoke a capability, overriding defaults
    pub fn revoke(&self, player: &PlayerId, capability: Capability) {
        let mut players = self.players.write();
        let entry = players.entry(*player).or_default();
        entry.granted.remove(&capability);
        entry.revoked.insert(capability);
    }

    /// Drop all per-player overrides
    pub fn clear(&self, player: &PlayerId) {
        self.players.write().remove(player);
    }
}

impl PermissionOracle for PermissionTable {
    fn has_permission(&self, player: &PlayerId, capability: Capability) -> bool {
        let allowed = match self.players.read().get(player) {
            Some(grants) if grants.revoked.contains(&capability) => false,
            Some(grants) if grants.granted.contains(&capability) => true,
            _ => self.defaults.contains(&capability),
        };

        if !allowed {
            debug!("{} lacks {}", player, capability);
        }
        allowed
    }
}
