//! Player-facing output
//!
//! Rules never talk to clients directly. They hand chat lines and particle
//! effects to a [`Presenter`]; [`OutboundQueue`] collects them during the
//! combat callback so the host can deliver them afterwards.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::entity::{EntityId, PlayerId};

/// Visual effects the rules can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleEffect {
    /// Burst shown on a target knocked back by Greater Impact
    GreaterImpact,
}

impl fmt::Display for ParticleEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticleEffect::GreaterImpact => write!(f, "greater_impact"),
        }
    }
}

/// Delivers chat lines and effects
pub trait Presenter: Send + Sync {
    fn send_message(&self, player: &PlayerId, text: &str);

    fn play_effect(&self, effect: ParticleEffect, target: EntityId);
}

/// Output waiting for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// Chat line for one player
    Message { player: PlayerId, text: String },
    /// Effect rendered at an entity
    Effect {
        effect: ParticleEffect,
        target: EntityId,
    },
}

/// Queue of output generated while rules run
#[derive(Debug, Default)]
pub struct OutboundQueue {
    items: Mutex<Vec<Outbound>>,
}

impl OutboundQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap in Arc for sharing
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Take all queued output
    pub fn drain(&self) -> Vec<Outbound> {
        std::mem::take(&mut *self.items.lock())
    }

    /// Queued chat lines for one player, oldest first
    pub fn messages_for(&self, player: &PlayerId) -> Vec<String> {
        self.items
            .lock()
            .iter()
            .filter_map(|item| match item {
                Outbound::Message { player: p, text } if p == player => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Queued effects, oldest first
    pub fn effects(&self) -> Vec<(ParticleEffect, EntityId)> {
        self.items
            .lock()
            .iter()
            .filter_map(|item| match item {
                Outbound::Effect { effect, target } => Some((*effect, *target)),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}

impl Presenter for OutboundQueue {
    fn send_message(&self, player: &PlayerId, text: &str) {
        self.items.lock().push(Outbound::Message {
            player: *player,
            text: text.to_string(),
        });
    }

    fn play_effect(&self, effect: ParticleEffect, target: EntityId) {
        self.items.lock().push(Outbound::Effect { effect, target });
    }
}
