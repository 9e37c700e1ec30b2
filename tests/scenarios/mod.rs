//! Scenario tests for Axes
//!
//! - Gates: permission, validity and armor gating
//! - Critical hit: PvP/PvE multipliers and messages
//! - Impact: per-piece armor wear
//! - Greater impact: knockback, bonus damage, notifications
//! - Skull splitter: splash hand-off
//! - Pipeline: the whole hit resolved in combat order

mod gates;
mod impact;
mod pipeline;
