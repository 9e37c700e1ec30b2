//! Combat system hand-offs
//!
//! Ability rules compute damage; the host applies it. This module holds the
//! seam for damage that spreads beyond the primary target.

mod aoe;

pub use aoe::{AoeQueue, AoeStrike, AreaDamageApplier};
