//! Localized text
//!
//! Messages are looked up by dotted keys. English strings are built in;
//! a JSON object of `key -> text` can override or extend them. Placeholders
//! `{0}`, `{1}`, ... are filled positionally by [`Locale::format`].

use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;

use thiserror::Error;
use tracing::info;

/// Critical hit landed (to attacker)
pub const CRITICAL_HIT: &str = "Axes.Combat.CriticalHit";
/// Critical hit received (to a player target)
pub const CRITICAL_STRUCK: &str = "Axes.Combat.CritStruck";
/// Greater impact triggered (to attacker)
pub const GREATER_IMPACT_PROC: &str = "Axes.Combat.GI.Proc";
/// Greater impact received (to a player target)
pub const GREATER_IMPACT_STRUCK: &str = "Axes.Combat.GI.Struck";

pub const STATS_HEADER: &str = "Axes.Stats.Header";
pub const STATS_AXE_MASTERY: &str = "Axes.Stats.AxeMastery";
pub const STATS_CRIT_CHANCE: &str = "Axes.Stats.CritChance";
pub const STATS_CRIT_LUCKY: &str = "Axes.Stats.CritChanceLucky";
pub const STATS_IMPACT: &str = "Axes.Stats.Impact";
pub const STATS_GREATER_IMPACT: &str = "Axes.Stats.GreaterImpact";
pub const STATS_GREATER_IMPACT_LUCKY: &str = "Axes.Stats.GreaterImpactLucky";
pub const STATS_SKULL_SPLITTER: &str = "Axes.Stats.SkullSplitter";

const ENGLISH: &[(&str, &str)] = &[
    (CRITICAL_HIT, "CRITICAL HIT!"),
    (CRITICAL_STRUCK, "You were CRITICALLY hit!"),
    (GREATER_IMPACT_PROC, "**STRUCK WITH GREAT FORCE**"),
    (GREATER_IMPACT_STRUCK, "**HIT BY GREATER IMPACT**"),
    (STATS_HEADER, "Axes (level {0})"),
    (STATS_AXE_MASTERY, "Axe Mastery: +{0} bonus damage"),
    (STATS_CRIT_CHANCE, "Critical Strikes chance: {0}%"),
    (STATS_CRIT_LUCKY, "Critical Strikes chance (lucky): {0}%"),
    (STATS_IMPACT, "Armor Impact: {0} durability damage"),
    (STATS_GREATER_IMPACT, "Greater Impact chance: {0}%"),
    (STATS_GREATER_IMPACT_LUCKY, "Greater Impact chance (lucky): {0}%"),
    (STATS_SKULL_SPLITTER, "Skull Splitter length: {0}s"),
];

/// Errors loading a locale bundle
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("failed to read locale bundle: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed locale bundle: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Message table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    strings: HashMap<String, String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl Locale {
    /// Built-in English strings
    pub fn english() -> Self {
        Self {
            strings: ENGLISH
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// English strings overlaid with a JSON bundle from disk
    pub fn with_overrides(path: &Path) -> Result<Self, LocaleError> {
        let raw = std::fs::read_to_string(path)?;
        let mut locale = Self::english();
        let count = locale.merge_json(&raw)?;
        info!("Loaded {} locale strings from {}", count, path.display());
        Ok(locale)
    }

    /// Overlay strings from a JSON object. Returns how many were applied.
    pub fn merge_json(&mut self, raw: &str) -> Result<usize, LocaleError> {
        let overrides: HashMap<String, String> = serde_json::from_str(raw)?;
        let count = overrides.len();
        self.strings.extend(overrides);
        Ok(count)
    }

    /// Set a single string
    pub fn set(&mut self, key: &str, text: &str) {
        self.strings.insert(key.to_string(), text.to_string());
    }

    /// Text for a key; unknown keys render as `!key!` so they stand out
    pub fn get(&self, key: &str) -> String {
        match self.strings.get(key) {
            Some(text) => text.clone(),
            None => format!("!{}!", key),
        }
    }

    /// Text for a key with `{n}` placeholders filled in
    pub fn format(&self, key: &str, args: &[&dyn Display]) -> String {
        let mut text = self.get(key);
        for (i, arg) in args.iter().enumerate() {
            text = text.replace(&format!("{{{}}}", i), &arg.to_string());
        }
        text
    }
}
