//! Shared configuration types for shadowlog
//!
//! This crate contains serializable configuration types that are shared between
//! the resolution engine (shadowlog-core) and the interactive front end.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─────────────────────────────────────────────────────────────────────────────
// Player Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Highest rank of the Improved Mind Blast talent.
pub const MAX_IMPROVED_MIND_BLAST: u8 = 5;

fn default_improved_mind_blast() -> u8 {
    MAX_IMPROVED_MIND_BLAST
}

/// Per-player talent and gear choices that are not visible in the combat log.
///
/// `improved_mind_blast` has no serde default on purpose: a settings file that
/// omits it is malformed and is rejected when loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Haste rating from gear, or None when unknown.
    pub haste_rating: Option<f64>,

    /// Points in Improved Mind Blast (0-5)
    pub improved_mind_blast: u8,

    /// A raid moonkin has the improved aura talent.
    #[serde(default)]
    pub improved_moonkin_aura: bool,

    /// A raid paladin has the improved retribution aura talent.
    #[serde(default)]
    pub improved_retribution_aura: bool,

    /// Aura ids the player is known to have for the whole fight.
    #[serde(default)]
    pub auras: Vec<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            haste_rating: None,
            improved_mind_blast: default_improved_mind_blast(),
            improved_moonkin_aura: false,
            improved_retribution_aura: false,
            auras: Vec::new(),
        }
    }
}

impl Settings {
    /// Returns true if the aura is in the configured aura list.
    pub fn have_aura(&self, id: u64) -> bool {
        self.auras.contains(&id)
    }

    /// Compare two settings, treating the aura list as a set.
    pub fn same_as(&self, other: &Settings) -> bool {
        self.haste_rating == other.haste_rating
            && self.improved_mind_blast == other.improved_mind_blast
            && self.improved_moonkin_aura == other.improved_moonkin_aura
            && self.improved_retribution_aura == other.improved_retribution_aura
            && self.auras.len() == other.auras.len()
            && self.auras.iter().all(|id| other.auras.contains(id))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Config
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level application configuration persisted by the front end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Settings used for players without their own entry.
    #[serde(default)]
    pub default_settings: Settings,

    /// Settings keyed by player name.
    #[serde(default)]
    pub players: HashMap<String, Settings>,

    /// Player selected when the REPL starts.
    #[serde(default)]
    pub active_player: Option<String>,
}

impl AppConfig {
    /// Settings for a player, falling back to the defaults.
    pub fn settings_for(&self, player: &str) -> &Settings {
        self.players.get(player).unwrap_or(&self.default_settings)
    }

    /// Settings for the active player, if any, else the defaults.
    pub fn active_settings(&self) -> &Settings {
        match &self.active_player {
            Some(name) => self.settings_for(name),
            None => &self.default_settings,
        }
    }
}
