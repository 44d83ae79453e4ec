//! Inputs supplied by the analysis pipeline
//!
//! The resolvers never parse logs themselves. Everything they know about a
//! player arrives through these types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shadowlog_types::Settings;

use crate::error::ConfigError;
use crate::game_data::AbilityId;
use crate::settings::validate_settings;
use crate::spells::SpellPatch;

/// Equipped-item facts for the analyzed player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActorInfo {
    /// Spell overrides from set bonuses and similar, keyed by spell main id
    #[serde(default)]
    pub bonuses: HashMap<AbilityId, SpellPatch>,
}

/// Per-player context for spell resolution.
///
/// Construction validates the settings, so a context always holds settings
/// the resolvers can use.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    settings: Settings,
    actor: Option<ActorInfo>,
}

impl AnalysisContext {
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        validate_settings(&settings)?;
        Ok(Self {
            settings,
            actor: None,
        })
    }

    /// Attach gear information for the player.
    pub fn with_actor(mut self, actor: ActorInfo) -> Self {
        self.actor = Some(actor);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn actor(&self) -> Option<&ActorInfo> {
        self.actor.as_ref()
    }

    /// Gear bonus patch for a spell family, if the player has one.
    pub fn gear_bonus(&self, main_id: AbilityId) -> Option<&SpellPatch> {
        self.actor.as_ref()?.bonuses.get(&main_id)
    }
}

/// Aggregate facts derived from one player's processed log.
///
/// Buff inference reads these instead of individual events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSignal {
    /// Party had a wrath of air totem down (not logged per recipient)
    #[serde(default)]
    pub apply_wrath_of_air: bool,
    /// Observed haste not explained by logged buffs or gear, as a fraction
    #[serde(default)]
    pub unexplained_haste: Option<f64>,
}

/// A buff apply/refresh event as reported by the log.
#[derive(Debug, Clone, PartialEq)]
pub struct BuffEvent {
    /// Canonical aura id
    pub ability_id: AbilityId,
    pub name: String,
    /// Stack count if the event reported one
    pub stack: Option<u32>,
}

impl BuffEvent {
    pub fn new(ability_id: AbilityId, name: impl Into<String>) -> Self {
        Self {
            ability_id,
            name: name.into(),
            stack: None,
        }
    }

    pub fn with_stack(mut self, stack: u32) -> Self {
        self.stack = Some(stack);
        self
    }
}
