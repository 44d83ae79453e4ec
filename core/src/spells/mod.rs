//! Spell rule records and their resolution
//!
//! A [`SpellRecord`] describes one spell family: the canonical (max rank) id,
//! every lower rank id, and the timing/damage rules the analysis relies on.
//! Baseline records are immutable; [`SpellCatalog::resolve`] layers settings,
//! gear and haste adjustments into a fresh copy.

mod catalog;


use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shadowlog_types::Settings;

use crate::error::CatalogError;
use crate::game_data::AbilityId;

pub use catalog::SpellCatalog;

/// How a spell deals its damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    #[default]
    None,
    Direct,
    Dot,
    Channel,
    Aoe,
}

/// Settings-dependent adjustment evaluated at resolution time.
#[derive(Clone, Copy)]
pub struct SpellOverride(pub fn(&SpellRecord, &Settings) -> SpellPatch);

impl std::fmt::Debug for SpellOverride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SpellOverride(..)")
    }
}

/// Rules for one spell family.
#[derive(Debug, Clone, Serialize)]
pub struct SpellRecord {
    /// Highest rank id; the canonical id for the family
    pub main_id: AbilityId,
    /// Lower rank id -> rank (1-based)
    pub rank_ids: BTreeMap<AbilityId, u32>,
    /// Rank of `main_id`
    pub max_rank: u32,
    pub damage_type: DamageType,
    /// Secondary ids (e.g. channel ticks) whose damage belongs to this spell
    pub damage_ids: Vec<AbilityId>,
    pub base_cast_time: f64,
    pub max_damage_instances: u32,
    pub max_duration: f64,
    pub max_ticks: u32,
    pub base_tick_time: f64,
    pub cooldown: f64,
    pub can_crit: bool,
    /// Triggers the global cooldown
    pub gcd: bool,
    /// Tick interval (and so duration) scales with haste
    pub dot_haste: bool,
    /// Spell power is snapshotted per tick rather than at cast
    pub stats_by_tick: bool,
    pub multi_target: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_instances_per_damage_id: Option<BTreeMap<AbilityId, u32>>,
    #[serde(skip)]
    pub dynamic: Option<SpellOverride>,
}

impl SpellRecord {
    /// Record with the default rule set for `main_id`.
    pub fn base(main_id: AbilityId) -> Self {
        Self {
            main_id,
            rank_ids: BTreeMap::new(),
            max_rank: 1,
            damage_type: DamageType::None,
            damage_ids: Vec::new(),
            base_cast_time: 0.0,
            max_damage_instances: 0,
            max_duration: 0.0,
            max_ticks: 0,
            base_tick_time: 0.0,
            cooldown: 0.0,
            can_crit: true,
            gcd: true,
            dot_haste: false,
            stats_by_tick: false,
            multi_target: false,
            max_instances_per_damage_id: None,
            dynamic: None,
        }
    }

    /// Main id followed by every rank id.
    pub fn ids(&self) -> impl Iterator<Item = AbilityId> + '_ {
        std::iter::once(self.main_id).chain(self.rank_ids.keys().copied())
    }

    /// Rank of `id` within this family.
    pub fn rank_of(&self, id: AbilityId) -> Result<u32, CatalogError> {
        if id == self.main_id {
            return Ok(self.max_rank);
        }
        self.rank_ids
            .get(&id)
            .copied()
            .ok_or(CatalogError::RankNotFound {
                id,
                main_id: self.main_id,
            })
    }

    /// Merge every field set in `patch` over this record.
    pub fn apply(&mut self, patch: &SpellPatch) {
        macro_rules! merge {
            ($target:expr, $patch:expr; $($field:ident),+ $(,)?) => {
                $(if let Some(value) = &$patch.$field {
                    $target.$field = value.clone();
                })+
            };
        }

        merge!(self, patch;
            damage_type,
            damage_ids,
            base_cast_time,
            max_damage_instances,
            max_duration,
            max_ticks,
            base_tick_time,
            cooldown,
            can_crit,
            gcd,
            dot_haste,
            stats_by_tick,
            multi_target,
        );
        if let Some(caps) = &patch.max_instances_per_damage_id {
            self.max_instances_per_damage_id = Some(caps.clone());
        }
    }

    pub fn is_dot(&self) -> bool {
        self.damage_type == DamageType::Dot
    }
}

/// Partial spell record. Only fields that are `Some` override the target.
///
/// Gear bonuses arrive in this shape from item analysis, keyed by main id.
/// Identity fields (ids, ranks) cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpellPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<DamageType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_ids: Option<Vec<AbilityId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_cast_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_damage_instances: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ticks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_tick_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_crit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcd: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_haste: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats_by_tick: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_target: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_instances_per_damage_id: Option<BTreeMap<AbilityId, u32>>,
}

impl SpellPatch {
    /// Check if this patch overrides nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
