//! Buff and debuff rule records
//!
//! Buff records carry the haste contribution of an aura, how it starts, what
//! it does not stack with, and whether it can be inferred for a player when
//! the log does not report it.

mod catalog;
mod inference;

#[cfg(test)]
mod catalog_tests;
#[cfg(test)]
mod inference_tests;

use serde::{Deserialize, Serialize};
use shadowlog_types::Settings;

use crate::context::{AnalysisSignal, BuffEvent};
use crate::game_data::AbilityId;

pub use catalog::BuffCatalog;
pub use inference::{InferenceWindow, infer_buffs};

/// How a buff effect begins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuffTrigger {
    /// Applied when a cast finishes
    CastEnd,
    /// Applied by using an item or ability
    OnUse,
    /// Applied by someone else
    #[default]
    External,
}

/// Whether a buff can be assumed present without a logged apply event.
#[derive(Clone, Copy)]
pub enum Inference {
    Constant(bool),
    /// Boolean fact from the analysis signal
    Predicate(fn(&AnalysisSignal) -> bool),
    /// Continuous value compared against the record's thresholds
    Measured(fn(&AnalysisSignal) -> Option<f64>),
}

impl Default for Inference {
    fn default() -> Self {
        Self::Constant(false)
    }
}

impl std::fmt::Debug for Inference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "Constant({value})"),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Measured(_) => f.write_str("Measured(..)"),
        }
    }
}

/// Hysteresis bounds for measured inference.
///
/// A buff becomes present above `add` and stays present until the value
/// drops below `remove`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InferenceThresholds {
    pub add: f64,
    pub remove: f64,
}

/// Event/settings dependent adjustment evaluated at resolution time.
#[derive(Clone, Copy)]
pub struct BuffOverride(pub fn(&BuffRecord, &BuffEvent, &Settings) -> BuffPatch);

impl std::fmt::Debug for BuffOverride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BuffOverride(..)")
    }
}

/// Rules for one aura.
#[derive(Debug, Clone, Serialize)]
pub struct BuffRecord {
    pub id: AbilityId,
    pub name: String,
    pub debuff: bool,
    /// Percentage haste as a fraction (0.3 = 30%)
    pub haste: f64,
    /// Flat haste rating
    pub haste_rating: f64,
    pub trigger: BuffTrigger,
    /// Auras this one does not stack with. Not necessarily symmetric.
    pub does_not_stack_with: Vec<AbilityId>,
    pub summary_icon: bool,
    pub details_icon: bool,
    pub stack: u32,
    pub max_stack: u32,
    #[serde(skip)]
    pub infer: Inference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inference_thresholds: Option<InferenceThresholds>,
    #[serde(skip)]
    pub dynamic: Option<BuffOverride>,
}

impl BuffRecord {
    /// Record with the default rule set.
    pub fn base(id: AbilityId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            debuff: false,
            haste: 0.0,
            haste_rating: 0.0,
            trigger: BuffTrigger::External,
            does_not_stack_with: Vec::new(),
            summary_icon: false,
            details_icon: true,
            stack: 0,
            max_stack: 0,
            infer: Inference::Constant(false),
            inference_thresholds: None,
            dynamic: None,
        }
    }

    /// Merge every field set in `patch` over this record.
    pub fn apply(&mut self, patch: &BuffPatch) {
        macro_rules! merge {
            ($target:expr, $patch:expr; $($field:ident),+ $(,)?) => {
                $(if let Some(value) = &$patch.$field {
                    $target.$field = value.clone();
                })+
            };
        }

        merge!(self, patch;
            debuff,
            haste,
            haste_rating,
            trigger,
            does_not_stack_with,
            summary_icon,
            details_icon,
            max_stack,
        );
    }

    /// True if this record lists `other` as non-stacking.
    pub fn excludes(&self, other: AbilityId) -> bool {
        self.does_not_stack_with.contains(&other)
    }
}

/// Partial buff record. Only fields that are `Some` override the target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuffPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debuff: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haste: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haste_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<BuffTrigger>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub does_not_stack_with: Option<Vec<AbilityId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_icon: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details_icon: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stack: Option<u32>,
}
