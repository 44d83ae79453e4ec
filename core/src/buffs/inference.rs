//! Buff inference from aggregate signals
//!
//! Some raid buffs never show up as apply events for the analyzed player
//! (totems affect the party without a per-recipient log line). Their presence
//! is inferred from the player's aggregate behaviour instead.
//!
//! Two evaluation modes:
//! - [`infer_buffs`] looks at one signal for a whole fight. Measured values
//!   only need to clear the `add` threshold.
//! - [`InferenceWindow`] re-evaluates over successive signals (e.g. a moving
//!   window). A measured buff that was present stays present until its value
//!   drops below `remove`.

use hashbrown::HashSet;

use super::{BuffCatalog, BuffRecord, Inference, InferenceThresholds};
use crate::context::AnalysisSignal;
use crate::game_data::AbilityId;

impl Inference {
    /// Evaluate against `signal`. `present` is the previous conclusion and
    /// only matters for measured values.
    pub(crate) fn evaluate(
        &self,
        signal: &AnalysisSignal,
        thresholds: Option<&InferenceThresholds>,
        present: bool,
    ) -> bool {
        match self {
            Self::Constant(value) => *value,
            Self::Predicate(predicate) => predicate(signal),
            Self::Measured(measure) => match measure(signal) {
                None => present,
                Some(value) => match thresholds {
                    Some(t) if present => value >= t.remove,
                    Some(t) => value > t.add,
                    None => value > 0.0,
                },
            },
        }
    }
}

/// Highest haste first, then ascending id.
pub(super) fn sort_by_haste(buffs: &mut [BuffRecord]) {
    buffs.sort_by(|a, b| b.haste.total_cmp(&a.haste).then(a.id.cmp(&b.id)));
}

/// Buffs inferred from a single aggregate signal, strongest haste first.
pub fn infer_buffs(catalog: &BuffCatalog, signal: &AnalysisSignal) -> Vec<BuffRecord> {
    let mut inferred: Vec<BuffRecord> = catalog
        .records()
        .filter(|r| r.infer.evaluate(signal, r.inference_thresholds.as_ref(), false))
        .cloned()
        .collect();
    sort_by_haste(&mut inferred);
    inferred
}

/// Stateful inference over a sequence of signals.
#[derive(Debug)]
pub struct InferenceWindow<'a> {
    catalog: &'a BuffCatalog,
    present: HashSet<AbilityId>,
}

impl<'a> InferenceWindow<'a> {
    pub fn new(catalog: &'a BuffCatalog) -> Self {
        Self {
            catalog,
            present: HashSet::new(),
        }
    }

    /// Update with the next signal and return the buffs now considered present.
    pub fn observe(&mut self, signal: &AnalysisSignal) -> Vec<BuffRecord> {
        let mut inferred = Vec::new();
        for record in self.catalog.records() {
            let was_present = self.present.contains(&record.id);
            let now_present =
                record
                    .infer
                    .evaluate(signal, record.inference_thresholds.as_ref(), was_present);

            if now_present != was_present {
                tracing::debug!(aura_id = record.id, now_present, "Inferred buff changed");
            }
            if now_present {
                self.present.insert(record.id);
                inferred.push(record.clone());
            } else {
                self.present.remove(&record.id);
            }
        }
        sort_by_haste(&mut inferred);
        inferred
    }

    pub fn is_present(&self, id: AbilityId) -> bool {
        self.present.contains(&id)
    }

    /// Forget all previous conclusions.
    pub fn reset(&mut self) {
        self.present.clear();
    }
}
