use std::collections::BTreeMap;
use std::sync::LazyLock;

use shadowlog_types::Settings;

use super::inference::sort_by_haste;
use super::{BuffRecord, infer_buffs};
use crate::context::{AnalysisSignal, BuffEvent};
use crate::error::{CatalogError, ConfigError};
use crate::game_data::{AbilityId, baseline_buffs};

static BUFFS: LazyLock<BuffCatalog> = LazyLock::new(|| {
    BuffCatalog::from_records(baseline_buffs()).expect("baseline buff ids are unique")
});

/// Immutable table of buff records keyed by aura id.
#[derive(Debug)]
pub struct BuffCatalog {
    records: BTreeMap<AbilityId, BuffRecord>,
}

impl BuffCatalog {
    /// The process-wide baseline catalog.
    pub fn global() -> &'static BuffCatalog {
        &BUFFS
    }

    pub fn from_records(records: Vec<BuffRecord>) -> Result<Self, ConfigError> {
        let mut map = BTreeMap::new();
        for record in records {
            let id = record.id;
            if map.insert(id, record).is_some() {
                return Err(ConfigError::DuplicateId { id });
            }
        }
        Ok(Self { records: map })
    }

    pub fn baseline(&self, id: AbilityId) -> Result<&BuffRecord, CatalogError> {
        self.records
            .get(&id)
            .ok_or(CatalogError::BuffNotFound { id })
    }

    /// Effective record for a logged buff event.
    ///
    /// The stack comes from the event when it reports one, otherwise 1 for
    /// stacking auras and 0 for the rest. A reported stack of 0 counts as
    /// not reported.
    pub fn resolve(&self, event: &BuffEvent, settings: &Settings) -> Result<BuffRecord, CatalogError> {
        let base = self.baseline(event.ability_id)?;
        let mut data = base.clone();

        if let Some(dynamic) = base.dynamic {
            let patch = (dynamic.0)(base, event, settings);
            tracing::debug!(aura_id = base.id, ?patch, "Applying buff override");
            data.apply(&patch);
        }

        data.id = event.ability_id;
        if !event.name.is_empty() {
            data.name = event.name.clone();
        }
        data.stack = event
            .stack
            .filter(|&stack| stack > 0)
            .unwrap_or(if base.max_stack > 0 { 1 } else { 0 });

        Ok(data)
    }

    /// True only for registered debuffs. Unknown ids are not debuffs.
    pub fn is_debuff(&self, id: AbilityId) -> bool {
        self.records.get(&id).is_some_and(|r| r.debuff)
    }

    /// True if either aura declares it does not stack with the other.
    ///
    /// The data is not symmetric, so both directions are checked here.
    pub fn conflicts(&self, a: AbilityId, b: AbilityId) -> bool {
        let excludes = |from: AbilityId, to: AbilityId| {
            self.records.get(&from).is_some_and(|r| r.excludes(to))
        };
        excludes(a, b) || excludes(b, a)
    }

    /// Buffs inferred for a player from one aggregate signal.
    pub fn infer(&self, signal: &AnalysisSignal) -> Vec<BuffRecord> {
        infer_buffs(self, signal)
    }

    /// Auras the settings list as active for the whole fight, resolved with
    /// those settings and strongest haste first. Ids without buff data are
    /// skipped.
    pub fn configured(&self, settings: &Settings) -> Vec<BuffRecord> {
        let mut buffs: Vec<BuffRecord> = self
            .records()
            .filter(|r| settings.have_aura(r.id))
            .filter_map(|r| self.resolve(&BuffEvent::new(r.id, ""), settings).ok())
            .collect();
        sort_by_haste(&mut buffs);
        buffs
    }

    pub fn contains(&self, id: AbilityId) -> bool {
        self.records.contains_key(&id)
    }

    /// Baseline records in ascending id order.
    pub fn records(&self) -> impl Iterator<Item = &BuffRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
