use hashbrown::HashMap;
use std::sync::LazyLock;

use super::SpellRecord;
use crate::context::AnalysisContext;
use crate::error::{CatalogError, ConfigError};
use crate::game_data::{AbilityId, baseline_spells, canonicalize};
use crate::haste::{HasteModel, TickPreserving};

static SPELLS: LazyLock<SpellCatalog> = LazyLock::new(|| {
    SpellCatalog::from_records(baseline_spells()).expect("baseline spell ids are unique")
});

/// Immutable table of spell records, addressable by main or rank id.
#[derive(Debug)]
pub struct SpellCatalog {
    /// Sorted by main id
    records: Vec<SpellRecord>,
    /// main and rank ids -> index into `records`
    by_id: HashMap<AbilityId, usize>,
}

impl SpellCatalog {
    /// The process-wide baseline catalog.
    pub fn global() -> &'static SpellCatalog {
        &SPELLS
    }

    /// Build a catalog, rejecting ids claimed by more than one record.
    pub fn from_records(mut records: Vec<SpellRecord>) -> Result<Self, ConfigError> {
        records.sort_by_key(|r| r.main_id);

        let mut by_id = HashMap::with_capacity(records.len() * 2);
        for (index, record) in records.iter().enumerate() {
            for id in record.ids() {
                if by_id.insert(id, index).is_some() {
                    return Err(ConfigError::DuplicateId { id });
                }
            }
        }

        Ok(Self { records, by_id })
    }

    /// Baseline record for a main or rank id.
    pub fn baseline(&self, id: AbilityId) -> Result<&SpellRecord, CatalogError> {
        self.by_id
            .get(&id)
            .map(|&index| &self.records[index])
            .ok_or(CatalogError::SpellNotFound { id })
    }

    /// Effective record for `id` under `ctx`, using the default haste model.
    pub fn resolve(
        &self,
        id: AbilityId,
        ctx: &AnalysisContext,
        current_haste: Option<f64>,
    ) -> Result<SpellRecord, CatalogError> {
        self.resolve_with(id, ctx, current_haste, &TickPreserving)
    }

    /// Resolve a raw log id (possibly negative).
    pub fn resolve_raw(
        &self,
        raw_id: i64,
        ctx: &AnalysisContext,
        current_haste: Option<f64>,
    ) -> Result<SpellRecord, CatalogError> {
        self.resolve(canonicalize(raw_id), ctx, current_haste)
    }

    /// Effective record for `id` under `ctx`.
    ///
    /// Layers, lowest to highest: baseline, settings override, gear bonus,
    /// haste duration. Haste is applied last because it works from the fully
    /// merged duration, and only to DOTs flagged `dot_haste`.
    pub fn resolve_with(
        &self,
        id: AbilityId,
        ctx: &AnalysisContext,
        current_haste: Option<f64>,
        haste_model: &dyn HasteModel,
    ) -> Result<SpellRecord, CatalogError> {
        let base = self.baseline(id)?;
        let mut data = base.clone();

        if let Some(dynamic) = base.dynamic {
            let patch = (dynamic.0)(base, ctx.settings());
            tracing::debug!(spell_id = base.main_id, ?patch, "Applying settings override");
            data.apply(&patch);
        }

        if let Some(bonus) = ctx.gear_bonus(base.main_id) {
            tracing::trace!(spell_id = base.main_id, ?bonus, "Applying gear bonus");
            data.apply(bonus);
        }

        if let Some(haste) = current_haste {
            if data.is_dot() && data.dot_haste {
                data.max_duration = haste_model.duration(&data, haste);
            }
        }

        Ok(data)
    }

    /// Rank of a main or rank id.
    pub fn rank(&self, id: AbilityId) -> Result<u32, CatalogError> {
        self.baseline(id)?.rank_of(id)
    }

    /// Record owning `id`, either directly or through its damage ids.
    ///
    /// Tick damage is often reported under a different id than the cast.
    pub fn find_by_damage_id(&self, id: AbilityId) -> Result<&SpellRecord, CatalogError> {
        if let Ok(record) = self.baseline(id) {
            return Ok(record);
        }
        self.records
            .iter()
            .find(|r| r.damage_ids.contains(&id))
            .ok_or(CatalogError::SpellNotFound { id })
    }

    pub fn contains(&self, id: AbilityId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Baseline records in ascending main id order.
    pub fn records(&self) -> impl Iterator<Item = &SpellRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
