pub mod buffs;
pub mod context;
pub mod error;
pub mod game_data;
pub mod gear;
pub mod haste;
pub mod settings;
pub mod spells;

// Re-exports for convenience
pub use buffs::{
    BuffCatalog, BuffOverride, BuffPatch, BuffRecord, BuffTrigger, Inference, InferenceThresholds,
    InferenceWindow, infer_buffs,
};
pub use context::{ActorInfo, AnalysisContext, AnalysisSignal, BuffEvent};
pub use error::{CatalogError, ConfigError};
pub use game_data::*;
pub use gear::{load_gear, parse_gear};
pub use haste::{HASTE_RATING_PER_PERCENT, HasteModel, TickPreserving, haste_from_rating, total_haste};
pub use settings::{load_settings, parse_settings, validate_settings};
pub use spells::{DamageType, SpellCatalog, SpellOverride, SpellPatch, SpellRecord};
pub use shadowlog_types::{AppConfig, Settings};

/// True for registered debuffs in the baseline catalog. Unknown ids are not debuffs.
pub fn is_debuff(id: AbilityId) -> bool {
    BuffCatalog::global().is_debuff(id)
}
