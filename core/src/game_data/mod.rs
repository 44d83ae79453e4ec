mod buffs;
mod ids;
mod names;
mod spells;

pub(crate) use buffs::baseline_buffs;
pub use ids::{AbilityId, PSEUDO_SPELL_BASE, aura_id, canonicalize, spell_id};
pub use names::{aura_name, spell_name};
pub(crate) use spells::baseline_spells;
