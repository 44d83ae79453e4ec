//! Haste calculations
//!
//! Haste shortens the tick interval of hasted DOTs while keeping the number of
//! ticks. The spell resolver only asks for a new duration when a spell is a
//! DOT with `dot_haste` set.

use crate::buffs::BuffRecord;
use crate::spells::SpellRecord;

/// Haste rating per 1% spell haste at level 70.
pub const HASTE_RATING_PER_PERCENT: f64 = 15.77;

/// Duration model for hasted DOTs.
pub trait HasteModel: Send + Sync {
    /// New max duration for `spell` under `haste` (a fraction, 0.1 = 10%).
    fn duration(&self, spell: &SpellRecord, haste: f64) -> f64;
}

/// Keeps the tick count and shrinks the interval by `1 / (1 + haste)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickPreserving;

impl HasteModel for TickPreserving {
    fn duration(&self, spell: &SpellRecord, haste: f64) -> f64 {
        let factor = 1.0 + haste.max(0.0);
        if spell.max_ticks > 0 && spell.base_tick_time > 0.0 {
            f64::from(spell.max_ticks) * (spell.base_tick_time / factor)
        } else {
            spell.max_duration / factor
        }
    }
}

/// Convert haste rating to a haste fraction.
#[inline]
pub fn haste_from_rating(rating: f64) -> f64 {
    rating / HASTE_RATING_PER_PERCENT / 100.0
}

/// Total haste fraction from the player's rating plus active buffs.
///
/// Flat rating from buffs adds to the base rating; percentage haste from
/// each buff multiplies.
pub fn total_haste(base_rating: Option<f64>, buffs: &[BuffRecord]) -> f64 {
    let rating = base_rating.unwrap_or(0.0) + buffs.iter().map(|b| b.haste_rating).sum::<f64>();
    let multiplier = buffs
        .iter()
        .fold(1.0 + haste_from_rating(rating), |acc, b| acc * (1.0 + b.haste));
    multiplier - 1.0
}
