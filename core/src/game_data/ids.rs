//! Ability identifier space
//!
//! Combat logs report real abilities with positive ids and a few implicit
//! abilities (melee swings) with negative ones. Everything past the mapper
//! works in a single positive id space.

/// Canonical ability identifier
pub type AbilityId = u64;

/// Offset for synthetic ids so they never collide with real ability ids.
pub const PSEUDO_SPELL_BASE: AbilityId = 10_000_000;

/// Map a raw log ability id to a canonical id.
///
/// Positive ids pass through; zero and negative ids become
/// `PSEUDO_SPELL_BASE + |raw|`.
#[inline]
pub const fn canonicalize(raw: i64) -> AbilityId {
    if raw > 0 {
        raw as AbilityId
    } else {
        PSEUDO_SPELL_BASE + raw.unsigned_abs()
    }
}

// max rank ids unless noted
pub mod spell_id {
    use super::{AbilityId, PSEUDO_SPELL_BASE};

    pub const NONE: AbilityId = 0;

    // Shadow priest
    pub const BERSERKING: AbilityId = 20554;
    pub const DEATH: AbilityId = 32996;
    pub const STARSHARDS: AbilityId = 25446;
    pub const DEVOURING_PLAGUE: AbilityId = 25467;
    pub const FADE: AbilityId = 25429;
    pub const FEAR_WARD: AbilityId = 6346;
    pub const HOLY_NOVA: AbilityId = 25331;
    pub const MIND_BLAST: AbilityId = 25375;
    pub const MIND_FLAY: AbilityId = 25387;
    pub const PAIN: AbilityId = 25368;
    pub const SHADOW_FIEND: AbilityId = 34433;
    pub const SHIELD: AbilityId = 25218;
    pub const VAMPIRIC_EMBRACE: AbilityId = 15286;
    pub const VAMPIRIC_TOUCH: AbilityId = 34917;
    pub const DISPEL_MAGIC: AbilityId = 988;
    pub const MASS_DISPEL: AbilityId = 32375;

    // Tick damage reported under its own id
    pub const MIND_FLAY_TICK: AbilityId = 58381;
    pub const MIND_SEAR_TICK: AbilityId = 53022;

    // Engineering
    pub const ADAMANTITE_GRENADE: AbilityId = 30217;
    pub const DENSE_DYNAMITE: AbilityId = 23063;
    pub const FEL_IRON_BOMB: AbilityId = 30216;
    pub const GOBLIN_LAND_MINE: AbilityId = 4100;
    pub const GOBLIN_SAPPER: AbilityId = 13241;
    pub const SUPER_SAPPER: AbilityId = 30486;

    // Pseudo ids (negative in the log)
    pub const MELEE: AbilityId = PSEUDO_SPELL_BASE + 32;
}

pub mod aura_id {
    use super::AbilityId;

    pub const BERSERKING: AbilityId = 26635;
    pub const BLOODLUST: AbilityId = 2825;
    pub const DRUMS_OF_BATTLE: AbilityId = 35476;
    pub const GREATER_DRUMS_OF_BATTLE: AbilityId = 351355;
    pub const HASTE: AbilityId = 28507;
    pub const HEROISM: AbilityId = 32182;
    pub const INNER_FOCUS: AbilityId = 14751;
    pub const MOONKIN_AURA: AbilityId = 24907;
    pub const POWER_INFUSION: AbilityId = 10060;
    pub const RETRIBUTION_AURA: AbilityId = 27150;
    pub const WRATH_OF_AIR: AbilityId = 3738;
}
