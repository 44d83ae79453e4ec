//! Display names for known ability and aura ids.
//!
//! Rank ids share the name of their main id.

use phf::phf_map;

use super::AbilityId;

/// Name for a spell id (main, rank or damage id)
pub fn spell_name(id: AbilityId) -> Option<&'static str> {
    SPELL_NAMES.get(&id).copied()
}

/// Name for an aura id
pub fn aura_name(id: AbilityId) -> Option<&'static str> {
    AURA_NAMES.get(&id).copied()
}

static SPELL_NAMES: phf::Map<u64, &'static str> = phf_map! {
    // ═══════════════════════════════════════════════════════════════════════════
    // Shadow Priest
    // ═══════════════════════════════════════════════════════════════════════════
    20554u64 => "Berserking",
    32996u64 => "Shadow Word: Death",
    32379u64 => "Shadow Word: Death",
    25446u64 => "Starshards",
    19305u64 => "Starshards",
    25467u64 => "Devouring Plague",
    19280u64 => "Devouring Plague",
    25429u64 => "Fade",
    6346u64 => "Fear Ward",
    25331u64 => "Holy Nova",
    27801u64 => "Holy Nova",
    25375u64 => "Mind Blast",
    25372u64 => "Mind Blast",
    25387u64 => "Mind Flay",
    17314u64 => "Mind Flay",
    18807u64 => "Mind Flay",
    58381u64 => "Mind Flay",      // tick
    53022u64 => "Mind Sear",      // tick
    25368u64 => "Shadow Word: Pain",
    10894u64 => "Shadow Word: Pain",
    25367u64 => "Shadow Word: Pain",
    34433u64 => "Shadowfiend",
    25218u64 => "Power Word: Shield",
    10900u64 => "Power Word: Shield",
    10901u64 => "Power Word: Shield",
    25217u64 => "Power Word: Shield",
    15286u64 => "Vampiric Embrace",
    34917u64 => "Vampiric Touch",
    34914u64 => "Vampiric Touch",
    34916u64 => "Vampiric Touch",
    988u64 => "Dispel Magic",
    32375u64 => "Mass Dispel",

    // ═══════════════════════════════════════════════════════════════════════════
    // Engineering
    // ═══════════════════════════════════════════════════════════════════════════
    30217u64 => "Adamantite Grenade",
    23063u64 => "Dense Dynamite",
    30216u64 => "Fel Iron Bomb",
    4100u64 => "Goblin Land Mine",
    13241u64 => "Goblin Sapper Charge",
    30486u64 => "Super Sapper Charge",

    // ═══════════════════════════════════════════════════════════════════════════
    // Pseudo
    // ═══════════════════════════════════════════════════════════════════════════
    10000032u64 => "Melee",
};

static AURA_NAMES: phf::Map<u64, &'static str> = phf_map! {
    26635u64 => "Berserking",
    2825u64 => "Bloodlust",
    35476u64 => "Drums of Battle",
    351355u64 => "Greater Drums of Battle",
    28507u64 => "Haste",
    32182u64 => "Heroism",
    14751u64 => "Inner Focus",
    24907u64 => "Moonkin Aura",
    10060u64 => "Power Infusion",
    27150u64 => "Retribution Aura",
    3738u64 => "Wrath of Air",
};
