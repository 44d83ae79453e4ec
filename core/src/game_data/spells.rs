//! Baseline spell rules
//!
//! Values are for the max rank of each spell. Lower ranks share the rules of
//! their family and are only listed so log events can be attributed.

use std::collections::BTreeMap;

use shadowlog_types::Settings;

use super::spell_id::*;
use crate::spells::{DamageType, SpellOverride, SpellPatch, SpellRecord};

fn ranks(pairs: &[(u64, u32)]) -> BTreeMap<u64, u32> {
    pairs.iter().copied().collect()
}

/// Improved Mind Blast: -0.5s cooldown per point
fn improved_mind_blast(base: &SpellRecord, settings: &Settings) -> SpellPatch {
    SpellPatch {
        cooldown: Some(base.cooldown - 0.5 * f64::from(settings.improved_mind_blast)),
        ..SpellPatch::default()
    }
}

/// Engineering explosives: 1s cast, off the GCD, hits everything nearby
fn explosive(main_id: u64, cast_time: f64) -> SpellRecord {
    SpellRecord {
        damage_type: DamageType::Aoe,
        base_cast_time: cast_time,
        max_damage_instances: 20,
        gcd: false,
        ..SpellRecord::base(main_id)
    }
}

pub(crate) fn baseline_spells() -> Vec<SpellRecord> {
    vec![
        explosive(ADAMANTITE_GRENADE, 1.0),
        explosive(DENSE_DYNAMITE, 1.0),
        explosive(FEL_IRON_BOMB, 1.0),
        explosive(GOBLIN_SAPPER, 0.0),
        explosive(SUPER_SAPPER, 0.0),
        SpellRecord {
            gcd: false,
            ..SpellRecord::base(BERSERKING)
        },
        SpellRecord {
            rank_ids: ranks(&[(32379, 1)]),
            max_rank: 2,
            damage_type: DamageType::Direct,
            max_damage_instances: 1,
            cooldown: 12.0,
            ..SpellRecord::base(DEATH)
        },
        SpellRecord {
            rank_ids: ranks(&[(19305, 7)]),
            max_rank: 8,
            damage_type: DamageType::Dot,
            max_damage_instances: 5,
            max_duration: 15.0,
            max_ticks: 5,
            base_tick_time: 3.0,
            ..SpellRecord::base(STARSHARDS)
        },
        SpellRecord {
            rank_ids: ranks(&[(19280, 6)]),
            max_rank: 7,
            damage_type: DamageType::Dot,
            max_damage_instances: 8,
            max_duration: 24.0,
            max_ticks: 8,
            base_tick_time: 3.0,
            ..SpellRecord::base(DEVOURING_PLAGUE)
        },
        SpellRecord::base(DISPEL_MAGIC),
        SpellRecord {
            max_duration: 10.0,
            cooldown: 30.0,
            ..SpellRecord::base(FADE)
        },
        SpellRecord {
            max_duration: 180.0,
            cooldown: 180.0,
            ..SpellRecord::base(FEAR_WARD)
        },
        SpellRecord {
            rank_ids: ranks(&[(27801, 6)]),
            max_rank: 7,
            damage_type: DamageType::Aoe,
            max_damage_instances: 20,
            ..SpellRecord::base(HOLY_NOVA)
        },
        SpellRecord::base(MASS_DISPEL),
        SpellRecord {
            damage_type: DamageType::Direct,
            gcd: false,
            ..SpellRecord::base(MELEE)
        },
        SpellRecord {
            rank_ids: ranks(&[(25372, 10)]),
            max_rank: 11,
            damage_type: DamageType::Direct,
            base_cast_time: 1.5,
            max_damage_instances: 1,
            cooldown: 8.0,
            dynamic: Some(SpellOverride(improved_mind_blast)),
            ..SpellRecord::base(MIND_BLAST)
        },
        SpellRecord {
            rank_ids: ranks(&[(17314, 5), (18807, 6)]),
            max_rank: 7,
            can_crit: false,
            damage_ids: vec![MIND_FLAY_TICK],
            damage_type: DamageType::Channel,
            max_damage_instances: 3,
            max_duration: 3.0,
            max_ticks: 3,
            base_tick_time: 1.0,
            stats_by_tick: true,
            ..SpellRecord::base(MIND_FLAY)
        },
        SpellRecord {
            rank_ids: ranks(&[(10894, 8), (25367, 9)]),
            max_rank: 10,
            can_crit: false,
            damage_type: DamageType::Dot,
            base_tick_time: 3.0,
            ..SpellRecord::base(PAIN)
        },
        SpellRecord {
            damage_type: DamageType::Direct,
            max_duration: 15.0,
            cooldown: 180.0,
            ..SpellRecord::base(SHADOW_FIEND)
        },
        SpellRecord {
            rank_ids: ranks(&[(10900, 9), (10901, 10), (25217, 11)]),
            max_rank: 12,
            max_duration: 30.0,
            cooldown: 4.0,
            ..SpellRecord::base(SHIELD)
        },
        SpellRecord::base(VAMPIRIC_EMBRACE),
        SpellRecord {
            rank_ids: ranks(&[(34914, 1), (34916, 2)]),
            max_rank: 3,
            can_crit: false,
            damage_type: DamageType::Dot,
            base_cast_time: 1.5,
            max_damage_instances: 5,
            max_duration: 15.0,
            max_ticks: 5,
            base_tick_time: 3.0,
            ..SpellRecord::base(VAMPIRIC_TOUCH)
        },
    ]
}
