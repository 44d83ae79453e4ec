//! Baseline buff rules
//!
//! Haste-relevant auras only. Moonkin and retribution auras carry haste only
//! with the improved talent, which is a raid member's choice and so comes
//! from settings.

use shadowlog_types::Settings;

use super::aura_id::*;
use super::aura_name;
use crate::buffs::{BuffOverride, BuffPatch, BuffRecord, BuffTrigger, Inference, InferenceThresholds};
use crate::context::{AnalysisSignal, BuffEvent};

const IMPROVED_AURA_HASTE: f64 = 0.03;
const WRATH_OF_AIR_HASTE: f64 = 0.05;

fn talent_haste(enabled: bool) -> BuffPatch {
    BuffPatch {
        haste: Some(if enabled { IMPROVED_AURA_HASTE } else { 0.0 }),
        ..BuffPatch::default()
    }
}

fn improved_moonkin_aura(_base: &BuffRecord, _event: &BuffEvent, settings: &Settings) -> BuffPatch {
    talent_haste(settings.improved_moonkin_aura)
}

fn improved_retribution_aura(
    _base: &BuffRecord,
    _event: &BuffEvent,
    settings: &Settings,
) -> BuffPatch {
    talent_haste(settings.improved_retribution_aura)
}

/// A totem flag accounts for the full totem haste. Otherwise haste the logged
/// buffs cannot explain is the evidence.
fn wrath_of_air_haste(signal: &AnalysisSignal) -> Option<f64> {
    if signal.apply_wrath_of_air {
        Some(WRATH_OF_AIR_HASTE)
    } else {
        signal.unexplained_haste
    }
}

fn buff(id: u64) -> BuffRecord {
    BuffRecord::base(id, aura_name(id).unwrap_or_default())
}

pub(crate) fn baseline_buffs() -> Vec<BuffRecord> {
    vec![
        BuffRecord {
            haste: 0.2,
            trigger: BuffTrigger::OnUse,
            summary_icon: true,
            ..buff(BERSERKING)
        },
        BuffRecord {
            haste: 0.3,
            does_not_stack_with: vec![POWER_INFUSION],
            summary_icon: true,
            ..buff(BLOODLUST)
        },
        BuffRecord {
            haste_rating: 80.0,
            summary_icon: true,
            ..buff(DRUMS_OF_BATTLE)
        },
        BuffRecord {
            haste_rating: 80.0,
            summary_icon: true,
            ..buff(GREATER_DRUMS_OF_BATTLE)
        },
        BuffRecord {
            haste_rating: 400.0,
            trigger: BuffTrigger::OnUse,
            summary_icon: true,
            ..buff(HASTE)
        },
        BuffRecord {
            haste: 0.3,
            does_not_stack_with: vec![POWER_INFUSION],
            summary_icon: true,
            ..buff(HEROISM)
        },
        BuffRecord {
            trigger: BuffTrigger::OnUse,
            summary_icon: true,
            ..buff(INNER_FOCUS)
        },
        BuffRecord {
            does_not_stack_with: vec![RETRIBUTION_AURA],
            dynamic: Some(BuffOverride(improved_moonkin_aura)),
            ..buff(MOONKIN_AURA)
        },
        BuffRecord {
            haste: 0.2,
            does_not_stack_with: vec![HEROISM, BLOODLUST],
            summary_icon: true,
            ..buff(POWER_INFUSION)
        },
        BuffRecord {
            does_not_stack_with: vec![MOONKIN_AURA],
            dynamic: Some(BuffOverride(improved_retribution_aura)),
            ..buff(RETRIBUTION_AURA)
        },
        BuffRecord {
            haste: WRATH_OF_AIR_HASTE,
            infer: Inference::Measured(wrath_of_air_haste),
            inference_thresholds: Some(InferenceThresholds {
                add: 0.035,
                remove: 0.025,
            }),
            ..buff(WRATH_OF_AIR)
        },
    ]
}
