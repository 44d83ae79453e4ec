//! Tests for buff lookup and resolution

use shadowlog_types::Settings;

use super::{BuffCatalog, BuffOverride, BuffPatch, BuffRecord, BuffTrigger};
use crate::context::BuffEvent;
use crate::error::{CatalogError, ConfigError};
use crate::game_data::aura_id;

// ═══════════════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════════════

fn catalog() -> &'static BuffCatalog {
    BuffCatalog::global()
}

fn event(id: u64) -> BuffEvent {
    BuffEvent::new(id, "")
}

fn settings_with(moonkin: bool, retribution: bool) -> Settings {
    Settings {
        improved_moonkin_aura: moonkin,
        improved_retribution_aura: retribution,
        ..Settings::default()
    }
}

fn stacking_buff(id: u64, max_stack: u32) -> BuffRecord {
    BuffRecord {
        max_stack,
        ..BuffRecord::base(id, "Stacking")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Resolution Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_resolve_known_buff() {
    let record = catalog()
        .resolve(&event(aura_id::BLOODLUST), &Settings::default())
        .unwrap();
    assert_eq!(record.id, aura_id::BLOODLUST);
    assert_eq!(record.name, "Bloodlust");
    assert_eq!(record.haste, 0.3);
    assert_eq!(record.trigger, BuffTrigger::External);
    assert_eq!(record.stack, 0);
}

#[test]
fn test_resolve_unknown_buff() {
    let result = catalog().resolve(&event(42), &Settings::default());
    assert!(matches!(result, Err(CatalogError::BuffNotFound { id: 42 })));
}

#[test]
fn test_event_name_wins() {
    let record = catalog()
        .resolve(&BuffEvent::new(aura_id::HEROISM, "Heroism (Shaman)"), &Settings::default())
        .unwrap();
    assert_eq!(record.name, "Heroism (Shaman)");
}

#[test]
fn test_moonkin_aura_haste_follows_talent() {
    let improved = catalog()
        .resolve(&event(aura_id::MOONKIN_AURA), &settings_with(true, false))
        .unwrap();
    assert_eq!(improved.haste, 0.03);

    let plain = catalog()
        .resolve(&event(aura_id::MOONKIN_AURA), &settings_with(false, true))
        .unwrap();
    assert_eq!(plain.haste, 0.0);
}

#[test]
fn test_retribution_aura_haste_follows_talent() {
    let improved = catalog()
        .resolve(&event(aura_id::RETRIBUTION_AURA), &settings_with(false, true))
        .unwrap();
    assert_eq!(improved.haste, 0.03);

    let plain = catalog()
        .resolve(&event(aura_id::RETRIBUTION_AURA), &settings_with(true, false))
        .unwrap();
    assert_eq!(plain.haste, 0.0);
}

#[test]
fn test_resolve_does_not_mutate_baseline() {
    catalog()
        .resolve(&event(aura_id::MOONKIN_AURA), &settings_with(true, false))
        .unwrap();
    assert_eq!(catalog().baseline(aura_id::MOONKIN_AURA).unwrap().haste, 0.0);
}

#[test]
fn test_override_sees_event() {
    fn per_stack(_base: &BuffRecord, event: &BuffEvent, _settings: &Settings) -> BuffPatch {
        BuffPatch {
            haste: Some(0.01 * f64::from(event.stack.unwrap_or(1))),
            ..BuffPatch::default()
        }
    }
    let buffs = BuffCatalog::from_records(vec![BuffRecord {
        dynamic: Some(BuffOverride(per_stack)),
        ..stacking_buff(7, 5)
    }])
    .unwrap();

    let record = buffs
        .resolve(&BuffEvent::new(7, "").with_stack(4), &Settings::default())
        .unwrap();
    assert!((record.haste - 0.04).abs() < 1e-9);
    assert_eq!(record.stack, 4);
}

// ═══════════════════════════════════════════════════════════════════════════
// Stack Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_reported_stack_is_used() {
    let buffs = BuffCatalog::from_records(vec![stacking_buff(7, 5)]).unwrap();
    let record = buffs
        .resolve(&BuffEvent::new(7, "").with_stack(3), &Settings::default())
        .unwrap();
    assert_eq!(record.stack, 3);
}

#[test]
fn test_stacking_buff_defaults_to_one() {
    let buffs = BuffCatalog::from_records(vec![stacking_buff(7, 5)]).unwrap();
    let record = buffs.resolve(&event(7), &Settings::default()).unwrap();
    assert_eq!(record.stack, 1);
}

#[test]
fn test_zero_stack_treated_as_unreported() {
    let buffs = BuffCatalog::from_records(vec![stacking_buff(7, 5)]).unwrap();
    let record = buffs
        .resolve(&BuffEvent::new(7, "").with_stack(0), &Settings::default())
        .unwrap();
    assert_eq!(record.stack, 1);
}

#[test]
fn test_non_stacking_buff_defaults_to_zero() {
    let record = catalog()
        .resolve(&event(aura_id::POWER_INFUSION), &Settings::default())
        .unwrap();
    assert_eq!(record.stack, 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Debuff / Stacking Exclusivity Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_is_debuff_unknown_is_false() {
    assert!(!catalog().is_debuff(123_456_789));
}

#[test]
fn test_is_debuff_registered() {
    let buffs = BuffCatalog::from_records(vec![
        BuffRecord {
            debuff: true,
            ..BuffRecord::base(1, "Misery")
        },
        BuffRecord::base(2, "Kings"),
    ])
    .unwrap();
    assert!(buffs.is_debuff(1));
    assert!(!buffs.is_debuff(2));
    assert!(!catalog().is_debuff(aura_id::BLOODLUST));
}

#[test]
fn test_excluded_buffs_still_resolve() {
    let settings = Settings::default();
    assert!(catalog().resolve(&event(aura_id::BLOODLUST), &settings).is_ok());
    assert!(catalog().resolve(&event(aura_id::POWER_INFUSION), &settings).is_ok());
}

#[test]
fn test_conflicts_checks_both_directions() {
    let buffs = BuffCatalog::from_records(vec![
        BuffRecord {
            does_not_stack_with: vec![2],
            ..BuffRecord::base(1, "A")
        },
        BuffRecord::base(2, "B"),
    ])
    .unwrap();

    assert!(buffs.baseline(1).unwrap().excludes(2));
    assert!(!buffs.baseline(2).unwrap().excludes(1));
    assert!(buffs.conflicts(1, 2));
    assert!(buffs.conflicts(2, 1));
    assert!(!buffs.conflicts(1, 3));
}

#[test]
fn test_baseline_exclusions() {
    assert!(catalog().conflicts(aura_id::HEROISM, aura_id::POWER_INFUSION));
    assert!(catalog().conflicts(aura_id::MOONKIN_AURA, aura_id::RETRIBUTION_AURA));
    assert!(!catalog().conflicts(aura_id::BLOODLUST, aura_id::HEROISM));
}

#[test]
fn test_from_records_rejects_duplicates() {
    let result = BuffCatalog::from_records(vec![BuffRecord::base(1, "A"), BuffRecord::base(1, "B")]);
    assert!(matches!(result, Err(ConfigError::DuplicateId { id: 1 })));
}

#[test]
fn test_baseline_names_are_filled() {
    for record in catalog().records() {
        assert!(!record.name.is_empty(), "aura {} has no name", record.id);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Configured Aura Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_configured_auras_resolved_with_settings() {
    let settings = Settings {
        auras: vec![aura_id::MOONKIN_AURA, 999_999, aura_id::BLOODLUST],
        ..settings_with(true, false)
    };

    let configured = catalog().configured(&settings);
    let ids: Vec<u64> = configured.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![aura_id::BLOODLUST, aura_id::MOONKIN_AURA]);
    assert_eq!(configured[1].haste, 0.03);
}

#[test]
fn test_no_configured_auras() {
    assert!(catalog().configured(&Settings::default()).is_empty());
}
