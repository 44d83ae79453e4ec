//! Tests for buff inference
//!
//! Verifies that:
//! - Only matching predicates produce buffs
//! - Results are ordered by haste, then id
//! - Measured values follow the add/remove thresholds

use super::{BuffCatalog, BuffRecord, Inference, InferenceThresholds, InferenceWindow, infer_buffs};
use crate::context::AnalysisSignal;
use crate::game_data::aura_id;

// ═══════════════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════════════

fn unexplained_haste(signal: &AnalysisSignal) -> Option<f64> {
    signal.unexplained_haste
}

fn totem_applied(signal: &AnalysisSignal) -> bool {
    signal.apply_wrath_of_air
}

fn always(id: u64, haste: f64) -> BuffRecord {
    BuffRecord {
        haste,
        infer: Inference::Constant(true),
        ..BuffRecord::base(id, "Always")
    }
}

fn measured(id: u64, haste: f64) -> BuffRecord {
    BuffRecord {
        haste,
        infer: Inference::Measured(unexplained_haste),
        inference_thresholds: Some(InferenceThresholds {
            add: 0.035,
            remove: 0.025,
        }),
        ..BuffRecord::base(id, "Measured")
    }
}

fn signal(value: Option<f64>) -> AnalysisSignal {
    AnalysisSignal {
        unexplained_haste: value,
        ..AnalysisSignal::default()
    }
}

fn ids(buffs: &[BuffRecord]) -> Vec<u64> {
    buffs.iter().map(|b| b.id).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Stateless Inference
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_nothing_inferred_from_empty_signal() {
    let inferred = BuffCatalog::global().infer(&AnalysisSignal::default());
    assert!(inferred.is_empty());
}

#[test]
fn test_wrath_of_air_inferred_from_signal() {
    let signal = AnalysisSignal {
        apply_wrath_of_air: true,
        ..AnalysisSignal::default()
    };
    let inferred = BuffCatalog::global().infer(&signal);
    assert_eq!(ids(&inferred), vec![aura_id::WRATH_OF_AIR]);
    assert_eq!(inferred[0].name, "Wrath of Air");
    assert_eq!(inferred[0].haste, 0.05);
    assert!(inferred[0].inference_thresholds.is_some());
}

#[test]
fn test_wrath_of_air_inferred_from_unexplained_haste() {
    let catalog = BuffCatalog::global();

    let inferred = catalog.infer(&signal(Some(0.04)));
    assert_eq!(ids(&inferred), vec![aura_id::WRATH_OF_AIR]);
    assert_eq!(inferred[0].haste, 0.05);

    // just under the add threshold, or no measurement at all
    assert!(catalog.infer(&signal(Some(0.035))).is_empty());
    assert!(catalog.infer(&signal(None)).is_empty());
}

#[test]
fn test_constant_and_predicate_ordered_by_haste() {
    let buffs = BuffCatalog::from_records(vec![
        always(1, 0.02),
        BuffRecord {
            haste: 0.05,
            infer: Inference::Predicate(totem_applied),
            ..BuffRecord::base(2, "Totem")
        },
        BuffRecord::base(3, "Never"),
    ])
    .unwrap();

    let signal = AnalysisSignal {
        apply_wrath_of_air: true,
        ..AnalysisSignal::default()
    };
    assert_eq!(ids(&infer_buffs(&buffs, &signal)), vec![2, 1]);
    assert_eq!(ids(&infer_buffs(&buffs, &AnalysisSignal::default())), vec![1]);
}

#[test]
fn test_ties_ordered_by_id() {
    let buffs = BuffCatalog::from_records(vec![always(30, 0.1), always(10, 0.1), always(20, 0.2)]).unwrap();
    let inferred = infer_buffs(&buffs, &AnalysisSignal::default());
    assert_eq!(ids(&inferred), vec![20, 10, 30]);
}

#[test]
fn test_measured_uses_add_threshold() {
    let buffs = BuffCatalog::from_records(vec![measured(5, 0.05)]).unwrap();

    assert!(infer_buffs(&buffs, &signal(Some(0.030))).is_empty());
    assert!(infer_buffs(&buffs, &signal(Some(0.035))).is_empty());
    assert_eq!(ids(&infer_buffs(&buffs, &signal(Some(0.04)))), vec![5]);
    assert!(infer_buffs(&buffs, &signal(None)).is_empty());
}

#[test]
fn test_measured_without_thresholds() {
    let buffs = BuffCatalog::from_records(vec![BuffRecord {
        infer: Inference::Measured(unexplained_haste),
        ..BuffRecord::base(5, "Unbounded")
    }])
    .unwrap();

    assert!(infer_buffs(&buffs, &signal(Some(0.0))).is_empty());
    assert_eq!(ids(&infer_buffs(&buffs, &signal(Some(0.01)))), vec![5]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Windowed Inference (hysteresis)
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_window_keeps_buff_between_thresholds() {
    let buffs = BuffCatalog::from_records(vec![measured(5, 0.05)]).unwrap();
    let mut window = InferenceWindow::new(&buffs);

    // between remove and add: not yet present
    assert!(window.observe(&signal(Some(0.03))).is_empty());
    assert!(!window.is_present(5));

    // above add: present
    assert_eq!(ids(&window.observe(&signal(Some(0.04)))), vec![5]);

    // dips between thresholds: still present
    assert_eq!(ids(&window.observe(&signal(Some(0.03)))), vec![5]);
    assert_eq!(ids(&window.observe(&signal(Some(0.025)))), vec![5]);

    // below remove: gone
    assert!(window.observe(&signal(Some(0.02))).is_empty());
    assert!(!window.is_present(5));

    // back between thresholds: stays gone
    assert!(window.observe(&signal(Some(0.03))).is_empty());
}

#[test]
fn test_window_missing_value_keeps_state() {
    let buffs = BuffCatalog::from_records(vec![measured(5, 0.05)]).unwrap();
    let mut window = InferenceWindow::new(&buffs);

    window.observe(&signal(Some(0.05)));
    assert_eq!(ids(&window.observe(&signal(None))), vec![5]);

    window.reset();
    assert!(window.observe(&signal(None)).is_empty());
}

#[test]
fn test_window_predicates_are_stateless() {
    let buffs = BuffCatalog::from_records(vec![BuffRecord {
        infer: Inference::Predicate(totem_applied),
        ..BuffRecord::base(2, "Totem")
    }])
    .unwrap();
    let mut window = InferenceWindow::new(&buffs);
    let on = AnalysisSignal {
        apply_wrath_of_air: true,
        ..AnalysisSignal::default()
    };

    assert_eq!(ids(&window.observe(&on)), vec![2]);
    assert!(window.observe(&AnalysisSignal::default()).is_empty());
}

#[test]
fn test_window_tracks_wrath_of_air() {
    let mut window = InferenceWindow::new(BuffCatalog::global());

    assert_eq!(ids(&window.observe(&signal(Some(0.04)))), vec![aura_id::WRATH_OF_AIR]);
    // totem haste fades below add but stays above remove
    assert_eq!(ids(&window.observe(&signal(Some(0.03)))), vec![aura_id::WRATH_OF_AIR]);
    // no measurement for this window
    assert_eq!(ids(&window.observe(&signal(None))), vec![aura_id::WRATH_OF_AIR]);
    assert!(window.observe(&signal(Some(0.02))).is_empty());
}

#[test]
fn test_window_sorts_like_stateless() {
    let buffs = BuffCatalog::from_records(vec![always(1, 0.01), measured(5, 0.05)]).unwrap();
    let mut window = InferenceWindow::new(&buffs);
    assert_eq!(ids(&window.observe(&signal(Some(0.1)))), vec![5, 1]);
}
