//! End-to-end simulation checks: frequencies track weights, runs reproduce.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use studylab_core::domain::{Group, GroupId, Protocol, Study, StudyId};
use studylab_runner::{render_text, simulate_assignments, SimulationConfig};

fn weighted_study(weights: &[(&str, Decimal)]) -> Study {
    Study {
        id: StudyId::new("audit"),
        title: "Distribution audit".into(),
        total_weight: weights.iter().map(|(_, w)| *w).sum(),
        groups: weights
            .iter()
            .map(|(id, weight)| Group {
                id: GroupId::new(*id),
                label: String::new(),
                weight: *weight,
                protocol: Protocol::default(),
            })
            .collect(),
    }
}

#[test]
fn frequencies_converge_on_configured_shares() {
    let study = weighted_study(&[
        ("low", dec!(0.1)),
        ("mid", dec!(0.3)),
        ("high", dec!(0.6)),
    ]);
    let report = simulate_assignments(
        &study,
        &SimulationConfig {
            draws: 100_000,
            master_seed: 20_260_806,
        },
    )
    .unwrap();

    for g in &report.groups {
        assert!(
            g.deviation().abs() < 0.01,
            "group {}: frequency {:.4} vs expected {:.4}",
            g.group,
            g.frequency,
            g.expected
        );
    }
    assert!(report.max_abs_deviation < 0.01);
}

#[test]
fn same_master_seed_reproduces_the_report_bit_for_bit() {
    let study = weighted_study(&[("a", dec!(0.5)), ("b", dec!(0.5))]);
    let config = SimulationConfig {
        draws: 20_000,
        master_seed: 9,
    };

    let first = simulate_assignments(&study, &config).unwrap();
    let second = simulate_assignments(&study, &config).unwrap();

    assert_eq!(
        first.groups.iter().map(|g| g.observed).collect::<Vec<_>>(),
        second.groups.iter().map(|g| g.observed).collect::<Vec<_>>(),
    );
    assert_eq!(render_text(&first), render_text(&second));
}

#[test]
fn different_master_seeds_draw_different_assignments() {
    let study = weighted_study(&[
        ("low", dec!(0.1)),
        ("mid", dec!(0.3)),
        ("high", dec!(0.6)),
    ]);
    let first = simulate_assignments(
        &study,
        &SimulationConfig {
            draws: 20_000,
            master_seed: 1,
        },
    )
    .unwrap();
    let second = simulate_assignments(
        &study,
        &SimulationConfig {
            draws: 20_000,
            master_seed: 2,
        },
    )
    .unwrap();

    // Shares stay close for both, but the exact counts should differ.
    assert_ne!(
        first.groups.iter().map(|g| g.observed).collect::<Vec<_>>(),
        second.groups.iter().map(|g| g.observed).collect::<Vec<_>>(),
    );
}

#[test]
fn percent_weights_report_unit_shares() {
    let study = weighted_study(&[("control", dec!(25)), ("treatment", dec!(75))]);
    let report = simulate_assignments(
        &study,
        &SimulationConfig {
            draws: 50_000,
            master_seed: 5,
        },
    )
    .unwrap();

    assert!((report.groups[0].expected - 0.25).abs() < 1e-12);
    assert!((report.groups[1].expected - 0.75).abs() < 1e-12);
    assert!(report.max_abs_deviation < 0.02);
}
