//! Integration test: built-in scenarios through the shared services.

use rw_app::{
    ScenarioSet, SeriesVariable, comparison_csv, find_outcome, format_table, run_scenarios,
};

#[test]
fn builtin_scenarios_run_in_order() {
    let outcomes = run_scenarios(&ScenarioSet::builtin()).expect("builtin scenarios run");
    let names: Vec<&str> = outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["baseline", "low_drag", "low_mass", "high_rate"]);

    for outcome in &outcomes {
        let r = &outcome.result;
        assert_eq!(r.len(), 2001);
        assert!(r.velocity.iter().all(|&v| v >= 0.0 && v.is_finite()));
        assert!(r.efficiency > 0.0 && r.efficiency < 1.0);
    }
}

#[test]
fn variations_move_speed_the_expected_way() {
    let outcomes = run_scenarios(&ScenarioSet::builtin()).unwrap();
    let baseline = &find_outcome(&outcomes, "baseline").unwrap().result;
    let low_drag = &find_outcome(&outcomes, "low_drag").unwrap().result;
    let low_mass = &find_outcome(&outcomes, "low_mass").unwrap().result;
    let high_rate = &find_outcome(&outcomes, "high_rate").unwrap().result;

    assert!(low_drag.max_velocity > baseline.max_velocity);
    assert!(low_drag.avg_velocity > baseline.avg_velocity);
    assert!(low_mass.max_velocity > baseline.max_velocity);
    // Same drive length in a shorter cycle puts more work in.
    assert!(high_rate.energy_input > baseline.energy_input);
    assert!(high_rate.avg_velocity > baseline.avg_velocity);

    assert!(find_outcome(&outcomes, "missing").is_err());
}

#[test]
fn table_has_one_row_per_scenario() {
    let outcomes = run_scenarios(&ScenarioSet::builtin()).unwrap();
    let table = format_table(&outcomes).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 1 + outcomes.len());
    assert!(lines[1].starts_with("baseline\t"));
    assert!(lines[4].starts_with("high_rate\t"));
    for line in &lines[1..] {
        assert_eq!(line.split('\t').count(), 4);
    }
}

#[test]
fn velocity_comparison_covers_all_scenarios() {
    let outcomes = run_scenarios(&ScenarioSet::builtin()).unwrap();
    let csv = comparison_csv(&outcomes, SeriesVariable::Velocity).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("time_s,baseline,low_drag,low_mass,high_rate")
    );
    assert_eq!(lines.count(), 2001);
}
