//! Integration test: scenario files on disk.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rw_app::{
    AppError, ScenarioConfig, ScenarioSet, load_config, run_scenarios, save_config, save_summary,
};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

#[test]
fn yaml_and_json_round_trip() {
    let dir = unique_temp_dir("rw_app_config");
    let config = ScenarioConfig::builtin();

    for file in ["scenarios.yaml", "scenarios.json"] {
        let path = dir.join(file);
        save_config(&path, &config).expect("save config");
        let loaded = load_config(&path).expect("load config");
        assert_eq!(loaded, config);
    }

    let json = fs::read_to_string(dir.join("scenarios.json")).unwrap();
    assert!(json.trim_start().starts_with('{'));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn scenario_file_drives_runner() {
    let dir = unique_temp_dir("rw_app_runner");
    let path = dir.join("short.yaml");
    fs::write(
        &path,
        r#"
version: 1
baseline:
  total_time: 4.0
  dt: 0.02
scenarios:
  - name: weak
    overrides:
      F_drive: 1500.0
"#,
    )
    .unwrap();

    let set = ScenarioSet::from_file(&path).expect("load scenario set");
    assert_eq!(set.names(), vec!["baseline", "weak"]);

    let outcomes = run_scenarios(&set).unwrap();
    assert_eq!(outcomes[0].result.len(), 201);
    assert!(outcomes[1].result.max_velocity < outcomes[0].result.max_velocity);

    let summary_path = dir.join("summary.txt");
    save_summary(&outcomes[0].result, &summary_path).unwrap();
    let text = fs::read_to_string(&summary_path).unwrap();
    assert!(text.contains("Total simulation time: 4.00 s"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn invalid_scenario_stops_the_run() {
    let dir = unique_temp_dir("rw_app_invalid");
    let path = dir.join("bad.yaml");
    fs::write(
        &path,
        "version: 1\nscenarios:\n  - name: frozen\n    overrides:\n      mass: 0.0\n",
    )
    .unwrap();

    let set = ScenarioSet::from_file(&path).unwrap();
    match run_scenarios(&set) {
        Err(AppError::ScenarioFailed { name, .. }) => assert_eq!(name, "frozen"),
        other => panic!("expected ScenarioFailed, got {other:?}"),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_is_reported_with_path() {
    let path = std::env::temp_dir().join("rw_app_definitely_missing.yaml");
    match load_config(&path) {
        Err(AppError::ConfigFileRead { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected ConfigFileRead, got {other:?}"),
    }
}
