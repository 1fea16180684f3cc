//! Scenario file format, loading, saving and validation.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rw_core::Real;
use rw_sim::SimulationParameters;

use crate::error::{AppError, AppResult};

/// Newest scenario file version this build understands.
pub const LATEST_VERSION: u32 = 1;

/// Name of the scenario built from the baseline parameters alone.
pub const BASELINE_NAME: &str = "baseline";

/// Contents of a scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub version: u32,
    /// Changes to the built-in baseline; every scenario starts from the result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<ParameterOverrides>,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDef>,
}

/// One named variation of the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub overrides: ParameterOverrides,
}

/// Partial parameter set; unset fields keep the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_drag: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "F_drive")]
    pub f_drive: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_time: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_time: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_velocity: Option<Real>,
}

impl ParameterOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy of `base` with every set field replaced.
    pub fn apply(&self, base: &SimulationParameters) -> SimulationParameters {
        SimulationParameters {
            total_time: self.total_time.unwrap_or(base.total_time),
            dt: self.dt.unwrap_or(base.dt),
            mass: self.mass.unwrap_or(base.mass),
            k_drag: self.k_drag.unwrap_or(base.k_drag),
            f_drive: self.f_drive.unwrap_or(base.f_drive),
            drive_time: self.drive_time.unwrap_or(base.drive_time),
            cycle_time: self.cycle_time.unwrap_or(base.cycle_time),
            initial_velocity: self.initial_velocity.unwrap_or(base.initial_velocity),
        }
    }
}

impl ScenarioConfig {
    /// Baseline plus the drag, mass and stroke-rate variations.
    pub fn builtin() -> Self {
        Self {
            version: LATEST_VERSION,
            baseline: None,
            scenarios: vec![
                ScenarioDef {
                    name: "low_drag".to_string(),
                    description: Some("Halved drag coefficient".to_string()),
                    overrides: ParameterOverrides {
                        k_drag: Some(20.0),
                        ..Default::default()
                    },
                },
                ScenarioDef {
                    name: "low_mass".to_string(),
                    description: Some("Half the boat and crew mass".to_string()),
                    overrides: ParameterOverrides {
                        mass: Some(383.25),
                        ..Default::default()
                    },
                },
                ScenarioDef {
                    name: "high_rate".to_string(),
                    description: Some("About 40 strokes per minute".to_string()),
                    overrides: ParameterOverrides {
                        cycle_time: Some(1.5),
                        ..Default::default()
                    },
                },
            ],
        }
    }

    /// Baseline parameters after applying the file's `baseline` block.
    pub fn baseline_params(&self) -> SimulationParameters {
        match &self.baseline {
            Some(overrides) => overrides.apply(&SimulationParameters::BASELINE),
            None => SimulationParameters::BASELINE,
        }
    }
}

/// Structural checks. Parameter values are checked by the engine.
pub fn validate_config(config: &ScenarioConfig) -> AppResult<()> {
    if config.version == 0 || config.version > LATEST_VERSION {
        return Err(AppError::Validation(format!(
            "Unsupported version: {}",
            config.version
        )));
    }

    let mut names = HashSet::new();
    for scenario in &config.scenarios {
        if scenario.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Scenario name must not be empty".to_string(),
            ));
        }
        if !names.insert(scenario.name.as_str()) {
            return Err(AppError::Validation(format!(
                "Duplicate scenario name: {}",
                scenario.name
            )));
        }
    }

    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a scenario file; `.json` is read as JSON, anything else as YAML.
pub fn load_config(path: &Path) -> AppResult<ScenarioConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: ScenarioConfig = if is_json(path) {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    validate_config(&config)?;
    Ok(config)
}

/// Save a scenario file, format chosen by extension as in [`load_config`].
pub fn save_config(path: &Path, config: &ScenarioConfig) -> AppResult<()> {
    validate_config(config)?;
    let content = if is_json(path) {
        serde_json::to_string_pretty(config)?
    } else {
        serde_yaml::to_string(config)?
    };

    std::fs::write(path, content).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
