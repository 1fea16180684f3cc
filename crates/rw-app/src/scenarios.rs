//! Scenario construction and execution.

use std::path::Path;

use tracing::{info, warn};

use rw_sim::{SimulationParameters, SimulationResult, simulate};

use crate::config::{self, BASELINE_NAME, ScenarioConfig};
use crate::error::{AppError, AppResult};

/// A named parameter set to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub params: SimulationParameters,
}

/// Ordered, uniquely named scenarios.
#[derive(Debug, Clone, Default)]
pub struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    /// The built-in baseline, low drag, low mass and high rate set.
    pub fn builtin() -> Self {
        Self::expand(&ScenarioConfig::builtin())
    }

    /// Expand a config: baseline first, then each listed scenario.
    ///
    /// A listed scenario named `baseline` replaces the implicit one.
    pub fn from_config(config: &ScenarioConfig) -> AppResult<Self> {
        config::validate_config(config)?;
        Ok(Self::expand(config))
    }

    /// Names are unique once the listed ones are: the implicit baseline is
    /// only added when no listed scenario takes its name.
    fn expand(config: &ScenarioConfig) -> Self {
        let base = config.baseline_params();

        let mut scenarios = Vec::with_capacity(config.scenarios.len() + 1);
        let explicit_baseline = config.scenarios.iter().any(|s| s.name == BASELINE_NAME);
        if !explicit_baseline {
            scenarios.push(Scenario {
                name: BASELINE_NAME.to_string(),
                description: None,
                params: base,
            });
        }
        scenarios.extend(config.scenarios.iter().map(|def| Scenario {
            name: def.name.clone(),
            description: def.description.clone(),
            params: def.overrides.apply(&base),
        }));
        Self { scenarios }
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let config = config::load_config(path)?;
        Self::from_config(&config)
    }

    /// Append a scenario; names must be unique.
    pub fn push(&mut self, scenario: Scenario) -> AppResult<()> {
        if self.get(&scenario.name).is_some() {
            return Err(AppError::Validation(format!(
                "Duplicate scenario name: {}",
                scenario.name
            )));
        }
        self.scenarios.push(scenario);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

/// Engine output for one scenario.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: String,
    pub params: SimulationParameters,
    pub result: SimulationResult,
}

/// Run one scenario, tagging engine errors with its name.
pub fn run_scenario(scenario: &Scenario) -> AppResult<ScenarioOutcome> {
    let result = simulate(&scenario.params).map_err(|source| AppError::ScenarioFailed {
        name: scenario.name.clone(),
        source,
    })?;

    if result.energy_input <= 0.0 {
        warn!(
            scenario = %scenario.name,
            "no energy input, efficiency reported as zero"
        );
    }
    info!(
        scenario = %scenario.name,
        samples = result.len(),
        avg_velocity = result.avg_velocity,
        max_velocity = result.max_velocity,
        efficiency = result.efficiency,
        "scenario finished"
    );

    Ok(ScenarioOutcome {
        name: scenario.name.clone(),
        params: scenario.params,
        result,
    })
}

/// Run every scenario in order. Stops at the first failure.
pub fn run_scenarios(set: &ScenarioSet) -> AppResult<Vec<ScenarioOutcome>> {
    info!(count = set.len(), "running scenarios");
    set.iter().map(run_scenario).collect()
}

pub fn find_outcome<'a>(
    outcomes: &'a [ScenarioOutcome],
    name: &str,
) -> AppResult<&'a ScenarioOutcome> {
    outcomes
        .iter()
        .find(|o| o.name == name)
        .ok_or_else(|| AppError::ScenarioNotFound(name.to_string()))
}
