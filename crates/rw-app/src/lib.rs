//! Shared application service layer for rowsim.
//!
//! Builds named scenarios around the simulation engine, runs them and
//! renders their results as text tables, summaries and CSV series. Used by
//! the CLI; library callers get the same behavior.

pub mod config;
pub mod error;
pub mod report;
pub mod scenarios;
pub mod series;

// Re-export key types for convenience
pub use config::{
    BASELINE_NAME, LATEST_VERSION, ParameterOverrides, ScenarioConfig, ScenarioDef, load_config,
    save_config, validate_config,
};
pub use error::{AppError, AppResult};
pub use report::{format_summary, format_table, save_summary, write_summary, write_table};
pub use scenarios::{
    Scenario, ScenarioOutcome, ScenarioSet, find_outcome, run_scenario, run_scenarios,
};
pub use series::{SeriesVariable, comparison_csv, extract_series, series_csv, variable_csv};
