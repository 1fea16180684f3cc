//! Time-series extraction and CSV export for external plotting.

use std::fmt::Write as _;
use std::str::FromStr;

use rw_sim::SimulationResult;

use crate::error::{AppError, AppResult};
use crate::scenarios::ScenarioOutcome;

/// Plottable per-sample variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesVariable {
    Velocity,
    Thrust,
}

impl SeriesVariable {
    pub fn column_name(self) -> &'static str {
        match self {
            SeriesVariable::Velocity => "velocity_m_s",
            SeriesVariable::Thrust => "thrust_n",
        }
    }

    fn values(self, result: &SimulationResult) -> &[f64] {
        match self {
            SeriesVariable::Velocity => &result.velocity,
            SeriesVariable::Thrust => &result.thrust,
        }
    }
}

impl FromStr for SeriesVariable {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "velocity" | "v" | "velocity_m_s" => Ok(SeriesVariable::Velocity),
            "thrust" | "force" | "thrust_n" => Ok(SeriesVariable::Thrust),
            _ => Err(AppError::InvalidInput(format!("Unknown variable: {}", s))),
        }
    }
}

/// `(time, value)` pairs for one variable.
pub fn extract_series(result: &SimulationResult, variable: SeriesVariable) -> Vec<(f64, f64)> {
    result
        .time
        .iter()
        .copied()
        .zip(variable.values(result).iter().copied())
        .collect()
}

/// CSV of one variable of a single run: `time_s,<column>`.
pub fn variable_csv(result: &SimulationResult, variable: SeriesVariable) -> String {
    let mut csv = format!("time_s,{}\n", variable.column_name());
    for (t, val) in extract_series(result, variable) {
        let _ = writeln!(csv, "{},{}", t, val);
    }
    csv
}

/// CSV of a single run: `time_s,velocity_m_s,thrust_n`.
pub fn series_csv(result: &SimulationResult) -> String {
    let mut csv = String::from("time_s,velocity_m_s,thrust_n\n");
    for (t, v, f) in result.samples() {
        // Writing into a String cannot fail.
        let _ = writeln!(csv, "{},{},{}", t, v, f);
    }
    csv
}

/// CSV of one variable across scenarios: `time_s,<name>,...`.
///
/// All outcomes must share the same time grid.
pub fn comparison_csv(
    outcomes: &[ScenarioOutcome],
    variable: SeriesVariable,
) -> AppResult<String> {
    let first = outcomes
        .first()
        .ok_or_else(|| AppError::InvalidInput("No scenarios to compare".to_string()))?;
    for outcome in &outcomes[1..] {
        if outcome.result.time != first.result.time {
            return Err(AppError::InvalidInput(format!(
                "Scenario '{}' uses a different time grid than '{}'",
                outcome.name, first.name
            )));
        }
    }

    let mut csv = String::from("time_s");
    for outcome in outcomes {
        csv.push(',');
        csv.push_str(&outcome.name);
    }
    csv.push('\n');

    for (i, t) in first.result.time.iter().enumerate() {
        let _ = write!(csv, "{}", t);
        for outcome in outcomes {
            let _ = write!(csv, ",{}", variable.values(&outcome.result)[i]);
        }
        csv.push('\n');
    }
    Ok(csv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rw_sim::{SimulationParameters, simulate};

    fn coarse() -> SimulationResult {
        simulate(&SimulationParameters {
            total_time: 2.0,
            dt: 1.0,
            ..SimulationParameters::BASELINE
        })
        .unwrap()
    }

    #[test]
    fn parses_variable_names() {
        let parse = |s: &str| s.parse::<SeriesVariable>().unwrap();
        assert_eq!(parse("velocity"), SeriesVariable::Velocity);
        assert_eq!(parse("V"), SeriesVariable::Velocity);
        assert_eq!(parse("force"), SeriesVariable::Thrust);
        assert!("pressure".parse::<SeriesVariable>().is_err());
    }

    #[test]
    fn extracts_thrust_series() {
        let series = extract_series(&coarse(), SeriesVariable::Thrust);
        assert_eq!(series, vec![(0.0, 0.0), (1.0, 0.0), (2.0, 3000.0)]);
    }

    #[test]
    fn variable_csv_uses_column_name_header() {
        let csv = variable_csv(&coarse(), SeriesVariable::Thrust);
        assert_eq!(csv, "time_s,thrust_n\n0,0\n1,0\n2,3000\n");

        let csv = variable_csv(&coarse(), SeriesVariable::Velocity);
        assert!(csv.starts_with("time_s,velocity_m_s\n0,0\n"));
        assert_eq!(csv.lines().count(), 4);
    }

    #[test]
    fn single_run_csv_has_header_and_rows() {
        let csv = series_csv(&coarse());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "time_s,velocity_m_s,thrust_n");
        assert_eq!(lines[1], "0,0,0");
        assert!(lines[3].starts_with("2,3.91"));
        assert!(lines[3].ends_with(",3000"));
    }

    #[test]
    fn comparison_requires_shared_grid() {
        let a = ScenarioOutcome {
            name: "a".to_string(),
            params: SimulationParameters::BASELINE,
            result: coarse(),
        };
        let mut b = a.clone();
        b.name = "b".to_string();
        let csv = comparison_csv(&[a.clone(), b], SeriesVariable::Thrust).unwrap();
        assert_eq!(csv, "time_s,a,b\n0,0,0\n1,0,0\n2,3000,3000\n");

        let mut c = a.clone();
        c.name = "c".to_string();
        c.result.time.push(3.0);
        assert!(comparison_csv(&[a, c], SeriesVariable::Velocity).is_err());
        assert!(comparison_csv(&[], SeriesVariable::Velocity).is_err());
    }
}
