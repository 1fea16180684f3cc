//! Plain-text reports: scenario comparison table and single-run summary.

use std::io::Write;
use std::path::Path;

use uom::si::energy::joule;
use uom::si::power::watt;
use uom::si::velocity::meter_per_second;

use rw_sim::SimulationResult;

use crate::error::{AppError, AppResult};
use crate::scenarios::ScenarioOutcome;

const TABLE_HEADER: &str = "Scenario\tAvg vel (m/s)\tMax vel (m/s)\tEfficiency (%)";

/// One tab-separated row per scenario, in outcome order.
pub fn write_table<W: Write>(outcomes: &[ScenarioOutcome], out: &mut W) -> AppResult<()> {
    writeln!(out, "{}", TABLE_HEADER)?;
    for outcome in outcomes {
        let r = &outcome.result;
        writeln!(
            out,
            "{:8}\t{:8.3}\t{:8.3}\t{:8.2}",
            outcome.name,
            r.avg_velocity,
            r.max_velocity,
            r.efficiency_pct()
        )?;
    }
    Ok(())
}

pub fn format_table(outcomes: &[ScenarioOutcome]) -> AppResult<String> {
    let mut buf = Vec::new();
    write_table(outcomes, &mut buf)?;
    String::from_utf8(buf).map_err(|e| AppError::InvalidInput(e.to_string()))
}

/// Human-readable summary of a single run.
pub fn write_summary<W: Write>(result: &SimulationResult, out: &mut W) -> AppResult<()> {
    let energies = result.energies();
    writeln!(out, "Rowing simulation results")?;
    writeln!(out, "==========================")?;
    writeln!(out, "Total simulation time: {:.2} s", result.final_time())?;
    writeln!(
        out,
        "Average velocity (last half): {:.3} m/s",
        result.mean_velocity().get::<meter_per_second>()
    )?;
    writeln!(
        out,
        "Maximum velocity: {:.3} m/s",
        result.peak_velocity().get::<meter_per_second>()
    )?;
    writeln!(
        out,
        "Total energy input by rowers: {:.1} J",
        energies.input.get::<joule>()
    )?;
    writeln!(
        out,
        "Average input power: {:.1} W",
        result.average_input_power().get::<watt>()
    )?;
    writeln!(
        out,
        "Energy dissipated by drag: {:.1} J",
        energies.drag.get::<joule>()
    )?;
    writeln!(
        out,
        "Change in kinetic energy: {:.1} J",
        energies.delta_kinetic.get::<joule>()
    )?;
    writeln!(out, "Mechanical efficiency: {:.2} %", result.efficiency_pct())?;
    Ok(())
}

pub fn format_summary(result: &SimulationResult) -> AppResult<String> {
    let mut buf = Vec::new();
    write_summary(result, &mut buf)?;
    String::from_utf8(buf).map_err(|e| AppError::InvalidInput(e.to_string()))
}

/// Write the summary text to `path`.
pub fn save_summary(result: &SimulationResult, path: &Path) -> AppResult<()> {
    let text = format_summary(result)?;
    std::fs::write(path, text).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
