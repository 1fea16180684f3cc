use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rw_app::{
    AppError, AppResult, ParameterOverrides, ScenarioConfig, ScenarioSet, SeriesVariable,
    comparison_csv, report, run_scenarios, save_config, series,
};
use rw_sim::{SimulationParameters, simulate};

#[derive(Parser)]
#[command(name = "rw-cli")]
#[command(about = "RowSim CLI - Rowing boat velocity and energy simulation", long_about = None)]
struct Cli {
    /// Log engine and scenario details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the baseline boat, optionally with parameter overrides
    Simulate {
        #[command(flatten)]
        params: ParamArgs,
        /// Write the text summary to this file
        #[arg(long)]
        summary: Option<PathBuf>,
        /// Write time, velocity and thrust as CSV to this file
        #[arg(long)]
        series: Option<PathBuf>,
    },
    /// Run a scenario set and print the comparison table
    Scenarios {
        /// Scenario file (YAML or JSON); built-in set when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Export one scenario's time series as CSV
    ExportSeries {
        /// Scenario name
        scenario: String,
        /// Variable name (velocity or thrust)
        variable: String,
        /// Scenario file (YAML or JSON); built-in set when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export one variable across all scenarios as CSV
    Compare {
        /// Variable name (velocity or thrust)
        variable: String,
        /// Scenario file (YAML or JSON); built-in set when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the built-in scenario set to a file as a starting point
    InitConfig {
        /// Destination (.yaml or .json)
        path: PathBuf,
    },
}

/// Per-field overrides of the baseline parameters.
#[derive(Args, Debug, Default)]
struct ParamArgs {
    /// Run duration in seconds
    #[arg(long)]
    total_time: Option<f64>,
    /// Time step in seconds
    #[arg(long)]
    dt: Option<f64>,
    /// Boat plus crew mass in kg
    #[arg(long)]
    mass: Option<f64>,
    /// Quadratic drag coefficient in N·s²/m²
    #[arg(long)]
    k_drag: Option<f64>,
    /// Drive-phase force in N
    #[arg(long)]
    f_drive: Option<f64>,
    /// Drive duration per stroke in seconds
    #[arg(long)]
    drive_time: Option<f64>,
    /// Stroke cycle period in seconds
    #[arg(long)]
    cycle_time: Option<f64>,
    /// Starting velocity in m/s
    #[arg(long)]
    initial_velocity: Option<f64>,
}

impl ParamArgs {
    fn overrides(&self) -> ParameterOverrides {
        ParameterOverrides {
            total_time: self.total_time,
            dt: self.dt,
            mass: self.mass,
            k_drag: self.k_drag,
            f_drive: self.f_drive,
            drive_time: self.drive_time,
            cycle_time: self.cycle_time,
            initial_velocity: self.initial_velocity,
        }
    }
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Simulate {
            params,
            summary,
            series,
        } => cmd_simulate(&params, summary.as_deref(), series.as_deref()),
        Commands::Scenarios { config } => cmd_scenarios(config.as_deref()),
        Commands::ExportSeries {
            scenario,
            variable,
            config,
            output,
        } => cmd_export_series(&scenario, &variable, config.as_deref(), output.as_deref()),
        Commands::Compare {
            variable,
            config,
            output,
        } => cmd_compare(&variable, config.as_deref(), output.as_deref()),
        Commands::InitConfig { path } => cmd_init_config(&path),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_set(config: Option<&Path>) -> AppResult<ScenarioSet> {
    match config {
        Some(path) => {
            info!(path = %path.display(), "loading scenario file");
            ScenarioSet::from_file(path)
        }
        None => Ok(ScenarioSet::builtin()),
    }
}

fn write_output(content: &str, output: Option<&Path>, rows: usize) -> AppResult<()> {
    if let Some(path) = output {
        std::fs::write(path, content).map_err(|e| AppError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        println!("✓ Exported {} data points to {}", rows, path.display());
    } else {
        print!("{}", content);
    }
    Ok(())
}

fn cmd_simulate(
    args: &ParamArgs,
    summary: Option<&Path>,
    series_out: Option<&Path>,
) -> AppResult<()> {
    let params = args.overrides().apply(&SimulationParameters::BASELINE);
    println!(
        "Simulating {:.1} s at dt = {} s ({:.1} strokes/min)",
        params.total_time,
        params.dt,
        params.stroke_rate_spm()
    );

    let result = simulate(&params)?;
    report::write_summary(&result, &mut io::stdout().lock())?;

    if let Some(path) = summary {
        report::save_summary(&result, path)?;
        println!("✓ Summary written to {}", path.display());
    }
    if let Some(path) = series_out {
        write_output(&series::series_csv(&result), Some(path), result.len())?;
    }
    Ok(())
}

fn cmd_scenarios(config: Option<&Path>) -> AppResult<()> {
    let set = load_set(config)?;
    let outcomes = run_scenarios(&set)?;
    report::write_table(&outcomes, &mut io::stdout().lock())
}

fn cmd_export_series(
    scenario: &str,
    variable: &str,
    config: Option<&Path>,
    output: Option<&Path>,
) -> AppResult<()> {
    let variable: SeriesVariable = variable.parse()?;
    let set = load_set(config)?;
    let scenario = set
        .get(scenario)
        .ok_or_else(|| AppError::ScenarioNotFound(scenario.to_string()))?;
    let outcome = rw_app::run_scenario(scenario)?;

    let csv = series::variable_csv(&outcome.result, variable);
    write_output(&csv, output, outcome.result.len())
}

fn cmd_compare(variable: &str, config: Option<&Path>, output: Option<&Path>) -> AppResult<()> {
    let variable: SeriesVariable = variable.parse()?;
    let set = load_set(config)?;
    let outcomes = run_scenarios(&set)?;
    let csv = comparison_csv(&outcomes, variable)?;
    let rows = outcomes.first().map_or(0, |o| o.result.len());
    write_output(&csv, output, rows)
}

fn cmd_init_config(path: &Path) -> AppResult<()> {
    save_config(path, &ScenarioConfig::builtin())?;
    println!("✓ Wrote built-in scenarios to {}", path.display());
    Ok(())
}
