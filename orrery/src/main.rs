use orrery::simulation::diagnostics::{relative_drift, total_energy};
use orrery::simulation::params::{steps_for_years, DAYS_PER_YEAR, SECONDS_PER_DAY};
use orrery::{bench_step, bench_step_curve, BENCH_SIZES};
use orrery::{CsvExporter, Parameters, Scenario, ScenarioConfig, Simulation};
use clap::Parser;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Direct-summation N-body run of a solar-system analogue, exported as CSV
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Scenario YAML; looked up in the crate's `scenarios/` dir if not found as given.
    /// Without it the built-in solar system is used.
    #[arg(short, long, value_name = "FILE")]
    file_name: Option<String>,

    /// Output CSV path
    #[arg(short, long, value_name = "FILE", default_value = "solar_system_atlas.csv")]
    output: PathBuf,

    /// Simulated years at 365 steps per year (overrides the scenario)
    #[arg(long, value_name = "YEARS")]
    years: Option<u64>,

    /// Exact step count (overrides the scenario and --years)
    #[arg(long, value_name = "COUNT")]
    steps: Option<u64>,

    /// Seconds per step (overrides the scenario)
    #[arg(long, value_name = "SECONDS")]
    time_step: Option<f64>,

    /// Steps between exported snapshots, 0 to disable (overrides the scenario)
    #[arg(long, value_name = "STEPS")]
    export_every: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Time the step pipeline for growing body counts and exit
    #[arg(long)]
    bench: bool,

    /// Print an N,ms_per_step curve and exit
    #[arg(long)]
    bench_curve: bool,
}

// resolve here to keep main clean
fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn load_scenario(args: &Args) -> Result<Scenario> {
    let mut scenario = match &args.file_name {
        Some(file_name) => {
            let path = scenario_path(file_name);
            info!("loading scenario from {}", path.display());
            let cfg = ScenarioConfig::load(&path)
                .with_context(|| format!("failed to load scenario {}", path.display()))?;
            Scenario::build_scenario(cfg)
                .with_context(|| format!("invalid scenario {}", path.display()))?
        }
        None => Scenario::solar_system(Parameters::default()),
    };

    let params = &mut scenario.parameters;
    if let Some(years) = args.years {
        params.total_steps = steps_for_years(years).context("invalid --years")?;
    }
    if let Some(steps) = args.steps {
        params.total_steps = steps;
    }
    if let Some(dt) = args.time_step {
        params.time_step = dt;
    }
    if let Some(every) = args.export_every {
        params.export_every = every;
    }

    Ok(scenario)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    if args.bench {
        // timings are logged as they are taken
        let _timings = bench_step(&BENCH_SIZES, 3);
        return Ok(());
    }
    if args.bench_curve {
        bench_step_curve();
        return Ok(());
    }

    let scenario = load_scenario(&args)?;
    let years = scenario.parameters.total_steps as f64 * scenario.parameters.time_step
        / (DAYS_PER_YEAR as f64 * SECONDS_PER_DAY);
    info!(
        "Starting simulation of {} bodies for {:.1} years...",
        scenario.bodies.len(),
        years
    );

    let mut exporter = CsvExporter::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    let mut sim = Simulation::from_scenario(scenario);
    let e0 = total_energy(&sim.bodies);

    let summary = sim
        .run(&mut exporter)
        .with_context(|| format!("failed writing {}", args.output.display()))?;

    let e1 = total_energy(&sim.bodies);
    info!("relative energy drift: {:.3e}", relative_drift(e0, e1));
    info!(
        "Simulation successfully completed ({} snapshot batches). Output: {}",
        summary.batches,
        args.output.display()
    );

    Ok(())
}
