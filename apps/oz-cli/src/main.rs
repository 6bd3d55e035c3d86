use clap::{Parser, Subcommand};
use oz_advisory::{AdvisoryRequest, RuleBasedAdvisor, advise_or_fallback};
use oz_project::{ProjectError, Scenario};
use oz_sim::{
    SweepDefinition, SweepError, SweepParameter, SweepType, TreatmentResult, TreatmentSimulator,
    assess_compliance, execute_sweep,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ozsim")]
#[command(about = "Ozone / peroxone contactor simulator", long_about = None)]
struct Cli {
    /// Log pipeline stages (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and value ranges
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Simulate one scenario
    Simulate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sweep one input across a range and export CSV
    Sweep {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Input to vary (ozone_dose, h2o2_dose, flow_rate, baffling_factor, ph,
        /// bromide, ammonia, doc, temperature)
        #[arg(long)]
        parameter: String,
        #[arg(long)]
        start: f64,
        #[arg(long)]
        end: f64,
        /// Number of points, including both ends
        #[arg(long, default_value_t = 11)]
        points: usize,
        /// Logarithmic spacing
        #[arg(long)]
        log: bool,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Produce advisory notes for a scenario
    Advise {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the reference scenario
    Template {
        /// Print JSON instead of YAML
        #[arg(long, conflicts_with = "output")]
        json: bool,
        /// Output file (.yaml, .yml or .json); format follows the extension
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Simulate {
            scenario_path,
            json,
        } => cmd_simulate(&scenario_path, json),
        Commands::Sweep {
            scenario_path,
            parameter,
            start,
            end,
            points,
            log,
            output,
        } => {
            let sweep_type = if log {
                SweepType::Logarithmic
            } else {
                SweepType::Linear
            };
            let parameter: SweepParameter = parameter.parse()?;
            let definition = SweepDefinition::new(parameter, start, end, points, sweep_type)?;
            cmd_sweep(&scenario_path, &definition, output.as_deref())
        }
        Commands::Advise {
            scenario_path,
            json,
        } => cmd_advise(&scenario_path, json),
        Commands::Template { json, output } => cmd_template(json, output.as_deref()),
    }
}

fn cmd_validate(scenario_path: &Path) -> CliResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = oz_project::load(scenario_path)?;
    println!("✓ Scenario '{}' is valid", scenario.name);
    Ok(())
}

fn cmd_simulate(scenario_path: &Path, json: bool) -> CliResult<()> {
    let scenario = oz_project::load(scenario_path)?;
    info!(scenario = %scenario.name, "simulating");
    let result = TreatmentSimulator::new().simulate(
        &scenario.system,
        &scenario.water,
        scenario.kinetics.as_ref(),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Scenario: {}", scenario.name);
    println!(
        "  Mode: {}",
        if scenario.system.is_aop() {
            "peroxone (O3/H2O2)"
        } else {
            "ozone only"
        }
    );
    print_result(&result);

    let findings = assess_compliance(
        &result,
        scenario.system.is_aop(),
        &scenario.limits_or_default(),
    );
    if !findings.is_empty() {
        println!("\nCompliance:");
        for finding in findings {
            println!("  [{}] {}", finding.severity, finding.message);
        }
    }
    println!("\nFingerprint: {}", result.fingerprint());
    Ok(())
}

fn print_result(r: &TreatmentResult) {
    println!("\nHydraulics:");
    println!("  HRT:      {:.2} min", r.hydraulic_retention_time_min);
    println!("  T10:      {:.2} min", r.t10_min);
    println!("\nDisinfection:");
    println!("  Residual: {:.2} mg/L", r.calculated_residual_mg_l);
    println!("  CT:       {:.2} mg*min/L", r.ct_value);
    println!(
        "  LRV:      virus {:.2}, bacteria {:.2}, protozoa {:.2}",
        r.lrv_virus, r.lrv_bacteria, r.lrv_protozoa
    );
    println!("\nEffluent:");
    println!("  pH:       {:.2}", r.final_ph);
    println!(
        "  MIB:      {:.2} ng/L ({:.1}% removed)",
        r.final_mib_ng_l, r.removal_mib_percent
    );
    println!(
        "  Geosmin:  {:.2} ng/L ({:.1}% removed)",
        r.final_geosmin_ng_l, r.removal_geosmin_percent
    );
    println!(
        "  DOC:      {:.2} mg/L ({:.1}% mineralised)",
        r.final_doc_mg_l, r.removal_doc_percent
    );
    println!("  Bromate:  {:.2} ug/L", r.bromate_ug_l);
}

fn cmd_sweep(
    scenario_path: &Path,
    definition: &SweepDefinition,
    output: Option<&Path>,
) -> CliResult<()> {
    let scenario = oz_project::load(scenario_path)?;
    let sweep = execute_sweep(
        definition,
        &scenario.system,
        &scenario.water,
        scenario.kinetics.as_ref(),
    );
    let csv = sweep.to_csv();

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} sweep points to {}",
            sweep.points.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_advise(scenario_path: &Path, json: bool) -> CliResult<()> {
    let scenario = oz_project::load(scenario_path)?;
    let result = oz_sim::simulate(&scenario.system, &scenario.water, scenario.kinetics.as_ref());
    let request = AdvisoryRequest::new(scenario.system, scenario.water, result);
    let advisor = RuleBasedAdvisor::new(scenario.limits_or_default());
    let report = advise_or_fallback(&advisor, &request);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.summary);
    if !report.recommendations.is_empty() {
        println!("\nRecommendations:");
        for rec in &report.recommendations {
            println!("  - {}", rec);
        }
    }
    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  ! {}", warning);
        }
    }
    Ok(())
}

fn cmd_template(json: bool, output: Option<&Path>) -> CliResult<()> {
    let scenario = Scenario::reference();
    match output {
        Some(path) => {
            oz_project::save(path, &scenario)?;
            println!("✓ Wrote reference scenario to {}", path.display());
        }
        None if json => println!("{}", serde_json::to_string_pretty(&scenario)?),
        None => print!("{}", serde_yaml::to_string(&scenario)?),
    }
    Ok(())
}
