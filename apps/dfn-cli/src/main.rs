use clap::{Parser, Subcommand};
use dfn_core::units::constants::SECONDS_PER_YEAR;
use dfn_project::{CaseDef, ProjectResult, TemperatureQueryDef, load_case};
use dfn_thermal::ThermalNetwork;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dfn-cli")]
#[command(about = "Flow and thermal breakthrough in discrete fracture networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a case file
    Validate {
        /// Path to the case file (.yaml, .yml or .json)
        case_path: PathBuf,
    },
    /// Solve the flow and print node pressures and segment mass flow
    Flow {
        /// Path to the case file
        case_path: PathBuf,
    },
    /// List every flow path from the injection nodes to a node (needs a thermal section)
    Paths {
        /// Path to the case file
        case_path: PathBuf,
        /// Target node
        #[arg(long)]
        target: usize,
    },
    /// Dimensionless temperature of a segment
    Temperature {
        /// Path to the case file
        case_path: PathBuf,
        /// Segment to query (defaults to the case's own queries)
        #[arg(long)]
        segment: Option<usize>,
        /// Distances from the segment inlet in m, comma separated
        #[arg(long, value_delimiter = ',')]
        distance: Vec<f64>,
        /// Times in s, comma separated
        #[arg(long, value_delimiter = ',')]
        time: Vec<f64>,
    },
    /// Run the case's aperture uncertainty study
    Study {
        /// Path to the case file
        case_path: PathBuf,
    },
}

fn main() -> ProjectResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Flow { case_path } => cmd_flow(&case_path),
        Commands::Paths { case_path, target } => cmd_paths(&case_path, target),
        Commands::Temperature {
            case_path,
            segment,
            distance,
            time,
        } => cmd_temperature(&case_path, segment, distance, time),
        Commands::Study { case_path } => cmd_study(&case_path),
    }
}

fn cmd_validate(case_path: &Path) -> ProjectResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = load(case_path)?;
    println!("✓ Case '{}' is valid", case.name);
    println!(
        "  Segments: {}, temperature queries: {}, study: {}",
        case.network.connectivity.len(),
        case.temperature.len(),
        if case.study.is_some() { "yes" } else { "no" }
    );
    Ok(())
}

fn cmd_flow(case_path: &Path) -> ProjectResult<()> {
    let case = load(case_path)?;
    let mut net = case.flow_network()?;
    let state = net.calculate_flow(
        &case.fluid(),
        &case.flow.essential_bc,
        &case.flow.point_sources,
        case.flow.correct,
    )?;

    println!("✓ Flow solved for case '{}'", case.name);
    println!("Node pressures (Pa):");
    for (node, p) in state.pressure.iter().enumerate() {
        println!("  {node:>4}  {p:>14.6e}");
    }
    println!("Segment mass flow (kg/s):");
    for (i, (&(inlet, outlet), m)) in net
        .topology()
        .connectivity()
        .iter()
        .zip(&net.state()?.mass_flow)
        .enumerate()
    {
        println!("  {i:>4}  {inlet:>4} -> {outlet:<4}  {m:>14.6e}");
    }
    Ok(())
}

fn cmd_paths(case_path: &Path, target: usize) -> ProjectResult<()> {
    let case = load(case_path)?;
    let net = solved_thermal_network(&case)?;
    let injection = net.injection_nodes()?;
    let paths = net.find_paths(&injection, target)?;

    println!("Injection nodes: {injection:?}");
    if paths.is_empty() {
        println!("No upstream path to node {target}");
    } else {
        println!("{} path(s) to node {target}:", paths.len());
        for path in &paths {
            println!("  {path:?}");
        }
    }
    Ok(())
}

fn cmd_temperature(
    case_path: &Path,
    segment: Option<usize>,
    distance: Vec<f64>,
    time: Vec<f64>,
) -> ProjectResult<()> {
    let case = load(case_path)?;
    let queries = match segment {
        Some(segment) => vec![TemperatureQueryDef {
            segment,
            distance,
            time,
        }],
        None => case.temperature.clone(),
    };
    if queries.is_empty() {
        println!("No temperature queries in case and no --segment given");
        return Ok(());
    }

    let net = solved_thermal_network(&case)?;
    let fluid = case.fluid();
    for query in &queries {
        let theta = net.calculate_temperature(&fluid, query.segment, &query.distance, &query.time)?;
        println!("Segment {} (rows: time in years, columns: distance in m)", query.segment);
        print!("  {:>10}", "t \\ z");
        for z in &query.distance {
            print!("  {z:>10.2}");
        }
        println!();
        for (row, t) in query.time.iter().enumerate() {
            print!("  {:>10.3}", t / SECONDS_PER_YEAR);
            for col in 0..query.distance.len() {
                print!("  {:>10.6}", theta[(row, col)]);
            }
            println!();
        }
    }
    Ok(())
}

fn cmd_study(case_path: &Path) -> ProjectResult<()> {
    let case = load(case_path)?;
    let study = case.aperture_study()?;
    let sigmas = case
        .study
        .as_ref()
        .map(|s| s.relative_sigma.clone())
        .unwrap_or_default();

    println!(
        "Running aperture study: segment {}, {} simulations per sigma",
        study.segment, study.sampling.n_sims
    );
    let start = Instant::now();
    let outcomes = study.sweep(&sigmas)?;

    println!("  {:>8}  {:>10}  {:>10}  {:>10}", "sigma/w0", "p25", "p50", "p75");
    for outcome in &outcomes {
        let p = outcome.percentiles;
        println!(
            "  {:>8.3}  {:>10.6}  {:>10.6}  {:>10.6}",
            outcome.relative_sigma, p.p25, p.p50, p.p75
        );
    }
    println!("✓ Study completed in {:.2?}", start.elapsed());
    Ok(())
}

fn load(case_path: &Path) -> ProjectResult<CaseDef> {
    let case = load_case(case_path)?;
    info!(case = %case.name, path = %case_path.display(), "loaded case");
    Ok(case)
}

fn solved_thermal_network(case: &CaseDef) -> ProjectResult<ThermalNetwork> {
    let mut net = case.thermal_network()?;
    net.calculate_flow(
        &case.fluid(),
        &case.flow.essential_bc,
        &case.flow.point_sources,
        case.flow.correct,
    )?;
    Ok(net)
}
