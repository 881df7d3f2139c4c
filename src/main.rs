//! # u-tsp CLI
//!
//! Reads a TSPLIB `EUC_2D` problem, solves it with the MST + 2-opt
//! pipeline, writes the tour ids to a file and prints a summary.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::error;
use u_tsp::local_search::DEFAULT_MAX_ITERATIONS;
use u_tsp::solver::{solve, SolverConfig, TourReport};
use u_tsp::{tsplib, Result};

/// Command-line interface for u-tsp
#[derive(Parser)]
#[command(name = "u-tsp", version)]
#[command(about = "Approximate Euclidean TSP tours via MST + 2-opt")]
#[command(long_about = "Approximate Euclidean TSP tours via MST + 2-opt:
  u-tsp berlin52.tsp                 # Solve, write tour.txt, print summary
  u-tsp - < berlin52.tsp             # Read the problem from stdin
  u-tsp berlin52.tsp --seed 42       # Reproduce an earlier run
  u-tsp berlin52.tsp --json          # Print the full report as JSON")]
struct Cli {
    /// TSPLIB problem file, or "-" for stdin
    #[arg(default_value = "-")]
    input: String,

    /// Tour output file (space-separated point ids)
    #[arg(short, long, default_value = "tour.txt")]
    output: PathBuf,

    /// Seed for MST tie-breaking (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Cap on 2-opt passes
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Print the report as JSON instead of the summary lines
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> SolverConfig {
        let config = SolverConfig::default().with_max_iterations(self.max_iterations);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(cli: &Cli) -> Result<()> {
    let instance = if cli.input == "-" {
        tsplib::read(io::stdin().lock())?
    } else {
        tsplib::read_path(&cli.input)?
    };
    log::debug!("loaded {:?} with {} points", instance.name(), instance.len());

    let report = solve(instance.points(), &cli.config())?;
    tsplib::write_tour_path(&cli.output, &report.tour)?;
    log::info!("tour written to {}", cli.output.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &report).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        print_summary(&mut out, &report)?;
    }
    Ok(())
}

fn print_summary<W: Write>(out: &mut W, report: &TourReport) -> Result<()> {
    writeln!(out, "Max distance: {}", report.max_edge)?;
    writeln!(out, "Total cost: {}", report.cost)?;
    writeln!(out, "Seed: {}", report.seed)?;
    Ok(())
}
