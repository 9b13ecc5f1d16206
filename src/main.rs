//! Command-line entry point: reads a distance matrix and demand file, prints
//! the savings routes as JSON.
#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use savings_routing::config::{CapacityBound, MissingDemandPolicy, SavingsConfig};
use savings_routing::distance::DistanceMatrix;
use savings_routing::error::{ParseError, SavingsError};
use savings_routing::parse::{parse_capacity, parse_demands, parse_matrix};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(
    name = "savings-routing",
    about = "Build delivery routes with the Clarke-Wright savings heuristic",
    version
)]
struct Cli {
    /// Distance matrix file: one `;`-separated row per line, row 0 = depot.
    #[arg(long, value_name = "path")]
    matrix: PathBuf,
    /// Demand file: one `point;quantity` line per delivery point.
    #[arg(long, value_name = "path")]
    demands: PathBuf,
    /// Vehicle capacity (`,` or `.` decimal separator).
    #[arg(long, value_name = "decimal")]
    capacity: String,
    /// Accept routes whose load equals the capacity exactly.
    #[arg(long)]
    inclusive_capacity: bool,
    /// Treat points without a demand entry as having zero demand.
    #[arg(long)]
    zero_missing_demand: bool,
    /// Print JSON on a single line.
    #[arg(long)]
    compact: bool,
}

impl Cli {
    fn config(&self) -> SavingsConfig {
        let bound = if self.inclusive_capacity {
            CapacityBound::Inclusive
        } else {
            CapacityBound::Exclusive
        };
        let missing = if self.zero_missing_demand {
            MissingDemandPolicy::TreatAsZero
        } else {
            MissingDemandPolicy::Reject
        };
        SavingsConfig::default()
            .with_capacity_bound(bound)
            .with_missing_demand(missing)
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("invalid capacity: {0}")]
    Capacity(#[source] ParseError),
    #[error(transparent)]
    Invalid(#[from] SavingsError),
    #[error("failed to serialize routes: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

fn main() {
    env_logger::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("savings-routing: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let rows = read_with(&cli.matrix, parse_matrix)?;
    let demands = read_with(&cli.demands, parse_demands)?;
    let capacity = parse_capacity(&cli.capacity).map_err(CliError::Capacity)?;

    let distances = DistanceMatrix::from_rows(rows)?;
    let routes = savings_routing::solve_with(distances, &demands, capacity, cli.config())?;

    let json = if cli.compact {
        serde_json::to_string(&routes)?
    } else {
        serde_json::to_string_pretty(&routes)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").map_err(CliError::Write)
}

fn read_with<T>(
    path: &Path,
    parse: impl FnOnce(BufReader<File>) -> Result<T, ParseError>,
) -> Result<T, CliError> {
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse(BufReader::new(file)).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
