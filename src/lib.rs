//! # savings-routing
//!
//! Capacitated vehicle routing with the Clarke-Wright savings heuristic over
//! an explicit distance matrix, per-point demands and a single vehicle
//! capacity.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Pair, Route, DemandMap, SavingsProblem)
//! - [`distance`] — Distance matrix
//! - [`savings`] — Savings computation and pair ranking
//! - [`constructive`] — Route construction (engine, route table, compaction)
//! - [`config`] — Capacity and missing-demand policies
//! - [`parse`] — Reader for the `;`-separated tabular input format
//! - [`error`] — Validation and parse errors
//!
//! ## Example
//!
//! ```
//! use savings_routing::distance::DistanceMatrix;
//! use savings_routing::models::DemandMap;
//!
//! let dm = DistanceMatrix::from_rows(vec![
//!     vec![0.0, 2.0, 3.0],
//!     vec![2.0, 0.0, 1.0],
//!     vec![3.0, 1.0, 0.0],
//! ])
//! .unwrap();
//! let demands: DemandMap = [(1, 5.0), (2, 5.0)].into_iter().collect();
//!
//! let routes = savings_routing::solve(dm, &demands, 20.0).unwrap();
//! assert_eq!(routes.len(), 1);
//! assert_eq!(routes[0].to_string(), "0-1-2");
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod models;
pub mod parse;
pub mod savings;

use crate::config::SavingsConfig;
use crate::distance::DistanceMatrix;
use crate::error::SavingsError;
use crate::models::{DemandMap, Route, SavingsProblem};

/// Validates the inputs and builds routes with the default configuration.
pub fn solve(
    distances: DistanceMatrix,
    demands: &DemandMap,
    capacity: f64,
) -> Result<Vec<Route>, SavingsError> {
    solve_with(distances, demands, capacity, SavingsConfig::default())
}

/// Validates the inputs and builds routes with an explicit configuration.
pub fn solve_with(
    distances: DistanceMatrix,
    demands: &DemandMap,
    capacity: f64,
    config: SavingsConfig,
) -> Result<Vec<Route>, SavingsError> {
    let problem = SavingsProblem::with_config(distances, demands, capacity, config)?;
    Ok(constructive::clarke_wright_savings(&problem))
}
