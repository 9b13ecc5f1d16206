//! Clarke-Wright savings algorithm.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) compares serving two points
//! on one trip against serving each with its own depot round trip:
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! Pairs are visited in decreasing order of savings. Each accepted pair
//! opens a route, attaches a point to a route end, or joins two routes end to
//! end, subject to the vehicle capacity. Points that are never paired are not
//! part of any route.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of points (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use log::{debug, info};

use super::ConstructionEngine;
use crate::models::{Route, SavingsProblem};
use crate::savings::{compute_savings, rank_pairs};

/// Builds routes for a validated problem using the savings algorithm.
///
/// The result is a pure function of the problem: equal inputs always give
/// equal routes, in the order they were created.
///
/// # Examples
///
/// ```
/// use savings_routing::constructive::clarke_wright_savings;
/// use savings_routing::distance::DistanceMatrix;
/// use savings_routing::models::{DemandMap, SavingsProblem};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 2.0, 3.0],
///     vec![2.0, 0.0, 1.0],
///     vec![3.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let demands: DemandMap = [(1, 5.0), (2, 5.0)].into_iter().collect();
/// let problem = SavingsProblem::new(dm, &demands, 20.0).unwrap();
///
/// let routes = clarke_wright_savings(&problem);
/// assert_eq!(routes.len(), 1);
/// assert_eq!(routes[0].total_capacity(), 10.0);
/// assert_eq!(routes[0].total_distance(), 1.0);
/// assert_eq!(routes[0].total_saving(), 4.0);
/// ```
pub fn clarke_wright_savings(problem: &SavingsProblem) -> Vec<Route> {
    let savings = compute_savings(problem.distances());
    let ranked = rank_pairs(&savings);
    debug!(
        "ranked {} pairs over {} points, capacity {}",
        ranked.len(),
        problem.num_points(),
        problem.capacity()
    );

    let routes = ConstructionEngine::new(problem).run(&ranked);

    info!("pair count - {}", ranked.len());
    for (n, route) in routes.iter().enumerate() {
        info!(
            "#{} distance: {:.3}, saving: {:.3}, quantity: {:.3}, length: {}, route: {}",
            n + 1,
            route.total_distance(),
            route.total_saving(),
            route.total_capacity(),
            route.len(),
            route
        );
    }
    routes
}
