//! Pair-by-pair route construction.
//!
//! Each ranked pair `(i, j)` is examined once:
//!
//! - either point already has two edges: skip
//! - both free: open a new route `[i, j]`
//! - both on routes: join the two routes if `i` and `j` are route ends on
//!   different routes and the combined load fits
//! - one on a route: attach the free point at the end the other occupies,
//!   if that point is a route end and the load fits

use log::{debug, trace};

use super::{NodeRegistry, RouteTable};
use crate::models::{Node, Route, SavingsProblem};
use crate::savings::RankedPair;

/// Why a pair was not used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// One of the points already has two edges.
    Saturated,
    /// Both points are on the same route; joining them would close a cycle.
    SameRoute,
    /// A routed point of the pair is interior to its route.
    NotAtBorder,
    /// The resulting load would not fit the vehicle.
    CapacityExceeded,
}

/// Outcome of processing one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// A new two-point route was opened.
    Created {
        /// Index of the new route.
        route: usize,
    },
    /// A free point was attached to an existing route.
    Extended {
        /// Index of the extended route.
        route: usize,
        /// The attached point.
        point: usize,
    },
    /// Two routes were joined into a new one.
    Merged {
        /// Index of the combined route.
        route: usize,
        /// Indices of the two source routes, now tombstones.
        absorbed: [usize; 2],
    },
    /// The pair was rejected.
    Skipped(SkipReason),
}

impl Decision {
    /// Returns `true` if the pair changed the route set.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Decision::Skipped(_))
    }
}

/// Construction state for one run of the savings algorithm.
///
/// Owns its node registry and route table, so independent runs never share
/// mutable state. Pairs can be fed one at a time with [`step`](Self::step),
/// which lets a caller stop between pairs, or all at once with
/// [`run`](Self::run).
///
/// # Examples
///
/// ```
/// use savings_routing::constructive::{ConstructionEngine, Decision};
/// use savings_routing::distance::DistanceMatrix;
/// use savings_routing::models::{DemandMap, SavingsProblem};
/// use savings_routing::savings::{compute_savings, rank_pairs};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 2.0, 3.0],
///     vec![2.0, 0.0, 1.0],
///     vec![3.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let demands: DemandMap = [(1, 5.0), (2, 5.0)].into_iter().collect();
/// let problem = SavingsProblem::new(dm, &demands, 20.0).unwrap();
/// let ranked = rank_pairs(&compute_savings(problem.distances()));
///
/// let mut engine = ConstructionEngine::new(&problem);
/// assert_eq!(engine.step(&ranked[0]), Decision::Created { route: 0 });
/// let routes = engine.finish();
/// assert_eq!(routes[0].points(), &[1, 2]);
/// ```
#[derive(Debug)]
pub struct ConstructionEngine<'a> {
    problem: &'a SavingsProblem,
    registry: NodeRegistry,
    table: RouteTable,
}

impl<'a> ConstructionEngine<'a> {
    /// Creates an engine with empty state for `problem`.
    pub fn new(problem: &'a SavingsProblem) -> Self {
        Self {
            problem,
            registry: NodeRegistry::new(problem.distances().size()),
            table: RouteTable::new(),
        }
    }

    /// Processes every pair in order and returns the compacted routes.
    pub fn run(mut self, ranked: &[RankedPair]) -> Vec<Route> {
        for pair in ranked {
            self.step(pair);
        }
        self.finish()
    }

    /// Processes a single pair.
    pub fn step(&mut self, ranked: &RankedPair) -> Decision {
        let (i, j) = (ranked.pair.left(), ranked.pair.right());
        let node_i = self.registry.lookup(i);
        let node_j = self.registry.lookup(j);

        let decision = if node_i.is_some_and(|n| n.is_saturated())
            || node_j.is_some_and(|n| n.is_saturated())
        {
            Decision::Skipped(SkipReason::Saturated)
        } else {
            match (node_i, node_j) {
                (None, None) => self.create(i, j, ranked.saving),
                (Some(a), Some(b)) => self.merge(i, a, j, b, ranked.saving),
                (Some(a), None) => self.extend(i, a, j, ranked.saving),
                (None, Some(b)) => self.extend(j, b, i, ranked.saving),
            }
        };

        trace!(
            "pair {{{i}, {j}}} with saving {:.5}: {decision:?}",
            ranked.saving
        );
        decision
    }

    /// Current point bookkeeping.
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// Current route slots, tombstones included.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Ends construction, returning the live routes in creation order.
    pub fn finish(self) -> Vec<Route> {
        self.table.into_routes()
    }

    fn create(&mut self, i: usize, j: usize, saving: f64) -> Decision {
        let load = self.problem.demand(i) + self.problem.demand(j);
        if load > self.problem.capacity() {
            return Decision::Skipped(SkipReason::CapacityExceeded);
        }

        let distance = self.problem.distances().edge(i, j);
        let route = self
            .table
            .push(Route::from_pair(i, j, load, distance, saving));
        self.registry.bind(i, route, 1);
        self.registry.bind(j, route, 1);
        Decision::Created { route }
    }

    fn extend(&mut self, anchor: usize, node: Node, free: usize, saving: f64) -> Decision {
        let Some(route) = self.table.get(node.route_index) else {
            return Decision::Skipped(SkipReason::NotAtBorder);
        };
        if !route.at_border(anchor) {
            return Decision::Skipped(SkipReason::NotAtBorder);
        }

        let demand = self.problem.demand(free);
        if !self.fits(route.total_capacity() + demand) {
            return Decision::Skipped(SkipReason::CapacityExceeded);
        }

        let append = route.last() == anchor;
        let distance = self.problem.distances().edge(anchor, free);
        let Some(route) = self.table.get_mut(node.route_index) else {
            return Decision::Skipped(SkipReason::NotAtBorder);
        };
        if append {
            route.add_point(free, demand, distance, saving);
        } else {
            route.insert_point(free, demand, distance, saving);
        }

        self.registry.bind(free, node.route_index, 1);
        self.registry.increment_connections(anchor);
        Decision::Extended {
            route: node.route_index,
            point: free,
        }
    }

    fn merge(&mut self, i: usize, a: Node, j: usize, b: Node, saving: f64) -> Decision {
        if a.route_index == b.route_index {
            return Decision::Skipped(SkipReason::SameRoute);
        }
        let (Some(route_a), Some(route_b)) =
            (self.table.get(a.route_index), self.table.get(b.route_index))
        else {
            return Decision::Skipped(SkipReason::NotAtBorder);
        };
        if !(route_a.at_border(i) && route_b.at_border(j)) {
            return Decision::Skipped(SkipReason::NotAtBorder);
        }
        if !self.fits(route_a.total_capacity() + route_b.total_capacity()) {
            return Decision::Skipped(SkipReason::CapacityExceeded);
        }

        // The longer route leads; on equal length the route of `j` does.
        let (head, head_end, tail, tail_start) = if route_a.len() > route_b.len() {
            (a.route_index, i, b.route_index, j)
        } else {
            (b.route_index, j, a.route_index, i)
        };
        let Some(combined) = self.table.merge(head, head_end, tail, tail_start) else {
            return Decision::Skipped(SkipReason::SameRoute);
        };

        let distance = self.problem.distances().edge(i, j);
        if let Some(route) = self.table.get_mut(combined) {
            route.add_edge(distance, saving);
            for &point in route.points() {
                self.registry.rebind(point, combined);
            }
        }
        self.registry.increment_connections(i);
        self.registry.increment_connections(j);

        debug!("merged routes {head} and {tail} into {combined} via {{{i}, {j}}}");
        Decision::Merged {
            route: combined,
            absorbed: [head, tail],
        }
    }

    fn fits(&self, load: f64) -> bool {
        self.problem
            .config()
            .capacity_bound
            .admits(load, self.problem.capacity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{DemandMap, Pair};

    /// Depot at the origin, points on the x axis at the given offsets.
    fn line_problem(xs: &[f64], demand: f64, capacity: f64) -> SavingsProblem {
        let coords: Vec<f64> = std::iter::once(0.0).chain(xs.iter().copied()).collect();
        let rows = coords
            .iter()
            .map(|a| coords.iter().map(|b| (a - b).abs()).collect())
            .collect();
        let dm = DistanceMatrix::from_rows(rows).expect("valid");
        let demands: DemandMap = (1..coords.len()).map(|p| (p, demand)).collect();
        SavingsProblem::new(dm, &demands, capacity).expect("valid")
    }

    fn ranked(i: usize, j: usize, saving: f64) -> RankedPair {
        RankedPair {
            pair: Pair::new(i, j).expect("valid"),
            saving,
        }
    }

    #[test]
    fn test_create_route() {
        let p = line_problem(&[1.0, 2.0], 5.0, 20.0);
        let mut e = ConstructionEngine::new(&p);
        assert_eq!(e.step(&ranked(1, 2, 2.0)), Decision::Created { route: 0 });
        assert_eq!(e.registry().lookup(1), Some(Node::new(0, 1)));
        assert_eq!(e.registry().lookup(2), Some(Node::new(0, 1)));
        let route = e.table().get(0).expect("slot");
        assert_eq!(route.total_capacity(), 10.0);
        assert_eq!(route.total_distance(), 1.0);
        assert_eq!(route.total_saving(), 2.0);
    }

    #[test]
    fn test_create_over_capacity_skipped() {
        let p = line_problem(&[1.0, 2.0], 5.0, 8.0);
        let mut e = ConstructionEngine::new(&p);
        assert_eq!(
            e.step(&ranked(1, 2, 2.0)),
            Decision::Skipped(SkipReason::CapacityExceeded)
        );
        assert!(e.registry().lookup(1).is_none());
        assert!(e.finish().is_empty());
    }

    #[test]
    fn test_create_at_exact_capacity() {
        let p = line_problem(&[1.0, 2.0], 5.0, 10.0);
        let mut e = ConstructionEngine::new(&p);
        assert_eq!(e.step(&ranked(1, 2, 2.0)), Decision::Created { route: 0 });
    }

    #[test]
    fn test_extend_append_and_prepend() {
        let p = line_problem(&[1.0, 2.0, 3.0, 4.0], 1.0, 100.0);
        let mut e = ConstructionEngine::new(&p);
        e.step(&ranked(2, 3, 0.0));
        assert_eq!(
            e.step(&ranked(3, 4, 0.0)),
            Decision::Extended { route: 0, point: 4 }
        );
        assert_eq!(
            e.step(&ranked(1, 2, 0.0)),
            Decision::Extended { route: 0, point: 1 }
        );
        let route = e.table().get(0).expect("slot");
        assert_eq!(route.points(), &[1, 2, 3, 4]);
        assert_eq!((route.first(), route.last()), (1, 4));
        assert_eq!(route.total_capacity(), 4.0);
        assert!((route.total_distance() - 3.0).abs() < 1e-10);
        assert_eq!(e.registry().lookup(2), Some(Node::new(0, 2)));
        assert_eq!(e.registry().lookup(3), Some(Node::new(0, 2)));
    }

    #[test]
    fn test_saturated_point_skipped() {
        let p = line_problem(&[1.0, 2.0, 3.0, 4.0], 1.0, 100.0);
        let mut e = ConstructionEngine::new(&p);
        e.step(&ranked(1, 2, 0.0));
        e.step(&ranked(2, 3, 0.0));
        assert_eq!(
            e.step(&ranked(2, 4, 0.0)),
            Decision::Skipped(SkipReason::Saturated)
        );
    }

    #[test]
    fn test_same_route_skipped() {
        let p = line_problem(&[1.0, 2.0, 3.0], 1.0, 100.0);
        let mut e = ConstructionEngine::new(&p);
        e.step(&ranked(1, 2, 0.0));
        e.step(&ranked(2, 3, 0.0));
        assert_eq!(
            e.step(&ranked(1, 3, 0.0)),
            Decision::Skipped(SkipReason::SameRoute)
        );
    }

    #[test]
    fn test_extend_over_capacity_skipped() {
        // 5 + 5 fits, 5 + 5 + 5 = 15 is not below 15.
        let p = line_problem(&[1.0, 2.0, 3.0], 5.0, 15.0);
        let mut e = ConstructionEngine::new(&p);
        e.step(&ranked(1, 2, 0.0));
        assert_eq!(
            e.step(&ranked(2, 3, 0.0)),
            Decision::Skipped(SkipReason::CapacityExceeded)
        );
        assert!(e.registry().lookup(3).is_none());
    }

    #[test]
    fn test_extend_inclusive_bound() {
        use crate::config::{CapacityBound, SavingsConfig};

        let base = line_problem(&[1.0, 2.0, 3.0], 5.0, 15.0);
        let demands: DemandMap = (1..=3).map(|p| (p, 5.0)).collect();
        let config = SavingsConfig::default().with_capacity_bound(CapacityBound::Inclusive);
        let p = SavingsProblem::with_config(base.distances().clone(), &demands, 15.0, config)
            .expect("valid");
        let mut e = ConstructionEngine::new(&p);
        e.step(&ranked(1, 2, 0.0));
        assert_eq!(
            e.step(&ranked(2, 3, 0.0)),
            Decision::Extended { route: 0, point: 3 }
        );
    }

    #[test]
    fn test_merge_routes() {
        let p = line_problem(&[1.0, 2.0, 3.0, 4.0], 1.0, 100.0);
        let mut e = ConstructionEngine::new(&p);
        e.step(&ranked(1, 2, 0.0));
        e.step(&ranked(3, 4, 0.0));
        let decision = e.step(&ranked(2, 3, 0.0));
        assert_eq!(
            decision,
            Decision::Merged {
                route: 2,
                absorbed: [1, 0]
            }
        );
        assert!(decision.is_accepted());

        let route = e.table().get(2).expect("slot");
        // Route of 3 leads on equal length, oriented to end at 3.
        assert_eq!(route.points(), &[4, 3, 2, 1]);
        assert_eq!(route.total_capacity(), 4.0);
        assert!((route.total_distance() - 3.0).abs() < 1e-10);
        for point in 1..=4 {
            assert_eq!(e.registry().lookup(point).expect("bound").route_index, 2);
        }
        assert_eq!(e.registry().lookup(2).expect("bound").connections, 2);
        assert_eq!(e.registry().lookup(3).expect("bound").connections, 2);
        assert_eq!(e.registry().lookup(1).expect("bound").connections, 1);
        assert_eq!(e.table().num_live(), 1);
    }

    #[test]
    fn test_merge_longer_route_leads() {
        let p = line_problem(&[1.0, 2.0, 3.0, 4.0, 5.0], 1.0, 100.0);
        let mut e = ConstructionEngine::new(&p);
        e.step(&ranked(1, 2, 0.0));
        e.step(&ranked(2, 3, 0.0));
        e.step(&ranked(4, 5, 0.0));
        assert_eq!(
            e.step(&ranked(3, 4, 0.0)),
            Decision::Merged {
                route: 2,
                absorbed: [0, 1]
            }
        );
        let routes = e.finish();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].points(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_merge_joins_first_points() {
        let p = line_problem(&[1.0, 2.0, 3.0, 4.0], 1.0, 100.0);
        let mut e = ConstructionEngine::new(&p);
        e.step(&ranked(1, 2, 0.0));
        e.step(&ranked(3, 4, 0.0));
        e.step(&ranked(1, 3, 0.0));
        let routes = e.finish();
        assert_eq!(routes.len(), 1);
        let points = routes[0].points();
        let pos = |x| points.iter().position(|&q| q == x).expect("present");
        assert_eq!(pos(1).abs_diff(pos(3)), 1);
        assert!(
            (routes[0].total_distance() - p.distances().path_distance(points)).abs() < 1e-10
        );
    }

    #[test]
    fn test_interior_point_skipped() {
        let p = line_problem(&[1.0, 2.0, 3.0, 4.0, 5.0], 1.0, 100.0);
        let mut e = ConstructionEngine::new(&p);
        e.step(&ranked(1, 2, 0.0));
        e.step(&ranked(2, 3, 0.0));
        e.step(&ranked(4, 5, 0.0));
        // 2 is interior to [1, 2, 3], so it already has both edges.
        assert_eq!(
            e.step(&ranked(2, 4, 0.0)),
            Decision::Skipped(SkipReason::Saturated)
        );
        assert_eq!(e.table().num_live(), 2);
    }

    #[test]
    fn test_merge_over_capacity_skipped() {
        let p = line_problem(&[1.0, 2.0, 3.0, 4.0], 5.0, 20.0);
        let mut e = ConstructionEngine::new(&p);
        e.step(&ranked(1, 2, 0.0));
        e.step(&ranked(3, 4, 0.0));
        assert_eq!(
            e.step(&ranked(2, 3, 0.0)),
            Decision::Skipped(SkipReason::CapacityExceeded)
        );
        assert_eq!(e.finish().len(), 2);
    }
}
