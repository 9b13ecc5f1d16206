//! Validated savings problem instance.

use log::{debug, warn};

use super::{DemandMap, DEPOT};
use crate::config::{MissingDemandPolicy, SavingsConfig};
use crate::distance::DistanceMatrix;
use crate::error::SavingsError;

/// A distance matrix, per-point demands and a vehicle capacity that have
/// passed validation.
///
/// All structural checks happen here, once, before construction starts:
/// capacity must be positive and finite, every delivery point of the matrix
/// must have a finite non-negative demand, and demand entries may not refer
/// to points outside the matrix. An entry for the depot is ignored.
///
/// # Examples
///
/// ```
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
///
/// let problem = SavingsProblem::new(dm, &demands, 20.0).unwrap();
/// assert_eq!(problem.num_points(), 2);
/// assert_eq!(problem.demand(2), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct SavingsProblem {
    distances: DistanceMatrix,
    demands: Vec<f64>,
    capacity: f64,
    config: SavingsConfig,
}

impl SavingsProblem {
    /// Validates the inputs with the default configuration.
    pub fn new(
        distances: DistanceMatrix,
        demands: &DemandMap,
        capacity: f64,
    ) -> Result<Self, SavingsError> {
        Self::with_config(distances, demands, capacity, SavingsConfig::default())
    }

    /// Validates the inputs with an explicit configuration.
    pub fn with_config(
        distances: DistanceMatrix,
        demands: &DemandMap,
        capacity: f64,
        config: SavingsConfig,
    ) -> Result<Self, SavingsError> {
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(SavingsError::InvalidCapacity(capacity));
        }

        if !distances.is_symmetric(1e-9) {
            warn!("distance matrix is not symmetric, only the upper triangle is used");
        }

        let n = distances.size();
        for (point, quantity) in demands.iter() {
            if point >= n {
                return Err(SavingsError::UnknownPoint(point));
            }
            if point == DEPOT {
                debug!("ignoring demand {quantity} given for the depot");
                continue;
            }
            if !quantity.is_finite() || quantity < 0.0 {
                return Err(SavingsError::InvalidDemand {
                    point,
                    value: quantity,
                });
            }
        }

        let mut resolved = vec![0.0; n];
        for (point, slot) in resolved.iter_mut().enumerate().skip(1) {
            *slot = match (demands.get(point), config.missing_demand) {
                (Some(quantity), _) => quantity,
                (None, MissingDemandPolicy::Reject) => {
                    return Err(SavingsError::MissingDemand(point))
                }
                (None, MissingDemandPolicy::TreatAsZero) => {
                    warn!("no demand given for point {point}, assuming 0");
                    0.0
                }
            };
        }

        Ok(Self {
            distances,
            demands: resolved,
            capacity,
            config,
        })
    }

    /// The distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Demand of `point` (0 for the depot).
    ///
    /// # Panics
    ///
    /// Panics if `point` is outside the matrix.
    pub fn demand(&self, point: usize) -> f64 {
        self.demands[point]
    }

    /// Vehicle capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Policies this instance was validated with.
    pub fn config(&self) -> &SavingsConfig {
        &self.config
    }

    /// Number of delivery points (depot excluded).
    pub fn num_points(&self) -> usize {
        self.distances.size().saturating_sub(1)
    }
}
