//! Tunable policies for route construction.

use serde::{Deserialize, Serialize};

/// How a route load is compared against the vehicle capacity when a route is
/// extended or two routes are merged.
///
/// # Examples
///
/// ```
/// use savings_routing::config::CapacityBound;
///
/// assert!(!CapacityBound::Exclusive.admits(20.0, 20.0));
/// assert!(CapacityBound::Inclusive.admits(20.0, 20.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityBound {
    /// The load must stay strictly below capacity (`load < capacity`).
    #[default]
    Exclusive,
    /// The load may reach capacity exactly (`load <= capacity`).
    Inclusive,
}

impl CapacityBound {
    /// Returns `true` if `load` is acceptable under this bound.
    pub fn admits(self, load: f64, capacity: f64) -> bool {
        match self {
            CapacityBound::Exclusive => load < capacity,
            CapacityBound::Inclusive => load <= capacity,
        }
    }
}

/// What to do when a point in the distance matrix has no demand entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDemandPolicy {
    /// Fail validation with [`SavingsError::MissingDemand`](crate::error::SavingsError::MissingDemand).
    #[default]
    Reject,
    /// Treat the point as having zero demand and log a warning.
    TreatAsZero,
}

/// Configuration for a savings run.
///
/// # Examples
///
/// ```
/// use savings_routing::config::{CapacityBound, MissingDemandPolicy, SavingsConfig};
///
/// let config = SavingsConfig::default()
///     .with_capacity_bound(CapacityBound::Inclusive)
///     .with_missing_demand(MissingDemandPolicy::TreatAsZero);
/// assert_eq!(config.capacity_bound, CapacityBound::Inclusive);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsConfig {
    /// Capacity comparison used for extensions and merges.
    pub capacity_bound: CapacityBound,
    /// Handling of points without a demand entry.
    pub missing_demand: MissingDemandPolicy,
}

impl SavingsConfig {
    /// Sets the capacity comparison.
    pub fn with_capacity_bound(mut self, bound: CapacityBound) -> Self {
        self.capacity_bound = bound;
        self
    }

    /// Sets the missing-demand policy.
    pub fn with_missing_demand(mut self, policy: MissingDemandPolicy) -> Self {
        self.missing_demand = policy;
        self
    }
}
