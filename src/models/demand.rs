//! Per-point demand quantities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Quantity each delivery point must receive, keyed by point index.
///
/// Iteration is in ascending point order.
///
/// # Examples
///
/// ```
/// use savings_routing::models::DemandMap;
///
/// let demands: DemandMap = [(1, 5.0), (2, 7.5)].into_iter().collect();
/// assert_eq!(demands.get(2), Some(7.5));
/// assert_eq!(demands.get(3), None);
/// assert_eq!(demands.total(), 12.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DemandMap {
    demands: BTreeMap<usize, f64>,
}

impl DemandMap {
    /// Creates an empty demand map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the demand of `point`, returning the previous value if any.
    pub fn insert(&mut self, point: usize, quantity: f64) -> Option<f64> {
        self.demands.insert(point, quantity)
    }

    /// Demand of `point`, if one was given.
    pub fn get(&self, point: usize) -> Option<f64> {
        self.demands.get(&point).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.demands.len()
    }

    /// Returns `true` if no demand was given.
    pub fn is_empty(&self) -> bool {
        self.demands.is_empty()
    }

    /// Sum of all quantities.
    pub fn total(&self) -> f64 {
        self.demands.values().sum()
    }

    /// Iterates `(point, quantity)` in ascending point order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.demands.iter().map(|(&p, &q)| (p, q))
    }
}

impl FromIterator<(usize, f64)> for DemandMap {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        Self {
            demands: iter.into_iter().collect(),
        }
    }
}
