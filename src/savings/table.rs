//! Savings computation.

use std::collections::BTreeMap;

use crate::distance::DistanceMatrix;
use crate::models::{Pair, DEPOT};

/// Saving of every canonical pair of delivery points.
///
/// Stored in ascending pair order so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavingsTable {
    savings: BTreeMap<Pair, f64>,
}

impl SavingsTable {
    /// Saving of `pair`, if both points are inside the matrix.
    pub fn get(&self, pair: Pair) -> Option<f64> {
        self.savings.get(&pair).copied()
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.savings.len()
    }

    /// Returns `true` if there are fewer than two delivery points.
    pub fn is_empty(&self) -> bool {
        self.savings.is_empty()
    }

    /// Iterates `(pair, saving)` in ascending pair order.
    pub fn iter(&self) -> impl Iterator<Item = (Pair, f64)> + '_ {
        self.savings.iter().map(|(&p, &s)| (p, s))
    }
}

/// Saving of joining `i` and `j` on one trip instead of two round trips:
///
/// ```text
/// s(i, j) = d(0, i) + d(0, j) - d(i, j)
/// ```
pub fn saving(distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    distances.edge(DEPOT, i) + distances.edge(DEPOT, j) - distances.edge(i, j)
}

/// Computes the saving of every unordered pair of delivery points.
///
/// O(n²) time and space. Negative savings are kept; whether they are worth
/// merging is left to the construction rules.
///
/// # Examples
///
/// ```
/// use savings_routing::distance::DistanceMatrix;
/// use savings_routing::models::Pair;
/// use savings_routing::savings::compute_savings;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 2.0, 3.0],
///     vec![2.0, 0.0, 1.0],
///     vec![3.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let savings = compute_savings(&dm);
/// assert_eq!(savings.len(), 1);
/// assert_eq!(savings.get(Pair::new(1, 2).unwrap()), Some(4.0));
/// ```
pub fn compute_savings(distances: &DistanceMatrix) -> SavingsTable {
    let n = distances.size();
    let mut savings = BTreeMap::new();
    for i in 1..n {
        for j in (i + 1)..n {
            if let Some(pair) = Pair::new(i, j) {
                savings.insert(pair, saving(distances, i, j));
            }
        }
    }
    SavingsTable { savings }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> DistanceMatrix {
        // Depot at 0, points at 1, 2, 3 on a line.
        let xs = [0.0_f64, 1.0, 2.0, 3.0];
        let rows = xs
            .iter()
            .map(|a| xs.iter().map(|b| (a - b).abs()).collect())
            .collect();
        DistanceMatrix::from_rows(rows).expect("valid")
    }

    #[test]
    fn test_pair_count() {
        let table = compute_savings(&line());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_savings_values() {
        let table = compute_savings(&line());
        let s = |a, b| table.get(Pair::new(a, b).expect("valid")).expect("present");
        // s(1,2) = 1 + 2 - 1
        assert!((s(1, 2) - 2.0).abs() < 1e-10);
        // s(1,3) = 1 + 3 - 2
        assert!((s(1, 3) - 2.0).abs() < 1e-10);
        // s(2,3) = 2 + 3 - 1
        assert!((s(2, 3) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_depot_only() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0]]).expect("valid");
        assert!(compute_savings(&dm).is_empty());
    }

    #[test]
    fn test_single_point() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 4.0], vec![4.0, 0.0]]).expect("valid");
        assert!(compute_savings(&dm).is_empty());
    }

    #[test]
    fn test_negative_saving_kept() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 5.0],
            vec![1.0, 5.0, 0.0],
        ])
        .expect("valid");
        let table = compute_savings(&dm);
        assert_eq!(table.get(Pair::new(1, 2).expect("valid")), Some(-3.0));
    }

    #[test]
    fn test_saving_is_symmetric() {
        let dm = line();
        assert_eq!(saving(&dm, 1, 3), saving(&dm, 3, 1));
    }
}
