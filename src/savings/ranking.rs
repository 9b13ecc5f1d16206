//! Ordering of pairs by saving.

use std::cmp::Ordering;

use super::SavingsTable;
use crate::models::Pair;

/// A pair together with its saving, as consumed by the construction loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedPair {
    /// The canonical pair.
    pub pair: Pair,
    /// Its saving.
    pub saving: f64,
}

/// Orders all pairs by descending saving.
///
/// Pairs with equal saving are ordered by ascending `(left, right)`, so the
/// result depends only on the savings values.
///
/// # Examples
///
/// ```
/// use savings_routing::distance::DistanceMatrix;
/// use savings_routing::savings::{compute_savings, rank_pairs};
///
/// // Depot with three points all 1 apart from each other and from the depot.
/// let mut rows = vec![vec![1.0; 4]; 4];
/// for i in 0..4 {
///     rows[i][i] = 0.0;
/// }
/// let dm = DistanceMatrix::from_rows(rows).unwrap();
/// let ranked = rank_pairs(&compute_savings(&dm));
/// let order: Vec<_> = ranked.iter().map(|r| (r.pair.left(), r.pair.right())).collect();
/// assert_eq!(order, vec![(1, 2), (1, 3), (2, 3)]);
/// ```
pub fn rank_pairs(savings: &SavingsTable) -> Vec<RankedPair> {
    let mut ranked: Vec<RankedPair> = savings
        .iter()
        .map(|(pair, saving)| RankedPair { pair, saving })
        .collect();
    ranked.sort_by(compare_ranked);
    ranked
}

fn compare_ranked(a: &RankedPair, b: &RankedPair) -> Ordering {
    b.saving
        .partial_cmp(&a.saving)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.pair.cmp(&b.pair))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::savings::compute_savings;

    fn ranked(p: (usize, usize), saving: f64) -> RankedPair {
        RankedPair {
            pair: Pair::new(p.0, p.1).expect("valid"),
            saving,
        }
    }

    #[test]
    fn test_descending() {
        let xs = [0.0_f64, 1.0, 2.0, 3.0];
        let rows = xs
            .iter()
            .map(|a| xs.iter().map(|b| (a - b).abs()).collect())
            .collect();
        let dm = DistanceMatrix::from_rows(rows).expect("valid");
        let r = rank_pairs(&compute_savings(&dm));
        assert_eq!(r.len(), 3);
        assert_eq!(r[0].pair, Pair::new(2, 3).expect("valid"));
        assert!(r.windows(2).all(|w| w[0].saving >= w[1].saving));
    }

    #[test]
    fn test_tie_break_ascending_pair() {
        let mut items = vec![
            ranked((2, 3), 1.0),
            ranked((1, 3), 1.0),
            ranked((1, 2), 1.0),
            ranked((3, 4), 2.0),
        ];
        items.sort_by(compare_ranked);
        let order: Vec<_> = items
            .iter()
            .map(|r| (r.pair.left(), r.pair.right()))
            .collect();
        assert_eq!(order, vec![(3, 4), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_empty() {
        assert!(rank_pairs(&SavingsTable::default()).is_empty());
    }
}
