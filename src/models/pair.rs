//! Canonical point pairs.

use serde::{Deserialize, Serialize};

use super::DEPOT;

/// An unordered pair of two distinct delivery points, stored with the
/// smaller index on the left.
///
/// The derived ordering compares `(left, right)` lexicographically, which is
/// the tie-break used when ranking pairs of equal saving.
///
/// # Examples
///
/// ```
/// use savings_routing::models::Pair;
///
/// let p = Pair::new(5, 2).unwrap();
/// assert_eq!((p.left(), p.right()), (2, 5));
/// assert_eq!(p, Pair::new(2, 5).unwrap());
/// assert!(Pair::new(3, 3).is_none());
/// assert!(Pair::new(0, 3).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pair {
    left: usize,
    right: usize,
}

impl Pair {
    /// Creates the canonical pair for `a` and `b`.
    ///
    /// Returns `None` if the points are equal or either one is the depot.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        if a == b || a == DEPOT || b == DEPOT {
            return None;
        }
        Some(Self {
            left: a.min(b),
            right: a.max(b),
        })
    }

    /// The smaller point.
    pub fn left(&self) -> usize {
        self.left
    }

    /// The larger point.
    pub fn right(&self) -> usize {
        self.right
    }

    /// Returns `true` if `point` is one of the two members.
    pub fn contains(&self, point: usize) -> bool {
        self.left == point || self.right == point
    }

    /// Returns the member that is not `point`, or `None` if `point` is not
    /// in this pair.
    pub fn other(&self, point: usize) -> Option<usize> {
        if point == self.left {
            Some(self.right)
        } else if point == self.right {
            Some(self.left)
        } else {
            None
        }
    }
}
