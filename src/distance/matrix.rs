//! Dense distance matrix.

use crate::error::SavingsError;
use crate::models::DEPOT;

/// A dense n×n distance matrix stored in row-major order.
///
/// Row and column 0 belong to the depot; the remaining indices are delivery
/// points. Route construction only reads the upper triangle through
/// [`DistanceMatrix::edge`], so callers are expected to supply a symmetric
/// matrix.
///
/// # Examples
///
/// ```
/// use savings_routing::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 2.0, 3.0],
///     vec![2.0, 0.0, 1.0],
///     vec![3.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.edge(2, 1), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from parsed rows.
    ///
    /// Fails if there are no rows, if any row length differs from the row
    /// count, or if any entry is negative or non-finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SavingsError> {
        let size = rows.len();
        if size == 0 {
            return Err(SavingsError::EmptyMatrix);
        }

        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(SavingsError::InvalidMatrix {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            for (to, &value) in values.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(SavingsError::InvalidDistance {
                        from: row,
                        to,
                        value,
                    });
                }
            }
            data.extend(values);
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the distance between two locations read from the upper
    /// triangle, i.e. `get(min(a, b), max(a, b))`.
    pub fn edge(&self, a: usize, b: usize) -> f64 {
        if a <= b {
            self.get(a, b)
        } else {
            self.get(b, a)
        }
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix, depot included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Sum of the edges between consecutive points of `path`.
    ///
    /// The depot legs are not included.
    pub fn path_distance(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.edge(w[0], w[1])).sum()
    }

    /// Length of the closed tour depot → `path` → depot.
    ///
    /// Zero for an empty path.
    pub fn tour_distance(&self, path: &[usize]) -> f64 {
        match (path.first(), path.last()) {
            (Some(&first), Some(&last)) => {
                self.edge(DEPOT, first) + self.path_distance(path) + self.edge(last, DEPOT)
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 5.0, 8.0],
            vec![5.0, 0.0, 5.0],
            vec![8.0, 5.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_from_rows() {
        let dm = sample();
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(0, 2), 8.0);
        assert_eq!(dm.get(0, 0), 0.0);
    }

    #[test]
    fn test_from_rows_empty() {
        assert_eq!(DistanceMatrix::from_rows(vec![]), Err(SavingsError::EmptyMatrix));
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            SavingsError::InvalidMatrix {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_bad_values() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, -1.0], vec![1.0, 0.0]]).unwrap_err();
        assert!(matches!(err, SavingsError::InvalidDistance { from: 0, to: 1, .. }));

        let err =
            DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![f64::NAN, 0.0]]).unwrap_err();
        assert!(matches!(err, SavingsError::InvalidDistance { from: 1, to: 0, .. }));
    }

    #[test]
    fn test_symmetric() {
        assert!(sample().is_symmetric(1e-10));
    }

    #[test]
    fn test_edge_reads_upper_triangle() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(1, 2, 4.0);
        dm.set(2, 1, 99.0);
        assert_eq!(dm.edge(1, 2), 4.0);
        assert_eq!(dm.edge(2, 1), 4.0);
    }

    #[test]
    fn test_path_and_tour_distance() {
        let dm = sample();
        assert_eq!(dm.path_distance(&[]), 0.0);
        assert_eq!(dm.path_distance(&[1]), 0.0);
        assert!((dm.path_distance(&[1, 2]) - 5.0).abs() < 1e-10);
        // 0→1→2→0 = 5 + 5 + 8
        assert!((dm.tour_distance(&[1, 2]) - 18.0).abs() < 1e-10);
        assert_eq!(dm.tour_distance(&[]), 0.0);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }
}
