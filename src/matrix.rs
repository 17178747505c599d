//! Validated point-to-point distance matrix.
//!
//! [`DistanceMatrix`] is the immutable cost model of a run: an `n × n`
//! matrix of directed edge costs, checked once at construction and shared
//! read-only afterwards. Asymmetry is allowed (`cost(i, j)` may differ from
//! `cost(j, i)`) and the diagonal is not required to be zero — the solver
//! takes the costs as given.

use crate::error::ConfigError;

/// Minimum number of points a TSP instance must have.
pub const MIN_POINTS: usize = 3;

/// An immutable `n × n` matrix of directed, non-negative edge costs.
///
/// Stored row-major. Constructed through [`from_rows`](Self::from_rows) or
/// [`from_points`](Self::from_points); both reject instances with fewer
/// than [`MIN_POINTS`] points. `from_rows` additionally rejects non-square
/// input and negative or non-finite costs; `from_points` rejects non-finite
/// coordinates, so every cost is finite and non-negative regardless of the
/// construction path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    costs: Vec<f64>,
    points: usize,
}

impl DistanceMatrix {
    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::TooFewPoints`] if fewer than 3 rows are given
    /// - [`ConfigError::NotSquare`] if any row length differs from the
    ///   number of rows
    /// - [`ConfigError::InvalidCost`] if any cost is negative, NaN, or
    ///   infinite
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ConfigError> {
        let points = rows.len();
        if points < MIN_POINTS {
            return Err(ConfigError::TooFewPoints(points));
        }

        let mut costs = Vec::with_capacity(points * points);
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != points {
                return Err(ConfigError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: points,
                });
            }
            for (col, &cost) in entries.iter().enumerate() {
                if !cost.is_finite() || cost < 0.0 {
                    return Err(ConfigError::InvalidCost {
                        from: row,
                        to: col,
                        cost,
                    });
                }
                costs.push(cost);
            }
        }

        Ok(Self { costs, points })
    }

    /// Builds a symmetric matrix from 2-D coordinates using straight-line
    /// Euclidean distance.
    ///
    /// This is the conversion a canvas-style front end needs: the user
    /// places points, the solver receives their pairwise distances.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::TooFewPoints`] if fewer than 3 points are given
    /// - [`ConfigError::InvalidCoordinate`] if any coordinate is NaN or
    ///   infinite
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, ConfigError> {
        let n = points.len();
        if n < MIN_POINTS {
            return Err(ConfigError::TooFewPoints(n));
        }
        for (index, &(x, y)) in points.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(ConfigError::InvalidCoordinate { index, x, y });
            }
        }

        let mut costs = vec![0.0; n * n];
        for (i, &(x1, y1)) in points.iter().enumerate() {
            for (j, &(x2, y2)) in points.iter().enumerate().skip(i + 1) {
                let distance = ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt();
                costs[i * n + j] = distance;
                costs[j * n + i] = distance;
            }
        }

        Ok(Self { costs, points: n })
    }

    /// Directed cost of traveling from `from` to `to`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        assert!(
            from < self.points && to < self.points,
            "point index out of bounds"
        );
        self.costs[from * self.points + to]
    }

    /// Number of points in the instance.
    #[inline]
    pub fn points(&self) -> usize {
        self.points
    }
}
