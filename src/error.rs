//! Configuration errors.
//!
//! Every failure the solver can report is a configuration problem detected
//! before any generation runs: a malformed distance matrix, an out-of-range
//! start index, or an invalid parameter. There are no transient errors —
//! the evolutionary loop itself performs no I/O and has no partial-failure
//! modes. Operator bugs that would corrupt a gene permutation are programmer
//! errors and are caught by debug assertions, not represented here.

use thiserror::Error;

/// A configuration parameter was rejected.
///
/// Each variant names the offending parameter so callers can surface a
/// precise message. A rejected setter leaves the solver exactly as it was:
/// either fully initialized or untouched, never half-configured.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The distance matrix has fewer than 3 points.
    #[error("distance matrix requires at least 3 points, got {0}")]
    TooFewPoints(usize),

    /// A matrix row does not match the matrix dimension.
    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Number of entries in that row.
        len: usize,
        /// Expected row length (the number of points).
        expected: usize,
    },

    /// An edge cost is negative or not finite.
    #[error("distance from point {from} to point {to} must be finite and non-negative, got {cost}")]
    InvalidCost {
        /// Source point index.
        from: usize,
        /// Destination point index.
        to: usize,
        /// The rejected cost value.
        cost: f64,
    },

    /// A 2-D point coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate: ({x}, {y})")]
    InvalidCoordinate {
        /// Index of the offending point.
        index: usize,
        /// The rejected x coordinate.
        x: f64,
        /// The rejected y coordinate.
        y: f64,
    },

    /// The start index does not address a point of the matrix.
    #[error("start index {index} is out of bounds for {points} points")]
    StartIndexOutOfRange {
        /// The rejected start index.
        index: usize,
        /// Number of points in the configured matrix.
        points: usize,
    },

    /// The population size is zero.
    #[error("population size must be positive")]
    InvalidPopulationSize,

    /// The stop condition is zero generations or a zero time budget.
    #[error("stop condition must be positive: {0}")]
    InvalidStopCondition(&'static str),

    /// A pick probability lies outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability {
        /// Name of the rejected parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// `run()` was invoked before a distance matrix was configured.
    #[error("distance matrix is not set")]
    MissingDistanceMatrix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_parameter() {
        let err = ConfigError::TooFewPoints(2);
        assert!(err.to_string().contains("at least 3 points"));

        let err = ConfigError::StartIndexOutOfRange {
            index: 7,
            points: 4,
        };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains('4'));

        let err = ConfigError::InvalidProbability {
            name: "crossing_pick_probability",
            value: 1.5,
        };
        assert!(err.to_string().contains("crossing_pick_probability"));
    }
}
