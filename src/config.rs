//! Solver configuration.
//!
//! [`SolverConfig`] holds the parameters of the evolutionary loop. The
//! distance matrix and start index are problem data, not configuration —
//! they are set on the [`Solver`](crate::Solver) directly.

use crate::error::ConfigError;
use std::time::Duration;

/// When to stop a single `run()` call.
///
/// Both stopping styles from practice are exposed explicitly rather than
/// one being picked silently: a fixed generation count, or a wall-clock
/// budget checked between generations (a run may overshoot the budget by at
/// most one generation's worth of work).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopCondition {
    /// Run exactly this many generations.
    Generations(usize),
    /// Run until this much wall-clock time has elapsed.
    TimeBudget(Duration),
}

impl StopCondition {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match self {
            StopCondition::Generations(0) => Err(ConfigError::InvalidStopCondition(
                "generation count is zero",
            )),
            StopCondition::TimeBudget(budget) if budget.is_zero() => Err(
                ConfigError::InvalidStopCondition("time budget is zero"),
            ),
            _ => Ok(()),
        }
    }
}

impl Default for StopCondition {
    fn default() -> Self {
        StopCondition::Generations(100)
    }
}

/// Parameters of the evolutionary loop.
///
/// # Defaults
///
/// ```
/// use tsp_ga::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.population_size, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::{SolverConfig, StopCondition};
///
/// let config = SolverConfig::default()
///     .with_population_size(200)
///     .with_stop_condition(StopCondition::Generations(500))
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Number of tours in the population. Must be positive.
    pub population_size: usize,

    /// Stopping condition of each `run()` call.
    pub stop_condition: StopCondition,

    /// Per-individual probability of entering the breed group each
    /// generation. Must lie in `[0, 1]`.
    pub crossing_pick_probability: f64,

    /// Per-individual probability of entering the mutation group each
    /// generation. Must lie in `[0, 1]`.
    ///
    /// The two draws are independent: an individual may land in both
    /// groups, either, or neither.
    pub mutation_pick_probability: f64,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Whether to evaluate descendants in parallel.
    ///
    /// Only effective when the crate is built with the `parallel` feature;
    /// without it evaluation is always sequential.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            stop_condition: StopCondition::default(),
            crossing_pick_probability: 0.75,
            mutation_pick_probability: 0.2,
            seed: None,
            parallel: true,
        }
    }
}

impl SolverConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the stop condition.
    pub fn with_stop_condition(mut self, stop: StopCondition) -> Self {
        self.stop_condition = stop;
        self
    }

    /// Sets the breed-group pick probability.
    pub fn with_crossing_pick_probability(mut self, probability: f64) -> Self {
        self.crossing_pick_probability = probability;
        self
    }

    /// Sets the mutation-group pick probability.
    pub fn with_mutation_pick_probability(mut self, probability: f64) -> Self {
        self.mutation_pick_probability = probability;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Invalid values are rejected rather than clamped; the error names the
    /// offending parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::InvalidPopulationSize);
        }
        self.stop_condition.validate()?;
        validate_probability(
            "crossing_pick_probability",
            self.crossing_pick_probability,
        )?;
        validate_probability(
            "mutation_pick_probability",
            self.mutation_pick_probability,
        )?;
        Ok(())
    }
}

pub(crate) fn validate_probability(
    name: &'static str,
    value: f64,
) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) || value.is_nan() {
        return Err(ConfigError::InvalidProbability { name, value });
    }
    Ok(())
}
