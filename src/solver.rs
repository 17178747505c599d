//! The evolutionary loop.
//!
//! [`Solver`] owns the population, the best-ever tour, and the randomness
//! source, and drives the generational cycle: group partition → breed and
//! mutate → evaluate → roulette replacement with the elitism pocket.
//!
//! Generations are strictly sequential — each one depends on the complete
//! evaluated population of the previous one. Within a generation, fitness
//! evaluation of the descendant pool is the only parallelizable step;
//! selection runs after that barrier. Cancellation is cooperative and takes
//! effect between generations, so a population is never observed in a
//! partially selected state.

use crate::config::{validate_probability, SolverConfig, StopCondition};
use crate::error::ConfigError;
use crate::matrix::DistanceMatrix;
use crate::operators::{order_crossover, swap_mutation};
use crate::selection::next_population;
use crate::tour::Tour;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Genetic-algorithm TSP solver.
///
/// Lifecycle: construct with a validated [`SolverConfig`], provide a
/// [`DistanceMatrix`] and start index, then call [`run`](Self::run). The
/// first `run()` initializes the population lazily; further calls continue
/// evolving the same population, so runs are cumulative, not resets.
///
/// Every configuration setter is validated independently and may be called
/// before or between runs. A rejected setter leaves the solver unchanged.
///
/// # Example
///
/// ```
/// use tsp_ga::{DistanceMatrix, Solver, SolverConfig, StopCondition};
///
/// let matrix = DistanceMatrix::from_points(&[
///     (0.0, 0.0),
///     (4.0, 0.0),
///     (4.0, 3.0),
///     (0.0, 3.0),
/// ])?;
///
/// let config = SolverConfig::default()
///     .with_population_size(30)
///     .with_stop_condition(StopCondition::Generations(60))
///     .with_seed(42);
///
/// let mut solver = Solver::new(config)?;
/// solver.set_distances(matrix);
/// solver.run()?;
///
/// let best = solver.best_tour().expect("run() seeds the best tour");
/// assert!((best.length() - 14.0).abs() < 1e-9);
/// # Ok::<(), tsp_ga::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct Solver {
    config: SolverConfig,
    distances: Option<DistanceMatrix>,
    start_index: usize,
    rng: StdRng,
    population: Vec<Tour>,
    best: Option<Tour>,
    generations: usize,
}

impl Solver {
    /// Creates an unconfigured solver from validated loop parameters.
    ///
    /// # Errors
    /// Returns the configuration error if any parameter is invalid.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Ok(Self {
            config,
            distances: None,
            start_index: 0,
            rng,
            population: Vec::new(),
            best: None,
            generations: 0,
        })
    }

    /// Sets or replaces the distance matrix.
    ///
    /// Replacing the matrix invalidates any in-flight population and the
    /// best-ever tour — lengths under the old costs are meaningless — so
    /// the next `run()` re-seeds from scratch.
    pub fn set_distances(&mut self, matrix: DistanceMatrix) {
        self.distances = Some(matrix);
        self.population.clear();
        self.best = None;
    }

    /// Sets the mandatory starting point.
    ///
    /// Rejected immediately if a matrix is present and the index does not
    /// address one of its points; re-checked at initialization otherwise.
    /// Changing the start index invalidates the current population, since
    /// every tour is anchored at the old start.
    pub fn set_start_index(&mut self, index: usize) -> Result<(), ConfigError> {
        if let Some(matrix) = &self.distances {
            if index >= matrix.points() {
                return Err(ConfigError::StartIndexOutOfRange {
                    index,
                    points: matrix.points(),
                });
            }
        }
        if index != self.start_index {
            self.start_index = index;
            self.population.clear();
            self.best = None;
        }
        Ok(())
    }

    /// Sets the population size; takes effect at the next replacement pass.
    pub fn set_population_size(&mut self, size: usize) -> Result<(), ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidPopulationSize);
        }
        self.config.population_size = size;
        Ok(())
    }

    /// Sets the stop condition for subsequent `run()` calls.
    pub fn set_stop_condition(&mut self, stop: StopCondition) -> Result<(), ConfigError> {
        stop.validate()?;
        self.config.stop_condition = stop;
        Ok(())
    }

    /// Sets the breed-group pick probability.
    pub fn set_crossing_pick_probability(&mut self, probability: f64) -> Result<(), ConfigError> {
        validate_probability("crossing_pick_probability", probability)?;
        self.config.crossing_pick_probability = probability;
        Ok(())
    }

    /// Sets the mutation-group pick probability.
    pub fn set_mutation_pick_probability(&mut self, probability: f64) -> Result<(), ConfigError> {
        validate_probability("mutation_pick_probability", probability)?;
        self.config.mutation_pick_probability = probability;
        Ok(())
    }

    /// Whether a population has been generated.
    pub fn is_initialized(&self) -> bool {
        !self.population.is_empty()
    }

    /// The best tour found across all runs so far, as an independent copy.
    ///
    /// `None` until the first `run()` has initialized the solver.
    pub fn best_tour(&self) -> Option<Tour> {
        self.best.clone()
    }

    /// Total number of generations executed across all runs.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// The current loop parameters.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Executes the evolutionary loop until the stop condition is met.
    ///
    /// Initializes lazily on first call; repeated calls continue evolving
    /// the current population. The result is retrieved through
    /// [`best_tour`](Self::best_tour).
    ///
    /// # Errors
    /// Returns a configuration error if the matrix is missing or the start
    /// index is out of range; the solver is left unconfigured in that case.
    pub fn run(&mut self) -> Result<(), ConfigError> {
        self.run_with_cancel(None)
    }

    /// Like [`run`](Self::run), but stops cooperatively at the next
    /// generation boundary once the flag is set.
    pub fn run_with_cancel(
        &mut self,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<(), ConfigError> {
        if !self.is_initialized() {
            self.init()?;
        }

        let is_cancelled =
            || cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed));

        match self.config.stop_condition {
            StopCondition::Generations(count) => {
                for _ in 0..count {
                    if is_cancelled() {
                        break;
                    }
                    self.advance_generation();
                }
            }
            StopCondition::TimeBudget(budget) => {
                let started = Instant::now();
                while started.elapsed() < budget {
                    if is_cancelled() {
                        break;
                    }
                    self.advance_generation();
                }
            }
        }
        Ok(())
    }

    /// Generates and evaluates the initial population and seeds the
    /// best-ever tour from it.
    fn init(&mut self) -> Result<(), ConfigError> {
        self.config.validate()?;
        let points = self
            .distances
            .as_ref()
            .ok_or(ConfigError::MissingDistanceMatrix)?
            .points();
        if self.start_index >= points {
            return Err(ConfigError::StartIndexOutOfRange {
                index: self.start_index,
                points,
            });
        }

        let Solver {
            config,
            distances,
            start_index,
            rng,
            population,
            best,
            ..
        } = self;
        let matrix = distances.as_ref().expect("matrix presence checked above");

        *population = (0..config.population_size)
            .map(|_| Tour::random(points, *start_index, rng))
            .collect();
        evaluate_pool(population, matrix, config.parallel);

        *best = population
            .iter()
            .min_by(|a, b| {
                a.length()
                    .partial_cmp(&b.length())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .cloned();

        Ok(())
    }

    /// One full generational cycle.
    fn advance_generation(&mut self) {
        let Solver {
            config,
            distances,
            rng,
            population,
            best,
            generations,
            ..
        } = self;
        let matrix = distances.as_ref().expect("solver is initialized");
        let best = best.as_mut().expect("solver is initialized");

        // Independent Bernoulli draws: an individual may land in both
        // groups, either, or neither.
        let mut breed_group: Vec<usize> = Vec::new();
        let mut mutation_group: Vec<usize> = Vec::new();
        for index in 0..population.len() {
            if rng.random::<f64>() < config.crossing_pick_probability {
                breed_group.push(index);
            }
            if rng.random::<f64>() < config.mutation_pick_probability {
                mutation_group.push(index);
            }
        }

        // Breeding proceeds in pairs; an odd group gets one duplicate drawn
        // uniformly from the full population.
        if breed_group.len() % 2 != 0 {
            breed_group.push(rng.random_range(0..population.len()));
        }

        let mut descendants =
            Vec::with_capacity(breed_group.len() / 2 + mutation_group.len());

        // Consume the breed group in disjoint random pairs: draw two
        // distinct positions from the unconsumed prefix, emit one child,
        // then swap both consumed entries behind the prefix (higher index
        // first, so neither swap drags a consumed entry back in).
        let mut remaining = breed_group.len();
        while remaining > 0 {
            let first = rng.random_range(0..remaining);
            let mut second = rng.random_range(0..remaining);
            while second == first {
                second = rng.random_range(0..remaining);
            }
            descendants.push(order_crossover(
                &population[breed_group[first]],
                &population[breed_group[second]],
                rng,
            ));

            let (hi, lo) = if first > second {
                (first, second)
            } else {
                (second, first)
            };
            breed_group.swap(remaining - 1, hi);
            breed_group.swap(remaining - 2, lo);
            remaining -= 2;
        }

        // Mutation consumes its group independently, one child per member.
        for &index in &mutation_group {
            descendants.push(swap_mutation(&population[index], rng));
        }

        *generations += 1;

        if descendants.is_empty() {
            // Neither group picked anyone; the population carries over.
            return;
        }

        evaluate_pool(&mut descendants, matrix, config.parallel);

        *population = next_population(&descendants, best, config.population_size, rng);
    }
}

/// Evaluates every tour in the pool against the matrix.
///
/// Tours are independent and the matrix is read-only, so with the
/// `parallel` feature this fans out over rayon; selection always runs after
/// this returns.
fn evaluate_pool(pool: &mut [Tour], matrix: &DistanceMatrix, parallel: bool) {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        pool.par_iter_mut().for_each(|tour| tour.evaluate(matrix));
        return;
    }

    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for tour in pool.iter_mut() {
        tour.evaluate(matrix);
    }
}
