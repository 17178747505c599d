//! Genetic-algorithm heuristic solver for the traveling salesman problem.
//!
//! Given an `n × n` matrix of directed point-to-point distances and a
//! mandatory starting point, the solver searches for a short closed circuit
//! through all points. It is a stochastic heuristic — no optimality
//! guarantee — built from the classic ingredients:
//!
//! - anchored permutation individuals ([`Tour`])
//! - order-preserving single-point crossover and interior swap mutation
//!   ([`operators`])
//! - fitness-proportional (roulette-wheel) replacement with an elitism
//!   pocket that keeps the best-ever tour alive
//! - a generational loop under a configurable stop condition
//!   ([`StopCondition`]: generation count or wall-clock budget)
//!
//! The public surface is deliberately narrow so any front end — desktop,
//! web, CLI — can drive it with plain synchronous calls: configure,
//! [`Solver::run`], read back [`Solver::best_tour`].
//!
//! # Example
//!
//! ```
//! use tsp_ga::{DistanceMatrix, Solver, SolverConfig};
//!
//! // Four corners of a 4 x 3 rectangle; the optimal circuit is its
//! // perimeter.
//! let matrix = DistanceMatrix::from_points(&[
//!     (0.0, 0.0),
//!     (4.0, 0.0),
//!     (4.0, 3.0),
//!     (0.0, 3.0),
//! ])?;
//!
//! let mut solver = Solver::new(SolverConfig::default().with_seed(7))?;
//! solver.set_distances(matrix);
//! solver.set_start_index(0)?;
//! solver.run()?;
//!
//! let best = solver.best_tour().expect("seeded by run()");
//! println!("tour {:?} of length {}", best.genes(), best.length());
//! # Ok::<(), tsp_ga::ConfigError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate descendant pools with rayon
//! - `serde`: serialization for tours, matrices, and configuration
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
mod error;
mod matrix;
pub mod operators;
mod selection;
mod solver;
mod tour;

pub use config::{SolverConfig, StopCondition};
pub use error::ConfigError;
pub use matrix::{DistanceMatrix, MIN_POINTS};
pub use solver::Solver;
pub use tour::Tour;
