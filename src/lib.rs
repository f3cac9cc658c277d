//! Elitist multi-objective optimization via NSGA-II.
//!
//! Given a set of objective functions over a shared decision vector, the
//! optimizer searches for the Pareto-optimal trade-off front: the set of
//! candidates for which no other candidate is at least as good on every
//! objective and strictly better on one. All objectives are **minimized**.
//!
//! The algorithm is NSGA-II (Deb et al., 2002): fast non-dominated
//! sorting stratifies the population into ranked fronts, crowding distance
//! preserves diversity within a front, and a generational loop with
//! elitist truncation drives the population toward the front without
//! losing its spread.
//!
//! # Core Traits
//!
//! - [`MultiObjectiveProblem`]: Problem definition — objective arity,
//!   evaluation, optional box bounds, and a per-generation observation hook
//!
//! # Key Types
//!
//! - [`Nsga2Config`]: Algorithm parameters with builder methods
//! - [`Nsga2Runner`]: Executes the generational loop
//! - [`Nsga2Result`]: The approximate Pareto front plus run statistics
//! - [`Nsga2Error`]: Configuration, dimensionality, and evaluation failures
//!
//! # Submodules
//!
//! - [`pareto`]: Non-dominated sorting, crowding distance, and the
//!   crowded-comparison operator, usable on their own
//!
//! # Example
//!
//! ```
//! use nsga2::{EvaluationError, MultiObjectiveProblem, Nsga2Config, Nsga2Runner};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! /// Two parabolas with minima at x = 0 and x = 1; the Pareto set is
//! /// the segment between them.
//! struct TwoParabolas;
//!
//! impl MultiObjectiveProblem for TwoParabolas {
//!     fn num_objectives(&self) -> usize { 2 }
//!
//!     fn evaluate(&self, c: &[f64]) -> Result<Vec<f64>, EvaluationError> {
//!         let x = c[0];
//!         Ok(vec![x * x, (x - 1.0) * (x - 1.0)])
//!     }
//!
//!     fn bounds(&self) -> Option<(&[f64], &[f64])> {
//!         Some((&[-2.0], &[2.0]))
//!     }
//! }
//!
//! let config = Nsga2Config::default()
//!     .with_population_size(20)
//!     .with_max_generations(50)
//!     .with_mutation_strength(0.05);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let result = Nsga2Runner::run(&TwoParabolas, &[0.0], &config, &mut rng).unwrap();
//! assert!(!result.pareto_front.is_empty());
//! ```
//!
//! # References
//!
//! - Deb, Pratap, Agarwal, Meyarivan (2002), *A Fast and Elitist
//!   Multiobjective Genetic Algorithm: NSGA-II*, IEEE Trans. Evol. Comp. 6(2)

mod config;
mod error;
mod operators;
pub mod pareto;
mod runner;
mod types;

pub use config::Nsga2Config;
pub use error::{EvaluationError, Nsga2Error};
pub use runner::Nsga2Runner;
pub use types::{MultiObjectiveProblem, Nsga2Result};
