//! Error types for the NSGA-II optimizer.
//!
//! Configuration and dimensionality problems are detected before or at the
//! start of a run and surfaced immediately; no partial run is attempted.
//! A failing objective evaluation aborts the run that triggered it.

use thiserror::Error;

/// Error reported by a problem's objective evaluation.
///
/// Collaborator code wraps whatever went wrong in a message; the optimizer
/// treats any evaluation failure as fatal for the current run.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("objective evaluation failed: {0}")]
pub struct EvaluationError(pub String);

impl EvaluationError {
    /// Creates an evaluation error from any displayable cause.
    pub fn new(cause: impl std::fmt::Display) -> Self {
        Self(cause.to_string())
    }
}

/// Errors produced by the NSGA-II engine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Nsga2Error {
    /// Population size must be at least 4 and a multiple of 4, so that
    /// binary-tournament pairing and crossover splitting stay even.
    #[error("population_size must be >= 4 and a multiple of 4 (received {0})")]
    InvalidPopulationSize(usize),

    /// Crossover probability was outside [0, 1].
    #[error("crossover_prob must be within [0, 1] (received {0})")]
    InvalidCrossoverProb(f64),

    /// Mutation probability was outside [0, 1].
    #[error("mutation_prob must be within [0, 1] (received {0})")]
    InvalidMutationProb(f64),

    /// Mutation strength must be positive and finite.
    #[error("mutation_strength must be positive and finite (received {0})")]
    InvalidMutationStrength(f64),

    /// Epsilon must be non-negative.
    #[error("epsilon must be non-negative (received {0})")]
    InvalidEpsilon(f64),

    /// The starting point carried no decision variables.
    #[error("starting point must have at least one decision variable")]
    EmptyStartingPoint,

    /// The problem declared zero objectives.
    #[error("problem must declare at least one objective")]
    NoObjectives,

    /// Declared bounds do not match the starting point's dimensionality.
    #[error("bounds dimension mismatch: starting point has {expected} variables but bounds have {found}")]
    BoundsDimensionMismatch {
        /// Number of decision variables in the starting point.
        expected: usize,
        /// Number of entries in the declared bounds.
        found: usize,
    },

    /// A lower bound exceeded its upper bound.
    #[error("invalid bounds at index {index}: lower ({lower}) must not exceed upper ({upper})")]
    InvalidBounds {
        /// Coordinate index of the offending pair.
        index: usize,
        /// Lower bound value.
        lower: f64,
        /// Upper bound value.
        upper: f64,
    },

    /// The problem returned an objective vector of unexpected length.
    #[error("objective count mismatch: problem declared {expected} objectives but evaluation returned {found}")]
    ObjectiveCountMismatch {
        /// Arity declared by `num_objectives`.
        expected: usize,
        /// Length of the returned objective vector.
        found: usize,
    },

    /// The problem's evaluation failed.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
