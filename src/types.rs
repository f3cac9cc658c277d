//! Core trait definitions for the NSGA-II engine.
//!
//! [`MultiObjectiveProblem`] defines the contract between the generic
//! optimizer and domain-specific problem implementations: how many
//! objectives exist, how a candidate is scored, and (optionally) which
//! box bounds constrain the decision space.

use crate::error::EvaluationError;

/// Defines a multi-objective optimization problem.
///
/// Candidates are fixed-length `f64` decision vectors; their dimensionality
/// is set by the starting point passed to the runner. All objectives are
/// **minimized**: lower values are better. For maximization, negate the
/// objective.
///
/// # Purity
///
/// `evaluate` must be a pure function of the candidate. The engine computes
/// objective vectors fresh every generation and relies on two evaluations
/// of the same coordinates agreeing; hidden state would corrupt the
/// dominance ranking.
///
/// # Implementing
///
/// ```
/// use nsga2::{EvaluationError, MultiObjectiveProblem};
///
/// /// Schaffer-style biobjective problem with a known Pareto set.
/// struct Schaffer;
///
/// impl MultiObjectiveProblem for Schaffer {
///     fn num_objectives(&self) -> usize {
///         2
///     }
///
///     fn evaluate(&self, candidate: &[f64]) -> Result<Vec<f64>, EvaluationError> {
///         let x = candidate[0];
///         Ok(vec![x * x, (x - 2.0) * (x - 2.0)])
///     }
///
///     fn bounds(&self) -> Option<(&[f64], &[f64])> {
///         Some((&[-4.0], &[4.0]))
///     }
/// }
/// ```
pub trait MultiObjectiveProblem {
    /// Number of objectives this problem evaluates.
    ///
    /// Must be at least 1 and consistent with the length of every vector
    /// returned by [`evaluate`](Self::evaluate); a mismatch aborts the run.
    fn num_objectives(&self) -> usize;

    /// Computes the objective vector for one candidate.
    ///
    /// Returning `Err` terminates the optimization; partial generations
    /// are never returned.
    fn evaluate(&self, candidate: &[f64]) -> Result<Vec<f64>, EvaluationError>;

    /// Box bounds on the decision space as `(lower, upper)` slices.
    ///
    /// When present, both slices must match the starting point's length
    /// and every coordinate produced by initialization and mutation is
    /// clamped into `[lower[i], upper[i]]`. The default is unbounded.
    fn bounds(&self) -> Option<(&[f64], &[f64])> {
        None
    }

    /// Observation hook invoked after each generation's survivors are
    /// selected, with the new population and its objective table.
    ///
    /// `generation` counts from 1. Purely observational: the engine does
    /// not read anything back, and the tables passed here are rebuilt
    /// from scratch next generation. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _population: &[Vec<f64>], _objectives: &[Vec<f64>]) {
    }
}

/// Result of an NSGA-II optimization run.
///
/// Holds the approximate Pareto front in decision space alongside the
/// matching objective vectors (`pareto_front[i]` scored `pareto_objectives[i]`).
/// Order within the front is unspecified.
#[derive(Debug, Clone)]
pub struct Nsga2Result {
    /// Decision vectors of the final population's rank-0 front.
    pub pareto_front: Vec<Vec<f64>>,

    /// Objective vectors associated with `pareto_front`.
    pub pareto_objectives: Vec<Vec<f64>>,

    /// Number of generations actually executed.
    pub generations: usize,

    /// Whether the run was cancelled externally before completing.
    pub cancelled: bool,
}
