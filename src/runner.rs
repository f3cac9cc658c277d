//! NSGA-II generational loop execution.
//!
//! [`Nsga2Runner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → non-dominated sorting → crowding →
//! variation → elitist truncation, repeated for the configured number of
//! generations. The rank-0 front of the final population is returned.

use crate::config::Nsga2Config;
use crate::error::Nsga2Error;
use crate::operators::{binary_tournament, clamp_to_bounds, crossover, mutate};
use crate::pareto::{crowding_distance, non_dominated_sort};
use crate::types::{MultiObjectiveProblem, Nsga2Result};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Per-generation tables: candidates, their objective vectors, and the
/// rank/crowding tables computed for exactly this snapshot. All four run
/// parallel to each other and are rebuilt whenever the population changes.
struct Generation {
    population: Vec<Vec<f64>>,
    objectives: Vec<Vec<f64>>,
    ranks: Vec<usize>,
    distances: Vec<f64>,
}

/// Executes the NSGA-II evolutionary loop.
///
/// # Usage
///
/// ```
/// use nsga2::{EvaluationError, MultiObjectiveProblem, Nsga2Config, Nsga2Runner};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// struct Schaffer;
///
/// impl MultiObjectiveProblem for Schaffer {
///     fn num_objectives(&self) -> usize { 2 }
///
///     fn evaluate(&self, c: &[f64]) -> Result<Vec<f64>, EvaluationError> {
///         Ok(vec![c[0] * c[0], (c[0] - 2.0) * (c[0] - 2.0)])
///     }
///
///     fn bounds(&self) -> Option<(&[f64], &[f64])> {
///         Some((&[-4.0], &[4.0]))
///     }
/// }
///
/// let config = Nsga2Config::default()
///     .with_population_size(16)
///     .with_max_generations(30)
///     .with_mutation_strength(0.1);
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = Nsga2Runner::run(&Schaffer, &[0.0], &config, &mut rng).unwrap();
/// assert!(!result.pareto_front.is_empty());
/// ```
pub struct Nsga2Runner;

impl Nsga2Runner {
    /// Runs the optimization and returns the final rank-0 front.
    ///
    /// `start` sets the decision-space dimensionality; the initial
    /// population is built from it by small Gaussian perturbations.
    /// The random source is caller-seeded, so two runs with the same
    /// seed, config, and starting point are identical.
    pub fn run<P: MultiObjectiveProblem, R: Rng>(
        problem: &P,
        start: &[f64],
        config: &Nsga2Config,
        rng: &mut R,
    ) -> Result<Nsga2Result, Nsga2Error> {
        Self::run_with_cancel(problem, start, config, rng, None)
    }

    /// Runs the optimization with an optional cancellation token.
    ///
    /// The flag is checked at generation boundaries only: a set flag stops
    /// the loop before the next generation starts and the best front found
    /// so far is returned with `cancelled = true`. Partial generations are
    /// never returned.
    pub fn run_with_cancel<P: MultiObjectiveProblem, R: Rng>(
        problem: &P,
        start: &[f64],
        config: &Nsga2Config,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Nsga2Result, Nsga2Error> {
        config.validate()?;
        let bounds = validate_problem(problem, start)?;
        let num_objectives = problem.num_objectives();
        let pop_size = config.population_size;

        // 1. Initial population: starting point plus small perturbations
        let spread = Normal::new(0.0, config.mutation_strength)
            .expect("mutation_strength is validated positive and finite");
        let population: Vec<Vec<f64>> = (0..pop_size)
            .map(|_| {
                let mut genes: Vec<f64> =
                    start.iter().map(|&g| g + spread.sample(rng)).collect();
                if let Some((lower, upper)) = bounds {
                    clamp_to_bounds(&mut genes, lower, upper);
                }
                genes
            })
            .collect();

        // 2. Evaluate, sort, and crowd the initial snapshot
        let objectives = evaluate_all(problem, &population, num_objectives)?;
        let mut current = rank_and_crowd(population, objectives);

        let mut cancelled = false;
        let mut executed = 0usize;

        // 3. Generational loop
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Vary: children from tournament-selected parent pairs
            let mut children = Vec::with_capacity(pop_size);
            while children.len() < pop_size {
                let a = binary_tournament(pop_size, &current.ranks, &current.distances, rng);
                let b = binary_tournament(pop_size, &current.ranks, &current.distances, rng);

                let (mut child_a, mut child_b) = crossover(
                    &current.population[a],
                    &current.population[b],
                    config.crossover_prob,
                    rng,
                );
                mutate(
                    &mut child_a,
                    config.mutation_prob,
                    config.mutation_strength,
                    bounds,
                    rng,
                );
                mutate(
                    &mut child_b,
                    config.mutation_prob,
                    config.mutation_strength,
                    bounds,
                    rng,
                );
                children.push(child_a);
                children.push(child_b);
            }

            // Merge: parent ∪ child union. The whole live set is evaluated
            // afresh — parents included — so the objective table always
            // belongs to exactly this generation's snapshot.
            let mut union = current.population;
            union.extend(children);
            let union_objectives = evaluate_all(problem, &union, num_objectives)?;

            // Truncate: elitist selection of the next generation
            current = truncate(union, union_objectives, pop_size);
            executed = gen + 1;

            tracing::debug!(
                generation = executed,
                front_size = current.ranks.iter().filter(|&&r| r == 0).count(),
                "generation complete"
            );
            problem.on_generation(executed, &current.population, &current.objectives);
        }

        // 4. Return the rank-0 front of the final population
        let mut pareto_front = Vec::new();
        let mut pareto_objectives = Vec::new();
        for (idx, &rank) in current.ranks.iter().enumerate() {
            if rank == 0 {
                pareto_front.push(current.population[idx].clone());
                pareto_objectives.push(current.objectives[idx].clone());
            }
        }

        Ok(Nsga2Result {
            pareto_front,
            pareto_objectives,
            generations: executed,
            cancelled,
        })
    }
}

/// Checks the starting point, objective arity, and declared bounds before
/// any evaluation happens.
fn validate_problem<'a, P: MultiObjectiveProblem>(
    problem: &'a P,
    start: &[f64],
) -> Result<Option<(&'a [f64], &'a [f64])>, Nsga2Error> {
    if start.is_empty() {
        return Err(Nsga2Error::EmptyStartingPoint);
    }
    if problem.num_objectives() == 0 {
        return Err(Nsga2Error::NoObjectives);
    }

    let bounds = problem.bounds();
    if let Some((lower, upper)) = bounds {
        if lower.len() != start.len() || upper.len() != start.len() {
            return Err(Nsga2Error::BoundsDimensionMismatch {
                expected: start.len(),
                found: if lower.len() != start.len() {
                    lower.len()
                } else {
                    upper.len()
                },
            });
        }
        for (index, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if lo > hi {
                return Err(Nsga2Error::InvalidBounds {
                    index,
                    lower: lo,
                    upper: hi,
                });
            }
        }
    }
    Ok(bounds)
}

/// Evaluates every candidate, checking each returned vector against the
/// declared objective arity. Any failure aborts the run.
fn evaluate_all<P: MultiObjectiveProblem>(
    problem: &P,
    population: &[Vec<f64>],
    num_objectives: usize,
) -> Result<Vec<Vec<f64>>, Nsga2Error> {
    let mut objectives = Vec::with_capacity(population.len());
    for candidate in population {
        let values = problem.evaluate(candidate)?;
        if values.len() != num_objectives {
            return Err(Nsga2Error::ObjectiveCountMismatch {
                expected: num_objectives,
                found: values.len(),
            });
        }
        objectives.push(values);
    }
    Ok(objectives)
}

/// Sorts and crowds a population snapshot, producing its generation tables.
fn rank_and_crowd(population: Vec<Vec<f64>>, objectives: Vec<Vec<f64>>) -> Generation {
    let sorted = non_dominated_sort(&objectives);
    let mut distances = vec![0.0; population.len()];
    for front in &sorted.fronts {
        crowding_distance(front, &objectives, &mut distances);
    }
    Generation {
        population,
        objectives,
        ranks: sorted.ranks,
        distances,
    }
}

/// Elitist truncation of a parent ∪ child union back to `pop_size`.
///
/// Whole fronts are admitted in rank order while they fit; the front that
/// would overflow contributes its highest-crowding-distance members until
/// exactly `pop_size` slots are filled. A candidate from a worse front can
/// never displace one from a better front. The survivors keep the rank and
/// distance values computed on the union; those tables drive the next
/// generation's tournaments.
fn truncate(union: Vec<Vec<f64>>, union_objectives: Vec<Vec<f64>>, pop_size: usize) -> Generation {
    let sorted = non_dominated_sort(&union_objectives);
    let mut distances = vec![0.0; union.len()];
    for front in &sorted.fronts {
        crowding_distance(front, &union_objectives, &mut distances);
    }

    let mut population = Vec::with_capacity(pop_size);
    let mut objectives = Vec::with_capacity(pop_size);
    let mut ranks = Vec::with_capacity(pop_size);
    let mut kept_distances = Vec::with_capacity(pop_size);

    for front in &sorted.fronts {
        if population.len() == pop_size {
            break;
        }
        let room = pop_size - population.len();
        let admitted: Vec<usize> = if front.len() <= room {
            front.clone()
        } else {
            // Overflowing front: most isolated candidates survive
            let mut by_distance = front.clone();
            by_distance.sort_by(|&a, &b| distances[b].total_cmp(&distances[a]));
            by_distance.truncate(room);
            by_distance
        };
        for idx in admitted {
            population.push(union[idx].clone());
            objectives.push(union_objectives[idx].clone());
            ranks.push(sorted.ranks[idx]);
            kept_distances.push(distances[idx]);
        }
    }

    Generation {
        population,
        objectives,
        ranks,
        distances: kept_distances,
    }
}

// ============================================================================
// Tests
// ============================================================================
