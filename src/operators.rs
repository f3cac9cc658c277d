//! Variation operators: binary tournament selection, uniform crossover,
//! and Gaussian mutation.
//!
//! Selection reads the rank and crowding-distance tables of the current
//! population; crossover and mutation touch only the child buffers.
//! Parents are read-only throughout.

use crate::pareto::crowded_prefer;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Binary tournament selection under the crowded-comparison operator.
///
/// Draws two candidate indices uniformly at random (with replacement) from
/// the population and returns the preferred one: lower rank first, larger
/// crowding distance as the tie-break. `ranks` and `distances` must have
/// been computed for the population being drawn from.
pub fn binary_tournament<R: Rng>(
    population_len: usize,
    ranks: &[usize],
    distances: &[f64],
    rng: &mut R,
) -> usize {
    let p = rng.random_range(0..population_len);
    let q = rng.random_range(0..population_len);
    if crowded_prefer(p, q, ranks, distances) {
        p
    } else {
        q
    }
}

/// Uniform crossover over corresponding coordinates.
///
/// With probability `crossover_prob` the parents are recombined: each
/// coordinate independently either stays in place or is exchanged between
/// the two children with probability ½. Otherwise both children are exact
/// copies of their parents. Dimensionality is always preserved.
pub fn crossover<R: Rng>(
    parent_a: &[f64],
    parent_b: &[f64],
    crossover_prob: f64,
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    debug_assert_eq!(parent_a.len(), parent_b.len(), "parents must have equal length");

    let mut child_a = parent_a.to_vec();
    let mut child_b = parent_b.to_vec();

    if rng.random_range(0.0..1.0) < crossover_prob {
        for i in 0..child_a.len() {
            if rng.random_range(0.0..1.0) < 0.5 {
                std::mem::swap(&mut child_a[i], &mut child_b[i]);
            }
        }
    }

    (child_a, child_b)
}

/// Gaussian mutation with symmetric bound clamping.
///
/// Each coordinate is perturbed with probability `mutation_prob` by a
/// zero-mean Gaussian sample of standard deviation `mutation_strength`.
/// When bounds are declared, every coordinate is then clamped into
/// `[lower[i], upper[i]]` — both ends, not just the lower one.
pub fn mutate<R: Rng>(
    child: &mut [f64],
    mutation_prob: f64,
    mutation_strength: f64,
    bounds: Option<(&[f64], &[f64])>,
    rng: &mut R,
) {
    let gauss = Normal::new(0.0, mutation_strength)
        .expect("mutation_strength is validated positive and finite");

    for value in child.iter_mut() {
        if rng.random_range(0.0..1.0) < mutation_prob {
            *value += gauss.sample(rng);
        }
    }

    if let Some((lower, upper)) = bounds {
        clamp_to_bounds(child, lower, upper);
    }
}

/// Clamps every coordinate into its `[lower[i], upper[i]]` interval.
pub fn clamp_to_bounds(candidate: &mut [f64], lower: &[f64], upper: &[f64]) {
    for ((value, &lo), &hi) in candidate.iter_mut().zip(lower).zip(upper) {
        *value = value.clamp(lo, hi);
    }
}
