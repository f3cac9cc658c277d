//! Pareto dominance utilities: non-dominated sorting, crowding distance,
//! and the crowded-comparison operator.
//!
//! These are the three building blocks of NSGA-II (Deb et al., 2002):
//!
//! - [`dominates`]: pairwise Pareto dominance check
//! - [`non_dominated_sort`]: partitions a population into ranked fronts
//! - [`crowding_distance`]: per-front diversity score
//! - [`crowded_prefer`]: total order over (rank, crowding distance)
//!
//! All objectives are **minimized**: lower values are better.
//!
//! # References
//!
//! - Deb, Pratap, Agarwal, Meyarivan (2002), "A Fast and Elitist
//!   Multiobjective Genetic Algorithm: NSGA-II", IEEE Trans. Evol. Comp. 6(2)

/// Pareto dominance check (minimization).
///
/// `a` dominates `b` iff `a` is no worse than `b` on every objective and
/// strictly better on at least one. Two identical vectors dominate in
/// neither direction, which keeps the domination relation acyclic and the
/// front stratification valid.
///
/// # Example
///
/// ```
/// use nsga2::pareto::dominates;
///
/// assert!(dominates(&[1.0, 2.0], &[1.0, 3.0]));
/// assert!(!dominates(&[1.0, 3.0], &[1.0, 2.0]));
/// // Trade-off: neither dominates
/// assert!(!dominates(&[1.0, 3.0], &[3.0, 1.0]));
/// // Identical: neither dominates
/// assert!(!dominates(&[2.0, 2.0], &[2.0, 2.0]));
/// ```
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    debug_assert_eq!(a.len(), b.len(), "objective vectors must have equal length");

    let mut strictly_better = false;
    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va > vb {
            return false;
        }
        if va < vb {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Result of [`non_dominated_sort`]: the front partition and a
/// per-candidate rank table over the same index space.
#[derive(Debug, Clone)]
pub struct SortedFronts {
    /// Candidate indices grouped by front; `fronts[0]` is the Pareto front.
    pub fronts: Vec<Vec<usize>>,

    /// Rank of each candidate, equal to the index of its front.
    pub ranks: Vec<usize>,
}

/// Fast non-dominated sorting (Deb et al., 2002).
///
/// One all-pairs pass counts, for every candidate, how many others
/// dominate it and which others it dominates. Candidates with a zero
/// domination count form front 0; peeling a front decrements the counts
/// of everything its members dominate, and counts reaching zero form the
/// next front. The relation is acyclic, so every candidate is assigned to
/// exactly one front and the loop always terminates.
///
/// Order within a front is insertion order and carries no meaning;
/// preference among same-rank candidates comes from crowding distance.
///
/// # Complexity
///
/// O(N² · M) for N candidates and M objectives.
///
/// # Panics
///
/// Panics if `objectives` is empty.
///
/// # Example
///
/// ```
/// use nsga2::pareto::non_dominated_sort;
///
/// let objectives = vec![
///     vec![1.0, 4.0],
///     vec![4.0, 1.0],
///     vec![3.0, 3.0],
///     vec![5.0, 5.0], // dominated by everything above
/// ];
/// let sorted = non_dominated_sort(&objectives);
/// assert_eq!(sorted.ranks, vec![0, 0, 0, 1]);
/// assert_eq!(sorted.fronts.len(), 2);
/// ```
pub fn non_dominated_sort(objectives: &[Vec<f64>]) -> SortedFronts {
    let n = objectives.len();
    assert!(n > 0, "cannot sort an empty population");

    let mut domination_count = vec![0usize; n];
    let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];

    for p in 0..n {
        for q in (p + 1)..n {
            if dominates(&objectives[p], &objectives[q]) {
                dominated[p].push(q);
                domination_count[q] += 1;
            } else if dominates(&objectives[q], &objectives[p]) {
                dominated[q].push(p);
                domination_count[p] += 1;
            }
        }
    }

    let mut ranks = vec![0usize; n];
    let mut current: Vec<usize> = (0..n).filter(|&p| domination_count[p] == 0).collect();
    let mut fronts = Vec::new();

    while !current.is_empty() {
        let mut next = Vec::new();
        for &p in &current {
            for &q in &dominated[p] {
                domination_count[q] -= 1;
                if domination_count[q] == 0 {
                    ranks[q] = fronts.len() + 1;
                    next.push(q);
                }
            }
        }
        fronts.push(std::mem::replace(&mut current, next));
    }

    SortedFronts { fronts, ranks }
}

/// Crowding distance assignment for one front (Deb et al., 2002).
///
/// Writes into `distances` at the positions named by `front`; entries for
/// candidates outside the front are untouched. For each objective the
/// front is sorted by that objective's value: the two boundary candidates
/// receive `f64::INFINITY` (maximally diverse, must survive), and every
/// interior candidate accumulates the normalized gap between its sorted
/// neighbors. A degenerate objective whose minimum equals its maximum
/// contributes nothing, so no division by zero occurs.
///
/// Fronts of one or two candidates are all-boundary: every member gets
/// infinity.
///
/// # Example
///
/// ```
/// use nsga2::pareto::crowding_distance;
///
/// let objectives = vec![vec![0.0, 10.0], vec![5.0, 5.0], vec![10.0, 0.0]];
/// let mut distances = vec![0.0; 3];
/// crowding_distance(&[0, 1, 2], &objectives, &mut distances);
///
/// assert!(distances[0].is_infinite());
/// assert!(distances[2].is_infinite());
/// assert!(distances[1].is_finite() && distances[1] > 0.0);
/// ```
pub fn crowding_distance(front: &[usize], objectives: &[Vec<f64>], distances: &mut [f64]) {
    let len = front.len();
    if len == 0 {
        return;
    }
    if len <= 2 {
        for &idx in front {
            distances[idx] = f64::INFINITY;
        }
        return;
    }

    for &idx in front {
        distances[idx] = 0.0;
    }

    let num_objectives = objectives[front[0]].len();
    let mut sorted = front.to_vec();

    for obj in 0..num_objectives {
        sorted.sort_by(|&a, &b| objectives[a][obj].total_cmp(&objectives[b][obj]));

        let min_val = objectives[sorted[0]][obj];
        let max_val = objectives[sorted[len - 1]][obj];

        distances[sorted[0]] = f64::INFINITY;
        distances[sorted[len - 1]] = f64::INFINITY;

        let range = max_val - min_val;
        if range <= 0.0 {
            continue;
        }

        for i in 1..(len - 1) {
            let prev = objectives[sorted[i - 1]][obj];
            let next = objectives[sorted[i + 1]][obj];
            distances[sorted[i]] += (next - prev) / range;
        }
    }
}

/// Crowded-comparison operator: returns `true` when candidate `p` is
/// preferred over candidate `q`.
///
/// A lower rank always wins; among equal ranks the larger crowding
/// distance wins. This never lets a worse-ranked candidate survive over a
/// better-ranked one and, among equals, protects boundary and sparse
/// candidates. When rank and distance both tie, `q` is kept — the choice
/// is arbitrary but deterministic.
pub fn crowded_prefer(p: usize, q: usize, ranks: &[usize], distances: &[f64]) -> bool {
    if ranks[p] != ranks[q] {
        return ranks[p] < ranks[q];
    }
    distances[p] > distances[q]
}

// ============================================================================
// Tests
// ============================================================================
