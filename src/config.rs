//! NSGA-II configuration.
//!
//! [`Nsga2Config`] holds all parameters that control the generational loop.
//! Builder methods store values verbatim; [`Nsga2Config::validate`] is
//! called at the start of every run, so a config mutated between runs is
//! re-checked at the point of use.

use crate::error::Nsga2Error;

/// Configuration for the NSGA-II optimizer.
///
/// # Defaults
///
/// ```
/// use nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 2000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default()
///     .with_population_size(40)
///     .with_max_generations(250)
///     .with_crossover_prob(0.8)
///     .with_mutation_strength(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga2Config {
    /// Number of candidates in the population.
    ///
    /// Must be at least 4 and a multiple of 4: parents are drawn in pairs
    /// and each crossover yields two children, so odd or tiny populations
    /// cannot be paired evenly.
    pub population_size: usize,

    /// Number of generations to evolve.
    ///
    /// Zero is allowed and returns the initial population's rank-0 front
    /// without any evolution.
    pub max_generations: usize,

    /// Probability that a selected parent pair is recombined (0.0–1.0).
    ///
    /// When crossover does not fire, the children are exact parent copies.
    pub crossover_prob: f64,

    /// Per-coordinate probability of mutation (0.0–1.0).
    pub mutation_prob: f64,

    /// Standard deviation of the Gaussian mutation perturbation.
    ///
    /// Also used as the spread of the initial population around the
    /// starting point. Must be positive and finite.
    pub mutation_strength: f64,

    /// Tolerance reserved for convergence-based stopping (detecting
    /// negligible front movement between generations).
    ///
    /// Currently not consulted by the runner: termination is purely
    /// generation-count based. Kept as part of the configuration surface
    /// so existing configs stay valid when convergence detection lands.
    pub epsilon: f64,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 2000,
            crossover_prob: 0.6,
            mutation_prob: 0.3,
            mutation_strength: 1e-3,
            epsilon: 1e-6,
        }
    }
}

impl Nsga2Config {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_prob(mut self, prob: f64) -> Self {
        self.crossover_prob = prob;
        self
    }

    /// Sets the per-coordinate mutation probability.
    pub fn with_mutation_prob(mut self, prob: f64) -> Self {
        self.mutation_prob = prob;
        self
    }

    /// Sets the mutation strength (Gaussian standard deviation).
    pub fn with_mutation_strength(mut self, strength: f64) -> Self {
        self.mutation_strength = strength;
        self
    }

    /// Sets the convergence tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns the first violated constraint. The runner calls this on
    /// entry, so invalid values set through the builders or plain field
    /// access are rejected before any evaluation happens.
    pub fn validate(&self) -> Result<(), Nsga2Error> {
        if self.population_size < 4 || self.population_size % 4 != 0 {
            return Err(Nsga2Error::InvalidPopulationSize(self.population_size));
        }
        if !(0.0..=1.0).contains(&self.crossover_prob) {
            return Err(Nsga2Error::InvalidCrossoverProb(self.crossover_prob));
        }
        if !(0.0..=1.0).contains(&self.mutation_prob) {
            return Err(Nsga2Error::InvalidMutationProb(self.mutation_prob));
        }
        if !(self.mutation_strength > 0.0) || !self.mutation_strength.is_finite() {
            return Err(Nsga2Error::InvalidMutationStrength(self.mutation_strength));
        }
        if !(self.epsilon >= 0.0) {
            return Err(Nsga2Error::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Nsga2Config::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 2000);
        assert!((config.crossover_prob - 0.6).abs() < 1e-12);
        assert!((config.mutation_prob - 0.3).abs() < 1e-12);
        assert!((config.mutation_strength - 1e-3).abs() < 1e-15);
        assert!((config.epsilon - 1e-6).abs() < 1e-18);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = Nsga2Config::default()
            .with_population_size(8)
            .with_max_generations(50)
            .with_crossover_prob(0.9)
            .with_mutation_prob(0.25)
            .with_mutation_strength(0.1)
            .with_epsilon(1e-4);

        assert_eq!(config.population_size, 8);
        assert_eq!(config.max_generations, 50);
        assert!((config.crossover_prob - 0.9).abs() < 1e-12);
        assert!((config.mutation_prob - 0.25).abs() < 1e-12);
        assert!((config.mutation_strength - 0.1).abs() < 1e-12);
        assert!((config.epsilon - 1e-4).abs() < 1e-12);
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = Nsga2Config::default().with_population_size(3);
        assert_eq!(
            config.validate(),
            Err(Nsga2Error::InvalidPopulationSize(3))
        );
    }

    #[test]
    fn test_validate_population_not_multiple_of_4() {
        let config = Nsga2Config::default().with_population_size(10);
        assert_eq!(
            config.validate(),
            Err(Nsga2Error::InvalidPopulationSize(10))
        );
    }

    #[test]
    fn test_validate_minimum_population() {
        let config = Nsga2Config::default().with_population_size(4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations_allowed() {
        let config = Nsga2Config::default().with_max_generations(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_crossover_prob_out_of_range() {
        let config = Nsga2Config::default().with_crossover_prob(1.5);
        assert!(matches!(
            config.validate(),
            Err(Nsga2Error::InvalidCrossoverProb(_))
        ));

        let config = Nsga2Config::default().with_crossover_prob(-0.1);
        assert!(matches!(
            config.validate(),
            Err(Nsga2Error::InvalidCrossoverProb(_))
        ));
    }

    #[test]
    fn test_validate_mutation_prob_out_of_range() {
        let config = Nsga2Config::default().with_mutation_prob(2.0);
        assert!(matches!(
            config.validate(),
            Err(Nsga2Error::InvalidMutationProb(_))
        ));
    }

    #[test]
    fn test_validate_mutation_strength() {
        let config = Nsga2Config::default().with_mutation_strength(0.0);
        assert!(matches!(
            config.validate(),
            Err(Nsga2Error::InvalidMutationStrength(_))
        ));

        let config = Nsga2Config::default().with_mutation_strength(-1.0);
        assert!(matches!(
            config.validate(),
            Err(Nsga2Error::InvalidMutationStrength(_))
        ));

        let config = Nsga2Config::default().with_mutation_strength(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(Nsga2Error::InvalidMutationStrength(_))
        ));

        let config = Nsga2Config::default().with_mutation_strength(f64::INFINITY);
        assert!(matches!(
            config.validate(),
            Err(Nsga2Error::InvalidMutationStrength(_))
        ));
    }

    #[test]
    fn test_validate_negative_epsilon() {
        let config = Nsga2Config::default().with_epsilon(-1e-9);
        assert!(matches!(
            config.validate(),
            Err(Nsga2Error::InvalidEpsilon(_))
        ));
    }

    #[test]
    fn test_builders_do_not_clamp() {
        // Out-of-range values are stored as-is and rejected by validate,
        // not silently corrected.
        let config = Nsga2Config::default().with_mutation_prob(1.5);
        assert!((config.mutation_prob - 1.5).abs() < 1e-12);
        assert!(config.validate().is_err());
    }
}
