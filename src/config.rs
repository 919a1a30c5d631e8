//! Engine configuration.
//!
//! [`GaConfig`] holds the numeric parameters of the evolutionary loop.
//! Strategies, the prototype, and the fitness function are supplied to the
//! engine itself; see [`crate::engine::GaEngine`].

use crate::error::GaError;

/// Configuration for the evolutionary engine.
///
/// # Defaults
///
/// ```
/// use evokit::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evokit::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_crossover_rate(0.8)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders store values as given; out-of-range rates are reported by
/// [`validate`](GaConfig::validate) (which the engine calls at `run()`
/// entry) rather than silently clamped. Only per-gene operator outputs are
/// ever clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Must be positive.
    ///
    /// Larger populations increase diversity but slow down each generation.
    /// Typical range: 20–500.
    pub population_size: usize,

    /// Number of generations to run. Must be positive; this is the only
    /// termination condition.
    pub generations: usize,

    /// Probability of recombining a parent pair (0.0–1.0).
    ///
    /// When the trial fails, both parents are copied unchanged into the
    /// offspring list.
    pub crossover_rate: f64,

    /// Per-gene probability of mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 200,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick runs: small population, few generations.
    pub fn fast() -> Self {
        Self {
            population_size: 30,
            generations: 50,
            ..Self::default()
        }
    }

    /// Preset balancing quality against runtime.
    pub fn balanced() -> Self {
        Self {
            population_size: 100,
            generations: 200,
            ..Self::default()
        }
    }

    /// Preset for quality: large population, many generations.
    pub fn quality() -> Self {
        Self {
            population_size: 200,
            generations: 500,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`GaError::Configuration`] if a size is zero or a rate lies
    /// outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 {
            return Err(GaError::config("population_size must be at least 1"));
        }
        if self.generations == 0 {
            return Err(GaError::config("generations must be at least 1"));
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}

fn check_rate(name: &str, rate: f64) -> Result<(), GaError> {
    if !(0.0..=1.0).contains(&rate) || rate.is_nan() {
        return Err(GaError::config(format!(
            "{name} must be within [0, 1], got {rate}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.generations, 200);
        assert!((config.crossover_rate - 0.9).abs() < 1e-12);
        assert!((config.mutation_rate - 0.1).abs() < 1e-12);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(10)
            .with_crossover_rate(0.8)
            .with_mutation_rate(0.1)
            .with_seed(42);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 10);
        assert!((config.crossover_rate - 0.8).abs() < 1e-12);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_zero_sizes_rejected() {
        assert!(GaConfig::default()
            .with_population_size(0)
            .validate()
            .is_err());
        assert!(GaConfig::default().with_generations(0).validate().is_err());
    }

    #[test]
    fn test_rates_are_not_clamped() {
        // Out-of-range rates are stored as given and rejected at validation.
        let config = GaConfig::default().with_crossover_rate(1.5);
        assert!((config.crossover_rate - 1.5).abs() < 1e-12);
        assert!(config.validate().is_err());

        assert!(GaConfig::default()
            .with_mutation_rate(-0.1)
            .validate()
            .is_err());
        assert!(GaConfig::default()
            .with_mutation_rate(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_boundary_rates_are_valid() {
        assert!(GaConfig::default()
            .with_crossover_rate(0.0)
            .with_mutation_rate(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_presets_validate() {
        for config in [GaConfig::fast(), GaConfig::balanced(), GaConfig::quality()] {
            assert!(config.validate().is_ok());
        }
        assert_eq!(GaConfig::fast().population_size, 30);
        assert_eq!(GaConfig::quality().generations, 500);
    }

    #[test]
    fn test_preset_chainable() {
        let config = GaConfig::fast().with_seed(7);
        assert_eq!(config.population_size, 30);
        assert_eq!(config.seed, Some(7));
    }
}
