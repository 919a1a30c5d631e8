//! The generational loop.
//!
//! [`GaEngine`] wires a chromosome prototype, a fitness function, and the
//! four operator strategies around the evolutionary cycle:
//!
//! ```text
//! population → selection → parents → crossover → offspring
//!     → mutation (in place) → optional repair → replacement
//!     → re-evaluation → best tracking
//! ```
//!
//! The engine owns the canonical best-so-far individual. Generational and
//! steady-state replacement are not inherently elitist and can lose the best
//! individual found, so the engine clones and retains it externally; the
//! per-generation `best_fitness` sequence it reports is therefore
//! monotonically non-decreasing regardless of the replacement strategy.
//!
//! The loop is strictly sequential: selection observes the fully evaluated
//! previous population, crossover observes the complete parent list, and
//! replacement completes before re-evaluation. Fitness evaluation is the one
//! parallelizable step — with the `parallel` feature it runs on rayon, and
//! the join completes before selection begins.

use crate::chromosome::Chromosome;
use crate::config::GaConfig;
use crate::crossover::Crossover;
use crate::error::GaError;
use crate::fitness::{FitnessFunction, InfeasibilityHandler};
use crate::mutation::Mutation;
use crate::population::Population;
use crate::replacement::Replacement;
use crate::selection::Selection;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One progress record per generation.
///
/// The engine collects these instead of printing; callers log, assert, or
/// display them as they see fit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRecord {
    /// 1-based generation index.
    pub generation: usize,
    /// Best fitness found so far, up to and including this generation.
    pub best_fitness: f64,
}

/// Result of an engine run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best individual found during the entire run (an independent
    /// clone, not an alias into the final population).
    pub best: Chromosome,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// One record per generation; `best_fitness` is non-decreasing.
    pub history: Vec<GenerationRecord>,

    /// The final population, for callers that inspect more than the best
    /// individual.
    pub final_population: Population,
}

/// The evolutionary engine.
///
/// Strategies are injected before running; `run()` fails with
/// [`GaError::Configuration`] if any of the four is missing.
///
/// # Examples
///
/// ```
/// use evokit::{Chromosome, Crossover, GaConfig, GaEngine, MaxOnes,
///              Mutation, Replacement, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(30)
///     .with_seed(42);
/// let prototype = Chromosome::binary(10)?;
///
/// let result = GaEngine::new(config, prototype, MaxOnes)
///     .with_selection(Selection::Tournament(3))
///     .with_crossover(Crossover::SinglePoint)
///     .with_mutation(Mutation::BitFlip)
///     .with_replacement(Replacement::Elitist(2))
///     .run()?;
///
/// assert!(result.best_fitness >= 5.0);
/// # Ok::<(), evokit::GaError>(())
/// ```
pub struct GaEngine<F: FitnessFunction> {
    config: GaConfig,
    prototype: Chromosome,
    fitness: F,
    selection: Option<Selection>,
    crossover: Option<Crossover>,
    mutation: Option<Mutation>,
    replacement: Option<Replacement>,
    infeasibility: Option<Box<dyn InfeasibilityHandler>>,
}

impl<F: FitnessFunction> GaEngine<F> {
    /// Creates an engine around a prototype and fitness function. The four
    /// operator strategies must be injected before calling
    /// [`run`](GaEngine::run).
    pub fn new(config: GaConfig, prototype: Chromosome, fitness: F) -> Self {
        Self {
            config,
            prototype,
            fitness,
            selection: None,
            crossover: None,
            mutation: None,
            replacement: None,
            infeasibility: None,
        }
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = Some(crossover);
        self
    }

    /// Sets the mutation strategy.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = Some(mutation);
        self
    }

    /// Sets the replacement strategy.
    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = Some(replacement);
        self
    }

    /// Sets an optional infeasibility handler, invoked once per offspring
    /// after mutation and before replacement.
    pub fn with_infeasibility_handler(
        mut self,
        handler: impl InfeasibilityHandler + 'static,
    ) -> Self {
        self.infeasibility = Some(Box::new(handler));
        self
    }

    /// Runs the evolutionary loop and returns the best individual found.
    ///
    /// # Errors
    /// - [`GaError::Configuration`] for an invalid config or a missing
    ///   strategy, surfaced before any work happens.
    /// - Any error from the fitness function or the operators, surfaced
    ///   immediately; the engine never retries.
    pub fn run(&self) -> Result<GaResult, GaError> {
        self.config.validate()?;
        let selection = require(self.selection, "selection")?;
        let crossover = require(self.crossover, "crossover")?;
        let mutation = require(self.mutation, "mutation")?;
        let replacement = require(self.replacement, "replacement")?;

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let size = self.config.population_size;

        // Each slot clones the prototype and gets its own random stream.
        let mut population = Population::new(size)?;
        for _ in 0..size {
            let mut individual = self.prototype.clone();
            individual.reseed(rng.random());
            individual.initialize();
            population.add(individual);
        }
        self.evaluate(&mut population)?;

        let mut best = population.best_individual()?.clone();
        debug!("initial best fitness: {:.4}", best.fitness());

        let mut history = Vec::with_capacity(self.config.generations);

        for generation in 1..=self.config.generations {
            let parents = selection.select(&population, size, &mut rng)?;

            let mut offspring =
                crossover.crossover(&parents, self.config.crossover_rate, &mut rng)?;
            // The odd-parent wraparound can yield one extra offspring; drop
            // the surplus so replacement sees at most target_size.
            offspring.truncate(size);

            mutation.mutate(&mut offspring, self.config.mutation_rate);

            if let Some(handler) = &self.infeasibility {
                for child in &mut offspring {
                    if handler.is_infeasible(child) {
                        handler.repair(child);
                    }
                }
            }

            population = replacement.replace(population, offspring, &mut rng)?;
            self.evaluate(&mut population)?;

            let current_best = population.best_individual()?;
            if current_best.fitness() > best.fitness() {
                best = current_best.clone();
            }

            debug!(
                "generation {generation}: best fitness {:.4}",
                best.fitness()
            );
            history.push(GenerationRecord {
                generation,
                best_fitness: best.fitness(),
            });
        }

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: self.config.generations,
            history,
            final_population: population,
        })
    }

    /// Evaluates every individual. With the `parallel` feature this fans
    /// out on rayon; evaluation is pure per chromosome and each chromosome
    /// owns its rng, so the only synchronization needed is the join before
    /// selection.
    fn evaluate(&self, population: &mut Population) -> Result<(), GaError> {
        #[cfg(feature = "parallel")]
        {
            population
                .individuals_mut()
                .par_iter_mut()
                .try_for_each(|individual| {
                    let fitness = self.fitness.evaluate(individual)?;
                    individual.set_fitness(fitness);
                    Ok(())
                })
        }
        #[cfg(not(feature = "parallel"))]
        {
            for individual in population.individuals_mut() {
                let fitness = self.fitness.evaluate(individual)?;
                individual.set_fitness(fitness);
            }
            Ok(())
        }
    }
}

fn require<T: Copy>(slot: Option<T>, name: &str) -> Result<T, GaError> {
    slot.ok_or_else(|| GaError::config(format!("{name} strategy must be set before run()")))
}
