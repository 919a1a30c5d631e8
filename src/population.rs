//! Population container.
//!
//! A [`Population`] is an ordered collection of chromosomes with a declared
//! target size. The engine owns the current population exclusively and
//! replaces it wholesale each generation; no operator retains a live alias
//! into it (selection returns owned copies).

use crate::chromosome::Chromosome;
use crate::error::GaError;

/// The current generation's chromosomes, in stable insertion order.
///
/// After any successful [`replace`](Population::replace) the population
/// holds exactly `target_size` individuals.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Chromosome>,
    target_size: usize,
}

impl Population {
    /// Creates an empty population with the given target size.
    ///
    /// # Errors
    /// Returns [`GaError::Configuration`] if `target_size` is zero.
    pub fn new(target_size: usize) -> Result<Self, GaError> {
        if target_size == 0 {
            return Err(GaError::config("population target size must be at least 1"));
        }
        Ok(Self {
            individuals: Vec::with_capacity(target_size),
            target_size,
        })
    }

    /// Appends an individual.
    pub fn add(&mut self, chromosome: Chromosome) {
        self.individuals.push(chromosome);
    }

    /// The individuals in insertion order.
    pub fn individuals(&self) -> &[Chromosome] {
        &self.individuals
    }

    /// Mutable access for fitness evaluation.
    pub(crate) fn individuals_mut(&mut self) -> &mut [Chromosome] {
        &mut self.individuals
    }

    /// Current number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The declared target size.
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    /// Whether the population has reached its target size.
    pub fn is_full(&self) -> bool {
        self.individuals.len() >= self.target_size
    }

    /// The individual with the highest fitness. Ties resolve to the first
    /// occurrence, so the result is deterministic for a given ordering.
    ///
    /// # Errors
    /// Returns [`GaError::EmptyPopulation`] if the population is empty.
    pub fn best_individual(&self) -> Result<&Chromosome, GaError> {
        let mut iter = self.individuals.iter();
        let first = iter.next().ok_or(GaError::EmptyPopulation)?;
        Ok(iter.fold(first, |best, c| {
            if c.fitness() > best.fitness() {
                c
            } else {
                best
            }
        }))
    }

    /// The individual with the lowest fitness, first occurrence on ties.
    ///
    /// # Errors
    /// Returns [`GaError::EmptyPopulation`] if the population is empty.
    pub fn worst_individual(&self) -> Result<&Chromosome, GaError> {
        let mut iter = self.individuals.iter();
        let first = iter.next().ok_or(GaError::EmptyPopulation)?;
        Ok(iter.fold(first, |worst, c| {
            if c.fitness() < worst.fitness() {
                c
            } else {
                worst
            }
        }))
    }

    /// Mean fitness over all individuals, or 0.0 for an empty population.
    pub fn average_fitness(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        let total: f64 = self.individuals.iter().map(Chromosome::fitness).sum();
        total / self.individuals.len() as f64
    }

    /// Discards the current contents and adopts `new_individuals` verbatim.
    ///
    /// # Errors
    /// Returns [`GaError::Configuration`] unless exactly `target_size`
    /// individuals are supplied.
    pub fn replace(&mut self, new_individuals: Vec<Chromosome>) -> Result<(), GaError> {
        if new_individuals.len() != self.target_size {
            return Err(GaError::config(format!(
                "replacement must supply exactly {} individuals, got {}",
                self.target_size,
                new_individuals.len()
            )));
        }
        self.individuals = new_individuals;
        Ok(())
    }
}
