//! Replacement strategies.
//!
//! Replacement forms the next generation from the old population and the
//! offspring list. Every strategy returns a population holding exactly the
//! target size.
//!
//! Note that only [`Replacement::Elitist`] is inherently elitist:
//! Generational and SteadyState replacement can lose the best individual
//! found so far, which is why the engine tracks the best externally.

use crate::chromosome::Chromosome;
use crate::error::GaError;
use crate::population::Population;
use rand::Rng;
use std::cmp::Ordering;

/// Replacement strategy for forming the next population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Replacement {
    /// The offspring list becomes the new population verbatim. Requires
    /// exactly `target_size` offspring.
    Generational,

    /// Keeps clones of the `k` highest-fitness individuals from the old
    /// population and fills the remaining `target_size - k` slots from the
    /// offspring in order.
    Elitist(usize),

    /// Sorts the old population ascending by fitness and replaces its `k`
    /// weakest with individuals drawn (with replacement) from the
    /// offspring; the rest of the old population is retained unchanged.
    SteadyState(usize),
}

impl Default for Replacement {
    fn default() -> Self {
        Replacement::Generational
    }
}

impl Replacement {
    /// Builds the next population of exactly `old_population.target_size()`
    /// individuals.
    ///
    /// # Errors
    /// Returns [`GaError::Configuration`] when the offspring list cannot
    /// fill the strategy's contract: wrong size for Generational, fewer
    /// than `target_size - k` offspring for Elitist(k), an empty offspring
    /// list for SteadyState(k) with `k > 0`, or `k` exceeding the target
    /// size.
    pub fn replace<R: Rng>(
        &self,
        old_population: Population,
        offspring: Vec<Chromosome>,
        rng: &mut R,
    ) -> Result<Population, GaError> {
        match self {
            Replacement::Generational => generational(old_population, offspring),
            Replacement::Elitist(k) => elitist(old_population, offspring, *k),
            Replacement::SteadyState(k) => steady_state(old_population, offspring, *k, rng),
        }
    }
}

fn generational(
    old_population: Population,
    offspring: Vec<Chromosome>,
) -> Result<Population, GaError> {
    let target = old_population.target_size();
    if offspring.len() != target {
        return Err(GaError::config(format!(
            "generational replacement requires exactly {} offspring, got {}",
            target,
            offspring.len()
        )));
    }
    let mut next = Population::new(target)?;
    next.replace(offspring)?;
    Ok(next)
}

fn elitist(
    old_population: Population,
    offspring: Vec<Chromosome>,
    num_elites: usize,
) -> Result<Population, GaError> {
    let target = old_population.target_size();
    if num_elites > target {
        return Err(GaError::config(format!(
            "elite count {num_elites} exceeds population target size {target}"
        )));
    }
    let fill = target - num_elites;
    if offspring.len() < fill {
        return Err(GaError::config(format!(
            "elitist replacement needs at least {} offspring, got {}",
            fill,
            offspring.len()
        )));
    }

    // Stable sort keeps first-occurrence order among equal-fitness elites.
    let mut ranked: Vec<&Chromosome> = old_population.individuals().iter().collect();
    ranked.sort_by(|a, b| descending(a.fitness(), b.fitness()));

    let mut next_gen: Vec<Chromosome> = ranked
        .into_iter()
        .take(num_elites)
        .cloned()
        .collect();
    next_gen.extend(offspring.into_iter().take(fill));

    let mut next = Population::new(target)?;
    next.replace(next_gen)?;
    Ok(next)
}

fn steady_state<R: Rng>(
    old_population: Population,
    offspring: Vec<Chromosome>,
    num_replaced: usize,
    rng: &mut R,
) -> Result<Population, GaError> {
    let target = old_population.target_size();
    if num_replaced > target {
        return Err(GaError::config(format!(
            "steady-state replace count {num_replaced} exceeds population target size {target}"
        )));
    }
    if num_replaced > 0 && offspring.is_empty() {
        return Err(GaError::config(
            "steady-state replacement requires a non-empty offspring list",
        ));
    }
    if old_population.len() != target {
        return Err(GaError::config(format!(
            "steady-state replacement requires a full population of {}, got {}",
            target,
            old_population.len()
        )));
    }

    let mut survivors = old_population.individuals().to_vec();
    survivors.sort_by(|a, b| ascending(a.fitness(), b.fitness()));

    // Overwrite the k weakest with random draws from the offspring.
    for slot in survivors.iter_mut().take(num_replaced) {
        *slot = offspring[rng.random_range(0..offspring.len())].clone();
    }

    let mut next = Population::new(target)?;
    next.replace(survivors)?;
    Ok(next)
}

fn ascending(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn descending(a: f64, b: f64) -> Ordering {
    ascending(b, a)
}
