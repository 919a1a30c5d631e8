//! Selection strategies.
//!
//! Selection chooses parents from the evaluated population. Every strategy
//! returns freshly owned copies — never live references into the population —
//! so later operators may mutate parents without aliasing hazards.
//!
//! All strategies assume **maximization** (higher fitness = better).
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::chromosome::Chromosome;
use crate::error::GaError;
use crate::population::Population;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use evokit::Selection;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
///
/// // Fitness-proportionate selection
/// let sel = Selection::RouletteWheel;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Uniform random selection with replacement. No selection pressure;
    /// useful as a baseline and in tests.
    Random,

    /// Tournament selection: sample `k` individuals with replacement, keep
    /// the fittest (ties go to the first sampled).
    ///
    /// Higher `k` = stronger selection pressure.
    /// - k=2: light pressure (good for diversity)
    /// - k=3-5: moderate pressure (typical default)
    /// - k>5: strong pressure (risk of premature convergence)
    ///
    /// # Complexity
    /// O(k) per selected parent
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Requires non-negative fitness. When the total fitness is zero or
    /// otherwise degenerate, falls back to uniform random sampling instead
    /// of dividing by zero.
    ///
    /// # Complexity
    /// O(n) per selected parent (linear scan)
    RouletteWheel,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Selects `num_parents` parents from the population.
    ///
    /// The returned list has length exactly `num_parents`; each entry is an
    /// independent deep copy.
    ///
    /// # Errors
    /// - [`GaError::EmptyPopulation`] if the population is empty.
    /// - [`GaError::Configuration`] for `Tournament(0)`, or for
    ///   `RouletteWheel` over negative fitness values.
    pub fn select<R: Rng>(
        &self,
        population: &Population,
        num_parents: usize,
        rng: &mut R,
    ) -> Result<Vec<Chromosome>, GaError> {
        if population.is_empty() {
            return Err(GaError::EmptyPopulation);
        }

        match self {
            Selection::Random => Ok(random(population, num_parents, rng)),
            Selection::Tournament(k) => tournament(population, *k, num_parents, rng),
            Selection::RouletteWheel => roulette(population, num_parents, rng),
        }
    }
}

/// Uniform draws with replacement.
fn random<R: Rng>(population: &Population, num_parents: usize, rng: &mut R) -> Vec<Chromosome> {
    let individuals = population.individuals();
    (0..num_parents)
        .map(|_| individuals[rng.random_range(0..individuals.len())].clone())
        .collect()
}

/// For each parent slot, sample `k` candidates with replacement and keep the
/// fittest. Strict comparison keeps the first-sampled candidate on ties.
fn tournament<R: Rng>(
    population: &Population,
    k: usize,
    num_parents: usize,
    rng: &mut R,
) -> Result<Vec<Chromosome>, GaError> {
    if k == 0 {
        return Err(GaError::config("tournament size must be at least 1"));
    }
    let individuals = population.individuals();
    let n = individuals.len();

    let mut selected = Vec::with_capacity(num_parents);
    for _ in 0..num_parents {
        let mut best = &individuals[rng.random_range(0..n)];
        for _ in 1..k {
            let candidate = &individuals[rng.random_range(0..n)];
            if candidate.fitness() > best.fitness() {
                best = candidate;
            }
        }
        selected.push(best.clone());
    }
    Ok(selected)
}

/// Fitness-proportionate sampling over non-negative fitness.
fn roulette<R: Rng>(
    population: &Population,
    num_parents: usize,
    rng: &mut R,
) -> Result<Vec<Chromosome>, GaError> {
    let individuals = population.individuals();

    if let Some(bad) = individuals.iter().find(|c| c.fitness() < 0.0) {
        return Err(GaError::config(format!(
            "roulette wheel selection requires non-negative fitness, got {}",
            bad.fitness()
        )));
    }

    let total: f64 = individuals.iter().map(Chromosome::fitness).sum();

    // All-zero (or non-finite) total: uniform fallback instead of a
    // division by zero.
    if total <= 0.0 || !total.is_finite() {
        return Ok(random(population, num_parents, rng));
    }

    let mut selected = Vec::with_capacity(num_parents);
    for _ in 0..num_parents {
        let point = rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        let mut chosen = individuals.len() - 1; // floating-point fallback
        for (i, c) in individuals.iter().enumerate() {
            cumulative += c.fitness();
            if cumulative >= point {
                chosen = i;
                break;
            }
        }
        selected.push(individuals[chosen].clone());
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::Gene;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn population(fitnesses: &[f64]) -> Population {
        let mut pop = Population::new(fitnesses.len()).unwrap();
        for (i, &f) in fitnesses.iter().enumerate() {
            let mut c = Chromosome::integer(1, 0, 100).unwrap();
            c.set_gene(0, Gene::Int(i as i64)).unwrap();
            c.set_fitness(f);
            pop.add(c);
        }
        pop
    }

    fn index_of(c: &Chromosome) -> usize {
        let Gene::Int(i) = c.gene(0).unwrap() else {
            panic!("expected integer gene");
        };
        i as usize
    }

    #[test]
    fn test_returns_exactly_num_parents() {
        let pop = population(&[1.0, 2.0, 3.0]);
        let mut rng = StdRng::seed_from_u64(42);
        for sel in [
            Selection::Random,
            Selection::Tournament(3),
            Selection::RouletteWheel,
        ] {
            assert_eq!(sel.select(&pop, 7, &mut rng).unwrap().len(), 7);
            assert!(sel.select(&pop, 0, &mut rng).unwrap().is_empty());
        }
    }

    #[test]
    fn test_selected_parents_are_copies() {
        let pop = population(&[1.0, 2.0, 3.0]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut parents = Selection::Random.select(&pop, 3, &mut rng).unwrap();

        for p in &mut parents {
            p.set_gene(0, Gene::Int(77)).unwrap();
        }
        // Originals untouched.
        for (i, c) in pop.individuals().iter().enumerate() {
            assert_eq!(index_of(c), i);
        }
    }

    #[test]
    fn test_empty_population_errors() {
        let pop = Population::new(4).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            Selection::Random.select(&pop, 2, &mut rng).err(),
            Some(GaError::EmptyPopulation)
        );
    }

    #[test]
    fn test_tournament_zero_rejected() {
        let pop = population(&[1.0]);
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            Selection::Tournament(0).select(&pop, 1, &mut rng),
            Err(GaError::Configuration(_))
        ));
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = population(&[1.0, 5.0, 10.0, 2.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        let selected = Selection::Tournament(4).select(&pop, n, &mut rng).unwrap();
        for c in &selected {
            counts[index_of(c)] += 1;
        }
        // Index 2 (fitness=10.0) should dominate.
        assert!(
            counts[2] > 6000,
            "expected best to win >60% of tournaments, got {counts:?}"
        );
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let pop = population(&[1.0, 5.0, 10.0, 2.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let selected = Selection::Tournament(1)
            .select(&pop, 10_000, &mut rng)
            .unwrap();
        for c in &selected {
            counts[index_of(c)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform draws, got {counts:?}");
        }
    }

    #[test]
    fn test_roulette_favors_best() {
        let pop = population(&[1.0, 50.0, 100.0, 20.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let selected = Selection::RouletteWheel
            .select(&pop, 10_000, &mut rng)
            .unwrap();
        for c in &selected {
            counts[index_of(c)] += 1;
        }
        assert!(
            counts[2] > counts[0],
            "best should be selected more often: {counts:?}"
        );
        // Fitness share of index 2 is ~58%; allow slack.
        assert!(counts[2] > 4500, "expected ~58% share, got {counts:?}");
    }

    #[test]
    fn test_roulette_all_zero_falls_back_to_uniform() {
        let pop = population(&[0.0, 0.0, 0.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let selected = Selection::RouletteWheel
            .select(&pop, 10_000, &mut rng)
            .unwrap();
        assert_eq!(selected.len(), 10_000);

        let mut counts = [0u32; 4];
        for c in &selected {
            counts[index_of(c)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform fallback, got {counts:?}");
        }
    }

    #[test]
    fn test_roulette_rejects_negative_fitness() {
        let pop = population(&[1.0, -0.5, 2.0]);
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            Selection::RouletteWheel.select(&pop, 2, &mut rng),
            Err(GaError::Configuration(_))
        ));
    }

    #[test]
    fn test_single_individual() {
        let pop = population(&[5.0]);
        let mut rng = StdRng::seed_from_u64(42);
        for sel in [
            Selection::Random,
            Selection::Tournament(3),
            Selection::RouletteWheel,
        ] {
            let selected = sel.select(&pop, 3, &mut rng).unwrap();
            assert!(selected.iter().all(|c| index_of(c) == 0));
        }
    }
}
