//! Crossover strategies.
//!
//! Crossover consumes parents pairwise in input order and produces two
//! offspring per pair. An odd trailing parent wraps around to pair with the
//! first. Each pair gets one Bernoulli trial at the crossover rate: on
//! failure both parents are copied unchanged into the offspring list, on
//! success they are recombined.
//!
//! All three operators work uniformly across the three gene encodings
//! through the [`Gene`] view. Because crossover only permutes values that
//! already satisfy the parents' domain invariants, offspring need no
//! re-clamping.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use crate::chromosome::Chromosome;
use crate::error::GaError;
use rand::Rng;

/// Crossover strategy for recombining parent pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// One cut point `p ∈ [0, length)`; offspring A takes parent 1's genes
    /// before the cut and parent 2's from the cut on, offspring B the
    /// complement.
    SinglePoint,

    /// Two cut points, ordered; the inclusive segment `[p1, p2]` is swapped
    /// between the parents to form both children.
    TwoPoint,

    /// Each gene index independently inherits from parent 1 or parent 2 on
    /// a fair coin flip; child B takes the complementary source.
    Uniform,
}

impl Default for Crossover {
    fn default() -> Self {
        Crossover::SinglePoint
    }
}

impl Crossover {
    /// Recombines `parents` pairwise at the given rate.
    ///
    /// Every offspring is a fresh owned chromosome, reseeded from `rng` so
    /// siblings do not share a random stream. Recombined offspring have
    /// their fitness reset to 0.0; pass-through copies keep the parent's
    /// fitness (the engine re-evaluates either way).
    ///
    /// The offspring list has length `parents.len()` for an even number of
    /// parents and `parents.len() + 1` when the odd trailing parent wraps.
    ///
    /// # Errors
    /// - [`GaError::VariantMismatch`] if a pair mixes gene encodings.
    /// - [`GaError::Configuration`] if a pair's lengths differ or `parents`
    ///   is empty.
    pub fn crossover<R: Rng>(
        &self,
        parents: &[Chromosome],
        rate: f64,
        rng: &mut R,
    ) -> Result<Vec<Chromosome>, GaError> {
        if parents.is_empty() {
            return Err(GaError::config("crossover requires at least one parent"));
        }

        let mut offspring = Vec::with_capacity(parents.len() + 1);
        let mut i = 0;
        while i < parents.len() {
            let parent1 = &parents[i];
            // Odd trailing parent wraps to pair with the first.
            let parent2 = if i + 1 < parents.len() {
                &parents[i + 1]
            } else {
                &parents[0]
            };
            check_pair(parent1, parent2)?;

            let (mut child1, mut child2) = if rng.random::<f64>() < rate {
                let (mut a, mut b) = match self {
                    Crossover::SinglePoint => single_point(parent1, parent2, rng)?,
                    Crossover::TwoPoint => two_point(parent1, parent2, rng)?,
                    Crossover::Uniform => uniform(parent1, parent2, rng)?,
                };
                a.set_fitness(0.0);
                b.set_fitness(0.0);
                (a, b)
            } else {
                (parent1.clone(), parent2.clone())
            };

            child1.reseed(rng.random());
            child2.reseed(rng.random());
            offspring.push(child1);
            offspring.push(child2);
            i += 2;
        }
        Ok(offspring)
    }
}

fn check_pair(parent1: &Chromosome, parent2: &Chromosome) -> Result<(), GaError> {
    if parent1.kind() != parent2.kind() {
        return Err(GaError::VariantMismatch {
            left: parent1.kind(),
            right: parent2.kind(),
        });
    }
    if parent1.len() != parent2.len() {
        return Err(GaError::config(format!(
            "crossover parents must have equal length, got {} and {}",
            parent1.len(),
            parent2.len()
        )));
    }
    Ok(())
}

fn single_point<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> Result<(Chromosome, Chromosome), GaError> {
    let length = parent1.len();
    let point = rng.random_range(0..length);

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();
    for i in point..length {
        child1.set_gene(i, parent2.gene(i)?)?;
        child2.set_gene(i, parent1.gene(i)?)?;
    }
    Ok((child1, child2))
}

fn two_point<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> Result<(Chromosome, Chromosome), GaError> {
    let length = parent1.len();
    let a = rng.random_range(0..length);
    let b = rng.random_range(0..length);
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();
    // Swap the inclusive segment [lo, hi].
    for i in lo..=hi {
        child1.set_gene(i, parent2.gene(i)?)?;
        child2.set_gene(i, parent1.gene(i)?)?;
    }
    Ok((child1, child2))
}

fn uniform<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> Result<(Chromosome, Chromosome), GaError> {
    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();
    for i in 0..parent1.len() {
        if rng.random_bool(0.5) {
            child1.set_gene(i, parent2.gene(i)?)?;
            child2.set_gene(i, parent1.gene(i)?)?;
        }
    }
    Ok((child1, child2))
}
