//! Mutation strategies.
//!
//! Mutation perturbs offspring in place. For each gene of each chromosome,
//! an independent Bernoulli trial at the mutation rate decides whether the
//! variant's perturbation applies; Integer/Float results are clamped back
//! into the declared `[min, max]` domain before they become observable.
//!
//! Randomness comes from each chromosome's own random stream, so mutating
//! different chromosomes never contends on a shared generator.
//!
//! A strategy applied to a chromosome kind it does not perturb is a no-op
//! (a bit-flip over a float vector changes nothing).

use crate::chromosome::{Chromosome, Genes};
use rand::Rng;

/// Default noise scale for [`Mutation::FloatUniform`], as a fraction of the
/// domain width.
pub const DEFAULT_NOISE_SCALE: f64 = 0.05;

/// Mutation strategy for perturbing genes in place.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// Inverts selected bits. Binary chromosomes only; no-op otherwise.
    BitFlip,

    /// Adds +1 or −1 (fair coin) to selected genes, clamped to `[min, max]`.
    /// Integer chromosomes only; no-op otherwise.
    IntegerNeighbor,

    /// Adds uniform noise from `[-noise_scale·(max−min), +noise_scale·(max−min)]`
    /// to selected genes, clamped to `[min, max]`. Float chromosomes only;
    /// no-op otherwise.
    FloatUniform { noise_scale: f64 },
}

impl Mutation {
    /// [`Mutation::FloatUniform`] with the default noise scale of
    /// [`DEFAULT_NOISE_SCALE`].
    pub fn float_uniform() -> Self {
        Mutation::FloatUniform {
            noise_scale: DEFAULT_NOISE_SCALE,
        }
    }

    /// Mutates every chromosome in place, testing each gene independently
    /// at probability `rate`.
    pub fn mutate(&self, chromosomes: &mut [Chromosome], rate: f64) {
        for chromosome in chromosomes {
            self.mutate_one(chromosome, rate);
        }
    }

    fn mutate_one(&self, chromosome: &mut Chromosome, rate: f64) {
        let (genes, rng) = chromosome.parts_mut();
        match (self, genes) {
            (Mutation::BitFlip, Genes::Binary(values)) => {
                for bit in values.iter_mut() {
                    if rng.random::<f64>() < rate {
                        *bit = !*bit;
                    }
                }
            }
            (Mutation::IntegerNeighbor, Genes::Integer { values, min, max }) => {
                for g in values.iter_mut() {
                    if rng.random::<f64>() < rate {
                        let step = if rng.random_bool(0.5) { 1 } else { -1 };
                        *g = (*g + step).clamp(*min, *max);
                    }
                }
            }
            (Mutation::FloatUniform { noise_scale }, Genes::Float { values, min, max }) => {
                let max_step = (*max - *min) * noise_scale;
                if max_step <= 0.0 {
                    return;
                }
                for g in values.iter_mut() {
                    if rng.random::<f64>() < rate {
                        let step = rng.random_range(-max_step..=max_step);
                        *g = (*g + step).clamp(*min, *max);
                    }
                }
            }
            // Strategy does not apply to this encoding.
            _ => {}
        }
    }
}
