//! Chromosome representation.
//!
//! A [`Chromosome`] is one candidate solution: a fixed-length gene array of
//! one of three kinds (bit, bounded integer, bounded real) plus a fitness
//! cell. The three kinds live in one closed sum type, [`Genes`], so every
//! operator matches exhaustively over them — there is no downcasting and no
//! dynamically-typed gene storage.
//!
//! Each chromosome owns its random-source state. Initialization and mutation
//! draw from the chromosome's own [`StdRng`], so concurrent work on different
//! chromosomes never shares a generator, and a run is reproducible from the
//! seeds the engine stamps onto each individual.
//!
//! # Invariants
//!
//! - `genes.len()` equals the declared length at every observable point.
//! - Integer/Float gene values lie within `[min, max]` (inclusive) after
//!   initialization, mutation, and crossover. [`Chromosome::set_gene`] clamps
//!   out-of-domain values rather than rejecting them.
//! - `Clone` produces an independent gene buffer: mutating a clone never
//!   affects the original.

use crate::error::GaError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// The kind of a chromosome's gene encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChromosomeKind {
    /// Bit vector.
    Binary,
    /// Bounded integer vector, bounds inclusive.
    Integer,
    /// Bounded real vector, bounds inclusive.
    Float,
}

impl fmt::Display for ChromosomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChromosomeKind::Binary => write!(f, "Binary"),
            ChromosomeKind::Integer => write!(f, "Integer"),
            ChromosomeKind::Float => write!(f, "Float"),
        }
    }
}

/// A single gene value, viewed uniformly across the three encodings.
///
/// Crossover operators use this view to move already-valid values between
/// parents without caring which encoding they are recombining.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gene {
    Bit(bool),
    Int(i64),
    Real(f64),
}

/// The typed gene payload of a chromosome.
#[derive(Debug, Clone, PartialEq)]
pub enum Genes {
    /// Bit vector.
    Binary(Vec<bool>),
    /// Integer vector with inclusive bounds.
    Integer { values: Vec<i64>, min: i64, max: i64 },
    /// Real vector with inclusive bounds.
    Float { values: Vec<f64>, min: f64, max: f64 },
}

impl Genes {
    /// Number of genes.
    pub fn len(&self) -> usize {
        match self {
            Genes::Binary(v) => v.len(),
            Genes::Integer { values, .. } => values.len(),
            Genes::Float { values, .. } => values.len(),
        }
    }

    /// Whether the gene array is empty. Never true for chromosomes built
    /// through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The encoding kind.
    pub fn kind(&self) -> ChromosomeKind {
        match self {
            Genes::Binary(_) => ChromosomeKind::Binary,
            Genes::Integer { .. } => ChromosomeKind::Integer,
            Genes::Float { .. } => ChromosomeKind::Float,
        }
    }

    fn gene(&self, index: usize) -> Option<Gene> {
        match self {
            Genes::Binary(v) => v.get(index).map(|&b| Gene::Bit(b)),
            Genes::Integer { values, .. } => values.get(index).map(|&g| Gene::Int(g)),
            Genes::Float { values, .. } => values.get(index).map(|&g| Gene::Real(g)),
        }
    }

    /// Writes one gene, clamping Integer/Float values into the domain.
    /// The caller has already checked the index.
    fn set_gene(&mut self, index: usize, gene: Gene) -> Result<(), GaError> {
        let actual = self.kind();
        match (self, gene) {
            (Genes::Binary(v), Gene::Bit(b)) => {
                v[index] = b;
                Ok(())
            }
            (Genes::Integer { values, min, max }, Gene::Int(g)) => {
                values[index] = g.clamp(*min, *max);
                Ok(())
            }
            (Genes::Float { values, min, max }, Gene::Real(g)) => {
                values[index] = g.clamp(*min, *max);
                Ok(())
            }
            (_, gene) => Err(GaError::UnsupportedVariant {
                expected: match gene {
                    Gene::Bit(_) => "Binary",
                    Gene::Int(_) => "Integer",
                    Gene::Real(_) => "Float",
                },
                actual,
            }),
        }
    }
}

/// One candidate solution: typed genes, a fitness cell, and an owned
/// random source.
///
/// Chromosomes are produced from a **prototype**: the engine clones the
/// prototype once per population slot, stamps each clone with a fresh seed
/// via [`reseed`](Chromosome::reseed), and calls
/// [`initialize`](Chromosome::initialize).
///
/// # Examples
///
/// ```
/// use evokit::Chromosome;
///
/// let mut c = Chromosome::integer(8, 0, 5)?.with_seed(42);
/// c.initialize();
/// assert_eq!(c.len(), 8);
/// # Ok::<(), evokit::GaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Chromosome {
    genes: Genes,
    fitness: f64,
    rng: StdRng,
}

impl Chromosome {
    /// Creates a binary chromosome with all genes cleared.
    ///
    /// # Errors
    /// Returns [`GaError::Configuration`] if `length` is zero.
    pub fn binary(length: usize) -> Result<Self, GaError> {
        check_length(length)?;
        Ok(Self::from_genes(Genes::Binary(vec![false; length])))
    }

    /// Creates an integer chromosome with inclusive bounds `[min, max]`,
    /// all genes initialized to `min`.
    ///
    /// # Errors
    /// Returns [`GaError::Configuration`] if `length` is zero or `min > max`.
    pub fn integer(length: usize, min: i64, max: i64) -> Result<Self, GaError> {
        check_length(length)?;
        if min > max {
            return Err(GaError::config(format!(
                "integer chromosome bounds invalid: min {min} > max {max}"
            )));
        }
        Ok(Self::from_genes(Genes::Integer {
            values: vec![min; length],
            min,
            max,
        }))
    }

    /// Creates a float chromosome with inclusive bounds `[min, max]`,
    /// all genes initialized to `min`.
    ///
    /// # Errors
    /// Returns [`GaError::Configuration`] if `length` is zero, `min >= max`,
    /// or either bound is not finite.
    pub fn float(length: usize, min: f64, max: f64) -> Result<Self, GaError> {
        check_length(length)?;
        if !min.is_finite() || !max.is_finite() {
            return Err(GaError::config(format!(
                "float chromosome bounds must be finite: [{min}, {max}]"
            )));
        }
        if min >= max {
            return Err(GaError::config(format!(
                "float chromosome bounds invalid: min {min} >= max {max}"
            )));
        }
        Ok(Self::from_genes(Genes::Float {
            values: vec![min; length],
            min,
            max,
        }))
    }

    fn from_genes(genes: Genes) -> Self {
        Self {
            genes,
            fitness: 0.0,
            rng: StdRng::seed_from_u64(0),
        }
    }

    /// Sets the random seed, builder-style. Useful on prototypes.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    /// Replaces this chromosome's random stream with one seeded from `seed`.
    ///
    /// The engine reseeds every prototype clone so each individual draws
    /// from a distinct, reproducible stream.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Randomly initializes all genes from this chromosome's own rng:
    /// uniform bits, uniform integers in `[min, max]`, uniform reals in
    /// `[min, max]`.
    pub fn initialize(&mut self) {
        let Self { genes, rng, .. } = self;
        match genes {
            Genes::Binary(v) => {
                for b in v.iter_mut() {
                    *b = rng.random_bool(0.5);
                }
            }
            Genes::Integer { values, min, max } => {
                for g in values.iter_mut() {
                    *g = rng.random_range(*min..=*max);
                }
            }
            Genes::Float { values, min, max } => {
                for g in values.iter_mut() {
                    *g = rng.random_range(*min..=*max);
                }
            }
        }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome has no genes. Always false for chromosomes
    /// built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The encoding kind.
    pub fn kind(&self) -> ChromosomeKind {
        self.genes.kind()
    }

    /// Read access to the typed gene payload, for fitness functions that
    /// match on the encoding.
    pub fn genes(&self) -> &Genes {
        &self.genes
    }

    /// Reads one gene through the uniform [`Gene`] view.
    ///
    /// # Errors
    /// Returns [`GaError::IndexOutOfBounds`] if `index >= len()`.
    pub fn gene(&self, index: usize) -> Result<Gene, GaError> {
        self.genes.gene(index).ok_or(GaError::IndexOutOfBounds {
            index,
            length: self.genes.len(),
        })
    }

    /// Writes one gene through the uniform [`Gene`] view.
    ///
    /// Integer/Float values are clamped into the chromosome's `[min, max]`
    /// domain; a domain excursion is never an error here.
    ///
    /// # Errors
    /// Returns [`GaError::IndexOutOfBounds`] for a bad index, or
    /// [`GaError::UnsupportedVariant`] when the gene value's kind does not
    /// match the chromosome's encoding.
    pub fn set_gene(&mut self, index: usize, gene: Gene) -> Result<(), GaError> {
        if index >= self.genes.len() {
            return Err(GaError::IndexOutOfBounds {
                index,
                length: self.genes.len(),
            });
        }
        self.genes.set_gene(index, gene)
    }

    /// Current fitness. Zero until the engine evaluates this chromosome.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Stores a fitness value. Called by the engine after evaluation.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Splits the chromosome into its gene payload and its rng, for
    /// operators that draw per-gene randomness while writing genes.
    pub(crate) fn parts_mut(&mut self) -> (&mut Genes, &mut StdRng) {
        (&mut self.genes, &mut self.rng)
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.genes {
            Genes::Binary(v) => {
                write!(f, "Binary: ")?;
                for &b in v {
                    write!(f, "{}", if b { '1' } else { '0' })?;
                }
            }
            Genes::Integer { values, .. } => {
                write!(f, "Integer: {values:?}")?;
            }
            Genes::Float { values, .. } => {
                write!(f, "Float: {values:?}")?;
            }
        }
        write!(f, " | fitness={:.4}", self.fitness)
    }
}

fn check_length(length: usize) -> Result<(), GaError> {
    if length == 0 {
        return Err(GaError::config("chromosome length must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_binary_starts_cleared() {
        let c = Chromosome::binary(10).unwrap();
        assert_eq!(c.len(), 10);
        assert_eq!(c.kind(), ChromosomeKind::Binary);
        for i in 0..10 {
            assert_eq!(c.gene(i).unwrap(), Gene::Bit(false));
        }
        assert_eq!(c.fitness(), 0.0);
    }

    #[test]
    fn test_integer_starts_at_min() {
        let c = Chromosome::integer(5, -3, 7).unwrap();
        for i in 0..5 {
            assert_eq!(c.gene(i).unwrap(), Gene::Int(-3));
        }
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(
            Chromosome::binary(0),
            Err(GaError::Configuration(_))
        ));
    }

    #[test]
    fn test_integer_bounds_rejected() {
        assert!(Chromosome::integer(4, 5, 5).is_ok()); // min == max is allowed
        assert!(matches!(
            Chromosome::integer(4, 6, 5),
            Err(GaError::Configuration(_))
        ));
    }

    #[test]
    fn test_float_bounds_rejected() {
        assert!(matches!(
            Chromosome::float(4, 1.0, 1.0),
            Err(GaError::Configuration(_))
        ));
        assert!(matches!(
            Chromosome::float(4, f64::NAN, 1.0),
            Err(GaError::Configuration(_))
        ));
    }

    #[test]
    fn test_initialize_respects_integer_bounds() {
        let mut c = Chromosome::integer(100, 0, 5).unwrap().with_seed(7);
        c.initialize();
        let Genes::Integer { values, .. } = c.genes() else {
            panic!("expected integer genes");
        };
        assert!(values.iter().all(|&g| (0..=5).contains(&g)));
        // With 100 draws over 6 values, both endpoints should appear.
        assert!(values.contains(&0));
        assert!(values.contains(&5));
    }

    #[test]
    fn test_initialize_respects_float_bounds() {
        let mut c = Chromosome::float(100, -1.5, 2.5).unwrap().with_seed(11);
        c.initialize();
        let Genes::Float { values, .. } = c.genes() else {
            panic!("expected float genes");
        };
        assert!(values.iter().all(|&g| (-1.5..=2.5).contains(&g)));
    }

    #[test]
    fn test_initialize_is_reproducible_per_seed() {
        let mut a = Chromosome::binary(32).unwrap().with_seed(42);
        let mut b = Chromosome::binary(32).unwrap().with_seed(42);
        a.initialize();
        b.initialize();
        assert_eq!(a.genes(), b.genes());

        let mut c = Chromosome::binary(32).unwrap().with_seed(43);
        c.initialize();
        assert_ne!(a.genes(), c.genes());
    }

    #[test]
    fn test_set_gene_clamps_into_domain() {
        let mut c = Chromosome::integer(3, 0, 5).unwrap();
        c.set_gene(0, Gene::Int(99)).unwrap();
        c.set_gene(1, Gene::Int(-99)).unwrap();
        assert_eq!(c.gene(0).unwrap(), Gene::Int(5));
        assert_eq!(c.gene(1).unwrap(), Gene::Int(0));

        let mut c = Chromosome::float(2, 0.0, 1.0).unwrap();
        c.set_gene(0, Gene::Real(3.5)).unwrap();
        assert_eq!(c.gene(0).unwrap(), Gene::Real(1.0));
    }

    #[test]
    fn test_index_out_of_bounds() {
        let mut c = Chromosome::binary(4).unwrap();
        assert_eq!(
            c.gene(4),
            Err(GaError::IndexOutOfBounds {
                index: 4,
                length: 4
            })
        );
        assert_eq!(
            c.set_gene(9, Gene::Bit(true)),
            Err(GaError::IndexOutOfBounds {
                index: 9,
                length: 4
            })
        );
    }

    #[test]
    fn test_set_gene_kind_mismatch() {
        let mut c = Chromosome::binary(4).unwrap();
        assert!(matches!(
            c.set_gene(0, Gene::Int(1)),
            Err(GaError::UnsupportedVariant { .. })
        ));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Chromosome::integer(4, 0, 9).unwrap().with_seed(3);
        original.initialize();
        original.set_fitness(2.5);

        let mut copy = original.clone();
        copy.set_gene(0, Gene::Int(9)).unwrap();
        copy.set_gene(1, Gene::Int(9)).unwrap();
        copy.set_fitness(-1.0);

        assert_eq!(original.fitness(), 2.5);
        assert_ne!(original.genes(), copy.genes());
    }

    #[test]
    fn test_clone_carries_fitness() {
        let mut c = Chromosome::binary(4).unwrap();
        c.set_fitness(7.0);
        assert_eq!(c.clone().fitness(), 7.0);
    }

    #[test]
    fn test_display() {
        let mut c = Chromosome::binary(4).unwrap();
        c.set_gene(1, Gene::Bit(true)).unwrap();
        c.set_fitness(1.0);
        assert_eq!(c.to_string(), "Binary: 0100 | fitness=1.0000");

        let c = Chromosome::integer(3, 0, 5).unwrap();
        assert_eq!(c.to_string(), "Integer: [0, 0, 0] | fitness=0.0000");
    }

    proptest! {
        #[test]
        fn prop_initialize_keeps_length_and_bounds(
            length in 1usize..64,
            min in -50i64..0,
            span in 0i64..100,
            seed in 0u64..1000,
        ) {
            let max = min + span;
            let mut c = Chromosome::integer(length, min, max).unwrap().with_seed(seed);
            c.initialize();
            prop_assert_eq!(c.len(), length);
            for i in 0..length {
                let Gene::Int(g) = c.gene(i).unwrap() else {
                    return Err(TestCaseError::fail("wrong gene kind"));
                };
                prop_assert!((min..=max).contains(&g));
            }
        }

        #[test]
        fn prop_float_initialize_in_bounds(
            length in 1usize..64,
            seed in 0u64..1000,
        ) {
            let mut c = Chromosome::float(length, -2.0, 3.0).unwrap().with_seed(seed);
            c.initialize();
            let Genes::Float { values, .. } = c.genes() else {
                return Err(TestCaseError::fail("wrong gene kind"));
            };
            prop_assert!(values.iter().all(|&g| (-2.0..=3.0).contains(&g)));
        }
    }
}
