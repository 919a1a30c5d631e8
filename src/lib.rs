//! Generic evolutionary-search engine.
//!
//! Evolves a population of candidate solutions ("chromosomes") toward higher
//! fitness through repeated selection, recombination, mutation, and
//! replacement:
//!
//! - **[`Chromosome`]**: one closed sum type over three gene encodings —
//!   bit vector, bounded integer vector, bounded real vector — each carrying
//!   a fitness cell and its own random stream.
//! - **[`Population`]**: ordered, fixed-target collection with best/worst/
//!   average queries.
//! - **Operator families**: [`Selection`], [`Crossover`], [`Mutation`], and
//!   [`Replacement`] are independent strategy enums sharing one uniform
//!   contract across all three encodings.
//! - **[`GaEngine`]**: wires a fitness function and the four strategies
//!   around the generational loop and owns the canonical best-so-far
//!   tracking, so the reported best fitness never decreases even under
//!   non-elitist replacement.
//!
//! Every stochastic call draws from an explicit, injectable random source;
//! a run is fully reproducible from [`GaConfig::seed`].
//!
//! # Quick Start
//!
//! ```
//! use evokit::{Chromosome, Crossover, GaConfig, GaEngine, MaxOnes,
//!              Mutation, Replacement, Selection};
//!
//! let config = GaConfig::default()
//!     .with_population_size(30)
//!     .with_generations(100)
//!     .with_crossover_rate(0.8)
//!     .with_mutation_rate(0.05)
//!     .with_seed(42);
//!
//! let result = GaEngine::new(config, Chromosome::binary(16)?, MaxOnes)
//!     .with_selection(Selection::Tournament(3))
//!     .with_crossover(Crossover::SinglePoint)
//!     .with_mutation(Mutation::BitFlip)
//!     .with_replacement(Replacement::Elitist(2))
//!     .run()?;
//!
//! println!("best: {} after {} generations", result.best, result.generations);
//! # Ok::<(), evokit::GaError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate each generation's fitness on rayon (evaluation is
//!   pure per chromosome, so this changes nothing observable).
//! - `serde`: serialization for configuration and progress records.

pub mod chromosome;
pub mod config;
pub mod crossover;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod mutation;
pub mod population;
pub mod replacement;
pub mod selection;

pub use chromosome::{Chromosome, ChromosomeKind, Gene, Genes};
pub use config::GaConfig;
pub use crossover::Crossover;
pub use engine::{GaEngine, GaResult, GenerationRecord};
pub use error::GaError;
pub use fitness::{
    FitnessFunction, InfeasibilityHandler, JobScheduling, Knapsack, MaxOnes, MinDistance,
    SineProduct, SumGenes,
};
pub use mutation::Mutation;
pub use population::Population;
pub use replacement::Replacement;
pub use selection::Selection;
