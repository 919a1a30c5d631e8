//! Error types for the evolutionary engine.
//!
//! The taxonomy follows three severity classes:
//!
//! - **Configuration**: invalid parameters or missing strategies, surfaced at
//!   construction or at `run()` entry, never retried.
//! - **Programmer errors**: out-of-range gene indices, queries against an
//!   empty population, mismatched parent kinds — surfaced immediately.
//! - **Unsupported variants**: a fitness function (or operator) handed a
//!   chromosome kind it implements no logic for.
//!
//! Out-of-bounds gene *values* produced by crossover or mutation are never
//! errors: the owning operator clamps them back into the declared domain
//! before they become observable.

use crate::chromosome::ChromosomeKind;
use thiserror::Error;

/// Error type for all fallible operations in the crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    /// Invalid configuration: bad rate, size, bounds, or missing strategy.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Gene index out of range.
    #[error("gene index {index} out of range for chromosome of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// A best/worst query was made against an empty population.
    #[error("population is empty")]
    EmptyPopulation,

    /// A fitness function or operator received a chromosome kind it does
    /// not support.
    #[error("unsupported chromosome variant: expected {expected}, got {actual}")]
    UnsupportedVariant {
        expected: &'static str,
        actual: ChromosomeKind,
    },

    /// Two chromosomes of different kinds were paired for recombination.
    #[error("cannot recombine {left} chromosome with {right} chromosome")]
    VariantMismatch {
        left: ChromosomeKind,
        right: ChromosomeKind,
    },
}

impl GaError {
    /// Shorthand for a [`GaError::Configuration`] with a formatted message.
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        GaError::Configuration(msg.into())
    }
}
