//! Fitness functions and infeasibility repair.
//!
//! [`FitnessFunction`] is the contract between the engine and a problem
//! definition: a pure mapping from a chromosome to a finite real score,
//! **higher is better**. A function must reject chromosome kinds it
//! implements no logic for with [`GaError::UnsupportedVariant`].
//!
//! [`InfeasibilityHandler`] optionally repairs offspring that violate
//! problem constraints; the engine invokes it once per offspring, after
//! mutation and before replacement.
//!
//! The module also ships a set of ready-made fitness functions for common
//! benchmark problems: bit counting, 0/1 knapsack, integer smoothness, a
//! sine product over reals, plain gene sums, and a unified job-scheduling
//! makespan objective covering all three encodings.

use crate::chromosome::{Chromosome, Genes};
use crate::error::GaError;

/// Scores a chromosome. Higher is better.
///
/// Implementations must be pure with respect to the chromosome's genes and
/// `Send + Sync`: the engine may evaluate a whole generation in parallel.
///
/// Any `Fn(&Chromosome) -> Result<f64, GaError> + Send + Sync` closure is a
/// fitness function.
pub trait FitnessFunction: Send + Sync {
    /// Evaluates the chromosome.
    ///
    /// # Errors
    /// [`GaError::UnsupportedVariant`] for a chromosome kind this function
    /// does not score.
    fn evaluate(&self, chromosome: &Chromosome) -> Result<f64, GaError>;
}

impl<F> FitnessFunction for F
where
    F: Fn(&Chromosome) -> Result<f64, GaError> + Send + Sync,
{
    fn evaluate(&self, chromosome: &Chromosome) -> Result<f64, GaError> {
        self(chromosome)
    }
}

/// Detects and repairs constraint-violating offspring.
///
/// Invoked by the engine once per offspring, after mutation, before
/// replacement.
pub trait InfeasibilityHandler: Send + Sync {
    /// Whether the chromosome violates a problem constraint.
    fn is_infeasible(&self, chromosome: &Chromosome) -> bool;

    /// Corrects the chromosome in place. Called only when
    /// [`is_infeasible`](InfeasibilityHandler::is_infeasible) returned true.
    fn repair(&self, chromosome: &mut Chromosome);
}

// ============================================================================
// Built-in fitness functions
// ============================================================================

/// Count of set bits. Binary chromosomes only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxOnes;

impl FitnessFunction for MaxOnes {
    fn evaluate(&self, chromosome: &Chromosome) -> Result<f64, GaError> {
        match chromosome.genes() {
            Genes::Binary(bits) => Ok(bits.iter().filter(|&&b| b).count() as f64),
            other => Err(GaError::UnsupportedVariant {
                expected: "Binary",
                actual: other.kind(),
            }),
        }
    }
}

/// 0/1 knapsack value with a linear overweight penalty. Binary only.
///
/// Selected items contribute their value; if the selected weight exceeds
/// the capacity, `penalty_factor · excess` is subtracted and the score is
/// floored at zero.
#[derive(Debug, Clone)]
pub struct Knapsack {
    values: Vec<f64>,
    weights: Vec<f64>,
    capacity: f64,
    penalty_factor: f64,
}

impl Knapsack {
    /// Default overweight penalty per unit of excess weight.
    pub const DEFAULT_PENALTY_FACTOR: f64 = 10.0;

    /// Creates a knapsack objective.
    ///
    /// # Errors
    /// Returns [`GaError::Configuration`] if `values` and `weights` differ
    /// in length.
    pub fn new(values: Vec<f64>, weights: Vec<f64>, capacity: f64) -> Result<Self, GaError> {
        if values.len() != weights.len() {
            return Err(GaError::config(format!(
                "knapsack values and weights must have equal length, got {} and {}",
                values.len(),
                weights.len()
            )));
        }
        Ok(Self {
            values,
            weights,
            capacity,
            penalty_factor: Self::DEFAULT_PENALTY_FACTOR,
        })
    }

    /// Overrides the overweight penalty factor.
    pub fn with_penalty_factor(mut self, penalty_factor: f64) -> Self {
        self.penalty_factor = penalty_factor;
        self
    }
}

impl FitnessFunction for Knapsack {
    fn evaluate(&self, chromosome: &Chromosome) -> Result<f64, GaError> {
        let Genes::Binary(bits) = chromosome.genes() else {
            return Err(GaError::UnsupportedVariant {
                expected: "Binary",
                actual: chromosome.kind(),
            });
        };

        let mut total_value = 0.0;
        let mut total_weight = 0.0;
        for (i, &selected) in bits.iter().enumerate().take(self.values.len()) {
            if selected {
                total_value += self.values[i];
                total_weight += self.weights[i];
            }
        }

        if total_weight > self.capacity {
            let penalty = self.penalty_factor * (total_weight - self.capacity);
            Ok((total_value - penalty).max(0.0))
        } else {
            Ok(total_value)
        }
    }
}

/// Rewards smooth integer sequences: `1 / (1 + Σ|gᵢ₊₁ − gᵢ|)`. Integer only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinDistance;

impl FitnessFunction for MinDistance {
    fn evaluate(&self, chromosome: &Chromosome) -> Result<f64, GaError> {
        let Genes::Integer { values, .. } = chromosome.genes() else {
            return Err(GaError::UnsupportedVariant {
                expected: "Integer",
                actual: chromosome.kind(),
            });
        };
        let total: f64 = values
            .windows(2)
            .map(|w| (w[1] - w[0]).abs() as f64)
            .sum();
        Ok(1.0 / (1.0 + total))
    }
}

/// `Σ sin(x)·x` over the genes. Float only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SineProduct;

impl FitnessFunction for SineProduct {
    fn evaluate(&self, chromosome: &Chromosome) -> Result<f64, GaError> {
        let Genes::Float { values, .. } = chromosome.genes() else {
            return Err(GaError::UnsupportedVariant {
                expected: "Float",
                actual: chromosome.kind(),
            });
        };
        Ok(values.iter().map(|&x| x.sin() * x).sum())
    }
}

/// Sum of genes, defined for every encoding: set bits count 1, integer and
/// float genes contribute their value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumGenes;

impl FitnessFunction for SumGenes {
    fn evaluate(&self, chromosome: &Chromosome) -> Result<f64, GaError> {
        Ok(match chromosome.genes() {
            Genes::Binary(bits) => bits.iter().filter(|&&b| b).count() as f64,
            Genes::Integer { values, .. } => values.iter().map(|&g| g as f64).sum(),
            Genes::Float { values, .. } => values.iter().sum(),
        })
    }
}

/// Unified job-scheduling objective over all three encodings.
///
/// - **Binary**: job selection — total processing time of selected jobs,
///   penalized past the capacity.
/// - **Integer**: job-to-machine assignment — `1 / (1 + makespan)` where
///   the makespan is the maximum machine load (assignments are taken modulo
///   the machine count).
/// - **Float**: continuous assignment — each gene in `[0, 1)` maps to a
///   machine index, scored like the integer case.
#[derive(Debug, Clone)]
pub struct JobScheduling {
    processing_times: Vec<f64>,
    machines: usize,
    capacity: f64,
    penalty_factor: f64,
}

impl JobScheduling {
    /// Default penalty per unit of capacity excess in the binary case.
    pub const DEFAULT_PENALTY_FACTOR: f64 = 10.0;

    /// Creates a scheduling objective.
    ///
    /// # Errors
    /// Returns [`GaError::Configuration`] if `machines` is zero or
    /// `processing_times` is empty.
    pub fn new(
        processing_times: Vec<f64>,
        machines: usize,
        capacity: f64,
    ) -> Result<Self, GaError> {
        if machines == 0 {
            return Err(GaError::config("job scheduling requires at least one machine"));
        }
        if processing_times.is_empty() {
            return Err(GaError::config("job scheduling requires at least one job"));
        }
        Ok(Self {
            processing_times,
            machines,
            capacity,
            penalty_factor: Self::DEFAULT_PENALTY_FACTOR,
        })
    }

    fn makespan(&self, loads: &[f64]) -> f64 {
        loads.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }
}

impl FitnessFunction for JobScheduling {
    fn evaluate(&self, chromosome: &Chromosome) -> Result<f64, GaError> {
        match chromosome.genes() {
            // Job selection under a capacity budget.
            Genes::Binary(bits) => {
                let total: f64 = bits
                    .iter()
                    .zip(self.processing_times.iter())
                    .filter(|(&selected, _)| selected)
                    .map(|(_, &t)| t)
                    .sum();
                if total > self.capacity {
                    let penalty = self.penalty_factor * (total - self.capacity);
                    Ok((self.capacity - penalty).max(0.0))
                } else {
                    Ok(total)
                }
            }
            // Discrete machine assignment: minimize the makespan.
            Genes::Integer { values, .. } => {
                let mut loads = vec![0.0; self.machines];
                for (&assignment, &time) in values.iter().zip(self.processing_times.iter()) {
                    let machine = assignment.rem_euclid(self.machines as i64) as usize;
                    loads[machine] += time;
                }
                Ok(1.0 / (1.0 + self.makespan(&loads)))
            }
            // Continuous assignment: gene value maps onto a machine index.
            Genes::Float { values, .. } => {
                let mut loads = vec![0.0; self.machines];
                for (&gene, &time) in values.iter().zip(self.processing_times.iter()) {
                    let machine =
                        ((gene * self.machines as f64).floor() as usize).min(self.machines - 1);
                    loads[machine] += time;
                }
                Ok(1.0 / (1.0 + self.makespan(&loads)))
            }
        }
    }
}
