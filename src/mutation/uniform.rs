//! Uniform mutation policy.
//!
//! [`UniformMutation`] owns the control loop shared by every mutation
//! strategy: validate the probability, then walk the genes and draw one
//! independent Bernoulli decision per gene. Strategies implement only the
//! per-gene transformation.

use rand::Rng;
use thiserror::Error;

use crate::individual::{ListError, MutableIndividual};
use crate::random::{self, ProbabilityError};

/// Failure raised by mutation operators.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MutationError {
    /// The mutation probability lies outside `[0.0, 1.0]`.
    #[error(transparent)]
    Probability(#[from] ProbabilityError),
    /// A selected gene is shorter than the strategy can work with.
    #[error("gene {index} has length {length}, but at least {required} elements are required")]
    GeneTooShort {
        /// Index of the offending gene.
        index: usize,
        /// Its length at the time of the call.
        length: usize,
        /// The strategy's minimum workable length.
        required: usize,
    },
    /// The individual has too few genes for an inter-gene exchange.
    #[error("the individual has {count} genes, but at least 2 are required")]
    TooFewGenes {
        /// Gene count of the individual.
        count: usize,
    },
    /// A positional operation on a gene failed.
    #[error(transparent)]
    List(#[from] ListError),
}

/// Probability-gated, per-gene mutation.
///
/// `mutate_with` walks every gene of the individual and draws one
/// independent decision with success probability `probability`; on success
/// it invokes [`mutate_gene`](UniformMutation::mutate_gene) for that gene.
/// Decisions are per gene, not a single coin flip for the whole individual.
///
/// The probability is validated before any gene is touched: an invalid
/// value fails with [`MutationError::Probability`] and leaves the
/// individual unchanged. `0.0` never invokes the hook; `1.0` invokes it
/// once per gene, in index order. The first hook error aborts the walk;
/// genes already transformed stay transformed.
pub trait UniformMutation<I: MutableIndividual> {
    /// Strategy-specific parameters forwarded to the per-gene hook.
    type Params;

    /// Applies the strategy's transformation to the gene at `index`.
    fn mutate_gene<R: Rng>(
        &self,
        individual: &mut I,
        index: usize,
        params: &Self::Params,
        rng: &mut R,
    ) -> Result<(), MutationError>;

    /// Mutates with default parameters.
    fn mutate<R: Rng>(
        &self,
        individual: &mut I,
        probability: f64,
        rng: &mut R,
    ) -> Result<(), MutationError>
    where
        Self::Params: Default,
    {
        let params: Self::Params = Default::default();
        self.mutate_with(individual, probability, &params, rng)
    }

    /// Mutates, drawing one gated decision per gene.
    fn mutate_with<R: Rng>(
        &self,
        individual: &mut I,
        probability: f64,
        params: &Self::Params,
        rng: &mut R,
    ) -> Result<(), MutationError> {
        random::validate_probability(probability)?;
        for index in 0..individual.len() {
            if random::generate_boolean(probability, rng)? {
                self.mutate_gene(individual, index, params, rng)?;
            }
        }
        Ok(())
    }
}
