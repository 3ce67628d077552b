//! Intra-gene exchange mutation.

use rand::Rng;

use super::uniform::{MutationError, UniformMutation};
use crate::individual::{ListError, ListIndividual};
use crate::random::{self, NumericRange};

/// Transposes two distinct interior elements of a selected gene.
///
/// Position 0 is never selected: the first locus is treated as fixed, the
/// usual convention for permutation encodings whose starting point must not
/// move. Both positions are drawn uniformly from `[1, len - 1]`, the second
/// resampled until it differs from the first. The gene keeps its length and
/// its multiset of values; only the order changes.
///
/// Genes shorter than [`MIN_GENE_LENGTH`](Self::MIN_GENE_LENGTH) fail with
/// [`MutationError::GeneTooShort`] before anything is drawn, so the
/// resampling loop always terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct InnerExchangeMutation;

impl InnerExchangeMutation {
    /// Minimum workable gene length: besides the fixed position 0, two
    /// distinct interior positions must exist.
    pub const MIN_GENE_LENGTH: usize = 3;

    /// Creates the strategy.
    pub fn new() -> Self {
        InnerExchangeMutation
    }
}

impl<T> UniformMutation<ListIndividual<T>> for InnerExchangeMutation {
    type Params = ();

    fn mutate_gene<R: Rng>(
        &self,
        individual: &mut ListIndividual<T>,
        index: usize,
        _params: &(),
        rng: &mut R,
    ) -> Result<(), MutationError> {
        let gene_count = individual.len();
        let gene = individual.gene_mut(index).ok_or(ListError::OutOfRange {
            position: index,
            length: gene_count,
        })?;
        let length = gene.len();
        if length < Self::MIN_GENE_LENGTH {
            return Err(MutationError::GeneTooShort {
                index,
                length,
                required: Self::MIN_GENE_LENGTH,
            });
        }

        let interior = NumericRange::new(1.0, (length - 1) as f64);
        let first = random::generate_integer(interior, rng) as usize;
        let mut second = random::generate_integer(interior, rng) as usize;
        while second == first {
            second = random::generate_integer(interior, rng) as usize;
        }
        gene.swap(first, second)?;
        Ok(())
    }
}
