//! Inter-gene exchange mutation.

use rand::Rng;

use super::uniform::{MutationError, UniformMutation};
use crate::individual::{ListError, ListIndividual};
use crate::random::{self, NumericRange};

/// Exchanges one interior element between a selected gene and a distinct
/// partner gene.
///
/// The partner is drawn uniformly over the other genes, resampled until it
/// differs from the selected gene. One interior position is drawn on each
/// side (`[1, len - 1]`; position 0 stays fixed, as in
/// [`InnerExchangeMutation`](super::InnerExchangeMutation)), and the two
/// values trade places. Both gene lengths and the union multiset of the two
/// genes are preserved.
///
/// Preconditions are checked before either gene is written: the individual
/// needs at least two genes, and both selected genes need length
/// [`MIN_GENE_LENGTH`](Self::MIN_GENE_LENGTH) or more. A failed check
/// leaves every gene untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneExchangeMutation;

impl GeneExchangeMutation {
    /// Minimum workable gene length: at least one interior position must
    /// exist beside the fixed position 0.
    pub const MIN_GENE_LENGTH: usize = 2;

    /// Creates the strategy.
    pub fn new() -> Self {
        GeneExchangeMutation
    }
}

impl<T: Clone> UniformMutation<ListIndividual<T>> for GeneExchangeMutation {
    type Params = ();

    fn mutate_gene<R: Rng>(
        &self,
        individual: &mut ListIndividual<T>,
        index: usize,
        _params: &(),
        rng: &mut R,
    ) -> Result<(), MutationError> {
        let gene_count = individual.len();
        // Pool guard first: partner resampling needs a second gene.
        if gene_count < 2 {
            return Err(MutationError::TooFewGenes { count: gene_count });
        }

        let gene = individual.gene(index).ok_or(ListError::OutOfRange {
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
        let position = random::generate_integer(interior, rng) as usize;
        let value = gene.get(position)?.clone();

        let gene_indices = NumericRange::new(0.0, (gene_count - 1) as f64);
        let mut partner_index = random::generate_integer(gene_indices, rng) as usize;
        while partner_index == index {
            partner_index = random::generate_integer(gene_indices, rng) as usize;
        }

        let partner = individual
            .gene(partner_index)
            .expect("partner index drawn within gene count");
        let partner_length = partner.len();
        if partner_length < Self::MIN_GENE_LENGTH {
            return Err(MutationError::GeneTooShort {
                index: partner_index,
                length: partner_length,
                required: Self::MIN_GENE_LENGTH,
            });
        }
        let partner_interior = NumericRange::new(1.0, (partner_length - 1) as f64);
        let partner_position = random::generate_integer(partner_interior, rng) as usize;
        let partner_value = partner.get(partner_position)?.clone();

        // Both sides validated; write the exchange.
        individual
            .gene_mut(index)
            .expect("gene index validated above")
            .replace(position, partner_value)?;
        individual
            .gene_mut(partner_index)
            .expect("partner index drawn within gene count")
            .replace(partner_position, value)?;
        Ok(())
    }
}
