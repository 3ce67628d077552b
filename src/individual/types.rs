//! Genotype access contract shared by mutation operators.

/// Mutable, index-addressable access to an individual's genes.
///
/// Mutation operators are written against this trait rather than a concrete
/// genotype, so any representation exposing positional gene access can be
/// mutated. The gene count is fixed for a given instance: operators
/// rearrange gene contents, never add or remove genes.
///
/// # Implementing
///
/// ```ignore
/// struct Candidate {
///     genes: Vec<List<usize>>,
/// }
///
/// impl MutableIndividual for Candidate {
///     type Gene = List<usize>;
///     fn len(&self) -> usize { self.genes.len() }
///     fn gene(&self, index: usize) -> Option<&Self::Gene> { self.genes.get(index) }
///     fn gene_mut(&mut self, index: usize) -> Option<&mut Self::Gene> { self.genes.get_mut(index) }
/// }
/// ```
pub trait MutableIndividual {
    /// The per-gene representation.
    type Gene;

    /// Number of genes in the genotype.
    fn len(&self) -> usize;

    /// `true` when the genotype carries no genes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shared access to the gene at `index`, or `None` past the end.
    fn gene(&self, index: usize) -> Option<&Self::Gene>;

    /// Exclusive access to the gene at `index`, or `None` past the end.
    fn gene_mut(&mut self, index: usize) -> Option<&mut Self::Gene>;
}
