//! List-encoded individuals.

use std::fmt;
use std::slice;

use super::list::List;
use super::types::MutableIndividual;

/// A candidate solution whose genotype is a fixed-arity sequence of
/// [`List`] genes.
///
/// The gene count is set at construction and never changes; mutation
/// operators rearrange values within and between genes. Gene indices run
/// from `0` to `len() - 1`.
///
/// # Examples
///
/// ```
/// use evolist::individual::ListIndividual;
///
/// let individual = ListIndividual::from(vec![vec![1, 3, 4], vec![0, 2, 6]]);
/// assert_eq!(individual.len(), 2);
/// assert_eq!(individual.to_string(), "{ 1 3 4 } { 0 2 6 }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListIndividual<T> {
    genotype: Vec<List<T>>,
}

impl<T> ListIndividual<T> {
    /// Creates an individual over the given genes.
    pub fn new(genotype: Vec<List<T>>) -> Self {
        ListIndividual { genotype }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genotype.len()
    }

    /// `true` when the genotype carries no genes.
    pub fn is_empty(&self) -> bool {
        self.genotype.is_empty()
    }

    /// Shared access to the gene at `index`.
    pub fn gene(&self, index: usize) -> Option<&List<T>> {
        self.genotype.get(index)
    }

    /// Exclusive access to the gene at `index`.
    pub fn gene_mut(&mut self, index: usize) -> Option<&mut List<T>> {
        self.genotype.get_mut(index)
    }

    /// Iterator over the genes in index order.
    pub fn genes(&self) -> slice::Iter<'_, List<T>> {
        self.genotype.iter()
    }
}

impl<T> MutableIndividual for ListIndividual<T> {
    type Gene = List<T>;

    fn len(&self) -> usize {
        self.genotype.len()
    }

    fn gene(&self, index: usize) -> Option<&List<T>> {
        self.genotype.get(index)
    }

    fn gene_mut(&mut self, index: usize) -> Option<&mut List<T>> {
        self.genotype.get_mut(index)
    }
}

impl<T> From<Vec<List<T>>> for ListIndividual<T> {
    fn from(genotype: Vec<List<T>>) -> Self {
        ListIndividual::new(genotype)
    }
}

/// Builds each inner vector into a gene, preserving order.
impl<T> From<Vec<Vec<T>>> for ListIndividual<T> {
    fn from(genes: Vec<Vec<T>>) -> Self {
        genes.into_iter().map(List::from).collect()
    }
}

impl<T> FromIterator<List<T>> for ListIndividual<T> {
    fn from_iter<I: IntoIterator<Item = List<T>>>(iter: I) -> Self {
        ListIndividual::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ListIndividual<T> {
    type Item = &'a List<T>;
    type IntoIter = slice::Iter<'a, List<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.genotype.iter()
    }
}

/// Renders the genes in index order separated by single spaces, e.g.
/// `{ 1 3 4 } { 0 2 6 } { 2 6 7 }`.
impl<T: fmt::Display> fmt::Display for ListIndividual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, gene) in self.genotype.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{gene}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ListIndividual<i32> {
        ListIndividual::from(vec![vec![1, 3, 4], vec![0, 2, 6], vec![2, 6, 7]])
    }

    // ---- Construction and access ----

    #[test]
    fn test_gene_count_is_fixed_by_construction() {
        let individual = sample();
        assert_eq!(individual.len(), 3);
        assert!(!individual.is_empty());
    }

    #[test]
    fn test_gene_access_in_bounds() {
        let individual = sample();
        assert_eq!(individual.gene(0).unwrap().to_vec(), vec![1, 3, 4]);
        assert_eq!(individual.gene(2).unwrap().to_vec(), vec![2, 6, 7]);
    }

    #[test]
    fn test_gene_access_past_end_is_none() {
        let individual = sample();
        assert!(individual.gene(3).is_none());
    }

    #[test]
    fn test_gene_mut_writes_through() {
        let mut individual = sample();
        individual.gene_mut(1).unwrap().replace(0, 9).unwrap();
        assert_eq!(individual.gene(1).unwrap().to_vec(), vec![9, 2, 6]);
    }

    #[test]
    fn test_from_nested_vecs_preserves_gene_order() {
        let individual = ListIndividual::from(vec![vec![2, 3, 4, 5], vec![4, 5, 6, 9]]);
        assert_eq!(individual.len(), 2);
        assert_eq!(individual.gene(0).unwrap().to_vec(), vec![2, 3, 4, 5]);
        assert_eq!(individual.gene(1).unwrap().to_vec(), vec![4, 5, 6, 9]);
    }

    #[test]
    fn test_empty_individual() {
        let individual: ListIndividual<i32> = ListIndividual::default();
        assert_eq!(individual.len(), 0);
        assert!(individual.is_empty());
        assert!(individual.gene(0).is_none());
    }

    // ---- Trait seam ----

    #[test]
    fn test_usable_through_mutable_individual() {
        fn first_gene_length<I>(individual: &I) -> Option<usize>
        where
            I: MutableIndividual<Gene = List<i32>>,
        {
            individual.gene(0).map(List::len)
        }

        let individual = sample();
        assert_eq!(first_gene_length(&individual), Some(3));
    }

    // ---- Iteration, formatting, equality ----

    #[test]
    fn test_genes_iterates_in_order() {
        let individual = sample();
        let lengths: Vec<usize> = individual.genes().map(List::len).collect();
        assert_eq!(lengths, vec![3, 3, 3]);
        let fronts: Vec<i32> = (&individual)
            .into_iter()
            .map(|gene| *gene.front().unwrap())
            .collect();
        assert_eq!(fronts, vec![1, 0, 2]);
    }

    #[test]
    fn test_display_joins_genes_with_spaces() {
        let individual = sample();
        assert_eq!(individual.to_string(), "{ 1 3 4 } { 0 2 6 } { 2 6 7 }");
    }

    #[test]
    fn test_display_of_empty_individual_is_blank() {
        let individual: ListIndividual<i32> = ListIndividual::default();
        assert_eq!(individual.to_string(), "");
    }

    #[test]
    fn test_equality_is_gene_wise() {
        assert_eq!(sample(), sample());
        let mut other = sample();
        other.gene_mut(0).unwrap().replace(2, 40).unwrap();
        assert_ne!(sample(), other);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        copy.gene_mut(0).unwrap().replace(0, 99).unwrap();
        assert_eq!(original.gene(0).unwrap().to_vec(), vec![1, 3, 4]);
        assert_eq!(copy.gene(0).unwrap().to_vec(), vec![99, 3, 4]);
    }
}
