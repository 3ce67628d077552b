//! Genotype containers for list-encoded individuals.
//!
//! The genotype of a list individual is a fixed-arity sequence of genes,
//! each gene an ordered [`List`] of values. Mutation operators reach the
//! genes through the [`MutableIndividual`] trait, so alternative genotype
//! representations can plug into the same operators.
//!
//! # Core Trait
//!
//! - [`MutableIndividual`]: index-addressable, mutable gene access
//!
//! # Key Types
//!
//! - [`List`]: singly linked, position-addressable gene container
//! - [`ListIndividual`]: candidate solution over a vector of lists
//! - [`ListError`]: positional access failures (out of range, empty)

mod list;
mod list_individual;
mod types;

pub use list::{IntoIter, Iter, List, ListError};
pub use list_individual::ListIndividual;
pub use types::MutableIndividual;
