//! Mutation operators for list-encoded individuals.
//!
//! All operators share one control loop, the uniform policy: every gene of
//! the individual gets an independent chance of `probability` to be handed
//! to the strategy's per-gene hook. Implementing [`UniformMutation`] means
//! implementing only that hook.
//!
//! # Core Trait
//!
//! - [`UniformMutation`]: probability-gated per-gene mutation policy
//!
//! # Strategies
//!
//! - [`InnerExchangeMutation`]: transposes two interior elements within a
//!   gene, preserving the gene's multiset
//! - [`GeneExchangeMutation`]: trades one interior element with a distinct
//!   partner gene, preserving the union multiset
//!
//! Both strategies treat position 0 of every gene as a fixed locus.
//!
//! # References
//!
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, ch. 4
//!   (swap/exchange mutation for permutation representations)

mod gene_exchange;
mod inner_exchange;
mod uniform;

pub use gene_exchange::GeneExchangeMutation;
pub use inner_exchange::InnerExchangeMutation;
pub use uniform::{MutationError, UniformMutation};
