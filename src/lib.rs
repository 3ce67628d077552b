//! Genotype containers and mutation operators for list-encoded genetic
//! algorithms.
//!
//! Provides the building blocks a GA engine needs to represent and perturb
//! list-encoded candidate solutions:
//!
//! - **[`individual::List`]**: Singly linked, position-addressable gene
//!   container with eager bounds checking and value-level swap/replace.
//! - **[`individual::ListIndividual`]**: Candidate solution over a fixed
//!   arity of list genes, reached by operators through the
//!   [`individual::MutableIndividual`] trait.
//! - **[`mutation`]**: Probability-gated uniform mutation policy with two
//!   permutation-oriented strategies, intra-gene transposition and
//!   inter-gene element exchange.
//! - **[`random`]**: Seedable draw helpers bridging [`rand`] engines to
//!   closed numeric ranges and validated probabilities.
//!
//! # Architecture
//!
//! This crate is the representation layer of a GA stack: it defines no
//! selection, crossover, fitness, or generation loop. A surrounding engine
//! owns the population and the random engine, and calls the operators here
//! with `&mut` access to one individual at a time. Everything is
//! single-threaded and synchronous; determinism comes from seeding the
//! engine ([`random::create_rng`]).
//!
//! # Example
//!
//! ```
//! use evolist::individual::ListIndividual;
//! use evolist::mutation::{InnerExchangeMutation, UniformMutation};
//! use evolist::random;
//!
//! let mut individual = ListIndividual::from(vec![vec![1, 3, 4], vec![0, 2, 6]]);
//! let mut rng = random::create_rng(42);
//!
//! // Every gene is transposed; gene multisets and first loci are preserved.
//! InnerExchangeMutation.mutate(&mut individual, 1.0, &mut rng)?;
//! assert_eq!(individual.gene(0).unwrap().get(0)?, &1);
//! # Ok::<(), evolist::mutation::MutationError>(())
//! ```

pub mod individual;
pub mod mutation;
pub mod random;
