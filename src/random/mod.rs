//! Seedable random draw helpers over closed numeric ranges.
//!
//! Every helper takes `&mut R where R: Rng`, so the caller owns the engine
//! and decides its seeding. [`create_rng`] builds the deterministic engine
//! used throughout this crate's tests; production callers may pass any
//! [`rand::Rng`].
//!
//! Draws are bounded by [`NumericRange`], a closed interval: both endpoints
//! can be returned. Probability parameters are validated eagerly and
//! rejected with [`ProbabilityError`] before any engine state is consumed.

mod range;

pub use range::NumericRange;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use thiserror::Error;

/// Probability outside the closed interval `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("probability must be between 0.0 and 1.0, got {0}")]
pub struct ProbabilityError(pub f64);

/// Magnitude substituted for a non-finite integer bound: `2^53`, the widest
/// span in which every integer is exactly representable as `f64`.
const MAX_INTEGER_BOUND: i64 = 1 << 53;

/// Creates a deterministic, seedable engine.
///
/// Identical seeds reproduce identical draw sequences, which makes mutation
/// outcomes replayable in tests and experiments.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Returns `true` if `probability` lies within `[0.0, 1.0]`.
///
/// NaN is not a valid probability.
pub fn probability_is_valid(probability: f64) -> bool {
    (0.0..=1.0).contains(&probability)
}

/// Checks `probability`, rejecting values outside `[0.0, 1.0]`.
pub fn validate_probability(probability: f64) -> Result<(), ProbabilityError> {
    if probability_is_valid(probability) {
        Ok(())
    } else {
        Err(ProbabilityError(probability))
    }
}

/// One Bernoulli trial with the given success probability.
///
/// `chance` is validated first: `0.0` always yields `false`, `1.0` always
/// yields `true`, anything outside `[0.0, 1.0]` fails without consuming
/// engine state.
pub fn generate_boolean<R: Rng>(chance: f64, rng: &mut R) -> Result<bool, ProbabilityError> {
    validate_probability(chance)?;
    Ok(rng.random_bool(chance))
}

/// Uniform integer over the closed range, both bounds included.
///
/// Finite bounds are rounded to the nearest integer; non-finite bounds
/// (the [`NumericRange::DEFAULT`] sentinel) are normalized to `±2^53`.
///
/// # Panics
/// Panics if the normalized range is empty (`lowest > highest` is already
/// rejected by [`NumericRange::new`]).
pub fn generate_integer<R: Rng>(range: NumericRange, rng: &mut R) -> i64 {
    let lowest = normalize_integer_bound(range.lowest, -MAX_INTEGER_BOUND);
    let highest = normalize_integer_bound(range.highest, MAX_INTEGER_BOUND);
    rng.random_range(lowest..=highest)
}

fn normalize_integer_bound(bound: f64, fallback: i64) -> i64 {
    if bound.is_finite() {
        bound.round() as i64
    } else {
        fallback
    }
}

/// Uniform floating-point value over the closed range.
///
/// # Panics
/// Panics if either bound is non-finite; unlike integer draws there is no
/// meaningful normalization for a float interval.
pub fn generate_floating<R: Rng>(range: NumericRange, rng: &mut R) -> f64 {
    assert!(
        range.lowest.is_finite() && range.highest.is_finite(),
        "floating draw requires finite bounds, got [{}, {}]",
        range.lowest,
        range.highest
    );
    rng.random_range(range.lowest..=range.highest)
}

/// Uniform probability in `[0.0, 1.0]`.
pub fn generate_probability<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(0.0..=1.0)
}

/// One draw from the normal distribution `N(mean, std_dev²)`.
///
/// # Panics
/// Panics if `std_dev` is negative or non-finite.
pub fn generate_normal<R: Rng>(mean: f64, std_dev: f64, rng: &mut R) -> f64 {
    let normal =
        Normal::new(mean, std_dev).expect("standard deviation must be finite and non-negative");
    normal.sample(rng)
}
