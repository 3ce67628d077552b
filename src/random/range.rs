//! Closed numeric intervals for bounding random draws.

/// A closed interval `[lowest, highest]` over `f64`.
///
/// Bounds the draw helpers in [`crate::random`]. Both endpoints are
/// included in the draw. [`NumericRange::DEFAULT`] is the full-range
/// sentinel: its infinite endpoints are normalized to `±2^53` by
/// [`generate_integer`](crate::random::generate_integer) before drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericRange {
    /// Inclusive lower bound.
    pub lowest: f64,
    /// Inclusive upper bound.
    pub highest: f64,
}

impl NumericRange {
    /// The full numeric range: `[-∞, +∞]`.
    pub const DEFAULT: NumericRange = NumericRange {
        lowest: f64::NEG_INFINITY,
        highest: f64::INFINITY,
    };

    /// Creates the closed interval `[lowest, highest]`.
    ///
    /// # Panics
    /// Panics if `lowest > highest` or either bound is NaN.
    pub fn new(lowest: f64, highest: f64) -> Self {
        assert!(
            lowest <= highest,
            "invalid range: lowest ({lowest}) must not exceed highest ({highest})"
        );
        NumericRange { lowest, highest }
    }

    /// Returns `true` if `value` lies within the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        self.lowest <= value && value <= self.highest
    }
}

impl Default for NumericRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}
