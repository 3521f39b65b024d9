//! LCSS similarity newtype wrapper.

use std::cmp::Ordering;
use std::fmt;

/// Normalized LCSS similarity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LcssSimilarity(f64);

impl LcssSimilarity {
    /// Similarity of a series with itself.
    pub const IDENTICAL: Self = Self(1.0);

    /// Similarity of two series with no tolerant match.
    pub const DISJOINT: Self = Self(0.0);

    pub(crate) fn new(value: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&value), "similarity {value} out of [0, 1]");
        Self(value)
    }

    /// Build the score from a match count and the longer series length.
    pub(crate) fn from_count(lcs: usize, longer_len: usize) -> Self {
        Self::new(lcs as f64 / longer_len as f64)
    }

    /// Return the raw similarity value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Return the LCSS distance, `1 - similarity`.
    #[must_use]
    pub fn distance(self) -> f64 {
        1.0 - self.0
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for LcssSimilarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl From<LcssSimilarity> for f64 {
    fn from(s: LcssSimilarity) -> Self {
        s.0
    }
}
