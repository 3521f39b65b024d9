//! Error types for LCSS similarity computation.

use std::fmt;

/// Which of the two input series an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesSide {
    /// The first argument (`a`).
    First,
    /// The second argument (`b`).
    Second,
}

impl fmt::Display for SeriesSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Invalid-argument conditions rejected before any table is built.
#[derive(Debug, thiserror::Error)]
pub enum LcssError {
    /// Returned when either input series has no samples.
    #[error("{side} time series must be non-empty")]
    EmptyInput {
        /// The offending argument.
        side: SeriesSide,
    },

    /// Returned when a series contains NaN, infinity, or negative infinity.
    #[error("{side} time series contains non-finite value at index {index}")]
    NonFiniteValue {
        /// The offending argument.
        side: SeriesSide,
        /// Position of the first non-finite value found.
        index: usize,
    },

    /// Returned when the temporal tolerance is negative.
    #[error("delta must be non-negative, got {delta}")]
    NegativeDelta {
        /// The rejected value.
        delta: i64,
    },

    /// Returned when the spatial tolerance is negative or NaN.
    #[error("epsilon must be a non-negative number, got {epsilon}")]
    InvalidEpsilon {
        /// The rejected value.
        epsilon: f64,
    },
}
