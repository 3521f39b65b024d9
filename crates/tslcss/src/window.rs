//! Match window: which columns of the LCSS table each row visits.

use std::ops::Range;

/// Placement of the `delta` band around the diagonal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchWindow {
    /// Row `i` visits columns `j` with `|i - j| <= delta`.
    #[default]
    Centered,

    /// Row `i` visits columns `j` in `[i - delta - 1, i + delta - 1]`.
    ///
    /// Same width as [`Centered`][Self::Centered], shifted one column left.
    /// With `delta = 0` the first row visits nothing, and the measure is not
    /// symmetric for equal-length inputs.
    Lagged,
}

impl MatchWindow {
    /// Return the columns to visit for `row`, clamped to `0..n_cols`.
    ///
    /// The end is exclusive and never exceeds `n_cols`, so a visited column
    /// `j` always has a writable successor `j + 1 <= n_cols` in the table.
    #[must_use]
    pub fn column_range(&self, row: usize, delta: usize, n_cols: usize) -> Range<usize> {
        let (start, end) = match self {
            Self::Centered => (
                row.saturating_sub(delta),
                row.saturating_add(delta).saturating_add(1),
            ),
            Self::Lagged => (
                row.saturating_sub(delta.saturating_add(1)),
                row.saturating_add(delta),
            ),
        };
        let end = end.min(n_cols);
        start.min(end)..end
    }

    /// Return the maximum number of columns visited by any row.
    #[must_use]
    pub fn band_width(&self, delta: usize, n_cols: usize) -> usize {
        delta
            .saturating_mul(2)
            .saturating_add(1)
            .min(n_cols)
    }
}
