//! Tolerant LCSS similarity computation.

use tracing::{debug, instrument};

use crate::error::{LcssError, SeriesSide};
use crate::similarity::LcssSimilarity;
use crate::table::LcssTable;
use crate::window::MatchWindow;

/// Immutable LCSS configuration. Thread-safe and copyable.
///
/// Two samples match when their indices fall inside the [`MatchWindow`] of
/// half-width `delta` and their values differ by at most `epsilon`. The score is
/// the longest tolerant common subsequence divided by the longer series length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lcss {
    delta: usize,
    epsilon: f64,
    transpose: i32,
    window: MatchWindow,
}

impl Lcss {
    /// Create an LCSS matcher with temporal tolerance `delta` and spatial tolerance `epsilon`.
    ///
    /// The match window defaults to [`MatchWindow::Centered`].
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`LcssError::NegativeDelta`] | `delta < 0` |
    /// | [`LcssError::InvalidEpsilon`] | `epsilon < 0` or NaN |
    pub fn new(delta: i64, epsilon: f64) -> Result<Self, LcssError> {
        if delta < 0 {
            return Err(LcssError::NegativeDelta { delta });
        }
        if epsilon.is_nan() || epsilon < 0.0 {
            return Err(LcssError::InvalidEpsilon { epsilon });
        }
        Ok(Self {
            delta: usize::try_from(delta).unwrap_or(usize::MAX),
            epsilon,
            transpose: 0,
            window: MatchWindow::default(),
        })
    }

    /// Set the vertical display offset.
    ///
    /// Carried for display tooling only; it never affects the score.
    #[must_use]
    pub fn with_transpose(mut self, transpose: i32) -> Self {
        self.transpose = transpose;
        self
    }

    /// Set the placement of the match window.
    #[must_use]
    pub fn with_window(mut self, window: MatchWindow) -> Self {
        self.window = window;
        self
    }

    /// Return the temporal tolerance.
    #[must_use]
    pub fn delta(&self) -> usize {
        self.delta
    }

    /// Return the spatial tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Return the vertical display offset.
    #[must_use]
    pub fn transpose(&self) -> i32 {
        self.transpose
    }

    /// Return the match window placement.
    #[must_use]
    pub fn window(&self) -> MatchWindow {
        self.window
    }

    /// Compute the LCSS similarity between two time series.
    ///
    /// Uses two rolling rows instead of the full table. Only the cells written
    /// for a row are cleared before reuse, so a call runs in O(m * delta) time
    /// and O(n) space, with `m <= n` the shorter and longer lengths.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`LcssError::EmptyInput`] | `a` or `b` is empty |
    /// | [`LcssError::NonFiniteValue`] | Any value is NaN or infinite |
    #[instrument(skip(a, b), fields(a_len = a.len(), b_len = b.len()))]
    pub fn similarity(&self, a: &[f64], b: &[f64]) -> Result<LcssSimilarity, LcssError> {
        let (short, long) = self.oriented(a, b)?;
        let lcs = self.lcs_rolling(short, long);
        Ok(LcssSimilarity::from_count(lcs, long.len()))
    }

    /// Return the LCSS distance, `1 - similarity`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`similarity`][Lcss::similarity].
    pub fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, LcssError> {
        self.similarity(a, b).map(LcssSimilarity::distance)
    }

    /// Build the full dense `(m + 1) x (n + 1)` table.
    ///
    /// Rows follow the shorter series. Runs in O(m * delta) time and O(m * n)
    /// space. Use [`similarity`][Lcss::similarity] when only the score is needed.
    ///
    /// # Errors
    ///
    /// Same conditions as [`similarity`][Lcss::similarity].
    #[instrument(skip(a, b), fields(a_len = a.len(), b_len = b.len()))]
    pub fn table(&self, a: &[f64], b: &[f64]) -> Result<LcssTable, LcssError> {
        let (short, long) = self.oriented(a, b)?;
        let n = long.len();
        let mut table = LcssTable::zeroed(short.len(), n);

        for (i, &x) in short.iter().enumerate() {
            for j in self.window.column_range(i, self.delta, n) {
                let value = if self.matches(x, long[j]) {
                    table[(i, j)] + 1
                } else {
                    table[(i, j + 1)].max(table[(i + 1, j)])
                };
                table.set(i + 1, j + 1, value);
            }
        }

        Ok(table)
    }

    /// Validate both series, then order them so the shorter (or equal) one drives the rows.
    fn oriented<'a>(&self, a: &'a [f64], b: &'a [f64]) -> Result<(&'a [f64], &'a [f64]), LcssError> {
        validate(a, SeriesSide::First)?;
        validate(b, SeriesSide::Second)?;

        let swapped = b.len() < a.len();
        let (short, long) = if swapped { (b, a) } else { (a, b) };
        debug!(
            m = short.len(),
            n = long.len(),
            swapped,
            band = self.window.band_width(self.delta, long.len()),
            "oriented series pair"
        );
        Ok((short, long))
    }

    fn matches(&self, x: f64, y: f64) -> bool {
        (x - y).abs() <= self.epsilon
    }

    /// Rolling two-row LCSS returning the best count in the final row.
    ///
    /// `prev` holds row `i` and `curr` receives row `i + 1`, both with the
    /// column-0 boundary at index 0. `curr` still carries row `i - 1`, so its
    /// written span is zeroed first; afterwards every unvisited cell reads 0,
    /// exactly as in the dense table.
    fn lcs_rolling(&self, short: &[f64], long: &[f64]) -> usize {
        let n = long.len();
        let mut prev = vec![0usize; n + 1];
        let mut curr = vec![0usize; n + 1];
        let mut prev_written = 0..0;
        let mut curr_written = 0..0;

        for (i, &x) in short.iter().enumerate() {
            curr[curr_written].fill(0);

            let cols = self.window.column_range(i, self.delta, n);
            for j in cols.clone() {
                curr[j + 1] = if self.matches(x, long[j]) {
                    prev[j] + 1
                } else {
                    prev[j + 1].max(curr[j])
                };
            }

            curr_written = cols.start + 1..cols.end + 1;
            std::mem::swap(&mut prev, &mut curr);
            std::mem::swap(&mut prev_written, &mut curr_written);
        }

        // After the final swap, `prev` holds row m.
        prev[prev_written].iter().copied().max().unwrap_or(0)
    }
}

/// Compute the LCSS similarity of `a` and `b` in one call.
///
/// Matches within [`MatchWindow::Centered`] (`|i - j| <= delta`); build an
/// [`Lcss`] with [`MatchWindow::Lagged`] for the `[i - delta - 1, i + delta - 1]` window.
/// `transpose` is a vertical display offset accepted for parity with plotting
/// tools; it does not change the result.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`LcssError::NegativeDelta`] | `delta < 0` |
/// | [`LcssError::InvalidEpsilon`] | `epsilon < 0` or NaN |
/// | [`LcssError::EmptyInput`] | `a` or `b` is empty |
/// | [`LcssError::NonFiniteValue`] | Any value is NaN or infinite |
pub fn lcss_match(
    a: &[f64],
    b: &[f64],
    delta: i64,
    epsilon: f64,
    transpose: i32,
) -> Result<f64, LcssError> {
    Lcss::new(delta, epsilon)?
        .with_transpose(transpose)
        .similarity(a, b)
        .map(LcssSimilarity::value)
}

fn validate(values: &[f64], side: SeriesSide) -> Result<(), LcssError> {
    if values.is_empty() {
        return Err(LcssError::EmptyInput { side });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(LcssError::NonFiniteValue { side, index });
    }
    Ok(())
}
