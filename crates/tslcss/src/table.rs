//! Dense LCSS dynamic-programming table.

use std::ops::Index;

use crate::similarity::LcssSimilarity;

/// Dense `(m + 1) x (n + 1)` table of tolerant match counts.
///
/// Rows follow the shorter series, columns the longer one. Row 0 and column 0
/// are the empty-prefix boundary. Cells outside the visited band keep their
/// initial zero; this is not a full LCS table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcssTable {
    n_rows: usize,
    n_cols: usize,
    data: Vec<usize>,
}

impl LcssTable {
    /// Allocate a zeroed table for series of lengths `m <= n`.
    pub(crate) fn zeroed(m: usize, n: usize) -> Self {
        debug_assert!(m <= n, "rows must follow the shorter series");
        let n_rows = m + 1;
        let n_cols = n + 1;
        Self {
            n_rows,
            n_cols,
            data: vec![0; n_rows * n_cols],
        }
    }

    /// Return the number of rows (`m + 1`).
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Return the number of columns (`n + 1`).
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Return cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_rows` or `j >= n_cols`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.data[self.offset(i, j)]
    }

    /// Return row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_rows`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[usize] {
        assert!(i < self.n_rows, "row index {i} out of bounds for {} rows", self.n_rows);
        let start = i * self.n_cols;
        &self.data[start..start + self.n_cols]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: usize) {
        let idx = self.offset(i, j);
        self.data[idx] = value;
    }

    /// Flat position of `(i, j)`; both coordinates are checked so a wide column
    /// cannot spill into the next row.
    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(i < self.n_rows, "row index {i} out of bounds for {} rows", self.n_rows);
        assert!(j < self.n_cols, "column index {j} out of bounds for {} columns", self.n_cols);
        i * self.n_cols + j
    }

    /// Best match count after consuming the whole shorter series, over every column.
    #[must_use]
    pub fn lcs_length(&self) -> usize {
        self.row(self.n_rows - 1).iter().copied().max().unwrap_or(0)
    }

    /// Normalized similarity: [`lcs_length`][Self::lcs_length] over the longer length.
    #[must_use]
    pub fn similarity(&self) -> LcssSimilarity {
        LcssSimilarity::from_count(self.lcs_length(), self.n_cols - 1)
    }
}

impl Index<(usize, usize)> for LcssTable {
    type Output = usize;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[self.offset(i, j)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_has_boundary_row_and_column() {
        let t = LcssTable::zeroed(2, 3);
        assert_eq!(t.n_rows(), 3);
        assert_eq!(t.n_cols(), 4);
        assert!((0..3).all(|i| t.row(i).iter().all(|&c| c == 0)));
    }

    #[test]
    fn lcs_length_scans_whole_last_row() {
        let mut t = LcssTable::zeroed(2, 3);
        t.set(2, 1, 2);
        t.set(2, 2, 1);
        assert_eq!(t.lcs_length(), 2);
        assert_eq!(t[(2, 1)], 2);
        assert_eq!(t.get(2, 3), 0);
        assert!((t.similarity().value() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "column index 4 out of bounds")]
    fn get_rejects_out_of_range_column() {
        let t = LcssTable::zeroed(2, 3);
        let _ = t.get(0, 4);
    }

    #[test]
    #[should_panic(expected = "column index 5 out of bounds")]
    fn index_rejects_column_past_row_end() {
        // (0, 5) lands on the flat slot of (1, 1) without the column check.
        let mut t = LcssTable::zeroed(2, 3);
        t.set(1, 1, 1);
        let _ = t[(0, 5)];
    }

    #[test]
    #[should_panic(expected = "row index 3 out of bounds")]
    fn row_rejects_out_of_range_index() {
        let t = LcssTable::zeroed(2, 3);
        let _ = t.row(3);
    }
}
