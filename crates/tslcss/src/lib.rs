//! Time series similarity via tolerant Longest Common Subsequence (LCSS).
//!
//! Pure math library with zero I/O. Two samples match when their indices lie
//! within a temporal tolerance `delta` and their values within a spatial
//! tolerance `epsilon` (Vlachos et al., SIGKDD 2003). The score is the longest
//! tolerant common subsequence over the longer series length, in `[0, 1]`.
//!
//! ```
//! let score = tslcss::lcss_match(&[1.0, 2.0, 3.0, 4.0], &[2.0, 3.0, 4.0, 5.0], 1, 0.1, 0)?;
//! assert_eq!(score, 0.75);
//! # Ok::<(), tslcss::LcssError>(())
//! ```

mod error;
mod lcss;
mod similarity;
mod table;
mod window;

pub use error::{LcssError, SeriesSide};
pub use lcss::{Lcss, lcss_match};
pub use similarity::LcssSimilarity;
pub use table::LcssTable;
pub use window::MatchWindow;
