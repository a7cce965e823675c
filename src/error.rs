//! Error kinds surfaced while loading grid text.
//!
//! Only parsing can fail; every transform is total over a valid grid. The two
//! kinds stay distinct so callers can tell a missing file apart from a
//! malformed one.
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    /// The input source could not be opened or read.
    #[error("unable to read {path}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A row's sample count disagrees with the width fixed by the first row.
    #[error("{origin}:{line}: expected {expected} samples per row, found {found}")]
    Format {
        origin: String,
        /// 1-based line number of the offending row.
        line: usize,
        expected: usize,
        found: usize,
    },
}
