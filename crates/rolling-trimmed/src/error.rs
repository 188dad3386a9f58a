//! Error types for window construction

use thiserror::Error;

/// Errors surfaced to callers at construction time.
///
/// Everything that can go wrong after construction is an internal invariant
/// violation (buffer overflow, a missing rank on removal, an impossible
/// search bound) and panics instead of returning an error; undefined numeric
/// results are reported through NaN and infinity sentinels.
#[derive(Error, Debug)]
pub enum Error {
    /// Trim count too large for the window size.
    #[error("trim count {trim} must satisfy 2 * trim < size (window size {size})")]
    InvalidTrim { size: usize, trim: usize },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check the window/trim relationship `2 * trim < size`.
    pub fn check_trim(size: usize, trim: usize) -> Result<()> {
        if trim * 2 >= size {
            return Err(Error::InvalidTrim { size, trim });
        }
        Ok(())
    }
}
