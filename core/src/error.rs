//! Conversion errors.

use thiserror::Error;

/// The error returned when parsing a hexadecimal string fails.
///
/// Returned by [`from_hex`], [`from_trimmed_str`] and the [`FromStr`] impls.
///
/// [`from_hex`]: ../struct.H256.html#method.from_hex
/// [`from_trimmed_str`]: ../struct.H256.html#method.from_trimmed_str
/// [`FromStr`]: https://doc.rust-lang.org/std/str/trait.FromStr.html
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FromStrError {
    /// A character outside `[0-9a-fA-F]` in the hexadecimal payload.
    #[error("invalid character code `{chr}` at {idx}")]
    InvalidCharacter {
        /// The value of the invalid character.
        chr: u8,
        /// The index of the invalid character in the original input.
        idx: usize,
    },
    /// The number of hexadecimal digits does not match the width.
    #[error("invalid length: {0}")]
    InvalidLength(usize),
}

/// The error returned when converting a byte slice of the wrong length.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FromSliceError {
    /// Invalid length.
    #[error("invalid length: {0}")]
    InvalidLength(usize),
}
