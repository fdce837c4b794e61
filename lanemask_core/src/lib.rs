mod bit_array;
mod masks;

pub use bit_array::BitArray;
pub use masks::{
    range_mask, range_word, shuffle_control, strided_mask, strided_word, PermuteMask, PERMUTE_WIDTH, STRIDED_WIDTH,
};

use thiserror::Error;

/// std::ops::Index for bits.
pub trait BitIndex<I> {
    /// Get a single bit value, failing if `idx` is outside the container.
    fn bit(&self, idx: I) -> Result<bool, MaskError>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaskError {
    #[error("stride must be at least 1")]
    ZeroStride,
    #[error("range start ({start}) is past its end ({end})")]
    InvertedRange { start: usize, end: usize },
    #[error("bit {index} is out of bounds for a {width}-bit array")]
    OutOfBounds { index: usize, width: usize },
    #[error("invalid binary digit {found:?} at position {pos}")]
    InvalidDigit { pos: usize, found: char },
    #[error("{width}-bit array does not fit into 128 bits")]
    TooWide { width: usize },
}
