use crate::{BitArray, MaskError};

/// Width of every strided mask.
pub const STRIDED_WIDTH: usize = 64;

/// Width of the fixed permutation masks.
pub const PERMUTE_WIDTH: usize = 8;

/// Returns a 64-bit mask with every `repeat`-th bit set, starting at bit `start`.
///
/// `start` past the end of the mask gives an empty mask.
pub fn strided_mask(start: usize, repeat: usize) -> Result<BitArray, MaskError> {
    if repeat == 0 {
        return Err(MaskError::ZeroStride);
    }
    let mut bits = BitArray::zeroed(STRIDED_WIDTH);
    for idx in (start..STRIDED_WIDTH).step_by(repeat) {
        bits.set(idx)?;
    }
    Ok(bits)
}

/// Returns a `width`-bit mask with bits `start..end` set.
pub fn range_mask(start: usize, end: usize, width: usize) -> Result<BitArray, MaskError> {
    if start > end {
        return Err(MaskError::InvertedRange { start, end });
    }
    if end > width {
        return Err(MaskError::OutOfBounds { index: end - 1, width });
    }
    let mut bits = BitArray::zeroed(width);
    for idx in start..end {
        bits.set(idx)?;
    }
    Ok(bits)
}

/// Same as [`strided_mask`], usable in constants.
///
/// A zero `repeat` sets only the `start` bit.
pub const fn strided_word(start: u32, repeat: u32) -> u64 {
    let mut word = 0u64;
    let mut idx = start;
    while idx < u64::BITS {
        word |= 1 << idx;
        if repeat == 0 {
            break;
        }
        idx = idx.saturating_add(repeat);
    }
    word
}

/// Same as [`range_mask`] over a 64-bit word, usable in constants.
pub const fn range_word(start: u32, end: u32) -> u64 {
    assert!(start <= end && end <= u64::BITS, "range does not fit into a 64-bit word");
    if start == end {
        return 0;
    }
    (u64::MAX >> (u64::BITS - (end - start))) << start
}

/// Encodes a 4-lane shuffle immediate, `_MM_SHUFFLE(z, y, x, w)` style.
///
/// `w` selects the source lane for destination lane 0, `z` for lane 3.
pub const fn shuffle_control(z: u8, y: u8, x: u8, w: u8) -> u8 {
    ((z & 0b11) << 6) | ((y & 0b11) << 4) | ((x & 0b11) << 2) | (w & 0b11)
}

/// Lane selection patterns for the 4x32-bit shuffles of B tile columns 1 to 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PermuteMask {
    /// Swap neighbouring lanes.
    Column1,
    Column2,
    Column3,
}

impl PermuteMask {
    pub const ALL: [Self; 3] = [Self::Column1, Self::Column2, Self::Column3];

    /// Bit pattern in construction order (first element is bit 0).
    pub const fn pattern(self) -> [u8; PERMUTE_WIDTH] {
        match self {
            Self::Column1 => [1, 0, 0, 0, 1, 1, 0, 1],
            Self::Column2 => [1, 1, 0, 1, 0, 0, 1, 0],
            Self::Column3 => [0, 1, 1, 1, 1, 0, 0, 0],
        }
    }

    /// Source lane selectors `[z, y, x, w]`, as passed to [`shuffle_control`].
    pub const fn lanes(self) -> [u8; 4] {
        match self {
            Self::Column1 => [2, 3, 0, 1],
            Self::Column2 => [1, 0, 2, 3],
            Self::Column3 => [0, 1, 3, 2],
        }
    }

    /// Shuffle immediate.
    pub const fn control(self) -> u8 {
        match self {
            Self::Column1 => 0xb1,
            Self::Column2 => 0x4b,
            Self::Column3 => 0x1e,
        }
    }

    pub const fn column(self) -> usize {
        match self {
            Self::Column1 => 1,
            Self::Column2 => 2,
            Self::Column3 => 3,
        }
    }

    pub fn bits(self) -> BitArray {
        self.pattern().iter().map(|bit| *bit == 1).collect()
    }
}

impl std::fmt::Display for PermuteMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column {}", self.column())
    }
}
