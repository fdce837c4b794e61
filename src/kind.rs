use std::io::Write;

use lanemask_core::{range_mask, strided_mask, BitArray, MaskError, PermuteMask};

use crate::EmitError;

/// Parameters of a single mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaskKind {
    /// Every `repeat`-th bit of a 64-bit mask, starting at `start`.
    Strided { start: usize, repeat: usize },
    /// Bits `start..end` of a `width`-bit mask.
    Range { start: usize, end: usize, width: usize },
    Permute(PermuteMask),
}

impl MaskKind {
    pub fn build(&self) -> Result<BitArray, MaskError> {
        match *self {
            Self::Strided { start, repeat } => strided_mask(start, repeat),
            Self::Range { start, end, width } => range_mask(start, end, width),
            Self::Permute(mask) => Ok(mask.bits()),
        }
    }

    /// Write this mask as one hex line.
    pub fn emit<W: Write>(&self, out: &mut W) -> Result<(), EmitError> {
        let bits = self.build()?;
        writeln!(out, "{}", bits)?;
        Ok(())
    }
}

impl From<PermuteMask> for MaskKind {
    fn from(mask: PermuteMask) -> Self {
        Self::Permute(mask)
    }
}

impl std::fmt::Display for MaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strided { start, repeat } => write!(f, "every {} bits from {}", repeat, start),
            Self::Range { start, end, width } => write!(f, "bits {}..{} of {}", start, end, width),
            Self::Permute(mask) => write!(f, "permute {}", mask),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_kind() {
        let kind = MaskKind::Strided { start: 1, repeat: 4 };
        assert_eq!(kind.build().unwrap().to_hex(), "0x2222222222222222");

        let kind = MaskKind::Range { start: 0, end: 32, width: 128 };
        assert_eq!(kind.build().unwrap().to_hex(), "0xffffffff");

        let kind = MaskKind::from(PermuteMask::Column3);
        assert_eq!(kind.build().unwrap().to_hex(), "0x1e");
    }

    #[test]
    fn display() {
        assert_eq!(MaskKind::Strided { start: 0, repeat: 2 }.to_string(), "every 2 bits from 0");
        assert_eq!(MaskKind::Range { start: 2, end: 5, width: 8 }.to_string(), "bits 2..5 of 8");
        assert_eq!(MaskKind::Permute(PermuteMask::Column1).to_string(), "permute column 1");
    }
}
