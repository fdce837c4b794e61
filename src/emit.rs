use std::io::Write;

use lanemask_core::{range_mask, strided_mask, BitArray, MaskError, PermuteMask};
use thiserror::Error;

use crate::MaskKind;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("mask error: {0}")]
    Mask(#[from] MaskError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn write_line<W: Write>(out: &mut W, bits: &BitArray) -> Result<(), EmitError> {
    writeln!(out, "{}", bits)?;
    Ok(())
}

/// Write a 64-bit mask with every `repeat`-th bit set from `start` as one hex line.
pub fn write_strided_mask<W: Write>(out: &mut W, start: usize, repeat: usize) -> Result<(), EmitError> {
    write_line(out, &strided_mask(start, repeat)?)
}

/// Write a `width`-bit mask with bits `start..end` set as one hex line.
pub fn write_range_mask<W: Write>(out: &mut W, start: usize, end: usize, width: usize) -> Result<(), EmitError> {
    write_line(out, &range_mask(start, end, width)?)
}

pub fn write_permute_mask<W: Write>(out: &mut W, mask: PermuteMask) -> Result<(), EmitError> {
    write_line(out, &mask.bits())
}

pub fn print_strided_mask(start: usize, repeat: usize) -> Result<(), EmitError> {
    write_strided_mask(&mut std::io::stdout().lock(), start, repeat)
}

pub fn print_range_mask(start: usize, end: usize, width: usize) -> Result<(), EmitError> {
    write_range_mask(&mut std::io::stdout().lock(), start, end, width)
}

pub fn print_permute_mask(mask: PermuteMask) -> Result<(), EmitError> {
    write_permute_mask(&mut std::io::stdout().lock(), mask)
}

/// Write one line per mask, stopping at the first mask that can't be built.
pub fn emit_all<W: Write>(out: &mut W, masks: &[MaskKind]) -> Result<(), EmitError> {
    for mask in masks {
        mask.emit(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted<F>(f: F) -> (Result<(), EmitError>, String)
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), EmitError>,
    {
        let mut out = Vec::new();
        let res = f(&mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn writes_single_line() {
        let (res, out) = emitted(|out| write_range_mask(out, 2, 5, 8));
        assert!(res.is_ok());
        assert_eq!(out, "0x1c\n");

        let (res, out) = emitted(|out| write_strided_mask(out, 70, 1));
        assert!(res.is_ok());
        assert_eq!(out, "0x0\n");
    }

    #[test]
    fn failing_mask_writes_nothing() {
        let (res, out) = emitted(|out| write_range_mask(out, 2, 9, 8));
        assert!(matches!(
            res,
            Err(EmitError::Mask(MaskError::OutOfBounds { index: 8, width: 8 }))
        ));
        assert!(out.is_empty(), "unexpected output: {:?}", out);

        let (res, out) = emitted(|out| write_strided_mask(out, 0, 0));
        assert!(matches!(res, Err(EmitError::Mask(MaskError::ZeroStride))));
        assert!(out.is_empty(), "unexpected output: {:?}", out);
    }

    #[test]
    fn emit_all_stops_at_first_failure() {
        let masks = [
            MaskKind::Permute(PermuteMask::Column2),
            MaskKind::Range { start: 3, end: 1, width: 8 },
            MaskKind::Permute(PermuteMask::Column3),
        ];
        let (res, out) = emitted(|out| emit_all(out, &masks));
        assert!(matches!(
            res,
            Err(EmitError::Mask(MaskError::InvertedRange { start: 3, end: 1 }))
        ));
        assert_eq!(out, "0x4b\n");
    }
}
