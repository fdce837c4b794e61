//! Basic usage:
//!
//! ```
//! use lanemask::{write_range_mask, PermuteMask, MaskKind};
//!
//! let mut out = Vec::new();
//! // 1) Emit a single mask line
//! write_range_mask(&mut out, 2, 5, 8).unwrap();
//! // 2) Or describe masks as values and emit them together
//! lanemask::emit_all(&mut out, &[MaskKind::Strided { start: 0, repeat: 2 }, MaskKind::Permute(PermuteMask::Column1)]).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "0x1c\n0x5555555555555555\n0xb1\n");
//! ```

pub mod emit;
pub mod kind;

pub use lanemask_core;
pub use lanemask_core::{
    range_mask, range_word, shuffle_control, strided_mask, strided_word, BitArray, BitIndex, MaskError, PermuteMask,
    PERMUTE_WIDTH, STRIDED_WIDTH,
};

pub use emit::{
    emit_all, print_permute_mask, print_range_mask, print_strided_mask, write_permute_mask, write_range_mask,
    write_strided_mask, EmitError,
};
pub use kind::MaskKind;
