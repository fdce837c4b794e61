use itertools::Itertools;

use crate::{BitIndex, MaskError};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Fixed-width sequence of bits.
///
/// Bits are enumerated in construction order, and bit `0` ends up as the least significant bit of the
/// rendered value. The numeral an array stands for is therefore its mirror: `[1, 1, 0, 0]` reads as `0b0011`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitArray {
    bits: Vec<bool>,
}

impl BitArray {
    /// Create an array of `width` zero bits.
    pub fn zeroed(width: usize) -> Self {
        Self {
            bits: vec![false; width],
        }
    }

    /// Parse a string of `'0'`/`'1'` characters, first character being bit `0`.
    pub fn from_digits(digits: &str) -> Result<Self, MaskError> {
        digits
            .chars()
            .enumerate()
            .map(|(pos, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(MaskError::InvalidDigit { pos, found }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|bits| Self { bits })
    }

    /// Number of bits in this array.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Set bit `idx` to one.
    pub fn set(&mut self, idx: usize) -> Result<(), MaskError> {
        let width = self.width();
        match self.bits.get_mut(idx) {
            Some(bit) => {
                *bit = true;
                Ok(())
            }
            None => Err(MaskError::OutOfBounds { index: idx, width }),
        }
    }

    pub fn get(&self, idx: usize) -> Option<bool> {
        self.bits.get(idx).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Positions of all set bits, in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter().positions(|bit| *bit)
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|bit| **bit).count()
    }

    pub fn reversed(&self) -> Self {
        self.bits.iter().rev().copied().collect()
    }

    /// Binary numeral this array stands for, most significant digit first.
    pub fn numeral(&self) -> String {
        self.bits.iter().rev().map(|bit| if *bit { '1' } else { '0' }).collect()
    }

    /// Render the numeral as `0x`-prefixed lowercase hex without leading zeros.
    ///
    /// Works for any width; zero (including the empty array) renders as `0x0`.
    pub fn to_hex(&self) -> String {
        let numeral = self.numeral();
        let pad = (4 - numeral.len() % 4) % 4;
        let nibbles = std::iter::repeat(b'0').take(pad).chain(numeral.bytes()).chunks(4);
        let digits: String = nibbles
            .into_iter()
            .map(|nibble| nibble.fold(0usize, |acc, digit| acc << 1 | usize::from(digit == b'1')))
            .map(|value| HEX_DIGITS[value] as char)
            .skip_while(|c| *c == '0')
            .collect();
        if digits.is_empty() {
            "0x0".to_owned()
        } else {
            format!("0x{}", digits)
        }
    }

    /// Parse the numeral as base 2.
    pub fn value(&self) -> Result<u128, MaskError> {
        if self.width() > u128::BITS as usize {
            return Err(MaskError::TooWide { width: self.width() });
        }
        Ok(self
            .bits
            .iter()
            .rev()
            .fold(0u128, |acc, bit| acc << 1 | u128::from(*bit)))
    }
}

impl BitIndex<usize> for BitArray {
    fn bit(&self, idx: usize) -> Result<bool, MaskError> {
        self.get(idx).ok_or(MaskError::OutOfBounds {
            index: idx,
            width: self.width(),
        })
    }
}

impl std::iter::FromIterator<bool> for BitArray {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BitArray {
    type Item = bool;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, bool>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter().copied()
    }
}

impl std::fmt::Display for BitArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
