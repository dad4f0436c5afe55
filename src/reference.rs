//! A mutable handle to a single bit.

use core::{
    fmt,
    ops::{BitAndAssign, BitOrAssign, BitXorAssign},
};

use crate::{BitSet, Error, Result, Word, macros::bitpos};

/// A mutable borrow of one bit inside a [`BitSet`].
///
/// Holds the containing word and a single-bit mask. While a `BitRef` is
/// alive the set cannot be resized or otherwise mutated.
///
/// # Examples
///
/// ```
/// use dynamic_bitset::BitSet;
///
/// let mut set = BitSet::filled(8, false);
/// {
///     let mut bit = set.bit_mut(3)?;
///     bit.set(true);
///     bit ^= true;
///     bit |= true;
///     assert!(bit.get());
/// }
/// assert_eq!(set.to_binary_string(true), "00010000");
/// # Ok::<(), dynamic_bitset::Error>(())
/// ```
pub struct BitRef<'a> {
    word: &'a mut Word,
    mask: u32,
}

impl<'a> BitRef<'a> {
    #[inline]
    pub(crate) fn new(word: &'a mut Word, offset: usize) -> Self {
        Self {
            word,
            mask: 1 << (offset & 31),
        }
    }

    /// Reads the bit.
    #[must_use]
    #[inline]
    pub fn get(&self) -> bool {
        self.word.get() & self.mask != 0
    }

    /// Writes the bit.
    #[inline]
    pub fn set(&mut self, value: bool) {
        if value {
            self.word.or(self.mask);
        } else {
            self.word.and(!self.mask);
        }
    }

    /// Writes `value` and returns the previous value.
    #[inline]
    pub fn replace(&mut self, value: bool) -> bool {
        let old = self.get();
        self.set(value);
        old
    }

    /// Complements the bit.
    #[inline]
    pub fn flip(&mut self) {
        self.word.xor(self.mask);
    }
}

impl BitAndAssign<bool> for BitRef<'_> {
    fn bitand_assign(&mut self, rhs: bool) {
        if !rhs {
            self.set(false);
        }
    }
}

impl BitOrAssign<bool> for BitRef<'_> {
    fn bitor_assign(&mut self, rhs: bool) {
        if rhs {
            self.set(true);
        }
    }
}

impl BitXorAssign<bool> for BitRef<'_> {
    fn bitxor_assign(&mut self, rhs: bool) {
        if rhs {
            self.flip();
        }
    }
}

impl fmt::Debug for BitRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BitRef").field(&self.get()).finish()
    }
}

impl BitSet {
    /// Borrows bit `index` for reading and writing.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn bit_mut(&mut self, index: usize) -> Result<BitRef<'_>> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let (wi, bi) = bitpos!(index);
        Ok(BitRef::new(&mut self.words[wi], bi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_and_operators() {
        let mut word = Word::new(0b100);
        let mut bit = BitRef::new(&mut word, 2);
        assert!(bit.replace(false));
        assert!(!bit.get());
        bit |= true;
        bit &= false;
        assert!(!bit.get());
        bit ^= true;
        assert!(bit.get());
        assert_eq!(word.get(), 0b100);
    }
}
