//! Word-level helpers and the [`BitSetBuilder`].

use alloc::vec::Vec;

use crate::{BitSet, Word, macros::bitpos};

/// Number of words needed to hold `bits` bits.
#[inline(always)]
pub(crate) const fn words_for(bits: usize) -> usize {
    bits.div_ceil(Word::BITS)
}

/// Removes trailing zero words from a slice.
#[inline(always)]
pub(crate) const fn rtrim0(mut slice: &[Word]) -> &[Word] {
    while let [rest @ .., last] = slice {
        if last.get() != 0 {
            break;
        }
        slice = rest;
    }
    slice
}

/// Position one past the highest set bit, or 0 when no bit is set.
#[inline]
pub(crate) fn significant_bits(words: &[Word]) -> usize {
    let trimmed = rtrim0(words);
    match trimmed.last() {
        Some(hi) => (trimmed.len() - 1) * Word::BITS + (32 - hi.get().leading_zeros() as usize),
        None => 0,
    }
}

/// Mask selecting the logical bits of the last word of a `len`-bit set.
#[inline(always)]
pub(crate) const fn tail_mask(len: usize) -> u32 {
    match len & 31 {
        0 => u32::MAX,
        rem => (1u32 << rem) - 1,
    }
}

/// A builder for constructing bit sets from raw words or individual bits.
///
/// Words are appended at the high end; bits are appended at the next index.
/// Mixing the two is allowed: pushing a word first pads any partially filled
/// word with zeros.
///
/// # Examples
///
/// ```
/// use dynamic_bitset::BitSetBuilder;
///
/// let mut builder = BitSetBuilder::with_capacity(2);
/// builder.push_word(0b1010);
/// builder.push_word(0b1);
/// let set = builder.finish_trimmed();
///
/// assert_eq!(set.len(), 33);
/// assert!(set.get_bit(1)?);
/// assert!(set.get_bit(32)?);
/// # Ok::<(), dynamic_bitset::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct BitSetBuilder {
    words: Vec<Word>,
    len: usize,
}

impl BitSetBuilder {
    /// Creates a builder with room for `words` words.
    #[must_use]
    pub fn with_capacity(words: usize) -> Self {
        Self {
            words: Vec::with_capacity(words),
            len: 0,
        }
    }

    /// Number of bits pushed so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been pushed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a mutable slice of the words currently in the builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bitset::{BitSetBuilder, Word};
    ///
    /// let mut builder = BitSetBuilder::default();
    /// builder.push_word(Word::ZERO);
    /// builder.as_mut_slice()[0].set(true, 7);
    /// assert_eq!(builder.finish_trimmed().len(), 8);
    /// ```
    pub fn as_mut_slice(&mut self) -> &mut [Word] {
        self.words.as_mut_slice()
    }

    /// Appends a full 32-bit word.
    pub fn push_word(&mut self, word: impl Into<Word>) {
        self.len = self.words.len() * Word::BITS + Word::BITS;
        self.words.push(word.into());
    }

    /// Appends every word of a slice.
    pub fn extend_from_slice(&mut self, slice: &[Word]) {
        self.words.extend_from_slice(slice);
        self.len = self.words.len() * Word::BITS;
    }

    /// Appends a single bit at index [`len`](Self::len).
    pub fn push_bit(&mut self, value: bool) {
        let (wi, bi) = bitpos!(self.len);
        if wi == self.words.len() {
            self.words.push(Word::ZERO);
        }
        if value {
            self.words[wi].set(true, bi);
        }
        self.len += 1;
    }

    /// Finishes with the logical length equal to the number of bits pushed.
    #[must_use]
    pub fn finish(self) -> BitSet {
        BitSet::from_parts(self.words, self.len)
    }

    /// Finishes with the logical length set one past the highest set bit.
    #[must_use]
    pub fn finish_trimmed(self) -> BitSet {
        let len = significant_bits(&self.words);
        BitSet::from_parts(self.words, len)
    }
}

impl From<BitSetBuilder> for BitSet {
    fn from(builder: BitSetBuilder) -> Self {
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn significant_bits_ignores_zero_words() {
        let words = [Word::new(0b101), Word::ZERO, Word::ZERO];
        assert_eq!(significant_bits(&words), 3);
        assert_eq!(significant_bits(&[Word::ZERO, Word::new(1)]), 33);
        assert_eq!(significant_bits(&[]), 0);
    }

    #[test]
    fn tail_mask_covers_partial_word() {
        assert_eq!(tail_mask(0), u32::MAX);
        assert_eq!(tail_mask(32), u32::MAX);
        assert_eq!(tail_mask(5), 0b1_1111);
    }

    #[test]
    fn builder_mixes_bits_and_words() {
        let mut builder = BitSetBuilder::with_capacity(2);
        builder.push_bit(true);
        builder.push_bit(false);
        assert_eq!(builder.len(), 2);
        builder.push_word(u32::MAX);
        assert_eq!(builder.len(), 64);
        let set = builder.finish();
        assert_eq!(set.word_count(), 2);
        assert_eq!(set.words()[0].get(), 1);
    }
}
