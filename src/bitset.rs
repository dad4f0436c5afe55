//! `BitSet` struct and core storage operations.

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::{
    Error, Result, Word,
    macros::{bitpos, low_mask},
    storage::{rtrim0, significant_bits, tail_mask, words_for},
};

/// A growable sequence of bits packed into 32-bit [`Word`]s.
///
/// # Overview
///
/// A `BitSet` owns its words and a logical length. Bit `i` lives in word
/// `i / 32` at offset `i % 32`; bit 0 is the least significant bit of word
/// 0. The storage always holds exactly `ceil(len / 32)` words, so the bits of
/// the last word at positions `>= len` are padding.
///
/// # Padding
///
/// Padding bits are cleared after almost every mutation. A few operations
/// leave them alone on purpose: [`filled`](Self::filled) and
/// [`resize`](Self::resize) copy the fill value into them,
/// [`not_operation`](Self::not_operation) and [`set_all`](Self::set_all)
/// flip or set whole words. Padding is never observable through bit access,
/// equality, hashing or text conversion, but [`all`](Self::all),
/// [`any`](Self::any) and [`none`](Self::none) scan whole words and do see it.
///
/// # Text order
///
/// Text forms list bits in index order, bit 0 first, and numeric text is read
/// as an ordinary numeral. A set parsed from a numeral therefore keeps the
/// numeral's leading digit at bit 0.
///
/// # Examples
///
/// ```
/// use dynamic_bitset::BitSet;
///
/// let mut set = BitSet::new();
/// set.push_back(true);
/// set.push_back(false);
/// set.push_back(true);
///
/// assert_eq!(set.len(), 3);
/// assert!(set.get_bit(2)?);
/// assert_eq!(set.to_binary_string(true), "101");
/// # Ok::<(), dynamic_bitset::Error>(())
/// ```
pub struct BitSet {
    pub(crate) words: Vec<Word>,
    pub(crate) len: usize,
}

impl BitSet {
    /// Creates an empty bit set without allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let set = BitSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.word_count(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty bit set with room for at least `bits` bits.
    #[must_use]
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: Vec::with_capacity(words_for(bits)),
            len: 0,
        }
    }

    /// Creates a set of `len` bits, all equal to `fill`.
    ///
    /// The padding of the last word takes the fill value too, which is what
    /// lets [`all`](Self::all) report `true` for a freshly filled set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let set = BitSet::filled(5, true);
    /// assert_eq!(set.len(), 5);
    /// assert_eq!(set.hamming_weight(), 5);
    /// assert!(set.all());
    /// ```
    #[must_use]
    pub fn filled(len: usize, fill: bool) -> Self {
        Self {
            words: alloc::vec![Word::splat(fill); words_for(len)],
            len,
        }
    }

    /// Creates a set holding `bools[i]` at bit `i`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let set = BitSet::from_bools(&[true, false, true]);
    /// assert_eq!(set.len(), 3);
    /// assert_eq!(set.get(1), Some(false));
    /// ```
    #[must_use]
    pub fn from_bools(bools: &[bool]) -> Self {
        let mut words = alloc::vec![Word::ZERO; words_for(bools.len())];
        for (i, &value) in bools.iter().enumerate() {
            if value {
                let (wi, bi) = bitpos!(i);
                words[wi].set(true, bi);
            }
        }
        Self {
            words,
            len: bools.len(),
        }
    }

    /// Builds a set from words and a length, fixing the word count and
    /// clearing padding.
    pub(crate) fn from_parts(mut words: Vec<Word>, len: usize) -> Self {
        words.resize(words_for(len), Word::ZERO);
        let mut set = Self { words, len };
        set.sanitize();
        set
    }

    /// Logical number of bits.
    #[must_use]
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set holds no bits at all.
    ///
    /// This is about length, not content; see [`none`](Self::none) for
    /// "no bit is set".
    #[must_use]
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Addressable bits given the current word count, `word_count() * 32`.
    #[must_use]
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.words.len() * Word::BITS
    }

    /// Number of stored words, always `ceil(len() / 32)`.
    #[must_use]
    #[inline(always)]
    pub const fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of words the current allocation can hold without growing.
    #[must_use]
    pub fn memory_capacity(&self) -> usize {
        self.words.capacity()
    }

    /// The stored words, least significant first. The last word may carry
    /// padding bits; see the type-level docs.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Position one past the highest set bit, or 0 if no bit is set.
    ///
    /// Only logical bits count; padding is ignored even when it is set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let set = BitSet::from(0b1101u32);
    /// assert_eq!(set.valid_number_of_bits(), 4);
    /// assert_eq!(BitSet::filled(5, true).valid_number_of_bits(), 5);
    /// ```
    #[must_use]
    pub fn valid_number_of_bits(&self) -> usize {
        (0..self.words.len())
            .rev()
            .map(|wi| (wi, self.logical_word(wi)))
            .find(|&(_, word)| word != 0)
            .map_or(0, |(wi, word)| {
                wi * Word::BITS + (Word::BITS - word.leading_zeros() as usize)
            })
    }

    /// Clears the padding bits of the last word.
    #[inline]
    pub(crate) fn sanitize(&mut self) {
        let mask = tail_mask(self.len);
        if let Some(last) = self.words.last_mut() {
            last.and(mask);
        }
    }

    /// Word `wi` with its padding masked off.
    #[inline]
    pub(crate) fn logical_word(&self, wi: usize) -> u32 {
        let word = self.words[wi].get();
        if wi + 1 == self.words.len() {
            word & tail_mask(self.len)
        } else {
            word
        }
    }

    /// Iterates over the words with padding masked off.
    pub(crate) fn logical_words(&self) -> impl DoubleEndedIterator<Item = u32> + '_ {
        (0..self.words.len()).map(|wi| self.logical_word(wi))
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Reads bit `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let set = BitSet::from_bools(&[false, true]);
    /// assert!(set.get_bit(1)?);
    /// assert!(set.get_bit(2).is_err());
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    pub fn get_bit(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        let (wi, bi) = bitpos!(index);
        Ok(self.words[wi].bit(bi))
    }

    /// Reads bit `index`, or `None` when out of range.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.get_bit(index).ok()
    }

    /// Writes `value` to bit `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let mut set = BitSet::filled(4, false);
    /// set.set_bit(true, 3)?;
    /// assert_eq!(set.to_binary_string(true), "0001");
    /// assert!(set.set_bit(true, 4).is_err());
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    pub fn set_bit(&mut self, value: bool, index: usize) -> Result<()> {
        self.check_index(index)?;
        let (wi, bi) = bitpos!(index);
        self.words[wi].set(value, bi);
        Ok(())
    }

    /// Clears bit `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn reset_bit(&mut self, index: usize) -> Result<()> {
        self.set_bit(false, index)
    }

    /// Complements bit `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn flip(&mut self, index: usize) -> Result<&mut Self> {
        self.check_index(index)?;
        let (wi, bi) = bitpos!(index);
        self.words[wi].flip(bi);
        Ok(self)
    }

    /// Resizes the set to `new_len` bits.
    ///
    /// Growing gives every new bit the value `fill`, including the former
    /// padding of the old last word. Shrinking drops the bits at
    /// `>= new_len`. The word count becomes `ceil(new_len / 32)`; the padding
    /// of a grown set keeps `fill`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let mut set = BitSet::from_bools(&[true, false]);
    /// set.resize(40, true);
    /// assert_eq!(set.len(), 40);
    /// assert_eq!(set.word_count(), 2);
    /// assert_eq!(set.hamming_weight(), 39);
    ///
    /// set.resize(1, false);
    /// assert_eq!(set.to_binary_string(true), "1");
    /// ```
    pub fn resize(&mut self, new_len: usize, fill: bool) {
        let old_len = self.len;
        if new_len > old_len
            && let Some(last) = self.words.last_mut()
        {
            let exposed = !tail_mask(old_len);
            if fill {
                last.or(exposed);
            } else {
                last.and(!exposed);
            }
        }

        let old_words = self.words.len();
        self.words.resize(words_for(new_len), Word::splat(fill));
        self.len = new_len;
        if new_len < old_len {
            self.sanitize();
        }

        debug!(
            old_len,
            new_len,
            old_words,
            new_words = self.words.len(),
            "bit set resized"
        );
    }

    /// Reserves memory for at least `bits` bits in total.
    ///
    /// The logical length and word count are unchanged; only
    /// [`memory_capacity`](Self::memory_capacity) grows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let mut set = BitSet::new();
    /// set.reserve(300);
    /// assert!(set.memory_capacity() >= 10);
    /// assert_eq!(set.len(), 0);
    /// ```
    pub fn reserve(&mut self, bits: usize) {
        let wanted = words_for(bits);
        if let Some(additional) = wanted.checked_sub(self.words.len()) {
            self.words.reserve(additional);
        }
        trace!(bits, memory_capacity = self.words.capacity(), "reserved");
    }

    /// Drops trailing zero words and recomputes the length from content.
    ///
    /// The new length is one past the highest set bit, so a set whose top
    /// bits are zero gets shorter even though nothing asked it to. A set with
    /// no bits set becomes empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let mut set = BitSet::filled(100, false);
    /// set.set_bit(true, 40)?;
    /// set.shrink_to_fit();
    /// assert_eq!(set.len(), 41);
    /// assert_eq!(set.word_count(), 2);
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    pub fn shrink_to_fit(&mut self) {
        let old_len = self.len;
        self.sanitize();
        let kept = rtrim0(&self.words).len();
        self.words.truncate(kept);
        self.len = significant_bits(&self.words);
        self.words.truncate(words_for(self.len));
        self.words.shrink_to_fit();
        debug!(old_len, new_len = self.len, "bit set shrunk to content");
    }

    /// Removes every bit and releases the storage.
    pub fn clear(&mut self) {
        if self.len != 0 || self.words.capacity() != 0 {
            debug!(old_len = self.len, "bit set cleared");
        }
        self.words = Vec::new();
        self.len = 0;
    }

    /// Returns `true` if every stored word is all ones.
    ///
    /// This looks at whole words, padding included. It only matches "every
    /// logical bit is 1" while the padding is 1 as well, as it is right after
    /// [`filled(_, true)`](Self::filled), [`resize(_, true)`](Self::resize)
    /// or [`set_all`](Self::set_all). A set whose length is not a multiple of
    /// 32 and whose padding was cleared reports `false` even when every
    /// logical bit is set. An empty set reports `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// assert!(BitSet::filled(5, true).all());
    /// // padding cleared by the constructor
    /// assert!(!BitSet::from_bools(&[true; 5]).all());
    /// assert!(BitSet::from_bools(&[true; 32]).all());
    /// ```
    #[must_use]
    pub fn all(&self) -> bool {
        self.words.iter().all(|&w| w == Word::ONES)
    }

    /// Returns `true` if any stored word is non-zero, padding included.
    #[must_use]
    pub fn any(&self) -> bool {
        self.words.iter().any(|&w| w != Word::ZERO)
    }

    /// Returns `true` if every stored word is zero, padding included.
    #[must_use]
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Sets every stored word to all ones, padding included.
    pub fn set_all(&mut self) {
        self.words.fill(Word::ONES);
    }

    /// Clears every bit.
    pub fn reset_all(&mut self) {
        self.words.fill(Word::ZERO);
    }

    /// Writes `value` to the `count` bits starting at `pos`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `pos + count > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let mut set = BitSet::filled(70, false);
    /// set.set_range(30, 36, true)?;
    /// assert_eq!(set.hamming_weight(), 36);
    /// assert!(!set.get_bit(29)?);
    /// assert!(set.get_bit(30)?);
    /// assert!(set.get_bit(65)?);
    /// assert!(!set.get_bit(66)?);
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    pub fn set_range(&mut self, pos: usize, count: usize, value: bool) -> Result<()> {
        let end = pos.checked_add(count).ok_or(Error::IndexOutOfRange {
            index: usize::MAX,
            len: self.len,
        })?;
        if end > self.len {
            return Err(Error::IndexOutOfRange {
                index: end - 1,
                len: self.len,
            });
        }
        self.fill_range(pos, end, value);
        Ok(())
    }

    /// Clears the `count` bits starting at `pos`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `pos + count > len()`.
    pub fn reset_range(&mut self, pos: usize, count: usize) -> Result<()> {
        self.set_range(pos, count, false)
    }

    /// Writes `value` to bits `[beg, end)`; the range must be in bounds.
    pub(crate) fn fill_range(&mut self, beg: usize, end: usize, value: bool) {
        if beg >= end {
            return;
        }
        let (w0, b0) = bitpos!(beg);
        let (w1, b1) = bitpos!(end - 1);

        let apply = |word: &mut Word, mask: u32| {
            if value {
                word.or(mask);
            } else {
                word.and(!mask);
            }
        };

        if w0 == w1 {
            apply(&mut self.words[w0], low_mask!(b1 + 1) & !low_mask!(b0));
            return;
        }

        apply(&mut self.words[w0], !low_mask!(b0));
        self.words[w0 + 1..w1].fill(Word::splat(value));
        apply(&mut self.words[w1], low_mask!(b1 + 1));
    }

    /// Number of set bits among the logical bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let set = BitSet::from_bools(&[true, false, true, true]);
    /// assert_eq!(set.hamming_weight(), 3);
    /// ```
    #[must_use]
    pub fn hamming_weight(&self) -> usize {
        self.logical_words()
            .map(|w| Word::new(w).count_bits())
            .sum()
    }

    /// Number of positions at which `self` and `other` differ.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let a = BitSet::from_bools(&[true, false, true]);
    /// let b = BitSet::from_bools(&[true, true, false]);
    /// assert_eq!(a.hamming_distance(&b)?, 2);
    /// assert!(a.hamming_distance(&BitSet::new()).is_err());
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    pub fn hamming_distance(&self, other: &Self) -> Result<usize> {
        if self.len != other.len {
            return Err(Error::LengthMismatch {
                left: self.len,
                right: other.len,
            });
        }
        Ok(self
            .logical_words()
            .zip(other.logical_words())
            .map(|(a, b)| Word::new(a ^ b).count_bits())
            .sum())
    }

    /// Copies bits `[start, end)` into a new set, bit `start` becoming bit 0.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `end > len()` or `start > end`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let set: BitSet = "0110100".parse()?;
    /// let sub = set.subset(1, 5)?;
    /// assert_eq!(sub.to_binary_string(true), "1101");
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    pub fn subset(&self, start: usize, end: usize) -> Result<Self> {
        if end > self.len || start > end {
            return Err(Error::IndexOutOfRange {
                index: if end > self.len { end } else { start },
                len: self.len,
            });
        }
        Ok(self.copy_range(start, end))
    }

    /// Copies bits `[start, end)`; the range must be in bounds.
    pub(crate) fn copy_range(&self, start: usize, end: usize) -> Self {
        let bits = end - start;
        if bits == 0 {
            return Self::new();
        }

        let n = words_for(bits);
        let (wi, bi) = bitpos!(start);
        let src = &self.words;
        let mut out = Vec::with_capacity(n);

        if bi == 0 {
            out.extend_from_slice(&src[wi..wi + n]);
        } else {
            // Misaligned: each output word is (v0 >> s) | (v1 << (32 - s)).
            let shift = bi as u32;
            let ishift = 32 - shift;
            let mut carry = src.get(wi + n).map_or(0, |w| w.get() << ishift);

            out.resize(n, Word::ZERO);
            for (output, input) in out.iter_mut().zip(&src[wi..wi + n]).rev() {
                *output = Word::new((input.get() >> shift) | carry);
                carry = input.get() << ishift;
            }
        }

        Self::from_parts(out, bits)
    }

    /// Returns a new set with `self`'s bits at the low indices followed by
    /// `other`'s bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let low: BitSet = "110".parse()?;
    /// let high: BitSet = "01".parse()?;
    /// let joined = low.concat(&high);
    /// assert_eq!(joined.len(), 5);
    /// assert_eq!(joined.to_binary_string(true), "11001");
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.append(other);
        result
    }

    /// Appends `other`'s bits after the current highest bit.
    pub(crate) fn append(&mut self, other: &Self) {
        let offset = self.len;
        self.sanitize();
        self.len += other.len;
        self.words.resize(words_for(self.len), Word::ZERO);

        let (wi, bi) = bitpos!(offset);
        for (k, value) in other.logical_words().enumerate() {
            self.words[wi + k].or(value << bi);
            if bi != 0
                && let Some(next) = self.words.get_mut(wi + k + 1)
            {
                next.or(value >> (32 - bi));
            }
        }
    }

    /// Reads `count <= 32` bits starting at `beg` as the low bits of a `u32`.
    pub(crate) fn extract_bits(&self, beg: usize, count: usize) -> u32 {
        debug_assert!(count <= Word::BITS && beg + count <= self.capacity());
        if count == 0 {
            return 0;
        }
        let (wi, bi) = bitpos!(beg);
        let lo = self.words[wi].get() >> bi;
        let hi = if bi + count > Word::BITS {
            self.words[wi + 1].get() << (32 - bi)
        } else {
            0
        };
        (lo | hi) & low_mask!(count)
    }

    /// Writes the low `count <= 32` bits of `value` starting at `beg`.
    pub(crate) fn deposit_bits(&mut self, beg: usize, count: usize, value: u32) {
        debug_assert!(count <= Word::BITS && beg + count <= self.capacity());
        if count == 0 {
            return;
        }
        let (wi, bi) = bitpos!(beg);
        let mask = low_mask!(count);
        let value = value & mask;

        let lo = &mut self.words[wi];
        *lo = Word::new((lo.get() & !(mask << bi)) | (value << bi));

        if bi + count > Word::BITS {
            let spill = bi + count - Word::BITS;
            let hi = &mut self.words[wi + 1];
            *hi = Word::new((hi.get() & !low_mask!(spill)) | (value >> (32 - bi)));
        }
    }

    /// Reads `count` bits starting at `beg` in 32-bit chunks, low bits first.
    pub(crate) fn extract_chunks(&self, beg: usize, count: usize) -> Vec<u32> {
        (0..count)
            .step_by(Word::BITS)
            .map(|off| self.extract_bits(beg + off, (count - off).min(Word::BITS)))
            .collect()
    }

    /// Writes `count` bits from `chunks` starting at `beg`; the inverse of
    /// [`extract_chunks`](Self::extract_chunks).
    pub(crate) fn deposit_chunks(&mut self, beg: usize, count: usize, chunks: &[u32]) {
        for (k, &value) in chunks.iter().enumerate() {
            let off = k * Word::BITS;
            self.deposit_bits(beg + off, (count - off).min(Word::BITS), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_and_deposit_cross_word_boundary() {
        let mut set = BitSet::filled(96, false);
        set.deposit_bits(28, 10, 0b11_0110_1011);
        assert_eq!(set.extract_bits(28, 10), 0b11_0110_1011);
        assert_eq!(set.extract_bits(30, 4), 0b1010);
        assert_eq!(set.hamming_weight(), 7);

        set.deposit_bits(28, 10, 0);
        assert_eq!(set.hamming_weight(), 0);
    }

    #[test]
    fn chunks_carry_unaligned_runs() {
        let src: BitSet = (0..90).map(|i| i % 5 == 0 || i % 7 == 0).collect();
        let chunks = src.extract_chunks(13, 70);
        assert_eq!(chunks.len(), 3);

        let mut dst = BitSet::filled(90, false);
        dst.deposit_chunks(5, 70, &chunks);
        for i in 0..90 {
            let expected = (5..75).contains(&i) && src.get_bit(i + 8).unwrap();
            assert_eq!(dst.get(i), Some(expected), "bit {i}");
        }
    }

    #[test]
    fn fill_range_single_and_multi_word() {
        let mut set = BitSet::filled(100, false);
        set.fill_range(3, 7, true);
        assert_eq!(set.words[0].get(), 0b111_1000);
        set.fill_range(0, 100, true);
        assert_eq!(set.hamming_weight(), 100);
        set.fill_range(31, 65, false);
        assert_eq!(set.hamming_weight(), 66);
    }

    #[test]
    fn append_unaligned() {
        let mut a = BitSet::from_bools(&[true, false, true]);
        let b = BitSet::filled(40, true);
        a.append(&b);
        assert_eq!(a.len(), 43);
        assert_eq!(a.hamming_weight(), 42);
        assert_eq!(a.get(1), Some(false));
        assert_eq!(a.get(42), Some(true));
    }

    #[test]
    fn from_parts_normalises_word_count() {
        let set = BitSet::from_parts(alloc::vec![Word::ONES, Word::ONES, Word::ONES], 33);
        assert_eq!(set.word_count(), 2);
        assert_eq!(set.words[1].get(), 1);
    }
}
