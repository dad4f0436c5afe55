//! Insertion and removal of single bits at arbitrary positions.
//!
//! Every operation here moves the bits above the affected index by one place,
//! carrying across word boundaries, so each is linear in the set length.

use crate::{
    BitSet, Error, Result, Word,
    macros::{bitpos, low_mask},
    storage::words_for,
};

impl BitSet {
    /// Grows the set by one bit and moves bits `>= index` up by one. The bit
    /// at `index` is left unspecified.
    fn open_gap(&mut self, index: usize) {
        self.sanitize();
        self.len += 1;
        if self.words.len() < words_for(self.len) {
            self.words.push(Word::ZERO);
        }

        let (wi, bi) = bitpos!(index);
        let low = low_mask!(bi);
        let mut carry = 0;
        for (k, word) in self.words[wi..].iter_mut().enumerate() {
            let v = word.get();
            let shifted = (v << 1) | carry;
            carry = v >> 31;
            *word = Word::new(if k == 0 {
                (v & low) | (shifted & !low)
            } else {
                shifted
            });
        }
    }

    /// Removes bit `index`, moving bits above it down by one, and returns the
    /// removed value.
    fn close_gap(&mut self, index: usize) -> bool {
        self.sanitize();
        let (wi, bi) = bitpos!(index);
        let removed = self.words[wi].bit(bi);
        let low = low_mask!(bi);

        let mut carry = 0;
        for k in (wi..self.words.len()).rev() {
            let v = self.words[k].get();
            let shifted = (v >> 1) | (carry << 31);
            carry = v & 1;
            self.words[k] = Word::new(if k == wi {
                (v & low) | (shifted & !low)
            } else {
                shifted
            });
        }

        self.len -= 1;
        self.words.truncate(words_for(self.len));
        removed
    }

    /// Inserts `value` at `index`, moving the bits at `>= index` up by one.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfRange`] if `index > len()`.
    /// - [`Error::LeadingZeroAtMsb`] if `value` is `false` and `index ==
    ///   len()`, which would make a zero the new highest bit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let mut set: BitSet = "101".parse()?;
    /// set.insert(false, 1)?;
    /// assert_eq!(set.to_binary_string(true), "1001");
    /// set.insert(true, 4)?;
    /// assert_eq!(set.to_binary_string(true), "10011");
    /// assert!(set.insert(false, 5).is_err());
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    pub fn insert(&mut self, value: bool, index: usize) -> Result<()> {
        if index > self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if !value && index == self.len {
            return Err(Error::LeadingZeroAtMsb { index });
        }
        self.open_gap(index);
        let (wi, bi) = bitpos!(index);
        self.words[wi].set(value, bi);
        Ok(())
    }

    /// Removes bit `index`, moving the bits above it down by one.
    ///
    /// A one-bit set becomes empty whatever its value.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfRange`] if `index >= len()`.
    /// - [`Error::SoleLsbErase`] if `index` is 0, the set is longer than one
    ///   bit and bit 0 is its only set bit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::{BitSet, ErrorKind};
    /// let mut set: BitSet = "1101".parse()?;
    /// set.erase(1)?;
    /// assert_eq!(set.to_binary_string(true), "101");
    ///
    /// let mut lone: BitSet = "100".parse()?;
    /// let err = lone.erase(0).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    pub fn erase(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if self.len == 1 {
            self.words.clear();
            self.len = 0;
            return Ok(());
        }
        if index == 0 && self.words[0].bit(0) && self.hamming_weight() == 1 {
            return Err(Error::SoleLsbErase);
        }
        self.close_gap(index);
        Ok(())
    }

    /// Inserts `value` counting from the top: backward index `b` inserts at
    /// forward index `len() - b`.
    ///
    /// # Errors
    ///
    /// Same as [`insert`](Self::insert); `b > len()` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let mut set: BitSet = "11".parse()?;
    /// set.reverse_insert(false, 1)?;
    /// assert_eq!(set.to_binary_string(true), "101");
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    pub fn reverse_insert(&mut self, value: bool, backward_index: usize) -> Result<()> {
        let index = self
            .len
            .checked_sub(backward_index)
            .ok_or(Error::IndexOutOfRange {
                index: backward_index,
                len: self.len,
            })?;
        self.insert(value, index)
    }

    /// Erases counting from the top: backward index `b` erases forward index
    /// `len() - 1 - b`.
    ///
    /// # Errors
    ///
    /// Same as [`erase`](Self::erase); `b >= len()` is out of range.
    pub fn reverse_erase(&mut self, backward_index: usize) -> Result<()> {
        if backward_index >= self.len {
            return Err(Error::IndexOutOfRange {
                index: backward_index,
                len: self.len,
            });
        }
        self.erase(self.len - 1 - backward_index)
    }

    /// Appends `value` at index `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let mut set = BitSet::new();
    /// for bit in [true, false, true, false] {
    ///     set.push_back(bit);
    /// }
    /// assert_eq!(set.to_binary_string(true), "1010");
    /// ```
    pub fn push_back(&mut self, value: bool) {
        self.sanitize();
        let (wi, bi) = bitpos!(self.len);
        if wi == self.words.len() {
            self.words.push(Word::ZERO);
        }
        self.words[wi].set(value, bi);
        self.len += 1;
    }

    /// Removes and returns the bit at index `len() - 1`.
    pub fn pop_back(&mut self) -> Option<bool> {
        let index = self.len.checked_sub(1)?;
        let (wi, bi) = bitpos!(index);
        let value = self.words[wi].bit(bi);
        self.len = index;
        self.words.truncate(words_for(index));
        self.sanitize();
        Some(value)
    }

    /// Inserts `value` at index 0, moving every bit up by one.
    pub fn push_front(&mut self, value: bool) {
        self.open_gap(0);
        self.words[0].set(value, 0);
    }

    /// Removes and returns bit 0, moving every bit down by one.
    pub fn pop_front(&mut self) -> Option<bool> {
        if self.is_empty() {
            return None;
        }
        Some(self.close_gap(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(set: &BitSet) -> alloc::vec::Vec<bool> {
        set.iter().collect()
    }

    #[test]
    fn insert_carries_across_words() {
        let mut set = BitSet::filled(64, false);
        set.set_bit(true, 31).unwrap();
        set.set_bit(true, 63).unwrap();
        set.insert(true, 10).unwrap();

        assert_eq!(set.len(), 65);
        assert_eq!(set.word_count(), 3);
        let ones: alloc::vec::Vec<_> = set.ones().collect();
        assert_eq!(ones, [10, 32, 64]);
    }

    #[test]
    fn erase_carries_across_words() {
        let mut set = BitSet::filled(65, false);
        set.set_bit(true, 32).unwrap();
        set.set_bit(true, 64).unwrap();
        set.erase(5).unwrap();

        assert_eq!(set.len(), 64);
        assert_eq!(set.word_count(), 2);
        let ones: alloc::vec::Vec<_> = set.ones().collect();
        assert_eq!(ones, [31, 63]);
    }

    #[test]
    fn insert_then_erase_restores() {
        let original: BitSet = (0..77).map(|i| i % 5 == 1).collect();
        for index in [0, 1, 31, 32, 50, 76] {
            let mut set = original.clone();
            set.insert(true, index).unwrap();
            assert_eq!(set.get(index), Some(true));
            set.erase(index).unwrap();
            assert_eq!(bits(&set), bits(&original), "index {index}");
        }
    }

    #[test]
    fn front_and_back() {
        let mut set = BitSet::new();
        assert_eq!(set.pop_back(), None);
        assert_eq!(set.pop_front(), None);

        set.push_back(true);
        set.push_front(false);
        set.push_back(false);
        assert_eq!(bits(&set), [false, true, false]);

        assert_eq!(set.pop_front(), Some(false));
        assert_eq!(set.pop_back(), Some(false));
        assert_eq!(bits(&set), [true]);
    }

    #[test]
    fn push_back_overwrites_stale_padding() {
        let mut set = BitSet::filled(3, true);
        set.push_back(false);
        assert_eq!(bits(&set), [true, true, true, false]);
        assert_eq!(set.hamming_weight(), 3);
    }

    #[test]
    fn guards() {
        let mut set = BitSet::from_bools(&[true, false]);
        assert_eq!(set.insert(false, 2), Err(Error::LeadingZeroAtMsb { index: 2 }));
        assert!(matches!(set.insert(true, 3), Err(Error::IndexOutOfRange { .. })));
        assert_eq!(set.erase(0), Err(Error::SoleLsbErase));
        assert!(set.reverse_erase(2).is_err());

        let mut single = BitSet::from_bools(&[true]);
        single.erase(0).unwrap();
        assert!(single.is_empty());
        assert_eq!(single.word_count(), 0);
    }
}
