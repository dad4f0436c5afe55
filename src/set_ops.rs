//! Bitwise combination, shifts and rotations.

use tracing::trace;

use crate::{
    BitSet, Word,
    macros::bitpos,
    storage::words_for,
};

impl BitSet {
    /// In-place AND with `other`.
    ///
    /// The length becomes the shorter of the two; bits beyond it are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let mut a = BitSet::from_bools(&[true, true, false, true]);
    /// let b = BitSet::from_bools(&[true, false, true]);
    /// a.and_operation(&b);
    /// assert_eq!(a.to_binary_string(true), "100");
    /// ```
    pub fn and_operation(&mut self, other: &Self) -> &mut Self {
        let len = self.len.min(other.len);
        self.words.truncate(words_for(len));
        for (dst, src) in self.words.iter_mut().zip(other.logical_words()) {
            dst.and(src);
        }
        self.len = len;
        self.sanitize();
        self
    }

    /// In-place OR with `other`.
    ///
    /// The length becomes the longer of the two; the shorter operand counts
    /// as zero-extended.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let mut a = BitSet::from_bools(&[true, false]);
    /// let b = BitSet::from_bools(&[false, true, false, true]);
    /// a.or_operation(&b);
    /// assert_eq!(a.to_binary_string(true), "1101");
    /// ```
    pub fn or_operation(&mut self, other: &Self) -> &mut Self {
        self.zip_extend(other, Word::or)
    }

    /// In-place XOR with `other`, zero-extending the shorter operand.
    pub fn xor_operation(&mut self, other: &Self) -> &mut Self {
        self.zip_extend(other, Word::xor)
    }

    fn zip_extend(&mut self, other: &Self, op: fn(&mut Word, u32)) -> &mut Self {
        self.sanitize();
        let len = self.len.max(other.len);
        self.words.resize(words_for(len), Word::ZERO);
        for (dst, src) in self.words.iter_mut().zip(other.logical_words()) {
            op(dst, src);
        }
        self.len = len;
        self
    }

    /// Complements every stored word.
    ///
    /// Padding bits are flipped too and left that way; the `!` operator
    /// clears them afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let mut set = BitSet::from_bools(&[true, false, false]);
    /// set.not_operation();
    /// assert_eq!(set.to_binary_string(true), "011");
    /// assert!(set.any());
    /// ```
    pub fn not_operation(&mut self) -> &mut Self {
        self.words.iter_mut().for_each(Word::invert);
        self
    }

    /// Moves every bit `k` positions toward index 0.
    ///
    /// Bit `i` takes the old value of bit `i + k`; the top `k` bits become
    /// zero. Shifting by `len()` or more clears the set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let mut set: BitSet = "0011011".parse()?;
    /// set.left_shift(2);
    /// assert_eq!(set.to_binary_string(true), "1101100");
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    pub fn left_shift(&mut self, k: usize) -> &mut Self {
        if k == 0 {
            return self;
        }
        trace!(k, len = self.len, "left shift");
        if k >= self.len {
            self.reset_all();
            return self;
        }

        self.sanitize();
        let n = self.words.len();
        let (ws, bs) = bitpos!(k);

        if ws > 0 {
            self.words.copy_within(ws.., 0);
            self.words[n - ws..].fill(Word::ZERO);
        }
        if bs > 0 {
            for i in 0..n {
                let hi = self.words.get(i + 1).map_or(0, |w| w.get() << (32 - bs));
                self.words[i] = Word::new((self.words[i].get() >> bs) | hi);
            }
        }

        self.sanitize();
        self
    }

    /// Moves every bit `k` positions toward the top index.
    ///
    /// Bit `i` takes the old value of bit `i - k`; the low `k` bits become
    /// zero and bits pushed past `len()` are lost. Shifting by `len()` or
    /// more clears the set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let mut set: BitSet = "1101100".parse()?;
    /// set.right_shift(3);
    /// assert_eq!(set.to_binary_string(true), "0001101");
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    pub fn right_shift(&mut self, k: usize) -> &mut Self {
        if k == 0 {
            return self;
        }
        trace!(k, len = self.len, "right shift");
        if k >= self.len {
            self.reset_all();
            return self;
        }

        self.sanitize();
        let n = self.words.len();
        let (ws, bs) = bitpos!(k);

        if ws > 0 {
            self.words.copy_within(..n - ws, ws);
            self.words[..ws].fill(Word::ZERO);
        }
        if bs > 0 {
            for i in (0..n).rev() {
                let lo = match i {
                    0 => 0,
                    _ => self.words[i - 1].get() >> (32 - bs),
                };
                self.words[i] = Word::new((self.words[i].get() << bs) | lo);
            }
        }

        self.sanitize();
        self
    }

    /// Rotates every bit `k` positions toward index 0.
    ///
    /// Bit `i` takes the old value of bit `(i + k) % len()`. The `k` bits
    /// shifted out at the bottom reappear at the top.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let mut set: BitSet = "1100000".parse()?;
    /// set.rotate_left(3);
    /// assert_eq!(set.to_binary_string(true), "0000110");
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    pub fn rotate_left(&mut self, k: usize) -> &mut Self {
        let len = self.len;
        if len == 0 || k % len == 0 {
            return self;
        }
        let k = k % len;
        trace!(k, len, "rotate left");

        let wrapped = self.extract_chunks(0, k);
        self.left_shift(k);
        self.deposit_chunks(len - k, k, &wrapped);
        self
    }

    /// Rotates every bit `k` positions toward the top index.
    ///
    /// Bit `i` takes the old value of bit `(i - k) mod len()`.
    pub fn rotate_right(&mut self, k: usize) -> &mut Self {
        let len = self.len;
        if len == 0 || k % len == 0 {
            return self;
        }
        let k = k % len;
        trace!(k, len, "rotate right");

        let wrapped = self.extract_chunks(len - k, k);
        self.right_shift(k);
        self.deposit_chunks(0, k, &wrapped);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> BitSet {
        (0..len).map(|i| i % 3 == 0).collect()
    }

    #[test]
    fn shifts_cross_word_boundaries() {
        let original = ramp(100);
        for k in [1, 31, 32, 33, 64, 70, 99] {
            let mut left = original.clone();
            left.left_shift(k);
            let mut right = original.clone();
            right.right_shift(k);
            for i in 0..100 {
                let expect_left = i + k < 100 && (i + k) % 3 == 0;
                let expect_right = i >= k && (i - k) % 3 == 0;
                assert_eq!(left.get(i), Some(expect_left), "left k={k} i={i}");
                assert_eq!(right.get(i), Some(expect_right), "right k={k} i={i}");
            }
        }
    }

    #[test]
    fn shift_by_len_clears() {
        let mut set = BitSet::filled(40, true);
        set.left_shift(40);
        assert!(set.none());
        assert_eq!(set.len(), 40);
    }

    #[test]
    fn rotate_wraps_bits() {
        let original = ramp(70);
        let mut set = original.clone();
        set.rotate_left(45);
        for i in 0..70 {
            assert_eq!(set.get(i), original.get((i + 45) % 70));
        }
        set.rotate_right(45);
        assert_eq!(set, original);
    }

    #[test]
    fn or_ignores_own_padding() {
        let mut a = BitSet::filled(3, true);
        let b = BitSet::filled(40, false);
        a.or_operation(&b);
        assert_eq!(a.len(), 40);
        assert_eq!(a.hamming_weight(), 3);
    }
}
