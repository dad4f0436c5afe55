//! Iterator implementations for `BitSet`.

use core::{
    borrow::Borrow,
    iter::{FromIterator, FusedIterator},
};

use crate::{
    BitSet, Word,
    macros::{bitpos, low_mask},
    storage::words_for,
};

/// An iterator over the bits of a [`BitSet`] as `bool`s, bit 0 first.
///
/// Created by [`BitSet::iter`].
pub type Bits<'a> = BitValues<&'a BitSet>;

/// An owning iterator over the bits of a [`BitSet`] as `bool`s.
///
/// Created by the [`IntoIterator`] implementation for [`BitSet`].
pub type IntoBits = BitValues<BitSet>;

/// An iterator over every logical bit of a set, yielding its value.
///
/// The generic parameter lets the same iterator borrow or own the set.
///
/// # Examples
///
/// ```
/// use dynamic_bitset::BitSet;
///
/// let set = BitSet::from_bools(&[true, false, true]);
/// let forward: Vec<bool> = set.iter().collect();
/// assert_eq!(forward, [true, false, true]);
///
/// let backward: Vec<bool> = set.iter().rev().collect();
/// assert_eq!(backward, [true, false, true]);
/// assert_eq!(set.iter().len(), 3);
/// ```
#[derive(Clone)]
pub struct BitValues<S: Borrow<BitSet>> {
    set: S,
    front: usize,
    back: usize,
}

impl<S: Borrow<BitSet>> BitValues<S> {
    fn new(set: S) -> Self {
        let back = set.borrow().len();
        Self {
            set,
            front: 0,
            back,
        }
    }

    #[inline]
    fn read(&self, index: usize) -> bool {
        let (wi, bi) = bitpos!(index);
        self.set.borrow().words[wi].bit(bi)
    }
}

impl<S: Borrow<BitSet>> Iterator for BitValues<S> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        let value = self.read(self.front);
        self.front += 1;
        Some(value)
    }

    fn nth(&mut self, n: usize) -> Option<bool> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<S: Borrow<BitSet>> DoubleEndedIterator for BitValues<S> {
    fn next_back(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.read(self.back))
    }
}

impl<S: Borrow<BitSet>> ExactSizeIterator for BitValues<S> {
    fn len(&self) -> usize {
        self.back.saturating_sub(self.front)
    }
}

impl<S: Borrow<BitSet>> FusedIterator for BitValues<S> {}

/// An iterator over the indices of set bits in a [`BitSet`].
///
/// This iterator is double-ended and skips over words that contain no set
/// bits. Created by [`BitSet::ones`].
///
/// # Examples
///
/// ```
/// use dynamic_bitset::BitSet;
///
/// let mut set = BitSet::filled(80, false);
/// set.set_bit(true, 5)?;
/// set.set_bit(true, 40)?;
/// set.set_bit(true, 79)?;
///
/// let indices: Vec<_> = set.ones().collect();
/// assert_eq!(indices, [5, 40, 79]);
///
/// let rev_indices: Vec<_> = set.ones().rev().collect();
/// assert_eq!(rev_indices, [79, 40, 5]);
/// # Ok::<(), dynamic_bitset::Error>(())
/// ```
#[derive(Clone)]
pub struct Ones<'a> {
    words: &'a [Word],
    pos: usize,  // next candidate (forward)
    rpos: usize, // one past the last candidate (reverse)
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.pos < self.rpos {
            let (mut wi, bi) = bitpos!(self.pos);
            let word = self.words[wi].get() >> bi;
            if word == 0 {
                wi += 1;
                while wi < self.words.len() && self.words[wi] == Word::ZERO {
                    wi += 1;
                }
                self.pos = wi * Word::BITS;
                continue;
            }

            let result = self.pos + word.trailing_zeros() as usize;
            if result >= self.rpos {
                self.pos = self.rpos;
                return None;
            }
            self.pos = result + 1;
            return Some(result);
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.rpos.saturating_sub(self.pos)))
    }
}

impl DoubleEndedIterator for Ones<'_> {
    fn next_back(&mut self) -> Option<usize> {
        while self.rpos > self.pos {
            let (wi, bi) = bitpos!(self.rpos - 1);
            let masked = self.words[wi].get() & low_mask!(bi + 1);

            if masked == 0 {
                self.rpos = wi * Word::BITS;
                continue;
            }

            let result = wi * Word::BITS + (31 - masked.leading_zeros() as usize);
            if result < self.pos {
                self.rpos = self.pos;
                return None;
            }
            self.rpos = result;
            return Some(result);
        }

        None
    }
}

impl FusedIterator for Ones<'_> {}

impl BitSet {
    /// Iterates over every bit as a `bool`, bit 0 first.
    #[must_use]
    pub fn iter(&self) -> Bits<'_> {
        BitValues::new(self)
    }

    /// Iterates over the indices of set bits in ascending order.
    #[must_use]
    pub fn ones(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            pos: 0,
            rpos: self.len,
        }
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type IntoIter = Bits<'a>;
    type Item = bool;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for BitSet {
    type IntoIter = IntoBits;
    type Item = bool;

    fn into_iter(self) -> Self::IntoIter {
        BitValues::new(self)
    }
}

impl FromIterator<bool> for BitSet {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<bool> for BitSet {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.words
            .reserve(words_for(self.len + lower).saturating_sub(self.words.len()));
        for bit in iter {
            self.push_back(bit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn ones_ignore_padding() {
        let set = BitSet::filled(37, true);
        assert_eq!(set.ones().count(), 37);
        assert_eq!(set.ones().next_back(), Some(36));
    }

    #[test]
    fn ones_meet_in_the_middle() {
        let set: BitSet = (0..100).map(|i| i % 7 == 0).collect();
        let mut it = set.ones();
        let mut seen = Vec::new();
        loop {
            match (it.next(), it.next_back()) {
                (Some(a), Some(b)) => {
                    seen.push(a);
                    seen.push(b);
                }
                (Some(a), None) | (None, Some(a)) => seen.push(a),
                (None, None) => break,
            }
        }
        seen.sort_unstable();
        let expected: Vec<_> = (0..100).filter(|i| i % 7 == 0).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn owned_iteration() {
        let set = BitSet::from_bools(&[false, true]);
        let bits: Vec<bool> = set.into_iter().rev().collect();
        assert_eq!(bits, [true, false]);
    }

    #[test]
    fn nth_skips() {
        let set = BitSet::from_bools(&[false, true, false, true]);
        let mut it = set.iter();
        assert_eq!(it.nth(3), Some(true));
        assert_eq!(it.next(), None);
        assert_eq!(set.iter().nth(10), None);
    }
}
