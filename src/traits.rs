//! Trait implementations for `BitSet`.

use crate::{BitSet, BitSetBuilder, Error, Word, codec::parse_binary};
use alloc::vec::Vec;
use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, Not, Shl,
        ShlAssign, Shr, ShrAssign,
    },
    str::FromStr,
};

impl Default for BitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BitSet {
    fn clone(&self) -> Self {
        Self {
            words: self.words.clone(),
            len: self.len,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.words.clone_from(&source.words);
        self.len = source.len;
    }
}

impl PartialEq for BitSet {
    /// Sets are equal when they have the same length and the same logical
    /// bits; padding and spare capacity are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.logical_words().eq(other.logical_words())
    }
}

impl Eq for BitSet {}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for word in self.logical_words() {
            word.hash(state);
        }
    }
}

impl Index<usize> for BitSet {
    type Output = bool;

    /// # Panics
    ///
    /// Panics if `index >= len()`; use [`BitSet::get`] for a checked read.
    fn index(&self, index: usize) -> &bool {
        match self.get(index) {
            Some(true) => &true,
            Some(false) => &false,
            None => panic!("bit index {index} out of range for length {}", self.len),
        }
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitSet")
            .field("len", &self.len)
            .field("bits", &format_args!("{}", self.to_binary_string(true)))
            .finish()
    }
}

impl fmt::Display for BitSet {
    /// Every bit in index order, leading zeros included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_binary_string(true))
    }
}

impl fmt::Binary for BitSet {
    /// The binary numeral without leading zeros; `{:#b}` adds `0b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bitset::BitSet;
    /// let set: BitSet = "00101".parse()?;
    /// assert_eq!(format!("{set:b}"), "101");
    /// assert_eq!(format!("{set:#b}"), "0b101");
    /// assert_eq!(format!("{set}"), "00101");
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        f.write_str(&self.to_binary_string(false))
    }
}

impl fmt::LowerHex for BitSet {
    /// # Examples
    ///
    /// ```
    /// use dynamic_bitset::{BitSet, Radix};
    ///
    /// let set = BitSet::from_radix_str("DEADBEEF", Radix::Hexadecimal)?;
    /// assert_eq!(format!("{set:x}"), "deadbeef");
    /// assert_eq!(format!("{set:#x}"), "0xdeadbeef");
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&self.to_hex_string().to_ascii_lowercase())
    }
}

impl fmt::UpperHex for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for BitSet {
    type Err = Error;

    /// Parses binary text, bit 0 first.
    ///
    /// The text may start with `0b` and may contain `_` separators.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if no digit is present,
    /// [`Error::InvalidDigit`] for any other character.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bitset::BitSet;
    ///
    /// let set: BitSet = "0b1010_0001".parse()?;
    /// assert_eq!(set.len(), 8);
    /// assert!(set.get_bit(0)?);
    /// assert!(set.get_bit(7)?);
    /// assert!("0b".parse::<BitSet>().is_err());
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix("0b") {
            Some(rest) => parse_binary(rest, true, 2),
            None => parse_binary(s, true, 0),
        }
    }
}

// ============================================================================
// Bitwise Operator Implementations
// ============================================================================

impl BitAnd for BitSet {
    type Output = Self;

    /// Bitwise AND; the result has the shorter length.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bitset::BitSet;
    ///
    /// let a: BitSet = "1101".parse()?;
    /// let b: BitSet = "011".parse()?;
    /// assert_eq!((a & b).to_string(), "010");
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    #[inline]
    fn bitand(mut self, rhs: Self) -> Self::Output {
        self.and_operation(&rhs);
        self
    }
}

impl BitAnd for &BitSet {
    type Output = BitSet;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.and_operation(rhs);
        result
    }
}

impl BitAndAssign for BitSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.and_operation(&rhs);
    }
}

impl BitAndAssign<&Self> for BitSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: &Self) {
        self.and_operation(rhs);
    }
}

impl BitOr for BitSet {
    type Output = Self;

    /// Bitwise OR; the result has the longer length.
    #[inline]
    fn bitor(mut self, rhs: Self) -> Self::Output {
        self.or_operation(&rhs);
        self
    }
}

impl BitOr for &BitSet {
    type Output = BitSet;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.or_operation(rhs);
        result
    }
}

impl BitOrAssign for BitSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.or_operation(&rhs);
    }
}

impl BitOrAssign<&Self> for BitSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: &Self) {
        self.or_operation(rhs);
    }
}

impl BitXor for BitSet {
    type Output = Self;

    /// Bitwise XOR; the result has the longer length.
    #[inline]
    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self.xor_operation(&rhs);
        self
    }
}

impl BitXor for &BitSet {
    type Output = BitSet;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.xor_operation(rhs);
        result
    }
}

impl BitXorAssign for BitSet {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.xor_operation(&rhs);
    }
}

impl BitXorAssign<&Self> for BitSet {
    #[inline]
    fn bitxor_assign(&mut self, rhs: &Self) {
        self.xor_operation(rhs);
    }
}

impl Not for BitSet {
    type Output = Self;

    /// Complements every logical bit and clears the padding.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bitset::BitSet;
    ///
    /// let set: BitSet = "100".parse()?;
    /// let inverted = !set;
    /// assert_eq!(inverted.to_string(), "011");
    /// assert_eq!(inverted.hamming_weight(), 2);
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    #[inline]
    fn not(mut self) -> Self::Output {
        self.not_operation();
        self.sanitize();
        self
    }
}

impl Not for &BitSet {
    type Output = BitSet;

    #[inline]
    fn not(self) -> Self::Output {
        !self.clone()
    }
}

impl Shl<usize> for BitSet {
    type Output = Self;

    /// Same as [`BitSet::left_shift`].
    #[inline]
    fn shl(mut self, k: usize) -> Self::Output {
        self.left_shift(k);
        self
    }
}

impl Shl<usize> for &BitSet {
    type Output = BitSet;

    #[inline]
    fn shl(self, k: usize) -> Self::Output {
        self.clone() << k
    }
}

impl ShlAssign<usize> for BitSet {
    #[inline]
    fn shl_assign(&mut self, k: usize) {
        self.left_shift(k);
    }
}

impl Shr<usize> for BitSet {
    type Output = Self;

    /// Same as [`BitSet::right_shift`].
    #[inline]
    fn shr(mut self, k: usize) -> Self::Output {
        self.right_shift(k);
        self
    }
}

impl Shr<usize> for &BitSet {
    type Output = BitSet;

    #[inline]
    fn shr(self, k: usize) -> Self::Output {
        self.clone() >> k
    }
}

impl ShrAssign<usize> for BitSet {
    #[inline]
    fn shr_assign(&mut self, k: usize) {
        self.right_shift(k);
    }
}

// ============================================================================
// From Implementations
// ============================================================================
//
// Integer conversions copy words verbatim, so bit 0 is the integer's least
// significant bit. The length is one past the highest set bit.

impl From<u32> for BitSet {
    /// # Examples
    ///
    /// ```
    /// use dynamic_bitset::BitSet;
    ///
    /// let set = BitSet::from(0b1011u32);
    /// assert_eq!(set.len(), 4);
    /// assert_eq!(set.ones().collect::<Vec<_>>(), [0, 1, 3]);
    /// assert!(BitSet::from(0u32).is_empty());
    /// ```
    fn from(value: u32) -> Self {
        Self::from(Word::new(value))
    }
}

impl From<u64> for BitSet {
    /// Low half becomes word 0, high half word 1.
    fn from(value: u64) -> Self {
        Self::from(&[value][..])
    }
}

impl From<Word> for BitSet {
    fn from(word: Word) -> Self {
        Self::from(&[word][..])
    }
}

impl From<&[Word]> for BitSet {
    fn from(words: &[Word]) -> Self {
        let mut builder = BitSetBuilder::with_capacity(words.len());
        builder.extend_from_slice(words);
        builder.finish_trimmed()
    }
}

impl From<&[u32]> for BitSet {
    fn from(words: &[u32]) -> Self {
        let mut builder = BitSetBuilder::with_capacity(words.len());
        for &word in words {
            builder.push_word(word);
        }
        builder.finish_trimmed()
    }
}

impl From<Vec<u32>> for BitSet {
    fn from(words: Vec<u32>) -> Self {
        Self::from(words.as_slice())
    }
}

impl From<&[u64]> for BitSet {
    /// Each `u64` contributes two words, low half first.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bitset::BitSet;
    ///
    /// let set = BitSet::from(&[1u64 << 40, 1][..]);
    /// assert_eq!(set.len(), 65);
    /// assert_eq!(set.ones().collect::<Vec<_>>(), [40, 64]);
    /// ```
    fn from(values: &[u64]) -> Self {
        let mut builder = BitSetBuilder::with_capacity(values.len() * 2);
        for &value in values {
            builder.push_word(value as u32);
            builder.push_word((value >> 32) as u32);
        }
        builder.finish_trimmed()
    }
}

impl From<&[bool]> for BitSet {
    fn from(bools: &[bool]) -> Self {
        Self::from_bools(bools)
    }
}

impl From<BitSet> for Vec<Word> {
    fn from(mut set: BitSet) -> Self {
        set.sanitize();
        set.words
    }
}

impl AsRef<[Word]> for BitSet {
    fn as_ref(&self) -> &[Word] {
        self.words()
    }
}
