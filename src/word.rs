//! The 32-bit storage unit of a [`BitSet`](crate::BitSet).

use core::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr},
};

/// A single 32-bit block of bits.
///
/// Every operation is total: bit indices are taken modulo 32 and shifts of 32
/// or more produce zero. Range checks against a set's logical length belong
/// to the caller.
///
/// # Examples
///
/// ```
/// use dynamic_bitset::Word;
///
/// let mut w = Word::new(0b1010);
/// w.set(true, 0);
/// assert_eq!(w.get(), 0b1011);
/// assert_eq!(w.count_bits(), 3);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Word(u32);

impl Word {
    /// Number of bits in a word.
    pub const BITS: usize = 32;

    /// A word with every bit cleared.
    pub const ZERO: Self = Self(0);

    /// A word with every bit set.
    pub const ONES: Self = Self(u32::MAX);

    /// Wraps a raw `u32`.
    #[must_use]
    #[inline(always)]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw `u32`.
    #[must_use]
    #[inline(always)]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Word with every bit equal to `value`.
    #[must_use]
    #[inline(always)]
    pub const fn splat(value: bool) -> Self {
        if value { Self::ONES } else { Self::ZERO }
    }

    /// `self &= other`.
    #[inline]
    pub fn and(&mut self, other: u32) {
        self.0 &= other;
    }

    /// `self |= other`.
    #[inline]
    pub fn or(&mut self, other: u32) {
        self.0 |= other;
    }

    /// `self ^= other`.
    #[inline]
    pub fn xor(&mut self, other: u32) {
        self.0 ^= other;
    }

    /// Complements every bit.
    #[inline]
    pub fn invert(&mut self) {
        self.0 = !self.0;
    }

    /// `self = !(self ^ other)`.
    #[inline]
    pub fn nxor(&mut self, other: u32) {
        self.0 = !(self.0 ^ other);
    }

    /// `self = !(self & other)`.
    #[inline]
    pub fn nand(&mut self, other: u32) {
        self.0 = !(self.0 & other);
    }

    /// `self = !(self | other)`.
    #[inline]
    pub fn nor(&mut self, other: u32) {
        self.0 = !(self.0 | other);
    }

    /// Shifts toward the high end; shifting by 32 or more clears the word.
    #[inline]
    pub fn shift_up(&mut self, shift: u32) {
        self.0 = self.0.checked_shl(shift).unwrap_or(0);
    }

    /// Shifts toward the low end; shifting by 32 or more clears the word.
    #[inline]
    pub fn shift_down(&mut self, shift: u32) {
        self.0 = self.0.checked_shr(shift).unwrap_or(0);
    }

    /// Sets every bit to `value`.
    #[inline]
    pub fn fill(&mut self, value: bool) {
        *self = Self::splat(value);
    }

    /// Sets bit `index % 32` to `value`.
    #[inline]
    pub fn set(&mut self, value: bool, index: usize) {
        let mask = 1u32 << (index & 31);
        if value {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }

    /// Complements bit `index % 32`.
    #[inline]
    pub fn flip(&mut self, index: usize) {
        self.0 ^= 1u32 << (index & 31);
    }

    /// Reads bit `index % 32`.
    #[must_use]
    #[inline]
    pub const fn bit(self, index: usize) -> bool {
        (self.0 >> (index & 31)) & 1 != 0
    }

    /// Population count using the SWAR reduction: pairs, nibbles, bytes,
    /// then halves, keeping the low six bits of the final sum.
    #[must_use]
    #[inline]
    pub const fn count_bits(self) -> usize {
        let mut n = self.0;
        n -= (n >> 1) & 0x5555_5555;
        n = (n & 0x3333_3333) + ((n >> 2) & 0x3333_3333);
        n = (n + (n >> 4)) & 0x0F0F_0F0F;
        n += n >> 8;
        n += n >> 16;
        (n & 0x3F) as usize
    }
}

impl From<u32> for Word {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<Word> for u32 {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:#010x})", self.0)
    }
}

impl fmt::Binary for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl BitAnd for Word {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Word {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Word {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Word {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Word {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Word {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Not for Word {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl Shl<u32> for Word {
    type Output = Self;

    #[inline]
    fn shl(mut self, rhs: u32) -> Self {
        self.shift_up(rhs);
        self
    }
}

impl Shr<u32> for Word {
    type Output = Self;

    #[inline]
    fn shr(mut self, rhs: u32) -> Self {
        self.shift_down(rhs);
        self
    }
}
