//! Conversion between bit sets and binary, hexadecimal and decimal text.
//!
//! Every text form lists bits in index order, so the first character always
//! describes bit 0. Numeric text is a conventional numeral, most significant
//! digit first, which puts the numeral's leading digit at bit 0.
//!
//! Decimal text has no fixed width. Parsing runs long division by 2 over an
//! explicit digit array and rendering runs Horner's doubling over another, so
//! both directions are exact for inputs of any length.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::{BitSet, BitSetBuilder, Error, Result};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// The bases accepted by [`BitSet::from_radix_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 2, digits `0` and `1`.
    Binary,
    /// Base 10, digits `0` to `9`.
    Decimal,
    /// Base 16, digits `0` to `9` and `a` to `f` in either case.
    Hexadecimal,
}

impl Radix {
    /// Maps a numeric base to a `Radix`; only 2, 10 and 16 are supported.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bitset::Radix;
    ///
    /// assert_eq!(Radix::from_base(16), Some(Radix::Hexadecimal));
    /// assert_eq!(Radix::from_base(8), None);
    /// ```
    #[must_use]
    pub const fn from_base(base: u32) -> Option<Self> {
        match base {
            2 => Some(Self::Binary),
            10 => Some(Self::Decimal),
            16 => Some(Self::Hexadecimal),
            _ => None,
        }
    }

    /// The numeric base.
    #[must_use]
    pub const fn base(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Binary => "binary",
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
        })
    }
}

/// Binary digits to bits, one bit per character. `_` is skipped when
/// `allow_separators` is set; `offset` is added to reported positions.
pub(crate) fn parse_binary(text: &str, allow_separators: bool, offset: usize) -> Result<BitSet> {
    let mut builder = BitSetBuilder::with_capacity(text.len().div_ceil(32));
    for (pos, ch) in text.char_indices() {
        match ch {
            '0' => builder.push_bit(false),
            '1' => builder.push_bit(true),
            '_' if allow_separators => {}
            _ => {
                return Err(Error::InvalidDigit {
                    ch,
                    pos: pos + offset,
                    radix: Radix::Binary,
                });
            }
        }
    }
    if builder.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(builder.finish())
}

fn parse_hex(text: &str) -> Result<BitSet> {
    let mut builder = BitSetBuilder::with_capacity((text.len() * 4).div_ceil(32));
    for (pos, ch) in text.char_indices() {
        let nibble = ch.to_digit(16).ok_or(Error::InvalidDigit {
            ch,
            pos,
            radix: Radix::Hexadecimal,
        })?;
        for shift in (0..4).rev() {
            builder.push_bit((nibble >> shift) & 1 != 0);
        }
    }
    Ok(builder.finish())
}

/// Divides a big-endian digit array by two in place and returns the
/// remainder. `start` skips leading zero digits and is advanced past any the
/// division creates.
fn halve(digits: &mut [u8], start: &mut usize) -> u8 {
    let mut rem = 0;
    for digit in &mut digits[*start..] {
        let cur = rem * 10 + *digit;
        *digit = cur / 2;
        rem = cur % 2;
    }
    while digits.get(*start) == Some(&0) {
        *start += 1;
    }
    rem
}

fn parse_decimal(text: &str) -> Result<BitSet> {
    let mut digits = text
        .char_indices()
        .map(|(pos, ch)| {
            ch.to_digit(10).map(|d| d as u8).ok_or(Error::InvalidDigit {
                ch,
                pos,
                radix: Radix::Decimal,
            })
        })
        .collect::<Result<Vec<u8>>>()?;

    let mut start = digits.iter().take_while(|&&d| d == 0).count();

    // Remainders come out least significant first.
    let mut remainders = Vec::with_capacity(digits.len() * 4);
    loop {
        remainders.push(halve(&mut digits, &mut start) != 0);
        if start == digits.len() {
            break;
        }
    }

    let mut builder = BitSetBuilder::with_capacity(remainders.len().div_ceil(32));
    for &bit in remainders.iter().rev() {
        builder.push_bit(bit);
    }
    Ok(builder.finish())
}

impl BitSet {
    /// Parses digit text in the given radix.
    ///
    /// Binary text yields one bit per digit and hexadecimal text four bits
    /// per digit, leading zeros included. Decimal text is converted exactly
    /// to its shortest binary numeral (a single 0 bit for zero). In every
    /// case the numeral's leading digit lands at bit 0.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if `text` is empty.
    /// - [`Error::InvalidDigit`] on the first character that is not a digit
    ///   of `radix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bitset::{BitSet, Radix};
    ///
    /// let set = BitSet::from_radix_str("1A", Radix::Hexadecimal)?;
    /// assert_eq!(set.to_binary_string(true), "00011010");
    ///
    /// let set = BitSet::from_radix_str("26", Radix::Decimal)?;
    /// assert_eq!(set.to_binary_string(true), "11010");
    /// assert_eq!(set.to_decimal_string(), "26");
    ///
    /// assert!(BitSet::from_radix_str("102", Radix::Binary).is_err());
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    pub fn from_radix_str(text: &str, radix: Radix) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }
        match radix {
            Radix::Binary => parse_binary(text, false, 0),
            Radix::Decimal => parse_decimal(text),
            Radix::Hexadecimal => parse_hex(text),
        }
    }

    /// Renders the bits as `0`/`1` characters in index order.
    ///
    /// With `include_leading_zeros` the result has exactly
    /// [`len`](Self::len) characters. Without it, leading `0`s are stripped
    /// and an empty or all-zero set renders as `"0"`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let set = BitSet::from_bools(&[false, false, true, false]);
    /// assert_eq!(set.to_binary_string(true), "0010");
    /// assert_eq!(set.to_binary_string(false), "10");
    /// assert_eq!(BitSet::new().to_binary_string(false), "0");
    /// ```
    #[must_use]
    pub fn to_binary_string(&self, include_leading_zeros: bool) -> String {
        let mut out: String = self.iter().map(|b| if b { '1' } else { '0' }).collect();
        if !include_leading_zeros {
            let zeros = out.bytes().take_while(|&b| b == b'0').count();
            if zeros == out.len() {
                return String::from("0");
            }
            out = out.split_off(zeros);
        }
        out
    }

    /// Renders the set as one uppercase hexadecimal numeral.
    ///
    /// The binary text without leading zeros is left-padded with `0`s to a
    /// multiple of four digits and read four bits per hex digit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::{BitSet, Radix};
    /// let set = BitSet::from_radix_str("000110101", Radix::Binary)?;
    /// assert_eq!(set.to_hex_string(), "35");
    /// assert_eq!(BitSet::new().to_hex_string(), "0");
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let binary = self.to_binary_string(false);
        let pad = (4 - binary.len() % 4) % 4;

        let mut out = String::with_capacity(binary.len().div_ceil(4));
        let mut nibble = 0usize;
        for (i, b) in core::iter::repeat_n(b'0', pad)
            .chain(binary.bytes())
            .enumerate()
        {
            nibble = (nibble << 1) | usize::from(b == b'1');
            if i % 4 == 3 {
                out.push(char::from(HEX_UPPER[nibble]));
                nibble = 0;
            }
        }
        out
    }

    /// Renders the set as one decimal numeral.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::{BitSet, Radix};
    /// let big = "340282366920938463463374607431768211457";
    /// let set = BitSet::from_radix_str(big, Radix::Decimal)?;
    /// assert_eq!(set.len(), 129);
    /// assert_eq!(set.to_decimal_string(), big);
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        // Little-endian decimal digits.
        let mut digits: Vec<u8> = alloc::vec![0];
        for bit in self.iter() {
            let mut carry = u8::from(bit);
            for digit in &mut digits {
                let v = *digit * 2 + carry;
                *digit = v % 10;
                carry = v / 10;
            }
            if carry != 0 {
                digits.push(carry);
            }
        }
        digits.iter().rev().map(|&d| char::from(b'0' + d)).collect()
    }

    /// One lowercase, 8-digit hexadecimal string per stored word, word 0
    /// first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let set = BitSet::from(&[0xdead_beef_u32, 0x1][..]);
    /// assert_eq!(set.hex_words(), ["deadbeef", "00000001"]);
    /// ```
    #[must_use]
    pub fn hex_words(&self) -> Vec<String> {
        self.logical_words()
            .map(|w| alloc::format!("{w:08x}"))
            .collect()
    }

    /// One decimal string per stored word, word 0 first.
    #[must_use]
    pub fn decimal_words(&self) -> Vec<String> {
        self.logical_words()
            .map(|w| alloc::format!("{w}"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halve_tracks_leading_zeros() {
        let mut digits = alloc::vec![1, 0];
        let mut start = 0;
        assert_eq!(halve(&mut digits, &mut start), 0);
        assert_eq!(digits, [0, 5]);
        assert_eq!(start, 1);
        assert_eq!(halve(&mut digits, &mut start), 1);
        assert_eq!(digits, [0, 2]);
    }

    #[test]
    fn decimal_zero_is_one_bit() {
        let set = parse_decimal("0").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.to_decimal_string(), "0");

        let set = parse_decimal("0007").unwrap();
        assert_eq!(set.to_binary_string(true), "111");
    }

    #[test]
    fn invalid_digits_report_radix_and_position() {
        assert_eq!(
            parse_hex("1g").unwrap_err(),
            Error::InvalidDigit {
                ch: 'g',
                pos: 1,
                radix: Radix::Hexadecimal,
            }
        );
        assert_eq!(
            parse_decimal("12a4").unwrap_err(),
            Error::InvalidDigit {
                ch: 'a',
                pos: 2,
                radix: Radix::Decimal,
            }
        );
        assert_eq!(
            parse_binary("1_0", false, 0).unwrap_err(),
            Error::InvalidDigit {
                ch: '_',
                pos: 1,
                radix: Radix::Binary,
            }
        );
        assert_eq!(parse_binary("__", true, 0).unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn hex_is_four_bits_per_digit() {
        let set = parse_hex("0f").unwrap();
        assert_eq!(set.len(), 8);
        assert_eq!(set.to_binary_string(true), "00001111");
        assert_eq!(set.to_hex_string(), "F");
    }
}
