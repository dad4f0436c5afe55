//! A growable bit set packed into 32-bit words.
//!
//! This crate provides [`BitSet`], an arbitrary-length sequence of bits with
//! bitwise algebra, shifts and rotations, positional insertion and removal,
//! random-access cursors and exact conversion to and from binary,
//! hexadecimal and decimal text of any length.
//!
//! # Features
//!
//! - **Word-packed storage** with an explicit logical length
//! - **Bitwise operators** (`&`, `|`, `^`, `!`, `<<`, `>>`) over sets of
//!   different lengths
//! - **Positional mutation** that carries bits across word boundaries
//! - **Cursors** in both directions, read-only or mutable, with checked
//!   movement
//! - **Arbitrary-precision text**: decimal numerals of hundreds of digits
//!   convert exactly
//! - **Serialization support** via serde (optional)
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use dynamic_bitset::{BitSet, Radix};
//!
//! // Bits listed in index order, bit 0 first.
//! let mut set: BitSet = "1011".parse()?;
//! set.push_back(true);
//! assert_eq!(set.to_string(), "10111");
//!
//! // Positional edits move the bits above them.
//! set.insert(false, 1)?;
//! assert_eq!(set.to_string(), "100111");
//! set.erase(0)?;
//! assert_eq!(set.to_string(), "00111");
//!
//! // Numeric text reads as a conventional numeral.
//! let n = BitSet::from_radix_str("1000000000000000000000", Radix::Decimal)?;
//! assert_eq!(n.to_decimal_string(), "1000000000000000000000");
//! assert_eq!(n.to_hex_string(), "3635C9ADC5DEA00000");
//!
//! // Walk it with a cursor.
//! let mut cursor = n.begin();
//! let mut ones = 0;
//! while cursor != n.end() {
//!     ones += usize::from(cursor.get()?);
//!     cursor.offset_up()?;
//! }
//! assert_eq!(ones, n.hamming_weight());
//! # Ok::<(), dynamic_bitset::Error>(())
//! ```
//!
//! # Bit order
//!
//! Bit `i` is stored in word `i / 32` at offset `i % 32`. Text lists bits in
//! index order, so a numeral's leading digit is bit 0. Conversions from
//! integers copy words as they are, so there bit 0 is the integer's least
//! significant bit.
//!
//! # Logging
//!
//! Storage reallocation (`resize`, `shrink_to_fit`, `clear`) emits `debug`
//! events and whole-set shifts emit `trace` events through [`tracing`]. The
//! crate never installs a subscriber.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod bitset;
mod codec;
mod cursor;
mod error;
mod iter;
mod macros;
mod mutation;
mod reference;
mod set_ops;
pub mod storage;
pub mod traits;
mod word;

#[cfg(feature = "serde")]
pub mod ser;

// Re-exports
pub use bitset::BitSet;
pub use codec::Radix;
pub use cursor::{
    Cursor, CursorMut, Direction, Forward, Position, RevCursor, RevCursorMut, Reverse,
};
pub use error::{Error, ErrorKind, Result};
pub use iter::{BitValues, Bits, IntoBits, Ones};
pub use reference::BitRef;
pub use storage::BitSetBuilder;
pub use word::Word;
