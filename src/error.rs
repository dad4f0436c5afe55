//! Error types.

use crate::codec::Radix;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A bit index or cursor position outside the valid range.
    IndexOutOfRange,
    /// Malformed input text, a forbidden splice, or mismatched operands.
    InvalidArgument,
    /// Two cursors that do not walk the same set with the same length.
    IncompatibleIterator,
    /// An operation a cursor in its current state cannot perform.
    LogicError,
}

/// Errors reported by [`BitSet`](crate::BitSet) and its cursors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A bit index at or beyond the logical length.
    #[error("bit index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Logical length at the time of the call
        len: usize,
    },

    /// A cursor was moved past its out-of-range boundary.
    #[error("cursor moved {by} position(s) past its boundary (valid bits: {max_valid_bits})")]
    CursorOutOfRange {
        /// How far beyond the boundary the move would have landed
        by: usize,
        /// Length the cursor was created with
        max_valid_bits: usize,
    },

    /// A character that is not a digit of the requested radix.
    #[error("invalid character '{ch}' at position {pos} in {radix} string")]
    InvalidDigit {
        /// The invalid character
        ch: char,
        /// Byte position of the character
        pos: usize,
        /// Radix being parsed
        radix: Radix,
    },

    /// An empty digit string.
    #[error("cannot parse bit set from empty string")]
    EmptyInput,

    /// An insertion that would leave a zero as the highest bit.
    #[error("cannot insert a zero at the most significant position (index {index})")]
    LeadingZeroAtMsb {
        /// Forward index the bit would have landed on
        index: usize,
    },

    /// An erase of bit 0 while it is the only set bit of a longer set.
    #[error("cannot erase the only set bit at the least significant position")]
    SoleLsbErase,

    /// Operands whose lengths must match but do not.
    #[error("length mismatch: {left} != {right}")]
    LengthMismatch {
        /// Length of the receiver
        left: usize,
        /// Length of the argument
        right: usize,
    },

    /// Cursors over different sets or different lengths.
    #[error("cursors do not refer to the same bit set")]
    IncompatibleIterator,

    /// A sentinel cursor was moved, read or written.
    #[error("sentinel cursor cannot be {0}")]
    SentinelIterator(&'static str),

    /// A cursor outside `0..max_valid_bits` was read or written.
    #[error("cursor is not positioned on a bit")]
    NotDereferenceable,
}

impl Error {
    /// Returns the broad class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. } | Self::CursorOutOfRange { .. } => {
                ErrorKind::IndexOutOfRange
            }
            Self::InvalidDigit { .. }
            | Self::EmptyInput
            | Self::LeadingZeroAtMsb { .. }
            | Self::SoleLsbErase
            | Self::LengthMismatch { .. } => ErrorKind::InvalidArgument,
            Self::IncompatibleIterator => ErrorKind::IncompatibleIterator,
            Self::SentinelIterator(_) | Self::NotDereferenceable => ErrorKind::LogicError,
        }
    }
}
