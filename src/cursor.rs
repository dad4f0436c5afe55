//! Bidirectional, random-access cursors over the bits of a [`BitSet`].
//!
//! A cursor walks positions `Before < At(0) < ... < At(len - 1) < After`.
//! Forward cursors start at `At(0)` and use `After` as their out-of-range
//! state; reverse cursors start at `At(len - 1)` and use `Before`. Moving a
//! cursor exactly onto its out-of-range state is allowed, moving it further
//! is an error.
//!
//! The `end`/`rend` cursors are sentinels: they compare with other cursors
//! but cannot be moved, read or written.

use core::{cmp::Ordering, fmt, marker::PhantomData, ptr};

use crate::{BitRef, BitSet, Error, Result};

/// Where a cursor points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    /// One before bit 0; the end state of reverse cursors.
    Before,
    /// On bit `i`.
    At(usize),
    /// One past the last bit; the end state of forward cursors.
    After,
}

/// Walking direction of a cursor; implemented by [`Forward`] and
/// [`Reverse`].
pub trait Direction {
    /// `true` if advancing moves toward higher indices.
    const FORWARD: bool;
}

/// Advancing moves toward higher indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Forward;

/// Advancing moves toward lower indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reverse;

impl Direction for Forward {
    const FORWARD: bool = true;
}

impl Direction for Reverse {
    const FORWARD: bool = false;
}

/// Position bookkeeping shared by every cursor kind.
///
/// Positions are stored as slots: `Before` is 0, `At(i)` is `i + 1`, `After`
/// is `max_valid_bits + 1`.
struct CursorState<D> {
    max_valid_bits: usize,
    slot: usize,
    sentinel: bool,
    _dir: PhantomData<D>,
}

impl<D> Clone for CursorState<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for CursorState<D> {}

impl<D: Direction> CursorState<D> {
    const fn start(max_valid_bits: usize) -> Self {
        let slot = if D::FORWARD { 1 } else { max_valid_bits };
        Self {
            max_valid_bits,
            slot,
            sentinel: false,
            _dir: PhantomData,
        }
    }

    const fn sentinel(max_valid_bits: usize) -> Self {
        let slot = if D::FORWARD { max_valid_bits + 1 } else { 0 };
        Self {
            max_valid_bits,
            slot,
            sentinel: true,
            _dir: PhantomData,
        }
    }

    const fn position(&self) -> Position {
        match self.slot {
            0 => Position::Before,
            s if s <= self.max_valid_bits => Position::At(s - 1),
            _ => Position::After,
        }
    }

    /// Lowest and highest slot this direction may occupy.
    const fn bounds(&self) -> (usize, usize) {
        if D::FORWARD {
            (1, self.max_valid_bits + 1)
        } else {
            (0, self.max_valid_bits)
        }
    }

    /// Steps taken from the start position; sentinels sit at
    /// `max_valid_bits`.
    const fn progress(&self) -> usize {
        if D::FORWARD {
            self.slot - 1
        } else {
            self.max_valid_bits - self.slot
        }
    }

    fn step(&mut self, n: usize, forward: bool) -> Result<()> {
        if self.sentinel {
            return Err(Error::SentinelIterator("moved"));
        }
        let (lo, hi) = self.bounds();
        let toward_high = forward == D::FORWARD;
        let room = if toward_high {
            hi - self.slot
        } else {
            self.slot - lo
        };
        if n > room {
            return Err(Error::CursorOutOfRange {
                by: n - room,
                max_valid_bits: self.max_valid_bits,
            });
        }
        if toward_high {
            self.slot += n;
        } else {
            self.slot -= n;
        }
        Ok(())
    }

    fn index(&self, action: &'static str) -> Result<usize> {
        if self.sentinel {
            return Err(Error::SentinelIterator(action));
        }
        match self.position() {
            Position::At(i) => Ok(i),
            _ => Err(Error::NotDereferenceable),
        }
    }
}

/// A read-only cursor over a [`BitSet`].
///
/// Created by [`BitSet::begin`], [`BitSet::end`] and, as [`RevCursor`], by
/// [`BitSet::rbegin`] and [`BitSet::rend`].
///
/// # Examples
///
/// ```
/// use dynamic_bitset::{BitSet, Position};
///
/// let set: BitSet = "0110".parse()?;
/// let mut cursor = set.begin();
/// cursor.advance(2)?;
/// assert_eq!(cursor.position(), Position::At(2));
/// assert!(cursor.get()?);
///
/// cursor.advance(2)?;
/// assert_eq!(cursor, set.end());
/// assert!(cursor.get().is_err());
/// assert!(cursor.advance(1).is_err());
/// # Ok::<(), dynamic_bitset::Error>(())
/// ```
pub struct Cursor<'a, D: Direction = Forward> {
    set: &'a BitSet,
    state: CursorState<D>,
}

/// A read-only cursor walking from the highest bit down.
pub type RevCursor<'a> = Cursor<'a, Reverse>;

impl<'a, D: Direction> Cursor<'a, D> {
    const fn start(set: &'a BitSet) -> Self {
        Self {
            set,
            state: CursorState::start(set.len),
        }
    }

    const fn sentinel(set: &'a BitSet) -> Self {
        Self {
            set,
            state: CursorState::sentinel(set.len),
        }
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.state.position()
    }

    /// Length of the set when the cursor was created.
    #[must_use]
    pub const fn max_valid_bits(&self) -> usize {
        self.state.max_valid_bits
    }

    /// Returns `true` for the `end`/`rend` cursors.
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        self.state.sentinel
    }

    /// Reads the bit under the cursor.
    ///
    /// # Errors
    ///
    /// [`Error::SentinelIterator`] for a sentinel,
    /// [`Error::NotDereferenceable`] when not on a bit.
    pub fn get(&self) -> Result<bool> {
        let index = self.state.index("dereferenced")?;
        self.set.get_bit(index)
    }

    /// Moves `n` steps in the cursor's direction.
    ///
    /// # Errors
    ///
    /// [`Error::CursorOutOfRange`] when the move would pass the end state,
    /// [`Error::SentinelIterator`] for a sentinel. The cursor is unchanged on
    /// error.
    pub fn advance(&mut self, n: usize) -> Result<()> {
        self.state.step(n, true)
    }

    /// Moves `n` steps against the cursor's direction.
    ///
    /// # Errors
    ///
    /// As [`advance`](Self::advance).
    pub fn retreat(&mut self, n: usize) -> Result<()> {
        self.state.step(n, false)
    }

    /// Single-step [`advance`](Self::advance).
    ///
    /// # Errors
    ///
    /// As [`advance`](Self::advance).
    pub fn offset_up(&mut self) -> Result<()> {
        self.advance(1)
    }

    /// Single-step [`retreat`](Self::retreat).
    ///
    /// # Errors
    ///
    /// As [`advance`](Self::advance).
    pub fn offset_down(&mut self) -> Result<()> {
        self.retreat(1)
    }

    fn check_compatible(&self, other: &Self) -> Result<()> {
        if ptr::eq(self.set, other.set) && self.max_valid_bits() == other.max_valid_bits() {
            Ok(())
        } else {
            Err(Error::IncompatibleIterator)
        }
    }

    /// Compares positions.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleIterator`] if the cursors walk different sets or
    /// were created for different lengths.
    pub fn try_eq(&self, other: &Self) -> Result<bool> {
        self.check_compatible(other)?;
        Ok(self.state.slot == other.state.slot)
    }

    /// Orders cursors by how far they have travelled in their direction.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleIterator`], as for [`try_eq`](Self::try_eq).
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        self.check_compatible(other)?;
        Ok(self.state.progress().cmp(&other.state.progress()))
    }

    /// Number of advances that take `self` to `other`; negative when `other`
    /// is behind.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleIterator`], as for [`try_eq`](Self::try_eq).
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynamic_bitset::BitSet;
    /// let set = BitSet::filled(10, false);
    /// assert_eq!(set.begin().distance(&set.end())?, 10);
    /// assert_eq!(set.rend().distance(&set.rbegin())?, -10);
    /// assert!(set.begin().distance(&BitSet::new().end()).is_err());
    /// # Ok::<(), dynamic_bitset::Error>(())
    /// ```
    pub fn distance(&self, other: &Self) -> Result<isize> {
        self.check_compatible(other)?;
        let (from, to) = (self.state.progress(), other.state.progress());
        Ok(if to >= from {
            (to - from) as isize
        } else {
            -((from - to) as isize)
        })
    }
}

impl<D: Direction> Clone for Cursor<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Direction> Copy for Cursor<'_, D> {}

impl<D: Direction> PartialEq for Cursor<'_, D> {
    fn eq(&self, other: &Self) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl<D: Direction> PartialOrd for Cursor<'_, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl<D: Direction> fmt::Debug for Cursor<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(if D::FORWARD { "Cursor" } else { "RevCursor" })
            .field("position", &self.position())
            .field("max_valid_bits", &self.max_valid_bits())
            .field("sentinel", &self.is_sentinel())
            .finish()
    }
}

/// A cursor that can also write the bit under it.
///
/// # Examples
///
/// ```
/// use dynamic_bitset::BitSet;
///
/// let mut set = BitSet::filled(6, false);
/// let mut cursor = set.begin_mut();
/// while cursor.as_cursor() != cursor.sentinel() {
///     let at_even = matches!(cursor.position(), dynamic_bitset::Position::At(i) if i % 2 == 0);
///     cursor.set(at_even)?;
///     cursor.offset_up()?;
/// }
/// assert_eq!(set.to_binary_string(true), "101010");
/// # Ok::<(), dynamic_bitset::Error>(())
/// ```
pub struct CursorMut<'a, D: Direction = Forward> {
    set: &'a mut BitSet,
    state: CursorState<D>,
}

/// A mutable cursor walking from the highest bit down.
pub type RevCursorMut<'a> = CursorMut<'a, Reverse>;

impl<'a, D: Direction> CursorMut<'a, D> {
    fn start(set: &'a mut BitSet) -> Self {
        let state = CursorState::start(set.len);
        Self { set, state }
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.state.position()
    }

    /// Length of the set when the cursor was created.
    #[must_use]
    pub const fn max_valid_bits(&self) -> usize {
        self.state.max_valid_bits
    }

    /// A read-only view at the same position.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, D> {
        Cursor {
            set: &*self.set,
            state: self.state,
        }
    }

    /// The read-only end sentinel for this direction, comparable with
    /// [`as_cursor`](Self::as_cursor).
    #[must_use]
    pub fn sentinel(&self) -> Cursor<'_, D> {
        Cursor::sentinel(&*self.set)
    }

    /// Reads the bit under the cursor.
    ///
    /// # Errors
    ///
    /// [`Error::NotDereferenceable`] when not on a bit.
    pub fn get(&self) -> Result<bool> {
        self.as_cursor().get()
    }

    /// Writes the bit under the cursor.
    ///
    /// # Errors
    ///
    /// [`Error::NotDereferenceable`] when not on a bit.
    pub fn set(&mut self, value: bool) -> Result<()> {
        self.bit_mut()?.set(value);
        Ok(())
    }

    /// Complements the bit under the cursor.
    ///
    /// # Errors
    ///
    /// [`Error::NotDereferenceable`] when not on a bit.
    pub fn flip(&mut self) -> Result<()> {
        self.bit_mut()?.flip();
        Ok(())
    }

    /// Borrows the bit under the cursor.
    ///
    /// # Errors
    ///
    /// [`Error::NotDereferenceable`] when not on a bit.
    pub fn bit_mut(&mut self) -> Result<BitRef<'_>> {
        let index = self.state.index("assigned")?;
        self.set.bit_mut(index)
    }

    /// Moves `n` steps in the cursor's direction.
    ///
    /// # Errors
    ///
    /// [`Error::CursorOutOfRange`] when the move would pass the end state.
    pub fn advance(&mut self, n: usize) -> Result<()> {
        self.state.step(n, true)
    }

    /// Moves `n` steps against the cursor's direction.
    ///
    /// # Errors
    ///
    /// [`Error::CursorOutOfRange`] when the move would pass the end state.
    pub fn retreat(&mut self, n: usize) -> Result<()> {
        self.state.step(n, false)
    }

    /// Single-step [`advance`](Self::advance).
    ///
    /// # Errors
    ///
    /// As [`advance`](Self::advance).
    pub fn offset_up(&mut self) -> Result<()> {
        self.advance(1)
    }

    /// Single-step [`retreat`](Self::retreat).
    ///
    /// # Errors
    ///
    /// As [`retreat`](Self::retreat).
    pub fn offset_down(&mut self) -> Result<()> {
        self.retreat(1)
    }
}

impl<D: Direction> fmt::Debug for CursorMut<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(if D::FORWARD { "CursorMut" } else { "RevCursorMut" })
            .field("position", &self.position())
            .field("max_valid_bits", &self.max_valid_bits())
            .finish()
    }
}

impl BitSet {
    /// Forward cursor on bit 0; equal to [`end`](Self::end) when empty.
    #[must_use]
    pub const fn begin(&self) -> Cursor<'_> {
        Cursor::start(self)
    }

    /// Forward sentinel one past the last bit.
    #[must_use]
    pub const fn end(&self) -> Cursor<'_> {
        Cursor::sentinel(self)
    }

    /// Reverse cursor on the highest bit; equal to [`rend`](Self::rend) when
    /// empty.
    #[must_use]
    pub const fn rbegin(&self) -> RevCursor<'_> {
        Cursor::start(self)
    }

    /// Reverse sentinel one before bit 0.
    #[must_use]
    pub const fn rend(&self) -> RevCursor<'_> {
        Cursor::sentinel(self)
    }

    /// Mutable forward cursor on bit 0.
    pub fn begin_mut(&mut self) -> CursorMut<'_> {
        CursorMut::start(self)
    }

    /// Mutable reverse cursor on the highest bit.
    pub fn rbegin_mut(&mut self) -> RevCursorMut<'_> {
        CursorMut::start(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_map_to_positions() {
        let set = BitSet::filled(3, false);
        let mut fwd = set.begin();
        assert_eq!(fwd.position(), Position::At(0));
        fwd.advance(3).unwrap();
        assert_eq!(fwd.position(), Position::After);
        assert_eq!(
            fwd.advance(2),
            Err(Error::CursorOutOfRange {
                by: 2,
                max_valid_bits: 3,
            })
        );
        fwd.retreat(3).unwrap();
        assert_eq!(fwd.position(), Position::At(0));
        assert!(fwd.retreat(1).is_err());

        let mut rev = set.rbegin();
        assert_eq!(rev.position(), Position::At(2));
        rev.advance(3).unwrap();
        assert_eq!(rev.position(), Position::Before);
        assert_eq!(rev, set.rend());
        assert!(rev.advance(1).is_err());
    }

    #[test]
    fn empty_set_begin_is_end() {
        let set = BitSet::new();
        assert_eq!(set.begin(), set.end());
        assert_eq!(set.rbegin(), set.rend());
        assert_eq!(set.begin().get(), Err(Error::NotDereferenceable));
    }

    #[test]
    fn sentinel_rejects_moves() {
        let set = BitSet::filled(4, true);
        let mut end = set.end();
        assert_eq!(end.retreat(1), Err(Error::SentinelIterator("moved")));
        assert_eq!(end.get(), Err(Error::SentinelIterator("dereferenced")));
    }

    #[test]
    fn incompatible_cursors() {
        let a = BitSet::filled(4, true);
        let b = BitSet::filled(4, true);
        assert_eq!(a.begin().try_eq(&b.begin()), Err(Error::IncompatibleIterator));
        assert!(a.begin() != b.begin());
        assert_eq!(a.begin().partial_cmp(&b.begin()), None);
        assert!(a.begin() < a.end());
        assert!(a.rbegin() < a.rend());
    }
}
