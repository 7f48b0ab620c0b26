use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use splay_set::Position;

use crate::side::{Left, Right, Side};

/// A position in one of the two orders of a [`Bimap`](crate::Bimap): either
/// a pair, or the past-the-end sentinel of that side.
///
/// Cursors are plain handles and borrow nothing; read and move them through
/// the bimap (`left`, `next_left`, ...). A cursor stays valid until the pair
/// it points at is erased. Lookups reshape the trees but never invalidate
/// cursors to other pairs.
pub struct Cursor<S: Side> {
    pos: Position,
    _side: PhantomData<fn() -> S>,
}

pub type LeftCursor = Cursor<Left>;
pub type RightCursor = Cursor<Right>;

impl<S: Side> Cursor<S> {
    #[inline]
    pub(crate) fn new(pos: Position) -> Self {
        Self {
            pos,
            _side: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn position(self) -> Position {
        self.pos
    }

    #[inline]
    pub(crate) fn node(self) -> Option<u32> {
        self.pos.node()
    }

    #[inline]
    pub fn is_end(self) -> bool {
        self.pos.is_sentinel()
    }

    /// The same pair seen from the other side. The end cursor of one side
    /// flips to the end cursor of the other.
    #[inline]
    pub fn flip(self) -> Cursor<S::Flipped> {
        Cursor::new(self.pos)
    }
}

impl<S: Side> Clone for Cursor<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Side> Copy for Cursor<S> {}

impl<S: Side> PartialEq for Cursor<S> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<S: Side> Eq for Cursor<S> {}

impl<S: Side> Hash for Cursor<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl<S: Side> fmt::Debug for Cursor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pos {
            Position::Node(idx) => write!(f, "Cursor({idx})"),
            Position::Sentinel => f.write_str("Cursor(end)"),
        }
    }
}
