//! Link and arena abstractions.
//!
//! An element never lives inside the tree. It lives in a caller-owned arena
//! and is addressed by a `u32` index; every tree the element participates in
//! gets its own [`Links`] triple embedded in the element. The side tag `S`
//! selects which triple a tree uses, so a single arena can back several
//! independent trees over the same elements.

/// Parent / left-child / right-child links of one element in one tree.
///
/// `p == None` means the element hangs directly under the sentinel: it is
/// either the root or not linked at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Links {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
}

impl Links {
    /// An unlinked triple.
    pub const fn new() -> Self {
        Self {
            p: None,
            l: None,
            r: None,
        }
    }

    pub fn is_detached(&self) -> bool {
        self.p.is_none() && self.l.is_none() && self.r.is_none()
    }
}

/// A place in a tree: an element, or the sentinel.
///
/// The sentinel carries no key. It is the past-the-end position and the
/// virtual parent of the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    Node(u32),
    Sentinel,
}

impl Position {
    #[inline]
    pub fn node(self) -> Option<u32> {
        match self {
            Position::Node(idx) => Some(idx),
            Position::Sentinel => None,
        }
    }

    #[inline]
    pub fn is_sentinel(self) -> bool {
        matches!(self, Position::Sentinel)
    }
}

impl From<Option<u32>> for Position {
    fn from(idx: Option<u32>) -> Self {
        idx.map_or(Position::Sentinel, Position::Node)
    }
}

/// Storage capable of backing a tree tagged `S`.
///
/// Implementors expose the `S`-side link triple and the `S`-side key of every
/// live element. Indices handed to these methods always refer to elements the
/// tree has linked, or to the element currently being linked.
pub trait Arena<S> {
    type Key;

    fn links(&self, idx: u32) -> &Links;
    fn links_mut(&mut self, idx: u32) -> &mut Links;
    fn key(&self, idx: u32) -> &Self::Key;
}

/// An element type that embeds the `S`-side links itself.
///
/// `Vec<N>` of such elements is an [`Arena<S>`] out of the box.
pub trait Node<S> {
    type Key;

    fn links(&self) -> &Links;
    fn links_mut(&mut self) -> &mut Links;
    fn key(&self) -> &Self::Key;
}

impl<S, N: Node<S>> Arena<S> for Vec<N> {
    type Key = N::Key;

    #[inline]
    fn links(&self, idx: u32) -> &Links {
        self[idx as usize].links()
    }

    #[inline]
    fn links_mut(&mut self, idx: u32) -> &mut Links {
        self[idx as usize].links_mut()
    }

    #[inline]
    fn key(&self, idx: u32) -> &N::Key {
        self[idx as usize].key()
    }
}
