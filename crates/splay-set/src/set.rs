use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::splay::splay;
use crate::types::{Arena, Links, Position};
use crate::util::{find, first, insert, join, last, next, prev};

fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Intrusive ordered set threaded through the `S`-side links of an arena.
///
/// The set owns no elements. It holds the root index, the element count and
/// the comparator; every operation that touches elements borrows the arena
/// explicitly. Lookups splay the last node they visit to the root, so they
/// take `&mut self` and `&mut A`.
///
/// Key uniqueness is the caller's business: [`link`](Self::link) happily
/// threads a duplicate key to the right of its equal.
pub struct SplaySet<S, K, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    root: Option<u32>,
    size: usize,
    comparator: C,
    _side: PhantomData<fn() -> (S, K)>,
}

impl<S, K: Ord> SplaySet<S, K, fn(&K, &K) -> Ordering> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<S, K: Ord> Default for SplaySet<S, K, fn(&K, &K) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, K, C> SplaySet<S, K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            size: 0,
            comparator,
            _side: PhantomData,
        }
    }

    #[inline]
    pub fn root(&self) -> Option<u32> {
        self.root
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn key_comp(&self) -> &C {
        &self.comparator
    }

    /// Forget every element. Links stored in the arena are left as they are;
    /// the caller is expected to discard or reset the elements.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Thread the detached element `node` into the tree and splay it to the
    /// root.
    pub fn link<A>(&mut self, arena: &mut A, node: u32) -> Position
    where
        A: Arena<S, Key = K> + ?Sized,
    {
        debug_assert!(arena.links(node).is_detached(), "node {node} is already linked");
        let root = insert(arena, self.root, node, &self.comparator);
        self.root = splay(arena, root, node);
        self.size += 1;
        Position::Node(node)
    }

    /// Remove `node` from the tree and hand its index back with cleared
    /// links. The element itself is untouched.
    pub fn unlink<A>(&mut self, arena: &mut A, node: u32) -> u32
    where
        A: Arena<S, Key = K> + ?Sized,
    {
        self.root = splay(arena, self.root, node);
        let Links { l, r, .. } = *arena.links(node);
        *arena.links_mut(node) = Links::new();
        self.root = join(arena, l, r);
        self.size -= 1;
        node
    }

    /// Position of the element equal to `key`, or the sentinel.
    pub fn find<A>(&mut self, arena: &mut A, key: &K) -> Position
    where
        A: Arena<S, Key = K> + ?Sized,
    {
        let mut curr = self.root;
        let mut visited = None;
        let mut found = None;
        while let Some(i) = curr {
            visited = Some(i);
            curr = match (self.comparator)(key, arena.key(i)) {
                Ordering::Less => arena.links(i).l,
                Ordering::Greater => arena.links(i).r,
                Ordering::Equal => {
                    found = Some(i);
                    break;
                }
            };
        }
        self.splay_visited(arena, visited);
        found.into()
    }

    /// First element not ordered before `key`.
    pub fn lower_bound<A>(&mut self, arena: &mut A, key: &K) -> Position
    where
        A: Arena<S, Key = K> + ?Sized,
    {
        self.bound(arena, key, Ordering::is_lt)
    }

    /// First element ordered after `key`.
    pub fn upper_bound<A>(&mut self, arena: &mut A, key: &K) -> Position
    where
        A: Arena<S, Key = K> + ?Sized,
    {
        self.bound(arena, key, Ordering::is_le)
    }

    /// Like [`find`](Self::find) but leaves the tree shape alone.
    pub fn get<A>(&self, arena: &A, key: &K) -> Position
    where
        A: Arena<S, Key = K> + ?Sized,
    {
        find(arena, self.root, key, &self.comparator).into()
    }

    pub fn begin<A>(&self, arena: &A) -> Position
    where
        A: Arena<S, Key = K> + ?Sized,
    {
        first(arena, self.root).into()
    }

    #[inline]
    pub fn end(&self) -> Position {
        Position::Sentinel
    }

    /// In-order successor. The successor of the maximum is the sentinel;
    /// the sentinel has no successor and maps to itself.
    pub fn next<A>(&self, arena: &A, pos: Position) -> Position
    where
        A: Arena<S, Key = K> + ?Sized,
    {
        match pos {
            Position::Node(idx) => next(arena, idx).into(),
            Position::Sentinel => Position::Sentinel,
        }
    }

    /// In-order predecessor. The predecessor of the sentinel is the maximum.
    pub fn prev<A>(&self, arena: &A, pos: Position) -> Position
    where
        A: Arena<S, Key = K> + ?Sized,
    {
        match pos {
            Position::Node(idx) => prev(arena, idx).into(),
            Position::Sentinel => last(arena, self.root).into(),
        }
    }

    /// Descend towards `key`, remembering the leftmost node for which
    /// `skip(node_key <=> key)` is false.
    fn bound<A>(&mut self, arena: &mut A, key: &K, skip: fn(Ordering) -> bool) -> Position
    where
        A: Arena<S, Key = K> + ?Sized,
    {
        let mut curr = self.root;
        let mut visited = None;
        let mut res = None;
        while let Some(i) = curr {
            visited = Some(i);
            curr = if skip((self.comparator)(arena.key(i), key)) {
                arena.links(i).r
            } else {
                res = Some(i);
                arena.links(i).l
            };
        }
        self.splay_visited(arena, visited);
        res.into()
    }

    fn splay_visited<A>(&mut self, arena: &mut A, visited: Option<u32>)
    where
        A: Arena<S, Key = K> + ?Sized,
    {
        if let Some(node) = visited {
            self.root = splay(arena, self.root, node);
        }
    }
}

impl<S, K, C> fmt::Debug for SplaySet<S, K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplaySet")
            .field("root", &self.root)
            .field("size", &self.size)
            .finish()
    }
}
