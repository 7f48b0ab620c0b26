use std::cmp::Ordering;
use std::fmt;
use std::mem;

use splay_set::{Position, SplaySet};

use crate::cursor::{Cursor, LeftCursor, RightCursor};
use crate::error::BimapError;
use crate::iter::Iter;
use crate::node::Pool;
use crate::side::{Left, Right};

fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Ordered bijection between left keys `L` and right keys `R`.
///
/// Every pair lives in one pool node that is threaded into two splay trees
/// at once: one ordered by `CL` over the left keys, one ordered by `CR` over
/// the right keys. A left key and a right key each appear in at most one
/// pair.
///
/// Keyed lookups (`find_*`, `*_bound_*`, `at_*`) splay the touched node and
/// therefore take `&mut self`. `get_*`, `contains_*` and the iterators are
/// read-only.
pub struct Bimap<L, R, CL = fn(&L, &L) -> Ordering, CR = fn(&R, &R) -> Ordering>
where
    CL: Fn(&L, &L) -> Ordering,
    CR: Fn(&R, &R) -> Ordering,
{
    pool: Pool<L, R>,
    left: SplaySet<Left, L, CL>,
    right: SplaySet<Right, R, CR>,
}

impl<L: Ord, R: Ord> Bimap<L, R> {
    pub fn new() -> Self {
        Self::with_comparators(default_comparator::<L>, default_comparator::<R>)
    }
}

impl<L: Ord, R: Ord> Default for Bimap<L, R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases a freshly allocated node if linking it unwinds, first unlinking
/// it from the left tree when that link already went through.
struct Rollback<'a, L, R, CL, CR>
where
    CL: Fn(&L, &L) -> Ordering,
    CR: Fn(&R, &R) -> Ordering,
{
    map: &'a mut Bimap<L, R, CL, CR>,
    node: u32,
    left_linked: bool,
}

impl<L, R, CL, CR> Rollback<'_, L, R, CL, CR>
where
    CL: Fn(&L, &L) -> Ordering,
    CR: Fn(&R, &R) -> Ordering,
{
    fn disarm(self) {
        mem::forget(self);
    }
}

impl<L, R, CL, CR> Drop for Rollback<'_, L, R, CL, CR>
where
    CL: Fn(&L, &L) -> Ordering,
    CR: Fn(&R, &R) -> Ordering,
{
    fn drop(&mut self) {
        let map = &mut *self.map;
        if self.left_linked {
            map.left.unlink(&mut map.pool, self.node);
        }
        map.pool.release(self.node);
    }
}

impl<L, R, CL, CR> Bimap<L, R, CL, CR>
where
    CL: Fn(&L, &L) -> Ordering,
    CR: Fn(&R, &R) -> Ordering,
{
    pub fn with_comparators(compare_left: CL, compare_right: CR) -> Self {
        Self {
            pool: Pool::new(),
            left: SplaySet::with_comparator(compare_left),
            right: SplaySet::with_comparator(compare_right),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.left.len(), self.right.len());
        debug_assert_eq!(self.left.len(), self.pool.live());
        self.left.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn key_comp_left(&self) -> &CL {
        self.left.key_comp()
    }

    pub fn key_comp_right(&self) -> &CR {
        self.right.key_comp()
    }

    // ── insertion ─────────────────────────────────────────────────────────

    /// Add the pair `(left, right)`.
    ///
    /// Returns a cursor to the new pair, or [`end_left`](Self::end_left) when
    /// `left` or `right` is already paired; the arguments are dropped then.
    pub fn insert(&mut self, left: L, right: R) -> LeftCursor {
        if !self.left.find(&mut self.pool, &left).is_sentinel()
            || !self.right.find(&mut self.pool, &right).is_sentinel()
        {
            return self.end_left();
        }
        let node = self.pool.alloc(left, right);
        self.link_both(node)
    }

    /// Thread a freshly allocated node into both trees. Both keys must be
    /// absent.
    fn link_both(&mut self, node: u32) -> LeftCursor {
        let mut guard = Rollback {
            map: self,
            node,
            left_linked: false,
        };
        let pos = guard.map.left.link(&mut guard.map.pool, node);
        guard.left_linked = true;
        guard.map.right.link(&mut guard.map.pool, node);
        guard.disarm();
        Cursor::new(pos)
    }

    // ── removal ───────────────────────────────────────────────────────────

    fn erase_node(&mut self, node: u32) -> (L, R) {
        self.left.unlink(&mut self.pool, node);
        self.right.unlink(&mut self.pool, node);
        self.pool.release(node).into_pair()
    }

    /// Remove the pair under `it` and return the cursor that followed it in
    /// left order. `it` must point at a live pair.
    pub fn erase_left(&mut self, it: LeftCursor) -> LeftCursor {
        debug_assert!(!it.is_end(), "erase_left called with the end cursor");
        let Some(node) = it.node() else {
            return it;
        };
        let next = self.left.next(&self.pool, it.position());
        self.erase_node(node);
        Cursor::new(next)
    }

    /// Remove the pair under `it` and return the cursor that followed it in
    /// right order. `it` must point at a live pair.
    pub fn erase_right(&mut self, it: RightCursor) -> RightCursor {
        debug_assert!(!it.is_end(), "erase_right called with the end cursor");
        let Some(node) = it.node() else {
            return it;
        };
        let next = self.right.next(&self.pool, it.position());
        self.erase_node(node);
        Cursor::new(next)
    }

    /// Remove the pair whose left key is `key`. Returns whether one existed.
    pub fn erase_left_key(&mut self, key: &L) -> bool {
        match self.left.find(&mut self.pool, key).node() {
            Some(node) => {
                self.erase_node(node);
                true
            }
            None => false,
        }
    }

    /// Remove the pair whose right key is `key`. Returns whether one existed.
    pub fn erase_right_key(&mut self, key: &R) -> bool {
        match self.right.find(&mut self.pool, key).node() {
            Some(node) => {
                self.erase_node(node);
                true
            }
            None => false,
        }
    }

    /// Remove every pair in `[first, last)` of the left order. Returns `last`.
    pub fn erase_left_range(&mut self, mut first: LeftCursor, last: LeftCursor) -> LeftCursor {
        while first != last && !first.is_end() {
            first = self.erase_left(first);
        }
        last
    }

    /// Remove every pair in `[first, last)` of the right order. Returns `last`.
    pub fn erase_right_range(&mut self, mut first: RightCursor, last: RightCursor) -> RightCursor {
        while first != last && !first.is_end() {
            first = self.erase_right(first);
        }
        last
    }

    /// Destroy every pair. Comparators are kept.
    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
        self.pool.clear();
    }

    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    // ── keyed lookups ─────────────────────────────────────────────────────

    pub fn find_left(&mut self, key: &L) -> LeftCursor {
        Cursor::new(self.left.find(&mut self.pool, key))
    }

    pub fn find_right(&mut self, key: &R) -> RightCursor {
        Cursor::new(self.right.find(&mut self.pool, key))
    }

    /// The right key paired with `key`.
    pub fn at_left(&mut self, key: &L) -> Result<&R, BimapError> {
        match self.find_left(key).node() {
            Some(node) => Ok(&self.pool.get(node).right),
            None => Err(BimapError::KeyNotFound),
        }
    }

    /// The left key paired with `key`.
    pub fn at_right(&mut self, key: &R) -> Result<&L, BimapError> {
        match self.find_right(key).node() {
            Some(node) => Ok(&self.pool.get(node).left),
            None => Err(BimapError::KeyNotFound),
        }
    }

    /// The right key paired with `key`, pairing `key` with `R::default()`
    /// first if it has no partner.
    ///
    /// When the default right key already belongs to another pair, that pair
    /// is erased before the new one is formed.
    pub fn at_left_or_default(&mut self, key: &L) -> &R
    where
        L: Clone,
        R: Default,
    {
        if let Some(node) = self.find_left(key).node() {
            return &self.pool.get(node).right;
        }
        let value = R::default();
        if let Some(owner) = self.right.find(&mut self.pool, &value).node() {
            self.erase_node(owner);
        }
        let node = self.pool.alloc(key.clone(), value);
        self.link_both(node);
        &self.pool.get(node).right
    }

    /// The left key paired with `key`, pairing `key` with `L::default()`
    /// first if it has no partner.
    ///
    /// When the default left key already belongs to another pair, that pair
    /// is erased before the new one is formed.
    pub fn at_right_or_default(&mut self, key: &R) -> &L
    where
        L: Default,
        R: Clone,
    {
        if let Some(node) = self.find_right(key).node() {
            return &self.pool.get(node).left;
        }
        let value = L::default();
        if let Some(owner) = self.left.find(&mut self.pool, &value).node() {
            self.erase_node(owner);
        }
        let node = self.pool.alloc(value, key.clone());
        self.link_both(node);
        &self.pool.get(node).left
    }

    pub fn lower_bound_left(&mut self, key: &L) -> LeftCursor {
        Cursor::new(self.left.lower_bound(&mut self.pool, key))
    }

    pub fn upper_bound_left(&mut self, key: &L) -> LeftCursor {
        Cursor::new(self.left.upper_bound(&mut self.pool, key))
    }

    pub fn lower_bound_right(&mut self, key: &R) -> RightCursor {
        Cursor::new(self.right.lower_bound(&mut self.pool, key))
    }

    pub fn upper_bound_right(&mut self, key: &R) -> RightCursor {
        Cursor::new(self.right.upper_bound(&mut self.pool, key))
    }

    /// Like [`at_left`](Self::at_left), without splaying.
    pub fn get_left(&self, key: &L) -> Option<&R> {
        let node = self.left.get(&self.pool, key).node()?;
        Some(&self.pool.get(node).right)
    }

    /// Like [`at_right`](Self::at_right), without splaying.
    pub fn get_right(&self, key: &R) -> Option<&L> {
        let node = self.right.get(&self.pool, key).node()?;
        Some(&self.pool.get(node).left)
    }

    pub fn contains_left(&self, key: &L) -> bool {
        !self.left.get(&self.pool, key).is_sentinel()
    }

    pub fn contains_right(&self, key: &R) -> bool {
        !self.right.get(&self.pool, key).is_sentinel()
    }

    // ── cursors ───────────────────────────────────────────────────────────

    pub fn begin_left(&self) -> LeftCursor {
        Cursor::new(self.left.begin(&self.pool))
    }

    pub fn end_left(&self) -> LeftCursor {
        Cursor::new(self.left.end())
    }

    pub fn begin_right(&self) -> RightCursor {
        Cursor::new(self.right.begin(&self.pool))
    }

    pub fn end_right(&self) -> RightCursor {
        Cursor::new(self.right.end())
    }

    /// Successor in left order. The end cursor has no successor.
    pub fn next_left(&self, it: LeftCursor) -> LeftCursor {
        debug_assert!(!it.is_end(), "advancing past end_left");
        Cursor::new(self.left.next(&self.pool, it.position()))
    }

    /// Predecessor in left order. The predecessor of the end cursor is the
    /// largest left key.
    pub fn prev_left(&self, it: LeftCursor) -> LeftCursor {
        Cursor::new(self.left.prev(&self.pool, it.position()))
    }

    pub fn next_right(&self, it: RightCursor) -> RightCursor {
        debug_assert!(!it.is_end(), "advancing past end_right");
        Cursor::new(self.right.next(&self.pool, it.position()))
    }

    pub fn prev_right(&self, it: RightCursor) -> RightCursor {
        Cursor::new(self.right.prev(&self.pool, it.position()))
    }

    /// Left key under `it`; `None` at the end.
    pub fn left(&self, it: LeftCursor) -> Option<&L> {
        self.pair(it.position()).map(|(l, _)| l)
    }

    /// Right key under `it`; `None` at the end.
    pub fn right(&self, it: RightCursor) -> Option<&R> {
        self.pair(it.position()).map(|(_, r)| r)
    }

    pub fn pair_left(&self, it: LeftCursor) -> Option<(&L, &R)> {
        self.pair(it.position())
    }

    pub fn pair_right(&self, it: RightCursor) -> Option<(&L, &R)> {
        self.pair(it.position())
    }

    fn pair(&self, pos: Position) -> Option<(&L, &R)> {
        let node = self.pool.get(pos.node()?);
        Some((&node.left, &node.right))
    }

    // ── iteration ─────────────────────────────────────────────────────────

    /// Pairs in ascending left-key order.
    pub fn iter_left(&self) -> Iter<'_, L, R> {
        Iter::new(
            &self.pool,
            self.left.begin(&self.pool).node(),
            self.left.prev(&self.pool, Position::Sentinel).node(),
            self.len(),
            splay_set::next::<Left, Pool<L, R>>,
            splay_set::prev::<Left, Pool<L, R>>,
        )
    }

    /// Pairs in ascending right-key order.
    pub fn iter_right(&self) -> Iter<'_, L, R> {
        Iter::new(
            &self.pool,
            self.right.begin(&self.pool).node(),
            self.right.prev(&self.pool, Position::Sentinel).node(),
            self.len(),
            splay_set::next::<Right, Pool<L, R>>,
            splay_set::prev::<Right, Pool<L, R>>,
        )
    }
}

impl<L, R, CL, CR> Clone for Bimap<L, R, CL, CR>
where
    L: Clone,
    R: Clone,
    CL: Fn(&L, &L) -> Ordering + Clone,
    CR: Fn(&R, &R) -> Ordering + Clone,
{
    /// Copies pair by pair. If a key's `clone` panics, the partial copy is
    /// dropped with every node it already owns and `self` is left untouched.
    fn clone(&self) -> Self {
        let mut out = Self::with_comparators(self.key_comp_left().clone(), self.key_comp_right().clone());
        for (left, right) in self.iter_left() {
            let (left, right) = (left.clone(), right.clone());
            let node = out.pool.alloc(left, right);
            out.link_both(node);
        }
        out
    }
}

impl<L, R, CL, CR> PartialEq for Bimap<L, R, CL, CR>
where
    L: PartialEq,
    R: PartialEq,
    CL: Fn(&L, &L) -> Ordering,
    CR: Fn(&R, &R) -> Ordering,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter_left().eq(other.iter_left())
    }
}

impl<L, R, CL, CR> Eq for Bimap<L, R, CL, CR>
where
    L: Eq,
    R: Eq,
    CL: Fn(&L, &L) -> Ordering,
    CR: Fn(&R, &R) -> Ordering,
{
}

impl<L, R, CL, CR> fmt::Debug for Bimap<L, R, CL, CR>
where
    L: fmt::Debug,
    R: fmt::Debug,
    CL: Fn(&L, &L) -> Ordering,
    CR: Fn(&R, &R) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_left()).finish()
    }
}

impl<'a, L, R, CL, CR> IntoIterator for &'a Bimap<L, R, CL, CR>
where
    CL: Fn(&L, &L) -> Ordering,
    CR: Fn(&R, &R) -> Ordering,
{
    type Item = (&'a L, &'a R);
    type IntoIter = Iter<'a, L, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_left()
    }
}

impl<L, R, CL, CR> Extend<(L, R)> for Bimap<L, R, CL, CR>
where
    CL: Fn(&L, &L) -> Ordering,
    CR: Fn(&R, &R) -> Ordering,
{
    /// Inserts every pair; pairs that collide with an existing key on
    /// either side are dropped, exactly as [`Bimap::insert`] does.
    fn extend<I: IntoIterator<Item = (L, R)>>(&mut self, iter: I) {
        for (left, right) in iter {
            self.insert(left, right);
        }
    }
}

impl<L: Ord, R: Ord> FromIterator<(L, R)> for Bimap<L, R> {
    fn from_iter<I: IntoIterator<Item = (L, R)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
