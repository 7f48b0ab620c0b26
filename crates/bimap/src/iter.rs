use std::iter::FusedIterator;

use crate::node::Pool;

type Step<L, R> = fn(&Pool<L, R>, u32) -> Option<u32>;

/// Borrowing iterator over the pairs of a [`Bimap`](crate::Bimap), in left-
/// or right-key order depending on how it was created.
pub struct Iter<'a, L, R> {
    pool: &'a Pool<L, R>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
    succ: Step<L, R>,
    pred: Step<L, R>,
}

impl<'a, L, R> Iter<'a, L, R> {
    pub(crate) fn new(
        pool: &'a Pool<L, R>,
        front: Option<u32>,
        back: Option<u32>,
        remaining: usize,
        succ: Step<L, R>,
        pred: Step<L, R>,
    ) -> Self {
        Self {
            pool,
            front,
            back,
            remaining,
            succ,
            pred,
        }
    }

    fn pair(&self, idx: u32) -> (&'a L, &'a R) {
        let node = self.pool.get(idx);
        (&node.left, &node.right)
    }
}

impl<L, R> Clone for Iter<'_, L, R> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, L, R> Iterator for Iter<'a, L, R> {
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        self.remaining -= 1;
        self.front = (self.succ)(self.pool, idx);
        Some(self.pair(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<L, R> DoubleEndedIterator for Iter<'_, L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        self.remaining -= 1;
        self.back = (self.pred)(self.pool, idx);
        Some(self.pair(idx))
    }
}

impl<L, R> ExactSizeIterator for Iter<'_, L, R> {}

impl<L, R> FusedIterator for Iter<'_, L, R> {}
