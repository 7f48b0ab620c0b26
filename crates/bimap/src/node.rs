//! Pair nodes and the pool that owns them.
//!
//! A pair node carries both keys and one [`Links`] triple per side. The pool
//! hands out stable `u32` slot indices; a slot keeps its index from
//! allocation until release, however the trees rotate around it. Released
//! slots are recycled.

use splay_set::{Arena, Links};

use crate::side::{Left, Right};

pub(crate) struct PairNode<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
    left_links: Links,
    right_links: Links,
}

impl<L, R> PairNode<L, R> {
    fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            left_links: Links::new(),
            right_links: Links::new(),
        }
    }

    pub(crate) fn into_pair(self) -> (L, R) {
        (self.left, self.right)
    }
}

pub(crate) struct Pool<L, R> {
    slots: Vec<Option<PairNode<L, R>>>,
    free: Vec<u32>,
}

impl<L, R> Pool<L, R> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Store a new, unlinked pair and return its slot.
    pub(crate) fn alloc(&mut self, left: L, right: R) -> u32 {
        let node = PairNode::new(left, right);
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx as usize] = Some(node);
                idx
            }
            None => {
                let idx = slot_index(self.slots.len());
                self.slots.push(Some(node));
                idx
            }
        }
    }

    /// Take the pair out of `idx`. Both trees must have unlinked it already.
    pub(crate) fn release(&mut self, idx: u32) -> PairNode<L, R> {
        let node = match self.slots[idx as usize].take() {
            Some(node) => node,
            None => panic!("pair slot {idx} released twice"),
        };
        debug_assert!(node.left_links.is_detached() && node.right_links.is_detached());
        self.free.push(idx);
        node
    }

    #[inline]
    pub(crate) fn get(&self, idx: u32) -> &PairNode<L, R> {
        match &self.slots[idx as usize] {
            Some(node) => node,
            None => panic!("pair slot {idx} is vacant"),
        }
    }

    #[inline]
    fn get_mut(&mut self, idx: u32) -> &mut PairNode<L, R> {
        match &mut self.slots[idx as usize] {
            Some(node) => node,
            None => panic!("pair slot {idx} is vacant"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Number of occupied slots.
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl<L, R> Arena<Left> for Pool<L, R> {
    type Key = L;

    #[inline]
    fn links(&self, idx: u32) -> &Links {
        &self.get(idx).left_links
    }

    #[inline]
    fn links_mut(&mut self, idx: u32) -> &mut Links {
        &mut self.get_mut(idx).left_links
    }

    #[inline]
    fn key(&self, idx: u32) -> &L {
        &self.get(idx).left
    }
}

impl<L, R> Arena<Right> for Pool<L, R> {
    type Key = R;

    #[inline]
    fn links(&self, idx: u32) -> &Links {
        &self.get(idx).right_links
    }

    #[inline]
    fn links_mut(&mut self, idx: u32) -> &mut Links {
        &mut self.get_mut(idx).right_links
    }

    #[inline]
    fn key(&self, idx: u32) -> &R {
        &self.get(idx).right
    }
}

fn slot_index(len: usize) -> u32 {
    match u32::try_from(len) {
        Ok(idx) => idx,
        Err(_) => panic!("pair pool is full: slot {len} does not fit a u32 index"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_slots_are_reused() {
        let mut pool = Pool::new();
        let a = pool.alloc(1, "a");
        let b = pool.alloc(2, "b");
        assert_eq!(pool.live(), 2);
        assert_eq!(pool.release(a).into_pair(), (1, "a"));
        assert_eq!(pool.live(), 1);
        let c = pool.alloc(3, "c");
        assert_eq!(c, a);
        assert_eq!(pool.get(b).right, "b");
        assert_eq!(Arena::<Left>::key(&pool, c), &3);
        assert_eq!(Arena::<Right>::key(&pool, c), &"c");
    }

    #[test]
    fn sides_have_separate_links() {
        let mut pool = Pool::new();
        let a = pool.alloc(1, 1);
        Arena::<Left>::links_mut(&mut pool, a).l = Some(7);
        assert_eq!(Arena::<Left>::links(&pool, a).l, Some(7));
        assert!(Arena::<Right>::links(&pool, a).is_detached());
    }

    #[test]
    fn slot_index_is_checked() {
        assert_eq!(slot_index(0), 0);
        assert_eq!(slot_index(u32::MAX as usize), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "pair pool is full")]
    fn slot_index_past_u32_panics() {
        slot_index(u32::MAX as usize + 1);
    }
}
