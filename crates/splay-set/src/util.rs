//! Traversal and structural helpers shared by every tree side.
//!
//! None of these splay; [`SplaySet`](crate::SplaySet) decides when to.

use std::cmp::Ordering;

use crate::splay::splay;
use crate::types::Arena;

/// Leftmost node under `root`.
pub fn first<S, A: Arena<S> + ?Sized>(arena: &A, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = arena.links(curr).l {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<S, A: Arena<S> + ?Sized>(arena: &A, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = arena.links(curr).r {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<S, A: Arena<S> + ?Sized>(arena: &A, mut curr: u32) -> Option<u32> {
    if let Some(r) = arena.links(curr).r {
        return first(arena, Some(r));
    }
    while let Some(p) = arena.links(curr).p {
        if arena.links(p).l == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// In-order predecessor.
pub fn prev<S, A: Arena<S> + ?Sized>(arena: &A, mut curr: u32) -> Option<u32> {
    if let Some(l) = arena.links(curr).l {
        return last(arena, Some(l));
    }
    while let Some(p) = arena.links(curr).p {
        if arena.links(p).r == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// Number of nodes under `root`, by walking them.
pub fn size<S, A: Arena<S> + ?Sized>(arena: &A, root: Option<u32>) -> usize {
    let mut n = 0;
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        n += 1;
        curr = next(arena, i);
    }
    n
}

/// Plain binary-search probe for `key`.
pub fn find<S, A, C>(arena: &A, root: Option<u32>, key: &A::Key, comparator: C) -> Option<u32>
where
    A: Arena<S> + ?Sized,
    C: Fn(&A::Key, &A::Key) -> Ordering,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match comparator(key, arena.key(i)) {
            Ordering::Less => arena.links(i).l,
            Ordering::Greater => arena.links(i).r,
            Ordering::Equal => return Some(i),
        };
    }
    None
}

/// Attach the detached `node` as a leaf of the tree rooted at `root`.
///
/// Equal keys descend to the right. Returns the root, which only changes
/// when the tree was empty. Every comparison happens before the first link
/// is written, so a panicking comparator leaves the tree untouched.
pub fn insert<S, A, C>(arena: &mut A, root: Option<u32>, node: u32, comparator: C) -> Option<u32>
where
    A: Arena<S> + ?Sized,
    C: Fn(&A::Key, &A::Key) -> Ordering,
{
    let Some(mut curr) = root else {
        return Some(node);
    };
    loop {
        let less = comparator(arena.key(node), arena.key(curr)).is_lt();
        let child = if less {
            arena.links(curr).l
        } else {
            arena.links(curr).r
        };
        match child {
            Some(c) => curr = c,
            None => {
                if less {
                    arena.links_mut(curr).l = Some(node);
                } else {
                    arena.links_mut(curr).r = Some(node);
                }
                arena.links_mut(node).p = Some(curr);
                return root;
            }
        }
    }
}

/// Join two detached subtrees where every key of `l` orders before every
/// key of `r`. Returns the root of the joined tree.
///
/// The maximum of `l` is splayed to the top of `l`, which leaves it without
/// a right child; `r` then hangs there.
pub fn join<S, A: Arena<S> + ?Sized>(arena: &mut A, l: Option<u32>, r: Option<u32>) -> Option<u32> {
    let Some(l) = l else {
        if let Some(r) = r {
            arena.links_mut(r).p = None;
        }
        return r;
    };
    arena.links_mut(l).p = None;
    let Some(r) = r else {
        return Some(l);
    };
    let Some(max) = last(arena, Some(l)) else {
        return Some(r);
    };
    splay(arena, Some(l), max);
    arena.links_mut(max).r = Some(r);
    arena.links_mut(r).p = Some(max);
    Some(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Links, Node};

    struct Asc;

    struct N(i32, Links);

    impl Node<Asc> for N {
        type Key = i32;
        fn links(&self) -> &Links {
            &self.1
        }
        fn links_mut(&mut self) -> &mut Links {
            &mut self.1
        }
        fn key(&self) -> &i32 {
            &self.0
        }
    }

    fn chain(keys: &[i32]) -> (Vec<N>, Option<u32>) {
        let mut arena: Vec<N> = keys.iter().map(|&k| N(k, Links::new())).collect();
        let mut root = None;
        for i in 0..keys.len() as u32 {
            root = insert::<Asc, _, _>(&mut arena, root, i, |a: &i32, b: &i32| a.cmp(b));
        }
        (arena, root)
    }

    fn in_order(arena: &Vec<N>, root: Option<u32>) -> Vec<i32> {
        let mut out = Vec::new();
        let mut curr = first::<Asc, _>(arena, root);
        while let Some(i) = curr {
            out.push(arena[i as usize].0);
            curr = next::<Asc, _>(arena, i);
        }
        out
    }

    #[test]
    fn insert_attaches_leaves() {
        let (arena, root) = chain(&[4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(root, Some(0));
        assert_eq!(arena[1].1.p, Some(0));
        assert_eq!(arena[3].1.p, Some(1));
        assert_eq!(in_order(&arena, root), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(size::<Asc, _>(&arena, root), 7);
    }

    #[test]
    fn join_hangs_right_under_left_max() {
        let (mut arena, root) = chain(&[4, 2, 6, 1, 3, 5, 7]);
        let root = root.unwrap();
        let Links { l, r, .. } = arena[root as usize].1;
        arena[root as usize].1 = Links::new();
        let joined = join::<Asc, _>(&mut arena, l, r);
        // Slot 4 holds 3, the maximum of the left subtree {1, 2, 3}.
        assert_eq!(joined, Some(4));
        assert_eq!(arena[4].1.r, r);
        assert_eq!(arena[4].1.p, None);
        assert_eq!(in_order(&arena, joined), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn join_with_empty_side() {
        let (mut arena, root) = chain(&[2, 1]);
        let l = arena[0].1.l;
        arena[0].1 = Links::new();
        assert_eq!(join::<Asc, _>(&mut arena, l, None), Some(1));
        assert_eq!(arena[1].1.p, None);
        assert_eq!(join::<Asc, _>(&mut arena, None, None), None);
        assert_eq!(root, Some(0));
    }

    #[test]
    fn prev_walks_back() {
        let (arena, root) = chain(&[5, 3, 8, 4]);
        let max = last::<Asc, _>(&arena, root).unwrap();
        let mut out = vec![arena[max as usize].0];
        let mut curr = prev::<Asc, _>(&arena, max);
        while let Some(i) = curr {
            out.push(arena[i as usize].0);
            curr = prev::<Asc, _>(&arena, i);
        }
        assert_eq!(out, vec![8, 5, 4, 3]);
    }
}
