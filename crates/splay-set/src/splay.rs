//! Splay rotations.
//!
//! All functions take the arena and node indices. Naming follows the
//! direction the promoted node travels: `r_splay` promotes a left child over
//! its parent (the parent moves right), `ll_splay` promotes a left-left
//! grandchild, `lr_splay` a right child of a left child, and so on.
//!
//! Each rotation rewires the links of the two or three nodes involved plus
//! the parent backlinks of the subtrees that change hands. In-order sequence
//! is preserved.

use crate::types::Arena;

// ── single-level rotations (zig) ──────────────────────────────────────────

/// Promote `c2` over `c1`, where `c2` is the left child of the root `c1`.
///
/// ```text
///   c1           c2
///  /      →        \
/// c2               c1
///   \             /
///    b           b
/// ```
pub fn r_splay<S, A: Arena<S> + ?Sized>(arena: &mut A, c2: u32, c1: u32) {
    let b = arena.links(c2).r;
    arena.links_mut(c2).p = None;
    arena.links_mut(c2).r = Some(c1);
    arena.links_mut(c1).p = Some(c2);
    arena.links_mut(c1).l = b;
    if let Some(b) = b {
        arena.links_mut(b).p = Some(c1);
    }
}

/// Promote `c2` over `c1`, where `c2` is the right child of the root `c1`.
pub fn l_splay<S, A: Arena<S> + ?Sized>(arena: &mut A, c2: u32, c1: u32) {
    let b = arena.links(c2).l;
    arena.links_mut(c2).p = None;
    arena.links_mut(c2).l = Some(c1);
    arena.links_mut(c1).p = Some(c2);
    arena.links_mut(c1).r = b;
    if let Some(b) = b {
        arena.links_mut(b).p = Some(c1);
    }
}

// ── double-level rotations (zig-zig / zig-zag) ────────────────────────────

/// Zig-zig: `c3` is the right child of `c2`, which is the right child of `c1`.
pub fn rr_splay<S, A: Arena<S> + ?Sized>(
    arena: &mut A,
    root: Option<u32>,
    c3: u32,
    c2: u32,
    c1: u32,
) -> Option<u32> {
    let b = arena.links(c2).l;
    let c = arena.links(c3).l;
    let p = arena.links(c1).p;
    arena.links_mut(c3).p = p;
    arena.links_mut(c3).l = Some(c2);
    arena.links_mut(c2).p = Some(c3);
    arena.links_mut(c2).l = Some(c1);
    arena.links_mut(c2).r = c;
    arena.links_mut(c1).p = Some(c2);
    arena.links_mut(c1).r = b;
    if let Some(b) = b {
        arena.links_mut(b).p = Some(c1);
    }
    if let Some(c) = c {
        arena.links_mut(c).p = Some(c2);
    }
    update_parent(arena, root, p, c1, c3)
}

/// Zig-zig: `c3` is the left child of `c2`, which is the left child of `c1`.
pub fn ll_splay<S, A: Arena<S> + ?Sized>(
    arena: &mut A,
    root: Option<u32>,
    c3: u32,
    c2: u32,
    c1: u32,
) -> Option<u32> {
    let b = arena.links(c2).r;
    let c = arena.links(c3).r;
    let p = arena.links(c1).p;
    arena.links_mut(c3).p = p;
    arena.links_mut(c3).r = Some(c2);
    arena.links_mut(c2).p = Some(c3);
    arena.links_mut(c2).l = c;
    arena.links_mut(c2).r = Some(c1);
    arena.links_mut(c1).p = Some(c2);
    arena.links_mut(c1).l = b;
    if let Some(b) = b {
        arena.links_mut(b).p = Some(c1);
    }
    if let Some(c) = c {
        arena.links_mut(c).p = Some(c2);
    }
    update_parent(arena, root, p, c1, c3)
}

/// Zig-zag: `c3` is the right child of `c2`, which is the left child of `c1`.
pub fn lr_splay<S, A: Arena<S> + ?Sized>(
    arena: &mut A,
    root: Option<u32>,
    c3: u32,
    c2: u32,
    c1: u32,
) -> Option<u32> {
    let c = arena.links(c3).l;
    let d = arena.links(c3).r;
    let p = arena.links(c1).p;
    arena.links_mut(c3).p = p;
    arena.links_mut(c3).l = Some(c2);
    arena.links_mut(c3).r = Some(c1);
    arena.links_mut(c2).p = Some(c3);
    arena.links_mut(c2).r = c;
    arena.links_mut(c1).p = Some(c3);
    arena.links_mut(c1).l = d;
    if let Some(c) = c {
        arena.links_mut(c).p = Some(c2);
    }
    if let Some(d) = d {
        arena.links_mut(d).p = Some(c1);
    }
    update_parent(arena, root, p, c1, c3)
}

/// Zig-zag: `c3` is the left child of `c2`, which is the right child of `c1`.
pub fn rl_splay<S, A: Arena<S> + ?Sized>(
    arena: &mut A,
    root: Option<u32>,
    c3: u32,
    c2: u32,
    c1: u32,
) -> Option<u32> {
    let c = arena.links(c3).r;
    let d = arena.links(c3).l;
    let p = arena.links(c1).p;
    arena.links_mut(c3).p = p;
    arena.links_mut(c3).l = Some(c1);
    arena.links_mut(c3).r = Some(c2);
    arena.links_mut(c2).p = Some(c3);
    arena.links_mut(c2).l = c;
    arena.links_mut(c1).p = Some(c3);
    arena.links_mut(c1).r = d;
    if let Some(c) = c {
        arena.links_mut(c).p = Some(c2);
    }
    if let Some(d) = d {
        arena.links_mut(d).p = Some(c1);
    }
    update_parent(arena, root, p, c1, c3)
}

// ── top-level splay ───────────────────────────────────────────────────────

/// Rotate `node` up until it becomes the root of its tree. Returns the new
/// root, which is `node`.
///
/// `root` must be the current root of the tree containing `node`; it is
/// only consulted while `node` is still below it. The tree may be a detached
/// subtree as long as its top node has no parent.
pub fn splay<S, A: Arena<S> + ?Sized>(arena: &mut A, mut root: Option<u32>, node: u32) -> Option<u32> {
    while let Some(p) = arena.links(node).p {
        let l2 = arena.links(p).l == Some(node);
        root = match arena.links(p).p {
            Some(pp) => {
                let l1 = arena.links(pp).l == Some(p);
                match (l1, l2) {
                    (true, true) => ll_splay(arena, root, node, p, pp),
                    (true, false) => lr_splay(arena, root, node, p, pp),
                    (false, true) => rl_splay(arena, root, node, p, pp),
                    (false, false) => rr_splay(arena, root, node, p, pp),
                }
            }
            None => {
                if l2 {
                    r_splay(arena, node, p);
                } else {
                    l_splay(arena, node, p);
                }
                Some(node)
            }
        };
    }
    root
}

/// After a double rotation moved `c3` into the slot previously held by
/// `c1`, wire `c3` into `c1`'s old parent `p`.
fn update_parent<S, A: Arena<S> + ?Sized>(
    arena: &mut A,
    root: Option<u32>,
    p: Option<u32>,
    c1: u32,
    c3: u32,
) -> Option<u32> {
    if let Some(p) = p {
        if arena.links(p).l == Some(c1) {
            arena.links_mut(p).l = Some(c3);
        } else {
            arena.links_mut(p).r = Some(c3);
        }
        root
    } else {
        Some(c3)
    }
}
