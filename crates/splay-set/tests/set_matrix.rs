use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use splay_set::{Arena, Links, Node, Position, SplaySet};

struct ByKey;
struct ByTag;

#[derive(Debug)]
struct Item {
    key: i32,
    tag: String,
    by_key: Links,
    by_tag: Links,
}

impl Item {
    fn new(key: i32, tag: &str) -> Self {
        Self {
            key,
            tag: tag.to_string(),
            by_key: Links::new(),
            by_tag: Links::new(),
        }
    }
}

impl Node<ByKey> for Item {
    type Key = i32;
    fn links(&self) -> &Links {
        &self.by_key
    }
    fn links_mut(&mut self) -> &mut Links {
        &mut self.by_key
    }
    fn key(&self) -> &i32 {
        &self.key
    }
}

impl Node<ByTag> for Item {
    type Key = String;
    fn links(&self) -> &Links {
        &self.by_tag
    }
    fn links_mut(&mut self) -> &mut Links {
        &mut self.by_tag
    }
    fn key(&self) -> &String {
        &self.tag
    }
}

fn push(arena: &mut Vec<Item>, key: i32, tag: &str) -> u32 {
    arena.push(Item::new(key, tag));
    (arena.len() - 1) as u32
}

fn keys<S, A>(set: &SplaySet<S, A::Key>, arena: &A) -> Vec<A::Key>
where
    A: Arena<S>,
    A::Key: Ord + Clone,
{
    let mut out = Vec::new();
    let mut pos = set.begin(arena);
    while let Position::Node(i) = pos {
        out.push(arena.key(i).clone());
        pos = set.next(arena, pos);
    }
    out
}

/// Walks the tree and checks parent backlinks and search order.
fn check_shape<S, A>(set: &SplaySet<S, A::Key>, arena: &A)
where
    A: Arena<S>,
    A::Key: Ord,
{
    fn walk<S, A: Arena<S>>(arena: &A, node: u32, count: &mut usize)
    where
        A::Key: Ord,
    {
        *count += 1;
        let links = *arena.links(node);
        if let Some(l) = links.l {
            assert_eq!(arena.links(l).p, Some(node));
            assert!(arena.key(l) < arena.key(node));
            walk(arena, l, count);
        }
        if let Some(r) = links.r {
            assert_eq!(arena.links(r).p, Some(node));
            assert!(arena.key(r) > arena.key(node));
            walk(arena, r, count);
        }
    }
    let mut count = 0;
    if let Some(root) = set.root() {
        assert_eq!(arena.links(root).p, None);
        walk(arena, root, &mut count);
    }
    assert_eq!(count, set.len());
}

#[test]
fn link_keeps_keys_sorted_matrix() {
    let mut arena = Vec::new();
    let mut set = SplaySet::<ByKey, i32>::new();
    for k in [5, 3, 8, 1, 4, 7, 9, 2, 6] {
        let node = push(&mut arena, k, "");
        assert_eq!(set.link(&mut arena, node), Position::Node(node));
        assert_eq!(set.root(), Some(node));
        check_shape(&set, &arena);
    }
    assert_eq!(set.len(), 9);
    assert_eq!(keys(&set, &arena), (1..=9).collect::<Vec<_>>());
}

#[test]
fn find_splays_last_visited_matrix() {
    let mut arena = Vec::new();
    let mut set = SplaySet::<ByKey, i32>::new();
    for k in 0..32 {
        let node = push(&mut arena, k * 2, "");
        set.link(&mut arena, node);
    }

    let hit = set.find(&mut arena, &10);
    assert_eq!(hit, Position::Node(5));
    assert_eq!(set.root(), Some(5));
    check_shape(&set, &arena);

    let miss = set.find(&mut arena, &11);
    assert_eq!(miss, Position::Sentinel);
    let root = set.root().unwrap();
    assert!(arena[root as usize].key == 10 || arena[root as usize].key == 12);
    check_shape(&set, &arena);
    assert_eq!(keys(&set, &arena), (0..32).map(|k| k * 2).collect::<Vec<_>>());
}

#[test]
fn get_does_not_change_shape_matrix() {
    let mut arena = Vec::new();
    let mut set = SplaySet::<ByKey, i32>::new();
    for k in 0..10 {
        let node = push(&mut arena, k, "");
        set.link(&mut arena, node);
    }
    let root = set.root();
    assert_eq!(set.get(&arena, &0), Position::Node(0));
    assert_eq!(set.get(&arena, &42), Position::Sentinel);
    assert_eq!(set.root(), root);
}

#[test]
fn bounds_matrix() {
    let mut arena = Vec::new();
    let mut set = SplaySet::<ByKey, i32>::new();
    for k in [10, 20, 30] {
        let node = push(&mut arena, k, "");
        set.link(&mut arena, node);
    }
    let key_at = |arena: &Vec<Item>, pos: Position| pos.node().map(|i| arena[i as usize].key);

    let pos = set.lower_bound(&mut arena, &5);
    assert_eq!(key_at(&arena, pos), Some(10));
    let pos = set.lower_bound(&mut arena, &20);
    assert_eq!(key_at(&arena, pos), Some(20));
    let pos = set.lower_bound(&mut arena, &21);
    assert_eq!(key_at(&arena, pos), Some(30));
    let pos = set.lower_bound(&mut arena, &31);
    assert!(pos.is_sentinel());

    let pos = set.upper_bound(&mut arena, &20);
    assert_eq!(key_at(&arena, pos), Some(30));
    let pos = set.upper_bound(&mut arena, &9);
    assert_eq!(key_at(&arena, pos), Some(10));
    let pos = set.upper_bound(&mut arena, &30);
    assert!(pos.is_sentinel());
    check_shape(&set, &arena);
}

#[test]
fn iterate_both_directions_matrix() {
    let mut arena = Vec::new();
    let mut set = SplaySet::<ByKey, i32>::new();
    assert_eq!(set.begin(&arena), set.end());
    assert_eq!(set.prev(&arena, set.end()), Position::Sentinel);

    for k in [2, 1, 3] {
        let node = push(&mut arena, k, "");
        set.link(&mut arena, node);
    }
    let last = set.prev(&arena, set.end());
    assert_eq!(last, Position::Node(2));
    assert_eq!(set.next(&arena, last), set.end());

    let mut back = Vec::new();
    let mut pos = set.end();
    loop {
        pos = set.prev(&arena, pos);
        match pos {
            Position::Node(i) => back.push(arena[i as usize].key),
            Position::Sentinel => break,
        }
    }
    assert_eq!(back, vec![3, 2, 1]);
}

#[test]
fn unlink_matrix() {
    let mut arena = Vec::new();
    let mut set = SplaySet::<ByKey, i32>::new();
    for k in 0..=100 {
        let node = push(&mut arena, k, "");
        set.link(&mut arena, node);
    }
    for k in (0..=100).step_by(2) {
        let Position::Node(node) = set.find(&mut arena, &k) else {
            panic!("missing {k}");
        };
        assert_eq!(set.unlink(&mut arena, node), node);
        assert!(arena[node as usize].by_key.is_detached());
        check_shape(&set, &arena);
    }
    assert_eq!(set.len(), 50);
    assert_eq!(keys(&set, &arena), (1..100).step_by(2).collect::<Vec<_>>());

    for k in (1..100).step_by(2) {
        let pos = set.get(&arena, &k);
        set.unlink(&mut arena, pos.node().unwrap());
    }
    assert!(set.is_empty());
    assert_eq!(set.root(), None);
}

#[test]
fn two_trees_share_one_arena_matrix() {
    let mut arena = Vec::new();
    let mut by_key = SplaySet::<ByKey, i32>::new();
    let mut by_tag = SplaySet::<ByTag, String>::new();
    for (k, t) in [(3, "a"), (1, "c"), (2, "b")] {
        let node = push(&mut arena, k, t);
        by_key.link(&mut arena, node);
        by_tag.link(&mut arena, node);
    }
    assert_eq!(keys(&by_key, &arena), vec![1, 2, 3]);
    assert_eq!(keys(&by_tag, &arena), vec!["a", "b", "c"]);

    let Position::Node(node) = by_tag.find(&mut arena, &"b".to_string()) else {
        panic!("missing b");
    };
    by_tag.unlink(&mut arena, node);
    by_key.unlink(&mut arena, node);
    assert_eq!(keys(&by_key, &arena), vec![1, 3]);
    assert_eq!(keys(&by_tag, &arena), vec!["a", "c"]);
    check_shape(&by_key, &arena);
    check_shape(&by_tag, &arena);
}

#[test]
fn custom_comparator_matrix() {
    let mut arena = Vec::new();
    let mut set = SplaySet::<ByKey, i32, _>::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    for k in [1, 3, 2] {
        let node = push(&mut arena, k, "");
        set.link(&mut arena, node);
    }
    let mut out = Vec::new();
    let mut pos = set.begin(&arena);
    while let Position::Node(i) = pos {
        out.push(arena[i as usize].key);
        pos = set.next(&arena, pos);
    }
    assert_eq!(out, vec![3, 2, 1]);
    assert_eq!((set.key_comp())(&1, &2), std::cmp::Ordering::Greater);
}

#[test]
fn random_against_btree_set_matrix() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x5EED);
    let mut arena: Vec<Item> = Vec::new();
    let mut set = SplaySet::<ByKey, i32>::new();
    let mut model = BTreeSet::new();

    for round in 0..3000 {
        let k = rng.gen_range(0..200);
        if rng.gen_bool(0.6) {
            if model.insert(k) {
                let node = push(&mut arena, k, "");
                set.link(&mut arena, node);
            }
        } else if let Position::Node(node) = set.find(&mut arena, &k) {
            assert!(model.remove(&k));
            set.unlink(&mut arena, node);
        } else {
            assert!(!model.contains(&k));
        }
        assert_eq!(set.len(), model.len());
        if round % 250 == 0 {
            check_shape(&set, &arena);
            assert_eq!(keys(&set, &arena), model.iter().copied().collect::<Vec<_>>());
        }
    }
    check_shape(&set, &arena);
    assert_eq!(keys(&set, &arena), model.iter().copied().collect::<Vec<_>>());
}

proptest! {
    #[test]
    fn any_insert_order_iterates_sorted(keys_in in prop::collection::btree_set(-1000i32..1000, 0..64)
        .prop_map(|s| s.into_iter().collect::<Vec<_>>())
        .prop_shuffle())
    {
        let mut arena = Vec::new();
        let mut set = SplaySet::<ByKey, i32>::new();
        for &k in &keys_in {
            let node = push(&mut arena, k, "");
            set.link(&mut arena, node);
        }
        let mut sorted = keys_in.clone();
        sorted.sort();
        prop_assert_eq!(keys(&set, &arena), sorted);
        check_shape(&set, &arena);
    }
}
