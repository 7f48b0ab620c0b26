//! Intrusive, arena-based splay-tree ordered set.
//!
//! Elements live in a caller-owned arena and are addressed by `u32` indices.
//! Each element embeds one [`Links`] triple (`p` / `l` / `r`) per tree it
//! belongs to; the side tag `S` of an [`Arena<S>`] implementation picks the
//! triple. That lets one pool of elements sit in several trees at once, each
//! ordered by its own key and comparator, with no per-tree allocation.
//!
//! [`SplaySet`] keeps no balance metadata. Every link and every lookup
//! splays the touched node to the root, which gives amortized `O(log n)`
//! operations and keeps recently used keys cheap to reach.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Links`], [`Position`], [`Arena`] and [`Node`] |
//! [`splay`] | zig / zig-zig / zig-zag rotations and [`splay()`] |
//! [`util`] | `first`, `last`, `next`, `prev`, leaf `insert`, `join` |
//! `set` | [`SplaySet`] |

mod set;
pub mod splay;
pub mod types;
pub mod util;

pub use set::SplaySet;
pub use splay::splay;
pub use types::{Arena, Links, Node, Position};
pub use util::{first, join, last, next, prev};
