//! Ordered bijective map ("bimap") over two intrusive splay trees.
//!
//! A [`Bimap<L, R>`] holds pairs `(l, r)` in which every left key and every
//! right key occurs at most once. Each pair is a single pool node carrying
//! both keys and two link triples, one per side; two
//! [`splay_set::SplaySet`]s thread the same nodes, one ordered by left keys,
//! one by right keys. Membership changes always hit both trees, so a pair is
//! in one tree exactly when it is in the other.
//!
//! Positions are [`Cursor`]s. A [`LeftCursor`] and a [`RightCursor`] to the
//! same pair refer to the same node, so [`Cursor::flip`] converts between
//! them for free.
//!
//! ```
//! use splay_bimap::Bimap;
//!
//! let mut map = Bimap::new();
//! map.insert(1, "a");
//! map.insert(2, "b");
//! assert!(map.insert(2, "z").is_end());
//!
//! let it = map.find_left(&2);
//! assert_eq!(map.right(it.flip()), Some(&"b"));
//! assert_eq!(map.at_right(&"a"), Ok(&1));
//! ```

mod bimap;
mod cursor;
mod error;
mod iter;
mod node;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod side;

pub use bimap::Bimap;
pub use cursor::{Cursor, LeftCursor, RightCursor};
pub use error::BimapError;
pub use iter::Iter;
pub use side::{Left, Right, Side};
