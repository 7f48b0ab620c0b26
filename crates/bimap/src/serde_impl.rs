//! `serde` support: a bimap serializes as a sequence of `(left, right)`
//! pairs in left-key order.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{Error, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Bimap;

impl<L, R, CL, CR> Serialize for Bimap<L, R, CL, CR>
where
    L: Serialize,
    R: Serialize,
    CL: Fn(&L, &L) -> Ordering,
    CR: Fn(&R, &R) -> Ordering,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for pair in self.iter_left() {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }
}

struct PairsVisitor<L, R>(PhantomData<fn() -> (L, R)>);

impl<'de, L, R> Visitor<'de> for PairsVisitor<L, R>
where
    L: Deserialize<'de> + Ord,
    R: Deserialize<'de> + Ord,
{
    type Value = Bimap<L, R>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of [left, right] pairs")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut map = Bimap::new();
        while let Some((left, right)) = seq.next_element::<(L, R)>()? {
            if map.insert(left, right).is_end() {
                return Err(A::Error::custom(format!(
                    "duplicate key in pair {}",
                    map.len()
                )));
            }
        }
        Ok(map)
    }
}

/// Rejects input in which a left or right key occurs twice.
impl<'de, L, R> Deserialize<'de> for Bimap<L, R>
where
    L: Deserialize<'de> + Ord,
    R: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(PairsVisitor(PhantomData))
    }
}
