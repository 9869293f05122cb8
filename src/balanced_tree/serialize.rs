use crate::balanced_tree::balance::Balance;
use crate::balanced_tree::map::BalancedMap;
use crate::balanced_tree::set::BalancedSet;
use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<T, U, S> Serialize for BalancedMap<T, U, S>
where
    T: Serialize,
    U: Serialize,
    S: Balance,
{
    fn serialize<R>(&self, serializer: R) -> Result<R::Ok, R::Error>
    where
        R: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct BalancedMapVisitor<T, U, S>
where
    S: Balance,
{
    marker: PhantomData<fn() -> BalancedMap<T, U, S>>,
}

impl<'de, T, U, S> Visitor<'de> for BalancedMapVisitor<T, U, S>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
    S: Balance,
{
    type Value = BalancedMap<T, U, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut map = BalancedMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, T, U, S> Deserialize<'de> for BalancedMap<T, U, S>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
    S: Balance,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(BalancedMapVisitor {
            marker: PhantomData,
        })
    }
}

impl<T, S> Serialize for BalancedSet<T, S>
where
    T: Serialize,
    S: Balance,
{
    fn serialize<R>(&self, serializer: R) -> Result<R::Ok, R::Error>
    where
        R: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for key in self {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

struct BalancedSetVisitor<T, S>
where
    S: Balance,
{
    marker: PhantomData<fn() -> BalancedSet<T, S>>,
}

impl<'de, T, S> Visitor<'de> for BalancedSetVisitor<T, S>
where
    T: Deserialize<'de> + Ord,
    S: Balance,
{
    type Value = BalancedSet<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = BalancedSet::new();
        while let Some(key) = access.next_element()? {
            set.insert(key);
        }
        Ok(set)
    }
}

impl<'de, T, S> Deserialize<'de> for BalancedSet<T, S>
where
    T: Deserialize<'de> + Ord,
    S: Balance,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(BalancedSetVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::balanced_tree::{AvlMap, RedBlackMap, RedBlackSet};
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    #[test]
    fn test_serde_map() {
        let mut map = RedBlackMap::new();
        map.insert('a', 0i32);
        map.insert('c', 2i32);
        map.insert('b', 1i32);

        assert_tokens(
            &map,
            &[
                Token::Map { len: Some(3) },
                Token::Char('a'),
                Token::I32(0),
                Token::Char('b'),
                Token::I32(1),
                Token::Char('c'),
                Token::I32(2),
                Token::MapEnd,
            ],
        );
    }

    #[test]
    fn test_deserialize_rebalances() {
        let mut expected = AvlMap::new();
        for key in 0..4u32 {
            expected.insert(key, ());
        }

        assert_de_tokens(
            &expected,
            &[
                Token::Map { len: Some(4) },
                Token::U32(0),
                Token::Unit,
                Token::U32(1),
                Token::Unit,
                Token::U32(2),
                Token::Unit,
                Token::U32(3),
                Token::Unit,
                Token::MapEnd,
            ],
        );
    }

    #[test]
    fn test_serde_set() {
        let set: RedBlackSet<u32> = vec![3, 1, 2].into_iter().collect();

        assert_tokens(
            &set,
            &[
                Token::Seq { len: Some(3) },
                Token::U32(1),
                Token::U32(2),
                Token::U32(3),
                Token::SeqEnd,
            ],
        );
    }
}
