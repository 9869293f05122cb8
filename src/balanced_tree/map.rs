use crate::balanced_tree::balance::Balance;
use crate::balanced_tree::node::{Node, NodeRef};
use crate::balanced_tree::render::Render;
use crate::balanced_tree::traversal::{Order, Traverse};
use crate::balanced_tree::tree;
use crate::balanced_tree::{Error, Result};
use crate::entry::Entry;
use log::debug;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using a binary search tree with a pluggable balancing strategy.
///
/// The strategy `S` is fixed for the lifetime of the map. `HeightBalance` gives an avl tree,
/// `ColorBalance` gives a left-leaning red black tree and `Unbalanced` gives a plain binary
/// search tree. The aliases `AvlMap`, `RedBlackMap` and `UnbalancedMap` name each of them.
///
/// # Examples
///
/// ```
/// use balanced_collections::balanced_tree::AvlMap;
///
/// let mut map = AvlMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct BalancedMap<T, U, S>
where
    S: Balance,
{
    tree: tree::Tree<T, U, S>,
    len: usize,
}

impl<T, U, S> BalancedMap<T, U, S>
where
    S: Balance,
{
    /// Constructs a new, empty `BalancedMap<T, U, S>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::{BalancedMap, ColorBalance};
    ///
    /// let map: BalancedMap<u32, u32, ColorBalance> = BalancedMap::new();
    /// ```
    pub fn new() -> Self {
        BalancedMap { tree: None, len: 0 }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will return
    /// and replace the old key-value pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)>
    where
        T: Ord,
    {
        let BalancedMap {
            ref mut tree,
            ref mut len,
        } = self;
        let new_node = Node::new(key, value);
        *len += 1;
        let ret = tree::insert(tree, new_node).map(|entry| {
            *len -= 1;
            entry.into_pair()
        });
        S::settle_root(tree);
        ret
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None` and leave the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        if !self.contains_key(key) {
            return None;
        }

        let BalancedMap {
            ref mut tree,
            ref mut len,
        } = self;
        S::prepare_remove(tree);
        let ret = tree::remove(tree, key).map(|entry| {
            *len -= 1;
            entry.into_pair()
        });
        S::settle_root(tree);
        ret
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing map of {} entries", self.len);
        tree::dismantle(&mut self.tree);
        self.len = 0;
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::floor(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree).map(|entry| &entry.key)
    }

    /// Returns a view of the root node of the tree. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// for key in 1..4 {
    ///     map.insert(key, ());
    /// }
    ///
    /// let root = map.root().unwrap();
    /// assert_eq!(root.key(), &2);
    /// assert_eq!(root.tag(), 2);
    /// ```
    pub fn root(&self) -> Option<NodeRef<'_, T, U, S>> {
        self.tree.as_ref().map(|node| NodeRef::new(&**node))
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::{AvlMap, UnbalancedMap};
    ///
    /// let mut avl = AvlMap::new();
    /// let mut plain = UnbalancedMap::new();
    /// for key in 0..7 {
    ///     avl.insert(key, ());
    ///     plain.insert(key, ());
    /// }
    ///
    /// assert_eq!(avl.depth(), 3);
    /// assert_eq!(plain.depth(), 7);
    /// ```
    pub fn depth(&self) -> usize {
        tree::depth(&self.tree)
    }

    /// Checks the structural invariants of the map: keys are in strictly ascending order, the
    /// length matches the number of nodes, and the balancing strategy's own invariant holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 0..32 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.check(), Ok(()));
    /// ```
    pub fn check(&self) -> Result<()>
    where
        T: Ord,
    {
        let mut keys = self.keys();
        if let Some(mut prev) = keys.next() {
            for key in keys {
                if prev >= key {
                    return Err(Error::OutOfOrder);
                }
                prev = key;
            }
        }

        let actual = tree::count(&self.tree);
        if actual != self.len {
            return Err(Error::LenMismatch {
                expected: self.len,
                actual,
            });
        }

        S::check(&self.tree)
    }

    /// Returns a human-readable rendering of the tree, one line per node in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(15, "Fifteen");
    /// map.insert(25, "Twenty-Five");
    ///
    /// assert_eq!(
    ///     map.render().to_string(),
    ///     "Key: 15, Color: red, [Left: None | Right: None]\n\
    ///      Key: 25, Color: black, [Left: 15 | Right: None]\n",
    /// );
    /// ```
    pub fn render(&self) -> Render<'_, T, U, S> {
        Render::new(&self.tree)
    }

    /// Returns an iterator over the map that visits nodes in a particular order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::{Order, UnbalancedMap};
    ///
    /// let mut map = UnbalancedMap::new();
    /// map.insert(2, 'b');
    /// map.insert(1, 'a');
    /// map.insert(3, 'c');
    ///
    /// let keys: Vec<u32> = map.traverse(Order::PostOrder).map(|(key, _)| *key).collect();
    /// assert_eq!(keys, vec![1, 3, 2]);
    /// ```
    pub fn traverse(&self, order: Order) -> Traverse<'_, T, U, S> {
        Traverse::new(&self.tree, order)
    }

    /// Returns an iterator over the keys of the map in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2, 'b');
    /// map.insert(1, 'a');
    /// assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&1, &2]);
    /// ```
    pub fn keys(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values of the map in ascending order of their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2, 'b');
    /// map.insert(1, 'a');
    /// assert_eq!(map.values().collect::<Vec<&char>>(), vec![&'a', &'b']);
    /// ```
    pub fn values(&self) -> impl Iterator<Item = &U> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> BalancedMapIter<'_, T, U, S> {
        BalancedMapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (key, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> BalancedMapIterMut<'_, T, U, S> {
        BalancedMapIterMut {
            current: self.tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }
}

impl<T, U, S> Drop for BalancedMap<T, U, S>
where
    S: Balance,
{
    fn drop(&mut self) {
        tree::dismantle(&mut self.tree);
    }
}

impl<T, U, S> IntoIterator for BalancedMap<T, U, S>
where
    S: Balance,
{
    type IntoIter = BalancedMapIntoIter<T, U, S>;
    type Item = (T, U);

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree.take(),
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U, S> IntoIterator for &'a BalancedMap<T, U, S>
where
    T: 'a,
    U: 'a,
    S: Balance + 'a,
{
    type IntoIter = BalancedMapIter<'a, T, U, S>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U, S> IntoIterator for &'a mut BalancedMap<T, U, S>
where
    T: 'a,
    U: 'a,
    S: Balance + 'a,
{
    type IntoIter = BalancedMapIterMut<'a, T, U, S>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `BalancedMap<T, U, S>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct BalancedMapIntoIter<T, U, S>
where
    S: Balance,
{
    current: tree::Tree<T, U, S>,
    stack: Vec<Node<T, U, S>>,
}

impl<T, U, S> Iterator for BalancedMapIntoIter<T, U, S>
where
    S: Balance,
{
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { entry, right, .. } = node;
            self.current = right;
            entry.into_pair()
        })
    }
}

impl<T, U, S> Drop for BalancedMapIntoIter<T, U, S>
where
    S: Balance,
{
    fn drop(&mut self) {
        tree::dismantle(&mut self.current);
        for node in &mut self.stack {
            tree::dismantle(&mut node.right);
        }
    }
}

/// An iterator for `BalancedMap<T, U, S>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct BalancedMapIter<'a, T, U, S>
where
    T: 'a,
    U: 'a,
    S: Balance + 'a,
{
    current: &'a tree::Tree<T, U, S>,
    stack: Vec<&'a Node<T, U, S>>,
}

impl<'a, T, U, S> Iterator for BalancedMapIter<'a, T, U, S>
where
    T: 'a,
    U: 'a,
    S: Balance + 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { ref key, ref value },
                ref right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

type BorrowedIterEntryMut<'a, T, U, S> = Option<(&'a mut Entry<T, U>, BorrowedTreeMut<'a, T, U, S>)>;
type BorrowedTreeMut<'a, T, U, S> = Option<&'a mut Node<T, U, S>>;

/// A mutable iterator for `BalancedMap<T, U, S>`.
///
/// This iterator traverses the elements of the map in-order and yields mutable references.
pub struct BalancedMapIterMut<'a, T, U, S>
where
    T: 'a,
    U: 'a,
    S: Balance + 'a,
{
    current: Option<&'a mut Node<T, U, S>>,
    stack: Vec<BorrowedIterEntryMut<'a, T, U, S>>,
}

impl<'a, T, U, S> Iterator for BalancedMapIterMut<'a, T, U, S>
where
    T: 'a,
    U: 'a,
    S: Balance + 'a,
{
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        let BalancedMapIterMut {
            ref mut current,
            ref mut stack,
        } = self;
        while current.is_some() {
            stack.push(current.take().map(|node| {
                *current = node.left.as_mut().map(|node| &mut **node);
                (&mut node.entry, node.right.as_mut().map(|node| &mut **node))
            }));
        }
        stack.pop().and_then(|pair_opt| {
            match pair_opt {
                Some(pair) => {
                    let (entry, right) = pair;
                    let Entry {
                        ref key,
                        ref mut value,
                    } = entry;
                    *current = right;
                    Some((key, value))
                },
                None => None,
            }
        })
    }
}

impl<T, U, S> Default for BalancedMap<T, U, S>
where
    S: Balance,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U, S> Clone for BalancedMap<T, U, S>
where
    T: Clone,
    U: Clone,
    S: Balance,
{
    fn clone(&self) -> Self {
        BalancedMap {
            tree: tree::clone_tree(&self.tree),
            len: self.len,
        }
    }
}

impl<T, U, S> fmt::Debug for BalancedMap<T, U, S>
where
    T: fmt::Debug,
    U: fmt::Debug,
    S: Balance,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, U, S> PartialEq for BalancedMap<T, U, S>
where
    T: PartialEq,
    U: PartialEq,
    S: Balance,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, U, S> Eq for BalancedMap<T, U, S>
where
    T: Eq,
    U: Eq,
    S: Balance,
{
}

impl<T, U, S> FromIterator<(T, U)> for BalancedMap<T, U, S>
where
    T: Ord,
    S: Balance,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = BalancedMap::new();
        map.extend(iter);
        map
    }
}

impl<T, U, S> Extend<(T, U)> for BalancedMap<T, U, S>
where
    T: Ord,
    S: Balance,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, T, U, S, V> Index<&'a V> for BalancedMap<T, U, S>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
    S: Balance,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, S, V> IndexMut<&'a V> for BalancedMap<T, U, S>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
    S: Balance,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use crate::balanced_tree::{
        AvlMap, BalancedMap, Color, ColorBalance, HeightBalance, Order, RedBlackMap, UnbalancedMap,
    };

    #[test]
    fn test_len_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
        assert!(map.root().is_none());
        assert_eq!(map.depth(), 0);
    }

    #[test]
    fn test_insert() {
        let mut map = AvlMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_replace() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert_eq!(map.insert(1, 3), Some((1, 1)));
        assert_eq!(map.get(&1), Some(&3));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        assert_eq!(map.remove(&1), Some((1, 1)));
        assert!(!map.contains_key(&1));
        assert!(map.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut map = RedBlackMap::new();
        for key in 0..8 {
            map.insert(key * 2, ());
        }
        let before: Vec<u32> = map.traverse(Order::PreOrder).map(|(key, _)| *key).collect();
        assert_eq!(map.remove(&3), None);
        let after: Vec<u32> = map.traverse(Order::PreOrder).map(|(key, _)| *key).collect();
        assert_eq!(before, after);
        assert_eq!(map.len(), 8);
        assert_eq!(map.check(), Ok(()));
    }

    #[test]
    fn test_min_max() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.min(), Some(&1));
        assert_eq!(map.max(), Some(&5));
    }

    #[test]
    fn test_get_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut map = AvlMap::new();
        map.insert(String::from("b"), 2);
        map.insert(String::from("a"), 1);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map["b"], 2);
        assert_eq!(map.remove("a"), Some((String::from("a"), 1)));
    }

    #[test]
    fn test_floor_ceil() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.floor(&0), None);
        assert_eq!(map.floor(&2), Some(&1));
        assert_eq!(map.floor(&4), Some(&3));
        assert_eq!(map.floor(&6), Some(&5));

        assert_eq!(map.ceil(&0), Some(&1));
        assert_eq!(map.ceil(&2), Some(&3));
        assert_eq!(map.ceil(&4), Some(&5));
        assert_eq!(map.ceil(&6), None);
    }

    #[test]
    fn test_into_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_iter() {
        let mut map = AvlMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
    }

    #[test]
    fn test_iter_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        for (_, value) in &mut map {
            *value += 1;
        }

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &3), (&3, &5), (&5, &7)],
        );
    }

    #[test]
    fn test_traverse_matches_iter() {
        let map: BalancedMap<u32, u32, ColorBalance> = (0..20).map(|key| (key, key)).collect();
        assert!(map.traverse(Order::InOrder).eq(map.iter()));
    }

    #[test]
    fn test_root_is_black() {
        let mut map = RedBlackMap::new();
        for key in 0..10 {
            map.insert(key, ());
            assert_eq!(map.root().map(|node| node.tag()), Some(Color::Black));
        }
        for key in 0..9 {
            map.remove(&key);
            assert_eq!(map.root().map(|node| node.tag()), Some(Color::Black));
        }
    }

    #[test]
    fn test_clear() {
        let mut map = UnbalancedMap::new();
        for key in 0..100 {
            map.insert(key, key);
        }
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.iter().next(), None);
        assert_eq!(map.check(), Ok(()));
    }

    #[test]
    fn test_clone_eq() {
        let map: BalancedMap<u32, u32, HeightBalance> = (0..10).map(|key| (key, key)).collect();
        let mut other = map.clone();
        assert_eq!(map, other);
        other.insert(3, 0);
        assert_ne!(map, other);
    }

    #[test]
    fn test_extend() {
        let mut map = AvlMap::new();
        map.extend(vec![(2, 'b'), (1, 'a'), (2, 'c')]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&2), Some(&'c'));
    }

    #[test]
    fn test_debug() {
        let mut map = AvlMap::new();
        map.insert(2, 'b');
        map.insert(1, 'a');
        assert_eq!(format!("{:?}", map), "{1: 'a', 2: 'b'}");
    }

    #[test]
    #[should_panic(expected = "Error: key does not exist.")]
    fn test_index_missing() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        let _value = map[&1];
    }
}
