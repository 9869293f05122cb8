use crate::balanced_tree::balance::Balance;
use crate::balanced_tree::map::{BalancedMap, BalancedMapIntoIter, BalancedMapIter};
use crate::balanced_tree::traversal::{Order, Traverse};
use crate::balanced_tree::Result;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using a binary search tree with a pluggable balancing strategy.
///
/// # Examples
///
/// ```
/// use balanced_collections::balanced_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct BalancedSet<T, S>
where
    S: Balance,
{
    map: BalancedMap<T, (), S>,
}

impl<T, S> BalancedSet<T, S>
where
    S: Balance,
{
    /// Constructs a new, empty `BalancedSet<T, S>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::{BalancedSet, HeightBalance};
    ///
    /// let set: BalancedSet<u32, HeightBalance> = BalancedSet::new();
    /// ```
    pub fn new() -> Self {
        BalancedSet {
            map: BalancedMap::new(),
        }
    }

    /// Inserts a key into the set. If the key already exists in the set, it will return and
    /// replace the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.insert(1), None);
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), Some(1));
    /// ```
    pub fn insert(&mut self, key: T) -> Option<T>
    where
        T: Ord,
    {
        self.map.insert(key, ()).map(|pair| pair.0)
    }

    /// Removes a key from the set. If the key exists in the set, it will return the associated
    /// key. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.remove(key).map(|pair| pair.0)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.floor(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.ceil(key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        self.map.max()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        self.map.depth()
    }

    /// Checks the structural invariants of the set. See `BalancedMap::check`.
    pub fn check(&self) -> Result<()>
    where
        T: Ord,
    {
        self.map.check()
    }

    /// Returns an iterator over the set that visits keys in a particular order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::{AvlSet, Order};
    ///
    /// let mut set = AvlSet::new();
    /// for key in 1..4 {
    ///     set.insert(key);
    /// }
    ///
    /// assert_eq!(set.traverse(Order::PreOrder).collect::<Vec<&u32>>(), vec![&2, &1, &3]);
    /// ```
    pub fn traverse(&self, order: Order) -> BalancedSetTraverse<'_, T, S> {
        BalancedSetTraverse {
            traverse: self.map.traverse(order),
        }
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::balanced_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> BalancedSetIter<'_, T, S> {
        BalancedSetIter {
            map_iter: self.map.iter(),
        }
    }
}

impl<T, S> IntoIterator for BalancedSet<T, S>
where
    S: Balance,
{
    type IntoIter = BalancedSetIntoIter<T, S>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a BalancedSet<T, S>
where
    T: 'a,
    S: Balance + 'a,
{
    type IntoIter = BalancedSetIter<'a, T, S>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `BalancedSet<T, S>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct BalancedSetIntoIter<T, S>
where
    S: Balance,
{
    map_iter: BalancedMapIntoIter<T, (), S>,
}

impl<T, S> Iterator for BalancedSetIntoIter<T, S>
where
    S: Balance,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

/// An iterator for `BalancedSet<T, S>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct BalancedSetIter<'a, T, S>
where
    T: 'a,
    S: Balance + 'a,
{
    map_iter: BalancedMapIter<'a, T, (), S>,
}

impl<'a, T, S> Iterator for BalancedSetIter<'a, T, S>
where
    T: 'a,
    S: Balance + 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

/// An iterator for `BalancedSet<T, S>` that visits keys in a particular `Order`.
pub struct BalancedSetTraverse<'a, T, S>
where
    T: 'a,
    S: Balance + 'a,
{
    traverse: Traverse<'a, T, (), S>,
}

impl<'a, T, S> Iterator for BalancedSetTraverse<'a, T, S>
where
    T: 'a,
    S: Balance + 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.traverse.next().map(|pair| pair.0)
    }
}

impl<T, S> Default for BalancedSet<T, S>
where
    S: Balance,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> Clone for BalancedSet<T, S>
where
    T: Clone,
    S: Balance,
{
    fn clone(&self) -> Self {
        BalancedSet {
            map: self.map.clone(),
        }
    }
}

impl<T, S> fmt::Debug for BalancedSet<T, S>
where
    T: fmt::Debug,
    S: Balance,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> PartialEq for BalancedSet<T, S>
where
    T: PartialEq,
    S: Balance,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T, S> Eq for BalancedSet<T, S>
where
    T: Eq,
    S: Balance,
{
}

impl<T, S> FromIterator<T> for BalancedSet<T, S>
where
    T: Ord,
    S: Balance,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = BalancedSet::new();
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for BalancedSet<T, S>
where
    T: Ord,
    S: Balance,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}
