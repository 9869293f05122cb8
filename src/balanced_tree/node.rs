use crate::balanced_tree::balance::Balance;
use crate::balanced_tree::tree::Tree;
use crate::entry::Entry;

/// Identifies one of the two child slots of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A struct representing an internal node of a balanced tree.
pub struct Node<T, U, S>
where
    S: Balance,
{
    pub entry: Entry<T, U>,
    pub tag: S::Tag,
    pub left: Tree<T, U, S>,
    pub right: Tree<T, U, S>,
}

impl<T, U, S> Node<T, U, S>
where
    S: Balance,
{
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            tag: S::new_tag(),
            left: None,
            right: None,
        }
    }

    pub fn child(&self, side: Side) -> &Tree<T, U, S> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut Tree<T, U, S> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A read-only view of a single node of a `BalancedMap<T, U, S>`.
///
/// # Examples
///
/// ```
/// use balanced_collections::balanced_tree::{Color, RedBlackMap};
///
/// let mut map = RedBlackMap::new();
/// map.insert(1, "a");
/// map.insert(2, "b");
///
/// let root = map.root().unwrap();
/// assert_eq!(root.key(), &2);
/// assert_eq!(root.tag(), Color::Black);
/// assert_eq!(root.left().map(|node| *node.key()), Some(1));
/// assert!(root.right().is_none());
/// ```
pub struct NodeRef<'a, T, U, S>
where
    S: Balance,
{
    node: &'a Node<T, U, S>,
}

impl<'a, T, U, S> NodeRef<'a, T, U, S>
where
    S: Balance,
{
    pub(crate) fn new(node: &'a Node<T, U, S>) -> Self {
        NodeRef { node }
    }

    /// Returns the key stored in this node.
    pub fn key(&self) -> &'a T {
        &self.node.entry.key
    }

    /// Returns the value stored in this node.
    pub fn value(&self) -> &'a U {
        &self.node.entry.value
    }

    /// Returns the balancing metadata of this node: its height for `HeightBalance`, its color
    /// for `ColorBalance`.
    pub fn tag(&self) -> S::Tag {
        self.node.tag
    }

    /// Returns the left child of this node, if any.
    pub fn left(&self) -> Option<NodeRef<'a, T, U, S>> {
        self.node.left.as_ref().map(|node| NodeRef::new(&**node))
    }

    /// Returns the right child of this node, if any.
    pub fn right(&self) -> Option<NodeRef<'a, T, U, S>> {
        self.node.right.as_ref().map(|node| NodeRef::new(&**node))
    }
}

impl<'a, T, U, S> Clone for NodeRef<'a, T, U, S>
where
    S: Balance,
{
    fn clone(&self) -> Self {
        NodeRef { node: self.node }
    }
}

impl<'a, T, U, S> Copy for NodeRef<'a, T, U, S> where S: Balance {}
