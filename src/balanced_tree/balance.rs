use crate::balanced_tree::node::{Node, Side};
use crate::balanced_tree::tree::Tree;
use crate::balanced_tree::Result;
use std::fmt;

mod private {
    pub trait Sealed {}

    impl Sealed for crate::balanced_tree::ColorBalance {}
    impl Sealed for crate::balanced_tree::HeightBalance {}
    impl Sealed for crate::balanced_tree::Unbalanced {}
}

/// A policy that restores the structural invariant of a tree after it has been mutated.
///
/// The shared tree routines descend to the point of insertion or removal and call back into the
/// strategy for every subtree on the path, bottom-up, on the way back to the root. Rotations are
/// performed by the shared routines; the strategy keeps its per-node tag consistent through
/// `rotated`.
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait Balance: private::Sealed + Sized {
    /// Per-node metadata maintained by the strategy.
    type Tag: Copy + fmt::Debug + PartialEq;

    /// Returns the tag of a freshly inserted node.
    fn new_tag() -> Self::Tag;

    /// Called after a rotation raised `node`. The node that was lowered is now its child on
    /// `lowered`.
    fn rotated<T, U>(node: &mut Node<T, U, Self>, lowered: Side);

    /// Repairs a subtree after an insertion into it.
    fn rebalance_after_insert<T, U>(tree: &mut Tree<T, U, Self>);

    /// Repairs a subtree after a removal from it.
    fn rebalance_after_remove<T, U>(tree: &mut Tree<T, U, Self>) {
        Self::rebalance_after_insert(tree);
    }

    /// Prepares a node before a removal descends into its left subtree.
    fn descend_left<T, U>(node: Box<Node<T, U, Self>>) -> Box<Node<T, U, Self>> {
        node
    }

    /// Prepares a node before a removal either removes it or descends into its right subtree.
    fn descend_right<T, U>(node: Box<Node<T, U, Self>>) -> Box<Node<T, U, Self>> {
        node
    }

    /// Prepares the root of a tree before a key is removed from it.
    fn prepare_remove<T, U>(_tree: &mut Tree<T, U, Self>) {}

    /// Settles the root of a tree once a mutation has finished unwinding.
    fn settle_root<T, U>(_tree: &mut Tree<T, U, Self>) {}

    /// Checks the invariant maintained by this strategy.
    fn check<T, U>(tree: &Tree<T, U, Self>) -> Result<()>;

    /// Writes the tag of a node for human-readable rendering.
    fn fmt_tag(_tag: &Self::Tag, _f: &mut fmt::Formatter) -> fmt::Result {
        Ok(())
    }
}
