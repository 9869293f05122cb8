use crate::balanced_tree::balance::Balance;
use crate::balanced_tree::node::{Node, Side};
use crate::balanced_tree::tree::Tree;
use crate::balanced_tree::Result;

/// Performs no balancing. Keys are placed by binary search order alone, so a sorted insertion
/// sequence degrades the tree into a linked list.
#[derive(Debug)]
pub enum Unbalanced {}

impl Balance for Unbalanced {
    type Tag = ();

    fn new_tag() {}

    fn rotated<T, U>(_node: &mut Node<T, U, Self>, _lowered: Side) {}

    fn rebalance_after_insert<T, U>(_tree: &mut Tree<T, U, Self>) {}

    fn check<T, U>(_tree: &Tree<T, U, Self>) -> Result<()> {
        Ok(())
    }
}
