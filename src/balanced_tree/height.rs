use crate::balanced_tree::balance::Balance;
use crate::balanced_tree::node::{Node, Side};
use crate::balanced_tree::tree::{self, Tree};
use crate::balanced_tree::{Error, Result};
use std::cmp;
use std::fmt;

/// Balances a tree by keeping the heights of the two child subtrees of any node within one of
/// each other. This is the balancing scheme of an avl tree.
#[derive(Debug)]
pub enum HeightBalance {}

pub fn height<T, U>(tree: &Tree<T, U, HeightBalance>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.tag,
    }
}

impl<T, U> Node<T, U, HeightBalance> {
    pub fn update(&mut self) {
        let Node {
            ref mut tag,
            ref left,
            ref right,
            ..
        } = self;
        *tag = cmp::max(height(left), height(right)) + 1;
    }

    pub fn balance(&self) -> i64 {
        (height(&self.left) as i64) - (height(&self.right) as i64)
    }
}

fn balance<T, U>(tree: &mut Tree<T, U, HeightBalance>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(tree::rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = tree::rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(tree::rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = tree::rotate_left(node);
    }

    *tree = Some(node);
}

fn check_heights<T, U>(tree: &Tree<T, U, HeightBalance>) -> Result<usize> {
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(0),
    };

    let left = check_heights(&node.left)?;
    let right = check_heights(&node.right)?;
    let actual = cmp::max(left, right) + 1;
    if node.tag != actual {
        return Err(Error::HeightMismatch {
            stored: node.tag,
            actual,
        });
    }

    let balance = left as i64 - right as i64;
    if balance.abs() > 1 {
        return Err(Error::Unbalanced { balance });
    }
    Ok(actual)
}

impl Balance for HeightBalance {
    type Tag = usize;

    fn new_tag() -> usize {
        1
    }

    fn rotated<T, U>(node: &mut Node<T, U, Self>, lowered: Side) {
        if let Some(ref mut child) = node.child_mut(lowered) {
            child.update();
        }
        node.update();
    }

    fn rebalance_after_insert<T, U>(tree: &mut Tree<T, U, Self>) {
        balance(tree);
    }

    fn rebalance_after_remove<T, U>(tree: &mut Tree<T, U, Self>) {
        balance(tree);
    }

    fn check<T, U>(tree: &Tree<T, U, Self>) -> Result<()> {
        check_heights(tree).map(|_| ())
    }

    fn fmt_tag(tag: &usize, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, ", Height: {}", tag)
    }
}

#[cfg(test)]
mod tests {
    use super::{balance, height, HeightBalance};
    use crate::balanced_tree::balance::Balance;
    use crate::balanced_tree::node::Node;
    use crate::balanced_tree::tree::{self, Tree};
    use crate::balanced_tree::Error;

    fn build(keys: &[u32]) -> Tree<u32, (), HeightBalance> {
        let mut tree = None;
        for key in keys {
            tree::insert(&mut tree, Node::new(*key, ()));
        }
        tree
    }

    fn root_key(tree: &Tree<u32, (), HeightBalance>) -> Option<u32> {
        tree.as_ref().map(|node| node.entry.key)
    }

    #[test]
    fn test_height_empty() {
        let tree: Tree<u32, (), HeightBalance> = None;
        assert_eq!(height(&tree), 0);
    }

    #[test]
    fn test_leaf_height() {
        let tree = build(&[1]);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_single_right_rotation() {
        let tree = build(&[3, 2, 1]);
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(height(&tree), 2);
    }

    #[test]
    fn test_single_left_rotation() {
        let tree = build(&[1, 2, 3]);
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(height(&tree), 2);
    }

    #[test]
    fn test_left_right_rotation() {
        let tree = build(&[3, 1, 2]);
        assert_eq!(root_key(&tree), Some(2));
        assert!(HeightBalance::check(&tree).is_ok());
    }

    #[test]
    fn test_right_left_rotation() {
        let tree = build(&[1, 3, 2]);
        assert_eq!(root_key(&tree), Some(2));
        assert!(HeightBalance::check(&tree).is_ok());
    }

    #[test]
    fn test_remove_uses_child_balance_factor() {
        // Removing 5 and 6 leaves the root left-heavy over a left child whose own subtrees have
        // equal heights, which calls for a single right rotation.
        let mut tree = build(&[4, 2, 6, 1, 3, 5]);
        tree::remove(&mut tree, &5);
        tree::remove(&mut tree, &6);
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(height(&tree), 3);
        assert!(HeightBalance::check(&tree).is_ok());
    }

    #[test]
    fn test_balance_empty() {
        let mut tree: Tree<u32, (), HeightBalance> = None;
        balance(&mut tree);
        assert!(tree.is_none());
    }

    #[test]
    fn test_check_detects_stale_height() {
        let mut tree = build(&[2, 1, 3]);
        if let Some(ref mut node) = tree {
            node.tag = 5;
        }
        assert_eq!(
            HeightBalance::check(&tree),
            Err(Error::HeightMismatch { stored: 5, actual: 2 }),
        );
    }

    #[test]
    fn test_check_detects_imbalance() {
        let mut node: Node<u32, (), HeightBalance> = Node::new(1, ());
        let mut child = Node::new(2, ());
        child.right = Some(Box::new(Node::new(3, ())));
        child.update();
        node.right = Some(Box::new(child));
        node.update();
        let tree = Some(Box::new(node));
        assert_eq!(HeightBalance::check(&tree), Err(Error::Unbalanced { balance: -2 }));
    }
}
