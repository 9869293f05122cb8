use crate::balanced_tree::balance::Balance;
use crate::balanced_tree::node::{Node, Side};
use crate::entry::Entry;
use log::trace;
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T, U, S> = Option<Box<Node<T, U, S>>>;

pub fn rotate_left<T, U, S>(mut node: Box<Node<T, U, S>>) -> Box<Node<T, U, S>>
where
    S: Balance,
{
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating left");
    node.right = child.left.take();
    child.left = Some(node);
    S::rotated(&mut child, Side::Left);
    child
}

pub fn rotate_right<T, U, S>(mut node: Box<Node<T, U, S>>) -> Box<Node<T, U, S>>
where
    S: Balance,
{
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating right");
    node.left = child.right.take();
    child.right = Some(node);
    S::rotated(&mut child, Side::Right);
    child
}

// precondition: there exists a minimum node in the tree
fn remove_min<T, U, S>(tree: &mut Tree<T, U, S>) -> Box<Node<T, U, S>>
where
    S: Balance,
{
    let mut path = Vec::new();
    let mut current = tree.take();
    let min = loop {
        let mut node = match current.take() {
            Some(node) => node,
            None => unreachable!(),
        };
        if node.left.is_none() {
            current = node.right.take();
            break node;
        }
        node = S::descend_left(node);
        current = node.left.take();
        path.push(node);
    };

    while let Some(mut node) = path.pop() {
        node.left = current;
        current = Some(node);
        S::rebalance_after_remove(&mut current);
    }
    *tree = current;
    min
}

// The in-order successor takes the place of the removed node and inherits its tag, which is the
// same as overwriting the removed node's entry with the successor's.
fn combine_subtrees<T, U, S>(
    left_tree: Tree<T, U, S>,
    mut right_tree: Tree<T, U, S>,
    tag: S::Tag,
) -> Tree<T, U, S>
where
    S: Balance,
{
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    new_root.tag = tag;
    Some(new_root)
}

// Nodes on the search path are detached from their parents on the way down and reattached on the
// way up, so the depth of the tree only ever costs heap space.
pub fn insert<T, U, S>(tree: &mut Tree<T, U, S>, new_node: Node<T, U, S>) -> Option<Entry<T, U>>
where
    T: Ord,
    S: Balance,
{
    let mut path = Vec::new();
    let mut current = tree.take();
    let ret = loop {
        match current.take() {
            Some(mut node) => {
                let side = match new_node.entry.key.cmp(&node.entry.key) {
                    Ordering::Less => Side::Left,
                    Ordering::Greater => Side::Right,
                    Ordering::Equal => {
                        let old_entry = mem::replace(&mut node.entry, new_node.entry);
                        current = Some(node);
                        break Some(old_entry);
                    },
                };
                current = node.child_mut(side).take();
                path.push((node, side));
            },
            None => {
                current = Some(Box::new(new_node));
                break None;
            },
        }
    };

    let rebalance = ret.is_none();
    while let Some((mut node, side)) = path.pop() {
        *node.child_mut(side) = current;
        current = Some(node);
        if rebalance {
            S::rebalance_after_insert(&mut current);
        }
    }
    *tree = current;
    ret
}

// precondition: the key exists in the tree
pub fn remove<T, U, V, S>(tree: &mut Tree<T, U, S>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
    S: Balance,
{
    let mut path = Vec::new();
    let mut current = tree.take();
    let ret = loop {
        let mut node = match current.take() {
            Some(node) => node,
            None => break None,
        };
        let side = if key < node.entry.key.borrow() {
            node = S::descend_left(node);
            Side::Left
        } else {
            node = S::descend_right(node);
            if key == node.entry.key.borrow() {
                let Node {
                    entry,
                    tag,
                    left,
                    right,
                } = *node;
                // a right child goes through the successor so that the removed node's tag stays
                // on this path
                current = match right {
                    None => left,
                    right => combine_subtrees(left, right, tag),
                };
                break Some(entry);
            }
            Side::Right
        };
        current = node.child_mut(side).take();
        path.push((node, side));
    };

    S::rebalance_after_remove(&mut current);
    while let Some((mut node, side)) = path.pop() {
        *node.child_mut(side) = current;
        current = Some(node);
        S::rebalance_after_remove(&mut current);
    }
    *tree = current;
    ret
}

pub fn get<'a, T, U, V, S>(tree: &'a Tree<T, U, S>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
    S: Balance,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn get_mut<'a, T, U, V, S>(tree: &'a mut Tree<T, U, S>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
    S: Balance,
{
    let mut curr = tree.as_mut();
    while let Some(node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = node.left.as_mut(),
            Ordering::Greater => curr = node.right.as_mut(),
            Ordering::Equal => return Some(&mut node.entry),
        }
    }
    None
}

pub fn ceil<'a, T, U, V, S>(tree: &'a Tree<T, U, S>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
    S: Balance,
{
    let mut ret = None;
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Greater => curr = &node.right,
            Ordering::Less => {
                ret = Some(&node.entry);
                curr = &node.left;
            },
            Ordering::Equal => return Some(&node.entry),
        }
    }
    ret
}

pub fn floor<'a, T, U, V, S>(tree: &'a Tree<T, U, S>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
    S: Balance,
{
    let mut ret = None;
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                ret = Some(&node.entry);
                curr = &node.right;
            },
            Ordering::Equal => return Some(&node.entry),
        }
    }
    ret
}

pub fn min<T, U, S>(tree: &Tree<T, U, S>) -> Option<&Entry<T, U>>
where
    S: Balance,
{
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U, S>(tree: &Tree<T, U, S>) -> Option<&Entry<T, U>>
where
    S: Balance,
{
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

/// Returns the number of nodes on the longest path from the root to a leaf.
pub fn depth<T, U, S>(tree: &Tree<T, U, S>) -> usize
where
    S: Balance,
{
    let mut ret = 0;
    let mut stack = Vec::new();
    if let Some(ref node) = tree {
        stack.push((&**node, 1));
    }
    while let Some((node, depth)) = stack.pop() {
        ret = cmp::max(ret, depth);
        for side in &[Side::Left, Side::Right] {
            if let Some(ref child) = node.child(*side) {
                stack.push((&**child, depth + 1));
            }
        }
    }
    ret
}

/// Returns the number of nodes reachable from the root.
pub fn count<T, U, S>(tree: &Tree<T, U, S>) -> usize
where
    S: Balance,
{
    let mut ret = 0;
    let mut stack = Vec::new();
    if let Some(ref node) = tree {
        stack.push(&**node);
    }
    while let Some(node) = stack.pop() {
        ret += 1;
        for side in &[Side::Left, Side::Right] {
            if let Some(ref child) = node.child(*side) {
                stack.push(&**child);
            }
        }
    }
    ret
}

/// Copies a tree bottom-up in post-order without recursing.
pub fn clone_tree<T, U, S>(tree: &Tree<T, U, S>) -> Tree<T, U, S>
where
    T: Clone,
    U: Clone,
    S: Balance,
{
    let mut stack = Vec::new();
    let mut cloned = Vec::new();
    if let Some(ref node) = tree {
        stack.push((&**node, false));
    }
    while let Some((node, expanded)) = stack.pop() {
        if !expanded {
            stack.push((node, true));
            for side in &[Side::Right, Side::Left] {
                if let Some(ref child) = node.child(*side) {
                    stack.push((&**child, false));
                }
            }
            continue;
        }
        let right = if node.right.is_some() { cloned.pop() } else { None };
        let left = if node.left.is_some() { cloned.pop() } else { None };
        cloned.push(Box::new(Node {
            entry: node.entry.clone(),
            tag: node.tag,
            left,
            right,
        }));
    }
    cloned.pop()
}

/// Drops every node of a tree without recursing, so that degenerate trees cannot exhaust the
/// call stack.
pub fn dismantle<T, U, S>(tree: &mut Tree<T, U, S>)
where
    S: Balance,
{
    let mut stack = Vec::new();
    stack.extend(tree.take());
    let mut dropped = 0usize;
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
        dropped += 1;
    }
    if dropped > 0 {
        trace!("dismantled {} nodes", dropped);
    }
}
