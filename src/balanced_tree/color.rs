use crate::balanced_tree::balance::Balance;
use crate::balanced_tree::node::{Node, Side};
use crate::balanced_tree::tree::{self, Tree};
use crate::balanced_tree::{Error, Result};
use log::trace;
use std::fmt;

/// Balances a tree by tagging every node red or black. The tree is kept left-leaning: a red node
/// is always the left child of its parent. This is the balancing scheme of a left-leaning red
/// black tree.
#[derive(Debug)]
pub enum ColorBalance {}

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

pub fn is_red<T, U>(tree: &Tree<T, U, ColorBalance>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.tag == Color::Red,
    }
}

fn is_left_red<T, U>(tree: &Tree<T, U, ColorBalance>) -> bool {
    match tree {
        None => false,
        Some(ref node) => is_red(&node.left),
    }
}

impl<T, U> Node<T, U, ColorBalance> {
    pub fn flip_colors(&mut self) {
        trace!("flipping colors");
        self.tag = self.tag.flip();
        if let Some(ref mut child) = self.left {
            child.tag = child.tag.flip();
        }
        if let Some(ref mut child) = self.right {
            child.tag = child.tag.flip();
        }
    }
}

fn balance<T, U>(tree: &mut Tree<T, U, ColorBalance>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    if is_red(&node.right) && !is_red(&node.left) {
        node = tree::rotate_left(node);
    }

    if is_red(&node.left) && is_left_red(&node.left) {
        node = tree::rotate_right(node);
    }

    if is_red(&node.left) && is_red(&node.right) {
        node.flip_colors();
    }

    *tree = Some(node);
}

// Borrows a red link from the right sibling so that the left child is not a 2-node.
fn move_red_left<T, U>(mut node: Box<Node<T, U, ColorBalance>>) -> Box<Node<T, U, ColorBalance>> {
    trace!("moving red link left");
    node.flip_colors();
    if is_left_red(&node.right) {
        node.right = node.right.take().map(tree::rotate_right);
        node = tree::rotate_left(node);
        node.flip_colors();
    }
    node
}

// Borrows a red link from the left sibling so that the right child is not a 2-node.
fn move_red_right<T, U>(mut node: Box<Node<T, U, ColorBalance>>) -> Box<Node<T, U, ColorBalance>> {
    trace!("moving red link right");
    node.flip_colors();
    if is_left_red(&node.left) {
        node = tree::rotate_right(node);
        node.flip_colors();
    }
    node
}

fn black_height<T, U>(tree: &Tree<T, U, ColorBalance>) -> Result<usize> {
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(0),
    };

    if is_red(&node.right) {
        return Err(Error::RightLeaningRed);
    }
    if node.tag == Color::Red && is_red(&node.left) {
        return Err(Error::ConsecutiveRed);
    }

    let left = black_height(&node.left)?;
    let right = black_height(&node.right)?;
    if left != right {
        return Err(Error::BlackHeightMismatch { left, right });
    }

    match node.tag {
        Color::Red => Ok(left),
        Color::Black => Ok(left + 1),
    }
}

impl Balance for ColorBalance {
    type Tag = Color;

    fn new_tag() -> Color {
        Color::Red
    }

    fn rotated<T, U>(node: &mut Node<T, U, Self>, lowered: Side) {
        let color = match node.child_mut(lowered) {
            Some(ref mut child) => {
                let color = child.tag;
                child.tag = Color::Red;
                color
            },
            None => return,
        };
        node.tag = color;
    }

    fn rebalance_after_insert<T, U>(tree: &mut Tree<T, U, Self>) {
        balance(tree);
    }

    fn descend_left<T, U>(node: Box<Node<T, U, Self>>) -> Box<Node<T, U, Self>> {
        let should_shift = match node.left {
            Some(ref child) => child.tag != Color::Red && !is_red(&child.left),
            None => false,
        };
        if should_shift {
            move_red_left(node)
        } else {
            node
        }
    }

    fn descend_right<T, U>(mut node: Box<Node<T, U, Self>>) -> Box<Node<T, U, Self>> {
        if is_red(&node.left) {
            node = tree::rotate_right(node);
        }

        let should_shift = match node.right {
            Some(ref child) => child.tag != Color::Red && !is_red(&child.left),
            None => false,
        };
        if should_shift {
            move_red_right(node)
        } else {
            node
        }
    }

    fn prepare_remove<T, U>(tree: &mut Tree<T, U, Self>) {
        if let Some(ref mut node) = tree {
            if !is_red(&node.left) && !is_red(&node.right) {
                node.tag = Color::Red;
            }
        }
    }

    fn settle_root<T, U>(tree: &mut Tree<T, U, Self>) {
        if let Some(ref mut node) = tree {
            node.tag = Color::Black;
        }
    }

    fn check<T, U>(tree: &Tree<T, U, Self>) -> Result<()> {
        if is_red(tree) {
            return Err(Error::RedRoot);
        }
        black_height(tree).map(|_| ())
    }

    fn fmt_tag(tag: &Color, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, ", Color: {}", tag)
    }
}
