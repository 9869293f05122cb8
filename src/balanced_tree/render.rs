use crate::balanced_tree::balance::Balance;
use crate::balanced_tree::node::Node;
use crate::balanced_tree::tree::Tree;
use std::fmt;

/// A human-readable rendering of a tree, returned by `BalancedMap::render`.
///
/// Every node is written on its own line in key order, together with its balancing tag and the
/// keys of its children.
pub struct Render<'a, T, U, S>
where
    S: Balance,
{
    tree: &'a Tree<T, U, S>,
}

impl<'a, T, U, S> Render<'a, T, U, S>
where
    S: Balance,
{
    pub(crate) fn new(tree: &'a Tree<T, U, S>) -> Self {
        Render { tree }
    }
}

fn fmt_child<T, U, S>(tree: &Tree<T, U, S>, f: &mut fmt::Formatter) -> fmt::Result
where
    T: fmt::Display,
    S: Balance,
{
    match tree {
        Some(ref node) => write!(f, "{}", node.entry.key),
        None => write!(f, "None"),
    }
}

fn fmt_node<T, U, S>(node: &Node<T, U, S>, f: &mut fmt::Formatter) -> fmt::Result
where
    T: fmt::Display,
    S: Balance,
{
    write!(f, "Key: {}", node.entry.key)?;
    S::fmt_tag(&node.tag, f)?;
    write!(f, ", [Left: ")?;
    fmt_child(&node.left, f)?;
    write!(f, " | Right: ")?;
    fmt_child(&node.right, f)?;
    writeln!(f, "]")
}

impl<'a, T, U, S> fmt::Display for Render<'a, T, U, S>
where
    T: fmt::Display,
    S: Balance,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut current = self.tree;
        let mut stack = Vec::new();
        loop {
            while let Some(ref node) = current {
                current = &node.left;
                stack.push(&**node);
            }
            match stack.pop() {
                Some(node) => {
                    fmt_node(node, f)?;
                    current = &node.right;
                },
                None => return Ok(()),
            }
        }
    }
}
