use crate::balanced_tree::balance::Balance;
use crate::balanced_tree::node::Node;
use crate::balanced_tree::tree::Tree;
use crate::entry::Entry;

/// The order in which a traversal visits the nodes of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. Yields keys in ascending order.
    InOrder,
    /// The node, then the left subtree, then the right subtree.
    PreOrder,
    /// Left subtree, then the right subtree, then the node.
    PostOrder,
}

enum Visit<'a, T, U, S>
where
    S: Balance,
{
    Expand(&'a Node<T, U, S>),
    Yield(&'a Node<T, U, S>),
}

/// An iterator that walks a tree in a given `Order`.
///
/// The walk keeps its pending work on an explicit stack bounded by the depth of the tree instead
/// of recursing.
pub struct Traverse<'a, T, U, S>
where
    T: 'a,
    U: 'a,
    S: Balance + 'a,
{
    order: Order,
    stack: Vec<Visit<'a, T, U, S>>,
}

impl<'a, T, U, S> Traverse<'a, T, U, S>
where
    T: 'a,
    U: 'a,
    S: Balance + 'a,
{
    pub(crate) fn new(tree: &'a Tree<T, U, S>, order: Order) -> Self {
        let mut stack = Vec::new();
        if let Some(ref node) = tree {
            stack.push(Visit::Expand(&**node));
        }
        Traverse { order, stack }
    }

    /// Returns the order of this traversal.
    pub fn order(&self) -> Order {
        self.order
    }

    fn push_tree(&mut self, tree: &'a Tree<T, U, S>) {
        if let Some(ref node) = tree {
            self.stack.push(Visit::Expand(&**node));
        }
    }
}

impl<'a, T, U, S> Iterator for Traverse<'a, T, U, S>
where
    T: 'a,
    U: 'a,
    S: Balance + 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(visit) = self.stack.pop() {
            let node = match visit {
                Visit::Yield(node) => node,
                Visit::Expand(node) => match self.order {
                    Order::PreOrder => {
                        self.push_tree(&node.right);
                        self.push_tree(&node.left);
                        node
                    },
                    Order::InOrder => {
                        self.push_tree(&node.right);
                        self.stack.push(Visit::Yield(node));
                        self.push_tree(&node.left);
                        continue;
                    },
                    Order::PostOrder => {
                        self.stack.push(Visit::Yield(node));
                        self.push_tree(&node.right);
                        self.push_tree(&node.left);
                        continue;
                    },
                },
            };
            let Entry { ref key, ref value } = node.entry;
            return Some((key, value));
        }
        None
    }
}
