//! Binary search tree with a balancing strategy chosen by type parameter.
//!
//! The heavy lifting lives in a single set of tree routines shared by every strategy. A strategy
//! only decides how a subtree is repaired on the way back up from an insertion or removal.

mod balance;
mod color;
mod height;
mod map;
mod node;
mod render;
#[cfg(feature = "serde")]
mod serialize;
mod set;
mod traversal;
mod tree;
mod unbalanced;

pub use self::balance::Balance;
pub use self::color::{Color, ColorBalance};
pub use self::height::HeightBalance;
pub use self::map::{BalancedMap, BalancedMapIntoIter, BalancedMapIter, BalancedMapIterMut};
pub use self::node::NodeRef;
pub use self::render::Render;
pub use self::set::{BalancedSet, BalancedSetIntoIter, BalancedSetIter, BalancedSetTraverse};
pub use self::traversal::{Order, Traverse};
pub use self::unbalanced::Unbalanced;

use std::error;
use std::fmt;
use std::result;

/// An ordered map balanced by subtree height.
pub type AvlMap<T, U> = BalancedMap<T, U, HeightBalance>;

/// An ordered set balanced by subtree height.
pub type AvlSet<T> = BalancedSet<T, HeightBalance>;

/// An ordered map balanced by node color.
pub type RedBlackMap<T, U> = BalancedMap<T, U, ColorBalance>;

/// An ordered set balanced by node color.
pub type RedBlackSet<T> = BalancedSet<T, ColorBalance>;

/// An ordered map that performs no balancing at all.
pub type UnbalancedMap<T, U> = BalancedMap<T, U, Unbalanced>;

/// An ordered set that performs no balancing at all.
pub type UnbalancedSet<T> = BalancedSet<T, Unbalanced>;

/// A structural violation detected while checking a tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An in-order walk did not yield strictly ascending keys.
    OutOfOrder,
    /// The number of reachable nodes differs from the tracked length.
    LenMismatch { expected: usize, actual: usize },
    /// A node's stored height differs from the height of its subtree.
    HeightMismatch { stored: usize, actual: usize },
    /// The heights of a node's subtrees differ by more than one.
    Unbalanced { balance: i64 },
    /// The root of a color balanced tree is red.
    RedRoot,
    /// A red node has a red child.
    ConsecutiveRed,
    /// A red node hangs off the right of its parent.
    RightLeaningRed,
    /// Two sibling subtrees carry a different number of black nodes.
    BlackHeightMismatch { left: usize, right: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfOrder => write!(f, "keys are not in ascending order"),
            Error::LenMismatch { expected, actual } => {
                write!(f, "expected {} nodes, found {}", expected, actual)
            },
            Error::HeightMismatch { stored, actual } => {
                write!(f, "stored height {} but subtree height is {}", stored, actual)
            },
            Error::Unbalanced { balance } => write!(f, "balance factor {} out of range", balance),
            Error::RedRoot => write!(f, "root is red"),
            Error::ConsecutiveRed => write!(f, "red node has a red child"),
            Error::RightLeaningRed => write!(f, "red node is a right child"),
            Error::BlackHeightMismatch { left, right } => {
                write!(f, "black height {} on the left but {} on the right", left, right)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::LenMismatch { expected: 2, actual: 1 }.to_string(),
            "expected 2 nodes, found 1",
        );
        assert_eq!(Error::RedRoot.to_string(), "root is red");
    }
}
