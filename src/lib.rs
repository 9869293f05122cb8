//! Ordered maps and sets backed by a binary search tree with a pluggable balancing strategy.
//!
//! A single tree core, [`BalancedMap`](balanced_tree/struct.BalancedMap.html), is parameterized
//! by the strategy used to restore its structural invariant after a mutation:
//!
//! - [`HeightBalance`](balanced_tree/enum.HeightBalance.html) keeps the heights of sibling
//!   subtrees within one of each other (AVL).
//! - [`ColorBalance`](balanced_tree/enum.ColorBalance.html) tags nodes red or black and keeps
//!   the tree left-leaning (LLRB).
//! - [`Unbalanced`](balanced_tree/enum.Unbalanced.html) never rotates and degrades to a plain
//!   binary search tree.
//!
//! # Examples
//!
//! ```
//! use balanced_collections::balanced_tree::{AvlMap, RedBlackMap};
//!
//! let mut avl = AvlMap::new();
//! let mut rb = RedBlackMap::new();
//! for key in 0..16 {
//!     avl.insert(key, key * 2);
//!     rb.insert(key, key * 2);
//! }
//!
//! assert_eq!(avl.get(&3), Some(&6));
//! assert_eq!(rb.get(&3), Some(&6));
//! assert!(avl.check().is_ok());
//! assert!(rb.check().is_ok());
//! ```

mod entry;
pub mod balanced_tree;
