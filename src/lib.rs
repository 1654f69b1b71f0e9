//! An ordered-key container built on a plain, unbalanced Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! may have up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)`. This tree never rebalances itself, so
//! the height depends entirely on insertion order: inserting keys in ascending order produces
//! a tree shaped like a linked list. In exchange every operation is a short, easily verified
//! recursion. Sorted iteration falls out of visiting the left subtree, then the subtree root,
//! then the right subtree.
//!
//! # Examples
//!
//! ```
//! use ubst::{Tree, TreeError};
//!
//! let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.min(), Ok(&1));
//! assert_eq!(tree.max(), Ok(&9));
//!
//! // Removing a node with two children promotes its in-order successor.
//! assert!(tree.delete(&5));
//! assert_eq!(tree.root().map(|n| *n.key()), Some(7));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 7, 8, 9]);
//!
//! tree.clear();
//! assert_eq!(tree.min(), Err(TreeError::EmptyTree));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
mod node;
pub mod tree;

pub use error::{Result, TreeError};
pub use node::Node;
pub use tree::{Iter, Tree};
