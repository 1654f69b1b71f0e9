//! The owning handle over a root [`Node`] and the public API of the container.
//!
//! # Examples
//!
//! ```
//! use ubst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Keys are unique. Inserting one again leaves the tree untouched.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting reports whether the key was there.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::iter::FusedIterator;

use log::{debug, trace};

use crate::error::{Result, TreeError};
use crate::node::{Link, Node};

/// An unbalanced Binary Search Tree of unique keys. This can be used for inserting, finding,
/// and deleting keys, and for visiting them in ascending order.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `key` into the tree. Returns `true` if the key was added and `false` if the tree
    /// already held an equal key, in which case the tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let new_node = Node::new_boxed(key);
        let inserted = match self.root.as_mut() {
            Some(root) => root.insert(new_node),
            None => {
                self.root = Some(new_node);
                true
            }
        };

        if inserted {
            self.len += 1;
            trace!("inserted key, tree holds {} keys", self.len);
        } else {
            debug!("rejected duplicate key, tree holds {} keys", self.len);
        }
        inserted
    }

    /// Returns whether the tree holds `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Potentially finds the node holding `key`. If no node has the corresponding key, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// let node = tree.find(&2).unwrap();
    /// assert_eq!(node.key(), &2);
    /// assert_eq!(node.left().map(|n| *n.key()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(node.key()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Returns the smallest key in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree holds no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), Err(TreeError::EmptyTree));
    ///
    /// tree.extend([3, 1, 2]);
    /// assert_eq!(tree.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&K> {
        self.root().map(Node::min).ok_or(TreeError::EmptyTree)
    }

    /// Returns the largest key in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree holds no keys.
    pub fn max(&self) -> Result<&K> {
        self.root().map(Node::max).ok_or(TreeError::EmptyTree)
    }

    /// Removes `key` from the tree. Returns whether it was present. Deleting a key the tree
    /// doesn't hold leaves the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.contains(&2));
    /// assert_eq!(tree.len(), 2);
    ///
    /// assert!(!tree.delete(&42));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let (root, deleted) = Node::delete(self.root.take(), key);
        self.root = root;

        if deleted {
            self.len -= 1;
            trace!("deleted key, tree holds {} keys", self.len);
        } else {
            debug!("key to delete not found, tree holds {} keys", self.len);
        }
        deleted
    }

    /// Calls `visit` on every key in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// let mut keys = Vec::new();
    /// tree.walk(|k| keys.push(*k));
    ///
    /// assert_eq!(keys, [1, 3, 4, 5, 7, 8, 9]);
    /// ```
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&K),
    {
        if let Some(root) = self.root() {
            root.walk(&mut visit);
        }
    }

    /// An iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root());
        iter
    }

    /// Returns whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of keys in the tree.
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of levels in the tree. An empty tree has a height of 0.
    ///
    /// Nothing rebalances the tree, so keys inserted in ascending order give a tree as tall as
    /// it is long.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::Tree;
    ///
    /// let balanced: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let degenerate: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(balanced.height(), 2);
    /// assert_eq!(degenerate.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// The structural root of the tree, if it holds any keys.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        // Tear down with an explicit stack so a list-shaped tree doesn't recurse once per level.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            let (left, right) = node.take_children();
            stack.extend(left);
            stack.extend(right);
        }
        self.len = 0;
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the keys of a [`Tree`], created by [`Tree::iter`].
#[derive(Debug)]
pub struct Iter<'a, K> {
    /// Nodes whose key and right subtree are still to be visited, deepest last.
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

/// Manual implementation of `Clone` so cloning the iterator doesn't require `K: Clone`.
impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
