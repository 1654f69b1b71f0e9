//! The recursive building block of a [`Tree`](crate::Tree).
//!
//! Every operation here works the same on the root as on any subtree, so they are written as
//! plain recursion over a node and its optional children.

use std::cmp::Ordering;
use std::mem;

/// An owned, possibly absent, subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` has a key that is used for searching/sorting and exclusively owns up to two
/// children. Every key in the left subtree is less than `key` and every key in the right
/// subtree is greater.
#[derive(Clone, Debug)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    /// Construct a new childless `Node` holding `key`.
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of this node's left subtree, if it has one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if it has one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, Self::height);
        let right = self.right().map_or(0, Self::height);
        left.max(right) + 1
    }

    /// The smallest key in the subtree rooted at this node.
    pub fn min(&self) -> &K {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.key
    }

    /// The largest key in the subtree rooted at this node.
    pub fn max(&self) -> &K {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.key
    }

    /// Hangs `new_node` off the first empty slot on its search path. Returns `false`, dropping
    /// `new_node`, if a node with an equal key is already in this subtree.
    pub(crate) fn insert(&mut self, new_node: Box<Self>) -> bool
    where
        K: Ord,
    {
        match new_node.key.cmp(&self.key) {
            Ordering::Less => Self::attach(&mut self.left, new_node),
            Ordering::Equal => false,
            Ordering::Greater => Self::attach(&mut self.right, new_node),
        }
    }

    fn attach(slot: &mut Link<K>, new_node: Box<Self>) -> bool
    where
        K: Ord,
    {
        match slot {
            Some(child) => child.insert(new_node),
            None => {
                *slot = Some(new_node);
                true
            }
        }
    }

    /// Removes the node with the given key from the subtree at `link`.
    ///
    /// Returns the new root of that subtree and whether a node was removed.
    ///
    /// A node with two children is not unlinked itself. Its in-order successor's key is moved
    /// into it and a second pass removes the successor's old slot from the right subtree. That
    /// slot has no left child so the second pass always ends in the zero or one child case.
    pub(crate) fn delete(link: Link<K>, key: &K) -> (Link<K>, bool)
    where
        K: Ord,
    {
        let mut node = match link {
            Some(node) => node,
            None => return (None, false),
        };

        match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, deleted) = Self::delete(node.left.take(), key);
                node.left = left;
                (Some(node), deleted)
            }
            Ordering::Greater => {
                let (right, deleted) = Self::delete(node.right.take(), key);
                node.right = right;
                (Some(node), deleted)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (Some(left), Some(mut right)) => {
                    // The doomed key lands in the successor's slot: the leftmost position of
                    // `right`, below every other key there, so `right` stays ordered.
                    right.swap_min(&mut node.key);
                    let (right, _) = Self::delete(Some(right), key);
                    node.left = Some(left);
                    node.right = right;
                    (Some(node), true)
                }
                (None, child) | (child, None) => (child, true),
            },
        }
    }

    /// Exchanges `key` with the smallest key in this subtree.
    fn swap_min(&mut self, key: &mut K) {
        match &mut self.left {
            Some(left) => left.swap_min(key),
            None => mem::swap(&mut self.key, key),
        }
    }

    /// Visits every key in the subtree in ascending order.
    pub(crate) fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&K),
    {
        if let Some(left) = self.left() {
            left.walk(visit);
        }
        visit(&self.key);
        if let Some(right) = self.right() {
            right.walk(visit);
        }
    }

    /// Takes both children, leaving this node a leaf.
    pub(crate) fn take_children(&mut self) -> (Link<K>, Link<K>) {
        (self.left.take(), self.right.take())
    }
}
