//! A plain, unbalanced BST. Values are kept in sorted position exactly as
//! they were inserted, so inserting already sorted input produces a chain.
//! Nothing here recurses: searching, inserting, removing and measuring all
//! walk the tree with a loop or an explicit stack.
//!
//! # Examples
//!
//! ```
//! use wordtrack::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.add(5));
//! assert!(tree.add(3));
//! assert!(tree.contains(&3));
//!
//! // Equal values are rejected rather than merged.
//! assert!(!tree.add(3));
//! assert_eq!(tree.len(), 2);
//!
//! // Removing the smallest value hands it back.
//! assert_eq!(tree.remove_min(), Some(3));
//! assert!(!tree.contains(&3));
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use crate::arena::{Arena, Handle};
use crate::error::{Error, Result};
use crate::iter::{InorderIter, PostorderIter, PreorderIter};

/// Which child slot of a `Node` to follow.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A single vertex. Each node is owned by exactly one slot: its parent's
/// `left`/`right` or the tree's `root`.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<Handle> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A read-only view of one node and, through its children, of the subtree
/// below it.
pub struct NodeRef<'a, T> {
    nodes: &'a Arena<Node<T>>,
    handle: Handle,
}

// Manual impls so a `NodeRef` is `Copy` even when `T` isn't.
impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    fn new(nodes: &'a Arena<Node<T>>, handle: Handle) -> Self {
        Self { nodes, handle }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.nodes.get(self.handle).value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.nodes
            .get(self.handle)
            .left
            .map(|h| NodeRef::new(self.nodes, h))
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.nodes
            .get(self.handle)
            .right
            .map(|h| NodeRef::new(self.nodes, h))
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        let node = self.nodes.get(self.handle);
        node.left.is_none() && node.right.is_none()
    }
}

impl<'a, T> fmt::Debug for NodeRef<'a, T>
where
    T: fmt::Debug,
{
    // Only one level deep so that long chains don't recurse through `fmt`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("left", &self.left().map(|n| n.value()))
            .field("right", &self.right().map(|n| n.value()))
            .finish()
    }
}

/// An unbalanced Binary Search Tree holding unique values.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Handle>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder_iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            size: 0,
        }
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.size, self.nodes.len());
        self.size
    }

    /// Drops every value and leaves the tree empty.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.size = 0;
    }

    /// Returns the root node.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no nodes. Note that
    /// [`remove_min`][Tree::remove_min] and [`remove_max`][Tree::remove_max]
    /// report an empty tree with `None` instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtrack::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.root().is_err());
    ///
    /// tree.add(2);
    /// tree.add(1);
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), &2);
    /// assert_eq!(root.left().map(|n| *n.value()), Some(1));
    /// assert!(root.right().is_none());
    /// ```
    pub fn root(&self) -> Result<NodeRef<'_, T>> {
        self.root
            .map(|h| NodeRef::new(&self.nodes, h))
            .ok_or(Error::EmptyTree)
    }

    /// The number of nodes on the longest path from the root to a leaf. An
    /// empty tree has height 0 and a lone root has height 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtrack::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Strictly decreasing input degenerates into a chain.
    /// for x in [5, 3, 1] {
    ///     tree.add(x);
    /// }
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(Handle, usize)> = self.root.map(|h| (h, 1)).into_iter().collect();

        while let Some((handle, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            let node = self.nodes.get(handle);
            pending.extend(node.left.map(|h| (h, depth + 1)));
            pending.extend(node.right.map(|h| (h, depth + 1)));
        }

        deepest
    }

    /// Whether a value comparing equal to `value` is in the tree.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(value).is_some()
    }

    /// Finds the node holding a value comparing equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtrack::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(String::from("kitty"));
    ///
    /// // Any borrowed form of the value works as a probe.
    /// let node = tree.search("kitty").unwrap();
    /// assert_eq!(node.value(), "kitty");
    /// assert!(tree.search("cat").is_none());
    /// ```
    pub fn search<Q>(&self, value: &Q) -> Option<NodeRef<'_, T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(value).map(|h| NodeRef::new(&self.nodes, h))
    }

    /// Finds the value comparing equal to `value` for in-place updates.
    ///
    /// The caller must not change how the value orders against the rest of
    /// the tree; only the parts of `T` ignored by its `Ord` impl may change.
    pub fn search_mut<Q>(&mut self, value: &Q) -> Option<&mut T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let handle = self.locate(value)?;
        Some(&mut self.nodes.get_mut(handle).value)
    }

    /// Adds `value` to the tree, returning whether it was inserted. A value
    /// comparing equal to one already present is dropped and the tree is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtrack::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.add(1));
    /// assert!(!tree.add(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut current = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(self.nodes.insert(Node::new(value)));
                self.size = 1;
                return true;
            }
        };

        loop {
            let node = self.nodes.get(current);
            let side = match value.cmp(&node.value) {
                Ordering::Less => Side::Left,
                Ordering::Equal => return false,
                Ordering::Greater => Side::Right,
            };

            match node.child(side) {
                Some(child) => current = child,
                None => {
                    let inserted = self.nodes.insert(Node::new(value));
                    *self.nodes.get_mut(current).child_mut(side) = Some(inserted);
                    self.size += 1;
                    return true;
                }
            }
        }
    }

    /// Detaches the smallest value and returns it, or `None` if the tree is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtrack::tree::Tree;
    ///
    /// let mut tree: Tree<i32> = [4, 2, 6].into_iter().collect();
    /// assert_eq!(tree.remove_min(), Some(2));
    /// assert_eq!(tree.remove_min(), Some(4));
    /// assert_eq!(tree.remove_min(), Some(6));
    /// assert_eq!(tree.remove_min(), None);
    /// ```
    pub fn remove_min(&mut self) -> Option<T> {
        self.remove_extreme(Side::Left)
    }

    /// Detaches the largest value and returns it, or `None` if the tree is
    /// empty.
    pub fn remove_max(&mut self) -> Option<T> {
        self.remove_extreme(Side::Right)
    }

    /// Returns an iterator visiting values in ascending order.
    pub fn inorder_iter(&self) -> InorderIter<'_, T> {
        InorderIter::new(&self.nodes, self.root, self.size)
    }

    /// Returns an iterator visiting each node before its left then right
    /// subtree.
    pub fn preorder_iter(&self) -> PreorderIter<'_, T> {
        PreorderIter::new(&self.nodes, self.root, self.size)
    }

    /// Returns an iterator visiting each node after both of its subtrees.
    pub fn postorder_iter(&self) -> PostorderIter<'_, T> {
        PostorderIter::new(&self.nodes, self.root, self.size)
    }

    /// Walks from the root to the node holding `value`.
    fn locate<Q>(&self, value: &Q) -> Option<Handle>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(handle),
                Ordering::Greater => node.right,
            };
        }

        None
    }

    /// Follows `side` links from the root as far as they go, unlinks that
    /// node and hands its only possible child up to the parent.
    fn remove_extreme(&mut self, side: Side) -> Option<T> {
        let mut parent = None;
        let mut current = self.root?;
        while let Some(next) = self.nodes.get(current).child(side) {
            parent = Some(current);
            current = next;
        }

        let removed = self.nodes.remove(current);
        let orphan = removed.child(side.opposite());
        match parent {
            Some(parent) => *self.nodes.get_mut(parent).child_mut(side) = orphan,
            None => self.root = orphan,
        }
        self.size -= 1;

        Some(removed.value)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InorderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder_iter()
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
