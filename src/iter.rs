//! External iterators over a [`Tree`][crate::tree::Tree].
//!
//! Each cursor keeps its own stack of pending nodes instead of recursing, so
//! the depth of the tree only costs heap space. Cursors borrow the tree they
//! came from, which means the tree can't be changed while one is alive.
//!
//! # Examples
//!
//! ```
//! use wordtrack::iter::TreeCursor;
//! use wordtrack::tree::Tree;
//!
//! let tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert!(tree.inorder_iter().eq(&[1, 3, 4, 5, 7, 8, 9]));
//! assert!(tree.preorder_iter().eq(&[5, 3, 1, 4, 8, 7, 9]));
//! assert!(tree.postorder_iter().eq(&[1, 4, 3, 7, 9, 8, 5]));
//!
//! // Cursors can also be driven by hand.
//! let mut cursor = tree.postorder_iter();
//! while cursor.has_next() {
//!     cursor.try_next().unwrap();
//! }
//! assert!(cursor.try_next().is_err());
//! ```

use std::iter::FusedIterator;

use crate::arena::{Arena, Handle};
use crate::error::{Error, Result};
use crate::tree::Node;

/// The `hasNext`/`next` protocol shared by every traversal order.
pub trait TreeCursor<'a, T: 'a>: Iterator<Item = &'a T> {
    /// Whether another call to [`try_next`][TreeCursor::try_next] will
    /// succeed.
    fn has_next(&self) -> bool;

    /// Advances the cursor.
    ///
    /// # Errors
    ///
    /// [`Error::IteratorExhausted`] once every value has been visited. An
    /// exhausted cursor stays exhausted.
    fn try_next(&mut self) -> Result<&'a T> {
        self.next().ok_or(Error::IteratorExhausted)
    }
}

/// Pushes `from` and every node reachable by following left links.
fn push_left_spine<T>(nodes: &Arena<Node<T>>, stack: &mut Vec<Handle>, from: Option<Handle>) {
    let mut current = from;
    while let Some(handle) = current {
        stack.push(handle);
        current = nodes.get(handle).left;
    }
}

/// Visits values in ascending order: left subtree, node, right subtree.
pub struct InorderIter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    stack: Vec<Handle>,
    remaining: usize,
}

impl<'a, T> InorderIter<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<Node<T>>, root: Option<Handle>, len: usize) -> Self {
        let mut stack = Vec::new();
        push_left_spine(nodes, &mut stack, root);
        Self {
            nodes,
            stack,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for InorderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        let node = self.nodes.get(handle);
        push_left_spine(self.nodes, &mut self.stack, node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> TreeCursor<'a, T> for InorderIter<'a, T> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl<'a, T> ExactSizeIterator for InorderIter<'a, T> {}
impl<'a, T> FusedIterator for InorderIter<'a, T> {}

/// Visits each node, then its left subtree, then its right subtree.
pub struct PreorderIter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    stack: Vec<Handle>,
    remaining: usize,
}

impl<'a, T> PreorderIter<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<Node<T>>, root: Option<Handle>, len: usize) -> Self {
        Self {
            nodes,
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PreorderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        let node = self.nodes.get(handle);
        // Right first so that left comes off the stack first.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> TreeCursor<'a, T> for PreorderIter<'a, T> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl<'a, T> ExactSizeIterator for PreorderIter<'a, T> {}
impl<'a, T> FusedIterator for PreorderIter<'a, T> {}

/// Visits each node only after both of its subtrees.
///
/// The stack holds the path of nodes whose left subtree is done. The top of
/// the stack is emitted once its right subtree is done too, which is exactly
/// when the right child is missing or was the last node emitted: in
/// post-order a subtree's root is always the last of its nodes visited.
pub struct PostorderIter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    stack: Vec<Handle>,
    last_visited: Option<Handle>,
    remaining: usize,
}

impl<'a, T> PostorderIter<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<Node<T>>, root: Option<Handle>, len: usize) -> Self {
        let mut stack = Vec::new();
        push_left_spine(nodes, &mut stack, root);
        Self {
            nodes,
            stack,
            last_visited: None,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PostorderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let handle = *self.stack.last()?;
            let node = self.nodes.get(handle);

            match node.right {
                Some(right) if self.last_visited != Some(right) => {
                    push_left_spine(self.nodes, &mut self.stack, Some(right));
                }
                _ => {
                    self.stack.pop();
                    self.last_visited = Some(handle);
                    self.remaining -= 1;
                    return Some(&node.value);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> TreeCursor<'a, T> for PostorderIter<'a, T> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl<'a, T> ExactSizeIterator for PostorderIter<'a, T> {}
impl<'a, T> FusedIterator for PostorderIter<'a, T> {}
