//! A word index built on a plain Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`, where `height` is the number of `Node`s on the
//! longest path from the root to a leaf. The [`tree::Tree`] here does no
//! rebalancing, so sorted input degenerates into a chain of height `N`. BSTs
//! naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree; [`iter`] also offers pre-order and
//! post-order walks.
//!
//! ## Word index
//!
//! [`words::WordIndex`] stores one [`words::WordInfo`] per distinct word in a
//! tree, recording every file and line the word was seen on.
//! [`report`] renders it, [`repository`] keeps it on disk between runs and
//! [`tracker`] ties those together for the `wordtracker` binary.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
pub mod config;
pub mod error;
pub mod iter;
pub mod report;
pub mod repository;
pub mod snapshot;
pub mod tracker;
pub mod tree;
pub mod words;

pub use config::TrackerConfig;
pub use error::{Error, Result};
pub use report::ReportMode;
pub use tree::Tree;
pub use words::{WordIndex, WordInfo};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
