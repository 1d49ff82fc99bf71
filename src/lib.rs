//! # Height-Balanced Ordered-Key Engine
//!
//! This library implements a self-balancing binary search tree (an AVL
//! tree): ordered key insertion, deletion, and aggregate traversal with
//! a guaranteed O(log n) height bound.
//!
//! ## Core Algorithm
//!
//! 1. **Cached heights**: every node stores the height of its subtree
//!    (leaf = 1, absent = 0) and keeps it exact across mutations
//! 2. **Rotations**: O(1) ownership-transfer rebalancing primitives
//! 3. **Bottom-up repair**: each insert/delete recomputes heights and
//!    rebalances on the recursion unwind, so at most O(log n) nodes are
//!    touched per operation
//!
//! Result: tree height stays within ~1.44 · log2(n + 2) for n keys, so
//! lookups, inserts, and deletes are all O(log n).
//!
//! ## Usage Example
//!
//! ```
//! use landis::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [10, 20, 30, 25, 28, 27, -1] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.sum(), 139);
//! assert_eq!(tree.height(), 3);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod tree; // Balanced search tree core

// Re-exports for convenience
pub use tree::{AvlTree, IntegrityError, Iter};

#[cfg(feature = "visualize")]
pub use tree::TreeSnapshot;
