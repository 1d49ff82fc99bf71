//! Rotation primitives and rebalance dispatch
//!
//! Rotations are O(1) ownership transfers. Each one restores the two
//! local height caches but not the whole-tree balance invariant; the
//! `rebalance` dispatch applies them where a ±2 balance factor appears
//! on the recursion unwind.

use tracing::debug;

use super::node::{Link, Node};

/// Left rotation: the pivot's right child becomes the subtree root.
///
/// The pivot's height must be finalized before the new root's, since
/// the new root's cache depends on it. Callers guarantee a right child;
/// a balance factor of -2 implies one.
pub(crate) fn rotate_left<K>(mut pivot: Box<Node<K>>) -> Box<Node<K>> {
    let mut new_root = pivot.right.take().unwrap();
    pivot.right = new_root.left.take();
    pivot.update_height();
    new_root.left = Some(pivot);
    new_root.update_height();
    new_root
}

/// Right rotation: mirror of [`rotate_left`].
pub(crate) fn rotate_right<K>(mut pivot: Box<Node<K>>) -> Box<Node<K>> {
    let mut new_root = pivot.left.take().unwrap();
    pivot.left = new_root.right.take();
    pivot.update_height();
    new_root.right = Some(pivot);
    new_root.update_height();
    new_root
}

/// Restore the balance invariant at `node` after one child's height
/// changed by at most one.
///
/// The four cases are selected by the heavy child's own lean: a child
/// leaning the opposite way marks the zig-zag shape that needs the
/// double rotation. The `>= 0` / `<= 0` thresholds cover both the
/// post-insert and post-delete situations (after a delete the heavy
/// child may sit at balance 0, which still takes the single rotation).
///
/// `node`'s height cache must already be up to date.
pub(crate) fn rebalance<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let balance = node.balance_factor();

    if balance > 1 {
        if node.left.as_ref().unwrap().balance_factor() < 0 {
            debug!(balance, "left-heavy zig-zag, double rotation");
            node.left = node.left.take().map(rotate_left);
        } else {
            debug!(balance, "left-heavy, single right rotation");
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if node.right.as_ref().unwrap().balance_factor() > 0 {
            debug!(balance, "right-heavy zig-zag, double rotation");
            node.right = node.right.take().map(rotate_right);
        } else {
            debug!(balance, "right-heavy, single left rotation");
        }
        return rotate_left(node);
    }

    node
}
