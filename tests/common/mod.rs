//! Shared helpers for the integration suites

#![allow(dead_code)]

use landis::AvlTree;

/// Build a tree by inserting `keys` in order.
pub fn tree_of(keys: &[i64]) -> AvlTree<i64> {
    let mut tree = AvlTree::new();
    for &key in keys {
        tree.insert(key);
    }
    tree
}

/// In-order key sequence of `tree`.
pub fn keys_of(tree: &AvlTree<i64>) -> Vec<i64> {
    tree.iter().copied().collect()
}

/// Assert every structural invariant at once: internal integrity
/// (ordering, exact height caches, balance), strictly increasing
/// in-order keys, a consistent length, and the AVL height bound
/// h <= 1.44 * log2(n + 2).
pub fn assert_well_formed(tree: &AvlTree<i64>) {
    tree.check_integrity().expect("tree integrity");

    let keys = keys_of(tree);
    assert!(
        keys.windows(2).all(|pair| pair[0] < pair[1]),
        "in-order keys must be strictly increasing: {keys:?}"
    );
    assert_eq!(keys.len(), tree.len(), "len must match the key count");

    let bound = 1.44 * ((tree.len() + 2) as f64).log2();
    assert!(
        (tree.height() as f64) <= bound,
        "height {} exceeds AVL bound {:.2} for {} keys",
        tree.height(),
        bound,
        tree.len()
    );
}
