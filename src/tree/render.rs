//! Diagnostic text rendering
//!
//! Root-first indented layout: one tab per depth, children marked with
//! `L--- ` / `R--- `. Purely presentational; nothing else reads it.

use std::fmt;

use super::node::{Link, Node};

#[cfg(feature = "visualize")]
use serde::Serialize;

/// Render a whole tree, one line per node, root first.
pub(crate) fn render_tree<K: fmt::Display>(root: &Link<K>) -> String {
    match root.as_deref() {
        None => "(empty)\n".to_string(),
        Some(node) => {
            let mut out = String::new();
            render_node(node, 0, "Root: ", &mut out);
            out
        }
    }
}

fn render_node<K: fmt::Display>(node: &Node<K>, level: usize, prefix: &str, out: &mut String) {
    for _ in 0..level {
        out.push('\t');
    }
    out.push_str(&format!("{prefix}{}\n", node.key));

    if let Some(left) = node.left.as_deref() {
        render_node(left, level + 1, "L--- ", out);
    }
    if let Some(right) = node.right.as_deref() {
        render_node(right, level + 1, "R--- ", out);
    }
}

/// Serializable structural snapshot of a tree, for external tooling.
#[cfg(feature = "visualize")]
#[derive(Debug, Clone, Serialize)]
pub struct TreeSnapshot<K> {
    /// Key stored at this node.
    pub key: K,
    /// Cached subtree height.
    pub height: i32,
    /// Left child, if present.
    pub left: Option<Box<TreeSnapshot<K>>>,
    /// Right child, if present.
    pub right: Option<Box<TreeSnapshot<K>>>,
}

#[cfg(feature = "visualize")]
pub(crate) fn snapshot<K: Clone>(link: &Link<K>) -> Option<Box<TreeSnapshot<K>>> {
    link.as_deref().map(|node| {
        Box::new(TreeSnapshot {
            key: node.key.clone(),
            height: node.height,
            left: snapshot(&node.left),
            right: snapshot(&node.right),
        })
    })
}
