//! Read-only traversal shared by `has` and `sub_keys`.

use super::TreeNode;
use crate::path::PathSegment;

/// Outcome of walking a decoded path from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk<'a> {
    /// Every segment resolved; the node at the end of the path.
    Found(&'a TreeNode),
    /// The shape matched but a child does not exist.
    Missing,
    /// Segment `i` disagrees with the tree: wrong segment type, or the walk
    /// reached a leaf before the path ended.
    Conflict(usize),
}

pub fn walk<'a>(root: &'a TreeNode, path: &[PathSegment]) -> Walk<'a> {
    let mut node = root;
    for (i, segment) in path.iter().enumerate() {
        let children = match node {
            TreeNode::Container { kind, children } if *kind == segment.kind => children,
            _ => return Walk::Conflict(i),
        };
        match children.get(&segment.elem) {
            Some(child) => node = child,
            None => return Walk::Missing,
        }
    }
    Walk::Found(node)
}
