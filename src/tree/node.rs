//! Tree node types and insertion

use crate::error::StoreError;
use crate::path::{join_path, PathSegment, PathType};
use std::collections::BTreeMap;

/// A position in the shape tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// Parent of other paths. `kind` is the type every child segment must have.
    Container {
        kind: PathType,
        children: BTreeMap<String, TreeNode>,
    },
    /// Position addressed directly by a stored value.
    Leaf,
}

impl TreeNode {
    /// Create an empty container expecting children of `kind`.
    pub fn container(kind: PathType) -> Self {
        TreeNode::Container {
            kind,
            children: BTreeMap::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf)
    }

    /// Child segment type expected by a container; `None` for a leaf.
    pub fn kind(&self) -> Option<PathType> {
        match self {
            TreeNode::Container { kind, .. } => Some(*kind),
            TreeNode::Leaf => None,
        }
    }

    /// Names of the immediate children in lexicographic order.
    pub fn child_names(&self) -> Vec<String> {
        match self {
            TreeNode::Container { children, .. } => children.keys().cloned().collect(),
            TreeNode::Leaf => Vec::new(),
        }
    }

    /// Extend the tree so that `path` ends at a leaf.
    ///
    /// Missing positions are created as containers typed by the following
    /// segment, the final one as a leaf. Fails with `PathConflict` naming the
    /// shortest offending sub-path when a segment type disagrees with its
    /// container, when the walk runs into a leaf, or when `path` already
    /// ends at a container. Re-inserting an existing leaf path is a no-op.
    pub fn insert(&mut self, path: &[PathSegment]) -> Result<(), StoreError> {
        let mut node = self;
        for (i, segment) in path.iter().enumerate() {
            let children = match node {
                TreeNode::Container { kind, children } if *kind == segment.kind => children,
                _ => return Err(conflict(&path[..=i])),
            };
            node = children
                .entry(segment.elem.clone())
                .or_insert_with(|| match path.get(i + 1) {
                    Some(next) => TreeNode::container(next.kind),
                    None => TreeNode::Leaf,
                });
        }
        if !node.is_leaf() {
            return Err(conflict(path));
        }
        Ok(())
    }
}

fn conflict(path: &[PathSegment]) -> StoreError {
    StoreError::PathConflict {
        path: join_path(path),
    }
}
