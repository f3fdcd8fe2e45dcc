//! Shape tree
//!
//! Prefix tree over decoded path segments. Every position is either a
//! container whose children all share one [`PathType`](crate::path::PathType)
//! or a leaf holding a directly addressable value.

pub mod node;
pub mod walk;

pub use node::TreeNode;
pub use walk::{walk, Walk};
