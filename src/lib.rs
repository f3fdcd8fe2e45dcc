//! Conftree: Hierarchical Configuration Key Storage
//!
//! Stores flattened configuration values under dotted and indexed paths such
//! as `users[0].profile.age`, while a prefix tree over the path segments
//! keeps every position consistently object-like or array-like and rejects
//! paths that would make a value and a parent of values collide.

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod source;
pub mod store;
pub mod tree;

pub use error::{PathError, SetupError, StoreError};
pub use path::{join_path, split_path, PathSegment, PathType};
pub use store::{FileId, SharedStorage, Snapshot, Storage, ValueInfo};
