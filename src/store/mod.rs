//! Path Store
//!
//! Holds configuration values under their full path string, tagged with the
//! file they came from, alongside the shape tree that keeps every path
//! consistent with the others.

pub mod shared;
pub mod snapshot;

pub use shared::SharedStorage;
pub use snapshot::Snapshot;

use crate::config::StorageConfig;
use crate::error::StoreError;
use crate::path::{join_path, split_path};
use crate::tree::{walk, TreeNode, Walk};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Identifier of a registered source file, assigned from 0 in first-seen order.
pub type FileId = u16;

/// Number of distinct ids `FileId` can represent.
pub const MAX_FILES: usize = FileId::MAX as usize + 1;

/// A stored value and the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueInfo {
    pub file: FileId,
    pub value: String,
}

/// Hierarchical key-value storage with shape conflict detection.
///
/// Not internally synchronized; see [`SharedStorage`] for a locked handle.
#[derive(Debug, Clone)]
pub struct Storage {
    root: Option<TreeNode>,
    data: HashMap<String, ValueInfo>,
    files: HashMap<String, FileId>,
    file_names: Vec<String>,
    max_files: usize,
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage {
    pub fn new() -> Self {
        Self::with_max_files(MAX_FILES)
    }

    /// Create a storage honoring the limits in `config`.
    pub fn with_config(config: &StorageConfig) -> Self {
        Self::with_max_files(config.max_files)
    }

    /// Create a storage accepting at most `max_files` distinct file names.
    ///
    /// Limits above [`MAX_FILES`] are clamped.
    pub fn with_max_files(max_files: usize) -> Self {
        Storage {
            root: None,
            data: HashMap::new(),
            files: HashMap::new(),
            file_names: Vec::new(),
            max_files: max_files.min(MAX_FILES),
        }
    }

    /// All stored values keyed by full path.
    pub fn raw_data(&self) -> &HashMap<String, ValueInfo> {
        &self.data
    }

    /// File name to id table.
    pub fn raw_file(&self) -> &HashMap<String, FileId> {
        &self.files
    }

    pub fn get(&self, key: &str) -> Option<&ValueInfo> {
        self.data.get(key)
    }

    pub fn file_name(&self, id: FileId) -> Option<&str> {
        self.file_names.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Stored value paths, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.data.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Owned copy of the stored values and file table.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            files: self.file_names.clone(),
            values: self
                .data
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Register a file name and return its id.
    ///
    /// A name seen before keeps its id. A new name fails with `TooManyFiles`
    /// once the limit is reached; ids never wrap.
    pub fn add_file(&mut self, name: &str) -> Result<FileId, StoreError> {
        if let Some(id) = self.files.get(name) {
            return Ok(*id);
        }
        let next = self.file_names.len();
        if next >= self.max_files {
            return Err(StoreError::TooManyFiles {
                name: name.to_string(),
                limit: self.max_files,
            });
        }
        let id = FileId::try_from(next).map_err(|_| StoreError::TooManyFiles {
            name: name.to_string(),
            limit: self.max_files,
        })?;
        self.files.insert(name.to_string(), id);
        self.file_names.push(name.to_string());
        debug!(file = name, id, "registered source file");
        Ok(id)
    }

    /// Store `value` under `key`, extending the shape tree as needed.
    ///
    /// Setting an existing value path again overwrites its value and file.
    pub fn set(
        &mut self,
        key: &str,
        value: impl Into<String>,
        file: FileId,
    ) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        let path = split_path(key)?;

        let root = self.root.get_or_insert_with(|| {
            debug!(kind = %path[0].kind, "initialized path tree root");
            TreeNode::container(path[0].kind)
        });
        if let Err(err) = root.insert(&path) {
            debug!(key, error = %err, "rejected conflicting path");
            return Err(err);
        }

        trace!(key, file, "stored value");
        self.data.insert(
            key.to_string(),
            ValueInfo {
                file,
                value: value.into(),
            },
        );
        Ok(())
    }

    /// True if `key` names a stored value or a container of stored values.
    ///
    /// Malformed keys are reported as absent.
    pub fn has(&self, key: &str) -> bool {
        if self.data.contains_key(key) {
            return true;
        }
        let Some(root) = &self.root else {
            return false;
        };
        let Ok(path) = split_path(key) else {
            return false;
        };
        matches!(walk(root, &path), Walk::Found(_))
    }

    /// Sorted names of the immediate children of `key`; `""` is the root.
    ///
    /// A path that fits the tree shape but does not exist yields an empty
    /// list. A path that ends at a value yields `NotFound`.
    pub fn sub_keys(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let path = if key.is_empty() {
            Vec::new()
        } else {
            split_path(key)?
        };

        let Some(root) = &self.root else {
            return Ok(Vec::new());
        };

        match walk(root, &path) {
            Walk::Found(TreeNode::Leaf) => Err(StoreError::NotFound {
                path: key.to_string(),
            }),
            Walk::Found(node) => Ok(node.child_names()),
            Walk::Missing => Ok(Vec::new()),
            Walk::Conflict(i) => Err(StoreError::PathConflict {
                path: join_path(&path[..=i]),
            }),
        }
    }
}
