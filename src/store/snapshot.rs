//! Owned, serializable view of a storage.

use super::ValueInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point-in-time copy of the stored values and registered files.
///
/// Detached from the storage it was taken from: later `set` calls do not
/// show up here, and edits here never reach the storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// File names indexed by file id.
    pub files: Vec<String>,
    /// Values keyed by full path, in path order.
    pub values: BTreeMap<String, ValueInfo>,
}

impl Snapshot {
    /// Name of the file a stored value came from.
    pub fn origin(&self, key: &str) -> Option<&str> {
        let info = self.values.get(key)?;
        self.files.get(info.file as usize).map(String::as_str)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
