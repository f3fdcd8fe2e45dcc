//! Structured source flattening
//!
//! Turns an already-decoded configuration document into `(path, value)`
//! pairs and feeds them into a [`Storage`]. Any serde format can be loaded
//! by converting its value into a `serde_json::Value` first.

use crate::error::StoreError;
use crate::store::{FileId, Storage};
use serde_json::Value;
use tracing::debug;

/// Flatten `value` into path/value pairs.
///
/// Object members are joined with `.`, array elements written as `[i]`.
/// Strings are kept raw, `null` becomes the empty string, and empty
/// objects or arrays produce nothing.
pub fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    flatten_into(String::new(), value, &mut out);
    out
}

fn flatten_into(prefix: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(path, child, out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten_into(format!("{}[{}]", prefix, i), child, out);
            }
        }
        Value::String(s) => out.push((prefix, s.clone())),
        Value::Null => out.push((prefix, String::new())),
        Value::Bool(b) => out.push((prefix, b.to_string())),
        Value::Number(n) => out.push((prefix, n.to_string())),
    }
}

impl Storage {
    /// Register `file_name` and store every flattened entry of `value`
    /// under its id. Stops at the first rejected path; entries stored
    /// before it are kept.
    pub fn load_value(&mut self, file_name: &str, value: &Value) -> Result<FileId, StoreError> {
        let file = self.add_file(file_name)?;
        let entries = flatten(value);
        debug!(file = file_name, entries = entries.len(), "loading flattened source");
        for (key, val) in entries {
            self.set(&key, val, file)?;
        }
        Ok(file)
    }
}
