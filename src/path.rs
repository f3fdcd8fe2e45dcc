//! Path Codec
//!
//! Splits configuration paths such as `users[0].profile.age` into typed
//! segments and joins segments back into their canonical string form.
//!
//! Grammar:
//! - a `Key` segment is a run of characters other than `.`, `[`, `]` and
//!   whitespace; every key after the first is preceded by `.`
//! - an `Index` segment is `[` followed by decimal digits and `]`, written
//!   directly after the previous segment or at the start of the path
//! - surrounding whitespace is rejected, not trimmed
//!
//! `join_path(&split_path(s)?) == s` holds for every path `split_path`
//! accepts.

use crate::error::PathError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathType {
    /// Object member, written `.name`
    Key,
    /// Array element, written `[n]`
    Index,
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathType::Key => f.write_str("key"),
            PathType::Index => f.write_str("index"),
        }
    }
}

/// One component of a decoded path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathSegment {
    pub kind: PathType,
    /// Member name for `Key`, decimal digits for `Index`. Never empty.
    pub elem: String,
}

impl PathSegment {
    pub fn key(elem: impl Into<String>) -> Self {
        Self {
            kind: PathType::Key,
            elem: elem.into(),
        }
    }

    pub fn index(elem: impl Into<String>) -> Self {
        Self {
            kind: PathType::Index,
            elem: elem.into(),
        }
    }
}

fn syntax(path: &str, offset: usize, reason: &'static str) -> PathError {
    PathError::Syntax {
        path: path.to_string(),
        offset,
        reason,
    }
}

fn push_key(
    segments: &mut Vec<PathSegment>,
    path: &str,
    start: usize,
    end: usize,
) -> Result<(), PathError> {
    if start == end {
        return Err(syntax(path, end, "empty key segment"));
    }
    segments.push(PathSegment::key(&path[start..end]));
    Ok(())
}

fn push_index(
    segments: &mut Vec<PathSegment>,
    path: &str,
    start: usize,
    end: usize,
) -> Result<(), PathError> {
    let elem = &path[start..end];
    if elem.is_empty() {
        return Err(syntax(path, end, "empty index"));
    }
    // `u64::from_str` tolerates a leading '+', so check the digits first.
    if !elem.bytes().all(|b| b.is_ascii_digit()) || elem.parse::<u64>().is_err() {
        return Err(syntax(path, start, "index is not an unsigned integer"));
    }
    segments.push(PathSegment::index(elem));
    Ok(())
}

/// Decode a path string into its segments.
pub fn split_path(path: &str) -> Result<Vec<PathSegment>, PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    let mut segments = Vec::new();
    let mut last_pos = 0;
    let mut last_char: Option<char> = None;
    let mut open_bracket = false;

    for (i, c) in path.char_indices() {
        match c {
            '.' => {
                if open_bracket {
                    return Err(syntax(path, i, "'.' inside brackets"));
                }
                if last_char == Some('.') {
                    return Err(syntax(path, i, "empty key segment"));
                }
                if last_char != Some(']') {
                    push_key(&mut segments, path, last_pos, i)?;
                }
                last_pos = i + 1;
            }
            '[' => {
                if open_bracket {
                    return Err(syntax(path, i, "nested '['"));
                }
                if last_char == Some('.') {
                    return Err(syntax(path, i, "'[' directly after '.'"));
                }
                if i > 0 && last_char != Some(']') {
                    push_key(&mut segments, path, last_pos, i)?;
                }
                open_bracket = true;
                last_pos = i + 1;
            }
            ']' => {
                if !open_bracket {
                    return Err(syntax(path, i, "unmatched ']'"));
                }
                push_index(&mut segments, path, last_pos, i)?;
                open_bracket = false;
                last_pos = i + 1;
            }
            c if c.is_whitespace() => {
                return Err(syntax(path, i, "whitespace in path"));
            }
            _ => {
                if last_char == Some(']') {
                    return Err(syntax(path, i, "missing '.' after ']'"));
                }
            }
        }
        last_char = Some(c);
    }

    if open_bracket {
        return Err(syntax(path, path.len(), "unclosed '['"));
    }
    match last_char {
        Some('.') => return Err(syntax(path, path.len(), "path ends with '.'")),
        Some(']') => {}
        _ => push_key(&mut segments, path, last_pos, path.len())?,
    }
    Ok(segments)
}

/// Encode segments into the canonical path string.
pub fn join_path(segments: &[PathSegment]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        match segment.kind {
            PathType::Key => {
                if i > 0 {
                    out.push('.');
                }
                out.push_str(&segment.elem);
            }
            PathType::Index => {
                out.push('[');
                out.push_str(&segment.elem);
                out.push(']');
            }
        }
    }
    out
}
