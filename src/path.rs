//! Object paths used to locate a value inside the data tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of an object path: a property name or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl PathSegment {
    /// Returns the property name, if this is one
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Index(_) => None,
        }
    }

    /// Returns the array index, if this is one
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Key(_) => None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Joins path segments into a readable path such as `a.ccc[0].d[1].b`.
///
/// Names are separated by dots; indices are appended in brackets directly after
/// the preceding segment.
pub fn join_object_path(segments: &[PathSegment]) -> String {
    let mut path = String::new();
    for (position, segment) in segments.iter().enumerate() {
        match segment {
            PathSegment::Key(key) => {
                if position > 0 {
                    path.push('.');
                }
                path.push_str(key);
            }
            PathSegment::Index(index) => {
                path.push('[');
                path.push_str(&index.to_string());
                path.push(']');
            }
        }
    }
    path
}
