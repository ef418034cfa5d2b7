//! Property paths: the dotted chain of accessors from a model root down to a
//! leaf property, kept as declared metadata for validation and diagnostics.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, Result};

/// An ordered, non-empty sequence of property segments such as
/// `sub.int_property`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    segments: Vec<String>,
}

impl PropertyPath {
    /// Parses a dotted path. Fails with [`Error::InvalidPath`] when the path
    /// is empty or contains an empty segment.
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(Error::invalid_path(path.to_string(), "the path is empty".to_string()));
        }

        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(Error::invalid_path(path.to_string(), "a segment is empty".to_string()));
        }

        Ok(Self { segments })
    }

    /// Builds a path from pre-split segments, applying the same validation
    /// as [`PropertyPath::parse`].
    pub fn from_segments(segments: Vec<String>) -> Result<Self> {
        if segments.is_empty() {
            return Err(Error::invalid_path(String::new(), "the path is empty".to_string()));
        }

        if segments.iter().any(String::is_empty) {
            let joined = segments.join(".");
            return Err(Error::invalid_path(joined, "a segment is empty".to_string()));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final segment: the settable property itself.
    pub fn leaf(&self) -> &str {
        // Never empty by construction.
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path traverses at least one intermediate composite.
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }
}

impl FromStr for PropertyPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<Self> {
        Self::parse(path)
    }
}

impl Display for PropertyPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}
