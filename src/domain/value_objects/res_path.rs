//! Sandbox-relative resource paths
//!
//! A [`ResPath`] always names a location *inside* a user-data root. It is
//! built from `/`-separated segments and refuses anything that could climb
//! out of the root: absolute paths, `.` or `..` segments, and empty segments.

use std::fmt;
use std::path::PathBuf;

/// Separator used between resource path segments
pub const SEPARATOR: char = '/';

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResPathError {
    #[error("Resource path is empty")]
    Empty,
    #[error("Resource path must be relative: {0}")]
    Absolute(String),
    #[error("Resource path segment not allowed: {0:?}")]
    IllegalSegment(String),
}

/// A relative, sandboxed resource path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResPath {
    segments: Vec<String>,
}

impl ResPath {
    /// Parse a `/`-separated relative path
    pub fn new(path: &str) -> Result<Self, ResPathError> {
        if has_drive_prefix(path) {
            return Err(ResPathError::Absolute(path.to_string()));
        }
        Ok(Self {
            segments: parse_segments(path)?,
        })
    }

    /// Append a relative path beneath this one
    pub fn join(&self, child: &str) -> Result<Self, ResPathError> {
        let mut segments = self.segments.clone();
        segments.extend(parse_segments(child)?);
        Ok(Self { segments })
    }

    /// The final segment of the path
    #[cfg(test)]
    pub fn filename(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Resolve against a filesystem root
    pub fn to_path_under(&self, root: &std::path::Path) -> PathBuf {
        let mut path = root.to_path_buf();
        path.extend(&self.segments);
        path
    }
}

impl fmt::Display for ResPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

fn parse_segments(path: &str) -> Result<Vec<String>, ResPathError> {
    if path.is_empty() {
        return Err(ResPathError::Empty);
    }
    if path.starts_with(SEPARATOR) || path.starts_with('\\') {
        return Err(ResPathError::Absolute(path.to_string()));
    }

    path.split(SEPARATOR)
        .map(|segment| validate_segment(segment).map(str::to_string))
        .collect()
}

fn validate_segment(segment: &str) -> Result<&str, ResPathError> {
    match segment {
        "" | "." | ".." => Err(ResPathError::IllegalSegment(segment.to_string())),
        s if s.contains('\\') || s.contains('\0') => {
            Err(ResPathError::IllegalSegment(s.to_string()))
        }
        // `PathBuf::push` on Windows restarts the path at a drive-prefixed component
        s if has_drive_prefix(s) => Err(ResPathError::IllegalSegment(s.to_string())),
        s => Ok(s),
    }
}

fn has_drive_prefix(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
