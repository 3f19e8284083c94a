//! Repository discovery and listing
//!
//! Provides functionality for:
//! - Finding git working directories under the code root
//! - Rendering them as an aligned table for the selector
//! - Parsing a selected table line back into a repository name

mod discovery;
mod listing;

pub use discovery::*;
pub use listing::*;

use std::path::PathBuf;

/// A git working directory found under the code root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    /// Final path segment of the working directory (not unique)
    pub name: String,
    /// Path to the working directory, without the marker segment
    pub path: PathBuf,
}

impl RepositoryEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
