//! Repository discovery under the code root using a directory walk

use crate::config::Config;
use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::RepositoryEntry;

/// Finds git working directories beneath a root directory
pub struct Discoverer<'a> {
    root: &'a Path,
    marker: &'a str,
}

impl<'a> Discoverer<'a> {
    /// Create a discoverer for the configured code root and marker
    pub fn new(config: &'a Config) -> Self {
        Self {
            root: &config.root,
            marker: &config.marker,
        }
    }

    /// Walk the root and collect every repository, in traversal order.
    ///
    /// Symlinks below the root are not followed and marker directories are
    /// never descended into. A marker directly in the root is not reported.
    pub fn discover(&self) -> Result<Vec<RepositoryEntry>> {
        debug!("Searching for repositories under {}", self.root.display());

        let mut entries = Vec::new();
        let mut walker = WalkDir::new(self.root).follow_links(false).into_iter();

        while let Some(result) = walker.next() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    if e.io_error().map(|io| io.kind()) == Some(ErrorKind::NotFound) {
                        debug!("Code root does not exist: {}", self.root.display());
                        return Ok(entries);
                    }
                    return Err(self.discovery_error(e));
                }
                Err(e) => {
                    warn!("Skipping unreadable directory: {}", e);
                    continue;
                }
            };

            if entry.depth() == 0 {
                if !entry.file_type().is_dir() {
                    let e = std::io::Error::new(ErrorKind::NotADirectory, "not a directory");
                    return Err(self.discovery_error(e));
                }
                continue;
            }

            if entry.file_name() != self.marker || !entry.file_type().is_dir() {
                continue;
            }

            walker.skip_current_dir();

            if entry.depth() < 2 {
                continue;
            }

            if let Some(repo) = entry_from_marker(entry.path()) {
                entries.push(repo);
            }
        }

        debug!(
            "Found {} repositories under {}",
            entries.len(),
            self.root.display()
        );
        Ok(entries)
    }

    fn discovery_error(&self, source: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::Discovery {
            root: self.root.to_path_buf(),
            source: Box::new(source),
        }
    }
}

/// Build an entry from the path of a marker directory.
///
/// Returns `None` when the working directory has no usable final segment.
pub fn entry_from_marker(marker_path: &Path) -> Option<RepositoryEntry> {
    let working_dir = marker_path.parent()?;
    let name = working_dir.file_name()?.to_string_lossy().into_owned();

    if name.is_empty() {
        return None;
    }

    Some(RepositoryEntry::new(name, working_dir))
}
