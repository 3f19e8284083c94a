//! Run configuration for repo-picker
//!
//! Resolved once at startup from the home directory and passed down
//! explicitly; nothing else reads the environment.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory under the home directory that holds all checkouts
pub const CODE_DIR_NAME: &str = "code";

/// Metadata directory that marks a git working directory
pub const MARKER_DIR_NAME: &str = ".git";

/// Interactive line selector invoked to pick a repository
pub const SELECTOR_PROGRAM: &str = "fzf";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root directory searched for repositories (`~/code`)
    pub root: PathBuf,

    /// Name of the repository marker directory
    pub marker: String,

    /// Program used for interactive selection
    pub selector: String,
}

impl Config {
    /// Resolve the configuration from the current user's home directory
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::HomeResolution)?;
        let config = Self::for_home(&home);
        debug!("Using code root: {}", config.root.display());
        Ok(config)
    }

    /// Build the default configuration rooted at `<home>/code`
    pub fn for_home(home: &Path) -> Self {
        Self::with_root(home.join(CODE_DIR_NAME))
    }

    /// Build the default configuration for an explicit code root
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            marker: MARKER_DIR_NAME.to_string(),
            selector: SELECTOR_PROGRAM.to_string(),
        }
    }
}
