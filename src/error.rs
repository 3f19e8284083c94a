//! Error types for repository picking
//!
//! Every failure aborts the run; nothing here is retried.

use std::path::PathBuf;
use std::process::ExitStatus;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The user's home directory could not be determined
    #[error("could not determine the home directory")]
    HomeResolution,

    /// Walking the code root failed
    #[error("failed to search '{}' for repositories", .root.display())]
    Discovery {
        root: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// Discovery succeeded but there is nothing to pick from
    #[error("no git repositories found under '{}'", .root.display())]
    NoRepositories { root: PathBuf },

    /// The selector could not be started or its output could not be read
    #[error("failed to run selector '{program}'")]
    SelectionIo {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The selector ran but did not exit successfully (e.g. the user pressed Esc)
    #[error("selector '{program}' exited with {status}")]
    SelectorExited { program: String, status: ExitStatus },

    /// The selected line does not name any discovered repository
    #[error("could not find a repository named '{name}'")]
    UnresolvedSelection { name: String },
}
