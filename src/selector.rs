//! Interactive repository selection through an external fuzzy finder
//!
//! The rendered table is written to the selector's stdin; the selector reads
//! keystrokes from the terminal itself and prints the chosen line on stdout.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::repos::{self, RepositoryEntry};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};

/// Runs the external selector program
pub struct Selector {
    program: String,
    args: Vec<String>,
    /// Code root, only used for diagnostics
    root: PathBuf,
}

impl Selector {
    /// Create a selector running the configured program with no arguments
    pub fn new(config: &Config) -> Self {
        Self {
            program: config.selector.clone(),
            args: Vec::new(),
            root: config.root.clone(),
        }
    }

    /// Let the user pick one of `entries` and resolve the choice
    pub fn choose<'e>(&self, entries: &'e [RepositoryEntry]) -> Result<&'e RepositoryEntry> {
        if entries.is_empty() {
            return Err(Error::NoRepositories {
                root: self.root.clone(),
            });
        }

        let line = self.pick(repos::render(entries))?;
        let entry = resolve(entries, &line)?;

        info!("Selected {} at {}", entry.name, entry.path.display());
        Ok(entry)
    }

    /// Feed `table` to the selector and return the line it printed
    pub fn pick(&self, table: String) -> Result<String> {
        debug!("Running selector: {} {:?}", self.program, self.args);

        let io_error = |source| Error::SelectionIo {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(io_error)?;

        // Write on a separate thread so a large table cannot fill the pipe
        // while we wait on stdout
        let stdin = child.stdin.take();
        let writer = thread::spawn(move || {
            if let Some(mut stdin) = stdin {
                if let Err(e) = stdin.write_all(table.as_bytes()) {
                    // The selector may exit before consuming everything
                    if e.kind() != ErrorKind::BrokenPipe {
                        warn!("Failed to write selector input: {}", e);
                    }
                }
            }
        });

        let output = child.wait_with_output().map_err(io_error)?;
        join_writer(writer);

        if !output.status.success() {
            return Err(Error::SelectorExited {
                program: self.program.clone(),
                status: output.status,
            });
        }

        let line = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
        debug!("Selector returned: {:?}", line);

        Ok(line)
    }
}

fn join_writer(writer: JoinHandle<()>) {
    if writer.join().is_err() {
        warn!("Selector input writer panicked");
    }
}

/// Resolve a selected line to the first entry with a matching name
pub fn resolve<'e>(entries: &'e [RepositoryEntry], line: &str) -> Result<&'e RepositoryEntry> {
    let name = repos::parse_name(line);

    entries
        .iter()
        .find(|e| e.name == name)
        .ok_or_else(|| Error::UnresolvedSelection {
            name: name.to_string(),
        })
}
