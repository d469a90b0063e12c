//! Second-stage compilation through an external Java toolchain.
//!
//! The emitted `.java` file is the primary artifact; running `javac` on it
//! is best effort. The child inherits stdio, is awaited without a timeout,
//! and its exit status is reported back rather than turned into an error.

use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::DEFAULT_JAVAC;

/// Errors raised before a toolchain produces an exit status.
#[derive(Debug, Error)]
pub enum ToolchainError {
    /// The compiler binary could not be started (not on `PATH`, not
    /// executable, ...).
    #[error("failed to run '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Exit status of a finished toolchain run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileStatus {
    pub success: bool,
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl From<ExitStatus> for CompileStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
        }
    }
}

impl fmt::Display for CompileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Something that can compile an emitted Java file.
pub trait Toolchain: fmt::Debug {
    /// Name used in log messages.
    fn name(&self) -> &str;

    /// Compile `source` and wait for the result.
    fn compile(&self, source: &Path) -> Result<CompileStatus, ToolchainError>;
}

/// Invokes `javac <file>` as a child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Javac {
    pub command: String,
}

impl Javac {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for Javac {
    fn default() -> Self {
        Self::new(DEFAULT_JAVAC)
    }
}

impl Toolchain for Javac {
    fn name(&self) -> &str {
        &self.command
    }

    fn compile(&self, source: &Path) -> Result<CompileStatus, ToolchainError> {
        let status = Command::new(&self.command)
            .arg(source)
            .status()
            .map_err(|e| ToolchainError::Spawn {
                command: self.command.clone(),
                source: e,
            })?;
        Ok(status.into())
    }
}
