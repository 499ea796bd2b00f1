//! Defines custom error types for the launcher.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when building or running an invocation fails.
pub enum LaunchError {
    #[error("Failed to start '{program}': {reason}")]
    Spawn { program: PathBuf, reason: String },

    #[error("Child process exited with status {0}")]
    ChildFailed(i32),

    #[error("Child process was terminated before reporting an exit status")]
    ChildTerminated,

    #[error("Interpreter not found at {0}")]
    InterpreterNotFound(PathBuf),

    #[error("Script not found at {0}")]
    ScriptNotFound(PathBuf),

    #[error("Unsupported config format for {0}. Use a .toml, .yaml or .yml file.")]
    UnsupportedConfigFormat(PathBuf),

    #[error("Failed to parse config: {0}")]
    ConfigParse(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for LaunchError {
    fn from(err: std::io::Error) -> Self {
        LaunchError::Io(err.to_string())
    }
}
