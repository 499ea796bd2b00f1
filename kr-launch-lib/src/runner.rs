//! Execution of an [`Invocation`] as a blocking child process.

use crate::error::LaunchError;
use crate::invocation::Invocation;
use std::process::{Command, ExitStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a child process ended.
pub struct ChildExit {
    code: Option<i32>,
}

impl ChildExit {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// A child that ended without an exit code (killed by a signal).
    pub fn terminated() -> Self {
        Self { code: None }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Runs invocations to completion.
pub trait ProcessRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ChildExit, LaunchError>;
}

#[derive(Debug, Default, Clone, Copy)]
/// Spawns the real interpreter with inherited stdio and waits for it.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ChildExit, LaunchError> {
        let mut command = Command::new(&invocation.program);
        command.args(invocation.args());
        if let Some(dir) = &invocation.working_dir {
            command.current_dir(dir);
        }

        let status = command.status().map_err(|e| LaunchError::Spawn {
            program: invocation.program.clone(),
            reason: e.to_string(),
        })?;

        Ok(status.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn exit_codes_map_to_success() {
        assert!(ChildExit::from_code(0).success());
        assert!(!ChildExit::from_code(2).success());
        assert!(!ChildExit::terminated().success());
        assert_eq!(ChildExit::terminated().code(), None);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let invocation = Invocation {
            program: PathBuf::from("/nonexistent/kr-launch/python"),
            script: PathBuf::from("run.py"),
            flags: Vec::new(),
            working_dir: None,
        };

        let err = SystemRunner.run(&invocation).unwrap_err();
        assert!(matches!(err, LaunchError::Spawn { .. }));
        assert!(err.to_string().contains("/nonexistent/kr-launch/python"));
    }

    #[cfg(unix)]
    #[test]
    fn reports_child_exit_code() {
        let invocation = Invocation {
            program: PathBuf::from("/bin/sh"),
            script: PathBuf::from("-c"),
            flags: vec!["exit 3".to_string()],
            working_dir: None,
        };

        let exit = SystemRunner.run(&invocation).unwrap();
        assert_eq!(exit.code(), Some(3));
    }
}
