//! `kr-launch-lib` builds and runs the daily kernel-ridge return curve
//! estimation: it locates the project's virtual-environment interpreter and
//! estimation script, renders the run parameters as `--name=value` flags and
//! starts the interpreter as a blocking child process.
//!
//! # Example
//!
//! ```rust
//! use kr_launch_lib::layout::ProjectLayout;
//! use kr_launch_lib::params::RunParameters;
//! use kr_launch_lib::Launcher;
//!
//! let launcher = Launcher::new(ProjectLayout::new("/srv/thesis"), RunParameters::default());
//! let invocation = launcher.invocation();
//!
//! assert_eq!(invocation.flags.len(), 9);
//! assert_eq!(invocation.flags[4], "--R=10");
//! assert!(invocation.script.ends_with("ret_curve_estimation.py"));
//! ```

pub mod config;
pub mod error;
pub mod invocation;
pub mod layout;
pub mod params;
pub mod runner;

use crate::config::LaunchConfig;
use crate::error::LaunchError;
use crate::invocation::Invocation;
use crate::layout::ProjectLayout;
use crate::params::RunParameters;
use crate::runner::{ChildExit, ProcessRunner};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// What the launcher does with an unsuccessful child exit.
pub enum ExitPolicy {
    /// The child's outcome never affects the launcher's result.
    #[default]
    Ignore,
    /// An unsuccessful child becomes a [`LaunchError`].
    Propagate,
}

impl ExitPolicy {
    pub fn enforce(self, exit: ChildExit) -> Result<(), LaunchError> {
        match (self, exit.code()) {
            (ExitPolicy::Ignore, _) | (ExitPolicy::Propagate, Some(0)) => Ok(()),
            (ExitPolicy::Propagate, Some(code)) => Err(LaunchError::ChildFailed(code)),
            (ExitPolicy::Propagate, None) => Err(LaunchError::ChildTerminated),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Everything needed to start one estimation run.
pub struct Launcher {
    pub layout: ProjectLayout,
    pub parameters: RunParameters,
    pub working_dir: Option<PathBuf>,
}

impl Launcher {
    pub fn new(layout: ProjectLayout, parameters: RunParameters) -> Self {
        Self {
            layout,
            parameters,
            working_dir: None,
        }
    }

    pub fn from_config(config: LaunchConfig) -> Self {
        Self {
            layout: config.layout(),
            parameters: config.parameters,
            working_dir: config.working_dir,
        }
    }

    pub fn invocation(&self) -> Invocation {
        Invocation {
            program: self.layout.interpreter_path(),
            script: self.layout.script_path(),
            flags: self.parameters.flags(),
            working_dir: self.working_dir.clone(),
        }
    }

    /// Fails if the interpreter or the script does not exist on disk.
    pub fn check_paths(&self) -> Result<(), LaunchError> {
        let interpreter = self.layout.interpreter_path();
        if !interpreter.is_file() {
            return Err(LaunchError::InterpreterNotFound(interpreter));
        }

        let script = self.layout.script_path();
        if !script.is_file() {
            return Err(LaunchError::ScriptNotFound(script));
        }

        Ok(())
    }

    /// Runs the estimation script once and waits for it to finish.
    ///
    /// Every call issues a fresh child process with the same arguments. The
    /// child's exit is returned as-is; apply an [`ExitPolicy`] to turn it into
    /// an error.
    pub fn launch<R: ProcessRunner + ?Sized>(
        &self,
        runner: &mut R,
    ) -> Result<ChildExit, LaunchError> {
        let invocation = self.invocation();
        log::info!("Launching {}", invocation.command_line());
        if let Some(dir) = &invocation.working_dir {
            log::debug!("Working directory: {}", dir.display());
        }

        let exit = runner.run(&invocation)?;

        match exit.code() {
            Some(0) => log::info!("Estimation run finished successfully"),
            Some(code) => log::warn!("Estimation run exited with status {code}"),
            None => log::warn!("Estimation run was terminated by a signal"),
        }

        Ok(exit)
    }
}
