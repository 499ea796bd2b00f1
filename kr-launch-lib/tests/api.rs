use assert_fs::prelude::*;
use kr_launch_lib::error::LaunchError;
use kr_launch_lib::invocation::Invocation;
use kr_launch_lib::layout::ProjectLayout;
use kr_launch_lib::params::RunParameters;
use kr_launch_lib::runner::{ChildExit, ProcessRunner};
use kr_launch_lib::{ExitPolicy, Launcher};
use std::ffi::OsString;
use std::path::Path;

/// Records every invocation instead of spawning a process.
struct RecordingRunner {
    calls: Vec<Invocation>,
    exit: ChildExit,
}

impl RecordingRunner {
    fn exiting_with(exit: ChildExit) -> Self {
        Self {
            calls: Vec::new(),
            exit,
        }
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ChildExit, LaunchError> {
        self.calls.push(invocation.clone());
        Ok(self.exit)
    }
}

#[test]
fn launch_passes_script_and_nine_flags_in_order() {
    let launcher = Launcher::new(ProjectLayout::new("/srv/thesis"), RunParameters::default());
    let mut runner = RecordingRunner::exiting_with(ChildExit::from_code(0));

    launcher.launch(&mut runner).expect("launch succeeds");

    assert_eq!(runner.calls.len(), 1);
    let invocation = &runner.calls[0];
    assert_eq!(
        invocation.program,
        Path::new("/srv/thesis")
            .join(".venv")
            .join("Scripts")
            .join("python.exe")
    );

    let expected_script = Path::new("/srv/thesis")
        .join("Code")
        .join("Alternative_KR_return")
        .join("source")
        .join("ret_curve_estimation.py");
    let args = invocation.args();
    assert_eq!(args.len(), 10);
    assert_eq!(args[0], expected_script.into_os_string());
    assert_eq!(
        &args[1..],
        [
            "--idx_ver=3",
            "--use_maturity_mask=True",
            "--flg_mp=False",
            "--num_t_each_trunk=1000",
            "--R=10",
            "--l_fixed=10.0",
            "--alpha_fixed=0.05",
            "--delta_fixed=0.0",
            "--dir_out_base=./Code/Alternative_KR_return/KR_ret_models/",
        ]
        .map(OsString::from)
    );
}

#[test]
fn launching_twice_issues_two_identical_invocations() {
    let launcher = Launcher::default();
    let mut runner = RecordingRunner::exiting_with(ChildExit::from_code(0));

    launcher.launch(&mut runner).unwrap();
    launcher.launch(&mut runner).unwrap();

    assert_eq!(runner.calls.len(), 2);
    assert_eq!(runner.calls[0], runner.calls[1]);
}

#[test]
fn child_failure_is_returned_not_raised() {
    let launcher = Launcher::default();
    let mut runner = RecordingRunner::exiting_with(ChildExit::from_code(1));

    let exit = launcher.launch(&mut runner).expect("launch itself succeeds");

    assert_eq!(exit.code(), Some(1));
    assert!(ExitPolicy::Ignore.enforce(exit).is_ok());
    assert!(ExitPolicy::Propagate.enforce(exit).is_err());
}

#[test]
fn check_paths_reports_missing_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    let launcher = Launcher::new(ProjectLayout::new(temp.path()), RunParameters::default());

    assert!(matches!(
        launcher.check_paths(),
        Err(LaunchError::InterpreterNotFound(_))
    ));

    temp.child(".venv/Scripts/python.exe").write_str("").unwrap();
    assert!(matches!(
        launcher.check_paths(),
        Err(LaunchError::ScriptNotFound(_))
    ));

    temp.child("Code/Alternative_KR_return/source/ret_curve_estimation.py")
        .write_str("")
        .unwrap();
    assert!(launcher.check_paths().is_ok());
}

#[test]
fn config_file_drives_the_launcher() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_file = temp.child("launch.toml");
    config_file
        .write_str(
            r#"base_dir = "/srv/thesis"

[parameters]
flg_mp = true
delta_fixed = 0.5
"#,
        )
        .unwrap();

    let config = kr_launch_lib::config::LaunchConfig::from_file(config_file.path()).unwrap();
    let invocation = Launcher::from_config(config).invocation();

    assert!(invocation.program.starts_with("/srv/thesis"));
    assert_eq!(invocation.flags[2], "--flg_mp=True");
    assert_eq!(invocation.flags[7], "--delta_fixed=0.5");
}
