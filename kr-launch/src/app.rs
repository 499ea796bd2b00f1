use crate::cli::{Cli, OutputFormat};
use anyhow::Context;
use clap::Parser;
use kr_launch_lib::config::LaunchConfig;
use kr_launch_lib::error::LaunchError;
use kr_launch_lib::invocation::Invocation;
use kr_launch_lib::params::ParamOverrides;
use kr_launch_lib::runner::SystemRunner;
use kr_launch_lib::{ExitPolicy, Launcher};
use std::io::{self, Write};
use std::process::ExitCode;

pub fn run() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let dry_run = cli.dry_run;
    let format = cli.format;
    let check_paths = cli.check_paths;
    let policy = if cli.strict {
        ExitPolicy::Propagate
    } else {
        ExitPolicy::Ignore
    };

    let launcher = build_launcher(cli)?;

    if dry_run {
        print_invocation(&launcher.invocation(), format)?;
        return Ok(ExitCode::SUCCESS);
    }

    if check_paths {
        launcher.check_paths()?;
    }

    let exit = launcher.launch(&mut SystemRunner)?;

    match policy.enforce(exit) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err @ LaunchError::ChildFailed(code)) => {
            eprintln!("Error: {err}");
            Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
        }
        Err(err) => Err(err.into()),
    }
}

fn build_launcher(cli: Cli) -> anyhow::Result<Launcher> {
    let Cli {
        config,
        base_dir,
        working_dir,
        params,
        ..
    } = cli;

    let config = match config {
        Some(path) => LaunchConfig::from_file(&path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => LaunchConfig::default(),
    };

    let mut launcher = Launcher::from_config(config);

    if let Some(base_dir) = base_dir {
        launcher.layout.base_dir = base_dir;
    }
    if working_dir.is_some() {
        launcher.working_dir = working_dir;
    }

    let overrides = ParamOverrides::from(params);
    if !overrides.is_empty() {
        log::debug!("Applying parameter overrides: {overrides:?}");
        launcher.parameters.apply(overrides);
    }

    Ok(launcher)
}

fn print_invocation(invocation: &Invocation, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Text => {
            let mut lines = vec![invocation.program.to_string_lossy().into_owned()];
            lines.extend(
                invocation
                    .args()
                    .iter()
                    .map(|arg| arg.to_string_lossy().into_owned()),
            );
            lines.join("\n")
        }
        OutputFormat::Json => invocation
            .to_json()
            .context("Failed to serialize invocation")?,
    };

    let mut stdout = io::stdout();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
