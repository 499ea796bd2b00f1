//! Defines the command-line interface for the application.

use clap::builder::BoolishValueParser;
use clap::{Parser, ValueEnum};
use kr_launch_lib::params::ParamOverrides;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "kr-launch",
    version,
    about = "Run the daily kernel-ridge return curve estimation in the project's virtual environment."
)]
pub struct Cli {
    /// Load settings from a TOML or YAML file.
    #[arg(short, long, value_name = "CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Project root containing the virtual environment and the estimation script.
    #[arg(short, long, env = "KR_LAUNCH_BASE_DIR", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Directory the estimation script runs in. [default: current directory]
    #[arg(short, long, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    #[command(flatten)]
    pub params: ParamArgs,

    /// Print the command instead of running it.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output format for --dry-run.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fail early if the interpreter or the script is missing.
    #[arg(long)]
    pub check_paths: bool,

    /// Exit with the child's status when the estimation run fails.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug, Default)]
pub struct ParamArgs {
    // --- Estimation parameters ---
    /// Version of the maturity index grid.
    #[arg(long, value_name = "N")]
    pub idx_ver: Option<u32>,

    /// Mask observations outside the maturity range.
    #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub use_maturity_mask: Option<bool>,

    /// Let the script use multiprocessing.
    #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub flg_mp: Option<bool>,

    /// Number of dates processed per trunk.
    #[arg(long, value_name = "N")]
    pub num_t_each_trunk: Option<u64>,

    /// Repeat count, passed to the script as --R.
    #[arg(short = 'R', long, value_name = "N")]
    pub repeats: Option<u32>,

    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub l_fixed: Option<f64>,

    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub alpha_fixed: Option<f64>,

    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub delta_fixed: Option<f64>,

    /// Output directory, relative to the working directory.
    #[arg(long, value_name = "DIR")]
    pub dir_out_base: Option<String>,
}

impl From<ParamArgs> for ParamOverrides {
    fn from(args: ParamArgs) -> Self {
        ParamOverrides {
            idx_ver: args.idx_ver,
            use_maturity_mask: args.use_maturity_mask,
            flg_mp: args.flg_mp,
            num_t_each_trunk: args.num_t_each_trunk,
            repeats: args.repeats,
            l_fixed: args.l_fixed,
            alpha_fixed: args.alpha_fixed,
            delta_fixed: args.delta_fixed,
            dir_out_base: args.dir_out_base,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// The interpreter, then one argument per line.
    Text,
    /// The invocation as a JSON object.
    Json,
}
