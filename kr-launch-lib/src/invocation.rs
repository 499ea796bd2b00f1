use serde::Serialize;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A fully resolved child-process invocation: interpreter, script and flags.
pub struct Invocation {
    pub program: PathBuf,
    pub script: PathBuf,
    pub flags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

impl Invocation {
    /// Arguments passed to the interpreter: the script path followed by the flags.
    pub fn args(&self) -> Vec<OsString> {
        std::iter::once(self.script.clone().into_os_string())
            .chain(self.flags.iter().map(OsString::from))
            .collect()
    }

    /// Renders the invocation as a single shell-like line for logs.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.to_string_lossy().into_owned())
            .chain(
                self.args()
                    .iter()
                    .map(|arg| arg.to_string_lossy().into_owned()),
            )
            .map(|arg| quote_if_needed(&arg))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn quote_if_needed(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'') {
        format!("\"{}\"", arg.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        arg.to_string()
    }
}
