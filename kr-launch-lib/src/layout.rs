use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_DIR: &str = r"D:\Document\EPFL_Coursework\MasterThesis";
pub const DEFAULT_INTERPRETER: &[&str] = &[".venv", "Scripts", "python.exe"];
pub const DEFAULT_SCRIPT: &[&str] = &[
    "Code",
    "Alternative_KR_return",
    "source",
    "ret_curve_estimation.py",
];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Locates the virtual-environment interpreter and the estimation script
/// beneath a project base directory.
pub struct ProjectLayout {
    pub base_dir: PathBuf,
    pub interpreter: Vec<String>,
    pub script: Vec<String>,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR)
    }
}

impl ProjectLayout {
    /// A layout rooted at `base_dir` using the default relative segments.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            interpreter: to_owned_segments(DEFAULT_INTERPRETER),
            script: to_owned_segments(DEFAULT_SCRIPT),
        }
    }

    pub fn interpreter_path(&self) -> PathBuf {
        join_segments(&self.base_dir, &self.interpreter)
    }

    pub fn script_path(&self) -> PathBuf {
        join_segments(&self.base_dir, &self.script)
    }
}

fn to_owned_segments(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|segment| segment.to_string()).collect()
}

fn join_segments(base: &Path, segments: &[String]) -> PathBuf {
    segments
        .iter()
        .fold(base.to_path_buf(), |path, segment| path.join(segment))
}
