//! Config file support. TOML and YAML files share one schema.

use crate::error::LaunchError;
use crate::layout::ProjectLayout;
use crate::params::RunParameters;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(ConfigFormat::Toml),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchConfig {
    pub base_dir: Option<PathBuf>,
    /// Interpreter location relative to `base_dir`, one path segment per entry.
    pub interpreter: Option<Vec<String>>,
    /// Script location relative to `base_dir`, one path segment per entry.
    pub script: Option<Vec<String>>,
    pub working_dir: Option<PathBuf>,
    pub parameters: RunParameters,
}

impl LaunchConfig {
    pub fn from_file(path: &Path) -> Result<Self, LaunchError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| LaunchError::UnsupportedConfigFormat(path.to_path_buf()))?;
        let data = fs::read_to_string(path)
            .map_err(|e| LaunchError::Io(format!("{}: {e}", path.display())))?;

        log::debug!("Loading {format:?} config from {}", path.display());
        Self::parse(&data, format)
    }

    pub fn parse(data: &str, format: ConfigFormat) -> Result<Self, LaunchError> {
        match format {
            ConfigFormat::Toml => {
                toml::from_str(data).map_err(|e| LaunchError::ConfigParse(e.to_string()))
            }
            ConfigFormat::Yaml => {
                if data.trim().is_empty() {
                    return Ok(Self::default());
                }
                serde_yaml::from_str(data).map_err(|e| LaunchError::ConfigParse(e.to_string()))
            }
        }
    }

    /// The project layout described by this config, with unset parts left at
    /// their defaults.
    pub fn layout(&self) -> ProjectLayout {
        let mut layout = match &self.base_dir {
            Some(base_dir) => ProjectLayout::new(base_dir),
            None => ProjectLayout::default(),
        };
        if let Some(interpreter) = &self.interpreter {
            layout.interpreter = interpreter.clone();
        }
        if let Some(script) = &self.script {
            layout.script = script.clone();
        }
        layout
    }
}
