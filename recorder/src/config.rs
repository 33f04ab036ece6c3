use std::path::{Path, PathBuf};

use serde::Deserialize;
use types::CourtBounds;

use crate::RecorderError;

/// Optional YAML settings for `record_game`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RecorderConfig {
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub court: Option<CourtBounds>,
}

impl RecorderConfig {
    pub fn from_yaml_file(path: &Path) -> Result<Self, RecorderError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RecorderError::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, RecorderError> {
        serde_yaml::from_str(content).map_err(|e| RecorderError::Config(e.to_string()))
    }
}
