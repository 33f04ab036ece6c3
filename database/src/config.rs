use std::path::{Path, PathBuf};

use uuid::Uuid;

pub const DATA_DIR_ENV: &str = "SCOREKEEPER_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub fn from_cli_or_env_or_yaml(cli_arg: Option<PathBuf>, yaml_config: Option<PathBuf>) -> Self {
        let data_dir = if let Some(arg) = cli_arg {
            arg
        } else if let Ok(env) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(env)
        } else if let Some(yaml) = yaml_config {
            yaml
        } else {
            PathBuf::from(DEFAULT_DATA_DIR)
        };

        Self { data_dir }
    }

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn matches_path(&self) -> PathBuf {
        self.data_dir.join("matches.json")
    }

    pub fn players_path(&self) -> PathBuf {
        self.data_dir.join("players.json")
    }

    pub fn sessions_dir(&self) -> PathBuf {
        self.data_dir.join("sessions")
    }

    pub fn session_path(&self, match_id: Uuid) -> PathBuf {
        self.sessions_dir().join(format!("{match_id}.json"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
