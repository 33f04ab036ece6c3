use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Match not found: {0}")]
    MatchNotFound(Uuid),

    #[error("Player not found: {0}")]
    PlayerNotFound(Uuid),

    #[error("Revision conflict: expected {expected}, found {actual}")]
    RevisionConflict { expected: u64, actual: u64 },

    #[error("Invalid patch: {0}")]
    InvalidPatch(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DatabaseError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        DatabaseError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DatabaseError::MatchNotFound(_) | DatabaseError::PlayerNotFound(_)
        )
    }
}
