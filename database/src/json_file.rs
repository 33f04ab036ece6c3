use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::DatabaseError;

/// Reads a whole JSON document. A missing file is `Ok(None)`.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, DatabaseError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "File not found, treating as empty");
            Ok(None)
        }
        Err(e) => Err(DatabaseError::io(path, e)),
    }
}

/// Reads a JSON array file. A missing file is an empty collection.
pub async fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatabaseError> {
    Ok(read_json(path).await?.unwrap_or_default())
}

/// Replaces `path` with `bytes` via a synced temp file and a rename, so
/// readers only ever see the old or the new content.
pub async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), DatabaseError> {
    let parent = path
        .parent()
        .ok_or_else(|| DatabaseError::Config(format!("{} has no parent", path.display())))?;
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| DatabaseError::io(parent, e))?;
    let tmp = parent.join(format!(
        ".{}.tmp.{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("file"),
        std::process::id()
    ));
    {
        use tokio::io::AsyncWriteExt as _;
        let mut file = tokio::fs::File::create(&tmp)
            .await
            .map_err(|e| DatabaseError::io(&tmp, e))?;
        file.write_all(bytes)
            .await
            .map_err(|e| DatabaseError::io(&tmp, e))?;
        file.sync_all()
            .await
            .map_err(|e| DatabaseError::io(&tmp, e))?;
    }
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| DatabaseError::io(path, e))?;
    Ok(())
}

pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), DatabaseError> {
    let bytes = serde_json::to_vec_pretty(value)?;
    write_atomic(path, &bytes).await
}
