use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::fs;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::SnapshotStore,
};

/// Key/value store keeping one JSON file per key under a directory.
///
/// Writes go to a temp file that is renamed over the target, so a reader sees
/// either the old blob or the new one.
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(AppError::InvalidInput(format!("invalid store key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn storage_error(action: &str, path: &Path, err: std::io::Error) -> AppError {
    AppError::Storage(format!("{} {}: {}", action, path.display(), err))
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_error("reading", &path, err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| storage_error("creating", &self.dir, e))?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .await
            .map_err(|e| storage_error("writing", &tmp, e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| storage_error("replacing", &path, e))
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error("removing", &path, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "openinvite.entitlements.snapshot.v1";

    #[tokio::test]
    async fn test_missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path());
        assert_eq!(store.get(KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_creates_dir_and_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path().join("nested"));

        store.set(KEY, r#"{"v":1}"#).await.unwrap();
        store.set(KEY, r#"{"v":2}"#).await.unwrap();

        assert_eq!(store.get(KEY).await.unwrap().as_deref(), Some(r#"{"v":2}"#));
        assert!(dir.path().join("nested").join(format!("{KEY}.json")).exists());
        assert!(!dir.path().join("nested").join(format!("{KEY}.json.tmp")).exists());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path());

        store.set(KEY, "{}").await.unwrap();
        store.remove(KEY).await.unwrap();
        store.remove(KEY).await.unwrap();
        assert_eq!(store.get(KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path());

        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(
                store.set(key, "{}").await,
                Err(AppError::InvalidInput(_))
            ));
        }
    }
}
