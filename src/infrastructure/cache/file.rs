//! JSON file inventory mirror
//!
//! Stores the table list as `<dir>/tables.json`, a plain JSON array of
//! numbers, so any process sharing the directory can read it.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::table::{InventoryMirror, INVENTORY_KEY};
use crate::domain::{DomainError, DomainResult, TableNumber};
use crate::shared::errors::InfraError;

pub struct FileInventoryMirror {
    path: PathBuf,
}

impl FileInventoryMirror {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", INVENTORY_KEY)),
        }
    }

    /// Mirror in the per-user cache directory, falling back to the
    /// working directory when the platform has none.
    pub fn in_default_location() -> Self {
        Self::new(default_cache_dir())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_snapshot(&self, tables: &[TableNumber]) -> Result<(), InfraError> {
        let json = serde_json::to_vec(tables)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || replace_file(&path, &json))
            .await
            .map_err(std::io::Error::other)??;
        Ok(())
    }

    async fn read_snapshot(&self) -> Result<Option<Vec<TableNumber>>, InfraError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Write to a uniquely named sibling, then rename over `path`. Readers see
/// either the old or the new content, and concurrent writers never share a
/// temp file.
fn replace_file(path: &Path, bytes: &[u8]) -> Result<(), InfraError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn default_cache_dir() -> PathBuf {
    dirs_next::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("table-booking")
}

fn storage_err(e: InfraError) -> DomainError {
    DomainError::Storage(format!("inventory mirror: {}", e))
}

#[async_trait]
impl InventoryMirror for FileInventoryMirror {
    async fn publish(&self, tables: &[TableNumber]) -> DomainResult<()> {
        debug!(path = %self.path.display(), count = tables.len(), "Publishing table inventory");
        self.write_snapshot(tables).await.map_err(storage_err)
    }

    async fn load(&self) -> DomainResult<Option<Vec<TableNumber>>> {
        self.read_snapshot().await.map_err(storage_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(numbers: &[i64]) -> Vec<TableNumber> {
        numbers.iter().map(|&n| TableNumber::new(n).unwrap()).collect()
    }

    #[tokio::test]
    async fn load_before_publish_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = FileInventoryMirror::new(dir.path());
        assert_eq!(mirror.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn publish_then_load_from_another_instance() {
        let dir = tempfile::tempdir().unwrap();
        FileInventoryMirror::new(dir.path())
            .publish(&tables(&[3, 1, 7]))
            .await
            .unwrap();

        let reader = FileInventoryMirror::new(dir.path());
        assert_eq!(reader.load().await.unwrap(), Some(tables(&[3, 1, 7])));

        let raw = std::fs::read_to_string(reader.path()).unwrap();
        assert_eq!(raw, "[3,1,7]");
    }

    #[tokio::test]
    async fn publish_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mirror = FileInventoryMirror::new(&nested);
        mirror.publish(&tables(&[2])).await.unwrap();
        assert!(nested.join("tables.json").exists());
    }

    #[tokio::test]
    async fn concurrent_publishes_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = std::sync::Arc::new(FileInventoryMirror::new(dir.path()));

        let mut handles = Vec::new();
        for n in 1..=64i64 {
            let mirror = mirror.clone();
            handles.push(tokio::spawn(async move {
                mirror.publish(&tables(&[n])).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let loaded = mirror.load().await.unwrap().unwrap();
        assert_eq!(loaded.len(), 1);

        // Only the mirror file is left behind.
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[tokio::test]
    async fn independent_mirrors_share_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let a = FileInventoryMirror::new(dir.path());
        let b = FileInventoryMirror::new(dir.path());

        let ta = tables(&[1, 2]);
        let tb = tables(&[3]);
        let (ra, rb) = tokio::join!(a.publish(&ta), b.publish(&tb));
        ra.unwrap();
        rb.unwrap();

        let loaded = a.load().await.unwrap();
        assert!(loaded == Some(tables(&[1, 2])) || loaded == Some(tables(&[3])));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = FileInventoryMirror::new(dir.path());
        std::fs::write(mirror.path(), "not json").unwrap();
        let err = mirror.load().await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[tokio::test]
    async fn invalid_table_numbers_are_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = FileInventoryMirror::new(dir.path());
        std::fs::write(mirror.path(), "[1,0]").unwrap();
        assert!(mirror.load().await.is_err());
    }
}
