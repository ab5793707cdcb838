//! # Journal Storage Backends
//!
//! Key-less byte storage the journal store serializes into.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: File writes go through a sibling temp file and rename
//! - 1.0.0: File and in-memory backends

use async_trait::async_trait;
use log::debug;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::io::AsyncWriteExt;

/// Durable storage for the whole serialized journal
#[async_trait]
pub trait JournalStorage: Send + Sync {
    async fn exists(&self) -> io::Result<bool>;

    async fn read_all(&self) -> io::Result<Vec<u8>>;

    /// Replace the stored content
    async fn write_all(&self, bytes: &[u8]) -> io::Result<()>;
}

/// Journal stored in a single file on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> io::Result<PathBuf> {
        let file_name = self.path.file_name().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "journal path has no file name")
        })?;
        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());

        Ok(match self.path.parent() {
            Some(parent) => parent.join(tmp_name),
            None => PathBuf::from(tmp_name),
        })
    }
}

#[async_trait]
impl JournalStorage for FileStorage {
    async fn exists(&self) -> io::Result<bool> {
        tokio::fs::try_exists(&self.path).await
    }

    async fn read_all(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }

    async fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp_path = self.temp_path()?;
        let mut file = tokio::fs::File::create(&tmp_path).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp_path, &self.path).await?;
        debug!("Wrote {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }
}

/// Journal kept in process memory, lost on exit
#[derive(Debug, Default)]
pub struct MemoryStorage {
    contents: Mutex<Option<Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Mutex::new(Some(bytes.into())),
        }
    }

    pub fn contents(&self) -> Option<Vec<u8>> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<u8>>> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl JournalStorage for MemoryStorage {
    async fn exists(&self) -> io::Result<bool> {
        Ok(self.lock().is_some())
    }

    async fn read_all(&self) -> io::Result<Vec<u8>> {
        self.lock()
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "journal not initialised"))
    }

    async fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        *self.lock() = Some(bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("responses.json"));

        assert!(!storage.exists().await.unwrap());

        storage.write_all(b"[]").await.unwrap();
        assert!(storage.exists().await.unwrap());
        assert_eq!(storage.read_all().await.unwrap(), b"[]");

        storage.write_all(b"[1]").await.unwrap();
        assert_eq!(storage.read_all().await.unwrap(), b"[1]");
    }

    #[tokio::test]
    async fn test_file_storage_creates_parent_dirs_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("journal.json");
        let storage = FileStorage::new(&path);

        storage.write_all(b"[]").await.unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("nested").join(".journal.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_storage_write_error_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the rename fail
        let path = dir.path().join("journal.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("occupant"), b"x").unwrap();

        let storage = FileStorage::new(&path);
        assert!(storage.write_all(b"[]").await.is_err());
    }

    #[tokio::test]
    async fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert!(!storage.exists().await.unwrap());
        assert!(storage.read_all().await.is_err());

        storage.write_all(b"[]").await.unwrap();
        assert!(storage.exists().await.unwrap());
        assert_eq!(storage.contents(), Some(b"[]".to_vec()));

        let seeded = MemoryStorage::with_contents("not json");
        assert_eq!(seeded.read_all().await.unwrap(), b"not json");
    }
}
