//! Local directory artifact store.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quote_engine::{ArtifactStore, StorageError};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Stores artifacts as files in one directory.
///
/// Files are created exclusively; an existing name is a conflict, never an
/// overwrite. A write that fails part way removes the file it created. URLs
/// are `file://` paths.
#[derive(Debug, Clone)]
pub struct LocalDirStore {
    root: PathBuf,
}

impl LocalDirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ArtifactStore for LocalDirStore {
    async fn store(&self, unique_name: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let io_error = |source: std::io::Error| StorageError::Io {
            name: unique_name.to_string(),
            source,
        };

        if unique_name.contains(|c: char| c == '/' || c == '\\') || unique_name.starts_with('.') {
            return Err(StorageError::Backend {
                name: unique_name.to_string(),
                message: "name must be a plain file name".to_string(),
            });
        }

        fs::create_dir_all(&self.root).await.map_err(io_error)?;
        let path = self.root.join(unique_name);

        let file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Err(StorageError::Conflict {
                    name: unique_name.to_string(),
                })
            }
            Err(err) => return Err(io_error(err)),
        };
        let written = write_and_close(file, bytes).await;
        discard_on_error(&path, written).await.map_err(io_error)?;

        let absolute = fs::canonicalize(&path).await.map_err(io_error)?;
        debug!(path = %absolute.display(), bytes = bytes.len(), "artifact written");
        Ok(format!("file://{}", absolute.display()))
    }
}

async fn write_and_close(mut file: File, bytes: &[u8]) -> io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await
}

/// Removes a file left behind by a failed write, then reports the failure.
async fn discard_on_error(path: &Path, result: io::Result<()>) -> io::Result<()> {
    if let Err(err) = result {
        if let Err(cleanup) = fs::remove_file(path).await {
            warn!(path = %path.display(), error = %cleanup, "could not remove partial artifact");
        }
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_bytes_and_returns_file_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDirStore::new(dir.path().join("uploads"));

        let url = store.store("gear_1.stl", b"mesh").await.unwrap();

        assert!(url.starts_with("file://"));
        assert!(url.ends_with("gear_1.stl"));
        let written = std::fs::read(dir.path().join("uploads").join("gear_1.stl")).unwrap();
        assert_eq!(written, b"mesh");
    }

    #[tokio::test]
    async fn existing_name_is_a_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDirStore::new(dir.path());

        store.store("a.stl", b"first").await.unwrap();
        let err = store.store("a.stl", b"second").await.unwrap_err();

        assert!(matches!(err, StorageError::Conflict { .. }));
        assert_eq!(std::fs::read(dir.path().join("a.stl")).unwrap(), b"first");
    }

    #[tokio::test]
    async fn failed_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.stl");
        std::fs::write(&path, b"half a me").unwrap();

        let failure = io::Error::new(ErrorKind::Other, "disk full");
        let err = discard_on_error(&path, Err(failure)).await.unwrap_err();

        assert_eq!(err.to_string(), "disk full");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn successful_write_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whole.stl");
        let file = File::create(&path).await.unwrap();

        let written = write_and_close(file, b"mesh").await;
        discard_on_error(&path, written).await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"mesh");
    }

    #[tokio::test]
    async fn path_like_names_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDirStore::new(dir.path());

        for name in ["../escape.stl", "sub/dir.stl", ".hidden"] {
            let err = store.store(name, b"x").await.unwrap_err();
            assert!(matches!(err, StorageError::Backend { .. }), "{name} accepted");
        }
    }
}
