//! Artifact storage abstractions used by the checkout boundary.
//!
//! Persistence is an async collaborator: the boundary hands over a unique
//! name and the raw upload bytes and receives a retrievable URL.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::StorageError;

/// Persists uploaded mesh bytes under a unique name.
///
/// Implementations must reject a name they already hold rather than
/// overwrite it.
///
/// # Examples
/// ```
/// use quote_engine::store::{ArtifactStore, InMemoryArtifactStore};
/// # tokio_test_block_on(async {
/// let store = InMemoryArtifactStore::new("memory://uploads");
/// let url = store.store("part.stl", b"solid").await.unwrap();
/// assert_eq!(url, "memory://uploads/part.stl");
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Stores `bytes` under `unique_name` and returns its URL.
    async fn store(&self, unique_name: &str, bytes: &[u8]) -> Result<String, StorageError>;
}

/// In-memory store intended for tests and WASM usage.
#[derive(Debug, Default)]
pub struct InMemoryArtifactStore {
    base_url: String,
    artifacts: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryArtifactStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            artifacts: Mutex::default(),
        }
    }

    /// Bytes stored under `unique_name`, if any.
    pub fn get(&self, unique_name: &str) -> Option<Vec<u8>> {
        self.lock(unique_name).ok()?.get(unique_name).cloned()
    }

    /// Number of stored artifacts.
    pub fn len(&self) -> usize {
        self.artifacts.lock().map_or(0, |artifacts| artifacts.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self, name: &str) -> Result<MutexGuard<'_, HashMap<String, Vec<u8>>>, StorageError> {
        self.artifacts.lock().map_err(|_| StorageError::Backend {
            name: name.to_string(),
            message: "artifact map poisoned".to_string(),
        })
    }
}

#[async_trait]
impl ArtifactStore for InMemoryArtifactStore {
    async fn store(&self, unique_name: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let mut artifacts = self.lock(unique_name)?;
        if artifacts.contains_key(unique_name) {
            return Err(StorageError::Conflict {
                name: unique_name.to_string(),
            });
        }
        artifacts.insert(unique_name.to_string(), bytes.to_vec());
        Ok(format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            unique_name
        ))
    }
}
