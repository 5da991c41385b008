//! Filesystem blob store backend for local development.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::{join_public_url, BlobStore, StorageError};

/// Blob store that writes objects under `<root>/<bucket>/<name>`.
pub struct LocalBlobStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: String) -> Self {
        Self {
            root: root.into(),
            public_base_url,
        }
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn upload(&self, bucket: &str, name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let dir = self.root.join(bucket);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(name), bytes).await?;

        tracing::debug!(bucket, name, size = bytes.len(), "Wrote object to local storage");
        Ok(())
    }

    fn public_url(&self, bucket: &str, name: &str) -> String {
        join_public_url(&self.public_base_url, bucket, name)
    }
}
