//! S3-compatible blob store backend.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

use crate::{join_public_url, BlobStore, StorageError};

/// Blob store backed by S3-compatible object storage.
///
/// Credentials and region/endpoint come from the standard AWS environment
/// (env vars, profile, instance metadata). `public_base_url` is the CDN or
/// website origin the buckets are served from.
pub struct S3BlobStore {
    client: aws_sdk_s3::Client,
    public_base_url: String,
}

impl S3BlobStore {
    /// Build a store from ambient AWS configuration.
    pub async fn from_env(public_base_url: String) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: aws_sdk_s3::Client::new(&config),
            public_base_url,
        }
    }

    /// Build a store from an already-constructed client (used when the
    /// endpoint needs overriding, e.g. a non-AWS S3-compatible provider).
    pub fn new(client: aws_sdk_s3::Client, public_base_url: String) -> Self {
        Self {
            client,
            public_base_url,
        }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn upload(&self, bucket: &str, name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(name)
            .body(ByteStream::from(bytes.to_vec()))
            .send()
            .await
            .map_err(|e| StorageError::Upload(format!("s3://{bucket}/{name}: {e}")))?;

        tracing::debug!(bucket, name, size = bytes.len(), "Uploaded object to S3");
        Ok(())
    }

    fn public_url(&self, bucket: &str, name: &str) -> String {
        join_public_url(&self.public_base_url, bucket, name)
    }
}
