//! In-memory blob store used by tests and throwaway environments.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{join_public_url, BlobStore, StorageError};

/// Blob store that keeps objects in a process-local map.
///
/// Counts every upload attempt (successful or not) and can be switched
/// into a failing mode, which makes it double as the upload spy for
/// intake and completion-attachment tests.
#[derive(Default)]
pub struct MemoryBlobStore {
    objects: Mutex<HashMap<(String, String), Vec<u8>>>,
    upload_attempts: AtomicUsize,
    fail_uploads: AtomicBool,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent upload fail (or succeed again).
    pub fn set_fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    /// Total upload attempts observed, including failed ones.
    pub fn upload_attempts(&self) -> usize {
        self.upload_attempts.load(Ordering::SeqCst)
    }

    /// Number of stored objects.
    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// Whether an object exists at `bucket`/`name`.
    pub fn contains(&self, bucket: &str, name: &str) -> bool {
        self.objects
            .lock()
            .unwrap()
            .contains_key(&(bucket.to_string(), name.to_string()))
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn upload(&self, bucket: &str, name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.upload_attempts.fetch_add(1, Ordering::SeqCst);

        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(StorageError::Upload(format!(
                "memory store set to fail: {bucket}/{name}"
            )));
        }

        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), name.to_string()), bytes.to_vec());
        Ok(())
    }

    fn public_url(&self, bucket: &str, name: &str) -> String {
        join_public_url("memory://store", bucket, name)
    }
}
