//! In-memory storage backend
//!
//! Used by tests and local demos. Failure injection lets callers exercise
//! the persistence-failure paths without touching the filesystem.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use crate::{ContentDocument, StorageBackend, StoreError};

/// Storage backend holding the document in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    document: Arc<Mutex<Option<ContentDocument>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryBackend {
    /// Create an empty backend (no document persisted yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that already holds a document
    pub fn with_document(document: ContentDocument) -> Self {
        let backend = Self::new();
        if let Ok(mut slot) = backend.document.lock() {
            *slot = Some(document);
        }
        backend
    }

    /// Make subsequent reads fail
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent writes fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Current stored document, bypassing failure injection
    pub fn snapshot(&self) -> Option<ContentDocument> {
        self.document.lock().ok().and_then(|slot| slot.clone())
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|n| *n).unwrap_or(0)
    }

    fn poisoned() -> StoreError {
        StoreError::Unavailable("memory backend lock poisoned".to_string())
    }
}

#[async_trait::async_trait]
impl StorageBackend for MemoryBackend {
    async fn read(&self) -> Result<Option<ContentDocument>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected read failure".to_string()));
        }
        let slot = self.document.lock().map_err(|_| Self::poisoned())?;
        Ok(slot.clone())
    }

    async fn write(&self, document: &ContentDocument) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected write failure".to_string()));
        }
        let mut slot = self.document.lock().map_err(|_| Self::poisoned())?;
        *slot = Some(document.clone());

        let mut writes = self.writes.lock().map_err(|_| Self::poisoned())?;
        *writes += 1;
        Ok(())
    }
}
