use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use nav_types::Dataset;

use crate::codec;
use crate::error::{StoreError, StoreResult};
use crate::traits::DatasetPersistence;

/// In-memory persistence backend.
///
/// Intended for tests and embedding. Saved datasets are kept as encoded
/// bytes and decoded again on load, so the codec is exercised exactly as it
/// would be against a file. Saves can be made to fail to simulate a full or
/// read-only disk.
#[derive(Default)]
pub struct InMemoryPersistence {
    bytes: Mutex<Option<Vec<u8>>>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl InMemoryPersistence {
    /// Create a backend with nothing stored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that already holds `raw` as its stored document.
    pub fn with_bytes(raw: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Mutex::new(Some(raw.into())),
            ..Self::default()
        }
    }

    /// Make every subsequent save fail (or succeed again).
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// The last successfully saved document, decoded.
    pub fn stored(&self) -> Option<Dataset> {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        bytes.as_deref().map(|raw| codec::decode(raw).0)
    }
}

impl DatasetPersistence for InMemoryPersistence {
    fn load(&self) -> Dataset {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        match bytes.as_deref() {
            Some(raw) => codec::decode(raw).0,
            None => codec::default_dataset(),
        }
    }

    fn save(&self, dataset: &Dataset) -> StoreResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other("simulated write failure")));
        }
        let payload = codec::encode(dataset)?;
        *self.bytes.lock().unwrap_or_else(PoisonError::into_inner) = Some(payload);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

impl std::fmt::Debug for InMemoryPersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryPersistence")
            .field("saves", &self.save_count())
            .finish()
    }
}
