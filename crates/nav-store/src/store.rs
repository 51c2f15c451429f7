use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use nav_crypto::default_admin;
use nav_types::{Dataset, DatasetView};

use crate::error::StoreResult;
use crate::file::JsonFilePersistence;
use crate::session::SessionTable;
use crate::traits::DatasetPersistence;

/// Everything guarded by the store lock.
#[derive(Debug)]
pub(crate) struct NavState {
    pub(crate) dataset: Dataset,
    pub(crate) sessions: SessionTable,
}

/// The dataset engine.
///
/// Owns the dataset and the session table behind one exclusive lock. Every
/// operation holds that lock for its whole duration, including the write to
/// the persistence backend, so no two mutations ever interleave their
/// update-then-flush sequences and the stored document always reflects some
/// serial order of operations.
///
/// A failed flush is reported to the caller but not rolled back: memory then
/// holds a change that is not yet durable, and the next successful flush
/// writes it out.
pub struct NavStore {
    state: Mutex<NavState>,
    persistence: Box<dyn DatasetPersistence>,
}

impl NavStore {
    /// Load the dataset from `persistence` and take ownership of it.
    pub fn open(persistence: impl DatasetPersistence + 'static) -> Self {
        let dataset = persistence.load();
        tracing::info!(
            location = %persistence.describe(),
            categories = dataset.categories.len(),
            items = dataset.items.len(),
            "dataset opened"
        );
        Self {
            state: Mutex::new(NavState {
                dataset,
                sessions: SessionTable::new(),
            }),
            persistence: Box::new(persistence),
        }
    }

    /// Open a dataset stored as a JSON file at `path`.
    pub fn open_file(path: impl Into<PathBuf>) -> Self {
        Self::open(JsonFilePersistence::new(path))
    }

    /// Acquire the store lock.
    ///
    /// Every mutation leaves the state consistent before its only fallible
    /// step (the flush), so a poisoned lock still guards valid state.
    pub(crate) fn lock(&self) -> MutexGuard<'_, NavState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write the whole dataset to the backend. Called with the lock held.
    pub(crate) fn flush(&self, dataset: &Dataset) -> StoreResult<()> {
        self.persistence.save(dataset).inspect_err(|e| {
            tracing::error!(
                location = %self.persistence.describe(),
                "failed to save dataset: {e}"
            );
        })
    }

    /// The whole catalog, with the password digest stripped.
    pub fn list_all(&self) -> DatasetView {
        self.lock().dataset.view()
    }

    /// Replace the entire dataset, as when restoring a backup.
    ///
    /// The incoming document is normalized the same way a loaded file is.
    /// Live sessions are kept.
    pub fn restore(&self, mut dataset: Dataset) -> StoreResult<()> {
        dataset.normalize(default_admin);
        let mut state = self.lock();
        state.dataset = dataset;
        tracing::info!(
            categories = state.dataset.categories.len(),
            items = state.dataset.items.len(),
            next_id = state.dataset.next_id,
            "dataset restored"
        );
        self.flush(&state.dataset)
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.lock().sessions.len()
    }

    /// Where the dataset is persisted, for logs.
    pub fn location(&self) -> String {
        self.persistence.describe()
    }
}

impl std::fmt::Debug for NavStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavStore")
            .field("location", &self.location())
            .finish()
    }
}
