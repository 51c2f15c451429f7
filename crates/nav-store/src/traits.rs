use nav_types::Dataset;

use crate::error::StoreResult;

/// Durable home of a dataset.
///
/// Implementations must satisfy these rules:
/// - `load` is total. Missing or damaged state yields a usable dataset,
///   never an error.
/// - `save` writes the whole dataset; there are no partial or incremental
///   writes.
/// - `save` errors are returned to the caller and never retried.
///
/// Callers serialize access themselves; backends need not lock.
pub trait DatasetPersistence: Send + Sync {
    /// Read the stored dataset, falling back to defaults.
    fn load(&self) -> Dataset;

    /// Replace the stored dataset.
    fn save(&self, dataset: &Dataset) -> StoreResult<()>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

impl<T: DatasetPersistence + ?Sized> DatasetPersistence for std::sync::Arc<T> {
    fn load(&self) -> Dataset {
        (**self).load()
    }

    fn save(&self, dataset: &Dataset) -> StoreResult<()> {
        (**self).save(dataset)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
