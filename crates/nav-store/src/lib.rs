//! Dataset engine for the navigation dashboard.
//!
//! [`NavStore`] owns the whole dataset (categories, items, the shared id
//! counter, the admin identity) plus the table of live admin sessions, all
//! behind a single lock. Every operation runs start to finish under that
//! lock, including the write of the full dataset to its persistence
//! backend.
//!
//! # Persistence Backends
//!
//! All backends implement the [`DatasetPersistence`] trait:
//!
//! - [`JsonFilePersistence`] -- one pretty-printed JSON file
//! - [`InMemoryPersistence`] -- encoded bytes in memory, for tests and embedding
//!
//! # Design Rules
//!
//! 1. Categories and items draw ids from one counter; ids are never reused.
//! 2. Apply to memory, then flush the whole dataset. No partial writes.
//! 3. A failed flush is returned to the caller and not rolled back.
//! 4. Loading never fails; damaged documents are recovered field by field.
//! 5. Deleting a category detaches its items instead of being refused.
//! 6. Credentials are compared in constant time.

mod auth;
mod catalog;
pub mod codec;
pub mod error;
pub mod file;
pub mod memory;
pub mod session;
pub mod store;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use codec::{default_dataset, Recovery};
pub use error::{StoreError, StoreResult};
pub use file::{JsonFilePersistence, DEFAULT_DATA_FILE};
pub use memory::InMemoryPersistence;
pub use session::{Session, SessionTable};
pub use store::NavStore;
pub use traits::DatasetPersistence;
