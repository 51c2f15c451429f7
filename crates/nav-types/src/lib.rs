//! Foundation types for the navigation dashboard.
//!
//! This crate provides the data model shared by every other crate in the
//! workspace. It has no I/O and no locking; it only describes what a dataset
//! looks like on disk and on the wire.
//!
//! # Key Types
//!
//! - [`Category`]: a named group of links with an opaque sort key
//! - [`Item`]: a single link, optionally attached to a category
//! - [`AdminAuth`]: the single admin identity (username + password digest)
//! - [`Dataset`]: the full persisted aggregate
//! - [`DatasetView`]: the dataset as exposed to unauthenticated readers
//!
//! Categories and items draw their ids from one shared counter
//! ([`Dataset::next_id`]), so an id is unique across both kinds.

pub mod admin;
pub mod catalog;
pub mod dataset;
pub mod error;

pub use admin::{AdminAuth, AdminView, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
pub use catalog::{Category, CategoryDraft, EntityId, EntityKind, Item, ItemDraft};
pub use dataset::{Dataset, DatasetView};
pub use error::TypeError;
