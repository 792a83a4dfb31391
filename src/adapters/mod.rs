//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Key-value persistence (file, in-memory)
//! - `catalog` - Static catalog loading from JSON files

pub mod catalog;
pub mod storage;

pub use catalog::FileCatalogSource;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
