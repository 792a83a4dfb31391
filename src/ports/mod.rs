//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - Persistence for answers and quiz results
//! - `CatalogSource` - Read-only static questionnaire, report and major data

mod catalog_source;
mod key_value_store;

pub use catalog_source::{CatalogError, CatalogSource};
pub use key_value_store::{keys, validate_key, KeyValueStore, KeyValueStoreError};
