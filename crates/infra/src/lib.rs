//! Infrastructure layer: repository, document storage, config.

pub mod config;
pub mod repository;
pub mod store;

pub use config::StorageConfig;
pub use repository::Repository;
pub use store::{Document, DocumentStore, InMemoryDocumentStore, JsonFileStore, StoreError};
