//! Durable document storage for the repository.
//!
//! Each entity collection is persisted as one document. Stores only move raw
//! JSON text; (de)serialization is the repository's job.

pub mod document_store;
pub mod json_file;

pub use document_store::{Document, DocumentStore, InMemoryDocumentStore, StoreError};
pub use json_file::JsonFileStore;
