use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Persisted documents, one per entity collection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Document {
    Users,
    /// Restaurants embed their product records.
    Enterprises,
    Orders,
    /// Next id of every entity type, so deleted ids are not handed out again.
    Sequences,
}

impl Document {
    pub const ALL: [Document; 4] = [
        Document::Users,
        Document::Enterprises,
        Document::Orders,
        Document::Sequences,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Document::Users => "users.json",
            Document::Enterprises => "enterprises.json",
            Document::Orders => "orders.json",
            Document::Sequences => "sequences.json",
        }
    }
}

impl core::fmt::Display for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Storage error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {document}: {source}")]
    Io {
        document: Document,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed {document}: {source}")]
    Malformed {
        document: Document,
        #[source]
        source: serde_json::Error,
    },
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}

/// Document store abstraction.
///
/// A missing document is not an error: `read` returns `Ok(None)` and the
/// repository starts that collection empty.
pub trait DocumentStore: Send + Sync {
    fn read(&self, document: Document) -> Result<Option<String>, StoreError>;
    fn write(&self, document: Document, contents: &str) -> Result<(), StoreError>;
    /// Delete a document. Removing a missing document succeeds.
    fn remove(&self, document: Document) -> Result<(), StoreError>;
}

impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    fn read(&self, document: Document) -> Result<Option<String>, StoreError> {
        (**self).read(document)
    }

    fn write(&self, document: Document, contents: &str) -> Result<(), StoreError> {
        (**self).write(document, contents)
    }

    fn remove(&self, document: Document) -> Result<(), StoreError> {
        (**self).remove(document)
    }
}

/// In-memory document store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    inner: RwLock<HashMap<Document, String>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn contains(&self, document: Document) -> bool {
        self.inner
            .read()
            .map(|map| map.contains_key(&document))
            .unwrap_or(false)
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("in-memory store lock poisoned".to_string())
}

impl DocumentStore for InMemoryDocumentStore {
    fn read(&self, document: Document) -> Result<Option<String>, StoreError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(&document).cloned())
    }

    fn write(&self, document: Document, contents: &str) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(document, contents.to_string());
        Ok(())
    }

    fn remove(&self, document: Document) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.remove(&document);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_reads_as_none() {
        let store = InMemoryDocumentStore::new();
        assert!(store.read(Document::Users).unwrap().is_none());
    }

    #[test]
    fn write_then_remove() {
        let store = InMemoryDocumentStore::arc();
        store.write(Document::Orders, "[]").unwrap();
        assert_eq!(store.read(Document::Orders).unwrap().as_deref(), Some("[]"));
        assert!(store.contains(Document::Orders));

        store.remove(Document::Orders).unwrap();
        assert!(!store.contains(Document::Orders));
        store.remove(Document::Orders).unwrap();
    }
}
