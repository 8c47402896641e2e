use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::document_store::{Document, DocumentStore, StoreError};

/// One pretty-printed JSON file per document under a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, document: Document) -> PathBuf {
        self.dir.join(document.file_name())
    }
}

impl DocumentStore for JsonFileStore {
    fn read(&self, document: Document) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_of(document)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { document, source }),
        }
    }

    fn write(&self, document: Document, contents: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io { document, source })?;
        fs::write(self.path_of(document), contents)
            .map_err(|source| StoreError::Io { document, source })
    }

    fn remove(&self, document: Document) -> Result<(), StoreError> {
        match fs::remove_file(self.path_of(document)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { document, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_is_not_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.read(Document::Enterprises).unwrap().is_none());
        store.remove(Document::Enterprises).unwrap();
    }

    #[test]
    fn writes_one_file_per_document() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"));

        store.write(Document::Users, "[]").unwrap();
        assert!(store.path_of(Document::Users).exists());
        assert_eq!(store.read(Document::Users).unwrap().as_deref(), Some("[]"));

        store.remove(Document::Users).unwrap();
        assert!(!store.path_of(Document::Users).exists());
    }
}
