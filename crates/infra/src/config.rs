//! Configuration loading and representation.

use std::path::PathBuf;

use serde::Deserialize;

use crate::store::JsonFileStore;

/// Environment variable naming the directory persisted documents live in.
pub const DATA_DIR_ENV: &str = "MARKETPLACE_DATA_DIR";

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Read `MARKETPLACE_DATA_DIR`, falling back to the working directory.
    pub fn from_env() -> Self {
        match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Self::new(dir),
            _ => {
                tracing::debug!("{DATA_DIR_ENV} not set; using the working directory");
                Self::default()
            }
        }
    }

    pub fn open_store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.data_dir)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
