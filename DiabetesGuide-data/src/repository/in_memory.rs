use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::models::PatientRecord;
use super::errors::RepositoryError;

#[derive(Debug, Default)]
struct StoredDataset {
    source: Option<PathBuf>,
    records: Vec<PatientRecord>,
}

/// In-memory storage for patient records
///
/// Clones share the same underlying storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    dataset: Arc<RwLock<StoredDataset>>,
}

impl InMemoryStorage {
    /// Create a new, empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored records and remember where they came from
    pub fn replace_all(&self, source: Option<PathBuf>, records: Vec<PatientRecord>) -> Result<usize, RepositoryError> {
        let mut store = self.dataset.write()?;
        store.source = source;
        store.records = records;
        Ok(store.records.len())
    }

    /// Get all records in dataset order
    pub fn get_all(&self) -> Result<Vec<PatientRecord>, RepositoryError> {
        let store = self.dataset.read()?;
        Ok(store.records.clone())
    }

    /// Number of stored records
    pub fn count(&self) -> Result<usize, RepositoryError> {
        let store = self.dataset.read()?;
        Ok(store.records.len())
    }

    /// File the records were loaded from, if any
    pub fn source(&self) -> Result<Option<PathBuf>, RepositoryError> {
        let store = self.dataset.read()?;
        Ok(store.source.clone())
    }
}
