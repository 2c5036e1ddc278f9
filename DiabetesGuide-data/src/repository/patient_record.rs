use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::dataset::load_dataset;
use crate::models::PatientRecord;
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;

/// Repository trait for patient records
pub trait PatientRecordRepositoryTrait: Send + Sync {
    /// Get all records in dataset order
    fn get_all(&self) -> Result<Vec<PatientRecord>, RepositoryError>;

    /// Number of records currently held
    fn count(&self) -> Result<usize, RepositoryError>;

    /// File the records were loaded from; `None` when nothing was loaded
    fn source(&self) -> Result<Option<PathBuf>, RepositoryError>;
}

/// Repository for patient records loaded from a CSV file
#[derive(Debug, Clone, Default)]
pub struct PatientRecordRepository {
    storage: InMemoryStorage,
}

impl PatientRecordRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }

    /// Create a repository holding the given records
    pub fn with_records(records: Vec<PatientRecord>) -> Result<Self, RepositoryError> {
        let repo = Self::new();
        repo.storage.replace_all(None, records)?;
        Ok(repo)
    }

    /// Load the CSV at `path`, replacing whatever was held before
    ///
    /// On failure the previous contents are left untouched.
    pub fn load_csv(&self, path: impl AsRef<Path>) -> Result<usize, RepositoryError> {
        let path = path.as_ref();
        let records = load_dataset(path).map_err(|e| {
            warn!("Failed to load dataset from {}: {}", path.display(), e);
            RepositoryError::from(e)
        })?;

        let count = self.storage.replace_all(Some(path.to_path_buf()), records)?;
        debug!("Repository now holds {} records", count);
        Ok(count)
    }
}

impl PatientRecordRepositoryTrait for PatientRecordRepository {
    fn get_all(&self) -> Result<Vec<PatientRecord>, RepositoryError> {
        self.storage.get_all()
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        self.storage.count()
    }

    fn source(&self) -> Result<Option<PathBuf>, RepositoryError> {
        self.storage.source()
    }
}

#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;

    /// A handful of rows from the Pima dataset covering every rule branch
    pub fn sample_records() -> Vec<PatientRecord> {
        vec![
            record(6, 148.0, 0.627, 50, Some(1)),
            record(1, 85.0, 0.351, 31, Some(0)),
            record(8, 183.0, 0.672, 32, Some(1)),
            record(1, 89.0, 0.167, 21, Some(0)),
            record(0, 137.0, 2.288, 33, Some(1)),
            record(0, 118.0, 0.232, 54, Some(1)),
            record(2, 197.0, 0.158, 53, Some(1)),
            record(0, 210.0, 0.6, 40, None),
        ]
    }

    /// Build a record with only the fields the rules look at set
    pub fn record(pregnancies: i64, glucose: f64, diabetes_pedigree: f64, age: i64, outcome: Option<u8>) -> PatientRecord {
        PatientRecord {
            pregnancies,
            glucose,
            blood_pressure: 70.0,
            skin_thickness: 30.0,
            insulin: 0.0,
            bmi: 30.0,
            diabetes_pedigree,
            age,
            outcome,
        }
    }

    /// Fixed-content repository for testing
    pub struct StaticRecordRepository {
        records: Vec<PatientRecord>,
        source: Option<PathBuf>,
    }

    impl Default for StaticRecordRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StaticRecordRepository {
        /// Create an empty repository that reports nothing loaded
        pub fn new() -> Self {
            Self { records: Vec::new(), source: None }
        }

        /// Create a repository that reports `records` loaded from `diabetes.csv`
        pub fn with_records(records: Vec<PatientRecord>) -> Self {
            Self {
                records,
                source: Some(PathBuf::from("diabetes.csv")),
            }
        }
    }

    impl PatientRecordRepositoryTrait for StaticRecordRepository {
        fn get_all(&self) -> Result<Vec<PatientRecord>, RepositoryError> {
            Ok(self.records.clone())
        }

        fn count(&self) -> Result<usize, RepositoryError> {
            Ok(self.records.len())
        }

        fn source(&self) -> Result<Option<PathBuf>, RepositoryError> {
            Ok(self.source.clone())
        }
    }

    #[test]
    fn test_repository_starts_empty() {
        let repo = PatientRecordRepository::new();

        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.source().unwrap().is_none());
    }

    #[test]
    fn test_cloned_repository_shares_storage() {
        let repo = PatientRecordRepository::new();
        let clone = repo.clone();

        clone.storage.replace_all(None, sample_records()).unwrap();

        assert_eq!(repo.count().unwrap(), sample_records().len());
        assert_eq!(repo.get_all().unwrap(), sample_records());
    }

    #[test]
    fn test_failed_load_keeps_previous_records() {
        let repo = PatientRecordRepository::with_records(sample_records()).unwrap();

        let result = repo.load_csv("/nonexistent/diabetes.csv");

        assert!(matches!(result, Err(RepositoryError::Dataset(_))));
        assert_eq!(repo.count().unwrap(), sample_records().len());
    }
}
