use std::sync::PoisonError;
use thiserror::Error;
use crate::dataset::DatasetError;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Dataset could not be loaded
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Lock error
    #[error("Lock error: {0}")]
    Lock(String),
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(error: PoisonError<T>) -> Self {
        RepositoryError::Lock(error.to_string())
    }
}
