use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{error, info, instrument, warn};

use crate::entities::conversions;
use crate::entities::diabetes::{Assessment, DatasetSummary, DiabetesType, Measurements, RecordAssessment};
use crate::input::{InputError, MeasurementForm};
use crate::services::classifier::classify;
use crate::services::recommendation::recommend;
use diabetes_guide_data::repository::{PatientRecordRepository, PatientRecordRepositoryTrait, RepositoryError};

/// Assessment service errors
#[derive(Debug, Error)]
pub enum AssessmentServiceError {
    /// Form input could not be parsed
    #[error("Input error: {0}")]
    InvalidInput(#[from] InputError),

    /// No dataset has been loaded
    #[error("Dataset unavailable: {0}")]
    DatasetUnavailable(String),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<RepositoryError> for AssessmentServiceError {
    fn from(err: RepositoryError) -> Self {
        AssessmentServiceError::Repository(err.to_string())
    }
}

/// Trait for assessment service operations
pub trait AssessmentServiceTrait {
    /// Classify a measurement set and look up its recommendations
    fn assess(&self, measurements: &Measurements) -> Assessment;

    /// Parse a raw form, then assess it
    fn assess_form(&self, form: &MeasurementForm) -> Result<Assessment, AssessmentServiceError>;

    /// Assess every record in the loaded dataset, in dataset order
    fn assess_records(&self) -> Result<Vec<RecordAssessment>, AssessmentServiceError>;

    /// Summarize the loaded dataset
    fn dataset_summary(&self) -> Result<DatasetSummary, AssessmentServiceError>;
}

/// Assessment service for domain logic
pub struct AssessmentService<R: PatientRecordRepositoryTrait> {
    repository: R,
}

impl<R: PatientRecordRepositoryTrait> AssessmentService<R> {
    /// Create a new assessment service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// The repository backing batch operations
    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn loaded_source(&self) -> Result<String, AssessmentServiceError> {
        match self.repository.source()? {
            Some(path) => Ok(path.display().to_string()),
            None => Err(AssessmentServiceError::DatasetUnavailable(
                "No dataset has been loaded".to_string(),
            )),
        }
    }
}

impl<R: PatientRecordRepositoryTrait> AssessmentServiceTrait for AssessmentService<R> {
    fn assess(&self, measurements: &Measurements) -> Assessment {
        let diabetes_type = classify(measurements);
        let recommendations = recommend(diabetes_type, measurements.glucose);
        Assessment::new(diabetes_type, measurements.glucose, recommendations)
    }

    #[instrument(skip(self, form))]
    fn assess_form(&self, form: &MeasurementForm) -> Result<Assessment, AssessmentServiceError> {
        let measurements = form.parse().map_err(|e| {
            warn!("Form submission rejected: {:?}", e);
            AssessmentServiceError::from(e)
        })?;

        let assessment = self.assess(&measurements);
        info!(diabetes_type = ?assessment.diabetes_type, "Form assessed");
        Ok(assessment)
    }

    #[instrument(skip(self))]
    fn assess_records(&self) -> Result<Vec<RecordAssessment>, AssessmentServiceError> {
        self.loaded_source()?;

        let records = self.repository.get_all().map_err(|e| {
            error!("Failed to read dataset records: {}", e);
            AssessmentServiceError::from(e)
        })?;

        let assessed: Vec<RecordAssessment> = records
            .iter()
            .enumerate()
            .map(|(i, record)| RecordAssessment {
                row: i + 1,
                recorded_outcome: record.outcome,
                assessment: self.assess(&conversions::convert_to_domain_measurements(record)),
            })
            .collect();

        info!("Assessed {} dataset records", assessed.len());
        Ok(assessed)
    }

    #[instrument(skip(self))]
    fn dataset_summary(&self) -> Result<DatasetSummary, AssessmentServiceError> {
        let source = self.loaded_source()?;
        let records = self.repository.get_all()?;

        let mut predicted: BTreeMap<DiabetesType, usize> = BTreeMap::new();
        let mut positive_outcomes = 0;
        let mut negative_outcomes = 0;
        let mut unlabelled = 0;

        for record in &records {
            match record.outcome {
                Some(0) => negative_outcomes += 1,
                Some(_) => positive_outcomes += 1,
                None => unlabelled += 1,
            }

            let diabetes_type = classify(&conversions::convert_to_domain_measurements(record));
            *predicted.entry(diabetes_type).or_insert(0) += 1;
        }

        Ok(DatasetSummary {
            source,
            record_count: records.len(),
            positive_outcomes,
            negative_outcomes,
            unlabelled,
            predicted,
        })
    }
}

/// Factory function to create the default assessment service
pub fn create_default_assessment_service(repository: PatientRecordRepository) -> AssessmentService<PatientRecordRepository> {
    AssessmentService::new(repository)
}
