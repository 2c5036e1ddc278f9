// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

// Re-export useful test fixtures from the data layer
pub use diabetes_guide_data::repository::tests::{record, sample_records, StaticRecordRepository};

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::entities::diabetes::{Assessment, DatasetSummary, DiabetesType, Measurements, RecordAssessment};
use crate::input::{InputError, MeasurementField, MeasurementForm};
use crate::services::assessment::{AssessmentServiceError, AssessmentServiceTrait};

/// Mock implementation of the AssessmentServiceTrait for testing
///
/// Every call returns the configured category with a single
/// "Mock medication" recommendation, and submitted forms are recorded.
pub struct MockAssessmentService {
    diabetes_type: DiabetesType,
    submissions: Mutex<Vec<MeasurementForm>>,
    should_fail_input: bool,
    dataset_loaded: bool,
}

impl Default for MockAssessmentService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAssessmentService {
    /// Create a new mock that classifies everything as non-diabetic
    pub fn new() -> Self {
        Self {
            diabetes_type: DiabetesType::NonDiabetic,
            submissions: Mutex::new(Vec::new()),
            should_fail_input: false,
            dataset_loaded: true,
        }
    }

    /// Configure the category every assessment returns
    pub fn with_diabetes_type(mut self, diabetes_type: DiabetesType) -> Self {
        self.diabetes_type = diabetes_type;
        self
    }

    /// Configure the mock to reject every form
    pub fn with_input_failure(mut self) -> Self {
        self.should_fail_input = true;
        self
    }

    /// Configure the mock to report no dataset
    pub fn without_dataset(mut self) -> Self {
        self.dataset_loaded = false;
        self
    }

    /// Forms submitted so far
    pub fn submissions(&self) -> Vec<MeasurementForm> {
        self.submissions
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    fn mock_assessment(&self, glucose: f64) -> Assessment {
        Assessment::new(self.diabetes_type, glucose, vec!["Mock medication".to_string()])
    }
}

impl AssessmentServiceTrait for MockAssessmentService {
    fn assess(&self, measurements: &Measurements) -> Assessment {
        self.mock_assessment(measurements.glucose)
    }

    fn assess_form(&self, form: &MeasurementForm) -> Result<Assessment, AssessmentServiceError> {
        if let Ok(mut submissions) = self.submissions.lock() {
            submissions.push(form.clone());
        }

        if self.should_fail_input {
            return Err(AssessmentServiceError::InvalidInput(InputError::InvalidNumeric {
                field: MeasurementField::Glucose,
                value: form.glucose.clone(),
            }));
        }

        Ok(self.mock_assessment(form.glucose.trim().parse().unwrap_or(0.0)))
    }

    fn assess_records(&self) -> Result<Vec<RecordAssessment>, AssessmentServiceError> {
        if !self.dataset_loaded {
            return Err(AssessmentServiceError::DatasetUnavailable(
                "No dataset has been loaded".to_string(),
            ));
        }

        Ok(vec![RecordAssessment {
            row: 1,
            recorded_outcome: Some(1),
            assessment: self.mock_assessment(120.0),
        }])
    }

    fn dataset_summary(&self) -> Result<DatasetSummary, AssessmentServiceError> {
        if !self.dataset_loaded {
            return Err(AssessmentServiceError::DatasetUnavailable(
                "No dataset has been loaded".to_string(),
            ));
        }

        Ok(DatasetSummary {
            source: "mock.csv".to_string(),
            record_count: 1,
            positive_outcomes: 1,
            negative_outcomes: 0,
            unlabelled: 0,
            predicted: BTreeMap::from([(self.diabetes_type, 1)]),
        })
    }
}
