pub mod classifier;
pub mod recommendation;
pub mod assessment;

// Domain services
// This module contains business logic implementations.

// Re-export the core operations and the service trait
pub use classifier::{classify, classify_values};
pub use recommendation::{medication_table, recommend, recommend_for_label, MedicationTable, FALLBACK_RECOMMENDATION};
pub use assessment::{AssessmentService, AssessmentServiceError, AssessmentServiceTrait, create_default_assessment_service};

// Re-export mock service when the mock feature is enabled
#[cfg(feature = "mock")]
pub use crate::testing::MockAssessmentService;
