// Domain entities and value objects
pub mod diabetes;
pub mod conversions;

// Re-export common types for easier imports
pub use diabetes::{Assessment, DatasetSummary, DiabetesType, Measurements, RecordAssessment, UnknownDiabetesType};
