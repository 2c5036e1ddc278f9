use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The eight measurements collected for one submission
///
/// No range checks are applied; implausible values are accepted as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    /// Number of pregnancies (0 if not applicable)
    pub pregnancies: i64,

    /// Glucose level (mg/dL)
    pub glucose: f64,

    /// Blood pressure (mm Hg)
    pub blood_pressure: f64,

    /// Skin thickness (mm)
    pub skin_thickness: f64,

    /// Insulin level (µU/mL)
    pub insulin: f64,

    /// Body mass index (kg/m²)
    pub bmi: f64,

    /// Diabetes pedigree function
    pub diabetes_pedigree: f64,

    /// Age in years
    pub age: i64,
}

/// Diabetes category produced by the classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiabetesType {
    /// Type 1 diabetes (glucose ≥ 200 with pedigree > 0.5)
    Type1,

    /// Type 2 diabetes (glucose 126-199, or ≥ 200 with pedigree ≤ 0.5)
    Type2,

    /// Gestational diabetes (any pregnancies and glucose 140-199)
    Gestational,

    /// Pre-diabetes (glucose 100-125)
    PreDiabetic,

    /// Non-diabetic (glucose < 100)
    NonDiabetic,
}

impl DiabetesType {
    /// Every category, in table order
    pub const ALL: [DiabetesType; 5] = [
        DiabetesType::Type1,
        DiabetesType::Type2,
        DiabetesType::Gestational,
        DiabetesType::PreDiabetic,
        DiabetesType::NonDiabetic,
    ];

    /// Human-readable name used in rendered results
    pub fn display_name(&self) -> &'static str {
        match self {
            DiabetesType::Type1 => "Type 1 Diabetes",
            DiabetesType::Type2 => "Type 2 Diabetes",
            DiabetesType::Gestational => "Gestational Diabetes",
            DiabetesType::PreDiabetic => "Pre-Diabetes",
            DiabetesType::NonDiabetic => "Non-Diabetic",
        }
    }

    fn identifier(&self) -> &'static str {
        match self {
            DiabetesType::Type1 => "Type1",
            DiabetesType::Type2 => "Type2",
            DiabetesType::Gestational => "Gestational",
            DiabetesType::PreDiabetic => "PreDiabetic",
            DiabetesType::NonDiabetic => "NonDiabetic",
        }
    }
}

impl fmt::Display for DiabetesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Label text that names no known category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown diabetes type: {0}")]
pub struct UnknownDiabetesType(pub String);

impl FromStr for DiabetesType {
    type Err = UnknownDiabetesType;

    /// Accepts display names ("Type 2 Diabetes") and identifiers ("Type2"),
    /// ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DiabetesType::ALL
            .into_iter()
            .find(|t| {
                t.display_name().eq_ignore_ascii_case(wanted) || t.identifier().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownDiabetesType(s.to_string()))
    }
}

/// Result of assessing one measurement set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// Unique identifier for the assessment
    pub id: Uuid,

    /// Category assigned by the classifier
    pub diabetes_type: DiabetesType,

    /// Display name of the category
    pub label: String,

    /// Glucose value the recommendations were chosen with
    pub glucose: f64,

    /// Medication suggestions, in table order
    pub recommendations: Vec<String>,

    /// When the assessment was made
    pub generated_at: DateTime<Utc>,
}

impl Assessment {
    /// Wrap a classification and its recommendations
    pub fn new(diabetes_type: DiabetesType, glucose: f64, recommendations: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            diabetes_type,
            label: diabetes_type.display_name().to_string(),
            glucose,
            recommendations,
            generated_at: Utc::now(),
        }
    }
}

/// Assessment of one dataset row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAssessment {
    /// 1-based position of the record in the dataset
    pub row: usize,

    /// Outcome recorded in the dataset, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_outcome: Option<u8>,

    /// The assessment for the row
    pub assessment: Assessment,
}

/// Aggregate view of the loaded dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// File the records were loaded from
    pub source: String,

    /// Number of records
    pub record_count: usize,

    /// Records with a non-zero recorded outcome
    pub positive_outcomes: usize,

    /// Records with a zero recorded outcome
    pub negative_outcomes: usize,

    /// Records without an outcome
    pub unlabelled: usize,

    /// Number of records per classified category
    pub predicted: BTreeMap<DiabetesType, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(DiabetesType::Type1.to_string(), "Type 1 Diabetes");
        assert_eq!(DiabetesType::Type2.to_string(), "Type 2 Diabetes");
        assert_eq!(DiabetesType::Gestational.to_string(), "Gestational Diabetes");
        assert_eq!(DiabetesType::PreDiabetic.to_string(), "Pre-Diabetes");
        assert_eq!(DiabetesType::NonDiabetic.to_string(), "Non-Diabetic");
    }

    #[test]
    fn test_parse_accepts_display_names_and_identifiers() {
        for diabetes_type in DiabetesType::ALL {
            assert_eq!(diabetes_type.display_name().parse::<DiabetesType>(), Ok(diabetes_type));
        }

        assert_eq!("type2".parse::<DiabetesType>(), Ok(DiabetesType::Type2));
        assert_eq!("  pre-diabetes ".parse::<DiabetesType>(), Ok(DiabetesType::PreDiabetic));
        assert_eq!("NONDIABETIC".parse::<DiabetesType>(), Ok(DiabetesType::NonDiabetic));
    }

    #[test]
    fn test_parse_rejects_unknown_label() {
        let err = "Type 3 Diabetes".parse::<DiabetesType>().unwrap_err();
        assert_eq!(err, UnknownDiabetesType("Type 3 Diabetes".to_string()));
        assert!("".parse::<DiabetesType>().is_err());
    }

    #[test]
    fn test_assessment_uses_display_label() {
        let assessment = Assessment::new(DiabetesType::Gestational, 150.0, vec!["Insulin (preferred)".to_string()]);

        assert_eq!(assessment.label, "Gestational Diabetes");
        assert_eq!(assessment.glucose, 150.0);

        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["diabetes_type"], "Gestational");
        assert_eq!(json["recommendations"][0], "Insulin (preferred)");
    }
}
