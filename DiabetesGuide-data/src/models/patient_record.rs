use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Storage model for one row of the diabetes dataset
///
/// Column names follow the headers of the public Pima Indians diabetes
/// dataset, which is the file the form loads at start-up. Blank measurement
/// cells load as NaN. Count columns also accept whole decimals such as `6.0`,
/// but a blank or fractional count is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Number of pregnancies
    #[serde(rename = "Pregnancies", deserialize_with = "whole_number")]
    pub pregnancies: i64,

    /// Plasma glucose concentration (mg/dL)
    #[serde(rename = "Glucose", deserialize_with = "blank_as_nan")]
    pub glucose: f64,

    /// Diastolic blood pressure (mm Hg)
    #[serde(rename = "BloodPressure", deserialize_with = "blank_as_nan")]
    pub blood_pressure: f64,

    /// Triceps skin fold thickness (mm)
    #[serde(rename = "SkinThickness", deserialize_with = "blank_as_nan")]
    pub skin_thickness: f64,

    /// Serum insulin (µU/mL)
    #[serde(rename = "Insulin", deserialize_with = "blank_as_nan")]
    pub insulin: f64,

    /// Body mass index (kg/m²)
    #[serde(rename = "BMI", deserialize_with = "blank_as_nan")]
    pub bmi: f64,

    /// Diabetes pedigree function
    #[serde(rename = "DiabetesPedigreeFunction", deserialize_with = "blank_as_nan")]
    pub diabetes_pedigree: f64,

    /// Age in years
    #[serde(rename = "Age", deserialize_with = "whole_number")]
    pub age: i64,

    /// Recorded outcome (0 or 1) when the file carries one
    #[serde(rename = "Outcome", default)]
    pub outcome: Option<u8>,
}

fn blank_as_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(D::Error::custom(format!("expected a whole number, got {}", value)))
    }
}
