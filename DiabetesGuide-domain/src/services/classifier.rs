use tracing::debug;

use crate::entities::diabetes::{DiabetesType, Measurements};

/// Lower bound of the gestational glucose band (inclusive)
pub const GESTATIONAL_GLUCOSE_MIN: f64 = 140.0;
/// Glucose below this is non-diabetic
pub const PRE_DIABETIC_GLUCOSE_MIN: f64 = 100.0;
/// Glucose from this up to the high threshold is type 2
pub const TYPE_2_GLUCOSE_MIN: f64 = 126.0;
/// Glucose at or above this splits on the pedigree score
pub const HIGH_GLUCOSE_THRESHOLD: f64 = 200.0;
/// Pedigree score above which high glucose is classified as type 1
pub const TYPE_1_PEDIGREE_THRESHOLD: f64 = 0.5;

/// Classify a measurement set
pub fn classify(measurements: &Measurements) -> DiabetesType {
    let diabetes_type = classify_values(
        measurements.pregnancies,
        measurements.glucose,
        measurements.blood_pressure,
        measurements.skin_thickness,
        measurements.insulin,
        measurements.bmi,
        measurements.diabetes_pedigree,
        measurements.age,
    );

    debug!(
        pregnancies = measurements.pregnancies,
        glucose = measurements.glucose,
        diabetes_pedigree = measurements.diabetes_pedigree,
        ?diabetes_type,
        "Classified measurements"
    );

    diabetes_type
}

/// Classify from the eight individual measurements
///
/// Rules are checked in order and the first match wins. Only pregnancies,
/// glucose and the pedigree score are consulted. A NaN glucose fails every
/// band and falls through to the pedigree split.
#[allow(clippy::too_many_arguments)]
pub fn classify_values(
    pregnancies: i64,
    glucose: f64,
    _blood_pressure: f64,
    _skin_thickness: f64,
    _insulin: f64,
    _bmi: f64,
    diabetes_pedigree: f64,
    _age: i64,
) -> DiabetesType {
    if pregnancies > 0 && (GESTATIONAL_GLUCOSE_MIN..HIGH_GLUCOSE_THRESHOLD).contains(&glucose) {
        DiabetesType::Gestational
    } else if glucose < PRE_DIABETIC_GLUCOSE_MIN {
        DiabetesType::NonDiabetic
    } else if (PRE_DIABETIC_GLUCOSE_MIN..TYPE_2_GLUCOSE_MIN).contains(&glucose) {
        DiabetesType::PreDiabetic
    } else if (TYPE_2_GLUCOSE_MIN..HIGH_GLUCOSE_THRESHOLD).contains(&glucose) {
        DiabetesType::Type2
    } else if diabetes_pedigree > TYPE_1_PEDIGREE_THRESHOLD {
        DiabetesType::Type1
    } else {
        DiabetesType::Type2
    }
}
