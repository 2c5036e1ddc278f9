//! Form input parsing
//!
//! Turns the eight raw strings a user typed into a [`Measurements`] value.
//! Any field that fails to parse aborts the whole submission with one
//! undifferentiated error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::entities::diabetes::Measurements;

/// Message shown to the user for any parse failure
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numeric values in all fields.";

/// One of the eight form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementField {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    Bmi,
    DiabetesPedigree,
    Age,
}

impl MeasurementField {
    /// Fields in form order
    pub const ALL: [MeasurementField; 8] = [
        MeasurementField::Pregnancies,
        MeasurementField::Glucose,
        MeasurementField::BloodPressure,
        MeasurementField::SkinThickness,
        MeasurementField::Insulin,
        MeasurementField::Bmi,
        MeasurementField::DiabetesPedigree,
        MeasurementField::Age,
    ];

    /// Prompt text shown next to the field
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementField::Pregnancies => "Pregnancies (Enter 0 if not applicable):",
            MeasurementField::Glucose => "Glucose level (mg/dL):",
            MeasurementField::BloodPressure => "Blood Pressure (mm Hg):",
            MeasurementField::SkinThickness => "Skin Thickness (mm):",
            MeasurementField::Insulin => "Insulin level (µU/mL):",
            MeasurementField::Bmi => "BMI (kg/m²):",
            MeasurementField::DiabetesPedigree => "Diabetes Pedigree Function (e.g., 0.5):",
            MeasurementField::Age => "Age (years):",
        }
    }

    /// Machine name of the field
    pub fn name(&self) -> &'static str {
        match self {
            MeasurementField::Pregnancies => "pregnancies",
            MeasurementField::Glucose => "glucose",
            MeasurementField::BloodPressure => "blood_pressure",
            MeasurementField::SkinThickness => "skin_thickness",
            MeasurementField::Insulin => "insulin",
            MeasurementField::Bmi => "bmi",
            MeasurementField::DiabetesPedigree => "diabetes_pedigree",
            MeasurementField::Age => "age",
        }
    }
}

impl fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Form input errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A field did not hold a number of the expected kind
    #[error("Please enter valid numeric values in all fields.")]
    InvalidNumeric {
        field: MeasurementField,
        value: String,
    },
}

/// Raw, unparsed form contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementForm {
    pub pregnancies: String,
    pub glucose: String,
    pub blood_pressure: String,
    pub skin_thickness: String,
    pub insulin: String,
    pub bmi: String,
    pub diabetes_pedigree: String,
    pub age: String,
}

impl MeasurementForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of a field
    pub fn get(&self, field: MeasurementField) -> &str {
        match field {
            MeasurementField::Pregnancies => &self.pregnancies,
            MeasurementField::Glucose => &self.glucose,
            MeasurementField::BloodPressure => &self.blood_pressure,
            MeasurementField::SkinThickness => &self.skin_thickness,
            MeasurementField::Insulin => &self.insulin,
            MeasurementField::Bmi => &self.bmi,
            MeasurementField::DiabetesPedigree => &self.diabetes_pedigree,
            MeasurementField::Age => &self.age,
        }
    }

    /// Replace the raw text of a field
    pub fn set(&mut self, field: MeasurementField, value: impl Into<String>) {
        let value = value.into();
        match field {
            MeasurementField::Pregnancies => self.pregnancies = value,
            MeasurementField::Glucose => self.glucose = value,
            MeasurementField::BloodPressure => self.blood_pressure = value,
            MeasurementField::SkinThickness => self.skin_thickness = value,
            MeasurementField::Insulin => self.insulin = value,
            MeasurementField::Bmi => self.bmi = value,
            MeasurementField::DiabetesPedigree => self.diabetes_pedigree = value,
            MeasurementField::Age => self.age = value,
        }
    }

    /// Builder-style variant of [`MeasurementForm::set`]
    pub fn with(mut self, field: MeasurementField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Parse every field
    ///
    /// Pregnancies and age must be whole numbers, negative ones included; the
    /// rest are floating point. Surrounding whitespace is ignored.
    pub fn parse(&self) -> Result<Measurements, InputError> {
        Ok(Measurements {
            pregnancies: self.parse_field(MeasurementField::Pregnancies)?,
            glucose: self.parse_field(MeasurementField::Glucose)?,
            blood_pressure: self.parse_field(MeasurementField::BloodPressure)?,
            skin_thickness: self.parse_field(MeasurementField::SkinThickness)?,
            insulin: self.parse_field(MeasurementField::Insulin)?,
            bmi: self.parse_field(MeasurementField::Bmi)?,
            diabetes_pedigree: self.parse_field(MeasurementField::DiabetesPedigree)?,
            age: self.parse_field(MeasurementField::Age)?,
        })
    }

    fn parse_field<T: FromStr>(&self, field: MeasurementField) -> Result<T, InputError> {
        let raw = self.get(field);
        raw.trim().parse::<T>().map_err(|_| {
            warn!(%field, value = raw, "Rejected non-numeric form input");
            InputError::InvalidNumeric {
                field,
                value: raw.to_string(),
            }
        })
    }
}
