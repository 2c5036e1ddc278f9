use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::entities::diabetes::DiabetesType;
use crate::services::classifier::HIGH_GLUCOSE_THRESHOLD;

/// Returned for labels that name no known category
pub const FALLBACK_RECOMMENDATION: &str = "Consult a doctor for tailored recommendations";

/// Read-only mapping from category to medication names
#[derive(Debug)]
pub struct MedicationTable {
    entries: BTreeMap<DiabetesType, Vec<&'static str>>,
}

impl MedicationTable {
    fn new() -> Self {
        let entries = BTreeMap::from([
            (DiabetesType::Type1, vec!["Insulin"]),
            (
                DiabetesType::Type2,
                vec![
                    "Metformin",
                    "Sulfonylureas",
                    "DPP-4 Inhibitors",
                    "SGLT2 Inhibitors",
                    "Insulin (if advanced)",
                ],
            ),
            (
                DiabetesType::Gestational,
                vec!["Insulin (preferred)", "Metformin (if insulin not suitable)"],
            ),
            (
                DiabetesType::PreDiabetic,
                vec!["Lifestyle changes", "Metformin (in some cases)"],
            ),
            (
                DiabetesType::NonDiabetic,
                vec!["No medication needed. Focus on lifestyle management."],
            ),
        ]);

        Self { entries }
    }

    /// Medications listed for a category, if the table has an entry for it
    pub fn get(&self, diabetes_type: DiabetesType) -> Option<&[&'static str]> {
        self.entries.get(&diabetes_type).map(Vec::as_slice)
    }

    /// Recommend medications for a category from this table
    ///
    /// Type 2 at or above the high glucose threshold gets "Insulin" prepended
    /// to the full table entry, so insulin appears twice in that list. A
    /// category without an entry gets the fallback recommendation.
    pub fn recommend(&self, diabetes_type: DiabetesType, glucose: f64) -> Vec<String> {
        let listed: Option<Vec<String>> = match diabetes_type {
            DiabetesType::Type2 if glucose >= HIGH_GLUCOSE_THRESHOLD => self
                .get(DiabetesType::Type2)
                .map(|meds| {
                    std::iter::once("Insulin")
                        .chain(meds.iter().copied())
                        .map(String::from)
                        .collect()
                }),
            DiabetesType::Type2 => Some(vec!["Metformin".to_string(), "Sulfonylureas (if needed)".to_string()]),
            other => self
                .get(other)
                .map(|meds| meds.iter().map(|m| m.to_string()).collect()),
        };

        match listed {
            Some(recommendations) if !recommendations.is_empty() => recommendations,
            _ => {
                warn!(?diabetes_type, "No medications listed; using fallback recommendation");
                vec![FALLBACK_RECOMMENDATION.to_string()]
            }
        }
    }

    /// Iterate the table in category order
    pub fn iter(&self) -> impl Iterator<Item = (DiabetesType, &[&'static str])> {
        self.entries.iter().map(|(t, meds)| (*t, meds.as_slice()))
    }
}

static MEDICATION_TABLE: Lazy<MedicationTable> = Lazy::new(MedicationTable::new);

/// The process-wide medication table
pub fn medication_table() -> &'static MedicationTable {
    &MEDICATION_TABLE
}

/// Recommend medications for a category from the process-wide table
pub fn recommend(diabetes_type: DiabetesType, glucose: f64) -> Vec<String> {
    let recommendations = medication_table().recommend(diabetes_type, glucose);
    debug!(?diabetes_type, glucose, count = recommendations.len(), "Looked up recommendations");
    recommendations
}

/// Recommend medications for a free-text category label
///
/// Unrecognized labels get the single fallback entry.
pub fn recommend_for_label(label: &str, glucose: f64) -> Vec<String> {
    match label.parse::<DiabetesType>() {
        Ok(diabetes_type) => recommend(diabetes_type, glucose),
        Err(e) => {
            debug!("{}; using fallback recommendation", e);
            vec![FALLBACK_RECOMMENDATION.to_string()]
        }
    }
}
