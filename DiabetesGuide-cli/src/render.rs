//! Output rendering for every command

use serde::Serialize;
use serde_json::json;

use diabetes_guide_domain::entities::{Assessment, DatasetSummary, RecordAssessment};
use diabetes_guide_domain::health::{ComponentStatus, SystemHealth, SystemStatus};
use diabetes_guide_domain::services::MedicationTable;

use crate::cli::OutputFormat;

fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Render one assessment
pub fn render_assessment(assessment: &Assessment, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Diabetes Type: {}\nRecommended Medicines: {}",
            assessment.label,
            assessment.recommendations.join(", ")
        )),
        OutputFormat::Json => to_json(assessment),
    }
}

/// Render a bare recommendation list
pub fn render_recommendations(label: &str, recommendations: &[String], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("Recommended Medicines: {}", recommendations.join(", "))),
        OutputFormat::Json => to_json(&json!({
            "label": label,
            "recommendations": recommendations,
        })),
    }
}

/// Render the medication table
pub fn render_table(table: &MedicationTable, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(table
            .iter()
            .map(|(diabetes_type, medications)| format!("{}: {}", diabetes_type, medications.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let entries: Vec<_> = table
                .iter()
                .map(|(diabetes_type, medications)| {
                    json!({
                        "diabetes_type": diabetes_type,
                        "label": diabetes_type.display_name(),
                        "medications": medications,
                    })
                })
                .collect();
            to_json(&entries)
        }
    }
}

/// Render a batch run and its summary
pub fn render_batch(
    records: &[RecordAssessment],
    summary: &DatasetSummary,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines: Vec<String> = records
                .iter()
                .map(|r| {
                    let outcome = r
                        .recorded_outcome
                        .map(|o| format!(" (recorded outcome: {})", o))
                        .unwrap_or_default();
                    format!(
                        "Row {}: {}{} - {}",
                        r.row,
                        r.assessment.label,
                        outcome,
                        r.assessment.recommendations.join(", ")
                    )
                })
                .collect();

            lines.push(String::new());
            lines.push(format!("{} records assessed from {}", summary.record_count, summary.source));
            lines.push(format!(
                "Recorded outcomes: {} positive, {} negative, {} unlabelled",
                summary.positive_outcomes, summary.negative_outcomes, summary.unlabelled
            ));
            for (diabetes_type, count) in &summary.predicted {
                lines.push(format!("  {}: {}", diabetes_type, count));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => to_json(&json!({
            "records": records,
            "summary": summary,
        })),
    }
}

fn component_status_text(status: ComponentStatus) -> &'static str {
    match status {
        ComponentStatus::Healthy => "ok",
        ComponentStatus::Degraded => "degraded",
        ComponentStatus::Unhealthy => "error",
    }
}

fn system_status_text(status: SystemStatus) -> &'static str {
    match status {
        SystemStatus::Healthy => "ok",
        SystemStatus::Degraded => "degraded",
        SystemStatus::Unhealthy => "error",
    }
}

/// Render system health
pub fn render_health(health: &SystemHealth, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines = vec![format!("Status: {}", system_status_text(health.status))];
            for (name, component) in &health.components {
                let details = component
                    .details
                    .as_deref()
                    .map(|d| format!(" ({})", d))
                    .unwrap_or_default();
                lines.push(format!("  {}: {}{}", name, component_status_text(component.status), details));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => to_json(health),
    }
}
