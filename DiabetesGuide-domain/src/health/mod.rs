//! Domain layer health check functionality
//! This module reports whether the classifier and dataset are usable

use std::collections::BTreeMap;

use serde::Serialize;
use diabetes_guide_data::repository::PatientRecordRepositoryTrait;

use crate::services::recommendation::medication_table;
use crate::entities::diabetes::DiabetesType;

/// System health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is usable with reduced functionality
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone, Serialize)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone, Serialize)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: BTreeMap<String, HealthComponent>,
}

/// Check that every category has a medication table entry
pub fn check_classifier_status() -> HealthComponent {
    let table = medication_table();
    let missing: Vec<&str> = DiabetesType::ALL
        .iter()
        .filter(|t| table.get(**t).map_or(true, |meds| meds.is_empty()))
        .map(|t| t.display_name())
        .collect();

    if missing.is_empty() {
        HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        }
    } else {
        HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(format!("No medications listed for: {}", missing.join(", "))),
        }
    }
}

/// Check whether a dataset is loaded
///
/// Assessment of form input never needs the dataset, so a missing or empty
/// dataset only degrades the system.
pub fn check_dataset_status(repository: &dyn PatientRecordRepositoryTrait) -> HealthComponent {
    let source = match repository.source() {
        Ok(source) => source,
        Err(e) => {
            return HealthComponent {
                status: ComponentStatus::Unhealthy,
                details: Some(e.to_string()),
            }
        }
    };

    match (source, repository.count()) {
        (None, _) => HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some("No dataset loaded".to_string()),
        },
        (Some(path), Ok(0)) => HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some(format!("{} contains no records", path.display())),
        },
        (Some(path), Ok(count)) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: Some(format!("{} records from {}", count, path.display())),
        },
        (Some(_), Err(e)) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(e.to_string()),
        },
    }
}

/// Get overall system health
pub fn get_system_health(repository: &dyn PatientRecordRepositoryTrait) -> SystemHealth {
    let components: BTreeMap<String, HealthComponent> = vec![
        ("classifier".to_string(), check_classifier_status()),
        ("dataset".to_string(), check_dataset_status(repository)),
    ]
    .into_iter()
    .collect();

    let overall_status = match components.values().map(|c| c.status).max() {
        Some(ComponentStatus::Unhealthy) => SystemStatus::Unhealthy,
        Some(ComponentStatus::Degraded) => SystemStatus::Degraded,
        _ => SystemStatus::Healthy,
    };

    SystemHealth {
        status: overall_status,
        components,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diabetes_guide_data::repository::tests::{sample_records, StaticRecordRepository};

    #[test]
    fn test_healthy_with_dataset() {
        let repo = StaticRecordRepository::with_records(sample_records());

        let health = get_system_health(&repo);

        assert_eq!(health.status, SystemStatus::Healthy);
        assert_eq!(health.components["classifier"].status, ComponentStatus::Healthy);
        assert_eq!(health.components["dataset"].status, ComponentStatus::Healthy);
        assert!(health.components["dataset"].details.as_deref().unwrap_or("").starts_with("8 records"));
    }

    #[test]
    fn test_degraded_without_dataset() {
        let repo = StaticRecordRepository::new();

        let health = get_system_health(&repo);

        assert_eq!(health.status, SystemStatus::Degraded);
        assert_eq!(
            health.components["dataset"].details.as_deref(),
            Some("No dataset loaded")
        );
    }

    #[test]
    fn test_degraded_with_empty_dataset() {
        let repo = StaticRecordRepository::with_records(Vec::new());

        let component = check_dataset_status(&repo);

        assert_eq!(component.status, ComponentStatus::Degraded);
    }

    #[test]
    fn test_classifier_component_is_healthy() {
        assert_eq!(check_classifier_status().status, ComponentStatus::Healthy);
    }
}
