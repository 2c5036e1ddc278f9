use crate::entities::diabetes::Measurements;
use diabetes_guide_data::models::PatientRecord;

/// Conversion functions between domain entities and data models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert from data model to domain measurements
pub fn convert_to_domain_measurements(record: &PatientRecord) -> Measurements {
    Measurements {
        pregnancies: record.pregnancies,
        glucose: record.glucose,
        blood_pressure: record.blood_pressure,
        skin_thickness: record.skin_thickness,
        insulin: record.insulin,
        bmi: record.bmi,
        diabetes_pedigree: record.diabetes_pedigree,
        age: record.age,
    }
}

/// Convert from domain measurements to a data record
pub fn convert_to_data_record(measurements: &Measurements, outcome: Option<u8>) -> PatientRecord {
    PatientRecord {
        pregnancies: measurements.pregnancies,
        glucose: measurements.glucose,
        blood_pressure: measurements.blood_pressure,
        skin_thickness: measurements.skin_thickness,
        insulin: measurements.insulin,
        bmi: measurements.bmi,
        diabetes_pedigree: measurements.diabetes_pedigree,
        age: measurements.age,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_to_domain_measurements() {
        let record = PatientRecord {
            pregnancies: 6,
            glucose: 148.0,
            blood_pressure: 72.0,
            skin_thickness: 35.0,
            insulin: 0.0,
            bmi: 33.6,
            diabetes_pedigree: 0.627,
            age: 50,
            outcome: Some(1),
        };

        let measurements = convert_to_domain_measurements(&record);

        assert_eq!(measurements.pregnancies, 6);
        assert_eq!(measurements.glucose, 148.0);
        assert_eq!(measurements.blood_pressure, 72.0);
        assert_eq!(measurements.skin_thickness, 35.0);
        assert_eq!(measurements.bmi, 33.6);
        assert_eq!(measurements.diabetes_pedigree, 0.627);
        assert_eq!(measurements.age, 50);
    }

    #[test]
    fn test_convert_to_data_record_keeps_outcome() {
        let record = PatientRecord {
            pregnancies: 1,
            glucose: 85.0,
            blood_pressure: 66.0,
            skin_thickness: 29.0,
            insulin: 0.0,
            bmi: 26.6,
            diabetes_pedigree: 0.351,
            age: 31,
            outcome: Some(0),
        };

        let round_tripped = convert_to_data_record(&convert_to_domain_measurements(&record), record.outcome);

        assert_eq!(round_tripped, record);
    }
}
