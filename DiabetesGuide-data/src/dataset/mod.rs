//! CSV dataset loading
//!
//! The dataset is read once and kept in memory. Nothing here feeds the
//! classification rules; the records are only used for batch runs and
//! summaries.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::models::PatientRecord;

/// Dataset error enum
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened or read
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be decoded into a patient record
    #[error("malformed record{}: {message}", line_suffix(.line))]
    Malformed {
        line: Option<u64>,
        message: String,
    },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {}", l)).unwrap_or_default()
}

/// Load every record from a CSV file with a header row
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<PatientRecord>, DatasetError> {
    let path = path.as_ref();
    debug!("Opening dataset at {}", path.display());

    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let records = read_records(file)?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Decode records from any reader
pub fn read_records<R: Read>(reader: R) -> Result<Vec<PatientRecord>, DatasetError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    rdr.deserialize::<PatientRecord>()
        .map(|row| {
            row.map_err(|err| DatasetError::Malformed {
                line: err.position().map(|pos| pos.line()),
                message: err.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome";

    #[test]
    fn test_read_records_parses_rows() {
        let data = format!(
            "{}\n6,148,72,35,0,33.6,0.627,50,1\n1,85,66,29,0,26.6,0.351,31,0\n",
            HEADER
        );

        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].pregnancies, 6);
        assert_eq!(records[0].glucose, 148.0);
        assert_eq!(records[0].diabetes_pedigree, 0.627);
        assert_eq!(records[0].outcome, Some(1));
        assert_eq!(records[1].age, 31);
        assert_eq!(records[1].outcome, Some(0));
    }

    #[test]
    fn test_read_records_without_outcome_column() {
        let data = "Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age\n\
                    0,137,40,35,168,43.1,2.288,33\n";

        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].outcome, None);
    }

    #[test]
    fn test_read_records_trims_whitespace() {
        let data = format!("{}\n 2 , 197 , 70 , 45 , 543 , 30.5 , 0.158 , 53 , 1 \n", HEADER);

        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records[0].glucose, 197.0);
        assert_eq!(records[0].insulin, 543.0);
    }

    #[test]
    fn test_read_records_rejects_non_numeric_value() {
        let data = format!("{}\n1,85,66,29,0,26.6,0.351,31,0\n1,high,66,29,0,26.6,0.351,31,0\n", HEADER);

        let err = read_records(data.as_bytes()).unwrap_err();

        match err {
            DatasetError::Malformed { line, .. } => assert_eq!(line, Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_records_blank_measurement_is_nan() {
        let data = format!("{}\n1,,66,29,0,,0.351,31,0\n", HEADER);

        let records = read_records(data.as_bytes()).unwrap();

        assert!(records[0].glucose.is_nan());
        assert!(records[0].bmi.is_nan());
        assert_eq!(records[0].blood_pressure, 66.0);
    }

    #[test]
    fn test_read_records_accepts_whole_decimal_counts() {
        let data = format!("{}\n6.0,148,72,35,0,33.6,0.627,50.0,1\n-1,90,72,35,0,33.6,0.627,50,\n", HEADER);

        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records[0].pregnancies, 6);
        assert_eq!(records[0].age, 50);
        assert_eq!(records[1].pregnancies, -1);
        assert_eq!(records[1].outcome, None);
    }

    #[test]
    fn test_read_records_rejects_fractional_or_blank_count() {
        for row in ["1.5,85,66,29,0,26.6,0.351,31,0", ",85,66,29,0,26.6,0.351,31,0"] {
            let data = format!("{}\n{}\n", HEADER, row);

            let err = read_records(data.as_bytes()).unwrap_err();

            assert!(matches!(err, DatasetError::Malformed { line: Some(2), .. }), "row {row}: {err}");
        }
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let err = load_dataset("/nonexistent/diabetes.csv").unwrap_err();

        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().starts_with("/nonexistent/diabetes.csv"));
    }
}
