use std::io::Write;

use diabetes_guide_data::repository::{PatientRecordRepository, PatientRecordRepositoryTrait, RepositoryError};
use tempfile::NamedTempFile;

const DATASET: &str = "\
Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome
6,148,72,35,0,33.6,0.627,50,1
1,85,66,29,0,26.6,0.351,31,0
8,183,64,0,0,23.3,0.672,32,1
";

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write temp file");
    file
}

#[test]
fn test_load_csv_into_repository() {
    let file = write_csv(DATASET);
    let repo = PatientRecordRepository::new();

    let count = repo.load_csv(file.path()).expect("Dataset should load");

    assert_eq!(count, 3);
    assert_eq!(repo.count().unwrap(), 3);
    assert_eq!(repo.source().unwrap().as_deref(), Some(file.path()));

    let records = repo.get_all().unwrap();
    assert_eq!(records[0].glucose, 148.0);
    assert_eq!(records[2].pregnancies, 8);
    assert_eq!(records[2].bmi, 23.3);
}

#[test]
fn test_reload_replaces_records() {
    let first = write_csv(DATASET);
    let second = write_csv(
        "Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome\n\
         0,99,70,20,0,22.0,0.2,25,0\n",
    );
    let repo = PatientRecordRepository::new();

    repo.load_csv(first.path()).unwrap();
    repo.load_csv(second.path()).unwrap();

    assert_eq!(repo.count().unwrap(), 1);
    assert_eq!(repo.source().unwrap().as_deref(), Some(second.path()));
}

#[test]
fn test_malformed_csv_is_reported() {
    let file = write_csv(
        "Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome\n\
         one,148,72,35,0,33.6,0.627,50,1\n",
    );
    let repo = PatientRecordRepository::new();

    let err = repo.load_csv(file.path()).unwrap_err();

    assert!(matches!(err, RepositoryError::Dataset(_)));
    assert!(err.to_string().contains("line 2"), "unexpected message: {}", err);
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn test_header_only_file_loads_empty() {
    let file = write_csv(
        "Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome\n",
    );
    let repo = PatientRecordRepository::new();

    assert_eq!(repo.load_csv(file.path()).unwrap(), 0);
    assert!(repo.source().unwrap().is_some());
}
