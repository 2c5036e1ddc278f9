// DiabetesGuide Data
// This crate handles the patient-record dataset that ships alongside the form

// CSV dataset loading
pub mod dataset;

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
