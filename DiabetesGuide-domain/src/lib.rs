// DiabetesGuide Domain
// This crate contains the business logic for the DiabetesGuide application

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Raw form input parsing
pub mod input;

// Health checks and system status
pub mod health;

// Re-export the data crate for convenience
pub use diabetes_guide_data as data;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;
