// DiabetesGuide-cli lib.rs
//
// Command-line presentation layer for DiabetesGuide.
// The binary in src/bin/main.rs wires these modules together.

// Public modules
pub mod cli;
pub mod commands;
pub mod config;
pub mod render;

pub use cli::{Cli, Command, OutputFormat};
pub use commands::{App, Outcome};
pub use config::AppConfig;
