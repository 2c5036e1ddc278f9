use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use diabetes_guide_cli::{App, AppConfig, Cli, Command};
use diabetes_guide_data::repository::{PatientRecordRepository, RepositoryError};
use diabetes_guide_domain::services::create_default_assessment_service;

/// Initialize tracing for structured logging
///
/// `RUST_LOG` wins when set; otherwise each `-v` raises the level one step
/// from `warn`. Logs go to stderr so stdout only carries results.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_target(false)
            .with_timer(fmt::time::uptime())
            .with_writer(io::stderr))
        .with(env_filter)
        .init();
}

/// Load the configured dataset, reporting a failure without aborting
fn load_dataset(repository: &PatientRecordRepository, config: &AppConfig) {
    if !config.load_dataset {
        debug!("Dataset loading disabled");
        return;
    }

    match repository.load_csv(&config.data_path) {
        Ok(count) => info!("Loaded {} records from {}", count, config.data_path.display()),
        Err(RepositoryError::Dataset(e)) => {
            eprintln!("File Error: Could not load file: {}", e);
        }
        Err(e) => {
            error!("Failed to store dataset: {}", e);
            eprintln!("File Error: Could not load file: {}", e);
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    // A missing .env file is fine; the environment may be set directly
    let dotenv_loaded = dotenv().is_ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if !dotenv_loaded {
        debug!(".env file not found; using process environment");
    }

    let config = AppConfig::from_env()
        .context("invalid configuration")?
        .with_cli(&cli);
    debug!(?config, "Configuration resolved");

    let repository = PatientRecordRepository::new();
    load_dataset(&repository, &config);

    let service = create_default_assessment_service(repository.clone());
    let app = App::new(service, repository, config.format);

    let command = cli.command.clone().unwrap_or(Command::Form);
    let outcome = app.execute(
        &command,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(ExitCode::from(outcome.exit_code()))
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
