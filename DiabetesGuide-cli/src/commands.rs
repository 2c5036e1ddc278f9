use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::{debug, info, warn};

use diabetes_guide_data::repository::PatientRecordRepositoryTrait;
use diabetes_guide_domain::entities::Assessment;
use diabetes_guide_domain::health::get_system_health;
use diabetes_guide_domain::input::{MeasurementField, MeasurementForm};
use diabetes_guide_domain::services::{
    medication_table, recommend_for_label, AssessmentServiceError, AssessmentServiceTrait,
};

use crate::cli::{Command, OutputFormat};
use crate::render;

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran to completion
    Success,
    /// A submission was rejected because of invalid input
    InvalidInput,
}

impl Outcome {
    /// Process exit code for the outcome
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::InvalidInput => 2,
        }
    }
}

/// Presentation layer: owns the output format and forwards every command
/// to the stateless domain services
pub struct App<S, R> {
    service: S,
    repository: R,
    format: OutputFormat,
}

impl<S, R> App<S, R>
where
    S: AssessmentServiceTrait,
    R: PatientRecordRepositoryTrait,
{
    /// Create the application
    pub fn new(service: S, repository: R, format: OutputFormat) -> Self {
        Self { service, repository, format }
    }

    /// Run one command
    ///
    /// `input` is only read by the interactive form. Results go to `out`,
    /// user-facing errors to `err`.
    pub fn execute<I, O, E>(&self, command: &Command, input: &mut I, out: &mut O, err: &mut E) -> Result<Outcome>
    where
        I: BufRead,
        O: Write,
        E: Write,
    {
        debug!(?command, "Executing command");

        match command {
            Command::Form => {
                let Some(form) = prompt_form(input, out)? else {
                    bail!("input ended before the form was complete");
                };
                self.submit(&form, out, err)
            }
            Command::Assess(args) => self.submit(&args.to_form(), out, err),
            Command::Recommend(args) => {
                let recommendations = recommend_for_label(&args.label, args.glucose);
                let text = render::render_recommendations(&args.label, &recommendations, self.format)?;
                writeln!(out, "{}", text)?;
                Ok(Outcome::Success)
            }
            Command::Table => {
                writeln!(out, "{}", render::render_table(medication_table(), self.format)?)?;
                Ok(Outcome::Success)
            }
            Command::Batch => self.batch(out),
            Command::Status => {
                let health = get_system_health(&self.repository);
                writeln!(out, "{}", render::render_health(&health, self.format)?)?;
                Ok(Outcome::Success)
            }
        }
    }

    fn submit<O: Write, E: Write>(&self, form: &MeasurementForm, out: &mut O, err: &mut E) -> Result<Outcome> {
        match self.service.assess_form(form) {
            Ok(assessment) => {
                self.write_assessment(&assessment, out)?;
                Ok(Outcome::Success)
            }
            Err(AssessmentServiceError::InvalidInput(e)) => {
                writeln!(err, "Input Error: {}", e)?;
                Ok(Outcome::InvalidInput)
            }
            Err(e) => Err(e).context("assessment failed"),
        }
    }

    fn write_assessment<O: Write>(&self, assessment: &Assessment, out: &mut O) -> Result<()> {
        writeln!(out, "{}", render::render_assessment(assessment, self.format)?)?;
        Ok(())
    }

    fn batch<O: Write>(&self, out: &mut O) -> Result<Outcome> {
        let records = self
            .service
            .assess_records()
            .context("cannot run a batch assessment")?;
        let summary = self.service.dataset_summary().context("cannot summarize the dataset")?;

        info!("Batch assessed {} records", records.len());
        writeln!(out, "{}", render::render_batch(&records, &summary, self.format)?)?;
        Ok(Outcome::Success)
    }
}

/// Prompt for every field on `out` and read one line per field from `input`
///
/// Returns `None` if input ends before every field has been answered.
pub fn prompt_form<I: BufRead, O: Write>(input: &mut I, out: &mut O) -> Result<Option<MeasurementForm>> {
    let mut form = MeasurementForm::new();

    for field in MeasurementField::ALL {
        write!(out, "{} ", field.label())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            warn!(%field, "Input closed while filling in the form");
            return Ok(None);
        }
        form.set(field, line.trim_end_matches(['\r', '\n']));
    }

    Ok(Some(form))
}
