use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use diabetes_guide_domain::input::{MeasurementField, MeasurementForm};

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON documents
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "diabetes-guide",
    version,
    author = "DiabetesGuide Team",
    about = "Classify a diabetes type from eight health measurements and suggest medications",
    long_about = "diabetes-guide applies a fixed set of glucose, pregnancy and pedigree rules to\n\
        classify a diabetes type, then looks up medication suggestions for it.\n\n\
        EXAMPLES:\n\
        \n  diabetes-guide                                   Fill in the form interactively\
        \n  diabetes-guide assess --pregnancies 1 --glucose 150 ...   Assess from arguments\
        \n  diabetes-guide recommend --label Type2 --glucose 210     Look up one table entry\
        \n  diabetes-guide --data diabetes.csv batch          Classify every dataset row"
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Dataset CSV loaded at start-up
    #[arg(long, value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Skip loading the dataset
    #[arg(long, global = true, conflicts_with = "data")]
    pub no_data: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fill in the measurement form interactively (default)
    Form,

    /// Assess measurements given as arguments
    Assess(AssessArgs),

    /// Look up medications for a diabetes type label
    Recommend(RecommendArgs),

    /// Print the medication table
    Table,

    /// Assess every record in the loaded dataset
    Batch,

    /// Report classifier and dataset health
    Status,
}

/// Raw measurement values; parsed the same way as the interactive form
#[derive(Debug, Clone, Args)]
pub struct AssessArgs {
    /// Number of pregnancies (0 if not applicable)
    #[arg(long, allow_hyphen_values = true)]
    pub pregnancies: String,

    /// Glucose level (mg/dL)
    #[arg(long, allow_hyphen_values = true)]
    pub glucose: String,

    /// Blood pressure (mm Hg)
    #[arg(long, allow_hyphen_values = true)]
    pub blood_pressure: String,

    /// Skin thickness (mm)
    #[arg(long, allow_hyphen_values = true)]
    pub skin_thickness: String,

    /// Insulin level (µU/mL)
    #[arg(long, allow_hyphen_values = true)]
    pub insulin: String,

    /// Body mass index (kg/m²)
    #[arg(long, allow_hyphen_values = true)]
    pub bmi: String,

    /// Diabetes pedigree function
    #[arg(long = "pedigree", allow_hyphen_values = true)]
    pub diabetes_pedigree: String,

    /// Age (years)
    #[arg(long, allow_hyphen_values = true)]
    pub age: String,
}

impl AssessArgs {
    /// Copy the raw values into a form
    pub fn to_form(&self) -> MeasurementForm {
        MeasurementForm::new()
            .with(MeasurementField::Pregnancies, self.pregnancies.as_str())
            .with(MeasurementField::Glucose, self.glucose.as_str())
            .with(MeasurementField::BloodPressure, self.blood_pressure.as_str())
            .with(MeasurementField::SkinThickness, self.skin_thickness.as_str())
            .with(MeasurementField::Insulin, self.insulin.as_str())
            .with(MeasurementField::Bmi, self.bmi.as_str())
            .with(MeasurementField::DiabetesPedigree, self.diabetes_pedigree.as_str())
            .with(MeasurementField::Age, self.age.as_str())
    }
}

#[derive(Debug, Clone, Args)]
pub struct RecommendArgs {
    /// Diabetes type, e.g. "Type 2 Diabetes" or Type2
    #[arg(long)]
    pub label: String,

    /// Glucose level (mg/dL); only changes the Type 2 list
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub glucose: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["diabetes-guide"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_assess_keeps_raw_strings() {
        let cli = Cli::try_parse_from([
            "diabetes-guide", "assess",
            "--pregnancies", "1",
            "--glucose", "150",
            "--blood-pressure", "72",
            "--skin-thickness", "35",
            "--insulin", "0",
            "--bmi", "33.6",
            "--pedigree", "0.627",
            "--age", "abc",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Assess(args)) => {
                let form = args.to_form();
                assert_eq!(form.glucose, "150");
                assert_eq!(form.diabetes_pedigree, "0.627");
                assert_eq!(form.age, "abc");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_assess_requires_every_field() {
        let result = Cli::try_parse_from(["diabetes-guide", "assess", "--glucose", "150"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["diabetes-guide", "table", "--format", "json", "-vv"]).unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Command::Table)));
    }

    #[test]
    fn test_data_conflicts_with_no_data() {
        let result = Cli::try_parse_from(["diabetes-guide", "--data", "x.csv", "--no-data", "status"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_recommend() {
        let cli = Cli::try_parse_from([
            "diabetes-guide", "recommend", "--label", "Type 2 Diabetes", "--glucose", "210",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.label, "Type 2 Diabetes");
                assert_eq!(args.glucose, 210.0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
