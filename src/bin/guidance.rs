//! Command-line front end for the guidance engine.
//!
//! Usage:
//! ```bash
//! # Evaluate a JSON request and print the report
//! guidance evaluate --input request.json
//!
//! # Same, English number formatting and a fixed reference date
//! guidance evaluate --input request.json --locale en-US --reference-date 2024-06-01
//!
//! # Expected cumulative gain for a category at a week
//! guidance expected --category obese --week 20
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use prenatal_guidance::config::EngineConfig;
use prenatal_guidance::gestation::parse_local_date;
use prenatal_guidance::models::enums::{BmiCategory, Locale};
use prenatal_guidance::weight_gain::expected_gain;
use prenatal_guidance::{
    init_tracing, DefaultGuidanceEngine, EvaluationRequest, GuidanceEngine, GuidanceError,
};

#[derive(Parser)]
#[command(
    name = "guidance",
    version,
    about = "Prenatal weight-gain guidance rules engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON config file (defaults to the per-user config when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output locale override (pt-BR or en-US)
    #[arg(long, global = true)]
    locale: Option<Locale>,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate measurements and questionnaire answers
    Evaluate {
        /// JSON request file
        #[arg(long)]
        input: PathBuf,

        /// Evaluation date, YYYY-MM-DD (defaults to the request's date, then today)
        #[arg(long)]
        reference_date: Option<String>,

        /// Pretty-print the report
        #[arg(long)]
        pretty: bool,
    },

    /// Print the expected cumulative-gain range
    Expected {
        /// underweight, normal, overweight or obese
        #[arg(long)]
        category: BmiCategory,

        #[arg(long)]
        week: u32,
    },
}

fn load_config(cli: &Cli) -> Result<EngineConfig, GuidanceError> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::load_default()?,
    }
    .with_env_overrides();
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), GuidanceError> {
    let config = load_config(&cli)?;
    init_tracing(Some(config.log_filter.as_str()));

    match cli.command {
        Command::Evaluate {
            input,
            reference_date,
            pretty,
        } => {
            let mut request = EvaluationRequest::load(&input)?;
            if let Some(raw) = reference_date {
                request.reference_date = Some(parse_local_date(&raw)?);
            }
            let engine = DefaultGuidanceEngine::new(config)?;
            let report = engine.evaluate_request(&request);
            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{json}");
        }
        Command::Expected { category, week } => {
            let range = expected_gain(category, week);
            println!("{}", serde_json::to_string(&range)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "guidance failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
