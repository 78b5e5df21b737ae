//! Headless assessment front end.
//!
//! Reads a JSON request and prints a JSON report, running the same engine
//! as the terminal UI.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin assess -- request.json --pretty
//! echo '{"profile": {...}, "plan": {...}}' | cargo run --bin assess
//! ```
//!
//! Exit status is 2 when the request fails validation (including fields
//! with the wrong type or an unrecognized value), 1 on any other error.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use tracing_subscriber::EnvFilter;

use smartrisk::domain::{AssessmentResult, BodyMeasurements, PatientProfile, TherapyPlan};
use smartrisk::ports::NoCache;
use smartrisk::{AssessmentService, RiskAssessmentEngine, SmartRiskError};

const EXIT_INVALID_REQUEST: u8 = 2;

#[derive(Debug, Deserialize)]
struct AssessmentRequest {
    profile: PatientProfile,
    #[serde(default)]
    plan: TherapyPlan,
    /// Optional weight and height, reported as BMI only.
    #[serde(default)]
    body: Option<BodyMeasurements>,
}

#[derive(Debug, Serialize)]
struct AssessmentReport {
    generated_at: chrono::DateTime<chrono::Utc>,
    model: &'static str,
    result: AssessmentResult,
    absolute_risk_reduction_percent: f64,
    pcsk9_applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    bmi: Option<f64>,
}

#[derive(Debug, PartialEq)]
struct Args {
    input: Option<PathBuf>,
    pretty: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    Assess(Args),
    Help,
}

fn usage() -> String {
    "Usage: assess [<request.json>|-] [--pretty]".to_string()
}

fn parse_args<I>(args: I) -> smartrisk::Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut input: Option<PathBuf> = None;
    let mut pretty = false;

    for arg in args {
        match arg.as_str() {
            "--pretty" => pretty = true,
            "-h" | "--help" => return Ok(Command::Help),
            "-" => input = None,
            _ if arg.starts_with("--") => {
                return Err(SmartRiskError::Config(format!(
                    "Unknown flag {arg}. {}",
                    usage()
                )))
            }
            _ => {
                if input.is_some() {
                    return Err(SmartRiskError::Config(usage()));
                }
                input = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(Command::Assess(Args { input, pretty }))
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            Ok(buf)
        }
    }
}

fn parse_request(raw: &str) -> smartrisk::Result<AssessmentRequest> {
    Ok(serde_json::from_str(raw)?)
}

fn build_report<C: smartrisk::ports::AssessmentCache>(
    service: &AssessmentService<C>,
    request: &AssessmentRequest,
) -> smartrisk::Result<AssessmentReport> {
    let bmi = match request.body {
        Some(body) => {
            body.validate()?;
            Some(body.bmi())
        }
        None => None,
    };

    let result = service.assess(&request.profile, &request.plan)?;

    Ok(AssessmentReport {
        generated_at: chrono::Utc::now(),
        model: service.model_name(),
        absolute_risk_reduction_percent: result.absolute_risk_reduction(),
        pcsk9_applied: request.plan.pcsk9_inhibitor
            && TherapyPlan::pcsk9_eligible(request.profile.ldl),
        result,
        bmi,
    })
}

/// Exit status for a failed run.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<SmartRiskError>() {
        Some(SmartRiskError::Validation(_)) => EXIT_INVALID_REQUEST,
        Some(SmartRiskError::Serialization(e)) if e.classify() == Category::Data => {
            EXIT_INVALID_REQUEST
        }
        _ => 1,
    }
}

fn run(args: Args) -> Result<()> {
    let raw = read_input(args.input.as_ref())?;
    let request = parse_request(&raw)?;

    let service = AssessmentService::new(RiskAssessmentEngine::new(), NoCache);
    let report = build_report(&service, &request)?;

    let out = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{out}");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let outcome = parse_args(std::env::args().skip(1))
        .map_err(anyhow::Error::from)
        .and_then(|command| match command {
            Command::Help => {
                println!("{}", usage());
                Ok(())
            }
            Command::Assess(args) => run(args),
        });

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}
