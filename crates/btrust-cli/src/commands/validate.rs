//! Validate command implementation.
//!
//! Applies the strict pre-deployment checks to an issuance request and
//! exits non-zero if any fail.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use btrust_core::validation::{Validate, ValidationError};

use crate::cli::OutputFormat;
use crate::commands::IssuanceArgs;
use crate::error::CliError;
use crate::output::{print_error, print_output, print_success};

/// Arguments for the validate command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub issuance: IssuanceArgs,
}

/// One failed check.
#[derive(Debug, Serialize, Tabled)]
struct Problem {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Problem")]
    message: String,
    #[tabled(rename = "Rule")]
    rule: String,
}

impl From<ValidationError> for Problem {
    fn from(err: ValidationError) -> Self {
        Self {
            field: err.field,
            message: err.message,
            rule: err.rule.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    valid: bool,
    errors: Vec<Problem>,
}

/// Execute the validate command.
pub fn execute(args: &ValidateArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let form = args.issuance.to_form()?;
    let problems: Vec<Problem> = form.validate().into_iter().map(Problem::from).collect();
    let count = problems.len();

    match format {
        OutputFormat::Table => {
            if problems.is_empty() {
                if !quiet {
                    print_success("Issuance request is valid");
                }
            } else {
                for p in &problems {
                    print_error(&format!("{}: {}", p.field, p.message));
                }
            }
        }
        OutputFormat::Json => {
            let report = ValidationReport {
                valid: problems.is_empty(),
                errors: problems,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => print_output(&problems, format)?,
        OutputFormat::Minimal => {
            println!("{}", if problems.is_empty() { "valid" } else { "invalid" });
        }
    }

    if count > 0 {
        return Err(CliError::Invalid {
            subject: "issuance request".into(),
            count,
        }
        .into());
    }
    Ok(())
}
