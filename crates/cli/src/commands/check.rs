use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use std::path::{Path, PathBuf};
use submission_check_core::{Error, Limits, load_config};
use submission_check_validator::{read_archive, validate_report};

/// Arguments for the `check` subcommand
pub struct CheckArgs {
    pub paths: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub max_size: Option<u64>,
    pub json: bool,
}

/// Result of checking a single archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub path: String,
    pub valid: bool,
    pub errors: Vec<String>,
}

impl CheckOutcome {
    fn new(path: &Path, errors: Vec<String>) -> Self {
        Self {
            path: path.display().to_string(),
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check every given submission and print the results
pub fn run(args: CheckArgs) -> Result<()> {
    let outcomes = check_all(&args)?;

    if args.json {
        println!("{}", render_json(&outcomes)?);
    } else {
        print_outcomes(&outcomes);
    }

    let failed = outcomes.iter().filter(|o| !o.valid).count();
    if failed > 0 {
        anyhow::bail!(
            "{} of {} submission(s) failed the check",
            failed,
            outcomes.len()
        );
    }

    Ok(())
}

/// Resolve the limits for this run and check each path in order
fn check_all(args: &CheckArgs) -> Result<Vec<CheckOutcome>> {
    let cwd = std::env::current_dir().context("Could not determine current directory")?;
    let mut config =
        load_config(args.config.as_deref(), &cwd).context("Failed to load configuration")?;
    if let Some(max) = args.max_size {
        config.limits.max_archive_bytes = max;
    }
    debug!("effective limits: {:?}", config.limits);

    args.paths
        .iter()
        .map(|path| check_submission(path, &config.limits))
        .collect()
}

fn render_json(outcomes: &[CheckOutcome]) -> Result<String> {
    serde_json::to_string_pretty(outcomes).context("Failed to serialize results")
}

/// Check one archive on disk.
///
/// A missing path or a file that is not a zip is reported as a finding,
/// like any structural problem. Other read failures are returned as errors.
pub fn check_submission(path: &Path, limits: &Limits) -> Result<CheckOutcome> {
    if !path.exists() {
        return Ok(CheckOutcome::new(
            path,
            vec![format!("Path to {} does not exist!", path.display())],
        ));
    }

    if !path.is_file() {
        debug!("{} is not a regular file", path.display());
        return Ok(not_a_zip(path));
    }

    let submission = match read_archive(path) {
        Ok(submission) => submission,
        Err(Error::InvalidArchive(reason)) => {
            debug!("{} rejected as zip: {}", path.display(), reason);
            return Ok(not_a_zip(path));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let size = submission.size(limits.size_basis);
    let report = validate_report(limits, size, &submission.entries);
    Ok(CheckOutcome::new(path, report.errors))
}

fn not_a_zip(path: &Path) -> CheckOutcome {
    CheckOutcome::new(path, vec![format!("{} is not a zip file!", path.display())])
}

fn print_outcomes(outcomes: &[CheckOutcome]) {
    for outcome in outcomes {
        if outcome.valid {
            println!("SUCCESS: {} looks fine!", outcome.path);
        } else {
            eprintln!("FAIL: {}", outcome.path);
            for error in &outcome.errors {
                eprintln!("   - {}", error);
            }
        }
    }
}
