//! Structural checks for zipped contest submissions.
//!
//! A submission must contain `team_name.txt`, a `robot/` directory holding
//! `robot/robot.py`, no other top-level folder, and stay under the size
//! limit. Findings are returned as plain messages meant to be shown to the
//! submitting team verbatim.

pub mod archive;

use log::trace;
use serde::Serialize;
use submission_check_core::{ArchiveEntry, Limits};

pub use archive::{Submission, read_archive, read_archive_from};

const TEAM_NAME_FILE: &str = "team_name.txt";
const ROBOT_DIR: &str = "robot/";
const ROBOT_PY_FILE: &str = "robot/robot.py";

/// Outcome of checking one submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Presence flags and findings accumulated over one pass of the entries
#[derive(Debug, Default)]
struct Scan {
    has_team_name_file: bool,
    has_robot_dir: bool,
    has_robot_py_file: bool,
    errors: Vec<String>,
}

impl Scan {
    fn observe(mut self, entry: &ArchiveEntry) -> Self {
        trace!("scanning entry {:?} (dir: {})", entry.path, entry.is_directory);

        if !entry.is_directory {
            match entry.path.as_str() {
                TEAM_NAME_FILE => self.has_team_name_file = true,
                ROBOT_PY_FILE => self.has_robot_py_file = true,
                _ => {}
            }
            return self;
        }

        if entry.path == ROBOT_DIR {
            self.has_robot_dir = true;
        } else if entry.separator_count() == 1 {
            self.errors.push(format!(
                "Found {}. Only one top-level folder allowed!",
                entry.path
            ));
        }
        self
    }

    fn finish(mut self, limits: &Limits, archive_size_bytes: u64) -> Vec<String> {
        if !self.has_team_name_file {
            self.errors
                .push("team_name.txt file not found in the submission!".to_string());
        }
        if !self.has_robot_dir {
            self.errors
                .push("robot/ directory not found in the submission!".to_string());
        }
        if !self.has_robot_py_file {
            self.errors.push(
                "robot.py file not found within robot/ folder in the submission!".to_string(),
            );
        }
        if archive_size_bytes > limits.max_archive_bytes {
            self.errors.push(format!(
                "The submission exceeds {} allowed size!",
                limits.display_size()
            ));
        }
        self.errors
    }
}

/// Check a submission against the default 10 MB limit.
///
/// Returns every problem found, in discovery order. An empty result means
/// the submission passes.
pub fn validate(archive_size_bytes: u64, entries: &[ArchiveEntry]) -> Vec<String> {
    validate_with_limits(&Limits::default(), archive_size_bytes, entries)
}

/// Check a submission against explicit limits.
///
/// `archive_size_bytes` is compared as-is; the caller decides which size
/// it represents (see [`Submission::size`]).
pub fn validate_with_limits(
    limits: &Limits,
    archive_size_bytes: u64,
    entries: &[ArchiveEntry],
) -> Vec<String> {
    entries
        .iter()
        .fold(Scan::default(), Scan::observe)
        .finish(limits, archive_size_bytes)
}

/// Same as [`validate_with_limits`], wrapped in a report
pub fn validate_report(
    limits: &Limits,
    archive_size_bytes: u64,
    entries: &[ArchiveEntry],
) -> ValidationReport {
    ValidationReport {
        errors: validate_with_limits(limits, archive_size_bytes, entries),
    }
}
