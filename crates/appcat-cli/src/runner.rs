//! # Batch Runner
//!
//! Resolves which entries to check, validates them one after another, and
//! prints a status block per entry followed by a summary line. Status lines
//! go to `out`; finding lines and the failure summary go to `err`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use appcat_check::AppValidator;

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries validated.
    pub checked: usize,
    /// Entries with at least one finding.
    pub failed: usize,
}

impl RunSummary {
    /// Returns true when every entry passed.
    pub fn passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code: 0 when every entry passed, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

/// Names of every subdirectory of `apps_dir`, in directory-scan order.
///
/// Non-directory children are skipped. Names that are not valid UTF-8 are
/// converted lossily; they then fail validation as missing directories
/// rather than being dropped silently.
pub fn discover_entries(apps_dir: &Path) -> Result<Vec<String>> {
    let read_dir = std::fs::read_dir(apps_dir)
        .with_context(|| format!("cannot read apps directory {}", apps_dir.display()))?;

    let mut names = Vec::new();
    for dirent in read_dir {
        let dirent = dirent
            .with_context(|| format!("cannot read apps directory {}", apps_dir.display()))?;
        let file_type = dirent
            .file_type()
            .with_context(|| format!("cannot stat {}", dirent.path().display()))?;
        if file_type.is_dir() {
            names.push(dirent.file_name().to_string_lossy().into_owned());
        }
    }

    tracing::debug!(count = names.len(), apps_dir = %apps_dir.display(), "discovered entries");
    Ok(names)
}

/// Validate `names` in order, printing status as each entry completes.
///
/// # Errors
///
/// Fails on the first fatal I/O error from the validator, or if the output
/// streams cannot be written.
pub fn run_entries<O: Write, E: Write>(
    validator: &AppValidator<'_>,
    names: &[String],
    out: &mut O,
    err: &mut E,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for name in names {
        writeln!(out, "Validating {name}...")?;
        out.flush()?;

        let report = validator
            .validate(name)
            .with_context(|| format!("validating {name}"))?;
        summary.checked += 1;

        if report.is_valid() {
            writeln!(out, "  ✓ Valid")?;
        } else {
            summary.failed += 1;
            for message in report.messages() {
                writeln!(err, "  ✗ {message}")?;
            }
            err.flush()?;
        }
    }

    if summary.passed() {
        writeln!(out, "\nAll validations passed")?;
    } else {
        writeln!(err, "\nValidation failed")?;
    }

    tracing::info!(
        checked = summary.checked,
        failed = summary.failed,
        "validation run complete"
    );
    Ok(summary)
}
