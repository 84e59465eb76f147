//! # Entry Validator
//!
//! [`AppValidator`] runs the fixed sequence of checks against one entry and
//! collects findings. It holds the apps directory and a borrowed compiled
//! schema; it keeps no state between calls, so validating the same
//! unchanged entry twice yields the same report.

use std::path::{Path, PathBuf};

use appcat_core::png::file_has_png_signature;
use appcat_core::temporal::{is_truthy, is_valid_date_value};
use appcat_core::{AppcatError, Entry};
use appcat_schema::{parse_yaml_document, AppSchema};
use serde_json::Value;

use crate::finding::{EntryReport, Finding};

/// Validates catalog entries under one apps directory.
#[derive(Debug, Clone, Copy)]
pub struct AppValidator<'a> {
    apps_dir: &'a Path,
    schema: &'a AppSchema,
}

impl<'a> AppValidator<'a> {
    /// Create a validator for entries under `apps_dir`, checked against `schema`.
    pub fn new(apps_dir: &'a Path, schema: &'a AppSchema) -> Self {
        Self { apps_dir, schema }
    }

    /// The apps directory entries are resolved against.
    pub fn apps_dir(&self) -> &Path {
        self.apps_dir
    }

    /// Validate the entry called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppcatError::Io`] only when a file that exists cannot be
    /// read. Every content problem is a finding in the returned report.
    pub fn validate(&self, name: &str) -> Result<EntryReport, AppcatError> {
        let entry = Entry::resolve(self.apps_dir, name);
        let findings = self.check(&entry)?;

        tracing::debug!(
            entry = name,
            findings = findings.len(),
            "validated entry"
        );
        for finding in &findings {
            tracing::debug!(entry = name, kind = %finding.kind(), "{finding}");
        }

        Ok(EntryReport {
            entry: name.to_string(),
            findings,
        })
    }

    fn check(&self, entry: &Entry) -> Result<Vec<Finding>, AppcatError> {
        let name = entry.name().to_string();

        if !entry.path().exists() {
            return Ok(vec![Finding::MissingDirectory { entry: name }]);
        }

        let metadata_path = entry.metadata_path();
        if !metadata_path.exists() {
            return Ok(vec![Finding::MissingMetadata { entry: name }]);
        }

        let bytes = std::fs::read(&metadata_path).map_err(|e| AppcatError::io(&metadata_path, e))?;
        let document = match parse_yaml_document(&bytes) {
            Ok(doc) => doc,
            Err(e) => {
                return Ok(vec![Finding::InvalidYaml {
                    entry: name,
                    reason: e.to_string(),
                }])
            }
        };

        let mut findings: Vec<Finding> = self
            .schema
            .violations(&document)
            .into_iter()
            .map(|v| Finding::SchemaViolation {
                entry: name.clone(),
                instance_path: v.instance_path,
                message: v.message,
            })
            .collect();

        if let Some(finding) = check_logo(&name, entry.logo_path())? {
            findings.push(finding);
        }

        if let Some(finding) = check_date_added(&name, &document) {
            findings.push(finding);
        }

        Ok(findings)
    }
}

fn check_logo(name: &str, logo_path: PathBuf) -> Result<Option<Finding>, AppcatError> {
    if !logo_path.exists() {
        return Ok(Some(Finding::MissingLogo {
            entry: name.to_string(),
        }));
    }
    if file_has_png_signature(&logo_path)? {
        Ok(None)
    } else {
        Ok(Some(Finding::InvalidLogo {
            entry: name.to_string(),
        }))
    }
}

fn check_date_added(name: &str, document: &Value) -> Option<Finding> {
    let value = document.get("date_added").filter(|v| is_truthy(v))?;
    if is_valid_date_value(value) {
        None
    } else {
        Some(Finding::InvalidDateAdded {
            entry: name.to_string(),
        })
    }
}
