//! # Findings
//!
//! A finding is one problem with one entry. Its `Display` form is the line
//! printed to the console.

use std::fmt;

/// Category of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingKind {
    /// A directory or file that must exist does not.
    MissingResource,
    /// The metadata document could not be parsed.
    MalformedInput,
    /// The metadata document does not match the schema.
    SchemaViolation,
    /// A value is present but in the wrong format.
    Format,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MissingResource => "missing-resource",
            Self::MalformedInput => "malformed-input",
            Self::SchemaViolation => "schema-violation",
            Self::Format => "format",
        };
        f.write_str(s)
    }
}

/// One problem with a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The entry directory does not exist.
    MissingDirectory { entry: String },
    /// The entry has no `app.yaml`.
    MissingMetadata { entry: String },
    /// `app.yaml` is not valid YAML.
    InvalidYaml { entry: String, reason: String },
    /// `app.yaml` violates the app schema.
    SchemaViolation {
        entry: String,
        instance_path: String,
        message: String,
    },
    /// The entry has no `logo.png`.
    MissingLogo { entry: String },
    /// `logo.png` does not start with the PNG signature.
    InvalidLogo { entry: String },
    /// `date_added` is set but is not a date.
    InvalidDateAdded { entry: String },
}

impl Finding {
    /// The category this finding belongs to.
    pub fn kind(&self) -> FindingKind {
        match self {
            Self::MissingDirectory { .. } | Self::MissingMetadata { .. } | Self::MissingLogo { .. } => {
                FindingKind::MissingResource
            }
            Self::InvalidYaml { .. } => FindingKind::MalformedInput,
            Self::SchemaViolation { .. } => FindingKind::SchemaViolation,
            Self::InvalidLogo { .. } | Self::InvalidDateAdded { .. } => FindingKind::Format,
        }
    }

    /// Name of the entry the finding is about.
    pub fn entry(&self) -> &str {
        match self {
            Self::MissingDirectory { entry }
            | Self::MissingMetadata { entry }
            | Self::InvalidYaml { entry, .. }
            | Self::SchemaViolation { entry, .. }
            | Self::MissingLogo { entry }
            | Self::InvalidLogo { entry }
            | Self::InvalidDateAdded { entry } => entry,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDirectory { entry } => write!(f, "Directory does not exist: {entry}"),
            Self::MissingMetadata { entry } => write!(f, "Missing app.yaml in {entry}"),
            Self::InvalidYaml { entry, reason } => write!(f, "Invalid YAML in {entry}: {reason}"),
            Self::SchemaViolation {
                entry,
                instance_path,
                message,
            } => write!(f, "{entry}: {instance_path} {message}"),
            Self::MissingLogo { entry } => write!(f, "Missing logo.png in {entry}"),
            Self::InvalidLogo { entry } => {
                write!(f, "Invalid PNG file in {entry}: logo.png is not a valid PNG")
            }
            Self::InvalidDateAdded { entry } => write!(f, "{entry}: Invalid date_added format"),
        }
    }
}

/// Result of validating one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    /// Entry name.
    pub entry: String,
    /// Findings in the order they were detected.
    pub findings: Vec<Finding>,
}

impl EntryReport {
    /// Returns true when no finding was recorded.
    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }

    /// Console lines for every finding, in order.
    pub fn messages(&self) -> Vec<String> {
        self.findings.iter().map(ToString::to_string).collect()
    }
}
