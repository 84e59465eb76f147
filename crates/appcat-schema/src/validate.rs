//! # Schema Validation
//!
//! Runtime validation of app metadata documents against the app JSON Schema
//! (Draft 2020-12).
//!
//! ## Lifecycle
//!
//! The schema file is read and compiled exactly once, by [`AppSchema::load`],
//! before any entry is looked at. The compiled validator is immutable and is
//! handed to every validation by reference.
//!
//! ## Documents
//!
//! `app.yaml` is parsed with `serde_yaml` and converted to a
//! `serde_json::Value`, since the schema engine works on JSON values. A
//! document that parses but has no JSON form (a mapping used as a key,
//! `.nan`) is rejected at conversion time the same way a syntax error is.

use std::fmt;
use std::path::{Path, PathBuf};

use jsonschema::{Draft, Validator};
use serde_json::Value;
use thiserror::Error;

/// Error loading or compiling the schema. Fatal for the run.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("cannot read schema '{}': {source}", path.display())]
    Read {
        /// Path of the schema file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The schema file is not valid JSON.
    #[error("schema '{schema_name}' is not valid JSON: {reason}")]
    InvalidJson {
        /// Schema filename or identifier.
        schema_name: String,
        /// Parser message.
        reason: String,
    },

    /// The compiled validator could not be built (e.g., invalid schema).
    #[error("validator build error for schema '{schema_name}': {reason}")]
    ValidatorBuildError {
        /// Schema filename or identifier.
        schema_name: String,
        /// Reason the validator could not be built.
        reason: String,
    },
}

/// Error turning `app.yaml` content into a JSON value.
///
/// `Display` is the bare underlying message so it can be embedded in a
/// finding verbatim.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// YAML syntax error.
    #[error("{0}")]
    Parse(#[from] serde_yaml::Error),

    /// Parsed YAML that has no JSON equivalent.
    #[error("{reason} at {}", display_location(.location))]
    Unrepresentable {
        /// JSON Pointer to the offending node; empty for the document root.
        location: String,
        /// What could not be converted.
        reason: String,
    },
}

fn display_location(location: &str) -> &str {
    if location.is_empty() {
        "(root)"
    } else {
        location
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// The compiled app schema.
///
/// `AppSchema` is `Send + Sync` and is never mutated after construction.
pub struct AppSchema {
    /// Schema filename or identifier, for diagnostics.
    name: String,
    validator: Validator,
}

impl fmt::Debug for AppSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSchema").field("name", &self.name).finish_non_exhaustive()
    }
}

impl AppSchema {
    /// Read, parse, and compile the schema at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Read`] if the file cannot be read,
    /// [`SchemaError::InvalidJson`] if it is not JSON, and
    /// [`SchemaError::ValidatorBuildError`] if it is not a usable schema.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("app.schema.json")
            .to_string();

        let value: Value =
            serde_json::from_str(&content).map_err(|e| SchemaError::InvalidJson {
                schema_name: name.clone(),
                reason: e.to_string(),
            })?;

        let schema = Self::from_value(&name, &value)?;
        tracing::info!(schema = %path.display(), "loaded app schema");
        Ok(schema)
    }

    /// Compile an in-memory schema value.
    pub fn from_value(name: &str, schema: &Value) -> Result<Self, SchemaError> {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .should_validate_formats(true)
            .build(schema)
            .map_err(|e| SchemaError::ValidatorBuildError {
                schema_name: name.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            name: name.to_string(),
            validator,
        })
    }

    /// Schema filename or identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if `instance` satisfies the schema.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }

    /// Every violation of the schema by `instance`, in engine order.
    ///
    /// An empty vector means the document conforms.
    pub fn violations(&self, instance: &Value) -> Vec<Violation> {
        self.validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect()
    }
}

/// Parse `app.yaml` bytes into a JSON value.
///
/// Empty (whitespace-only) input is `null`, which the schema then rejects
/// as a type mismatch.
pub fn parse_yaml_document(bytes: &[u8]) -> Result<Value, DocumentError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    let yaml: serde_yaml::Value = serde_yaml::from_slice(bytes)?;
    yaml_to_json(&yaml)
}

/// Convert a parsed metadata document to the JSON form the schema engine
/// checks.
///
/// Tags are dropped and their inner value kept. Numeric and boolean mapping
/// keys become strings. Non-finite floats and non-scalar keys fail with
/// [`DocumentError::Unrepresentable`] naming where they sit in the document.
pub fn yaml_to_json(yaml: &serde_yaml::Value) -> Result<Value, DocumentError> {
    convert_node(yaml, "")
}

fn convert_node(node: &serde_yaml::Value, location: &str) -> Result<Value, DocumentError> {
    use serde_yaml::Value as Yaml;

    match node {
        Yaml::Null => Ok(Value::Null),
        Yaml::Bool(b) => Ok(Value::Bool(*b)),
        Yaml::String(s) => Ok(Value::String(s.clone())),
        Yaml::Number(n) => json_number(n)
            .map(Value::Number)
            .ok_or_else(|| unrepresentable(location, format!("non-finite number {n}"))),
        Yaml::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| convert_node(item, &format!("{location}/{i}")))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Yaml::Mapping(fields) => {
            let mut object = serde_json::Map::with_capacity(fields.len());
            for (key, value) in fields {
                let key = match key {
                    Yaml::String(s) => s.clone(),
                    Yaml::Number(n) => n.to_string(),
                    Yaml::Bool(b) => b.to_string(),
                    _ => return Err(unrepresentable(location, "mapping key is not a scalar".into())),
                };
                let value = convert_node(value, &format!("{location}/{}", escape_pointer(&key)))?;
                object.insert(key, value);
            }
            Ok(Value::Object(object))
        }
        Yaml::Tagged(tagged) => convert_node(&tagged.value, location),
    }
}

fn json_number(n: &serde_yaml::Number) -> Option<serde_json::Number> {
    if let Some(i) = n.as_i64() {
        return Some(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.into());
    }
    n.as_f64().and_then(serde_json::Number::from_f64)
}

fn escape_pointer(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

fn unrepresentable(location: &str, reason: String) -> DocumentError {
    DocumentError::Unrepresentable {
        location: location.to_string(),
        reason,
    }
}
