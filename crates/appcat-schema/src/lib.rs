//! # appcat-schema — App Metadata Schema Validation
//!
//! Loads the app schema (`schema/app.schema.json`) once, compiles it with the
//! `jsonschema` crate, and validates parsed `app.yaml` documents against it.
//!
//! ## Key Types
//!
//! - [`AppSchema`] — the compiled, immutable schema. Built once per run and
//!   shared by reference with every validation.
//! - [`Violation`] — one structural mismatch, with the instance path, the
//!   schema path, and a message.
//! - [`parse_yaml_document`] — YAML text to a JSON value the schema engine
//!   can check.
//!
//! ## Crate Policy
//!
//! - Every violation is collected; validation never stops at the first one.
//! - Format keywords (`uri`, `email`, `date`) are asserted, not annotated.
//! - No network access: the schema is self-contained.

pub mod validate;

pub use validate::{
    parse_yaml_document, yaml_to_json, AppSchema, DocumentError, SchemaError, Violation,
};
