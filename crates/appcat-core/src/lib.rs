//! # appcat-core — Foundational Types for the App Catalog Validator
//!
//! The leaf crate of the workspace. Everything here is independent of the
//! schema engine and of the console surface:
//!
//! - [`entry`] — the on-disk layout of a catalog entry (`apps/<name>/app.yaml`,
//!   `apps/<name>/logo.png`).
//! - [`png`] — the 8-byte PNG signature check applied to logo files.
//! - [`temporal`] — truthiness and permissive date parsing for `date_added`.
//! - [`error`] — `AppcatError`, the fatal error type for I/O faults that are
//!   not part of the reported finding set.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `appcat-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod entry;
pub mod error;
pub mod png;
pub mod temporal;

pub use entry::{Entry, LOGO_FILE, METADATA_FILE};
pub use error::AppcatError;
pub use png::{has_png_signature, PNG_SIGNATURE};
pub use temporal::{is_truthy, is_valid_date_value, parse_permissive_date};
