//! # appcat-check — Catalog Entry Validation
//!
//! Checks one entry of the apps collection at a time and reports every
//! problem found as a [`Finding`].
//!
//! ## Check Order
//!
//! 1. Entry directory exists (stops on failure).
//! 2. `app.yaml` exists (stops on failure).
//! 3. `app.yaml` parses (stops on failure).
//! 4. Document conforms to the app schema (all violations collected).
//! 5. `logo.png` exists and carries the PNG signature.
//! 6. `date_added`, when set, reads as a date.
//!
//! Steps 4 to 6 are independent: a schema violation never hides a logo or
//! date problem.
//!
//! ## Crate Policy
//!
//! - Reads the filesystem only; never writes.
//! - The compiled schema is borrowed, never owned or rebuilt.
//! - Content problems are findings. Only unexpected I/O faults are errors.

pub mod finding;
pub mod validator;

pub use finding::{EntryReport, Finding, FindingKind};
pub use validator::AppValidator;
