//! # appcat-cli — App Catalog Command-Line Interface
//!
//! Provides the `appcat` binary. Argument parsing lives here; the checks
//! themselves live in `appcat-check`.
//!
//! ## Subcommands
//!
//! - `appcat validate [NAME]...` — validate the named entries, or every
//!   subdirectory of `apps/` when no name is given. Exits 1 if any entry
//!   has a finding.
//!
//! ```bash
//! appcat validate
//! appcat validate weather notes
//! appcat validate --apps-dir ./fixtures/apps --schema ./schema/app.schema.json
//! ```

pub mod config;
pub mod runner;
pub mod validate;
