//! # Validate Subcommand
//!
//! Loads the schema once, then validates the named entries (or every entry
//! under the apps directory) and maps the outcome to an exit code.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use appcat_check::AppValidator;
use appcat_schema::AppSchema;
use clap::Args;

use crate::config::CatalogPaths;
use crate::runner::{discover_entries, run_entries};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Entry names to validate. Validates every entry when omitted.
    pub names: Vec<String>,

    /// Apps directory (default: `<repo root>/apps`).
    #[arg(long)]
    pub apps_dir: Option<PathBuf>,

    /// App schema file (default: `<repo root>/schema/app.schema.json`).
    #[arg(long)]
    pub schema: Option<PathBuf>,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, repo_root: &Path) -> Result<u8> {
    let paths = CatalogPaths::resolve(repo_root, args.apps_dir.as_deref(), args.schema.as_deref());
    tracing::debug!(
        apps_dir = %paths.apps_dir.display(),
        schema = %paths.schema_path.display(),
        "resolved catalog paths"
    );

    let schema = AppSchema::load(&paths.schema_path).context("loading app schema")?;

    let names = if args.names.is_empty() {
        discover_entries(&paths.apps_dir)?
    } else {
        args.names.clone()
    };

    let validator = AppValidator::new(&paths.apps_dir, &schema);
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let summary = run_entries(&validator, &names, &mut stdout.lock(), &mut stderr.lock())?;

    Ok(summary.exit_code())
}
