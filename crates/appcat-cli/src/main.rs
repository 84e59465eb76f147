//! # appcat CLI entry point
//!
//! Parses command-line arguments, sets up logging, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use appcat_cli::config::find_repo_root;
use appcat_cli::validate::{run_validate, ValidateArgs};

/// App catalog validator.
///
/// Checks that every entry under `apps/` has a schema-conformant
/// `app.yaml`, a PNG `logo.png`, and a readable `date_added`.
#[derive(Parser, Debug)]
#[command(name = "appcat", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate catalog entries against the app schema.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let repo_root = find_repo_root(&cwd).unwrap_or_else(|| {
        tracing::warn!("Could not locate repository root; using current directory");
        cwd.clone()
    });
    tracing::debug!(repo_root = %repo_root.display(), "resolved repository root");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &repo_root),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_validate_all() {
        let cli = Cli::try_parse_from(["appcat", "validate"]).unwrap();
        let Commands::Validate(args) = cli.command;
        assert!(args.names.is_empty());
        assert!(args.apps_dir.is_none());
        assert!(args.schema.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parse_validate_names_in_order() {
        let cli = Cli::try_parse_from(["appcat", "validate", "weather", "notes", "foo"]).unwrap();
        let Commands::Validate(args) = cli.command;
        assert_eq!(args.names, vec!["weather", "notes", "foo"]);
    }

    #[test]
    fn cli_parse_overrides_and_verbosity() {
        let cli = Cli::try_parse_from([
            "appcat",
            "-vv",
            "validate",
            "--apps-dir",
            "fixtures/apps",
            "--schema",
            "fixtures/app.schema.json",
            "weather",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Validate(args) = cli.command;
        assert_eq!(args.apps_dir, Some(PathBuf::from("fixtures/apps")));
        assert_eq!(args.schema, Some(PathBuf::from("fixtures/app.schema.json")));
        assert_eq!(args.names, vec!["weather"]);
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["appcat"]).is_err());
    }

    #[test]
    fn cli_verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
