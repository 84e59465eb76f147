//! # Path Configuration
//!
//! Locates the repository root and resolves the apps directory and schema
//! file, applying command-line overrides.

use std::path::{Path, PathBuf};

/// Directory holding one subdirectory per catalog entry.
pub const APPS_DIR: &str = "apps";

/// Directory holding the versioned app schema.
pub const SCHEMA_DIR: &str = "schema";

/// Schema filename inside [`SCHEMA_DIR`].
pub const SCHEMA_FILE: &str = "app.schema.json";

/// Resolved locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    /// The apps collection.
    pub apps_dir: PathBuf,
    /// The app schema file.
    pub schema_path: PathBuf,
}

impl CatalogPaths {
    /// Default layout under `repo_root`, with optional overrides.
    ///
    /// An override is read against `repo_root` when something exists there
    /// under that name, and against the working directory otherwise.
    pub fn resolve(
        repo_root: &Path,
        apps_dir: Option<&Path>,
        schema_path: Option<&Path>,
    ) -> Self {
        let anchor = |path: &Path| {
            Some(repo_root.join(path))
                .filter(|candidate| candidate.exists())
                .unwrap_or_else(|| path.to_path_buf())
        };
        Self {
            apps_dir: apps_dir.map_or_else(|| repo_root.join(APPS_DIR), anchor),
            schema_path: schema_path
                .map_or_else(|| repo_root.join(SCHEMA_DIR).join(SCHEMA_FILE), anchor),
        }
    }
}

/// Walk up from `start` to the first directory containing both `apps/` and
/// `schema/`.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(APPS_DIR).is_dir() && dir.join(SCHEMA_DIR).is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}
