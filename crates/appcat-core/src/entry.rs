//! # Catalog Entries
//!
//! An entry is one subdirectory of the apps collection. Its name is the
//! directory name; the files inside it have fixed names.

use std::path::{Component, Path, PathBuf};

/// Metadata document expected in every entry directory.
pub const METADATA_FILE: &str = "app.yaml";

/// Logo image expected in every entry directory.
pub const LOGO_FILE: &str = "logo.png";

/// A named entry resolved against an apps directory.
///
/// Constructed per validation call; nothing about it is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    path: PathBuf,
}

impl Entry {
    /// Resolve `name` under `apps_dir`. The directory is not required to exist.
    ///
    /// Root and drive-prefix components of `name` are dropped, so an
    /// absolute name still lands inside `apps_dir`.
    pub fn resolve(apps_dir: &Path, name: &str) -> Self {
        let mut path = apps_dir.to_path_buf();
        for component in Path::new(name).components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {}
                other => path.push(other),
            }
        }
        Self {
            name: name.to_string(),
            path,
        }
    }

    /// The entry name as given by the caller.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entry directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the metadata document inside the entry directory.
    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(METADATA_FILE)
    }

    /// Path of the logo image inside the entry directory.
    pub fn logo_path(&self) -> PathBuf {
        self.path.join(LOGO_FILE)
    }
}
