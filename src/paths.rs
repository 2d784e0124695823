//! Resolution of the install environment's directory layout.
//!
//! Everything the engine touches hangs off three roots: the project being
//! provisioned, the Composer vendor directory inside it, and the template
//! package inside that. All derived locations (web root, settings file,
//! ignore file, scaffold origins) are computed here so the rest of the crate
//! never assembles paths by hand.

use std::path::{Path, PathBuf};

use crate::error::PathsError;

/// Vendor-relative location of the template package.
const PACKAGE_SUBDIR: &str = "universityofadelaide/shepherd-drupal-scaffold";

/// Resolved directory layout for one scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    project: PathBuf,
    vendor: PathBuf,
    package: PathBuf,
}

impl Paths {
    /// Resolve the layout from CLI overrides, environment, and the current
    /// directory.
    ///
    /// The project root is taken from `root_override`, then the
    /// `SCAFFOLD_ROOT` environment variable, then the nearest ancestor of the
    /// current directory containing a `composer.json`. The vendor directory is
    /// taken from `vendor_override`, then `COMPOSER_VENDOR_DIR` (resolved
    /// against the project root when relative), then `<project>/vendor`.
    ///
    /// # Errors
    ///
    /// Returns [`PathsError::ProjectRootNotFound`] when no root can be
    /// determined, or [`PathsError::Canonicalize`] when an existing root
    /// cannot be normalized.
    pub fn resolve(
        root_override: Option<&Path>,
        vendor_override: Option<&Path>,
    ) -> Result<Self, PathsError> {
        let project = match root_override {
            Some(root) => root.to_path_buf(),
            None => match std::env::var_os("SCAFFOLD_ROOT") {
                Some(root) => PathBuf::from(root),
                None => find_project_root()?,
            },
        };
        let project = normalize(project)?;

        let vendor = match vendor_override {
            Some(dir) => dir.to_path_buf(),
            None => match std::env::var_os("COMPOSER_VENDOR_DIR") {
                Some(dir) => PathBuf::from(dir),
                None => PathBuf::from("vendor"),
            },
        };
        // Relative vendor dirs (Composer's default form) anchor at the project.
        let vendor = if vendor.is_absolute() {
            vendor
        } else {
            project.join(vendor)
        };
        let vendor = normalize(vendor)?;

        let package = vendor.join(PACKAGE_SUBDIR);
        Ok(Self {
            project,
            vendor,
            package,
        })
    }

    /// Build a layout directly from known roots, bypassing environment lookup.
    ///
    /// The template package is located at its standard vendor-relative path.
    #[must_use]
    pub fn from_roots(project: PathBuf, vendor: PathBuf) -> Self {
        let package = vendor.join(PACKAGE_SUBDIR);
        Self {
            project,
            vendor,
            package,
        }
    }

    /// Root of the project being provisioned.
    #[must_use]
    pub fn project(&self) -> &Path {
        &self.project
    }

    /// Composer vendor directory.
    #[must_use]
    pub fn vendor(&self) -> &Path {
        &self.vendor
    }

    /// Root of the template package.
    #[must_use]
    pub fn package(&self) -> &Path {
        &self.package
    }

    /// Drupal web root, `<project>/web`.
    #[must_use]
    pub fn web_root(&self) -> PathBuf {
        self.project.join("web")
    }

    /// The project's settings entry point, `<web>/sites/default/settings.php`.
    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.web_root().join("sites/default/settings.php")
    }

    /// The project's ignore-list file, `<project>/.gitignore`.
    #[must_use]
    pub fn gitignore_file(&self) -> PathBuf {
        self.project.join(".gitignore")
    }

    /// Scaffold file origins inside the template package.
    #[must_use]
    pub fn scaffold_dir(&self) -> PathBuf {
        self.package.join("scaffold")
    }

    /// Origin directory for always-overwritten files.
    #[must_use]
    pub fn required_dir(&self) -> PathBuf {
        self.scaffold_dir().join("required")
    }

    /// Origin directory for write-once files.
    #[must_use]
    pub fn optional_dir(&self) -> PathBuf {
        self.scaffold_dir().join("optional")
    }

    /// The settings template shipped with the template package.
    #[must_use]
    pub fn settings_template(&self) -> PathBuf {
        self.package.join("fixtures/php/settings.php.txt")
    }

    /// The manifest override file shipped with the template package, if any.
    #[must_use]
    pub fn manifest_file(&self) -> PathBuf {
        self.package.join("scaffold.toml")
    }
}

/// Canonicalize `path` when it exists; pass it through untouched otherwise.
///
/// Missing roots are not an error at resolution time — the actions decide
/// what a missing file means (usually "nothing to do").
fn normalize(path: PathBuf) -> Result<PathBuf, PathsError> {
    if path.exists() {
        dunce::canonicalize(&path).map_err(|source| PathsError::Canonicalize { path, source })
    } else {
        Ok(path)
    }
}

/// Walk up from the current directory looking for a `composer.json`.
fn find_project_root() -> Result<PathBuf, PathsError> {
    let cwd = std::env::current_dir().map_err(|source| PathsError::Canonicalize {
        path: PathBuf::from("."),
        source,
    })?;
    cwd.ancestors()
        .find(|dir| dir.join("composer.json").is_file())
        .map(Path::to_path_buf)
        .ok_or(PathsError::ProjectRootNotFound)
}
