//! Run configuration: manifests, directory list, and settings injection
//! parameters.
//!
//! The built-in layout matches what the template package ships. A package may
//! override the file lists and directory names with a `scaffold.toml` at its
//! root; absent sections fall back to the defaults. Configuration is always
//! an explicit value handed to the actions, so tests can substitute fixture
//! manifests without touching a real package layout.

pub mod manifest;

use std::path::PathBuf;

use serde::Deserialize;

pub use manifest::{Manifest, ManifestEntry};

use crate::error::ConfigError;
use crate::paths::Paths;

/// Idempotency sentinel expected inside an already-provisioned settings file.
pub const SETTINGS_MARKER: &str = "START SHEPHERD CONFIG";

/// Token in the settings template replaced by the generated hash salt.
pub const SALT_PLACEHOLDER: &str = "<<<DEFAULT_HASH_SALT>>>";

/// Files replaced from the template package on every run.
const REQUIRED_FILES: &[&str] = &["dsh", "RoboFileBase.php"];

/// Files copied from the template package only when absent.
const OPTIONAL_FILES: &[&str] = &[
    "docker-compose.linux.yml",
    "docker-compose.osx.yml",
    "dsh_bash",
    "phpcs.xml",
    "RoboFile.php",
    "docker/Dockerfile",
    "docker/xdebug.ini",
    "docker/php_custom.ini",
];

/// Directories created under the web root.
const WEB_DIRECTORIES: &[&str] = &["modules", "profiles", "themes"];

/// Directories created under the project root.
const PROJECT_DIRECTORIES: &[&str] = &["config-install", "config-export"];

/// Parameters for the settings injection action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsConfig {
    /// File the generated block is appended to.
    pub target: PathBuf,
    /// Template file containing the salt placeholder.
    pub template: PathBuf,
    /// Marker substring whose presence suppresses re-injection.
    pub marker: String,
    /// Placeholder token substituted with the generated salt.
    pub placeholder: String,
}

/// Everything the four actions consume.
#[derive(Debug, Clone)]
pub struct Config {
    /// Files replaced on every run.
    pub required: Manifest,
    /// Files written only when absent.
    pub optional: Manifest,
    /// Directories guaranteed to exist after a run, in creation order.
    pub directories: Vec<PathBuf>,
    /// Settings injection parameters.
    pub settings: SettingsConfig,
}

/// `scaffold.toml` shape. Every section is optional.
#[derive(Debug, Default, Deserialize)]
struct RawLayout {
    required: Option<RawFileList>,
    optional: Option<RawFileList>,
    directories: Option<RawDirectories>,
}

#[derive(Debug, Deserialize)]
struct RawFileList {
    files: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawDirectories {
    web: Option<Vec<String>>,
    project: Option<Vec<String>>,
}

impl Config {
    /// Load the configuration for `paths`, honouring a `scaffold.toml`
    /// override in the template package when present.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the override file exists but cannot be
    /// read or parsed, or when a manifest lists a filename twice.
    pub fn load(paths: &Paths) -> Result<Self, ConfigError> {
        let manifest_file = paths.manifest_file();
        let raw = if manifest_file.is_file() {
            let content =
                std::fs::read_to_string(&manifest_file).map_err(|source| ConfigError::Io {
                    path: manifest_file.clone(),
                    source,
                })?;
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: manifest_file,
                source,
            })?
        } else {
            RawLayout::default()
        };

        Self::from_raw(paths, raw)
    }

    /// Build the built-in default layout for `paths`.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches [`Config::load`] so
    /// callers treat both construction paths uniformly.
    pub fn default_layout(paths: &Paths) -> Result<Self, ConfigError> {
        Self::from_raw(paths, RawLayout::default())
    }

    fn from_raw(paths: &Paths, raw: RawLayout) -> Result<Self, ConfigError> {
        let required_files = raw
            .required
            .map_or_else(default_required, |list| list.files);
        let optional_files = raw
            .optional
            .map_or_else(default_optional, |list| list.files);
        let (web_dirs, project_dirs) = raw.directories.map_or_else(
            || (default_web_dirs(), default_project_dirs()),
            |dirs| {
                (
                    dirs.web.unwrap_or_else(default_web_dirs),
                    dirs.project.unwrap_or_else(default_project_dirs),
                )
            },
        );

        let required = Manifest::new(&paths.required_dir(), required_files, true)?;
        let optional = Manifest::new(&paths.optional_dir(), optional_files, false)?;

        let web_root = paths.web_root();
        let directories = web_dirs
            .iter()
            .map(|d| web_root.join(d))
            .chain(project_dirs.iter().map(|d| paths.project().join(d)))
            .collect();

        Ok(Self {
            required,
            optional,
            directories,
            settings: SettingsConfig {
                target: paths.settings_file(),
                template: paths.settings_template(),
                marker: SETTINGS_MARKER.to_string(),
                placeholder: SALT_PLACEHOLDER.to_string(),
            },
        })
    }
}

fn default_required() -> Vec<String> {
    REQUIRED_FILES.iter().map(ToString::to_string).collect()
}

fn default_optional() -> Vec<String> {
    OPTIONAL_FILES.iter().map(ToString::to_string).collect()
}

fn default_web_dirs() -> Vec<String> {
    WEB_DIRECTORIES.iter().map(ToString::to_string).collect()
}

fn default_project_dirs() -> Vec<String> {
    PROJECT_DIRECTORIES.iter().map(ToString::to_string).collect()
}
