//! Project manifest loading.
//!
//! The optional `colornote.toml` in the project directory overrides the
//! built-in defaults; every key is optional.

use crate::bundler::{BundleSettings, PackageSettings, Settings, SettingsBuilder, ToolSettings};
use crate::error::{BundlerError, CliError, Result};
use std::path::{Path, PathBuf};

/// Manifest file name looked up in the project directory.
pub const MANIFEST_FILE: &str = "colornote.toml";

/// Parsed `colornote.toml`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// `[package]` section
    pub package: PackageSettings,

    /// `[bundle]` section and its per-target tables
    pub bundle: BundleSettings,

    /// `[tools]` section
    pub tools: ToolSettings,
}

/// Parses manifest text.
pub fn parse_manifest(content: &str) -> Result<Manifest> {
    Ok(toml::from_str(content)?)
}

/// Reads and parses a manifest file.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "read_manifest".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;
    parse_manifest(&content)
}

/// Builds [`Settings`] for a project.
///
/// An explicit `config` path must exist. Without one, `<project_dir>/colornote.toml`
/// is used when present and defaults otherwise.
pub fn load_settings(
    project_dir: &Path,
    config: Option<&Path>,
    install_missing: bool,
) -> Result<Settings> {
    if !project_dir.is_dir() {
        return Err(BundlerError::Cli(CliError::InvalidArguments {
            reason: format!("Project directory does not exist: {}", project_dir.display()),
        }));
    }

    let manifest = match manifest_path(project_dir, config)? {
        Some(path) => {
            log::info!("Using manifest {}", path.display());
            load_manifest(&path)?
        }
        None => {
            log::debug!(
                "No {} in {}; using defaults",
                MANIFEST_FILE,
                project_dir.display()
            );
            Manifest::default()
        }
    };

    Ok(SettingsBuilder::new()
        .project_dir(project_dir)
        .package_settings(manifest.package)
        .bundle_settings(manifest.bundle)
        .tools(manifest.tools)
        .install_missing(install_missing)
        .build()?)
}

fn manifest_path(project_dir: &Path, config: Option<&Path>) -> Result<Option<PathBuf>> {
    match config {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(BundlerError::Cli(CliError::InvalidArguments {
            reason: format!("Manifest not found: {}", path.display()),
        })),
        None => {
            let default = project_dir.join(MANIFEST_FILE);
            Ok(default.is_file().then_some(default))
        }
    }
}
