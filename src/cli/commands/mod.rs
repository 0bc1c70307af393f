//! Command execution functions for bundler operations.

pub mod build;
pub mod clean;
pub mod icon;

use crate::error::{BundlerError, CliError, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Absolute project directory, which must exist.
pub(crate) fn project_dir(dir: &Path) -> Result<PathBuf> {
    let absolute = dir.absolutize().map(|p| p.into_owned())?;
    if !absolute.is_dir() {
        return Err(BundlerError::Cli(CliError::InvalidArguments {
            reason: format!("Project directory does not exist: {}", absolute.display()),
        }));
    }
    Ok(absolute)
}
