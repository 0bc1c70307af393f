//! External tool detection and availability checking.
//!
//! A tool is available when it resolves to a file and `<tool> --version`
//! exits successfully. Missing tools fail the build with an install hint;
//! pip installation is only attempted when explicitly allowed.

use crate::bundler::{Error, Result, Settings, utils::process};
use std::path::{Path, PathBuf};

/// External command plus the pip package that provides it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolSpec {
    /// Command name or path
    pub command: String,
    /// Package passed to `pip install`
    pub pip_package: String,
}

impl ToolSpec {
    /// Creates a tool spec.
    pub fn new(command: impl Into<String>, pip_package: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            pip_package: pip_package.into(),
        }
    }

    /// Shell command that installs the tool.
    pub fn install_hint(&self, python: &str) -> String {
        format!("{} -m pip install {}", python, self.pip_package)
    }

    fn is_path(&self) -> bool {
        Path::new(&self.command).components().count() > 1
    }

    /// Resolves the command to an absolute executable path.
    ///
    /// Relative path commands are taken relative to `base`, the project
    /// directory, so the probe and the build run the same file.
    pub fn resolve(&self, base: &Path) -> std::result::Result<PathBuf, String> {
        if self.is_path() {
            let path = base.join(&self.command);
            return if path.is_file() {
                Ok(path)
            } else {
                Err(format!("{} does not exist", path.display()))
            };
        }

        which::which(&self.command).map_err(|e| format!("not found in PATH: {}", e))
    }
}

/// Resolves the tool and checks `--version`.
async fn probe(spec: &ToolSpec, base: &Path) -> std::result::Result<PathBuf, String> {
    let path = spec.resolve(base)?;
    log::debug!("Found {} at: {}", spec.command, path.display());

    match process::capture_tool(&path, &["--version".to_string()]).await {
        Ok(version) => {
            log::info!("✓ {} available: {}", spec.command, version);
            Ok(path)
        }
        Err(e) => Err(format!(
            "found at {} but --version check failed: {}",
            path.display(),
            e
        )),
    }
}

/// Ensures a tool is runnable, returning its resolved path.
///
/// With `settings.install_missing()`, a failed probe triggers
/// `<python> -m pip install <package>` followed by a second probe. Otherwise
/// the first failure is returned as [`Error::ToolMissing`].
pub async fn ensure_tool(spec: &ToolSpec, settings: &Settings) -> Result<PathBuf> {
    let python = &settings.tools().python;

    let reason = match probe(spec, settings.project_dir()).await {
        Ok(path) => return Ok(path),
        Err(reason) => reason,
    };

    if !settings.install_missing() {
        return Err(Error::ToolMissing {
            tool: spec.command.clone(),
            reason,
            install_hint: spec.install_hint(python),
        });
    }

    log::warn!("{} unavailable ({}); installing {}", spec.command, reason, spec.pip_package);
    let python_path = ToolSpec::new(python.as_str(), "python")
        .resolve(settings.project_dir())
        .map_err(|reason| Error::ToolMissing {
            tool: python.clone(),
            reason,
            install_hint: "install Python 3 and make it available on PATH".to_string(),
        })?;
    let args: Vec<String> = ["-m", "pip", "install", spec.pip_package.as_str()]
        .into_iter()
        .map(String::from)
        .collect();
    process::run_tool(&python_path, &args, settings.project_dir()).await?;

    probe(spec, settings.project_dir()).await.map_err(|reason| Error::ToolMissing {
        tool: spec.command.clone(),
        reason: format!("still unavailable after install: {}", reason),
        install_hint: spec.install_hint(python),
    })
}
