//! macOS target settings.

use std::path::PathBuf;

/// macOS `.app` bundle configuration.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct MacOsSettings {
    /// Canonical output directory for the copied `.app` bundle.
    ///
    /// Default: `macos`
    pub output_dir: PathBuf,
}

impl Default for MacOsSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("macos"),
        }
    }
}
