//! Windows target settings.

use std::path::PathBuf;

/// Windows executable configuration.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct WindowsSettings {
    /// Canonical output directory for the copied `.exe`.
    ///
    /// Default: `exe`
    pub output_dir: PathBuf,

    /// Write a `Launch <name>.bat` next to the copied executable.
    ///
    /// Default: true
    pub launcher: bool,
}

impl Default for WindowsSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("exe"),
            launcher: true,
        }
    }
}
