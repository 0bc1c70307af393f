//! Linux target settings.

use std::path::PathBuf;

/// Linux executable configuration.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct LinuxSettings {
    /// Canonical output directory for the copied executable.
    ///
    /// Default: `linux`
    pub output_dir: PathBuf,

    /// Write a freedesktop.org `.desktop` entry next to the executable.
    ///
    /// Default: true
    pub desktop_entry: bool,

    /// Install prefix referenced by the desktop entry's `Exec` and `Icon` keys.
    ///
    /// Default: `/usr/local`
    pub install_prefix: String,
}

impl Default for LinuxSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("linux"),
            desktop_entry: true,
            install_prefix: "/usr/local".into(),
        }
    }
}
