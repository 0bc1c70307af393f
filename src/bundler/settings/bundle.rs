//! Bundle configuration shared across targets.

use super::{AndroidSettings, LinuxSettings, MacOsSettings, WindowsSettings};
use std::path::PathBuf;

/// Bundle configuration for all targets.
///
/// # Configuration
///
/// ```toml
/// [bundle]
/// identifier = "com.colornote.app"
/// assets_dir = "assets"
/// icon_dir = "assets/icon"
///
/// [bundle.android]
/// requirements = ["python3", "pyqt6", "pillow", "pyyaml"]
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct BundleSettings {
    /// Bundle identifier in reverse domain notation, used for the macOS bundle.
    pub identifier: String,

    /// Data directory bundled next to the executable.
    pub assets_dir: PathBuf,

    /// Directory holding `icon.ico`, `icon.icns` and `icon.png`.
    pub icon_dir: PathBuf,

    /// freedesktop.org categories for the Linux desktop entry.
    pub category: String,

    /// Windows-specific settings.
    pub windows: WindowsSettings,

    /// macOS-specific settings.
    pub macos: MacOsSettings,

    /// Linux-specific settings.
    pub linux: LinuxSettings,

    /// Android-specific settings.
    pub android: AndroidSettings,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            identifier: "com.colornote.app".into(),
            assets_dir: PathBuf::from("assets"),
            icon_dir: PathBuf::from("assets").join("icon"),
            category: "Utility;TextEditor;".into(),
            windows: WindowsSettings::default(),
            macos: MacOsSettings::default(),
            linux: LinuxSettings::default(),
            android: AndroidSettings::default(),
        }
    }
}
