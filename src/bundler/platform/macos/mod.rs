//! macOS application bundle build.

use crate::bundler::Settings;
use std::path::PathBuf;

/// PyInstaller flags for the macOS build.
pub const FLAGS: &[&str] = &["--windowed", "--noconfirm"];

/// Flags appended after the bundled data.
pub fn extra_args(settings: &Settings) -> Vec<String> {
    vec![format!(
        "--osx-bundle-identifier={}",
        settings.bundle_settings().identifier
    )]
}

/// Directory name of the `.app` bundle.
pub fn bundle_name(settings: &Settings) -> String {
    format!("{}.app", settings.product_name())
}

/// Where PyInstaller leaves the bundle.
pub fn artifact_path(settings: &Settings) -> PathBuf {
    settings.dist_dir().join(bundle_name(settings))
}
