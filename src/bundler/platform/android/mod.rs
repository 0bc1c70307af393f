//! Android APK build with Buildozer.
//!
//! Buildozer reads `buildozer.spec`; the first time the file is created via
//! `buildozer init` it is patched with the application's values (see
//! [`spec_file`]). APKs land in `bin/`, and the newest one by creation time is
//! the build's artifact.

pub mod spec_file;

use crate::bundler::{ArtifactLocator, Settings};

pub use spec_file::{
    PatchReport, SpecFileStatus, SpecValues, ensure_spec_file, patch_spec,
};

/// Arguments for `buildozer`.
pub fn buildozer_args(settings: &Settings) -> Vec<String> {
    vec![
        "android".to_string(),
        settings.bundle_settings().android.build_mode.to_string(),
    ]
}

/// Newest `*.apk` in the Buildozer output directory.
pub fn artifact_locator(settings: &Settings) -> ArtifactLocator {
    ArtifactLocator::Newest {
        dir: settings.project_path(&settings.bundle_settings().android.artifact_dir),
        extension: "apk".to_string(),
    }
}
