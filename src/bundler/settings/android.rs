//! Android target settings.

use std::fmt;
use std::path::PathBuf;

/// Buildozer build mode, passed as `buildozer android <mode>`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AndroidBuildMode {
    /// Debug-signed APK
    #[default]
    Debug,
    /// Release APK (unsigned unless Buildozer is configured otherwise)
    Release,
}

impl fmt::Display for AndroidBuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "debug",
            Self::Release => "release",
        })
    }
}

/// Buildozer / APK configuration.
///
/// The `package_name`, `include_exts` and `requirements` values are only
/// written into the spec file the first time it is created.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct AndroidSettings {
    /// Canonical output directory for the copied APK.
    ///
    /// Default: `apk`
    pub output_dir: PathBuf,

    /// Buildozer spec file, created by `buildozer init`.
    ///
    /// Default: `buildozer.spec`
    pub spec_file: PathBuf,

    /// Android package name (`package.name`).
    pub package_name: String,

    /// Source file extensions packaged into the APK.
    pub include_exts: Vec<String>,

    /// python-for-android requirements.
    pub requirements: Vec<String>,

    /// Directory Buildozer writes APKs to.
    ///
    /// Default: `bin`
    pub artifact_dir: PathBuf,

    /// Build mode.
    pub build_mode: AndroidBuildMode,
}

impl Default for AndroidSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("apk"),
            spec_file: PathBuf::from("buildozer.spec"),
            package_name: "colornote".into(),
            include_exts: ["py", "png", "jpg", "kv", "atlas", "json"]
                .into_iter()
                .map(String::from)
                .collect(),
            requirements: ["python3", "pyqt6", "pillow", "pyyaml"]
                .into_iter()
                .map(String::from)
                .collect(),
            artifact_dir: PathBuf::from("bin"),
            build_mode: AndroidBuildMode::Debug,
        }
    }
}
