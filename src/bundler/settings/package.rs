//! Application metadata.

use std::path::PathBuf;

/// Application metadata shared by every build target.
///
/// # Examples
///
/// ```
/// use colornote_bundler::bundler::PackageSettings;
///
/// let settings = PackageSettings::default();
/// assert_eq!(settings.product_name, "C0lorNote");
/// assert_eq!(settings.main_script.to_str(), Some("modern_colornote.py"));
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct PackageSettings {
    /// Product name, used as the executable name and window title.
    pub product_name: String,

    /// Application version.
    pub version: String,

    /// One-line description, written to the Linux desktop entry.
    pub description: String,

    /// Entry script handed to the packager.
    pub main_script: PathBuf,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            product_name: "C0lorNote".into(),
            version: "1.0.0".into(),
            description: "Colorful note-taking".into(),
            main_script: PathBuf::from("modern_colornote.py"),
        }
    }
}
