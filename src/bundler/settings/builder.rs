//! Builder for constructing Settings.

use super::{BundleSettings, PackageSettings, Settings, ToolSettings};
use crate::bundler::error::ErrorExt;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Unset sections fall back to their defaults, which describe the stock
/// C0lorNote project layout.
///
/// # Examples
///
/// ```
/// use colornote_bundler::bundler::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> colornote_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_dir(".")
///     .package_settings(PackageSettings {
///         product_name: "NoteDemo".into(),
///         ..Default::default()
///     })
///     .install_missing(true)
///     .build()?;
/// assert_eq!(settings.product_name(), "NoteDemo");
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_dir: Option<PathBuf>,
    package_settings: PackageSettings,
    bundle_settings: BundleSettings,
    tools: ToolSettings,
    install_missing: bool,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project directory.
    ///
    /// Default: the current directory
    pub fn project_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets application metadata.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = settings;
        self
    }

    /// Sets bundle configuration.
    pub fn bundle_settings(mut self, settings: BundleSettings) -> Self {
        self.bundle_settings = settings;
        self
    }

    /// Sets tool commands.
    pub fn tools(mut self, tools: ToolSettings) -> Self {
        self.tools = tools;
        self
    }

    /// Allows installing missing tools with pip.
    ///
    /// Default: false
    pub fn install_missing(mut self, install: bool) -> Self {
        self.install_missing = install;
        self
    }

    /// Builds the settings, absolutizing the project directory.
    ///
    /// # Errors
    ///
    /// Fails if the current directory cannot be determined.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        let project_dir = self.project_dir.unwrap_or_else(|| PathBuf::from("."));
        let project_dir = project_dir
            .absolutize()
            .fs_context("resolving project directory", &project_dir)?
            .into_owned();

        Ok(Settings::new(
            self.package_settings,
            self.bundle_settings,
            self.tools,
            project_dir,
            self.install_missing,
        ))
    }
}
