//! Core Settings struct and implementations.

use super::{BundleSettings, PackageSettings, ToolSettings};
use crate::bundler::BuildTarget;
use std::path::{Path, PathBuf};

/// Main settings for build orchestration.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder), usually from a
/// project manifest loaded by [`crate::metadata::load_settings`].
///
/// # Examples
///
/// ```
/// use colornote_bundler::bundler::{BuildTarget, SettingsBuilder};
///
/// # fn example() -> colornote_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new().project_dir("/work/colornote").build()?;
/// assert_eq!(
///     settings.output_dir(BuildTarget::Windows),
///     std::path::Path::new("/work/colornote/exe")
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    package: PackageSettings,
    bundle_settings: BundleSettings,
    tools: ToolSettings,

    /// Absolute project directory; external tools run with it as cwd.
    project_dir: PathBuf,

    /// Install missing tools with pip instead of failing.
    install_missing: bool,
}

impl Settings {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the package description.
    pub fn description(&self) -> &str {
        &self.package.description
    }

    /// Returns the main script, relative to the project directory.
    pub fn main_script(&self) -> &Path {
        &self.package.main_script
    }

    /// Returns the project directory.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Resolves a project-relative path.
    pub fn project_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.project_dir.join(relative)
    }

    /// Returns the bundle settings.
    pub fn bundle_settings(&self) -> &BundleSettings {
        &self.bundle_settings
    }

    /// Returns the tool commands.
    pub fn tools(&self) -> &ToolSettings {
        &self.tools
    }

    /// Whether missing tools may be installed with pip.
    pub fn install_missing(&self) -> bool {
        self.install_missing
    }

    /// Absolute canonical output directory for a target.
    pub fn output_dir(&self, target: BuildTarget) -> PathBuf {
        let bundle = &self.bundle_settings;
        let relative = match target {
            BuildTarget::Windows => &bundle.windows.output_dir,
            BuildTarget::MacOs => &bundle.macos.output_dir,
            BuildTarget::Linux => &bundle.linux.output_dir,
            BuildTarget::Android => &bundle.android.output_dir,
        };
        self.project_path(relative)
    }

    /// Directory the desktop packager writes its results to.
    pub fn dist_dir(&self) -> PathBuf {
        self.project_path("dist")
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        bundle_settings: BundleSettings,
        tools: ToolSettings,
        project_dir: PathBuf,
        install_missing: bool,
    ) -> Self {
        Self {
            package,
            bundle_settings,
            tools,
            project_dir,
            install_missing,
        }
    }
}
