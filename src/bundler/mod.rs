//! Build orchestration for C0lorNote.
//!
//! This module wraps the external packagers (PyInstaller for desktop targets,
//! Buildozer for Android) behind one parameterized procedure:
//!
//! 1. [`Settings`] describe the project layout and tool commands
//! 2. [`BuildTarget`] selects a per-target flag table ([`platform`])
//! 3. [`Bundler`] checks the tool, prepares inputs, runs the packager
//! 4. The produced artifact is located and copied to a stable location
//!
//! # Example
//!
//! ```no_run
//! use colornote_bundler::bundler::{BuildTarget, Bundler, SettingsBuilder};
//!
//! # async fn example() -> colornote_bundler::bundler::Result<()> {
//! let settings = SettingsBuilder::new().project_dir(".").build()?;
//! let bundler = Bundler::new(settings);
//! let report = bundler.build_targets(&[BuildTarget::Windows]).await?;
//! for entry in report.entries() {
//!     println!("{}: {:?}", entry.target, entry.outcome);
//! }
//! # Ok(())
//! # }
//! ```

pub mod artifact;
mod builder;
pub mod clean;
pub mod error;
pub mod icon;
pub mod platform;
pub mod settings;
mod templates;
pub mod utils;

pub use artifact::{ArtifactLocator, TargetOutcome};
pub use builder::{BuildReport, Bundler, TargetReport, ToolSpec, ensure_tool};
pub use error::{Error, Result};
pub use platform::BuildTarget;
pub use settings::{
    AndroidBuildMode, AndroidSettings, BundleSettings, LinuxSettings, MacOsSettings,
    PackageSettings, Settings, SettingsBuilder, ToolSettings, WindowsSettings,
};
