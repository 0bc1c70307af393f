//! Configuration structures for build orchestration.
//!
//! Settings are layered: built-in defaults matching the C0lorNote project
//! layout, then the optional `colornote.toml` manifest, then CLI overrides.
//! Every path held here is relative to the project directory until resolved
//! through [`Settings::project_path`].

mod android;
mod builder;
mod bundle;
mod core;
mod linux;
mod macos;
mod package;
mod tools;
mod windows;

pub use android::{AndroidBuildMode, AndroidSettings};
pub use builder::SettingsBuilder;
pub use bundle::BundleSettings;
pub use self::core::Settings;
pub use linux::LinuxSettings;
pub use macos::MacOsSettings;
pub use package::PackageSettings;
pub use tools::ToolSettings;
pub use windows::WindowsSettings;
