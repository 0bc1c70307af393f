//! Linux executable build.
//!
//! PyInstaller produces a single `dist/<name>` executable. A freedesktop.org
//! desktop entry pointing at the install prefix is written next to the copy.

use crate::bundler::{
    Result, Settings,
    error::ErrorExt,
    templates::{self, DESKTOP_ENTRY_TEMPLATE},
};
use std::path::{Path, PathBuf};

/// PyInstaller flags for the Linux build.
pub const FLAGS: &[&str] = &["--onefile", "--windowed", "--noconfirm"];

/// Where PyInstaller leaves the executable.
pub fn artifact_path(settings: &Settings) -> PathBuf {
    settings.dist_dir().join(settings.product_name())
}

/// Writes `<name>.desktop` into `output_dir`.
pub async fn write_desktop_entry(settings: &Settings, output_dir: &Path) -> Result<PathBuf> {
    let linux = &settings.bundle_settings().linux;
    let prefix = linux.install_prefix.trim_end_matches('/');
    let name = settings.product_name();

    let data = templates::data([
        ("product_name", name.to_string()),
        ("comment", settings.description().to_string()),
        ("exec", format!("{prefix}/bin/{name}")),
        ("icon", format!("{prefix}/share/icons/{name}.png")),
        ("categories", settings.bundle_settings().category.clone()),
    ]);
    let content = templates::render("entry.desktop", DESKTOP_ENTRY_TEMPLATE, &data)?;

    let path = output_dir.join(format!("{name}.desktop"));
    tokio::fs::write(&path, content)
        .await
        .fs_context("writing desktop entry", &path)?;

    log::info!("✓ Created desktop entry: {}", path.display());
    Ok(path)
}
