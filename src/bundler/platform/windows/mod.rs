//! Windows executable build.
//!
//! PyInstaller produces `dist/<name>.exe` in one-file mode. After the copy a
//! batch launcher is written next to the executable.

use crate::bundler::{
    Result, Settings,
    error::ErrorExt,
    templates::{self, LAUNCHER_TEMPLATE},
};
use std::path::{Path, PathBuf};

/// PyInstaller flags for the Windows build.
pub const FLAGS: &[&str] = &[
    "--onefile",
    "--windowed",
    "--clean",
    "--noupx",
    "--noconfirm",
];

/// File name of the produced executable.
pub fn executable_name(settings: &Settings) -> String {
    format!("{}.exe", settings.product_name())
}

/// Where PyInstaller leaves the executable.
pub fn artifact_path(settings: &Settings) -> PathBuf {
    settings.dist_dir().join(executable_name(settings))
}

/// File name of the batch launcher.
pub fn launcher_name(settings: &Settings) -> String {
    format!("Launch {}.bat", settings.product_name())
}

/// Writes the batch launcher into `output_dir`.
///
/// The launcher starts the executable from its own directory (`%~dp0`), so
/// the output folder can be moved as a whole.
pub async fn write_launcher(settings: &Settings, output_dir: &Path) -> Result<PathBuf> {
    let data = templates::data([
        ("product_name", settings.product_name().to_string()),
        ("executable", executable_name(settings)),
    ]);
    let rendered = templates::render("launcher.bat", LAUNCHER_TEMPLATE, &data)?;
    // cmd.exe expects CRLF line endings
    let content = rendered.replace("\r\n", "\n").replace('\n', "\r\n");

    let path = output_dir.join(launcher_name(settings));
    tokio::fs::write(&path, content)
        .await
        .fs_context("writing launcher script", &path)?;

    log::info!("✓ Created launcher: {}", path.display());
    Ok(path)
}
