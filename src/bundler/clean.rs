//! Removal of packager build directories and generated spec files.

use crate::bundler::{
    Error, Result,
    utils::fs,
};
use std::path::{Path, PathBuf};

/// Directories left behind by PyInstaller and Python.
pub const BUILD_DIRS: [&str; 3] = ["dist", "build", "__pycache__"];

/// Removes [`BUILD_DIRS`] and every `*.spec` file directly in `project_dir`.
///
/// This includes `buildozer.spec`, so the next Android build re-creates and
/// re-patches it. Returns the paths that were removed.
pub async fn clean_build_dirs(project_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for dir in BUILD_DIRS {
        let path = project_dir.join(dir);
        if fs::remove_dir_all(&path).await? {
            log::debug!("Removed {}", path.display());
            removed.push(path);
        }
    }

    let pattern = project_dir
        .to_str()
        .map(|d| format!("{}/*.spec", glob::Pattern::escape(d)))
        .ok_or_else(|| {
            Error::GenericError(format!("{} is not valid UTF-8", project_dir.display()))
        })?;

    let spec_files: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();

    for path in spec_files {
        if fs::remove_file(&path).await? {
            log::debug!("Removed {}", path.display());
            removed.push(path);
        }
    }

    log::info!("✓ Build directories cleaned ({} entries removed)", removed.len());
    Ok(removed)
}
