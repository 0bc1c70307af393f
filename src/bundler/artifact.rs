//! Artifact discovery and collection.
//!
//! Desktop packagers write their result to a fixed path. Buildozer writes a
//! versioned APK name into `bin/`, so the newest file by creation time is
//! taken. Either way the artifact is copied (never moved) to the target's
//! canonical output directory.

use crate::bundler::{
    Result,
    error::{Error, ErrorExt},
    platform::Destination,
    utils::fs,
};
use std::{
    path::{Path, PathBuf},
    time::SystemTime,
};

/// How to find a packager's output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArtifactLocator {
    /// Exactly this file or bundle directory
    Fixed(PathBuf),
    /// Newest file with `extension` directly inside `dir`
    Newest {
        /// Directory to scan
        dir: PathBuf,
        /// Extension without the dot
        extension: String,
    },
}

impl ArtifactLocator {
    /// Finds the artifact, `Ok(None)` when nothing matches.
    pub async fn locate(&self) -> Result<Option<PathBuf>> {
        match self {
            Self::Fixed(path) => {
                let exists = tokio::fs::try_exists(path)
                    .await
                    .fs_context("checking artifact", path)?;
                Ok(exists.then(|| path.clone()))
            }
            Self::Newest { dir, extension } => {
                let candidates = glob_candidates(dir, extension).await?;
                newest_by_creation(&candidates).await
            }
        }
    }

    /// Human-readable description of where the artifact was looked for.
    pub fn describe(&self) -> String {
        match self {
            Self::Fixed(path) => path.display().to_string(),
            Self::Newest { dir, extension } => {
                dir.join(format!("*.{extension}")).display().to_string()
            }
        }
    }
}

/// Result of one target's build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetOutcome {
    /// Artifact found and copied
    Copied {
        /// Packager output
        artifact: PathBuf,
        /// Copy in the canonical output directory
        destination: PathBuf,
    },
    /// Packager succeeded but produced no matching artifact
    ArtifactMissing {
        /// Where it was looked for
        searched: String,
    },
}

impl TargetOutcome {
    /// Whether the artifact was collected.
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }
}

async fn glob_candidates(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let pattern = dir
        .to_str()
        .map(|d| format!("{}/*.{}", glob::Pattern::escape(d), extension))
        .ok_or_else(|| {
            Error::GenericError(format!("{} is not valid UTF-8", dir.display()))
        })?;

    tokio::task::spawn_blocking(move || -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => log::debug!("Skipping unreadable candidate: {}", e),
            }
        }
        Ok(files)
    })
    .await
    .map_err(|e| Error::GenericError(format!("Artifact scan task panicked: {}", e)))?
}

/// Creation time, falling back to modification time on filesystems without
/// birth time support.
async fn creation_time(path: &Path) -> Result<SystemTime> {
    let metadata = tokio::fs::metadata(path)
        .await
        .fs_context("reading artifact metadata", path)?;
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .fs_context("reading artifact timestamp", path)
}

/// Picks the most recently created path.
///
/// Names play no part in the choice; with equal timestamps the later
/// candidate wins.
pub async fn newest_by_creation(candidates: &[PathBuf]) -> Result<Option<PathBuf>> {
    let mut newest: Option<(SystemTime, &PathBuf)> = None;

    for path in candidates {
        let created = creation_time(path).await?;
        log::debug!("Candidate {} created {:?}", path.display(), created);
        if newest.is_none_or(|(best, _)| created >= best) {
            newest = Some((created, path));
        }
    }

    Ok(newest.map(|(_, path)| path.clone()))
}

/// Copies an artifact into its destination, returning the copy's path.
///
/// Directories (macOS bundles) are copied recursively, replacing any previous
/// copy; files overwrite.
pub async fn collect(artifact: &Path, destination: &Destination) -> Result<PathBuf> {
    let file_name = match &destination.file_name {
        Some(name) => name.clone().into(),
        None => artifact
            .file_name()
            .ok_or_else(|| {
                Error::GenericError(format!("{} has no file name", artifact.display()))
            })?
            .to_os_string(),
    };
    let target = destination.dir.join(file_name);

    if artifact.is_dir() {
        fs::copy_dir(artifact, &target).await?;
    } else {
        fs::copy_file(artifact, &target).await?;
    }

    Ok(target)
}
