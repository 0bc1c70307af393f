//! `clean`: remove packager build outputs from the project directory.

use crate::bundler::clean::clean_build_dirs;
use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;

/// Removes build directories and spec files.
pub async fn execute(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    let project_dir = super::project_dir(&args.project_dir)?;
    config.progress(&format!("Cleaning {}", project_dir.display()))?;

    let removed = clean_build_dirs(&project_dir).await?;
    if removed.is_empty() {
        config.success("Nothing to clean")?;
    } else {
        for path in &removed {
            config.indent(&format!("removed {}", path.display()))?;
        }
        config.success(&format!("Removed {} item(s)", removed.len()))?;
    }
    Ok(0)
}
