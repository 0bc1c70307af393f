//! `icon`: render the application icon set.

use crate::bundler::icon::generate_icon_set;
use crate::cli::{Args, IconArgs, RuntimeConfig};
use crate::error::Result;

/// Writes the main icon and every requested size.
pub async fn execute(args: &Args, icon: &IconArgs, config: &RuntimeConfig) -> Result<i32> {
    let project_dir = super::project_dir(&args.project_dir)?;
    let main = project_dir.join(&icon.output);

    config.progress(&format!("Rendering icons to {}", main.display()))?;
    let set = generate_icon_set(&main, icon.size, &icon.sizes).await?;

    config.indent(&format!("{0}x{0}  {1}", icon.size, set.main.display()))?;
    for (size, path) in &set.sized {
        config.indent(&format!("{0}x{0}  {1}", size, path.display()))?;
    }
    config.success("Icon generated successfully")?;
    Ok(0)
}
