//! `build`: package the application for the requested targets.

use crate::bundler::{BuildReport, Bundler, TargetOutcome, clean::clean_build_dirs};
use crate::cli::{Args, BuildArgs, RuntimeConfig};
use crate::error::Result;
use crate::metadata::load_settings;

/// Exit code when `--strict` is set and an artifact is missing.
pub const EXIT_ARTIFACT_MISSING: i32 = 2;

/// Runs the build and returns the exit code.
pub async fn execute(args: &Args, build: &BuildArgs, config: &RuntimeConfig) -> Result<i32> {
    let targets = build.targets()?;
    let project_dir = super::project_dir(&args.project_dir)?;
    let settings = load_settings(&project_dir, args.config.as_deref(), build.install_missing)?;

    config.verbose_println(&format!("Project directory: {}", project_dir.display()))?;

    if build.clean {
        config.progress("Cleaning build directories...")?;
        for removed in clean_build_dirs(&project_dir).await? {
            config.indent(&format!("removed {}", removed.display()))?;
        }
    }

    let bundler = Bundler::new(settings);
    let mut report = BuildReport::default();

    for target in targets {
        config.section(&format!(
            "Building {} {} for {}",
            bundler.settings().product_name(),
            bundler.settings().version_string(),
            target
        ))?;

        let outcome = bundler.build_target(target).await?;
        match &outcome {
            TargetOutcome::Copied { destination, .. } => {
                config.success(&format!("{} build ready: {}", target, destination.display()))?;
            }
            TargetOutcome::ArtifactMissing { searched } => {
                config.warn(&format!("{} build finished but no artifact at {}", target, searched))?;
            }
        }
        report.push(target, outcome);
    }

    print_summary(&report, config)?;

    if build.strict && !report.all_copied() {
        return Ok(EXIT_ARTIFACT_MISSING);
    }
    Ok(0)
}

fn print_summary(report: &BuildReport, config: &RuntimeConfig) -> Result<()> {
    config.section("Summary")?;
    for entry in report.entries() {
        match &entry.outcome {
            TargetOutcome::Copied { destination, .. } => {
                config.indent(&format!("✓ {:<8} {}", entry.target, destination.display()))?;
            }
            TargetOutcome::ArtifactMissing { .. } => {
                config.indent(&format!("✗ {:<8} artifact missing", entry.target))?;
            }
        }
    }
    Ok(())
}
