//! Main build orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator. Every target goes through
//! the same steps; the differences live in the flag tables of
//! [`crate::bundler::platform`].

use crate::bundler::{
    BuildTarget, Error, Result, Settings, TargetOutcome, artifact,
    icon::{self, PlatformIcon},
    platform::{self, android},
    utils::{fs, process},
};
use std::path::PathBuf;

use super::tool_detection::ensure_tool;

/// Outcome of one target within a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetReport {
    /// Target that was built
    pub target: BuildTarget,
    /// What happened to its artifact
    pub outcome: TargetOutcome,
}

/// Ordered outcomes of a multi-target run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    entries: Vec<TargetReport>,
}

impl BuildReport {
    /// Records a target outcome.
    pub fn push(&mut self, target: BuildTarget, outcome: TargetOutcome) {
        self.entries.push(TargetReport { target, outcome });
    }

    /// Outcomes in build order.
    pub fn entries(&self) -> &[TargetReport] {
        &self.entries
    }

    /// Targets whose artifact was not found.
    pub fn missing(&self) -> impl Iterator<Item = BuildTarget> + '_ {
        self.entries
            .iter()
            .filter(|e| !e.outcome.is_copied())
            .map(|e| e.target)
    }

    /// Whether every target's artifact was collected.
    pub fn all_copied(&self) -> bool {
        self.entries.iter().all(|e| e.outcome.is_copied())
    }
}

/// Main build orchestrator.
///
/// Runs targets strictly one after another. A hard failure (tool missing,
/// packager exit status, filesystem error) aborts with an [`Error`]; output
/// directories created up to that point are left in place. A missing artifact
/// is not a failure and is reported as [`TargetOutcome::ArtifactMissing`].
///
/// # Examples
///
/// ```no_run
/// use colornote_bundler::bundler::{BuildTarget, Bundler, Settings};
///
/// # async fn example(settings: Settings) -> colornote_bundler::bundler::Result<()> {
/// let bundler = Bundler::new(settings);
/// let report = bundler.build_targets(&BuildTarget::ALL).await?;
/// if !report.all_copied() {
///     eprintln!("some artifacts were not produced");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Builds each target in order.
    pub async fn build_targets(&self, targets: &[BuildTarget]) -> Result<BuildReport> {
        let mut report = BuildReport::default();
        for &target in targets {
            let outcome = self.build_target(target).await?;
            report.push(target, outcome);
        }
        Ok(report)
    }

    /// Builds a single target.
    ///
    /// # Process
    ///
    /// 1. Create the output directory (idempotent) and check project inputs
    /// 2. Verify the packaging tool
    /// 3. Prepare the platform icon or the Buildozer spec file
    /// 4. Run the packager
    /// 5. Locate the artifact and copy it to the output directory
    /// 6. Write the launcher (Windows) or desktop entry (Linux)
    pub async fn build_target(&self, target: BuildTarget) -> Result<TargetOutcome> {
        let settings = &self.settings;
        log::info!("Building {} for {}", settings.product_name(), target);

        let output_dir = settings.output_dir(target);
        fs::create_dir_all(&output_dir).await?;
        self.prepare_inputs().await?;

        let tool = platform::tool_for(settings, target);
        let tool_path = ensure_tool(&tool, settings).await?;

        let icon = if target.is_desktop() {
            self.prepare_icon(target).await?
        } else {
            android::ensure_spec_file(settings, &tool_path).await?;
            None
        };

        let plan = platform::packager_plan(settings, target, icon.as_deref());
        process::run_tool(&tool_path, &plan.args, settings.project_dir()).await?;

        let Some(found) = plan.artifact.locate().await? else {
            let searched = plan.artifact.describe();
            log::warn!("✗ No {} artifact found at {}", target, searched);
            return Ok(TargetOutcome::ArtifactMissing { searched });
        };

        let destination = artifact::collect(&found, &plan.destination).await?;
        log::info!("✓ Copied {} to {}", found.display(), destination.display());

        match target {
            BuildTarget::Windows if settings.bundle_settings().windows.launcher => {
                platform::windows::write_launcher(settings, &output_dir).await?;
            }
            BuildTarget::Linux if settings.bundle_settings().linux.desktop_entry => {
                platform::linux::write_desktop_entry(settings, &output_dir).await?;
            }
            _ => {}
        }

        Ok(TargetOutcome::Copied {
            artifact: found,
            destination,
        })
    }

    /// Checks the main script and creates the assets directory if absent.
    async fn prepare_inputs(&self) -> Result<()> {
        let settings = &self.settings;

        let main_script = settings.project_path(settings.main_script());
        if !main_script.is_file() {
            return Err(Error::MissingInput {
                what: "main script",
                path: main_script,
            });
        }

        let assets = settings.project_path(&settings.bundle_settings().assets_dir);
        fs::create_dir_all(&assets).await
    }

    /// Returns the project-relative icon path to pass to the packager.
    ///
    /// `.ico` and `.png` icons are rendered when missing; there is no `.icns`
    /// encoder, so macOS builds without an icon unless one is provided.
    async fn prepare_icon(&self, target: BuildTarget) -> Result<Option<PathBuf>> {
        let Some(file_name) = target.icon_file_name() else {
            return Ok(None);
        };

        let relative = self.settings.bundle_settings().icon_dir.join(file_name);
        let absolute = self.settings.project_path(&relative);
        if absolute.is_file() {
            return Ok(Some(relative));
        }

        match PlatformIcon::for_file_name(file_name) {
            Some(kind) => {
                log::info!("Creating application icon at {}", absolute.display());
                icon::write_platform_icon(&absolute, kind).await?;
                Ok(Some(relative))
            }
            None => {
                log::warn!(
                    "{} not found; building {} without an icon",
                    absolute.display(),
                    target
                );
                Ok(None)
            }
        }
    }
}
