//! Buildozer spec file creation and one-time patching.
//!
//! `buildozer init` writes a default template. Four placeholder lines of that
//! template are replaced with the application's values, each at most once.
//! The patch runs only when the file is created; an existing file is never
//! touched again, so later settings changes require deleting the file (the
//! `clean` command does so).

use crate::bundler::{
    Error, Result, Settings,
    error::ErrorExt,
    utils::process,
};
use std::path::Path;

/// Default-template line holding the title.
pub const TITLE_PLACEHOLDER: &str = "title = My Application";
/// Default-template line holding the package name.
pub const PACKAGE_NAME_PLACEHOLDER: &str = "package.name = myapp";
/// Default-template line holding the included source extensions.
pub const INCLUDE_EXTS_PLACEHOLDER: &str = "source.include_exts = py,png,jpg,kv,atlas";
/// Default-template prefix of the requirements line.
pub const REQUIREMENTS_PLACEHOLDER: &str = "requirements = python3";

/// Values written into a fresh spec file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecValues {
    /// Application title
    pub title: String,
    /// Android package name
    pub package_name: String,
    /// Source extensions packaged into the APK
    pub include_exts: Vec<String>,
    /// python-for-android requirements
    pub requirements: Vec<String>,
}

impl SpecValues {
    /// Values taken from the project settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let android = &settings.bundle_settings().android;
        Self {
            title: settings.product_name().to_string(),
            package_name: android.package_name.clone(),
            include_exts: android.include_exts.clone(),
            requirements: android.requirements.clone(),
        }
    }

    fn replacements(&self) -> [(&'static str, String); 4] {
        [
            (TITLE_PLACEHOLDER, format!("title = {}", self.title)),
            (
                PACKAGE_NAME_PLACEHOLDER,
                format!("package.name = {}", self.package_name),
            ),
            (
                INCLUDE_EXTS_PLACEHOLDER,
                format!("source.include_exts = {}", self.include_exts.join(",")),
            ),
            (
                REQUIREMENTS_PLACEHOLDER,
                format!("requirements = {}", self.requirements.join(",")),
            ),
        ]
    }
}

/// Result of patching spec text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatchReport {
    /// Placeholders that were found and replaced
    pub applied: Vec<&'static str>,
    /// Placeholders absent from the template
    pub missing: Vec<&'static str>,
}

/// State of the spec file after [`ensure_spec_file`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpecFileStatus {
    /// File was created by `buildozer init` and patched
    Created(PatchReport),
    /// File already existed and was left as is
    Existing,
}

/// Replaces the first occurrence of each placeholder.
///
/// All other content, including later duplicates of a placeholder, is left
/// byte-for-byte unchanged.
pub fn patch_spec(content: &str, values: &SpecValues) -> (String, PatchReport) {
    let mut patched = content.to_string();
    let mut report = PatchReport::default();

    for (placeholder, replacement) in values.replacements() {
        if patched.contains(placeholder) {
            patched = patched.replacen(placeholder, &replacement, 1);
            report.applied.push(placeholder);
        } else {
            report.missing.push(placeholder);
        }
    }

    (patched, report)
}

/// Ensures the spec file exists, creating and patching it on first use.
///
/// `buildozer` is the resolved tool path; it is only run when the file is
/// absent.
pub async fn ensure_spec_file(settings: &Settings, buildozer: &Path) -> Result<SpecFileStatus> {
    let spec_path = settings.project_path(&settings.bundle_settings().android.spec_file);

    if tokio::fs::try_exists(&spec_path)
        .await
        .fs_context("checking spec file", &spec_path)?
    {
        log::warn!(
            "Reusing existing {}; its title, package name and requirements are not re-applied",
            spec_path.display()
        );
        return Ok(SpecFileStatus::Existing);
    }

    log::info!("Initializing {}", spec_path.display());
    process::run_tool(buildozer, &["init".to_string()], settings.project_dir()).await?;

    let content = match tokio::fs::read_to_string(&spec_path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::MissingInput {
                what: "spec file after `buildozer init`",
                path: spec_path,
            });
        }
        Err(e) => return Err(e).fs_context("reading spec file", &spec_path),
    };

    let (patched, report) = patch_spec(&content, &SpecValues::from_settings(settings));
    for placeholder in &report.missing {
        log::warn!("Placeholder `{}` not found in {}", placeholder, spec_path.display());
    }

    tokio::fs::write(&spec_path, patched)
        .await
        .fs_context("writing spec file", &spec_path)?;

    log::info!(
        "✓ Patched {} ({} of 4 placeholders)",
        spec_path.display(),
        report.applied.len()
    );
    Ok(SpecFileStatus::Created(report))
}
