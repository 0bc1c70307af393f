//! Build targets and their packager flag tables.
//!
//! Every target is built by the same procedure in
//! [`Bundler`](crate::bundler::Bundler); this module supplies the
//! target-specific parts: the packager command line, where the artifact
//! appears, and where it is copied to.
//!
//! - `windows` - one-file PyInstaller executable plus batch launcher
//! - `macos` - `.app` bundle with bundle identifier
//! - `linux` - one-file executable plus desktop entry
//! - `android` - Buildozer APK and spec file patching

pub mod android;
pub mod linux;
pub mod macos;
pub mod windows;

use crate::bundler::{
    ArtifactLocator, Error, Result, Settings, ToolSpec,
};
use std::{fmt, path::Path, path::PathBuf, str::FromStr};

/// Platform selected for a build.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum BuildTarget {
    /// Windows `.exe` via PyInstaller
    Windows,
    /// macOS `.app` via PyInstaller
    MacOs,
    /// Linux executable via PyInstaller
    Linux,
    /// Android `.apk` via Buildozer
    Android,
}

impl BuildTarget {
    /// All targets in build order.
    pub const ALL: [BuildTarget; 4] = [
        BuildTarget::Windows,
        BuildTarget::MacOs,
        BuildTarget::Linux,
        BuildTarget::Android,
    ];

    /// Desktop target matching the host OS, if there is one.
    pub fn host() -> Option<Self> {
        if cfg!(target_os = "windows") {
            Some(Self::Windows)
        } else if cfg!(target_os = "macos") {
            Some(Self::MacOs)
        } else if cfg!(target_os = "linux") {
            Some(Self::Linux)
        } else {
            None
        }
    }

    /// Like [`BuildTarget::host`], failing on hosts without a default.
    pub fn host_or_error() -> Result<Self> {
        Self::host().ok_or_else(|| Error::UnsupportedHost(std::env::consts::OS.to_string()))
    }

    /// Lowercase identifier used on the command line and in messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Android => "android",
        }
    }

    /// Whether the target is built with the desktop packager.
    pub fn is_desktop(self) -> bool {
        !matches!(self, Self::Android)
    }

    /// Separator between source and destination in `--add-data`.
    pub fn data_separator(self) -> char {
        match self {
            Self::Windows => ';',
            _ => ':',
        }
    }

    /// Platform icon file name inside the icon directory.
    pub fn icon_file_name(self) -> Option<&'static str> {
        match self {
            Self::Windows => Some("icon.ico"),
            Self::MacOs => Some("icon.icns"),
            Self::Linux => Some("icon.png"),
            Self::Android => None,
        }
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for BuildTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Self::Windows),
            "macos" | "darwin" | "osx" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            "android" | "apk" => Ok(Self::Android),
            other => Err(Error::GenericError(format!(
                "Invalid target: {}. Valid targets: windows, macos, linux, android",
                other
            ))),
        }
    }
}

/// Where a located artifact is copied to.
#[derive(Clone, Debug)]
pub struct Destination {
    /// Canonical output directory
    pub dir: PathBuf,
    /// Stable file name; `None` keeps the artifact's own name
    pub file_name: Option<String>,
}

/// Everything the orchestrator needs to run one target's packager.
#[derive(Clone, Debug)]
pub struct PackagerPlan {
    /// Tool to verify and run
    pub tool: ToolSpec,
    /// Arguments, relative to the project directory
    pub args: Vec<String>,
    /// How to find the produced artifact
    pub artifact: ArtifactLocator,
    /// Where to copy it
    pub destination: Destination,
}

/// Tool used to build a target.
pub fn tool_for(settings: &Settings, target: BuildTarget) -> ToolSpec {
    if target.is_desktop() {
        ToolSpec::new(&settings.tools().pyinstaller, "pyinstaller")
    } else {
        ToolSpec::new(&settings.tools().buildozer, "buildozer")
    }
}

/// Builds the packager plan for a target.
///
/// `icon` is the project-relative icon path, passed only when the file exists.
pub fn packager_plan(settings: &Settings, target: BuildTarget, icon: Option<&Path>) -> PackagerPlan {
    let tool = tool_for(settings, target);
    let output_dir = settings.output_dir(target);

    match target {
        BuildTarget::Windows => PackagerPlan {
            tool,
            args: pyinstaller_args(settings, target, windows::FLAGS, icon, &[]),
            artifact: ArtifactLocator::Fixed(windows::artifact_path(settings)),
            destination: Destination {
                dir: output_dir,
                file_name: Some(windows::executable_name(settings)),
            },
        },
        BuildTarget::MacOs => PackagerPlan {
            tool,
            args: pyinstaller_args(
                settings,
                target,
                macos::FLAGS,
                icon,
                &macos::extra_args(settings),
            ),
            artifact: ArtifactLocator::Fixed(macos::artifact_path(settings)),
            destination: Destination {
                dir: output_dir,
                file_name: Some(macos::bundle_name(settings)),
            },
        },
        BuildTarget::Linux => PackagerPlan {
            tool,
            args: pyinstaller_args(settings, target, linux::FLAGS, icon, &[]),
            artifact: ArtifactLocator::Fixed(linux::artifact_path(settings)),
            destination: Destination {
                dir: output_dir,
                file_name: Some(settings.product_name().to_string()),
            },
        },
        BuildTarget::Android => PackagerPlan {
            tool,
            args: android::buildozer_args(settings),
            artifact: android::artifact_locator(settings),
            destination: Destination {
                dir: output_dir,
                file_name: None,
            },
        },
    }
}

/// Assembles a PyInstaller command line.
///
/// Order: name, target flags, icon, bundled data, target extras, main script.
fn pyinstaller_args(
    settings: &Settings,
    target: BuildTarget,
    flags: &[&str],
    icon: Option<&Path>,
    extra: &[String],
) -> Vec<String> {
    let mut args = vec![format!("--name={}", settings.product_name())];
    args.extend(flags.iter().map(|f| f.to_string()));

    if let Some(icon) = icon {
        args.push(format!("--icon={}", icon.display()));
    }

    let assets = settings.bundle_settings().assets_dir.display().to_string();
    args.push(format!(
        "--add-data={}{}{}",
        assets,
        target.data_separator(),
        assets
    ));

    args.extend(extra.iter().cloned());
    args.push(settings.main_script().display().to_string());
    args
}
