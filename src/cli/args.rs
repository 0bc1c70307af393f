//! Command line argument parsing and validation.
//!
//! This module provides the CLI argument definitions using clap, and the
//! runtime configuration derived from them.

use crate::bundler::{self, BuildTarget, icon};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Packaging orchestrator for C0lorNote
#[derive(Parser, Debug)]
#[command(
    name = "colornote_bundler",
    version,
    about = "Packaging orchestrator for C0lorNote",
    long_about = "Builds C0lorNote for Windows, macOS and Linux with PyInstaller and for Android with Buildozer,
then copies each artifact to a stable output folder (exe/, macos/, linux/, apk/).

Usage:
  colornote_bundler build                 # host platform
  colornote_bundler build --windows --android
  colornote_bundler -C ../c0lornote build --all --strict
  colornote_bundler icon --sizes 256,64
  colornote_bundler clean

Exit code 0 = every requested target was built (a missing artifact is only a warning).
Exit code 2 = --strict and at least one artifact was missing."
)]
pub struct Args {
    /// Project directory holding the main script and assets
    #[arg(
        short = 'C',
        long,
        value_name = "DIR",
        env = "COLORNOTE_PROJECT_DIR",
        default_value = ".",
        global = true
    )]
    pub project_dir: PathBuf,

    /// Manifest path (defaults to <DIR>/colornote.toml when present)
    #[arg(long, value_name = "FILE", env = "COLORNOTE_BUNDLE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Print detailed progress and info-level logs (RUST_LOG takes precedence)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Package the application for one or more targets
    Build(BuildArgs),

    /// Remove dist/, build/, __pycache__/ and *.spec files
    Clean,

    /// Render the application icon set
    Icon(IconArgs),
}

/// Arguments of `build`.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct BuildArgs {
    /// Build the Windows executable
    #[arg(long)]
    pub windows: bool,

    /// Build the macOS application bundle
    #[arg(long)]
    pub macos: bool,

    /// Build the Linux executable
    #[arg(long)]
    pub linux: bool,

    /// Build the Android APK
    #[arg(long)]
    pub android: bool,

    /// Build every target
    #[arg(long)]
    pub all: bool,

    /// Clean build directories first
    #[arg(long)]
    pub clean: bool,

    /// Install a missing packaging tool with pip instead of failing
    #[arg(long)]
    pub install_missing: bool,

    /// Exit with status 2 when any artifact is missing
    #[arg(long)]
    pub strict: bool,
}

impl BuildArgs {
    /// Requested targets in canonical order.
    ///
    /// `--all` selects every target; no flag selects the host platform.
    pub fn targets(&self) -> bundler::Result<Vec<BuildTarget>> {
        if self.all {
            return Ok(BuildTarget::ALL.to_vec());
        }

        let selected: Vec<BuildTarget> = BuildTarget::ALL
            .into_iter()
            .filter(|target| match target {
                BuildTarget::Windows => self.windows,
                BuildTarget::MacOs => self.macos,
                BuildTarget::Linux => self.linux,
                BuildTarget::Android => self.android,
            })
            .collect();

        if selected.is_empty() {
            Ok(vec![BuildTarget::host_or_error()?])
        } else {
            Ok(selected)
        }
    }
}

/// Arguments of `icon`.
#[derive(clap::Args, Debug, Clone)]
pub struct IconArgs {
    /// Main icon path, relative to the project directory
    #[arg(short, long, value_name = "PATH", default_value = "assets/c0lornote_icon.png")]
    pub output: PathBuf,

    /// Main icon size in pixels
    #[arg(long, default_value_t = icon::MAIN_SIZE, value_parser = clap::value_parser!(u32).range(1..=4096))]
    pub size: u32,

    /// Additional sizes, each written as <stem>_<N>x<N>.png
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = icon::DEFAULT_SIZES.to_vec(),
        value_parser = clap::value_parser!(u32).range(1..=4096)
    )]
    pub sizes: Vec<u32>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    fn build_args(argv: &[&str]) -> BuildArgs {
        match parse(argv).command {
            Command::Build(build) => build,
            other => panic!("expected build, got {other:?}"),
        }
    }

    #[test]
    fn targets_follow_canonical_order() {
        let build = build_args(&["colornote_bundler", "build", "--android", "--windows"]);
        assert_eq!(
            build.targets().unwrap(),
            vec![BuildTarget::Windows, BuildTarget::Android]
        );
    }

    #[test]
    fn all_selects_every_target() {
        let build = build_args(&["colornote_bundler", "build", "--all", "--linux"]);
        assert_eq!(build.targets().unwrap(), BuildTarget::ALL.to_vec());
    }

    #[test]
    fn no_flag_selects_host() {
        let targets = BuildArgs::default().targets();
        match BuildTarget::host() {
            Some(host) => assert_eq!(targets.unwrap(), vec![host]),
            None => assert!(targets.is_err()),
        }
    }

    #[test]
    fn icon_sizes_accept_a_comma_list() {
        let args = parse(&["colornote_bundler", "icon", "--sizes", "256,32"]);
        let Command::Icon(icon) = args.command else {
            panic!("expected icon");
        };
        assert_eq!(icon.sizes, vec![256, 32]);
        assert_eq!(icon.size, 512);
        assert_eq!(icon.output, PathBuf::from("assets/c0lornote_icon.png"));
    }

    #[test]
    fn zero_icon_size_is_rejected() {
        assert!(Args::try_parse_from(["colornote_bundler", "icon", "--sizes", "0"]).is_err());
    }

    #[test]
    fn global_options_follow_the_subcommand() {
        let args = parse(&["colornote_bundler", "clean", "-C", "/tmp/project", "-q"]);
        assert_eq!(args.project_dir, PathBuf::from("/tmp/project"));
        assert!(args.quiet);
    }
}
