//! C0lorNote packaging orchestrator.
//!
//! This library drives the external packagers that turn the C0lorNote Python
//! application into distributable builds:
//! - Windows executables and macOS/Linux builds via PyInstaller
//! - Android APKs via Buildozer
//! - the procedurally drawn application icon
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
