//! Error types for bundling operations.
//!
//! Every failure that aborts a build is an [`Error`]. A missing artifact after a
//! successful packager run is not an error; it is reported as a
//! [`TargetOutcome`](crate::bundler::TargetOutcome).

use std::{
    io,
    path::{Path, PathBuf},
};

/// Result alias for bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while preparing, running or collecting a build.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Free-form error message.
    #[error("{0}")]
    GenericError(String),

    /// Filesystem operation failed on a specific path.
    #[error("{context} ({}): {error}", path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        error: io::Error,
    },

    /// An external tool could not be started.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Command line that was attempted
        command: String,
        /// Spawn error
        #[source]
        error: io::Error,
    },

    /// An external tool ran but exited unsuccessfully.
    #[error("`{command}` exited with status {}", code.map_or_else(|| "<signal>".to_string(), |c| c.to_string()))]
    CommandStatus {
        /// Command line that was run
        command: String,
        /// Exit code, `None` when killed by a signal
        code: Option<i32>,
    },

    /// A required packaging tool is not installed or not runnable.
    #[error("required tool `{tool}` is not available: {reason}")]
    ToolMissing {
        /// Tool command name or path
        tool: String,
        /// Why the probe failed
        reason: String,
        /// Command that installs the tool
        install_hint: String,
    },

    /// A project input (main script, spec template) is missing.
    #[error("missing {what}: {}", path.display())]
    MissingInput {
        /// Kind of input
        what: &'static str,
        /// Expected location
        path: PathBuf,
    },

    /// No target was requested and the host platform has no default.
    #[error("no build target selected and host platform `{0}` has no default target")]
    UnsupportedHost(String),

    /// Icon rendering or encoding failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Template registration failed.
    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Template rendering failed.
    #[error("template render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Invalid glob pattern.
    #[error("glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// Directory traversal failed.
    #[error("directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Path prefix stripping failed.
    #[error("path prefix error: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),
}

/// Attach a filesystem context and path to IO results.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::Fs`].
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}
