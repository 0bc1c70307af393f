//! Command line interface for the C0lorNote bundler.
//!
//! This module provides argument parsing, command dispatch and user feedback.

mod args;
pub mod commands;
mod output;

pub use args::{Args, BuildArgs, Command, IconArgs, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{BundlerError, Result};

/// Exit code for a failed command.
pub const EXIT_FAILURE: i32 = 1;

/// Main CLI entry point
///
/// Returns the process exit code on completion. Command failures are
/// reported through the [`OutputManager`] and turned into [`EXIT_FAILURE`].
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    init_logging(args.verbose);
    let config = RuntimeConfig::from(&args);

    let result = match &args.command {
        Command::Build(build) => commands::build::execute(&args, build, &config).await,
        Command::Clean => commands::clean::execute(&args, &config).await,
        Command::Icon(icon) => commands::icon::execute(&args, icon, &config).await,
    };

    match result {
        Ok(code) => Ok(code),
        Err(e) => {
            report_error(config.output(), &e)?;
            Ok(EXIT_FAILURE)
        }
    }
}

/// Default log filter when `RUST_LOG` is unset.
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose { "info" } else { "error" }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or(default_log_filter(verbose));
    // A logger installed by an embedding program wins.
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Prints an error followed by its recovery suggestions.
pub fn report_error(output: &OutputManager, error: &BundlerError) -> std::io::Result<()> {
    output.error(&format!("Error: {}", error))?;
    for suggestion in error.recovery_suggestions() {
        output.hint(&suggestion)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_default_log_level() {
        assert_eq!(default_log_filter(true), "info");
        assert_eq!(default_log_filter(false), "error");
    }
}
