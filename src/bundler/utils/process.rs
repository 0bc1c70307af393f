//! External tool execution.
//!
//! Tools inherit stdout/stderr so their output streams straight to the user.
//! No timeout is applied; a hung packager must be interrupted externally.

use crate::bundler::error::{Error, Result};
use std::path::Path;
use tokio::process::Command;

/// Renders a command line for messages.
pub fn display_command(program: &Path, args: &[String]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        if arg.contains(' ') {
            line.push('"');
            line.push_str(arg);
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}

/// Runs a tool in `cwd` and waits for it, failing on a non-zero exit.
pub async fn run_tool(program: &Path, args: &[String], cwd: &Path) -> Result<()> {
    let command = display_command(program, args);
    log::debug!("Running `{}` in {}", command, cwd.display());

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .await
        .map_err(|error| Error::CommandFailed {
            command: command.clone(),
            error,
        })?;

    if !status.success() {
        return Err(Error::CommandStatus {
            command,
            code: status.code(),
        });
    }

    Ok(())
}

/// Runs a tool with captured output, returning trimmed stdout on success.
///
/// Used for probes such as `--version`; a non-zero exit is reported with the
/// tool's stderr.
pub async fn capture_tool(program: &Path, args: &[String]) -> Result<String> {
    let command = display_command(program, args);

    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|error| Error::CommandFailed {
            command: command.clone(),
            error,
        })?;

    if !output.status.success() {
        log::debug!(
            "`{}` failed: {}",
            command,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return Err(Error::CommandStatus {
            command,
            code: output.status.code(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
