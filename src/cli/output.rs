//! Colored terminal output.

use cyrup_termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::io::{self, IsTerminal, Write};

/// Writes user-facing status lines.
///
/// Quiet mode drops everything except errors; verbose lines need verbose mode.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
    stdout_choice: ColorChoice,
    stderr_choice: ColorChoice,
}

impl OutputManager {
    /// Create an output manager; colors are disabled when not writing to a terminal.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            stdout_choice: choice(io::stdout().is_terminal()),
            stderr_choice: choice(io::stderr().is_terminal()),
        }
    }

    /// Detail shown only with `--verbose`
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.verbose && !self.quiet {
            self.line(None, false, "  ", message)?;
        }
        Ok(())
    }

    /// Step in progress
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.line(Some(Color::Cyan), false, "→", message)
    }

    /// Completed step
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.line(Some(Color::Green), true, "✓", message)
    }

    /// Non-fatal problem
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.line(Some(Color::Yellow), true, "⚠", message)
    }

    /// Fatal problem, always printed to stderr
    pub fn error(&self, message: &str) -> io::Result<()> {
        let mut stream = StandardStream::stderr(self.stderr_choice);
        stream.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(stream, "✗")?;
        stream.reset()?;
        writeln!(stream, " {}", message)
    }

    /// Follow-up hint for an error, always printed to stderr
    pub fn hint(&self, message: &str) -> io::Result<()> {
        let mut stream = StandardStream::stderr(self.stderr_choice);
        writeln!(stream, "  • {}", message)
    }

    /// Section header
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stream = StandardStream::stdout(self.stdout_choice);
        writeln!(stream)?;
        stream.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        writeln!(stream, "{}", title)?;
        stream.reset()
    }

    /// Indented detail line
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stream = StandardStream::stdout(self.stdout_choice);
        writeln!(stream, "   {}", message)
    }

    fn line(&self, color: Option<Color>, bold: bool, marker: &str, message: &str) -> io::Result<()> {
        let mut stream = StandardStream::stdout(self.stdout_choice);
        stream.set_color(ColorSpec::new().set_fg(color).set_bold(bold))?;
        write!(stream, "{}", marker)?;
        stream.reset()?;
        writeln!(stream, " {}", message)
    }
}

fn choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
