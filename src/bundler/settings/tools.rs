//! External tool commands.

/// Commands used to invoke the external packaging tools.
///
/// A value containing a path separator is used as a path, relative to the
/// project directory; a bare name is looked up on `PATH`.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Native executable packager.
    pub pyinstaller: String,

    /// Android packaging tool.
    pub buildozer: String,

    /// Interpreter used for `-m pip install` when `--install-missing` is given.
    pub python: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            pyinstaller: "pyinstaller".into(),
            buildozer: "buildozer".into(),
            python: if cfg!(windows) { "python" } else { "python3" }.into(),
        }
    }
}
