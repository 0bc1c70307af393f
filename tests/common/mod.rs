//! Shared test infrastructure: scratch projects and stand-in packagers.
//!
//! The stand-ins are small shell scripts that answer `--version`, record
//! their arguments and create the files the real tools would produce.

#![allow(dead_code)]

use colornote_bundler::bundler::{Settings, SettingsBuilder, ToolSettings};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Default buildozer.spec written by the stand-in `buildozer init`.
pub const BUILDOZER_TEMPLATE: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/buildozer.spec");

/// Scratch project with a main script and a tools directory next to it.
pub struct Workspace {
    root: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(root.path().join("project")).unwrap();
        fs::create_dir_all(root.path().join("tools")).unwrap();
        fs::write(
            root.path().join("project/modern_colornote.py"),
            "print('C0lorNote')\n",
        )
        .unwrap();
        Self { root }
    }

    pub fn project(&self) -> PathBuf {
        self.root.path().join("project")
    }

    pub fn tools(&self) -> PathBuf {
        self.root.path().join("tools")
    }

    /// Arguments recorded by a stand-in, one invocation per line.
    pub fn invocations(&self, tool: &str) -> Vec<String> {
        fs::read_to_string(self.tools().join(format!("{tool}.log")))
            .map(|log| log.lines().map(String::from).collect())
            .unwrap_or_default()
    }

    /// Writes an executable shell script into the tools directory.
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.tools().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// PyInstaller stand-in producing the artifact each target expects.
    pub fn pyinstaller(&self) -> PathBuf {
        let log = self.tools().join("pyinstaller.log");
        self.script(
            "pyinstaller",
            &format!(
                r#"if [ "$1" = "--version" ]; then echo "6.3.0"; exit 0; fi
echo "$@" >> "{log}"
name=app
kind=linux
for arg in "$@"; do
  case "$arg" in
    --name=*) name="${{arg#--name=}}" ;;
    --clean) kind=windows ;;
    --osx-bundle-identifier=*) kind=macos ;;
  esac
done
mkdir -p dist
case "$kind" in
  windows) echo "MZ $name" > "dist/$name.exe" ;;
  macos) mkdir -p "dist/$name.app/Contents/MacOS" && echo "$name" > "dist/$name.app/Contents/MacOS/$name" ;;
  *) echo "ELF $name" > "dist/$name" ;;
esac
"#,
                log = log.display()
            ),
        )
    }

    /// PyInstaller stand-in that succeeds without producing anything.
    pub fn silent_pyinstaller(&self) -> PathBuf {
        self.script(
            "pyinstaller",
            r#"if [ "$1" = "--version" ]; then echo "6.3.0"; fi
exit 0
"#,
        )
    }

    /// PyInstaller stand-in whose build step fails.
    pub fn failing_pyinstaller(&self) -> PathBuf {
        self.script(
            "pyinstaller",
            r#"if [ "$1" = "--version" ]; then echo "6.3.0"; exit 0; fi
echo "ERROR: script not found" >&2
exit 3
"#,
        )
    }

    /// Buildozer stand-in: `init` copies the default template and
    /// `android <mode>` writes a versioned APK into bin/.
    pub fn buildozer(&self) -> PathBuf {
        let log = self.tools().join("buildozer.log");
        self.script(
            "buildozer",
            &format!(
                r#"if [ "$1" = "--version" ]; then echo "Buildozer 1.5.0"; exit 0; fi
echo "$@" >> "{log}"
case "$1" in
  init) cp "{template}" buildozer.spec ;;
  android) mkdir -p bin && echo "apk" > "bin/colornote-1.0.0-arm64-v8a-$2.apk" ;;
esac
"#,
                log = log.display(),
                template = BUILDOZER_TEMPLATE
            ),
        )
    }

    /// Interpreter stand-in answering `-m pip install`.
    ///
    /// With `install`, the `(staged, destination)` pair is copied into place
    /// as if pip had installed the tool; without it pip "succeeds" and
    /// installs nothing.
    pub fn python(&self, install: Option<(&Path, &Path)>) -> PathBuf {
        let log = self.tools().join("python3.log");
        let mut body = format!("echo \"$@\" >> \"{}\"\n", log.display());
        if let Some((staged, destination)) = install {
            body.push_str(&format!(
                "if [ \"$1 $2 $3\" = \"-m pip install\" ]; then cp \"{}\" \"{}\"; fi\n",
                staged.display(),
                destination.display()
            ));
        }
        self.script("python3", &body)
    }

    /// Settings pointing at the given stand-ins.
    pub fn settings(&self, pyinstaller: &Path, buildozer: &Path) -> Settings {
        self.settings_with(
            ToolSettings {
                pyinstaller: pyinstaller.display().to_string(),
                buildozer: buildozer.display().to_string(),
                ..ToolSettings::default()
            },
            false,
        )
    }

    /// Settings with explicit tool commands.
    pub fn settings_with(&self, tools: ToolSettings, install_missing: bool) -> Settings {
        SettingsBuilder::new()
            .project_dir(self.project())
            .tools(tools)
            .install_missing(install_missing)
            .build()
            .unwrap()
    }

    /// Manifest pointing the CLI at the given stand-ins.
    pub fn write_manifest(&self, pyinstaller: &Path, buildozer: &Path) {
        fs::write(
            self.project().join("colornote.toml"),
            format!(
                "[tools]\npyinstaller = \"{}\"\nbuildozer = \"{}\"\n",
                pyinstaller.display(),
                buildozer.display()
            ),
        )
        .unwrap();
    }
}
