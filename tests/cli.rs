//! Command line behavior of the `colornote_bundler` binary.

#[cfg(unix)]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

fn bundler() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("colornote_bundler");
    cmd.env_remove("COLORNOTE_PROJECT_DIR")
        .env_remove("COLORNOTE_BUNDLE_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    bundler()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("icon"));
}

#[test]
fn verbose_flag_mentions_log_control() {
    bundler()
        .args(["build", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RUST_LOG"));
}

#[test]
fn unknown_project_dir_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    bundler()
        .arg("-C")
        .arg(dir.path().join("missing"))
        .arg("clean")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project directory does not exist"));
}

#[test]
fn explicit_manifest_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("modern_colornote.py"), "").unwrap();
    bundler()
        .arg("-C")
        .arg(dir.path())
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["build", "--linux"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Manifest not found"));
}

#[test]
fn malformed_manifest_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("modern_colornote.py"), "").unwrap();
    fs::write(dir.path().join("colornote.toml"), "[package\n").unwrap();
    bundler()
        .arg("-C")
        .arg(dir.path())
        .args(["build", "--linux"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn missing_tool_prints_install_hint() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("modern_colornote.py"), "").unwrap();
    fs::write(
        dir.path().join("colornote.toml"),
        "[tools]\npyinstaller = \"/nonexistent/bin/pyinstaller\"\npython = \"python3\"\n",
    )
    .unwrap();

    bundler()
        .arg("-C")
        .arg(dir.path())
        .args(["build", "--linux"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✗ Error:"))
        .stderr(predicate::str::contains("python3 -m pip install pyinstaller"))
        .stderr(predicate::str::contains("--install-missing"));
}

#[test]
fn clean_removes_build_outputs() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("dist")).unwrap();
    fs::write(dir.path().join("C0lorNote.spec"), "").unwrap();

    bundler().arg("-C").arg(dir.path()).arg("clean").assert().success();

    assert!(!dir.path().join("dist").exists());
    assert!(!dir.path().join("C0lorNote.spec").exists());
}

#[test]
fn icon_writes_requested_sizes() {
    let dir = tempfile::tempdir().unwrap();

    bundler()
        .arg("-C")
        .arg(dir.path())
        .args(["icon", "--size", "64", "--sizes", "32,16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Icon generated successfully"));

    assert!(dir.path().join("assets/c0lornote_icon.png").is_file());
    assert!(dir.path().join("assets/c0lornote_icon_32x32.png").is_file());
    assert!(dir.path().join("assets/c0lornote_icon_16x16.png").is_file());
    assert!(!dir.path().join("assets/c0lornote_icon_512x512.png").exists());
}

#[cfg(unix)]
mod with_packagers {
    use super::*;
    use crate::common::Workspace;

    #[test]
    fn build_reports_collected_artifacts() {
        let ws = Workspace::new();
        ws.write_manifest(&ws.pyinstaller(), &ws.buildozer());

        bundler()
            .arg("-C")
            .arg(ws.project())
            .args(["build", "--linux", "--windows"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Summary"))
            .stdout(predicate::str::contains("exe/C0lorNote.exe"))
            .stdout(predicate::str::contains("linux/C0lorNote"));

        assert_eq!(ws.invocations("pyinstaller").len(), 2);
        assert!(ws.invocations("pyinstaller")[0].contains("--clean"), "windows builds first");
    }

    #[test]
    fn relative_tool_paths_follow_the_project_dir() {
        let ws = Workspace::new();
        let stand_in = ws.pyinstaller();
        fs::create_dir_all(ws.project().join("tools")).unwrap();
        fs::copy(&stand_in, ws.project().join("tools/pyinstaller")).unwrap();
        fs::write(
            ws.project().join("colornote.toml"),
            "[tools]\npyinstaller = \"tools/pyinstaller\"\n",
        )
        .unwrap();

        bundler()
            .current_dir(ws.tools())
            .arg("-C")
            .arg(ws.project())
            .args(["build", "--linux"])
            .assert()
            .success();

        assert!(ws.project().join("linux/C0lorNote").is_file());
    }

    #[test]
    fn missing_artifact_exits_zero_unless_strict() {
        let ws = Workspace::new();
        ws.write_manifest(&ws.silent_pyinstaller(), &ws.buildozer());

        bundler()
            .arg("-C")
            .arg(ws.project())
            .args(["build", "--windows"])
            .assert()
            .success()
            .stdout(predicate::str::contains("artifact missing"));

        bundler()
            .arg("-C")
            .arg(ws.project())
            .args(["build", "--windows", "--strict"])
            .assert()
            .code(2);
    }

    #[test]
    fn build_with_clean_removes_stale_outputs_first() {
        let ws = Workspace::new();
        ws.write_manifest(&ws.pyinstaller(), &ws.buildozer());
        fs::create_dir_all(ws.project().join("build/stale")).unwrap();

        bundler()
            .arg("-C")
            .arg(ws.project())
            .args(["build", "--linux", "--clean"])
            .assert()
            .success();

        assert!(!ws.project().join("build").exists());
        assert!(ws.project().join("linux/C0lorNote").is_file());
    }
}
