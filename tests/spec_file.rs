//! Buildozer spec file creation and patching.

use colornote_bundler::bundler::{
    SettingsBuilder,
    platform::android::spec_file::{
        INCLUDE_EXTS_PLACEHOLDER, REQUIREMENTS_PLACEHOLDER, SpecFileStatus, SpecValues,
        ensure_spec_file, patch_spec,
    },
};
use std::fs;
use std::path::Path;

const TEMPLATE: &str = include_str!("fixtures/buildozer.spec");

fn default_values() -> SpecValues {
    let settings = SettingsBuilder::new().build().unwrap();
    SpecValues::from_settings(&settings)
}

#[test]
fn default_template_is_fully_patched() {
    let (patched, report) = patch_spec(TEMPLATE, &default_values());

    assert_eq!(report.applied.len(), 4);
    assert!(report.missing.is_empty());
    assert!(patched.contains("title = C0lorNote\n"));
    assert!(patched.contains("package.name = colornote\n"));
    assert!(patched.contains("source.include_exts = py,png,jpg,kv,atlas,json\n"));
    assert!(patched.contains("requirements = python3,pyqt6,pillow,pyyaml,kivy\n"));
    assert!(patched.contains("# comma separated e.g. requirements = sqlite3,kivy\n"));
    assert!(patched.contains("package.domain = org.test\n"));
}

#[test]
fn absent_placeholders_are_reported_and_left_alone() {
    let content = "[app]\ntitle = My Application\npackage.name = myapp\n";
    let (patched, report) = patch_spec(content, &default_values());

    assert_eq!(patched, "[app]\ntitle = C0lorNote\npackage.name = colornote\n");
    assert_eq!(
        report.missing,
        vec![INCLUDE_EXTS_PLACEHOLDER, REQUIREMENTS_PLACEHOLDER]
    );
}

#[tokio::test]
async fn existing_spec_file_is_never_repatched() {
    let dir = tempfile::tempdir().unwrap();
    let spec = dir.path().join("buildozer.spec");
    fs::write(&spec, TEMPLATE).unwrap();
    let settings = SettingsBuilder::new().project_dir(dir.path()).build().unwrap();

    // The tool is not needed when the file is already there.
    let status = ensure_spec_file(&settings, Path::new("/nonexistent/buildozer"))
        .await
        .unwrap();

    assert_eq!(status, SpecFileStatus::Existing);
    assert_eq!(fs::read_to_string(&spec).unwrap(), TEMPLATE);
}

#[cfg(unix)]
mod with_buildozer {
    use super::*;
    use colornote_bundler::bundler::{Error, ToolSettings};
    use std::os::unix::fs::PermissionsExt;

    fn script(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("buildozer");
        fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[tokio::test]
    async fn fresh_spec_file_is_initialized_and_patched() {
        let dir = tempfile::tempdir().unwrap();
        let tools = tempfile::tempdir().unwrap();
        let template = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/buildozer.spec");
        let buildozer = script(
            tools.path(),
            &format!("[ \"$1\" = init ] && cp \"{}\" buildozer.spec\n", template.display()),
        );
        let settings = SettingsBuilder::new()
            .project_dir(dir.path())
            .tools(ToolSettings {
                buildozer: buildozer.display().to_string(),
                ..ToolSettings::default()
            })
            .build()
            .unwrap();

        let status = ensure_spec_file(&settings, &buildozer).await.unwrap();

        let SpecFileStatus::Created(report) = status else {
            panic!("expected a new spec file");
        };
        assert_eq!(report.applied.len(), 4);
        let spec = fs::read_to_string(dir.path().join("buildozer.spec")).unwrap();
        assert!(spec.contains("title = C0lorNote\n"));
    }

    #[tokio::test]
    async fn init_without_output_is_a_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let tools = tempfile::tempdir().unwrap();
        let buildozer = script(tools.path(), "exit 0\n");
        let settings = SettingsBuilder::new().project_dir(dir.path()).build().unwrap();

        let err = ensure_spec_file(&settings, &buildozer).await.unwrap_err();

        assert!(matches!(err, Error::MissingInput { .. }), "{err}");
    }
}
