//! Removal of build directories and spec files.

use colornote_bundler::bundler::clean::clean_build_dirs;
use std::fs;

#[tokio::test]
async fn removes_build_dirs_and_spec_files_only() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    for sub in ["dist/C0lorNote.app", "build/C0lorNote", "__pycache__", "assets"] {
        fs::create_dir_all(root.join(sub)).unwrap();
    }
    fs::write(root.join("C0lorNote.spec"), "# pyinstaller").unwrap();
    fs::write(root.join("buildozer.spec"), "[app]").unwrap();
    fs::write(root.join("modern_colornote.py"), "").unwrap();
    fs::write(root.join("assets/notes.spec"), "kept").unwrap();

    let mut removed = clean_build_dirs(root).await.unwrap();
    removed.sort();

    let mut expected = vec![
        root.join("dist"),
        root.join("build"),
        root.join("__pycache__"),
        root.join("C0lorNote.spec"),
        root.join("buildozer.spec"),
    ];
    expected.sort();
    assert_eq!(removed, expected);

    assert!(root.join("modern_colornote.py").is_file());
    assert!(root.join("assets/notes.spec").is_file());
}

#[tokio::test]
async fn empty_project_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    assert!(clean_build_dirs(dir.path()).await.unwrap().is_empty());
}
