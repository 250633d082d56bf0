#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes `files` (relative path, contents) under `root`, creating parents.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// A template with two top-level files and one nested file.
pub fn basic_template() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template");
    write_tree(
        &template,
        &[
            ("one", "{{ project.name }} and {{ project.number }}\n"),
            ("two", "plain text\n"),
            ("subdir/a", "# {{ project.name }}\n"),
        ],
    );
    (dir, template)
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}
