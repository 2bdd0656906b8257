#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// A text file in the system temp directory, removed on drop.
pub struct TempSource {
    path: PathBuf,
}

impl TempSource {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempSource {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Writes `contents` to a file unique to this process and test name.
pub fn write_source(name: &str, contents: &str) -> TempSource {
    let path = std::env::temp_dir().join(format!(
        "shelter-tally-{}-{}.txt",
        std::process::id(),
        name
    ));
    fs::write(&path, contents).unwrap();
    TempSource { path }
}

/// Produce items from the grocery list used throughout the tests.
pub const GROCERIES: &str = "Spinach\nRadishes\nSpinach\nPeppers\nSpinach\nRadishes\n";

/// Renders output captured from a writer as lines.
pub fn output_lines(buffer: Vec<u8>) -> Vec<String> {
    String::from_utf8(buffer)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
