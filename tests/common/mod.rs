//! Shared testing utilities for dwg_cleaner CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SUCCESS_LINE: &str = "[dwg_cleaner] ✅ Input DWG file copied successfully as output with no modifications to input file";
pub const MISSING_LINE: &str = "[dwg_cleaner] ❌ Input file does not exist.";
pub const USAGE_LINE: &str = "[dwg_cleaner] Usage: dwg_cleaner.py <input_path> <output_path>";

/// Sample drawing header bytes followed by binary noise.
pub const DRAWING: &[u8] = &[0xAC, 0x10, 0x31, 0x30, 0x33, 0x32, 0x00, 0x00, 0xFF, 0x7F, 0x0A, 0x0D];

/// Testing harness providing an isolated directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path of `name` inside the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Write `content` to `name`, creating parent directories.
    pub fn write(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Read the bytes at `name`.
    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.path(name)).expect("Failed to read file")
    }

    /// Build a command for invoking the compiled `dwg_cleaner` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dwg_cleaner").expect("Failed to locate dwg_cleaner binary");
        cmd.current_dir(self.root.path());
        cmd
    }

    /// Run the binary with an input and output path.
    pub fn copy(&self, input: &Path, output: &Path) -> assert_cmd::assert::Assert {
        self.cli().arg(input).arg(output).assert()
    }
}

/// Expected stdout for a run that reaches the copy step.
#[allow(dead_code)]
pub fn echo_lines(input: &Path, output: &Path) -> String {
    format!(
        "[dwg_cleaner] 🔍 Input path: {}\n[dwg_cleaner] 📤 Output path: {}\n",
        input.display(),
        output.display()
    )
}
