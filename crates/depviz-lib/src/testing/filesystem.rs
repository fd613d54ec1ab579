//! Filesystem fixtures for registry files and configuration
//!
//! Every fixture owns a temporary directory that is removed on drop.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory fixture with automatic cleanup
pub struct TempDirFixture {
    /// The temporary directory (automatically cleaned up on drop)
    pub temp_dir: TempDir,
}

impl TempDirFixture {
    pub fn new() -> std::io::Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        Ok(Self { temp_dir })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `file_path` (relative), creating parent directories
    pub fn write_file(&self, file_path: &str, content: &str) -> std::io::Result<PathBuf> {
        let full_path = self.path().join(file_path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, content)?;
        Ok(full_path)
    }

    pub fn read_file(&self, file_path: &str) -> std::io::Result<String> {
        fs::read_to_string(self.path().join(file_path))
    }

    pub fn file_exists(&self, file_path: &str) -> bool {
        self.path().join(file_path).is_file()
    }

    /// Write an offline registry file (`name: dep1 dep2` lines)
    pub fn write_registry(&self, lines: &[&str]) -> std::io::Result<PathBuf> {
        let mut content = lines.join("\n");
        content.push('\n');
        self.write_file("registry.txt", &content)
    }
}

#[cfg(test)]
mod tests {
    include!("filesystem.test.rs");
}
