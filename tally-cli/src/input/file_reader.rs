//! Loading input files for reduction

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const UTF8_BOM: char = '\u{feff}';

/// A text file loaded into memory, ready to be split into elements
#[derive(Debug, Clone)]
pub struct InputFile {
    path: PathBuf,
    text: String,
}

impl InputFile {
    /// Read `path` as UTF-8; a leading byte order mark is dropped so the
    /// first token parses like any other
    pub fn load(path: &Path) -> Result<Self> {
        let mut text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        if text.starts_with(UTF8_BOM) {
            text.remove(0);
        }

        log::debug!("Loaded {} ({} bytes)", path.display(), text.len());
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Path as it appears in reports
    pub fn name(&self) -> String {
        self.path.display().to_string()
    }

    /// File contents
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("numbers.txt");
        fs::write(&file_path, "1 2 3\n4 5\n").unwrap();

        let input = InputFile::load(&file_path).unwrap();
        assert_eq!(input.text(), "1 2 3\n4 5\n");
        assert!(input.name().ends_with("numbers.txt"));
    }

    #[test]
    fn test_byte_order_mark_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bom.txt");
        fs::write(&file_path, "\u{feff}7 8").unwrap();

        let input = InputFile::load(&file_path).unwrap();
        assert_eq!(input.text(), "7 8");
    }

    #[test]
    fn test_nonexistent_file() {
        let err = InputFile::load(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.bin");
        fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(InputFile::load(&file_path).is_err());
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        fs::File::create(&file_path).unwrap();

        assert_eq!(InputFile::load(&file_path).unwrap().text(), "");
    }
}
