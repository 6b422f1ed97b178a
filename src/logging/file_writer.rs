//! Append-only log file writes
//!
//! Each call opens the file in append mode, writes one line and closes it again.
//! No handle is held between calls.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Append `line` plus a newline to the file at `path`
///
/// The file is created if missing, but parent directories are not.
pub fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    // One write call so concurrent appenders don't split a line
    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');
    file.write_all(buf.as_bytes())?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_append_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.log");

        append_line(&path, "first").unwrap();
        append_line(&path, "second").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_append_missing_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("test.log");

        assert!(append_line(&path, "line").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_append_to_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(append_line(temp_dir.path(), "line").is_err());
    }
}
