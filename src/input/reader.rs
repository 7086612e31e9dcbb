use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::TextkitError;

/// Read text from stdin or a file
pub struct InputReader;

impl InputReader {
    /// Read text from stdin or file path
    ///
    /// # Arguments
    /// * `path` - Optional file path. If None, reads from stdin.
    ///
    /// # Returns
    /// * `Ok(String)` - The whole input
    /// * `Err(TextkitError::Io)` - If the file is missing, unreadable or not UTF-8
    pub fn read_text(path: Option<&Path>) -> Result<String, TextkitError> {
        let text = match path {
            Some(file_path) => {
                #[cfg(debug_assertions)]
                log::debug!("Reading input from {:?}", file_path);
                Self::read_from(File::open(file_path)?)?
            }
            None => {
                #[cfg(debug_assertions)]
                log::debug!("Reading input from stdin");
                Self::read_from(io::stdin().lock())?
            }
        };

        Ok(text)
    }

    fn read_from<R: Read>(mut reader: R) -> Result<String, TextkitError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Ok(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.txt");
        fs::write(&path, "Hello world. Bye!\n").unwrap();

        let text = InputReader::read_text(Some(&path)).unwrap();
        assert_eq!(text, "Hello world. Bye!\n");
    }

    #[test]
    fn test_read_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        assert_eq!(InputReader::read_text(Some(&path)).unwrap(), "");
    }

    #[test]
    fn test_file_not_found_returns_error() {
        let dir = TempDir::new().unwrap();
        let result = InputReader::read_text(Some(&dir.path().join("nonexistent.txt")));

        match result {
            Err(TextkitError::Io(_)) => {}
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_returns_error() {
        let result = InputReader::read_from(&[0xff, 0xfe, 0x00][..]);
        assert!(matches!(result, Err(TextkitError::Io(_))));
    }

    #[test]
    fn test_read_from_reader() {
        let text = InputReader::read_from("línea uno\nlínea dos".as_bytes()).unwrap();
        assert_eq!(text, "línea uno\nlínea dos");
    }
}
