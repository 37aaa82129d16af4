//! Loading JSON documents from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::document::node::JsonValue;
use crate::document::parser::parse_document;

/// Reads and parses a JSON file.
///
/// Both I/O and parse failures are fatal; the editor refuses to open a
/// document it could not fully parse rather than presenting a partial or
/// guessed tree.
///
/// # Example
///
/// ```no_run
/// use jsonquill::file::loader::load_json_file;
///
/// let doc = load_json_file("config.json").unwrap();
/// ```
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<JsonValue> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    parse_document(&content)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "test", "count": 3}}"#).unwrap();

        let doc = load_json_file(file.path()).unwrap();
        let map = doc.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("test"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_json_file("/nonexistent/path/file.json");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let result = load_json_file(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_load_scalar_root() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "42").unwrap();
        let doc = load_json_file(file.path()).unwrap();
        assert!(!doc.is_container());
    }
}
