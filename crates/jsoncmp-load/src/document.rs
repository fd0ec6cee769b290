//! Reading and decoding documents.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{LoadError, LoadResult};

/// Read a JSON document from disk and decode it into a value tree.
///
/// An unreadable file and malformed content are reported as distinct errors.
pub fn load_document(path: &Path) -> LoadResult<Value> {
    let bytes = fs::read(path).map_err(|source| LoadError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;

    let value = decode_document(&bytes).map_err(|source| LoadError::DocumentDecode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "decoded document");
    Ok(value)
}

/// Decode in-memory JSON.
pub fn decode_document(bytes: &[u8]) -> serde_json::Result<Value> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_valid_json() {
        let value = decode_document(br#"{"a": [1, null, "x"]}"#).unwrap();
        assert_eq!(value, json!({"a": [1, null, "x"]}));
    }

    #[test]
    fn decode_rejects_trailing_garbage() {
        assert!(decode_document(b"{} {}").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, r#"{"k": true}"#).unwrap();

        assert_eq!(load_document(&path).unwrap(), json!({"k": true}));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::DocumentRead { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn malformed_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"k\": ").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, LoadError::DocumentDecode { .. }));
        assert!(err.to_string().starts_with("failed to decode document"));
    }
}
