//! 添付ファイルのBase64変換
//!
//! ブラウザのFileReader.readAsDataURLと同じく標準アルファベット（パディングあり）

use crate::error::{BfhlError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use std::path::Path;

/// ファイルを読み込んでBase64文字列にする
pub fn encode_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(BfhlError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    debug!("{}: {} bytes", path.display(), bytes.len());
    Ok(STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_encode_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("hello.txt");
        std::fs::write(&path, "hello").unwrap();

        assert_eq!(encode_file(&path).unwrap(), "aGVsbG8=");
    }

    #[test]
    fn test_encode_empty_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("empty.bin");
        std::fs::write(&path, b"").unwrap();

        assert_eq!(encode_file(&path).unwrap(), "");
    }

    #[test]
    fn test_encode_missing_file() {
        let result = encode_file(Path::new("/nonexistent/path/12345.png"));
        assert!(matches!(result, Err(BfhlError::FileNotFound(_))));
    }

    #[test]
    fn test_encode_directory_is_not_a_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        assert!(matches!(encode_file(dir.path()), Err(BfhlError::FileNotFound(_))));
    }
}
