//! API-key persistence.
//!
//! A single opaque token stored in a fixed local file. The key is loaded
//! before any network activity begins; an absent or empty key is fatal to
//! the run.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fixed file the API key is persisted to, relative to the working
/// directory.
pub const API_KEY_FILE: &str = "api_key.txt";

/// Errors raised while loading or storing the API key.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// No key file at the expected path.
    #[error("API key file '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// The stored key is empty.
    #[error("stored API key is empty")]
    Empty,

    /// Key file could not be read or written.
    #[error("failed to access API key file: {0}")]
    Io(#[from] std::io::Error),
}

/// True when `key` is usable as a credential.
pub fn is_valid_api_key(key: &str) -> bool {
    !key.trim().is_empty()
}

/// Load the API key from [`API_KEY_FILE`].
pub fn load_api_key() -> Result<String, CredentialError> {
    load_api_key_from(Path::new(API_KEY_FILE))
}

/// Load the API key from an explicit path.
pub fn load_api_key_from(path: &Path) -> Result<String, CredentialError> {
    if !path.is_file() {
        return Err(CredentialError::NotFound(path.to_path_buf()));
    }

    let key = fs::read_to_string(path)?.trim().to_string();
    if !is_valid_api_key(&key) {
        return Err(CredentialError::Empty);
    }

    Ok(key)
}

/// Store the API key at [`API_KEY_FILE`], overwriting any previous key.
pub fn save_api_key(key: &str) -> Result<(), CredentialError> {
    save_api_key_to(Path::new(API_KEY_FILE), key)
}

/// Store the API key at an explicit path.
pub fn save_api_key_to(path: &Path, key: &str) -> Result<(), CredentialError> {
    fs::write(path, key)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key.txt");

        save_api_key_to(&path, "secret-token").unwrap();
        let key = load_api_key_from(&path).unwrap();
        assert_eq!(key, "secret-token");
    }

    #[test]
    fn test_load_trims_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key.txt");
        std::fs::write(&path, "  secret-token\n").unwrap();

        assert_eq!(load_api_key_from(&path).unwrap(), "secret-token");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key.txt");

        let err = load_api_key_from(&path).unwrap_err();
        assert!(matches!(err, CredentialError::NotFound(_)));
    }

    #[test]
    fn test_empty_file_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key.txt");
        std::fs::write(&path, "   \n").unwrap();

        let err = load_api_key_from(&path).unwrap_err();
        assert!(matches!(err, CredentialError::Empty));
    }

    #[test]
    fn test_validity_check() {
        assert!(is_valid_api_key("k"));
        assert!(!is_valid_api_key(""));
        assert!(!is_valid_api_key("   "));
    }

    #[test]
    fn test_save_overwrites_previous_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key.txt");

        save_api_key_to(&path, "old").unwrap();
        save_api_key_to(&path, "new").unwrap();
        assert_eq!(load_api_key_from(&path).unwrap(), "new");
    }
}
