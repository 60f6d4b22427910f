//! Client-keyed filesystem store for uploaded documents.
//!
//! Uploaded files live in a folder tree under a single configured root,
//! one directory per client identification:
//!
//! ```text
//! <root>/<identification>/<uuid>_<sanitized original name>
//! ```
//!
//! The database only ever records paths relative to the root, so the whole
//! tree can be moved by changing one configuration value.

use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::hashing;

/// Metadata recorded for a file after it has been copied into the store.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Path relative to the store root, using `/` separators.
    pub relative_path: String,
    /// SHA-256 hex digest of the stored content.
    pub content_hash: String,
    /// Size of the stored copy in bytes.
    pub size_bytes: i64,
}

/// Filesystem document store rooted at a configured directory.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Copy `source` into the client's directory, creating it on demand.
    ///
    /// The stored name is a v4 UUID prefix plus the sanitized original file
    /// name, so repeated uploads of the same file never collide.
    pub fn store(&self, identification: &str, source: &Path) -> Result<StoredFile, CoreError> {
        if !source.is_file() {
            return Err(CoreError::Validation(format!(
                "Source file does not exist: {}",
                source.display()
            )));
        }

        let original_name = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| CoreError::Validation("Source file has no usable name".into()))?;
        let stored_name = format!("{}_{}", uuid::Uuid::new_v4(), sanitize_file_name(original_name));

        let client_dir = self.client_dir(identification);
        std::fs::create_dir_all(&client_dir)
            .map_err(|e| io_error("create client directory", &client_dir, e))?;

        let target = client_dir.join(&stored_name);
        let size_bytes = std::fs::copy(source, &target)
            .map_err(|e| io_error("copy document into store", &target, e))?
            as i64;
        let content_hash = hashing::sha256_file(&target)
            .map_err(|e| io_error("hash stored document", &target, e))?;

        let relative_path = format!("{}/{}", identification, stored_name);
        tracing::debug!(path = %relative_path, size_bytes, "Stored document");

        Ok(StoredFile {
            relative_path,
            content_hash,
            size_bytes,
        })
    }

    /// Resolve a relative path recorded in the database to an absolute path.
    ///
    /// Rejects traversal components so a corrupted row can never escape the
    /// store root.
    pub fn resolve(&self, relative_path: &str) -> Result<PathBuf, CoreError> {
        if relative_path.split('/').any(|seg| seg == ".." || seg.is_empty()) {
            return Err(CoreError::Validation(format!(
                "Invalid stored path: {relative_path}"
            )));
        }
        Ok(self.root.join(relative_path))
    }

    /// Delete a stored file and prune its client directory if it is now empty.
    ///
    /// Removing a path that is already gone is not an error; hard-deleting a
    /// row whose file was removed out-of-band must still succeed.
    pub fn remove(&self, relative_path: &str) -> Result<(), CoreError> {
        let absolute = self.resolve(relative_path)?;
        match std::fs::remove_file(&absolute) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %relative_path, "Stored file already missing on remove");
            }
            Err(e) => return Err(io_error("remove stored document", &absolute, e)),
        }

        if let Some(dir) = absolute.parent() {
            if dir.read_dir().map(|mut d| d.next().is_none()).unwrap_or(false) {
                let _ = std::fs::remove_dir(dir);
            }
        }
        Ok(())
    }

    /// Remove every stored file under one client's directory.
    pub fn remove_client_tree(&self, identification: &str) -> Result<(), CoreError> {
        let dir = self.client_dir(identification);
        match std::fs::remove_dir_all(&dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("remove client document tree", &dir, e)),
        }
    }

    fn client_dir(&self, identification: &str) -> PathBuf {
        self.root.join(identification)
    }
}

/// Replace path separators and control characters in an uploaded file name.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_control() || matches!(c, '/' | '\\' | ':') {
                '_'
            } else {
                c
            }
        })
        .collect()
}

fn io_error(action: &str, path: &Path, err: std::io::Error) -> CoreError {
    CoreError::Internal(format!("Failed to {action} at {}: {err}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn store_with_source() -> (tempfile::TempDir, DocumentStore, tempfile::NamedTempFile) {
        let root = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(root.path());
        let mut source = tempfile::NamedTempFile::new().unwrap();
        source.write_all(b"demanda inicial").unwrap();
        (root, store, source)
    }

    #[test]
    fn store_resolve_remove_round_trip() {
        let (_root, store, source) = store_with_source();

        let stored = store.store("12345678-9", source.path()).unwrap();
        assert!(stored.relative_path.starts_with("12345678-9/"));
        assert_eq!(stored.size_bytes, b"demanda inicial".len() as i64);
        assert_eq!(stored.content_hash, crate::hashing::sha256_hex(b"demanda inicial"));

        let absolute = store.resolve(&stored.relative_path).unwrap();
        assert!(absolute.is_file());

        store.remove(&stored.relative_path).unwrap();
        assert!(!absolute.exists());
        // Empty client directory is pruned with the last file.
        assert!(!store.root().join("12345678-9").exists());
    }

    #[test]
    fn resolve_rejects_traversal() {
        let root = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(root.path());
        assert!(store.resolve("../etc/passwd").is_err());
        assert!(store.resolve("a//b").is_err());
    }

    #[test]
    fn remove_is_idempotent() {
        let (_root, store, source) = store_with_source();
        let stored = store.store("12345678-9", source.path()).unwrap();
        store.remove(&stored.relative_path).unwrap();
        store.remove(&stored.relative_path).unwrap();
    }

    #[test]
    fn missing_source_is_a_validation_error() {
        let root = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(root.path());
        let err = store
            .store("12345678-9", Path::new("/nonexistent/file.pdf"))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
