//! SHA-256 digests for stored document content.
//!
//! The document store records a content hash for every uploaded file so
//! duplicates can be spotted and stored copies verified against the
//! original upload.

use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Compute a SHA-256 hex digest of an in-memory byte slice.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

/// Compute a SHA-256 hex digest of a file, streaming in 64 KiB chunks so
/// large scanned documents are never held in memory whole.
pub fn sha256_file(path: &Path) -> std::io::Result<String> {
    let mut file = std::fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_input_produces_known_hash() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn file_digest_matches_slice_digest() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"expediente 2024-CV-0100").unwrap();
        let from_file = sha256_file(f.path()).unwrap();
        assert_eq!(from_file, sha256_hex(b"expediente 2024-CV-0100"));
        assert_eq!(from_file.len(), 64);
    }
}
