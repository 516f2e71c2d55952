use std::{fs::File, io::Read, path::Path};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

/// Reads the whole file at `path`, returning its bytes and their hex SHA-256 digest.
pub(crate) fn read_with_sha256(path: &Path) -> Result<(Vec<u8>, String)> {
    let mut file = File::open(path)
        .with_context(|| format!("[common::fs] Failed to open {}", path.display()))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .with_context(|| format!("[common::fs] Failed to read {}", path.display()))?;
    let digest = sha256_bytes(&bytes);
    Ok((bytes, digest))
}

/// Hex SHA-256 digest of a byte slice.
pub(crate) fn sha256_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn digest_of_empty_input() {
        assert_eq!(
            sha256_bytes(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        );
    }

    #[test]
    fn file_digest_matches_bytes_digest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"state,region\n").unwrap();
        let (bytes, digest) = read_with_sha256(file.path()).unwrap();
        assert_eq!(bytes, b"state,region\n");
        assert_eq!(digest, sha256_bytes(b"state,region\n"));
    }
}
