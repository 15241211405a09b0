//! Directory checksums for stale-dispatcher detection.
//!
//! The digest covers every `.rs` file directly inside a directory (not recursive), except the generated
//! dispatcher itself. Files are visited in byte order of their names and each contributes its name, its length
//! and its contents, so renaming, editing, adding or removing a source file changes the digest.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::conventions::GENERATED_FILE_NAME;

/// Errors raised while computing a directory checksum.
#[derive(Debug, Error)]
pub enum ChecksumError {
    #[error("cannot list '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// List the files that participate in the checksum of `dir`, sorted by file name.
pub fn source_files(dir: &Path) -> Result<Vec<PathBuf>, ChecksumError> {
    let entries = fs::read_dir(dir).map_err(|source| ChecksumError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ChecksumError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        if path.file_name().is_some_and(|name| name == GENERATED_FILE_NAME) {
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Compute the hex-encoded SHA-256 checksum of the fixture sources in `dir`.
pub fn checksum(dir: &Path) -> Result<String, ChecksumError> {
    let mut hasher = Sha256::new();

    for path in source_files(dir)? {
        let contents = fs::read(&path).map_err(|source| ChecksumError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();

        hasher.update(name.as_bytes());
        hasher.update([0u8]);
        hasher.update((contents.len() as u64).to_le_bytes());
        hasher.update(&contents);
    }

    Ok(hex::encode(hasher.finalize()))
}
