//! Stale-dispatcher guard.
//!
//! Generated dispatchers carry the checksum of the fixture sources they were generated from. Before any case runs,
//! the dispatcher calls [`validate`] with that checksum and its own directory; if the sources changed since
//! generation (a new test method, a renamed fixture), the test binary stops instead of silently running an outdated
//! dispatcher.

use std::path::{Path, PathBuf};
use std::process;

use fixtest_core::checksum::{self, ChecksumError};
use thiserror::Error;

/// Exit status used when the guard halts the process.
pub const EXIT_STATUS: i32 = 1;

#[derive(Debug, Error)]
pub enum GuardError {
    #[error("Unable to resolve the fixture source directory '{}'.", dir.display())]
    Unresolved { dir: PathBuf },

    #[error("Could not calculate the checksum of the current fixture sources. Error: {0}")]
    Checksum(#[from] ChecksumError),

    #[error(
        "The checksum provided ({expected}) does not match the current file listing ({actual}). \
         Please re-run `fixtest generate` and try again."
    )]
    Mismatch { expected: String, actual: String },
}

/// Compare `expected` with the current checksum of `dir`.
pub fn check(dir: &Path, expected: &str) -> Result<(), GuardError> {
    if !dir.is_dir() {
        return Err(GuardError::Unresolved { dir: dir.to_path_buf() });
    }
    let actual = checksum::checksum(dir)?;
    if actual != expected {
        return Err(GuardError::Mismatch {
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}

/// Like [`check`], but halts the process with a diagnostic on stderr when the dispatcher is stale.
pub fn validate(dir: impl AsRef<Path>, expected: &str) {
    if let Err(err) = check(dir.as_ref(), expected) {
        eprintln!("{err}");
        process::exit(EXIT_STATUS);
    }
}
