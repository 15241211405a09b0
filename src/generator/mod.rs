//! Dispatcher generator.
//!
//! `fixtest generate` turns a directory of fixture types into `fixtest_generated.rs`: one `#[test]` per fixture
//! method, each driving the fixture through `fixtest_runtime`. The generated file records the directory checksum so
//! the runtime can refuse to run a dispatcher that no longer matches its sources.
//!
//! ## Modules
//!
//! - `discovery` - Parse fixture sources and classify methods
//! - `emit` - Build the dispatcher with `quote` and `prettyplease`
//! - `listing` - Text listing for `fixtest list`
//! - `config` - Generator options
//! - `error` - Error types and `miette` rendering

pub mod config;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod listing;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fixtest_core::{GENERATED_FILE_NAME, checksum};

pub use config::GenerateConfig;
pub use discovery::{FixtureInfo, discover};
pub use emit::FixtureDir;
pub use error::GenerateError;
pub use listing::Listing;

/// A rendered dispatcher, not yet written.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Destination of the dispatcher (`<dir>/fixtest_generated.rs`)
    pub path: PathBuf,
    pub code: String,
    pub checksum: String,
    pub fixtures: Vec<FixtureInfo>,
}

/// Result of comparing a rendered dispatcher with the file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
    Missing,
}

/// Discover fixtures in `dir` and render their dispatcher.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn generate(dir: &Path, config: &GenerateConfig) -> Result<Generated, GenerateError> {
    let fixtures = discover(dir)?;
    let checksum = checksum(dir)?;
    let fixture_dir = FixtureDir::resolve(dir, config);
    tracing::debug!(%checksum, ?fixture_dir, "rendering dispatcher");

    let code = emit::render(&fixtures, &checksum, &fixture_dir, config)?;
    Ok(Generated {
        path: dir.join(GENERATED_FILE_NAME),
        code,
        checksum,
        fixtures,
    })
}

impl Generated {
    /// Number of generated test functions.
    pub fn case_count(&self) -> usize {
        self.fixtures.iter().map(|f| f.cases.len()).sum()
    }

    /// Write the dispatcher next to its fixtures.
    pub fn write(&self) -> Result<(), GenerateError> {
        fs::write(&self.path, &self.code).map_err(|source| GenerateError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Compare against the dispatcher currently on disk.
    pub fn freshness(&self) -> Result<Freshness, GenerateError> {
        match fs::read_to_string(&self.path) {
            Ok(existing) if existing == self.code => Ok(Freshness::UpToDate),
            Ok(_) => Ok(Freshness::Stale),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Freshness::Missing),
            Err(source) => Err(GenerateError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
