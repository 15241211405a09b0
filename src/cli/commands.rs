//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use crate::generator::{self, Freshness, GenerateConfig, GenerateError, Listing, discover, error};

use super::{CliError, CliResult, ExitCode};

/// What `generate` does with the rendered dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateMode {
    Write,
    Check,
    Stdout,
}

fn to_cli_error(err: GenerateError) -> CliError {
    CliError::failure(error::render(err).trim_end())
}

/// Generate (or check) the dispatcher for one fixture directory.
pub fn generate(dir: &Path, config: &GenerateConfig, mode: GenerateMode) -> CliResult<ExitCode> {
    let generated = generator::generate(dir, config).map_err(to_cli_error)?;

    if generated.fixtures.is_empty() {
        tracing::warn!(dir = %dir.display(), "no fixtures found; the dispatcher will contain no tests");
    }

    match mode {
        GenerateMode::Stdout => {
            print!("{}", generated.code);
        }
        GenerateMode::Check => match generated.freshness().map_err(to_cli_error)? {
            Freshness::UpToDate => {
                println!("✓ {} is up to date", generated.path.display());
            }
            Freshness::Stale => {
                return Err(CliError::failure(format!(
                    "{} is out of date; run `fixtest generate {}`",
                    generated.path.display(),
                    dir.display()
                )));
            }
            Freshness::Missing => {
                return Err(CliError::failure(format!(
                    "{} does not exist; run `fixtest generate {}`",
                    generated.path.display(),
                    dir.display()
                )));
            }
        },
        GenerateMode::Write => {
            generated.write().map_err(to_cli_error)?;
            println!(
                "Generated: {} ({} fixture(s), {} test(s))",
                generated.path.display(),
                generated.fixtures.len(),
                generated.case_count()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print the checksum of a fixture directory.
pub fn checksum(dir: &Path) -> CliResult<ExitCode> {
    if !dir.is_dir() {
        return Err(to_cli_error(GenerateError::NotADirectory(dir.to_path_buf())));
    }
    let checksum = fixtest_core::checksum(dir).map_err(|e| to_cli_error(e.into()))?;
    println!("{checksum}");
    Ok(ExitCode::SUCCESS)
}

/// List the fixtures of a directory.
pub fn list(dir: &Path) -> CliResult<ExitCode> {
    let fixtures = discover(dir).map_err(to_cli_error)?;
    if fixtures.is_empty() {
        println!("No fixtures found in {}", dir.display());
    } else {
        print!("{}", Listing(&fixtures));
    }
    Ok(ExitCode::SUCCESS)
}
