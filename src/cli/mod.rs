//! CLI module for the fixtest generator
//!
//! ## Commands
//!
//! - `generate [dir]` - Write `fixtest_generated.rs` for a fixture directory
//! - `checksum [dir]` - Print the directory checksum recorded in generated dispatchers
//! - `list [dir]` - Show discovered fixtures and how each case is dispatched
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::FIXTEST_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate libtest dispatchers for gunit-style fixtures
#[derive(Parser, Debug)]
#[command(name = "fixtest")]
#[command(version = FIXTEST_VERSION)]
#[command(about = "Generate libtest dispatchers for gunit-style fixtures", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write fixtest_generated.rs for a fixture directory
    Generate {
        /// Directory holding the fixture sources
        #[arg(value_name = "DIR", default_value = ".")]
        path: PathBuf,
        /// Fail if the dispatcher on disk is missing or out of date instead of writing it
        #[arg(long, conflicts_with = "stdout")]
        check: bool,
        /// Print the dispatcher instead of writing it
        #[arg(long)]
        stdout: bool,
        /// Crate path the generated code uses for the runtime
        #[arg(long, value_name = "NAME", default_value = crate::generator::config::DEFAULT_RUNTIME_CRATE)]
        runtime_crate: String,
        /// Record an absolute fixture directory instead of one relative to CARGO_MANIFEST_DIR
        #[arg(long)]
        absolute: bool,
    },

    /// Print the checksum of a fixture directory
    Checksum {
        #[arg(value_name = "DIR", default_value = ".")]
        path: PathBuf,
    },

    /// List discovered fixtures and their cases
    List {
        #[arg(value_name = "DIR", default_value = ".")]
        path: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Generate {
            path,
            check,
            stdout,
            runtime_crate,
            absolute,
        } => {
            let config = crate::generator::GenerateConfig::new()
                .with_runtime_crate(runtime_crate)
                .with_manifest_relative(!absolute);
            let mode = if check {
                commands::GenerateMode::Check
            } else if stdout {
                commands::GenerateMode::Stdout
            } else {
                commands::GenerateMode::Write
            };
            commands::generate(&path, &config, mode)
        }
        Command::Checksum { path } => commands::checksum(&path),
        Command::List { path } => commands::list(&path),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["fixtest", "generate"]).unwrap();
        if let Command::Generate {
            path,
            check,
            stdout,
            runtime_crate,
            absolute,
        } = cli.command
        {
            assert_eq!(path, PathBuf::from("."));
            assert!(!check);
            assert!(!stdout);
            assert!(!absolute);
            assert_eq!(runtime_crate, "fixtest_runtime");
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parse_generate_check() {
        let cli = Cli::try_parse_from(["fixtest", "generate", "tests/bowling", "--check"]).unwrap();
        if let Command::Generate { path, check, .. } = cli.command {
            assert_eq!(path, PathBuf::from("tests/bowling"));
            assert!(check);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_rejects_check_with_stdout() {
        assert!(Cli::try_parse_from(["fixtest", "generate", "--check", "--stdout"]).is_err());
    }

    #[test]
    fn test_cli_parse_checksum_and_list() {
        let cli = Cli::try_parse_from(["fixtest", "checksum", "fixtures"]).unwrap();
        assert!(matches!(cli.command, Command::Checksum { .. }));

        let cli = Cli::try_parse_from(["fixtest", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List { .. }));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["fixtest"]).is_err());
    }
}
