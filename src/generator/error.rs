//! Generator errors.
//!
//! Parse failures carry the offending source and span so the CLI can render them with `miette`.

use std::io;
use std::path::{Path, PathBuf};

use fixtest_core::ChecksumError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors that occur while discovering fixtures or generating a dispatcher
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Checksum(#[from] ChecksumError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseDiagnostic),

    #[error(
        "fixtures '{first}' ({}) and '{second}' ({}) both map to the dispatcher module '{module}'",
        first_file.display(),
        second_file.display()
    )]
    #[diagnostic(help("rename one of the fixtures or the module that holds it"))]
    DuplicateModule {
        module: String,
        first: String,
        first_file: PathBuf,
        second: String,
        second_file: PathBuf,
    },

    #[error("generated dispatcher is not valid Rust: {0}")]
    Emit(String),
}

/// A fixture source file that `syn` could not parse.
#[derive(Debug, Error, Diagnostic)]
#[error("cannot parse fixture source: {message}")]
#[diagnostic(code(fixtest::parse), help("fixture files must be valid Rust; fix the syntax error and regenerate"))]
pub struct ParseDiagnostic {
    pub message: String,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("here")]
    pub span: SourceSpan,
}

impl ParseDiagnostic {
    pub fn from_syn(path: &Path, source: &str, err: &syn::Error) -> Self {
        let start = err.span().start();
        let offset = offset_of(source, start.line, start.column);
        Self {
            message: err.to_string(),
            src: NamedSource::new(path.display().to_string(), source.to_string()),
            span: (offset, 0).into(),
        }
    }
}

/// Byte offset of a 1-based line and 0-based character column, clamped to the source length.
fn offset_of(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (index, text) in source.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let within = text.char_indices().nth(column).map_or(text.len(), |(byte, _)| byte);
            return offset + within;
        }
        offset += text.len();
    }
    source.len()
}

/// Render an error with `miette`'s graphical handler (source snippet for parse errors).
pub fn render(err: GenerateError) -> String {
    format!("{:?}", miette::Report::new(err))
}
