//! Process-wide run configuration for fixtures.
//!
//! Verbosity and the output sink are resolved once per test binary ([`RunConfig::global`]) and injected into every
//! adapter at construction, so tests can substitute both.

use std::env;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Environment variable that turns on verbose fixture output.
pub const VERBOSE_ENV: &str = "FIXTEST_VERBOSE";

/// Destination for flushed fixture transcripts.
#[derive(Clone, Default)]
pub enum OutputSink {
    /// `print!`-based stdout, so libtest output capture still applies.
    #[default]
    Console,
    /// `eprint!`-based stderr.
    Stderr,
    /// Any shared writer, e.g. an in-memory buffer in tests.
    Writer(Arc<Mutex<dyn Write + Send>>),
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSink::Console => f.write_str("Console"),
            OutputSink::Stderr => f.write_str("Stderr"),
            OutputSink::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

impl OutputSink {
    /// Wrap a writer as a shared sink.
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        OutputSink::Writer(Arc::new(Mutex::new(writer)))
    }

    /// Create an in-memory sink and a handle for reading back what was written to it.
    pub fn capture() -> (Self, CapturedOutput) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        (OutputSink::Writer(buffer.clone()), CapturedOutput { buffer })
    }

    /// Write one transcript block followed by a newline.
    ///
    /// Writer sinks are locked for the whole block, so concurrent blocks never interleave.
    pub fn write_block(&self, block: &str) -> io::Result<()> {
        match self {
            OutputSink::Console => {
                println!("{block}");
                Ok(())
            }
            OutputSink::Stderr => {
                eprintln!("{block}");
                Ok(())
            }
            OutputSink::Writer(writer) => {
                let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
                writeln!(writer, "{block}")?;
                writer.flush()
            }
        }
    }
}

/// Read handle for an [`OutputSink::capture`] buffer.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }
}

/// Verbosity and output destination shared by every fixture in a test binary.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Flush transcripts of passing tests too.
    pub verbose: bool,
    /// Where transcripts go.
    pub sink: OutputSink,
}

impl RunConfig {
    /// Create a new config with default settings (quiet, console sink).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the output sink.
    pub fn with_sink(mut self, sink: OutputSink) -> Self {
        self.sink = sink;
        self
    }

    /// Build a config from the environment (`FIXTEST_VERBOSE`).
    pub fn from_env() -> Self {
        let verbose = env::var(VERBOSE_ENV).map(|v| parse_flag(&v)).unwrap_or(false);
        Self::new().with_verbose(verbose)
    }

    /// The config resolved once for this process.
    pub fn global() -> &'static RunConfig {
        static GLOBAL: OnceLock<RunConfig> = OnceLock::new();
        GLOBAL.get_or_init(RunConfig::from_env)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
