//! Buffering, deferring wrapper around a host [`TestControl`].
//!
//! Every log line is kept in an in-memory transcript instead of reaching the host. At [`TestControlAdapter::finalize`]
//! the transcript is written to the configured sink as one block, but only if the test failed or verbose mode is on.
//! Skip requests are recorded and replayed at finalize, since a host skip may unwind the stack and the adapter does
//! not control how deep inside a fixture method it is called.

use std::fmt::{self, Display, Write as _};

use crate::config::RunConfig;
use crate::control::TestControl;

/// Indentation unit prefixed to every transcript entry.
pub const INDENT: char = '\t';

#[derive(Debug)]
pub struct TestControlAdapter<C: TestControl> {
    control: C,
    log: String,
    skip_requested: bool,
    config: RunConfig,
}

impl<C: TestControl> TestControlAdapter<C> {
    pub fn new(control: C, config: RunConfig) -> Self {
        Self {
            control,
            log: String::new(),
            skip_requested: false,
            config,
        }
    }

    /// Append one indented, newline-terminated entry to the transcript.
    pub fn log(&mut self, message: impl Display) {
        // Writing to String cannot fail.
        let _ = writeln!(self.log, "{INDENT}{message}");
    }

    /// Append one indented formatted entry; a trailing newline is added unless the text already ends with one.
    pub fn logf(&mut self, args: fmt::Arguments<'_>) {
        let _ = write!(self.log, "{INDENT}{args}");
        if !self.log.ends_with('\n') {
            self.log.push('\n');
        }
    }

    /// Log, then mark the test failed.
    pub fn error(&mut self, message: impl Display) {
        self.log(message);
        self.control.mark_failed();
    }

    pub fn errorf(&mut self, args: fmt::Arguments<'_>) {
        self.logf(args);
        self.control.mark_failed();
    }

    /// Log, then request a skip that takes effect at finalize.
    pub fn skip(&mut self, message: impl Display) {
        self.log(message);
        self.skip_requested = true;
    }

    pub fn skipf(&mut self, args: fmt::Arguments<'_>) {
        self.logf(args);
        self.skip_requested = true;
    }

    /// Mark the test failed without logging.
    pub fn fail(&mut self) {
        self.control.mark_failed();
    }

    pub fn failed(&self) -> bool {
        self.control.failed()
    }

    pub fn skip_requested(&self) -> bool {
        self.skip_requested
    }

    /// The transcript accumulated so far.
    pub fn buffered(&self) -> &str {
        &self.log
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    /// Flush the transcript if the test failed or verbose mode is on, then apply a deferred skip.
    ///
    /// Must be the last call made for the test: the host's skip may unwind from here.
    pub fn finalize(mut self) {
        let failed = self.control.failed();
        tracing::debug!(
            failed,
            skip_requested = self.skip_requested,
            verbose = self.config.verbose,
            bytes = self.log.len(),
            "finalizing fixture"
        );

        if self.config.verbose || failed {
            if let Err(err) = self.config.sink.write_block(&self.log) {
                tracing::warn!(error = %err, "failed to write fixture transcript");
            }
        }

        if self.skip_requested {
            self.control.request_skip();
        }
    }
}
