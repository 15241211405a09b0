//! The host's per-test control capability set.
//!
//! [`TestControl`] is the minimal surface a host test runner must offer. The adapter only ever calls
//! [`TestControl::request_skip`] from its own finalize step.

/// Per-test control handle supplied by the host runner.
pub trait TestControl {
    /// Ask the host to skip the current test.
    ///
    /// Hosts may unwind the calling stack here, so callers must treat this as the last action for the test.
    fn request_skip(&mut self);

    /// Mark the current test as failed. Failure is sticky.
    fn mark_failed(&mut self);

    /// Whether the current test has been marked failed.
    fn failed(&self) -> bool;

    /// Emit a log line through the host.
    fn log(&mut self, message: &str);
}

impl<C: TestControl + ?Sized> TestControl for &mut C {
    fn request_skip(&mut self) {
        (**self).request_skip();
    }

    fn mark_failed(&mut self) {
        (**self).mark_failed();
    }

    fn failed(&self) -> bool {
        (**self).failed()
    }

    fn log(&mut self, message: &str) {
        (**self).log(message);
    }
}

/// In-memory control handle that records every call. Useful for testing fixtures and hosts.
///
/// `request_skip` returns normally instead of unwinding.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingControl {
    pub skip_requests: usize,
    pub failed: bool,
    pub logs: Vec<String>,
}

impl RecordingControl {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TestControl for RecordingControl {
    fn request_skip(&mut self) {
        self.skip_requests += 1;
    }

    fn mark_failed(&mut self) {
        self.failed = true;
    }

    fn failed(&self) -> bool {
        self.failed
    }

    fn log(&mut self, message: &str) {
        self.logs.push(message.to_string());
    }
}
