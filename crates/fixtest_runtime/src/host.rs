//! [`TestControl`] for the standard libtest harness (`cargo test`).
//!
//! libtest has no skip state and reports failure by panicking, so [`run_test`] provides both: a skip request unwinds
//! out of the test body with a private payload that `run_test` catches, and a failed control turns into a panic once
//! the body has returned.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use crate::control::TestControl;

/// Unwind payload carried by [`LibtestControl::request_skip`].
struct SkipRequested;

#[derive(Debug)]
struct HostState {
    name: String,
    failed: Cell<bool>,
}

/// Cheap, cloneable handle to one running libtest test.
#[derive(Debug, Clone)]
pub struct LibtestControl {
    state: Rc<HostState>,
}

impl LibtestControl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: Rc::new(HostState {
                name: name.into(),
                failed: Cell::new(false),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }
}

impl TestControl for LibtestControl {
    /// Unwinds immediately; only [`run_test`] or [`execute`] may be on the stack above.
    fn request_skip(&mut self) {
        panic::resume_unwind(Box::new(SkipRequested));
    }

    fn mark_failed(&mut self) {
        self.state.failed.set(true);
    }

    fn failed(&self) -> bool {
        self.state.failed.get()
    }

    fn log(&mut self, message: &str) {
        println!("{message}");
    }
}

/// How a test body ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
}

/// Run `body` with a fresh control and report how it ended.
///
/// A skip request ends the body early; if the control was already marked failed, the outcome is still
/// [`Outcome::Failed`]. Panics other than a skip request are resumed unchanged.
pub fn execute<F>(name: &str, body: F) -> Outcome
where
    F: FnOnce(LibtestControl),
{
    let control = LibtestControl::new(name);
    let result = panic::catch_unwind(AssertUnwindSafe(|| body(control.clone())));

    let outcome = match result {
        Ok(()) if control.failed() => Outcome::Failed,
        Ok(()) => Outcome::Passed,
        // A failure recorded before the skip still fails the test.
        Err(payload) if payload.is::<SkipRequested>() && control.failed() => Outcome::Failed,
        Err(payload) if payload.is::<SkipRequested>() => Outcome::Skipped,
        Err(payload) => panic::resume_unwind(payload),
    };
    tracing::debug!(test = name, ?outcome, "fixture case finished");
    outcome
}

/// Run `body` as a libtest test: skips pass with a `SKIPPED` note, failures panic.
///
/// # Panics
///
/// Panics if the control was marked failed, or if `body` panicked.
pub fn run_test<F>(name: &str, body: F)
where
    F: FnOnce(LibtestControl),
{
    match execute(name, body) {
        Outcome::Passed => {}
        Outcome::Skipped => println!("{name}: SKIPPED"),
        Outcome::Failed => panic!("{name} failed"),
    }
}
