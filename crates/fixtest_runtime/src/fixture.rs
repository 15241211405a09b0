//! The fixture handle passed to every generated test case.

use std::fmt::{self, Display};
use std::iter;

use crate::adapter::{INDENT, TestControlAdapter};
use crate::config::RunConfig;
use crate::control::TestControl;
use crate::host::LibtestControl;

/// Owns one [`TestControlAdapter`] for the lifetime of a test case.
///
/// Fixture methods receive `&mut Fixture`; the dispatcher calls [`Fixture::finalize`] once the case and its
/// teardown have returned.
#[derive(Debug)]
pub struct Fixture<C: TestControl = LibtestControl> {
    t: TestControlAdapter<C>,
}

impl<C: TestControl> Fixture<C> {
    pub fn new(control: C, config: RunConfig) -> Self {
        Self::from_adapter(TestControlAdapter::new(control, config))
    }

    pub fn from_adapter(t: TestControlAdapter<C>) -> Self {
        Self { t }
    }

    /// Run `assertion(actual, expected)` and record a non-empty result as a failure.
    ///
    /// Returns whether the assertion passed. A failure is logged with its continuation lines nested one level
    /// below the summary line.
    ///
    /// ```
    /// use fixtest_runtime::{Fixture, RunConfig, control::RecordingControl, should};
    ///
    /// let mut control = RecordingControl::new();
    /// let mut fx = Fixture::new(&mut control, RunConfig::new());
    /// assert!(fx.so(&(2 + 2), should::equal, &4));
    /// assert!(!fx.so(&(2 + 2), should::equal, &5));
    /// assert!(fx.failed());
    /// ```
    pub fn so<A, E, S>(&mut self, actual: &A, assertion: impl FnOnce(&A, &E) -> S, expected: &E) -> bool
    where
        A: ?Sized,
        E: ?Sized,
        S: AsRef<str>,
    {
        let failure = assertion(actual, expected);
        let failure = failure.as_ref();
        if failure.is_empty() {
            return true;
        }
        self.t.fail();
        self.t.log(format_args!("{INDENT}{}", nest(failure)));
        false
    }

    /// Record `description` as a failure unless `condition` holds.
    pub fn so_that(&mut self, condition: bool, description: impl Display) -> bool {
        if !condition {
            self.t.fail();
            self.t.log(format_args!("{INDENT}{}", nest(&description.to_string())));
        }
        condition
    }

    pub fn log(&mut self, message: impl Display) {
        self.t.log(message);
    }

    pub fn logf(&mut self, args: fmt::Arguments<'_>) {
        self.t.logf(args);
    }

    pub fn error(&mut self, message: impl Display) {
        self.t.error(message);
    }

    pub fn errorf(&mut self, args: fmt::Arguments<'_>) {
        self.t.errorf(args);
    }

    /// Skip this case once it finishes. The rest of the method, and teardown, still run.
    pub fn skip(&mut self, message: impl Display) {
        self.t.skip(message);
    }

    pub fn skipf(&mut self, args: fmt::Arguments<'_>) {
        self.t.skipf(args);
    }

    pub fn failed(&self) -> bool {
        self.t.failed()
    }

    /// The underlying adapter.
    pub fn t(&self) -> &TestControlAdapter<C> {
        &self.t
    }

    pub fn finalize(self) {
        self.t.finalize();
    }
}

/// Indent levels of a failure's continuation lines: the adapter's entry indent, the summary indent, one more.
const CONTINUATION_DEPTH: usize = 3;

/// The summary line sits two levels deep; continuation lines go one level below it.
fn nest(description: &str) -> String {
    let continuation: String = iter::once('\n').chain(iter::repeat_n(INDENT, CONTINUATION_DEPTH)).collect();
    description.replace('\n', &continuation)
}
