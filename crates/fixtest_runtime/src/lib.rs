//! Runtime for fixtest-generated dispatchers.
//!
//! A fixture author writes a struct with a `setup` constructor and many `test_*` methods. The generated dispatcher
//! turns each method into a `#[test]` that builds a [`Fixture`] around the host's [`TestControl`] handle, runs the
//! method, and calls [`Fixture::finalize`] exactly once.
//!
//! The [`TestControlAdapter`] inside every fixture buffers log output and defers skip requests until finalize:
//! output is shown only when the test failed or verbose mode is on, and a skip unwinds only after the whole case
//! (including teardown) has run.
//!
//! ## Panic Policy
//!
//! - Library code returns `Result` or logs; it does not `unwrap`.
//! - [`host::LibtestControl`] unwinds on purpose: skipping and failing a libtest test is done by unwinding.
//! - [`guard::validate`] exits the process on a stale dispatcher.

#![deny(clippy::unwrap_used)]

pub mod adapter;
pub mod config;
pub mod control;
pub mod fixture;
pub mod guard;
pub mod host;
pub mod should;

pub use adapter::TestControlAdapter;
pub use config::{CapturedOutput, OutputSink, RunConfig};
pub use control::TestControl;
pub use fixture::Fixture;
pub use host::{LibtestControl, run_test};
