#![forbid(unsafe_code)]
//! fixtest: gunit-style fixtures for `cargo test`
//!
//! This crate provides the `fixtest` generator and CLI. Fixture authors write a `*Fixture` type with a `setup`
//! constructor and `test_*` methods; the generator writes a dispatcher module that turns every method into a
//! libtest `#[test]`. The runtime those tests call lives in `fixtest_runtime`, and the naming vocabulary and
//! directory checksum shared by both sides live in `fixtest_core`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod generator;
pub mod version;

pub use generator::{GenerateConfig, GenerateError, Generated, discover, generate};
