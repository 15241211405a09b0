//! Bowling fixtures driven by a generated dispatcher.
//!
//! After changing any file in this directory, regenerate the dispatcher with
//! `fixtest generate crates/fixtest_runtime/tests/bowling`.

mod fixtest_generated;
mod game;
mod game_fixture;
