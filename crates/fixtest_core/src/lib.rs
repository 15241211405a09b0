//! Provide the vocabulary and checksum helpers shared by the fixtest generator and runtime.
//!
//! The generator uses these to decide which methods become test cases and to bake a checksum into the
//! dispatcher it writes. The runtime recomputes the same checksum at test time to detect a stale dispatcher.
//!
//! ## Notes
//!
//! - Both sides must agree byte-for-byte on the checksum, so [`checksum::checksum`] is the only implementation.
//! - No global state lives here.

#![deny(clippy::unwrap_used)]

pub mod checksum;
pub mod conventions;

pub use checksum::{ChecksumError, checksum};
pub use conventions::{CaseKind, GENERATED_FILE_NAME};
