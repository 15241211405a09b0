//! Human-readable listing of discovered fixtures (`fixtest list`).

use std::fmt;

use fixtest_core::conventions;

use super::discovery::{Dispatch, FixtureInfo};

/// Displays every fixture with its constructor, teardown and cases.
pub struct Listing<'a>(pub &'a [FixtureInfo]);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, fixture) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let file = fixture
                .file_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let constructor = if fixture.has_setup { "setup" } else { "default" };
            let teardown = if fixture.has_teardown { ", teardown" } else { "" };
            writeln!(f, "{} ({file}; {constructor}{teardown})", fixture.name)?;

            for case in &fixture.cases {
                let label = match fixture.dispatch(case) {
                    Dispatch::Skip { .. } => "skip",
                    Dispatch::Run { .. } => conventions::label(case.kind),
                };
                writeln!(f, "  {label:<5} {}", case.method)?;
            }
        }
        Ok(())
    }
}
