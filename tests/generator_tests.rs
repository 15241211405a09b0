//! Generator tests against the bowling fixtures in `crates/fixtest_runtime/tests/bowling`.
//!
//! That directory is a real integration test of the runtime crate, so the dispatcher checked in there must stay in
//! sync with its sources. These tests catch a forgotten `fixtest generate` before the runtime tests do.
//!
//! Review listing changes: `cargo insta review`

use std::fs;
use std::path::PathBuf;

use fixtest::generator::{self, Freshness, GenerateConfig, Listing};
use fixtest_core::GENERATED_FILE_NAME;

fn bowling_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/crates/fixtest_runtime/tests/bowling"))
}

/// The `CHECKSUM` constant recorded in a dispatcher.
fn recorded_checksum(dispatcher: &str) -> Option<&str> {
    let line = dispatcher.lines().find(|l| l.starts_with("const CHECKSUM"))?;
    line.split('"').nth(1)
}

#[test]
fn test_bowling_listing() {
    let fixtures = generator::discover(&bowling_dir()).expect("discovery failed");
    let listing = Listing(&fixtures).to_string();
    insta::assert_snapshot!("bowling_listing", listing);
}

#[test]
fn test_checked_in_dispatcher_matches_sources() {
    let dir = bowling_dir();
    let dispatcher = fs::read_to_string(dir.join(GENERATED_FILE_NAME)).expect("dispatcher missing");
    let checksum = fixtest_core::checksum(&dir).expect("checksum failed");
    assert_eq!(recorded_checksum(&dispatcher), Some(checksum.as_str()));

    let generated = generator::generate(&dir, &GenerateConfig::default()).expect("generate failed");
    assert_eq!(generated.freshness().expect("freshness"), Freshness::UpToDate);
}

#[test]
fn test_generate_bowling_is_manifest_relative() {
    let generated = generator::generate(&bowling_dir(), &GenerateConfig::default()).expect("generate failed");
    assert_eq!(recorded_checksum(&generated.code), Some(generated.checksum.as_str()));
    assert!(generated.code.contains(r#"env!("CARGO_MANIFEST_DIR")"#));
    assert!(generated.code.contains(r#""/tests/bowling""#));
    assert_eq!(generated.fixtures.len(), 1);
    assert_eq!(generated.case_count(), 6);
    assert_eq!(generated.path, bowling_dir().join(GENERATED_FILE_NAME));
}

#[test]
fn test_write_then_fresh_and_checksum_unchanged() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("lane_fixture.rs"),
        "pub struct LaneFixture;\n\
         impl LaneFixture {\n    pub fn test_oil(&mut self, _fx: &mut fixtest_runtime::Fixture) {}\n}\n",
    )
    .expect("write fixture");

    let config = GenerateConfig::new().with_manifest_relative(false);
    let generated = generator::generate(dir.path(), &config).expect("generate failed");
    assert_eq!(generated.freshness().expect("freshness"), Freshness::Missing);

    generated.write().expect("write dispatcher");
    assert_eq!(generated.freshness().expect("freshness"), Freshness::UpToDate);
    assert_eq!(fixtest_core::checksum(dir.path()).expect("checksum"), generated.checksum);

    // Adding a fixture file invalidates the dispatcher.
    fs::write(dir.path().join("oil_fixture.rs"), "pub struct OilFixture;\n").expect("write fixture");
    let regenerated = generator::generate(dir.path(), &config).expect("generate failed");
    assert_ne!(regenerated.checksum, generated.checksum);
    assert_eq!(regenerated.freshness().expect("freshness"), Freshness::Stale);
}

#[test]
fn test_generate_reports_parse_errors_with_source() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    fs::write(dir.path().join("broken_fixture.rs"), "impl BrokenFixture {\n    fn test_x(&mut self\n").expect("write");
    let err = generator::generate(dir.path(), &GenerateConfig::default()).expect_err("parse should fail");
    assert!(matches!(err, generator::GenerateError::Parse(_)));
    let rendered = generator::error::render(err);
    assert!(rendered.contains("broken_fixture.rs"), "rendered: {rendered}");
}
