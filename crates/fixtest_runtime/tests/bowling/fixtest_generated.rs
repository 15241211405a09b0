// Code generated by fixtest 0.1.0. DO NOT EDIT.
// Regenerate with `fixtest generate` after changing any fixture in this directory.

#![allow(dead_code, non_snake_case, clippy::all)]
const CHECKSUM: &str = "a90a88c854abe93259865d5873367d9968581ae455c32b19dbe9c697f0c0bc2a";
const FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/bowling");
/// Stop the test binary if the fixtures changed since this file was generated.
fn guard() {
    static CHECKED: ::std::sync::Once = ::std::sync::Once::new();
    CHECKED.call_once(|| ::fixtest_runtime::guard::validate(FIXTURE_DIR, CHECKSUM));
}
mod game_fixture_bowling_game_fixture {
    type Subject = super::super::game_fixture::BowlingGameFixture;
    #[test]
    fn test_gutter_game() {
        super::guard();
        ::fixtest_runtime::run_test(
            "BowlingGameFixture::test_gutter_game",
            |t| {
                let mut fx = ::fixtest_runtime::Fixture::new(
                    t,
                    ::fixtest_runtime::RunConfig::global().clone(),
                );
                let mut fixture = Subject::setup(&mut fx);
                fixture.test_gutter_game(&mut fx);
                fixture.teardown(&mut fx);
                fx.finalize();
            },
        );
    }
    #[test]
    fn test_all_ones() {
        super::guard();
        ::fixtest_runtime::run_test(
            "BowlingGameFixture::test_all_ones",
            |t| {
                let mut fx = ::fixtest_runtime::Fixture::new(
                    t,
                    ::fixtest_runtime::RunConfig::global().clone(),
                );
                let mut fixture = Subject::setup(&mut fx);
                fixture.test_all_ones(&mut fx);
                fixture.teardown(&mut fx);
                fx.finalize();
            },
        );
    }
    #[test]
    fn test_spare() {
        super::guard();
        ::fixtest_runtime::run_test(
            "BowlingGameFixture::test_spare",
            |t| {
                let mut fx = ::fixtest_runtime::Fixture::new(
                    t,
                    ::fixtest_runtime::RunConfig::global().clone(),
                );
                let mut fixture = Subject::setup(&mut fx);
                fixture.test_spare(&mut fx);
                fixture.teardown(&mut fx);
                fx.finalize();
            },
        );
    }
    #[test]
    fn test_strike() {
        super::guard();
        ::fixtest_runtime::run_test(
            "BowlingGameFixture::test_strike",
            |t| {
                let mut fx = ::fixtest_runtime::Fixture::new(
                    t,
                    ::fixtest_runtime::RunConfig::global().clone(),
                );
                let mut fixture = Subject::setup(&mut fx);
                fixture.test_strike(&mut fx);
                fixture.teardown(&mut fx);
                fx.finalize();
            },
        );
    }
    #[test]
    fn skip_test_split_bonus() {
        super::guard();
        ::fixtest_runtime::run_test(
            "BowlingGameFixture::skip_test_split_bonus",
            |t| {
                let mut fx = ::fixtest_runtime::Fixture::new(
                    t,
                    ::fixtest_runtime::RunConfig::global().clone(),
                );
                let _ = Subject::skip_test_split_bonus;
                fx.skip("Skipping test case: 'skip_test_split_bonus'");
                fx.finalize();
            },
        );
    }
    #[test]
    #[ignore = "long-running fixture test"]
    fn long_test_perfect_game() {
        super::guard();
        ::fixtest_runtime::run_test(
            "BowlingGameFixture::long_test_perfect_game",
            |t| {
                let mut fx = ::fixtest_runtime::Fixture::new(
                    t,
                    ::fixtest_runtime::RunConfig::global().clone(),
                );
                let mut fixture = Subject::setup(&mut fx);
                fixture.long_test_perfect_game(&mut fx);
                fixture.teardown(&mut fx);
                fx.finalize();
            },
        );
    }
}
