//! Layering guardrails to keep the generator from linking the fixture runtime.
//!
//! The generator (`fixtest` crate) may only use `fixtest_runtime` as a **dev-dependency** (for end-to-end tests).
//! Generated dispatchers call the runtime; the generator itself only emits paths to it. This test scans the root
//! `Cargo.toml` and fails if `fixtest_runtime` appears in `[dependencies]`.

#[test]
fn generator_does_not_depend_on_runtime_in_main_dependencies() {
    let manifest = include_str!("../Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            // Any new section after `[dependencies]` ends the scan window.
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if line_no_comment.starts_with("fixtest_runtime") {
            panic!("`fixtest_runtime` must not appear in [dependencies]; use [dev-dependencies] instead");
        }
    }
}

#[test]
fn core_crate_stays_dependency_light() {
    let manifest = include_str!("../crates/fixtest_core/Cargo.toml");
    for forbidden in ["syn", "quote", "clap", "fixtest_runtime"] {
        assert!(
            !manifest.lines().any(|l| l.trim_start().starts_with(&format!("{forbidden} "))),
            "`fixtest_core` is shared by the generator and every test binary; it must not depend on `{forbidden}`"
        );
    }
}
