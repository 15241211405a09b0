//! Fixture naming vocabulary.
//!
//! This module centralizes the method and type spellings the generator recognizes so the generator, the CLI and
//! the runtime never compare against ad-hoc string literals.

/// File the generator writes into a fixture directory. It is excluded from the directory checksum.
pub const GENERATED_FILE_NAME: &str = "fixtest_generated.rs";

/// Type-name suffix that marks an `impl` block as a fixture.
pub const FIXTURE_SUFFIX: &str = "Fixture";

/// Associated constructor run before every test case: `fn setup(fx: &mut Fixture) -> Self`.
pub const SETUP_METHOD: &str = "setup";

/// Method run after every test case: `fn teardown(&mut self, fx: &mut Fixture)`.
pub const TEARDOWN_METHOD: &str = "teardown";

/// Reason attached to `#[ignore]` on long-running cases.
pub const LONG_IGNORE_REASON: &str = "long-running fixture test";

/// How a discovered test method is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CaseKind {
    /// `test_*`: runs normally.
    Run,
    /// `skip_test_*`: generated, then skipped through the fixture without running the body.
    Skip,
    /// `long_test_*`: generated with `#[ignore]`, run with `cargo test -- --ignored`.
    Long,
    /// `focus_test_*`: when present, only focused cases of that fixture run.
    Focus,
}

/// Metadata entry for a case prefix.
#[derive(Debug, Clone, Copy)]
pub struct CasePrefix {
    pub kind: CaseKind,
    pub prefix: &'static str,
    pub description: &'static str,
}

/// Registry of recognized case prefixes.
///
/// Longer prefixes come first: `skip_test_x` must not be read as a plain `test_` case.
pub const CASE_PREFIXES: &[CasePrefix] = &[
    CasePrefix {
        kind: CaseKind::Skip,
        prefix: "skip_test_",
        description: "Generated but skipped.",
    },
    CasePrefix {
        kind: CaseKind::Long,
        prefix: "long_test_",
        description: "Ignored unless running ignored tests.",
    },
    CasePrefix {
        kind: CaseKind::Focus,
        prefix: "focus_test_",
        description: "Runs exclusively within its fixture.",
    },
    CasePrefix {
        kind: CaseKind::Run,
        prefix: "test_",
        description: "Runs normally.",
    },
];

/// Classify a method name, returning `None` for helpers that are not test cases.
pub fn classify(method: &str) -> Option<CaseKind> {
    CASE_PREFIXES
        .iter()
        .find(|p| method.len() > p.prefix.len() && method.starts_with(p.prefix))
        .map(|p| p.kind)
}

/// Canonical prefix spelling for a case kind.
pub fn prefix(kind: CaseKind) -> &'static str {
    CASE_PREFIXES
        .iter()
        .find(|p| p.kind == kind)
        .map(|p| p.prefix)
        .unwrap_or("test_")
}

/// Lower-case label used in listings.
pub fn label(kind: CaseKind) -> &'static str {
    match kind {
        CaseKind::Run => "run",
        CaseKind::Skip => "skip",
        CaseKind::Long => "long",
        CaseKind::Focus => "focus",
    }
}

/// Whether a type name marks a fixture.
pub fn is_fixture_type(name: &str) -> bool {
    name.len() > FIXTURE_SUFFIX.len() && name.ends_with(FIXTURE_SUFFIX)
}

/// Convert a `CamelCase` type name into the `snake_case` module name used in generated code.
pub fn module_name(type_name: &str) -> String {
    let mut out = String::with_capacity(type_name.len() + 4);
    let mut prev_lower_or_digit = false;
    for ch in type_name.chars() {
        if ch.is_uppercase() {
            if prev_lower_or_digit {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower_or_digit = false;
        } else {
            out.push(ch);
            prev_lower_or_digit = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}
