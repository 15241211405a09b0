#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        // Parse errors come back as diagnostics; rendering them maps syn spans to byte offsets.
        let mut fixtures = Vec::new();
        if let Err(err) = fixtest::generator::discovery::discover_source(Path::new("fuzz_fixture.rs"), source, &mut fixtures) {
            let _ = fixtest::generator::error::render(err);
        }
    }
});
