//! Generator configuration.

/// Default crate path generated dispatchers call into.
pub const DEFAULT_RUNTIME_CRATE: &str = "fixtest_runtime";

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Crate name the generated code uses for the runtime (`::<name>::Fixture`, ...)
    pub runtime_crate: String,
    /// Emit the fixture directory relative to `CARGO_MANIFEST_DIR` when a manifest is found above it
    pub manifest_relative: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
            manifest_relative: true,
        }
    }
}

impl GenerateConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime crate name (for re-exports or renamed dependencies)
    pub fn with_runtime_crate(mut self, name: impl Into<String>) -> Self {
        self.runtime_crate = name.into();
        self
    }

    /// Always emit an absolute fixture directory
    pub fn with_manifest_relative(mut self, relative: bool) -> Self {
        self.manifest_relative = relative;
        self
    }
}
