//! Configuration types for TypeScript emission.

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to export the generated declarations
    pub(crate) export: bool,
    /// Creation code to embed in the bytecode constant; empty when not embedded
    pub(crate) bytecode: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: true,
            bytecode: None,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to export declarations.
    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    /// Embed the given creation code in the `<NAME>_BYTECODE` constant.
    pub fn bytecode(mut self, hex: impl Into<String>) -> Self {
        self.bytecode = Some(hex.into());
        self
    }
}
