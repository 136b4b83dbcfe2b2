/// Input files processed when none are given on the command line
pub const DEFAULT_INPUTS: [&str; 3] = ["brands.json", "receipts.json", "users.json"];

/// JSON parser used to read input lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParserBackend {
    /// serde_json
    #[default]
    Serde,
    /// simd-json, deserializing into `serde_json::Value`
    Simd,
}

/// Configuration for processing input files
#[derive(Debug, Clone, Default)]
pub struct ProcessConfig {
    pub parser: ParserBackend,
}

impl ProcessConfig {
    pub fn with_parser(mut self, parser: ParserBackend) -> Self {
        self.parser = parser;
        self
    }
}
