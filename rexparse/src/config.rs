/// Limits applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// How deeply groups may nest. Alternatives do not open levels. Each level costs stack, and
    /// the default fits on a 2 MiB thread in debug builds.
    pub max_depth: usize,
}

impl ParserConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
