//! Parser configuration

/// Default limit on element nesting; fits a 2 MiB thread stack in debug builds
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options controlling how forgiving the parser is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject non-whitespace bytes before the first `<` and anything but
    /// whitespace or comments after the root element
    pub strict: bool,
    /// Deepest element nesting accepted; the root is depth 1
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Lenient options (leading and trailing bytes around the root are ignored)
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Strict options
    pub fn strict() -> Self {
        ParseOptions {
            strict: true,
            ..Self::default()
        }
    }

    /// Override the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
