//! Parser configuration.

use sapling_syntax::Dialect;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Dialect governing tokenization, operators and statement rules.
    pub dialect: Dialect,
    /// Maximum nesting of parentheses, call arguments and prefix operators.
    /// Deeper input degrades instead of recursing further.
    pub max_depth: usize,
    /// Words accepted as declaration types on top of the dialect's own set.
    pub extra_type_keywords: Vec<String>,
    /// Skip lines starting with `//` or `#`.
    pub strip_comments: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Expression,
            max_depth: 128,
            extra_type_keywords: Vec::new(),
            strip_comments: true,
        }
    }
}

impl ParseConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration for `dialect`.
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self::new().dialect(dialect)
    }

    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Accept `word` as a declaration type.
    pub fn type_keyword(mut self, word: impl Into<String>) -> Self {
        self.extra_type_keywords.push(word.into());
        self
    }

    pub fn strip_comments(mut self, strip: bool) -> Self {
        self.strip_comments = strip;
        self
    }
}
