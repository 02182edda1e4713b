//! Options controlling a single parse.

use crate::parser::lookups::Associativity;

/// How many statements a source text may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatementMode {
    /// Exactly one statement followed by end of input.
    #[default]
    Single,
    /// Zero or more statements written back to back.
    Repeated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub mode: StatementMode,
    /// Deepest expression nesting accepted before failing with `InputTooComplex`.
    pub max_depth: usize,
    /// Grouping of chained `**`. The grammar groups it to the left.
    pub power_associativity: Associativity,
}

pub const DEFAULT_MAX_DEPTH: usize = 256;

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            mode: StatementMode::Single,
            max_depth: DEFAULT_MAX_DEPTH,
            power_associativity: Associativity::Left,
        }
    }
}

impl ParseOptions {
    pub fn with_mode(mut self, mode: StatementMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_power_associativity(mut self, associativity: Associativity) -> Self {
        self.power_associativity = associativity;
        self
    }
}
