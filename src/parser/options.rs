use crate::parser::IndentUnit;

/// How a listing's indentation and directory markers should be read.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub indent_unit: IndentUnit,
    /// Number of indent units per nesting level. Zero is clamped to one.
    pub indent_size: usize,
    /// When set, only entries ending in `/` are directories; otherwise a
    /// directory is any entry that does not look like it has a file
    /// extension.
    pub dirs_end_with_slash: bool,
}

impl ParseOptions {
    pub fn level_of(&self, line: &str) -> usize {
        self.indent_unit.count_in(line) / self.indent_size.max(1)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            indent_unit: IndentUnit::Tab,
            indent_size: 1,
            dirs_end_with_slash: false,
        }
    }
}
