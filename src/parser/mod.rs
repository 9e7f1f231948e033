//! Parsing of indented tree listings into ordered directory and file lists.
//!
//! The parser walks the listing line by line, derives each line's nesting
//! level from its indentation, and maintains a stack of the currently open
//! ancestor directories to assemble full relative paths. Malformed lines
//! are skipped with a notice rather than failing the parse.

mod indent;
mod options;
mod path_stack;
mod skip_notice;
mod tree_line;
mod tree_parser;

pub use indent::IndentUnit;
pub use options::ParseOptions;
pub use tree_line::{EntryKind, TreeLine};
pub use tree_parser::{ParsedTree, TreeParseError, TreeParser};
