use std::fs;
use std::path::{Path, PathBuf};

use snafu::prelude::*;
use tracing::{debug, trace};

use crate::ext::BestEffortPathExt;
use crate::parser::path_stack::PathStack;
use crate::parser::skip_notice::{SkipReason, skip_notice};
use crate::parser::{EntryKind, ParseOptions, TreeLine};

/// The two ordered outputs of a parse: relative directory paths (each
/// ending in `/`) and relative file paths. Every ancestor of a path
/// appears in `directories` at or before the first path built from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTree {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

pub struct TreeParser {
    options: ParseOptions,
}

impl TreeParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn parse_file(&self, path: &Path) -> Result<ParsedTree, TreeParseError> {
        debug!("Opening listing file: {}", path.best_effort_path_display());
        let contents = fs::read_to_string(path).context(ReadSnafu {
            file_path: path.to_path_buf(),
        })?;
        debug!("Read listing file: {} bytes", contents.len());
        Ok(self.parse(&contents))
    }

    /// Walks the listing line by line. Anomalous lines are skipped with a
    /// notice; parsing never fails.
    pub fn parse(&self, contents: &str) -> ParsedTree {
        let mut stack = PathStack::default();
        let mut tree = ParsedTree::default();
        let mut accepted = 0usize;

        for (index, raw) in contents.lines().enumerate() {
            let line_number = index + 1;
            let line = raw.trim_end();

            if line.is_empty() {
                skip_notice(line_number, SkipReason::Blank);
                continue;
            }
            if line.contains(',') {
                skip_notice(line_number, SkipReason::Comma);
                continue;
            }

            // The first accepted line names the root; a leading "./"
            // would otherwise nest the whole tree under itself.
            let line = match accepted {
                0 => line.strip_prefix("./").unwrap_or(line),
                _ => line,
            };
            accepted += 1;

            match TreeLine::classify(line, &self.options) {
                Some(entry) => self.record(entry, &mut stack, &mut tree),
                None => skip_notice(line_number, SkipReason::BareConnectors),
            }
        }

        tree
    }

    fn record(&self, entry: TreeLine, stack: &mut PathStack, tree: &mut ParsedTree) {
        trace!("Recording {} '{}' at level {}", entry.kind, entry.name, entry.level);
        match (entry.level, entry.kind) {
            (0, EntryKind::Directory) => {
                stack.reset_to(entry.name);
                tree.directories.push(stack.join());
            }
            // A root-level file carries no ancestor prefix and leaves the
            // stack untouched.
            (0, EntryKind::File) => tree.files.push(entry.name),
            (level, EntryKind::Directory) => {
                if level != stack.depth() {
                    stack.truncate(level);
                }
                stack.push(entry.name);
                tree.directories.push(stack.join());
            }
            (level, EntryKind::File) => {
                stack.truncate(level);
                tree.files.push(stack.join_with(&entry.name));
            }
        }
    }
}

#[derive(Debug, Snafu)]
pub enum TreeParseError {
    #[snafu(display("Failed to read the listing file: {}", file_path.best_effort_path_display()))]
    ReadError {
        file_path: PathBuf,
        source: std::io::Error,
    },
}
