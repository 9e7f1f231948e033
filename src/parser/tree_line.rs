use derive_more::Display;

use crate::parser::ParseOptions;

/// Characters trimmed from both ends of a line to recover the bare item
/// name: whitespace, list hyphens, and the box-drawing connectors left
/// behind by `tree` output.
const CONNECTOR_TRIM_SET: &[char] = &[' ', '\t', '-', '└', '─', '├', '│'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntryKind {
    #[display("directory")]
    Directory,
    #[display("file")]
    File,
}

/// A single accepted listing line: its nesting level, the cleaned item
/// name, and whether it names a directory or a file. Directory names are
/// normalized to end with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub level: usize,
    pub name: String,
    pub kind: EntryKind,
}

impl TreeLine {
    /// Classifies a non-blank line that already had trailing whitespace
    /// removed. Returns `None` when nothing remains after stripping the
    /// connector glyphs.
    pub fn classify(line: &str, options: &ParseOptions) -> Option<TreeLine> {
        let level = options.level_of(line);
        let name = line.trim_matches(CONNECTOR_TRIM_SET);
        if name.is_empty() {
            return None;
        }

        let (name, kind) = if options.dirs_end_with_slash {
            let kind = match name.ends_with('/') {
                true => EntryKind::Directory,
                false => EntryKind::File,
            };
            (name.to_string(), kind)
        } else if looks_like_file(name) {
            (name.to_string(), EntryKind::File)
        } else if name.ends_with('/') {
            (name.to_string(), EntryKind::Directory)
        } else {
            // Normalize directory names to a single trailing slash.
            (format!("{name}/"), EntryKind::Directory)
        };

        Some(TreeLine { level, name, kind })
    }
}

/// An entry "looks like" a file when it ends in a dot followed by one to
/// four ASCII letters, the shape of common file extensions. Everything
/// else is assumed to be a directory.
fn looks_like_file(name: &str) -> bool {
    match name.rfind('.') {
        Some(dot) => {
            let suffix = &name[dot + 1..];
            (1..=4).contains(&suffix.len()) && suffix.bytes().all(|b| b.is_ascii_alphabetic())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn extension_mode() -> ParseOptions {
        ParseOptions::default()
    }

    fn slash_mode() -> ParseOptions {
        ParseOptions {
            dirs_end_with_slash: true,
            ..ParseOptions::default()
        }
    }

    #[rstest]
    #[case("file.ts", EntryKind::File, "file.ts")]
    #[case("archive.tar.gz", EntryKind::File, "archive.tar.gz")]
    #[case(".env", EntryKind::File, ".env")]
    #[case("file.toolong", EntryKind::Directory, "file.toolong/")]
    #[case("node_modules", EntryKind::Directory, "node_modules/")]
    #[case("file.v2", EntryKind::Directory, "file.v2/")]
    #[case("already/", EntryKind::Directory, "already/")]
    fn extension_heuristic_classifies_entries(
        #[case] input: &str,
        #[case] kind: EntryKind,
        #[case] name: &str,
    ) {
        let line = TreeLine::classify(input, &extension_mode()).expect("Line should classify");
        assert_eq!(line.kind, kind);
        assert_eq!(line.name, name);
    }

    #[rstest]
    #[case("src/", EntryKind::Directory)]
    #[case("src", EntryKind::File)]
    #[case("noext", EntryKind::File)]
    fn slash_mode_only_trusts_trailing_slashes(#[case] input: &str, #[case] kind: EntryKind) {
        let line = TreeLine::classify(input, &slash_mode()).expect("Line should classify");
        assert_eq!(line.kind, kind);
    }

    #[test]
    fn connector_glyphs_are_stripped_from_the_name() {
        let line = TreeLine::classify("│   ├── main.rs", &extension_mode())
            .expect("Line should classify");
        assert_eq!(line.name, "main.rs");
        assert_eq!(line.kind, EntryKind::File);
    }

    #[test]
    fn tab_indent_sets_the_level() {
        let line =
            TreeLine::classify("\t\tnested.md", &extension_mode()).expect("Line should classify");
        assert_eq!(line.level, 2);
    }

    #[test]
    fn line_of_only_connectors_is_rejected() {
        assert_eq!(TreeLine::classify("│   ├──", &extension_mode()), None);
        assert_eq!(TreeLine::classify("----", &extension_mode()), None);
    }
}
