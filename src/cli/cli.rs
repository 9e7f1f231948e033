use std::path::PathBuf;

use clap::Parser;

use crate::cli::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Create directories and empty files from an indented tree listing"
)]
pub struct Cli {
    /// Path to the file containing the tree listing
    pub file: PathBuf,

    /// Root folder under which the structure is created
    #[clap(long, short, default_value = "project")]
    pub root: PathBuf,

    /// Indentation unit: the literal string "tab" selects a tab character,
    /// any other value is used verbatim. (Warning: some editors insert
    /// spaces when you press tab!)
    #[clap(long, default_value = " ")]
    pub identchar: String,

    /// Number of indentation units per nesting level
    #[clap(long, default_value_t = 1)]
    pub identsize: usize,

    /// Treat only entries ending in '/' as directories, instead of
    /// inferring directories from the absence of a file extension
    #[clap(long)]
    pub slashes: bool,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
