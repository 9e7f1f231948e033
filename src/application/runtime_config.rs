use std::path::PathBuf;

use crate::cli::Cli;
use crate::parser::{IndentUnit, ParseOptions};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub tree_file: PathBuf,
    pub root: PathBuf,
    pub indent_unit: IndentUnit,
    pub indent_size: usize,
    pub dirs_end_with_slash: bool,
}

impl RuntimeConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            indent_unit: self.indent_unit.clone(),
            indent_size: self.indent_size,
            dirs_end_with_slash: self.dirs_end_with_slash,
        }
    }
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            tree_file: cli.file,
            root: cli.root,
            indent_unit: IndentUnit::from_cli_value(&cli.identchar),
            indent_size: cli.identsize,
            dirs_end_with_slash: cli.slashes,
        }
    }
}
