use std::fs;
use std::path::PathBuf;

use snafu::prelude::*;
use tracing::{debug, info};

use crate::ext::BestEffortPathExt;
use crate::parser::ParsedTree;

pub struct Materializer {
    root: PathBuf,
}

impl Materializer {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Creates every directory entry, then every file entry, under the
    /// root folder. Directory creation is idempotent and fills in missing
    /// intermediate segments; files are created empty, truncating any
    /// existing content. The first filesystem failure aborts the run with
    /// no rollback of what was already created.
    pub fn materialize(&self, tree: &ParsedTree) -> Result<(), MaterializeError> {
        info!(
            "Creating {} directories and {} files under {}",
            tree.directories.len(),
            tree.files.len(),
            self.root.best_effort_path_display()
        );
        fs::create_dir_all(&self.root).context(CreateRootSnafu {
            path: self.root.clone(),
        })?;

        for directory in &tree.directories {
            let path = self.root.join(directory);
            debug!("Creating directory {}", path.display());
            fs::create_dir_all(&path).context(CreateDirSnafu { path: path.clone() })?;
        }

        // Parents exist by now: every ancestor was emitted as a directory
        // entry, or the file sits directly under the root.
        for file in &tree.files {
            let path = self.root.join(file);
            debug!("Creating file {}", path.display());
            fs::File::create(&path).context(CreateFileSnafu { path: path.clone() })?;
        }

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum MaterializeError {
    #[snafu(display("Failed to create the root folder {}", path.best_effort_path_display()))]
    CreateRootError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create directory {}", path.best_effort_path_display()))]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create file {}", path.best_effort_path_display()))]
    CreateFileError {
        path: PathBuf,
        source: std::io::Error,
    },
}
