use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::materializer::{MaterializeError, Materializer};
use crate::parser::{TreeParseError, TreeParser};

pub struct Application;

impl Application {
    pub fn run(config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let config: RuntimeConfig = config.into();
        debug!("Runtime configuration: {:?}", config);

        let parser = TreeParser::new(config.parse_options());
        let tree = parser.parse_file(&config.tree_file).context(ParseSnafu)?;
        info!(
            "Parsed {} directories and {} files from the listing",
            tree.directories.len(),
            tree.files.len()
        );

        Materializer::new(config.root)
            .materialize(&tree)
            .context(MaterializeSnafu)?;

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while parsing the listing"))]
    ParseError { source: TreeParseError },
    #[snafu(display("Critical failure encountered while creating the tree"))]
    MaterializeError { source: MaterializeError },
}
