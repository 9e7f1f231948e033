//! Creation of the parsed tree on disk: directories first, then empty
//! files, all idempotently under a configurable root folder.

mod materializer;

pub use materializer::{MaterializeError, Materializer};
