//! Extraction, cross-entity resolution and index building.
//!
//! One full pass over the corpus turns per-entity graph documents into a
//! denormalized, sharded JSON document store plus inverted title indexes:
//!
//! - [`labels`]: multilingual display-label extraction.
//! - [`access`]: per-instance visibility tier from the whitelist table.
//! - [`authorship`]: instance → work → contributor-role resolution, with the
//!   person → instances reverse index that gates person emission.
//! - [`parts`]: reconstruction of the ordered structural hierarchy of an
//!   instance, embedded or outline-sourced.
//! - [`context`] / [`instance`] / [`person`]: the per-document inspectors and
//!   the explicit pipeline state they share (no module globals).
//! - [`writer`]: shard-bucketed record files and the rotating index files.
//!
//! The run is a sequential batch: instances, work-directory instances,
//! persons, one flush. Per-document failures are absorbed by the driver.

pub mod access;
pub mod authorship;
pub mod config;
pub mod context;
pub mod dates;
pub mod index;
pub mod instance;
pub mod labels;
pub mod parts;
pub mod person;
pub mod script;
pub mod tables;
pub mod writer;

pub use config::PipelineConfig;
pub use context::{Pipeline, RunStats};
pub use script::{PassthroughConverter, ScriptConverter};

use litepack_graph::GraphError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The instance has no whitelist entry. Not a failure of the run: the
    /// driver skips the document without parsing it.
    #[error("instance {0} is not whitelisted")]
    NotWhitelisted(String),

    #[error("failed to read table {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}
