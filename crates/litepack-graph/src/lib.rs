//! Graph-document boundary for litepack (interop adapter).
//!
//! The extraction pipeline never touches raw TriG syntax; it sees one parsed
//! document at a time through this crate:
//!
//! - [`GraphDoc`]: an addressable set of (subject, predicate, object) triples
//!   with `matching(subject?, predicate?, object?)` pattern queries.
//! - [`shard::shard_key`] / [`shard::document_path`]: the pure
//!   identifier → hash-bucket mapping used on both the read path (locating a
//!   source document) and the write path (bucketing output files).
//! - [`vocab`]: the IRIs of the corpus ontology.
//!
//! The underlying parser is Sophia; swapping it out only touches [`doc`].

pub mod doc;
pub mod shard;
pub mod term;
pub mod vocab;

pub use doc::{GraphDoc, Triple};
pub use term::{Literal, Node, Term};

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The document simply does not exist in the corpus. Callers treat this
    /// as "empty result", not as a failure of the run.
    #[error("document not found: {0}")]
    Missing(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TriG document {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unsupported RDF term form: {0}")]
    Term(String),
}

impl GraphError {
    /// A missing document is a local, recoverable event; everything else is
    /// a real (per-document) failure.
    pub fn is_missing(&self) -> bool {
        matches!(self, GraphError::Missing(_))
    }
}
