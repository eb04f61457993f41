//! Pipeline configuration.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Corpus root: contains `instances/`, `works/`, `persons/`, `outlines/`.
    pub source_root: PathBuf,
    pub out_root: PathBuf,
    /// Whitelist table (work id → access level, open-access flag, …).
    pub whitelist_path: PathBuf,
    /// Instance → outline document mapping table.
    pub outline_map_path: PathBuf,
    pub verbose: bool,
    /// Only emit instances whose access tier is open.
    pub open_access_only: bool,
    /// Drop instances flagged as restricted in the configured region.
    pub restricted_region: bool,
    /// Hex digits of the output shard key; 0 writes one file per entity.
    pub shard_digits: usize,
}

impl PipelineConfig {
    pub fn new(source_root: impl Into<PathBuf>, out_root: impl Into<PathBuf>) -> Self {
        let source_root = source_root.into();
        Self {
            whitelist_path: source_root.join("whitelist.csv"),
            outline_map_path: source_root.join("outlines.csv"),
            source_root,
            out_root: out_root.into(),
            verbose: false,
            open_access_only: false,
            restricted_region: false,
            shard_digits: 2,
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }
}
