//! Pipeline state: tables, resolver, indexes and writer bundled into one
//! object so a run has a defined owner and a defined end.

use std::path::Path;

use tracing::{info, warn};

use crate::authorship::AuthorshipResolver;
use crate::config::PipelineConfig;
use crate::index::IndexSet;
use crate::script::ScriptConverter;
use crate::tables::{OutlineMap, Whitelist};
use crate::writer::{self, ShardedWriter, MAX_KEYS_PER_INDEX_FILE};
use crate::PipelineError;

#[derive(Debug, Default, Clone)]
pub struct RunStats {
    pub instances: usize,
    pub persons: usize,
    pub record_files: usize,
    pub index_files: usize,
}

pub struct Pipeline<'a> {
    pub(crate) config: PipelineConfig,
    pub(crate) converter: &'a dyn ScriptConverter,
    pub(crate) whitelist: Whitelist,
    pub(crate) outline_map: OutlineMap,
    pub(crate) resolver: AuthorshipResolver,
    pub(crate) indexes: IndexSet,
    pub(crate) writer: ShardedWriter,
    pub(crate) stats: RunStats,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: PipelineConfig,
        converter: &'a dyn ScriptConverter,
    ) -> Result<Self, PipelineError> {
        let whitelist = Whitelist::load(&config.whitelist_path)?;
        info!("loaded {} whitelist entries", whitelist.len());

        let outline_map = if config.outline_map_path.exists() {
            OutlineMap::load(&config.outline_map_path)?
        } else {
            warn!(
                "no outline mapping table at {}; instances without embedded parts get none",
                config.outline_map_path.display()
            );
            OutlineMap::default()
        };

        Ok(Self {
            resolver: AuthorshipResolver::new(&config.source_root),
            writer: ShardedWriter::new(&config.out_root, config.shard_digits),
            config,
            converter,
            whitelist,
            outline_map,
            indexes: IndexSet::default(),
            stats: RunStats::default(),
        })
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn indexes(&self) -> &IndexSet {
        &self.indexes
    }

    pub fn resolver(&self) -> &AuthorshipResolver {
        &self.resolver
    }

    /// Write everything out: record shards, the named indexes, the
    /// root-title map.
    pub fn finish(mut self) -> Result<RunStats, PipelineError> {
        std::fs::create_dir_all(&self.config.out_root).map_err(|source| PipelineError::Io {
            path: self.config.out_root.clone(),
            source,
        })?;

        self.stats.record_files = self.writer.flush()?;
        for (name, index) in [
            ("persons", &self.indexes.persons),
            ("works", &self.indexes.works),
            ("workparts", &self.indexes.workparts),
        ] {
            self.stats.index_files += writer::write_index(
                &self.config.out_root,
                name,
                index,
                MAX_KEYS_PER_INDEX_FILE,
            )?;
        }
        writer::write_root_titles(&self.config.out_root, &self.indexes.root_titles)?;

        info!(
            "flushed {} record files, {} index files",
            self.stats.record_files, self.stats.index_files
        );
        Ok(self.stats)
    }
}

/// Entity local name of a document path (its file stem).
pub(crate) fn local_name_of(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|stem| stem.to_str())
}
