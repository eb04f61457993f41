//! Auxiliary delimited tables: the access whitelist and the
//! instance → outline mapping.

use std::collections::HashMap;
use std::path::Path;

use crate::PipelineError;

#[derive(Debug, Clone)]
pub struct WhitelistEntry {
    pub access_level: String,
    pub open_access: bool,
    pub restricted_in_region: bool,
}

/// Work id → access record. An instance whose work has no entry here is
/// filtered out before its document is even parsed.
#[derive(Debug, Default)]
pub struct Whitelist {
    entries: HashMap<String, WhitelistEntry>,
}

fn table_reader(path: &Path) -> Result<csv::Reader<std::fs::File>, PipelineError> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| PipelineError::Table {
            path: path.to_path_buf(),
            source,
        })
}

fn flag(record: &csv::StringRecord, idx: usize) -> bool {
    record.get(idx).map_or(false, |v| v.trim() == "true")
}

impl Whitelist {
    /// Rows: `workId,accessLevel,openAccess,restrictedInRegion,…`; extra
    /// columns are tolerated, short rows default the flags to false.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let mut reader = table_reader(path)?;
        let mut entries = HashMap::new();
        for record in reader.records() {
            let record = record.map_err(|source| PipelineError::Table {
                path: path.to_path_buf(),
                source,
            })?;
            let Some(name) = record.get(0) else { continue };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            entries.insert(
                name.to_string(),
                WhitelistEntry {
                    access_level: record.get(1).unwrap_or("").trim().to_string(),
                    open_access: flag(&record, 2),
                    restricted_in_region: flag(&record, 3),
                },
            );
        }
        Ok(Self { entries })
    }

    pub fn insert(&mut self, work: impl Into<String>, entry: WhitelistEntry) {
        self.entries.insert(work.into(), entry);
    }

    pub fn get(&self, work: &str) -> Option<&WhitelistEntry> {
        self.entries.get(work)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Instance id → outline document id.
#[derive(Debug, Default)]
pub struct OutlineMap {
    entries: HashMap<String, String>,
}

impl OutlineMap {
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let mut reader = table_reader(path)?;
        let mut entries = HashMap::new();
        for record in reader.records() {
            let record = record.map_err(|source| PipelineError::Table {
                path: path.to_path_buf(),
                source,
            })?;
            let (Some(instance), Some(outline)) = (record.get(0), record.get(1)) else {
                continue;
            };
            let (instance, outline) = (instance.trim(), outline.trim());
            if instance.is_empty() || outline.is_empty() {
                continue;
            }
            entries.insert(instance.to_string(), outline.to_string());
        }
        Ok(Self { entries })
    }

    pub fn insert(&mut self, instance: impl Into<String>, outline: impl Into<String>) {
        self.entries.insert(instance.into(), outline.into());
    }

    pub fn get(&self, instance: &str) -> Option<&str> {
        self.entries.get(instance).map(String::as_str)
    }
}
