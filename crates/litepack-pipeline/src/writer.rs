//! Output: shard-bucketed record files and rotating index files.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use litepack_graph::shard::shard_key;
use serde_json::Value;

use crate::index::LabelIndex;
use crate::PipelineError;

/// An index file rotates once more keys than this have been written to it;
/// the split happens strictly after the threshold is exceeded.
pub const MAX_KEYS_PER_INDEX_FILE: usize = 20_000;

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> PipelineError + '_ {
    move |source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn json_err(what: &str) -> impl FnOnce(serde_json::Error) -> PipelineError + '_ {
    move |source| PipelineError::Serialize {
        what: what.to_string(),
        source,
    }
}

/// Buffers every record by (category, shard key) and writes one JSON object
/// file per bucket on flush. With a shard width of 0 each record gets its
/// own `{id}.json` file instead.
#[derive(Debug)]
pub struct ShardedWriter {
    out_root: PathBuf,
    shard_digits: usize,
    buckets: BTreeMap<String, BTreeMap<String, BTreeMap<String, Value>>>,
}

impl ShardedWriter {
    pub fn new(out_root: impl Into<PathBuf>, shard_digits: usize) -> Self {
        Self {
            out_root: out_root.into(),
            shard_digits,
            buckets: BTreeMap::new(),
        }
    }

    pub fn save(&mut self, category: &str, id: &str, record: Value) {
        self.buckets
            .entry(category.to_string())
            .or_default()
            .entry(shard_key(id, self.shard_digits))
            .or_default()
            .insert(id.to_string(), record);
    }

    /// Write all buckets. Returns the number of files written.
    pub fn flush(&self) -> Result<usize, PipelineError> {
        let mut files = 0;
        for (category, shards) in &self.buckets {
            let dir = self.out_root.join(category);
            fs::create_dir_all(&dir).map_err(io_err(&dir))?;
            for (key, records) in shards {
                if self.shard_digits == 0 {
                    for (id, record) in records {
                        write_json_file(&dir.join(format!("{id}.json")), record)?;
                        files += 1;
                    }
                } else {
                    let value = serde_json::to_value(records).map_err(json_err(category))?;
                    write_json_file(&dir.join(format!("{key}.json")), &value)?;
                    files += 1;
                }
            }
        }
        Ok(files)
    }
}

pub(crate) fn write_json_file(path: &Path, value: &Value) -> Result<(), PipelineError> {
    let file = File::create(path).map_err(io_err(path))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer(&mut out, value)
        .map_err(json_err(&path.display().to_string()))?;
    out.flush().map_err(io_err(path))
}

/// Stream one named index to `{name}-{n}.json` files, `"key":value` pairs in
/// key order, rotating after `max_keys` is exceeded. Memory stays
/// proportional to one entry, not the whole index. Returns the number of
/// files created; an exact-boundary rotation leaves the trailing file empty.
pub fn write_index(
    out_root: &Path,
    name: &str,
    index: &LabelIndex,
    max_keys: usize,
) -> Result<usize, PipelineError> {
    let mut file_count = 0usize;
    let path = out_root.join(format!("{name}-{file_count}.json"));
    let mut out = BufWriter::new(File::create(&path).map_err(io_err(&path))?);
    let mut keys_in_file = 0usize;

    for (label, ids) in index.iter() {
        let separator: &[u8] = if keys_in_file == 0 { b"{" } else { b"," };
        out.write_all(separator).map_err(io_err(out_root))?;
        let key = serde_json::to_string(label).map_err(json_err(name))?;
        let value = serde_json::to_string(ids).map_err(json_err(name))?;
        write!(out, "{key}:{value}").map_err(io_err(out_root))?;
        keys_in_file += 1;

        if keys_in_file > max_keys {
            out.write_all(b"}").map_err(io_err(out_root))?;
            out.flush().map_err(io_err(out_root))?;
            file_count += 1;
            let path = out_root.join(format!("{name}-{file_count}.json"));
            out = BufWriter::new(File::create(&path).map_err(io_err(&path))?);
            keys_in_file = 0;
        }
    }

    if keys_in_file != 0 {
        out.write_all(b"}").map_err(io_err(out_root))?;
    }
    out.flush().map_err(io_err(out_root))?;
    Ok(file_count + 1)
}

/// The unsharded root-title map.
pub fn write_root_titles(
    out_root: &Path,
    root_titles: &BTreeMap<String, String>,
) -> Result<(), PipelineError> {
    let value = serde_json::to_value(root_titles).map_err(json_err("rititles"))?;
    write_json_file(&out_root.join("rititles.json"), &value)
}
