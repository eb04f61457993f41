//! Identifier → shard-key mapping.
//!
//! A shard key is the first N hex digits of the MD5 of an entity's local
//! name. MD5 is only a bucketing function here, not a security boundary.
//! Kept as pure functions so the read path (document lookup) and the write
//! path (output bucketing) share one definition.

use md5::{Digest, Md5};
use std::path::{Path, PathBuf};

/// Shard width of the source corpus layout. Output bucketing is
/// configurable; the corpus on disk is always two digits.
pub const SOURCE_SHARD_DIGITS: usize = 2;

pub fn shard_key(local_name: &str, digits: usize) -> String {
    let digest = hex::encode(Md5::new().chain_update(local_name.as_bytes()).finalize());
    let end = digits.min(digest.len());
    digest[..end].to_string()
}

/// Path of a source document: `{root}/{category}/{shardKey}/{localName}.trig`.
pub fn document_path(root: &Path, category: &str, local_name: &str) -> PathBuf {
    root.join(category)
        .join(shard_key(local_name, SOURCE_SHARD_DIGITS))
        .join(format!("{local_name}.trig"))
}
