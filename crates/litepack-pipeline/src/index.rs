//! Inverted label indexes.
//!
//! Keys are label strings exactly as extracted — no normalization beyond
//! script conversion, so client-side exact-match lookup stays stable. Keys
//! are kept sorted (BTreeMap) so index-file rotation is deterministic;
//! per-key id lists preserve insertion order.

use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct LabelIndex {
    entries: BTreeMap<String, Vec<String>>,
}

impl LabelIndex {
    pub fn add(&mut self, label: &str, id: &str) {
        self.entries
            .entry(label.to_string())
            .or_default()
            .push(id.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entries.get(label).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.entries.iter()
    }
}

/// The named indexes of one run, plus the unsharded root-title map.
#[derive(Debug, Default)]
pub struct IndexSet {
    pub persons: LabelIndex,
    pub works: LabelIndex,
    pub workparts: LabelIndex,
    /// Root-instance id → preferred title, for instances that have both
    /// parts and a title. Written as one file, never key-sharded.
    pub root_titles: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_accumulate_in_insertion_order() {
        let mut index = LabelIndex::default();
        index.add("title", "MW2");
        index.add("title", "MW1");
        index.add("title", "MW2");
        assert_eq!(
            index.get("title").unwrap(),
            ["MW2".to_string(), "MW1".to_string(), "MW2".to_string()]
        );
    }

    #[test]
    fn keys_iterate_sorted() {
        let mut index = LabelIndex::default();
        index.add("b", "1");
        index.add("a", "2");
        let keys: Vec<_> = index.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
