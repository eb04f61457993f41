//! Authorship resolution: instance → work → contributor agents.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::PathBuf;

use litepack_graph::{shard, vocab, GraphDoc};
use tracing::warn;

/// A work is cached only once its instance-link count exceeds this; works
/// with fewer instances are cheap enough to re-resolve.
pub const CACHE_INSTANCE_THRESHOLD: usize = 2;

pub struct AuthorshipResolver {
    source_root: PathBuf,
    cache: HashMap<String, BTreeSet<String>>,
    /// person id → instance ids they are recorded as creator of, in
    /// discovery order. The sole gate for person emission.
    reverse: BTreeMap<String, Vec<String>>,
    work_loads: usize,
}

impl AuthorshipResolver {
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            cache: HashMap::new(),
            reverse: BTreeMap::new(),
            work_loads: 0,
        }
    }

    /// The creator persons of `work`, recording each one as a creator of
    /// `instance` in the reverse index. A missing or unreadable work
    /// document yields an empty set; the instance proceeds without
    /// creators.
    pub fn resolve(&mut self, work: &str, instance: &str) -> BTreeSet<String> {
        let creators = match self.cache.get(work).cloned() {
            Some(cached) => cached,
            None => self.load_work(work),
        };
        for person in &creators {
            self.record(person, instance);
        }
        creators
    }

    fn load_work(&mut self, work: &str) -> BTreeSet<String> {
        let path = shard::document_path(&self.source_root, "works", work);
        self.work_loads += 1;
        let doc = match GraphDoc::load(&path) {
            Ok(doc) => doc,
            Err(err) if err.is_missing() => {
                warn!("missing work document {}", path.display());
                return BTreeSet::new();
            }
            Err(err) => {
                warn!("unreadable work document {}: {err}", path.display());
                return BTreeSet::new();
            }
        };

        let mut creators = BTreeSet::new();
        for triple in doc.matching(None, Some(vocab::BDO_AGENT), None) {
            let Some(person) = triple.object.as_node() else {
                continue;
            };
            let qualifies = doc
                .object_nodes(&triple.subject, vocab::BDO_ROLE)
                .any(|role| {
                    role.is_iri(vocab::BDR_ROLE_MAIN_AUTHOR)
                        || role.is_iri(vocab::BDR_ROLE_HEAD_AUTHOR)
                });
            if qualifies {
                creators.insert(person.local_name().to_string());
            }
        }

        let instance_links = doc
            .matching(None, Some(vocab::BDO_WORK_HAS_INSTANCE), None)
            .count();
        if instance_links > CACHE_INSTANCE_THRESHOLD {
            self.cache.insert(work.to_string(), creators.clone());
        }
        creators
    }

    fn record(&mut self, person: &str, instance: &str) {
        let instances = self.reverse.entry(person.to_string()).or_default();
        if !instances.iter().any(|i| i == instance) {
            instances.push(instance.to_string());
        }
    }

    /// Whether a person was ever resolved as a creator. Persons failing
    /// this gate are never even read.
    pub fn cited(&self, person: &str) -> bool {
        self.reverse.contains_key(person)
    }

    pub fn instances_of(&self, person: &str) -> &[String] {
        self.reverse
            .get(person)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of work documents actually read (cache misses).
    pub fn work_loads(&self) -> usize {
        self.work_loads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const PREFIX: &str = r#"
@prefix bdr: <http://purl.bdrc.io/resource/> .
@prefix bdo: <http://purl.bdrc.io/ontology/core/> .
"#;

    fn write_work(root: &Path, work: &str, body: &str) {
        let path = shard::document_path(root, "works", work);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!("{PREFIX}{body}")).unwrap();
    }

    fn work_body(creators: &[(&str, &str)], instance_links: usize) -> String {
        let mut body = String::new();
        for (i, (person, role)) in creators.iter().enumerate() {
            body.push_str(&format!(
                "bdr:CR{i} bdo:agent bdr:{person} ;\n    bdo:role bdr:{role} .\n"
            ));
        }
        for i in 0..instance_links {
            body.push_str(&format!("bdr:W bdo:workHasInstance bdr:MWL{i} .\n"));
        }
        body
    }

    #[test]
    fn qualifying_roles_only() {
        let dir = tempfile::tempdir().unwrap();
        write_work(
            dir.path(),
            "W123",
            &work_body(
                &[("P1", "R0ER0019"), ("P2", "R0ER0011"), ("P3", "R0ER0025")],
                0,
            ),
        );

        let mut resolver = AuthorshipResolver::new(dir.path());
        let creators = resolver.resolve("W123", "MW123");
        assert_eq!(
            creators,
            BTreeSet::from(["P1".to_string(), "P3".to_string()])
        );
        assert!(resolver.cited("P1"));
        assert!(!resolver.cited("P2"));
        assert_eq!(resolver.instances_of("P1"), ["MW123".to_string()]);
    }

    #[test]
    fn missing_work_is_empty_and_non_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut resolver = AuthorshipResolver::new(dir.path());
        assert!(resolver.resolve("W404", "MW404").is_empty());
    }

    #[test]
    fn work_with_two_instances_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        write_work(
            dir.path(),
            "W456",
            &work_body(&[("P1", "R0ER0019")], 2),
        );

        let mut resolver = AuthorshipResolver::new(dir.path());
        resolver.resolve("W456", "MWa");
        resolver.resolve("W456", "MWb");
        resolver.resolve("W456", "MWc");
        assert_eq!(resolver.work_loads(), 3);
    }

    #[test]
    fn work_with_three_instances_is_cached() {
        let dir = tempfile::tempdir().unwrap();
        write_work(
            dir.path(),
            "W123",
            &work_body(&[("P1", "R0ER0019")], 3),
        );

        let mut resolver = AuthorshipResolver::new(dir.path());
        resolver.resolve("W123", "MWa");
        resolver.resolve("W123", "MWb");
        assert_eq!(resolver.work_loads(), 1);
        // the reverse index still records every instance
        assert_eq!(
            resolver.instances_of("P1"),
            ["MWa".to_string(), "MWb".to_string()]
        );
    }
}
