//! Part-tree reconstruction for multi-volume/multi-text instances.

use std::path::Path;

use litepack_graph::{shard, vocab, GraphDoc, Node};
use serde::Serialize;
use tracing::warn;

use crate::index::LabelIndex;
use crate::labels::extract_labels;
use crate::script::ScriptConverter;
use crate::tables::OutlineMap;

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub titles: Vec<String>,
    /// Explicit sort position; internal only, the emitted order carries it.
    #[serde(skip)]
    pub ordinal: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<Part>,
}

pub struct PartTreeBuilder<'a> {
    source_root: &'a Path,
    outline_map: &'a OutlineMap,
    converter: &'a dyn ScriptConverter,
}

impl<'a> PartTreeBuilder<'a> {
    pub fn new(
        source_root: &'a Path,
        outline_map: &'a OutlineMap,
        converter: &'a dyn ScriptConverter,
    ) -> Self {
        Self {
            source_root,
            outline_map,
            converter,
        }
    }

    /// Top-level entry. Decides which document the hierarchy lives in: the
    /// instance's own graph when it already has part structure, otherwise an
    /// outline document from the mapping table (loaded once and reused for
    /// the whole descent). No mapping means no parts.
    pub fn build(
        &self,
        instance: &str,
        instance_doc: &GraphDoc,
        workparts_index: &mut LabelIndex,
    ) -> Vec<Part> {
        let root = Node::iri(vocab::bdr(instance));
        if instance_doc.contains(Some(&root), Some(vocab::BDO_HAS_PART), None) {
            return self.children_of(instance_doc, &root, workparts_index);
        }

        let Some(outline) = self.outline_map.get(instance) else {
            return Vec::new();
        };
        let path = shard::document_path(self.source_root, "outlines", outline);
        let doc = match GraphDoc::load(&path) {
            Ok(doc) => doc,
            Err(err) if err.is_missing() => {
                warn!("missing outline document {}", path.display());
                return Vec::new();
            }
            Err(err) => {
                warn!("unreadable outline document {}: {err}", path.display());
                return Vec::new();
            }
        };
        self.children_of(&doc, &root, workparts_index)
    }

    fn children_of(&self, doc: &GraphDoc, node: &Node, index: &mut LabelIndex) -> Vec<Part> {
        let mut parts = Vec::new();
        for child in doc.object_nodes(node, vocab::BDO_HAS_PART) {
            let part_type = doc.first_object_node(child, vocab::BDO_PART_TYPE);

            // Tables of contents and chapters are excluded outright, along
            // with everything below them.
            if part_type.map_or(false, |t| {
                t.is_iri(vocab::BDR_PART_TYPE_TOC) || t.is_iri(vocab::BDR_PART_TYPE_CHAPTER)
            }) {
                continue;
            }

            let id = child.local_name().to_string();
            let ordinal = doc
                .first_literal(child, vocab::BDO_PART_INDEX)
                .and_then(|lit| lit.lexical.parse::<u64>().ok());
            let labels = extract_labels(doc, child, vocab::BDO_HAS_TITLE, self.converter);
            if part_type.map_or(false, |t| t.is_iri(vocab::BDR_PART_TYPE_TEXT)) {
                for label in &labels.labels {
                    index.add(label, &id);
                }
            }

            let children = self.children_of(doc, child, index);
            if labels.labels.is_empty() && children.is_empty() {
                continue;
            }
            parts.push(Part {
                id,
                titles: labels.labels,
                ordinal,
                parts: children,
            });
        }
        // Stable: missing ordinals sort after every explicit one and keep
        // their discovery order among themselves.
        parts.sort_by_key(|p| p.ordinal.unwrap_or(u64::MAX));
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::PassthroughConverter;
    use std::fs;

    const PREFIX: &str = r#"
@prefix bdr: <http://purl.bdrc.io/resource/> .
@prefix bdo: <http://purl.bdrc.io/ontology/core/> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
"#;

    fn doc(body: &str) -> GraphDoc {
        GraphDoc::parse_trig(format!("{PREFIX}{body}").as_bytes(), Path::new("test.trig"))
            .expect("fixture parses")
    }

    fn build(
        instance: &str,
        instance_doc: &GraphDoc,
        outline_map: &OutlineMap,
        root: &Path,
    ) -> (Vec<Part>, LabelIndex) {
        let mut index = LabelIndex::default();
        let builder = PartTreeBuilder::new(root, outline_map, &PassthroughConverter);
        let parts = builder.build(instance, instance_doc, &mut index);
        (parts, index)
    }

    fn empty_map() -> OutlineMap {
        OutlineMap::default()
    }

    #[test]
    fn sorts_by_ordinal_with_missing_last_and_stable() {
        let doc = doc(
            r#"
bdr:MW1 bdo:hasPart bdr:PT3 , bdr:PTm1 , bdr:PT1 , bdr:PTm2 .
bdr:PT3 bdo:partIndex "3"^^xsd:integer ; skos:prefLabel "three"@bo .
bdr:PTm1 skos:prefLabel "first missing"@bo .
bdr:PT1 bdo:partIndex "1"^^xsd:integer ; skos:prefLabel "one"@bo .
bdr:PTm2 skos:prefLabel "second missing"@bo .
"#,
        );
        let (parts, _) = build("MW1", &doc, &empty_map(), Path::new("/nowhere"));
        let ids: Vec<_> = parts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["PT1", "PT3", "PTm1", "PTm2"]);
    }

    #[test]
    fn toc_and_chapter_subtrees_are_pruned() {
        let doc = doc(
            r#"
bdr:MW1 bdo:hasPart bdr:PTtoc , bdr:PTch , bdr:PTv .
bdr:PTtoc bdo:partType bdr:PartTypeTableOfContent ; skos:prefLabel "toc"@bo .
bdr:PTch bdo:partType bdr:PartTypeChapter ; skos:prefLabel "chapter"@bo ;
    bdo:hasPart bdr:PTunder .
bdr:PTunder bdo:partType bdr:PartTypeText ; skos:prefLabel "buried"@bo .
bdr:PTv skos:prefLabel "volume"@bo .
"#,
        );
        let (parts, index) = build("MW1", &doc, &empty_map(), Path::new("/nowhere"));
        let ids: Vec<_> = parts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["PTv"]);
        // descendants of pruned parts are never visited, so never indexed
        assert!(index.get("buried").is_none());
    }

    #[test]
    fn retention_needs_a_label_or_a_retained_child() {
        let doc = doc(
            r#"
bdr:MW1 bdo:hasPart bdr:PTbare , bdr:PTparent .
bdr:PTparent bdo:hasPart bdr:PTchild .
bdr:PTchild skos:prefLabel "inner"@bo .
"#,
        );
        let (parts, _) = build("MW1", &doc, &empty_map(), Path::new("/nowhere"));
        // PTbare has neither label nor child; PTparent is label-less but has
        // a retained child.
        let ids: Vec<_> = parts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["PTparent"]);
        assert_eq!(parts[0].parts[0].id, "PTchild");
    }

    #[test]
    fn only_text_parts_feed_the_workparts_index() {
        let doc = doc(
            r#"
bdr:MW1 bdo:hasPart bdr:PTtext , bdr:PTvol .
bdr:PTtext bdo:partType bdr:PartTypeText ; skos:prefLabel "the text"@bo .
bdr:PTvol skos:prefLabel "the volume"@bo .
"#,
        );
        let (_, index) = build("MW1", &doc, &empty_map(), Path::new("/nowhere"));
        assert_eq!(index.get("the text").unwrap(), ["PTtext".to_string()]);
        assert!(index.get("the volume").is_none());
    }

    #[test]
    fn outline_sourced_parts() {
        let dir = tempfile::tempdir().unwrap();
        let outline_path = shard::document_path(dir.path(), "outlines", "O123");
        fs::create_dir_all(outline_path.parent().unwrap()).unwrap();
        fs::write(
            &outline_path,
            format!(
                "{PREFIX}
bdr:MW123 bdo:hasPart bdr:PTo .
bdr:PTo skos:prefLabel \"from outline\"@bo .
"
            ),
        )
        .unwrap();

        let instance_doc = doc("bdr:MW123 skos:prefLabel \"t\"@bo .");
        let mut map = OutlineMap::default();
        map.insert("MW123", "O123");

        let (parts, _) = build("MW123", &instance_doc, &map, dir.path());
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].id, "PTo");
        assert_eq!(parts[0].titles, ["from outline".to_string()]);
    }

    #[test]
    fn no_mapping_and_missing_outline_mean_no_parts() {
        let instance_doc = doc("bdr:MW123 skos:prefLabel \"t\"@bo .");
        let (parts, _) = build("MW123", &instance_doc, &empty_map(), Path::new("/nowhere"));
        assert!(parts.is_empty());

        let mut map = OutlineMap::default();
        map.insert("MW123", "O404");
        let (parts, _) = build("MW123", &instance_doc, &map, Path::new("/nowhere"));
        assert!(parts.is_empty());
    }
}
