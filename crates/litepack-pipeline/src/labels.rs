//! Multilingual display-label extraction.

use litepack_graph::{vocab, GraphDoc, Node};

use crate::script::{display_text, ScriptConverter};

#[derive(Debug, Clone, Default)]
pub struct LabelSet {
    /// The entity's preferred label, when it has one. When several preferred
    /// labels are accepted the last one wins; source order is not guaranteed
    /// meaningful, so this is an accepted ambiguity.
    pub preferred: Option<String>,
    /// `[preferred-if-any] + alternates`, in discovery order. Alternates
    /// equal to the preferred label are dropped; duplicates across distinct
    /// title nodes are kept.
    pub labels: Vec<String>,
}

impl LabelSet {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Collect the labels of `entity`: its own preferred-label literals, then the
/// display labels of every node reached via `label_predicate`.
pub fn extract_labels(
    doc: &GraphDoc,
    entity: &Node,
    label_predicate: &str,
    converter: &dyn ScriptConverter,
) -> LabelSet {
    let mut preferred = None;
    for lit in doc.literals(entity, vocab::SKOS_PREF_LABEL) {
        if let Some(text) = display_text(lit, converter) {
            preferred = Some(text);
        }
    }

    let mut labels = Vec::new();
    if let Some(text) = &preferred {
        labels.push(text.clone());
    }
    for title_node in doc.object_nodes(entity, label_predicate) {
        for lit in doc.literals(title_node, vocab::RDFS_LABEL) {
            let Some(text) = display_text(lit, converter) else {
                continue;
            };
            if preferred.as_deref() == Some(text.as_str()) {
                continue;
            }
            labels.push(text);
        }
    }

    LabelSet { preferred, labels }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::testutil::MarkingConverter;
    use crate::script::PassthroughConverter;
    use std::path::Path;

    fn doc(trig: &str) -> GraphDoc {
        GraphDoc::parse_trig(trig.as_bytes(), Path::new("test.trig")).expect("fixture parses")
    }

    const PREFIX: &str = r#"
@prefix bdr: <http://purl.bdrc.io/resource/> .
@prefix bdo: <http://purl.bdrc.io/ontology/core/> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
"#;

    fn entity(name: &str) -> Node {
        Node::iri(vocab::bdr(name))
    }

    #[test]
    fn preferred_then_alternates_in_discovery_order() {
        let doc = doc(&format!(
            r#"{PREFIX}
bdr:MW1 skos:prefLabel "main"@bo ;
    bdo:hasTitle bdr:T1 , bdr:T2 .
bdr:T1 rdfs:label "alt one"@bo .
bdr:T2 rdfs:label "alt two"@bo .
"#
        ));
        let set = extract_labels(&doc, &entity("MW1"), vocab::BDO_HAS_TITLE, &PassthroughConverter);
        assert_eq!(set.preferred.as_deref(), Some("main"));
        assert_eq!(set.labels.len(), 3);
        assert_eq!(set.labels[0], "main");
        assert!(set.labels.contains(&"alt one".to_string()));
        assert!(set.labels.contains(&"alt two".to_string()));
    }

    #[test]
    fn alternate_equal_to_preferred_is_dropped() {
        let doc = doc(&format!(
            r#"{PREFIX}
bdr:MW1 skos:prefLabel "X"@bo ;
    bdo:hasTitle bdr:T1 .
bdr:T1 rdfs:label "X"@bo .
"#
        ));
        let set = extract_labels(&doc, &entity("MW1"), vocab::BDO_HAS_TITLE, &PassthroughConverter);
        assert_eq!(set.labels, vec!["X".to_string()]);
    }

    #[test]
    fn equality_is_checked_after_conversion() {
        // An encoded alternate that converts to the preferred string is a
        // duplicate even though the raw literals differ.
        let doc = doc(&format!(
            r#"{PREFIX}
bdr:MW1 skos:prefLabel "[X]"@bo ;
    bdo:hasTitle bdr:T1 .
bdr:T1 rdfs:label "X"@bo-x-ewts .
"#
        ));
        let set = extract_labels(&doc, &entity("MW1"), vocab::BDO_HAS_TITLE, &MarkingConverter);
        assert_eq!(set.labels, vec!["[X]".to_string()]);
    }

    #[test]
    fn unrecognized_language_tags_are_ignored() {
        let doc = doc(&format!(
            r#"{PREFIX}
bdr:MW1 skos:prefLabel "English title"@en ;
    bdo:hasTitle bdr:T1 .
bdr:T1 rdfs:label "titre"@fr .
"#
        ));
        let set = extract_labels(&doc, &entity("MW1"), vocab::BDO_HAS_TITLE, &PassthroughConverter);
        assert!(set.preferred.is_none());
        assert!(set.is_empty());
    }

    #[test]
    fn duplicates_across_distinct_title_nodes_are_kept() {
        let doc = doc(&format!(
            r#"{PREFIX}
bdr:MW1 bdo:hasTitle bdr:T1 , bdr:T2 .
bdr:T1 rdfs:label "same"@bo .
bdr:T2 rdfs:label "same"@bo .
"#
        ));
        let set = extract_labels(&doc, &entity("MW1"), vocab::BDO_HAS_TITLE, &PassthroughConverter);
        assert_eq!(set.labels, vec!["same".to_string(), "same".to_string()]);
    }

    #[test]
    fn encoded_preferred_label_goes_through_converter() {
        let doc = doc(&format!(
            r#"{PREFIX}
bdr:P1 skos:prefLabel "sangs rgyas"@bo-x-ewts .
"#
        ));
        let set =
            extract_labels(&doc, &entity("P1"), vocab::BDO_PERSON_NAME, &MarkingConverter);
        assert_eq!(set.preferred.as_deref(), Some("[sangs rgyas]"));
    }
}
