//! Date-string composition from event sub-graphs.

use litepack_graph::{vocab, GraphDoc, Node, Term};

/// The date string of one event node: an exact year verbatim when present,
/// otherwise `"{lower}-{upper}"` with either side omitted when absent.
pub fn event_date(doc: &GraphDoc, event: &Node) -> String {
    if let Some(lit) = doc.first_literal(event, vocab::BDO_ON_YEAR) {
        return lit.lexical.clone();
    }
    let lower = doc.first_literal(event, vocab::BDO_NOT_BEFORE);
    let upper = doc.first_literal(event, vocab::BDO_NOT_AFTER);
    match (lower, upper) {
        (None, None) => String::new(),
        (lower, upper) => format!(
            "{}-{}",
            lower.map(|l| l.lexical.as_str()).unwrap_or(""),
            upper.map(|l| l.lexical.as_str()).unwrap_or("")
        ),
    }
}

/// Date of the first event of `event_type` reached from `entity` via
/// `event_predicate`, or `""` when there is none.
pub fn typed_event_date(
    doc: &GraphDoc,
    entity: &Node,
    event_predicate: &str,
    event_type: &str,
) -> String {
    let wanted = Term::iri(event_type);
    for event in doc.object_nodes(entity, event_predicate) {
        if doc.contains(Some(event), Some(vocab::RDF_TYPE), Some(&wanted)) {
            return event_date(doc, event);
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const PREFIX: &str = r#"
@prefix bdr: <http://purl.bdrc.io/resource/> .
@prefix bdo: <http://purl.bdrc.io/ontology/core/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
"#;

    fn doc(trig: &str) -> GraphDoc {
        GraphDoc::parse_trig(trig.as_bytes(), Path::new("test.trig")).expect("fixture parses")
    }

    fn ev() -> Node {
        Node::iri(vocab::bdr("EV1"))
    }

    #[test]
    fn exact_year_wins() {
        let doc = doc(&format!(
            r#"{PREFIX}
bdr:EV1 bdo:onYear "1850"^^xsd:gYear ;
    bdo:notBefore "1840"^^xsd:gYear .
"#
        ));
        assert_eq!(event_date(&doc, &ev()), "1850");
    }

    #[test]
    fn bound_composition() {
        let lower_only = doc(&format!(
            r#"{PREFIX}
bdr:EV1 bdo:notBefore "1850"^^xsd:gYear .
"#
        ));
        assert_eq!(event_date(&lower_only, &ev()), "1850-");

        let upper_only = doc(&format!(
            r#"{PREFIX}
bdr:EV1 bdo:notAfter "1860"^^xsd:gYear .
"#
        ));
        assert_eq!(event_date(&upper_only, &ev()), "-1860");

        let both = doc(&format!(
            r#"{PREFIX}
bdr:EV1 bdo:notBefore "1850"^^xsd:gYear ;
    bdo:notAfter "1860"^^xsd:gYear .
"#
        ));
        assert_eq!(event_date(&both, &ev()), "1850-1860");
    }

    #[test]
    fn no_facts_is_empty() {
        let doc = doc(&format!(
            r#"{PREFIX}
bdr:EV1 bdo:onYear bdr:NotALiteral .
"#
        ));
        assert_eq!(event_date(&doc, &ev()), "");
    }

    #[test]
    fn typed_event_is_selected_by_type() {
        let doc = doc(&format!(
            r#"{PREFIX}
bdr:P1 bdo:personEvent bdr:EVd , bdr:EVb .
bdr:EVb a bdo:PersonBirth ;
    bdo:onYear "1290"^^xsd:gYear .
bdr:EVd a bdo:PersonDeath ;
    bdo:onYear "1364"^^xsd:gYear .
"#
        ));
        let person = Node::iri(vocab::bdr("P1"));
        assert_eq!(
            typed_event_date(&doc, &person, vocab::BDO_PERSON_EVENT, vocab::BDO_PERSON_BIRTH),
            "1290"
        );
        assert_eq!(
            typed_event_date(&doc, &person, vocab::BDO_PERSON_EVENT, vocab::BDO_PERSON_DEATH),
            "1364"
        );
        assert_eq!(
            typed_event_date(
                &doc,
                &person,
                vocab::BDO_INSTANCE_EVENT,
                vocab::BDO_PUBLISHED_EVENT
            ),
            ""
        );
    }
}
