//! Person inspection. A person document is only ever opened when the
//! authorship reverse index cites the person as a creator.

use std::path::Path;

use litepack_graph::{vocab, GraphDoc, Node};
use serde::Serialize;

use crate::context::{local_name_of, Pipeline};
use crate::labels::extract_labels;
use crate::{dates, PipelineError};

#[derive(Debug, Default, Clone, Serialize)]
pub struct PersonRecord {
    #[serde(rename = "name", skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    #[serde(rename = "b", skip_serializing_if = "String::is_empty")]
    pub birth: String,
    #[serde(rename = "d", skip_serializing_if = "String::is_empty")]
    pub death: String,
    #[serde(rename = "mw", skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<String>,
}

impl Pipeline<'_> {
    /// Inspect one person document. `Ok(false)` means the person was never
    /// resolved as a creator and the document was not read.
    pub fn process_person(&mut self, path: &Path) -> Result<bool, PipelineError> {
        let Some(name) = local_name_of(path) else {
            return Ok(false);
        };
        let name = name.to_string();
        if !self.resolver.cited(&name) {
            return Ok(false);
        }

        let doc = GraphDoc::load(path)?;
        let node = Node::iri(vocab::bdr(&name));

        let labels = extract_labels(&doc, &node, vocab::BDO_PERSON_NAME, self.converter);
        for label in &labels.labels {
            self.indexes.persons.add(label, &name);
        }

        let record = PersonRecord {
            names: labels.labels,
            birth: dates::typed_event_date(
                &doc,
                &node,
                vocab::BDO_PERSON_EVENT,
                vocab::BDO_PERSON_BIRTH,
            ),
            death: dates::typed_event_date(
                &doc,
                &node,
                vocab::BDO_PERSON_EVENT,
                vocab::BDO_PERSON_DEATH,
            ),
            instances: self.resolver.instances_of(&name).to_vec(),
        };

        let value = serde_json::to_value(&record).map_err(|source| {
            PipelineError::Serialize {
                what: format!("person record {name}"),
                source,
            }
        })?;
        self.writer.save("persons", &name, value);

        self.stats.persons += 1;
        Ok(true)
    }
}
