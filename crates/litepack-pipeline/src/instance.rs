//! Instance inspection: one flattened record per published item.

use std::collections::BTreeSet;
use std::path::Path;

use litepack_graph::{vocab, GraphDoc, Node, Term};
use serde::Serialize;
use tracing::{debug, warn};

use crate::access::{classify_access, AccessTier};
use crate::context::{local_name_of, Pipeline};
use crate::labels::extract_labels;
use crate::parts::PartTreeBuilder;
use crate::script::display_or_raw;
use crate::{dates, PipelineError};

/// Print-method IRIs and their single-letter record codes.
const PRINT_METHOD_CODES: &[(&str, &str)] = &[
    (vocab::BDR_PM_MANUSCRIPT, "m"),
    (vocab::BDR_PM_WOODBLOCK, "x"),
    (vocab::BDR_PM_MODERN, "p"),
    (vocab::BDR_PM_LITHOGRAPHY, "l"),
    (vocab::BDR_PM_XEROGRAPHY, "z"),
];

fn is_false(flag: &bool) -> bool {
    !*flag
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct InstanceRecord {
    pub access: String,
    #[serde(rename = "pn", skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
    #[serde(rename = "pl", skip_serializing_if = "Option::is_none")]
    pub publisher_location: Option<String>,
    #[serde(rename = "pm", skip_serializing_if = "Option::is_none")]
    pub print_method: Option<String>,
    #[serde(rename = "title", skip_serializing_if = "Vec::is_empty")]
    pub titles: Vec<String>,
    #[serde(rename = "date", skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(rename = "creator", skip_serializing_if = "Vec::is_empty")]
    pub creators: Vec<String>,
    #[serde(rename = "hasParts", skip_serializing_if = "is_false")]
    pub has_parts: bool,
}

impl Pipeline<'_> {
    /// Inspect one instance document. `Ok(false)` means the instance was
    /// filtered (not whitelisted, wrong tier, not released); errors are
    /// per-document and the driver continues the batch.
    pub fn process_instance(&mut self, path: &Path) -> Result<bool, PipelineError> {
        let Some(name) = local_name_of(path) else {
            return Ok(false);
        };
        let name = name.to_string();

        // Access gate runs before the document is parsed.
        let (tier, entry) = match classify_access(&name, &self.whitelist) {
            Ok(classified) => classified,
            Err(PipelineError::NotWhitelisted(id)) => {
                debug!("skipping unwhitelisted instance {id}");
                return Ok(false);
            }
            Err(err) => return Err(err),
        };
        if self.config.open_access_only && tier != AccessTier::Open {
            return Ok(false);
        }
        if self.config.restricted_region && entry.restricted_in_region {
            return Ok(false);
        }

        let doc = GraphDoc::load(path)?;
        let released = Term::iri(vocab::BDA_STATUS_RELEASED);
        if !doc.contains(None, Some(vocab::ADM_STATUS), Some(&released)) {
            debug!("skipping unreleased instance {name}");
            return Ok(false);
        }

        let node = Node::iri(vocab::bdr(&name));
        let mut record = InstanceRecord {
            access: tier.code().to_string(),
            ..InstanceRecord::default()
        };

        if let Some(lit) = doc.first_literal(&node, vocab::BDO_PUBLISHER_NAME) {
            record.publisher_name = Some(display_or_raw(lit, self.converter));
        }
        if let Some(lit) = doc.first_literal(&node, vocab::BDO_PUBLISHER_LOCATION) {
            record.publisher_location = Some(display_or_raw(lit, self.converter));
        }
        if let Some(method) = doc.first_object_node(&node, vocab::BDO_PRINT_METHOD) {
            match PRINT_METHOD_CODES
                .iter()
                .find(|(iri, _)| method.is_iri(iri))
            {
                Some((_, code)) => record.print_method = Some(code.to_string()),
                None => warn!("unknown print method {:?} on {name}", method.local_name()),
            }
        }

        let titles = extract_labels(&doc, &node, vocab::BDO_HAS_TITLE, self.converter);
        for title in &titles.labels {
            self.indexes.works.add(title, &name);
        }
        record.titles = titles.labels.clone();

        record.date = dates::typed_event_date(
            &doc,
            &node,
            vocab::BDO_INSTANCE_EVENT,
            vocab::BDO_PUBLISHED_EVENT,
        );

        let mut creators = BTreeSet::new();
        for work in doc.object_nodes(&node, vocab::BDO_INSTANCE_OF) {
            creators.extend(self.resolver.resolve(work.local_name(), &name));
        }
        record.creators = creators.into_iter().collect();

        let builder = PartTreeBuilder::new(
            &self.config.source_root,
            &self.outline_map,
            self.converter,
        );
        let parts = builder.build(&name, &doc, &mut self.indexes.workparts);
        if !parts.is_empty() {
            record.has_parts = true;
            if let Some(preferred) = &titles.preferred {
                self.indexes
                    .root_titles
                    .insert(name.clone(), preferred.clone());
            }
        }

        let value = serde_json::to_value(&record).map_err(|source| {
            PipelineError::Serialize {
                what: format!("instance record {name}"),
                source,
            }
        })?;
        self.writer.save("works", &name, value);

        if !parts.is_empty() {
            let value = serde_json::to_value(&parts).map_err(|source| {
                PipelineError::Serialize {
                    what: format!("parts record {name}"),
                    source,
                }
            })?;
            self.writer.save("workparts", &name, value);
        }

        self.stats.instances += 1;
        Ok(true)
    }
}
