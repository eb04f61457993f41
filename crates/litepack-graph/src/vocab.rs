//! IRIs of the corpus ontology.
//!
//! Only the terms the pipeline actually reads are listed; this is not a
//! schema definition.

pub const BDR: &str = "http://purl.bdrc.io/resource/";
pub const BDO: &str = "http://purl.bdrc.io/ontology/core/";
pub const ADM: &str = "http://purl.bdrc.io/ontology/admin/";
pub const BDA: &str = "http://purl.bdrc.io/admindata/";

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const SKOS_PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";

// Labels and titles
pub const BDO_HAS_TITLE: &str = "http://purl.bdrc.io/ontology/core/hasTitle";
pub const BDO_PERSON_NAME: &str = "http://purl.bdrc.io/ontology/core/personName";

// Instance description
pub const BDO_INSTANCE_OF: &str = "http://purl.bdrc.io/ontology/core/instanceOf";
pub const BDO_PUBLISHER_NAME: &str = "http://purl.bdrc.io/ontology/core/publisherName";
pub const BDO_PUBLISHER_LOCATION: &str =
    "http://purl.bdrc.io/ontology/core/publisherLocation";
pub const BDO_PRINT_METHOD: &str = "http://purl.bdrc.io/ontology/core/printMethod";
pub const BDO_INSTANCE_EVENT: &str = "http://purl.bdrc.io/ontology/core/instanceEvent";
pub const BDO_PUBLISHED_EVENT: &str = "http://purl.bdrc.io/ontology/core/PublishedEvent";

// Release gate
pub const ADM_STATUS: &str = "http://purl.bdrc.io/ontology/admin/status";
pub const BDA_STATUS_RELEASED: &str = "http://purl.bdrc.io/admindata/StatusReleased";

// Work authorship
pub const BDO_AGENT: &str = "http://purl.bdrc.io/ontology/core/agent";
pub const BDO_ROLE: &str = "http://purl.bdrc.io/ontology/core/role";
pub const BDO_WORK_HAS_INSTANCE: &str =
    "http://purl.bdrc.io/ontology/core/workHasInstance";
pub const BDR_ROLE_MAIN_AUTHOR: &str = "http://purl.bdrc.io/resource/R0ER0019";
pub const BDR_ROLE_HEAD_AUTHOR: &str = "http://purl.bdrc.io/resource/R0ER0025";

// Part structure
pub const BDO_HAS_PART: &str = "http://purl.bdrc.io/ontology/core/hasPart";
pub const BDO_PART_TYPE: &str = "http://purl.bdrc.io/ontology/core/partType";
pub const BDO_PART_INDEX: &str = "http://purl.bdrc.io/ontology/core/partIndex";
pub const BDR_PART_TYPE_TOC: &str =
    "http://purl.bdrc.io/resource/PartTypeTableOfContent";
pub const BDR_PART_TYPE_CHAPTER: &str = "http://purl.bdrc.io/resource/PartTypeChapter";
pub const BDR_PART_TYPE_TEXT: &str = "http://purl.bdrc.io/resource/PartTypeText";

// Print methods (controlled vocabulary)
pub const BDR_PM_MANUSCRIPT: &str =
    "http://purl.bdrc.io/resource/PrintMethod_Manuscript";
pub const BDR_PM_WOODBLOCK: &str =
    "http://purl.bdrc.io/resource/PrintMethod_Relief_WoodBlock";
pub const BDR_PM_MODERN: &str = "http://purl.bdrc.io/resource/PrintMethod_Modern";
pub const BDR_PM_LITHOGRAPHY: &str =
    "http://purl.bdrc.io/resource/PrintMethod_Lithography";
pub const BDR_PM_XEROGRAPHY: &str =
    "http://purl.bdrc.io/resource/PrintMethod_Xerography";

// Events and dates
pub const BDO_PERSON_EVENT: &str = "http://purl.bdrc.io/ontology/core/personEvent";
pub const BDO_PERSON_BIRTH: &str = "http://purl.bdrc.io/ontology/core/PersonBirth";
pub const BDO_PERSON_DEATH: &str = "http://purl.bdrc.io/ontology/core/PersonDeath";
pub const BDO_ON_YEAR: &str = "http://purl.bdrc.io/ontology/core/onYear";
pub const BDO_NOT_BEFORE: &str = "http://purl.bdrc.io/ontology/core/notBefore";
pub const BDO_NOT_AFTER: &str = "http://purl.bdrc.io/ontology/core/notAfter";

// Language tags of label literals. Everything else is ignored.
pub const LANG_ENCODED: &str = "bo-x-ewts";
pub const LANG_DISPLAY: &str = "bo";

/// Full IRI of an entity in the resource namespace.
pub fn bdr(local_name: &str) -> String {
    format!("{BDR}{local_name}")
}
