//! Per-instance access classification.

use crate::tables::{Whitelist, WhitelistEntry};
use crate::PipelineError;

/// Work-name prefixes of the special collections, each with its fixed tier
/// code. Checked before the whitelist access level.
const SPECIAL_COLLECTIONS: &[(&str, char)] = &[
    ("W1FEMC", 'C'),
    ("W1FPL", 'P'),
    ("W1EAP", 'E'),
    ("WEAP", 'E'),
    ("W1CUDL", 'L'),
    ("W1TLM", 'T'),
];

pub const LEVEL_OPEN: &str = "open";
pub const LEVEL_FAIR_USE: &str = "fair use";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessTier {
    Open,
    FairUse,
    NotAvailable,
    SpecialCollection(char),
}

impl AccessTier {
    pub fn code(self) -> char {
        match self {
            AccessTier::Open => 'o',
            AccessTier::FairUse => 'f',
            AccessTier::NotAvailable => 'n',
            AccessTier::SpecialCollection(code) => code,
        }
    }
}

/// The work name of an instance: its identifier minus the instance-type
/// prefix (`MW123` → `W123`).
pub fn work_name(instance: &str) -> &str {
    instance.strip_prefix('M').unwrap_or(instance)
}

/// Classify an instance. Fails with [`PipelineError::NotWhitelisted`] when
/// the work has no whitelist entry; the caller skips the document silently.
pub fn classify_access<'a>(
    instance: &str,
    whitelist: &'a Whitelist,
) -> Result<(AccessTier, &'a WhitelistEntry), PipelineError> {
    let work = work_name(instance);
    let entry = whitelist
        .get(work)
        .ok_or_else(|| PipelineError::NotWhitelisted(instance.to_string()))?;

    for (prefix, code) in SPECIAL_COLLECTIONS {
        if work.starts_with(prefix) {
            return Ok((AccessTier::SpecialCollection(*code), entry));
        }
    }

    let tier = if entry.access_level == LEVEL_FAIR_USE && entry.open_access {
        AccessTier::FairUse
    } else if entry.access_level != LEVEL_OPEN {
        AccessTier::NotAvailable
    } else {
        AccessTier::Open
    };
    Ok((tier, entry))
}
