//! Script-converter boundary.
//!
//! Label literals come in two accepted language tags: the transliteration
//! encoding (converted to display script through [`ScriptConverter`]) and the
//! display script itself (used as-is). Everything else is dropped. The actual
//! transliteration engine is an external collaborator; this crate only
//! decides when to call it.

use litepack_graph::{vocab, Literal};

pub trait ScriptConverter {
    fn to_display(&self, encoded: &str) -> String;
}

/// Keeps encoded text unchanged. Stands in where no transliteration engine
/// is wired up; the output is then in the encoded scheme.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughConverter;

impl ScriptConverter for PassthroughConverter {
    fn to_display(&self, encoded: &str) -> String {
        encoded.to_string()
    }
}

/// Display-script text of a label literal, or `None` when the language tag
/// is not recognized.
pub fn display_text(lit: &Literal, converter: &dyn ScriptConverter) -> Option<String> {
    if lit.language_is(vocab::LANG_ENCODED) {
        Some(converter.to_display(&lit.lexical))
    } else if lit.language_is(vocab::LANG_DISPLAY) {
        Some(lit.lexical.clone())
    } else {
        None
    }
}

/// For fields that keep untagged/foreign literals verbatim (publisher name
/// and location): convert only when the literal is in the encoded scheme.
pub fn display_or_raw(lit: &Literal, converter: &dyn ScriptConverter) -> String {
    if lit.language_is(vocab::LANG_ENCODED) {
        converter.to_display(&lit.lexical)
    } else {
        lit.lexical.clone()
    }
}
