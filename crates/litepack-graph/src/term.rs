//! Typed RDF term model, sufficient for the extraction pipeline.
//!
//! Terms are recovered from the parser's display form (N-Triples-ish), which
//! keeps this module independent of the parser's own term types.

use crate::GraphError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    Iri(String),
    Blank(String),
}

impl Node {
    pub fn iri(iri: impl Into<String>) -> Self {
        Node::Iri(iri.into())
    }

    /// The local name of an IRI node (the part after the last `#` or `/`);
    /// for a blank node, its label.
    pub fn local_name(&self) -> &str {
        match self {
            Node::Iri(iri) => iri.rsplit(['#', '/']).next().unwrap_or(iri),
            Node::Blank(label) => label,
        }
    }

    pub fn is_iri(&self, iri: &str) -> bool {
        matches!(self, Node::Iri(i) if i == iri)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub lexical: String,
    pub language: Option<String>,
    pub datatype: Option<String>,
}

impl Literal {
    pub fn language_is(&self, tag: &str) -> bool {
        self.language.as_deref() == Some(tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    Node(Node),
    Literal(Literal),
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Node(Node::Iri(iri.into()))
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Term::Node(node) => Some(node),
            Term::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            Term::Node(_) => None,
        }
    }

    pub fn is_iri(&self, iri: &str) -> bool {
        matches!(self, Term::Node(node) if node.is_iri(iri))
    }
}

fn unescape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Parse a term from its display form: `<iri>`, `_:label`, or a literal with
/// an optional `@lang` or `^^<datatype>` suffix.
pub fn parse_term(term: &str) -> Result<Term, GraphError> {
    let s = term.trim();

    if let Some(rest) = s.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        return Ok(Term::Node(Node::Iri(rest.to_string())));
    }

    if let Some(rest) = s.strip_prefix("_:") {
        return Ok(Term::Node(Node::Blank(rest.to_string())));
    }

    if s.starts_with('"') {
        let mut end_quote = None;
        let mut prev_was_escape = false;
        for (i, ch) in s.char_indices().skip(1) {
            if ch == '"' && !prev_was_escape {
                end_quote = Some(i);
                break;
            }
            prev_was_escape = ch == '\\' && !prev_was_escape;
            if ch != '\\' {
                prev_was_escape = false;
            }
        }
        let Some(end) = end_quote else {
            return Err(GraphError::Term(s.to_string()));
        };

        let lexical = unescape_string(&s[1..end]);
        let rest = s[end + 1..].trim();

        let mut language = None;
        let mut datatype = None;

        if let Some(lang) = rest.strip_prefix('@') {
            language = Some(lang.to_string());
        } else if let Some(dt) = rest.strip_prefix("^^") {
            let dt = dt.trim();
            if let Some(dt_iri) = dt.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
                datatype = Some(dt_iri.to_string());
            } else if !dt.is_empty() {
                datatype = Some(dt.to_string());
            }
        }

        return Ok(Term::Literal(Literal {
            lexical,
            language,
            datatype,
        }));
    }

    Err(GraphError::Term(s.to_string()))
}

pub fn parse_node_term(term: &str) -> Result<Node, GraphError> {
    match parse_term(term)? {
        Term::Node(node) => Ok(node),
        Term::Literal(_) => Err(GraphError::Term(term.to_string())),
    }
}
