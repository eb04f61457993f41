//! One parsed graph document, addressable by triple pattern.

use std::fs;
use std::io;
use std::path::Path;

use sophia::api::prelude::*;

use crate::term::{parse_node_term, parse_term, Literal, Node, Term};
use crate::GraphError;

#[derive(Debug, Clone)]
pub struct Triple {
    pub subject: Node,
    pub predicate: String,
    pub object: Term,
}

/// An in-memory graph document. TriG graph names are dropped on load; the
/// corpus semantics are the union of all named graphs in a document.
#[derive(Debug, Default)]
pub struct GraphDoc {
    triples: Vec<Triple>,
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct SinkError(#[from] GraphError);

impl GraphDoc {
    /// Parse a TriG document. `origin` is only used in error messages.
    pub fn parse_trig(bytes: &[u8], origin: &Path) -> Result<Self, GraphError> {
        let cursor = io::Cursor::new(bytes);
        let reader = io::BufReader::new(cursor);

        let mut triples: Vec<Triple> = Vec::new();
        let mut parser = sophia::turtle::parser::trig::parse_bufread(reader);
        parser
            .try_for_each_quad(|q| -> Result<(), SinkError> {
                let subject = parse_node_term(&q.s().to_string())?;
                let predicate = parse_node_term(&q.p().to_string())?;
                let Node::Iri(predicate) = predicate else {
                    return Ok(());
                };
                let object = parse_term(&q.o().to_string())?;
                triples.push(Triple {
                    subject,
                    predicate,
                    object,
                });
                Ok(())
            })
            .map_err(|e| GraphError::Parse {
                path: origin.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Self { triples })
    }

    /// Load and parse a document from disk. A nonexistent file maps to
    /// [`GraphError::Missing`] so callers can treat it as an empty result.
    pub fn load(path: &Path) -> Result<Self, GraphError> {
        let bytes = fs::read(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                GraphError::Missing(path.to_path_buf())
            } else {
                GraphError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::parse_trig(&bytes, path)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Pattern query: `None` positions are wildcards.
    pub fn matching<'a>(
        &'a self,
        subject: Option<&'a Node>,
        predicate: Option<&'a str>,
        object: Option<&'a Term>,
    ) -> impl Iterator<Item = &'a Triple> {
        self.triples.iter().filter(move |t| {
            subject.map_or(true, |s| &t.subject == s)
                && predicate.map_or(true, |p| t.predicate == p)
                && object.map_or(true, |o| &t.object == o)
        })
    }

    pub fn contains(
        &self,
        subject: Option<&Node>,
        predicate: Option<&str>,
        object: Option<&Term>,
    ) -> bool {
        self.matching(subject, predicate, object).next().is_some()
    }

    pub fn objects<'a>(
        &'a self,
        subject: &'a Node,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> {
        self.matching(Some(subject), Some(predicate), None)
            .map(|t| &t.object)
    }

    pub fn object_nodes<'a>(
        &'a self,
        subject: &'a Node,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Node> {
        self.objects(subject, predicate).filter_map(Term::as_node)
    }

    pub fn literals<'a>(
        &'a self,
        subject: &'a Node,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Literal> {
        self.objects(subject, predicate).filter_map(Term::as_literal)
    }

    pub fn first_literal<'a>(
        &'a self,
        subject: &'a Node,
        predicate: &'a str,
    ) -> Option<&'a Literal> {
        self.literals(subject, predicate).next()
    }

    pub fn first_object_node<'a>(
        &'a self,
        subject: &'a Node,
        predicate: &'a str,
    ) -> Option<&'a Node> {
        self.object_nodes(subject, predicate).next()
    }
}
