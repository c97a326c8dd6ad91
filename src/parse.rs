use crate::error::{ParseError, ParseErrorKind};
use crate::node::Node;
use saphyr_parser::{Event, Parser, Span};

/// Parse a YAML stream into one node tree per document.
///
/// Only tree shape, scalar content, and source lines are kept; tags,
/// anchors, and scalar styles are discarded. An empty stream yields an
/// empty vector, which callers treat as valid.
///
/// # Errors
///
/// Returns a [`ParseError`] when the input is not well-formed YAML.
pub fn parse(input: &str) -> Result<Vec<Node>, ParseError> {
    let mut builder = TreeBuilder::default();
    for event in Parser::new_from_str(input) {
        let (event, span) = event.map_err(|e| ParseError {
            kind: ParseErrorKind::Syntax,
            message: e.to_string(),
            line: None,
        })?;
        builder.on_event(event, span);
    }
    builder.finish()
}

/// Folds the parser's event stream into completed document trees.
#[derive(Default)]
struct TreeBuilder {
    documents: Vec<Node>,
    /// Containers still being filled, innermost last.
    open: Vec<Node>,
}

impl TreeBuilder {
    fn on_event(&mut self, event: Event<'_>, span: Span) {
        let line = span.start.line();
        match event {
            Event::Scalar(value, ..) => self.emit(Node::scalar(value.into_owned(), line)),
            Event::SequenceStart(..) => self.open.push(Node::sequence(line)),
            Event::MappingStart(..) => self.open.push(Node::mapping(line)),
            Event::SequenceEnd | Event::MappingEnd => {
                if let Some(node) = self.open.pop() {
                    self.emit(node);
                }
            }
            Event::Alias(..) => self.emit(Node::alias(line)),
            // Stream and document delimiters carry no tree content.
            _ => {}
        }
    }

    /// Attach a completed node to its enclosing container, or record it as
    /// a finished document at depth zero.
    fn emit(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.documents.push(node),
        }
    }

    fn finish(self) -> Result<Vec<Node>, ParseError> {
        // The scanner reports unterminated collections itself; this guards
        // the builder against a truncated event stream.
        if !self.open.is_empty() {
            return Err(ParseError {
                kind: ParseErrorKind::Structure,
                message: "unterminated collection in event stream".to_string(),
                line: None,
            });
        }
        Ok(self.documents)
    }
}
