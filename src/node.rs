//! Generic document tree consumed by the validator.
//!
//! The parser hands over plain nodes instead of typed structs so that the
//! validator can attribute every violation to a source line, including
//! fields whose values have the wrong shape entirely.

/// Structural kind of a parsed node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A single value. YAML nulls arrive as empty scalars.
    Scalar,
    /// Key/value mapping. `children` holds alternating key and value nodes.
    Mapping,
    /// Ordered sequence. `children` holds the element nodes.
    Sequence,
    /// A `*name` reference to an anchored node elsewhere in the document.
    /// Validation treats aliases as "not the expected kind".
    Alias,
}

/// One element of a parsed document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// Scalar content. Empty for non-scalar nodes.
    pub value: String,
    /// For a mapping, alternating key/value pairs; for a sequence, elements.
    pub children: Vec<Node>,
    /// 1-based source line, for diagnostics.
    pub line: usize,
}

impl Node {
    pub(crate) fn scalar(value: String, line: usize) -> Self {
        Node {
            kind: NodeKind::Scalar,
            value,
            children: Vec::new(),
            line,
        }
    }

    pub(crate) fn mapping(line: usize) -> Self {
        Node {
            kind: NodeKind::Mapping,
            value: String::new(),
            children: Vec::new(),
            line,
        }
    }

    pub(crate) fn sequence(line: usize) -> Self {
        Node {
            kind: NodeKind::Sequence,
            value: String::new(),
            children: Vec::new(),
            line,
        }
    }

    pub(crate) fn alias(line: usize) -> Self {
        Node {
            kind: NodeKind::Alias,
            value: String::new(),
            children: Vec::new(),
            line,
        }
    }

    pub fn is_scalar(&self) -> bool {
        self.kind == NodeKind::Scalar
    }

    /// Key/value pairs of a mapping node. Empty for any other kind, so
    /// callers expecting an object shape need no kind pre-check.
    pub fn pairs(&self) -> impl Iterator<Item = (&Node, &Node)> + '_ {
        let children: &[Node] = match self.kind {
            NodeKind::Mapping => &self.children,
            _ => &[],
        };
        children.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Value for a scalar key in a mapping node. First occurrence wins when
    /// the document repeats a key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.pairs()
            .find(|(k, _)| k.is_scalar() && k.value == key)
            .map(|(_, v)| v)
    }
}
