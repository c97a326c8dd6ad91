use podcheck::error::ParseErrorKind;
use podcheck::node::{Node, NodeKind};
use podcheck::parse::parse;

fn single_document(input: &str) -> Node {
    let mut documents = parse(input).expect("input should parse");
    assert_eq!(documents.len(), 1, "expected one document");
    documents.remove(0)
}

#[test]
fn mapping_children_alternate_key_value() {
    let doc = single_document("a: 1\nb: two\n");
    assert_eq!(doc.kind, NodeKind::Mapping);
    assert_eq!(doc.children.len(), 4);

    let pairs: Vec<_> = doc.pairs().collect();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0.value, "a");
    assert_eq!(pairs[0].1.value, "1");
    assert_eq!(pairs[1].0.value, "b");
    assert_eq!(pairs[1].1.value, "two");
}

#[test]
fn lines_are_one_based() {
    let doc = single_document("a: 1\nitems:\n  - one\n  - two\n");
    assert_eq!(doc.line, 1);

    let a = doc.get("a").expect("a");
    assert_eq!(a.line, 1);

    let items = doc.get("items").expect("items");
    assert_eq!(items.kind, NodeKind::Sequence);
    assert_eq!(items.children.len(), 2);
    assert_eq!(items.children[0].line, 3);
    assert_eq!(items.children[1].line, 4);
}

#[test]
fn scalars_keep_raw_string_content() {
    let doc = single_document("port: 8080\nquoted: \"8080\"\nflag: true\n");
    assert_eq!(doc.get("port").expect("port").value, "8080");
    assert_eq!(doc.get("quoted").expect("quoted").value, "8080");
    // Booleans are not interpreted; the validator sees the raw text.
    assert_eq!(doc.get("flag").expect("flag").value, "true");
}

#[test]
fn missing_value_becomes_empty_scalar() {
    let doc = single_document("a:\nb: 1\n");
    let a = doc.get("a").expect("a");
    assert_eq!(a.kind, NodeKind::Scalar);
    assert_eq!(a.value, "");
}

#[test]
fn alias_nodes_keep_their_own_kind() {
    let doc = single_document("a: &x 1\nb: *x\n");
    assert_eq!(doc.get("a").expect("a").kind, NodeKind::Scalar);
    assert_eq!(doc.get("b").expect("b").kind, NodeKind::Alias);
}

#[test]
fn get_returns_none_for_absent_keys_and_non_mappings() {
    let doc = single_document("a: 1\n");
    assert!(doc.get("missing").is_none());

    let list = single_document("- a\n- b\n");
    assert_eq!(list.kind, NodeKind::Sequence);
    assert!(list.get("a").is_none());
    assert_eq!(list.pairs().count(), 0);
}

#[test]
fn nested_shapes_build_recursively() {
    let doc = single_document("outer:\n  inner:\n    - x: 1\n");
    let outer = doc.get("outer").expect("outer");
    let inner = outer.get("inner").expect("inner");
    assert_eq!(inner.kind, NodeKind::Sequence);
    assert_eq!(inner.children[0].kind, NodeKind::Mapping);
    assert_eq!(inner.children[0].get("x").expect("x").value, "1");
}

#[test]
fn empty_input_yields_no_documents() {
    assert!(parse("").expect("empty").is_empty());
    assert!(parse("# comment only\n").expect("comment").is_empty());
}

#[test]
fn multi_document_streams_split_per_document() {
    let documents = parse("a: 1\n---\nb: 2\n").expect("stream");
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].get("a").expect("a").value, "1");
    assert_eq!(documents[1].get("b").expect("b").value, "2");
}

#[test]
fn malformed_yaml_is_a_syntax_error() {
    let err = parse("a: [1, 2\n").expect_err("unterminated flow sequence");
    assert_eq!(err.kind, ParseErrorKind::Syntax);
    assert!(!err.message.is_empty());
}
