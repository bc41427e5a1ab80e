//! Integration tests for sapling-syntax crate.

use sapling_syntax::{Category, Dialect, Node, NodeId, NodeKind, UnknownDialect};

fn binary(id: u32, op: &str, left: Node, right: Node) -> Node {
    Node::new(NodeId(id), NodeKind::BinaryOp, Category::Operator, op)
        .with_child(left)
        .with_child(right)
}

fn constant(id: u32, text: &str) -> Node {
    Node::new(NodeId(id), NodeKind::Constant, Category::Constant, text)
}

// ============================================================================
// Dialects
// ============================================================================

#[test]
fn test_dialect_names_round_trip() {
    for dialect in Dialect::ALL {
        assert_eq!(dialect.as_str().parse::<Dialect>(), Ok(dialect));
    }
}

#[test]
fn test_dialect_aliases() {
    assert_eq!("py".parse::<Dialect>(), Ok(Dialect::PythonLike));
    assert_eq!("Java".parse::<Dialect>(), Ok(Dialect::JavaLike));
    assert_eq!(" expr ".parse::<Dialect>(), Ok(Dialect::Expression));
}

#[test]
fn test_unknown_dialect() {
    let err = "cobol".parse::<Dialect>().unwrap_err();
    assert_eq!(err, UnknownDialect("cobol".to_string()));
    assert!(err.to_string().contains("cobol"));
}

#[test]
fn test_dialect_from_extension() {
    assert_eq!(Dialect::from_extension("c"), Dialect::CLike);
    assert_eq!(Dialect::from_extension("py"), Dialect::PythonLike);
    assert_eq!(Dialect::from_extension("java"), Dialect::JavaLike);
    assert_eq!(Dialect::from_extension("txt"), Dialect::Expression);
}

#[test]
fn test_only_expression_is_not_line_oriented() {
    let line_oriented: Vec<_> = Dialect::ALL
        .into_iter()
        .filter(|d| d.is_line_oriented())
        .collect();
    assert_eq!(
        line_oriented,
        vec![Dialect::CLike, Dialect::PythonLike, Dialect::JavaLike]
    );
    assert_eq!(Dialect::default(), Dialect::Expression);
}

// ============================================================================
// Nodes
// ============================================================================

#[test]
fn test_node_accessors() {
    let node = binary(3, "+", constant(1, "1"), constant(2, "2"));
    assert_eq!(node.id(), NodeId(3));
    assert_eq!(node.kind(), NodeKind::BinaryOp);
    assert_eq!(node.category(), Category::Operator);
    assert_eq!(node.lexeme(), "+");
    assert_eq!(node.children().len(), 2);
    assert_eq!(node.child(1).map(Node::lexeme), Some("2"));
    assert!(node.child(2).is_none());
    assert!(!node.is_leaf());
}

#[test]
fn test_find_is_preorder() {
    let tree = binary(
        5,
        "*",
        binary(3, "+", constant(1, "1"), constant(2, "2")),
        constant(4, "3"),
    );
    assert_eq!(tree.find(NodeKind::Constant).map(Node::lexeme), Some("1"));
    assert!(tree.find(NodeKind::Call).is_none());
    assert_eq!(tree.len(), 5);
}

#[test]
fn test_grouping_kinds_are_distinct_from_source_constructs() {
    assert!(NodeKind::DeclarationsGroup.is_grouping());
    assert!(NodeKind::ParameterList.is_grouping());
    assert!(!NodeKind::Statement.is_grouping());
    assert!(!NodeKind::Call.is_grouping());
}

#[test]
fn test_kind_display() {
    assert_eq!(NodeKind::FunctionDeclaration.to_string(), "function-declaration");
    assert_eq!(Category::Constant.to_string(), "constant");
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_json_shape() {
    let node = binary(3, "+", constant(1, "1"), constant(2, "2"));
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["kind"], "binary-op");
    assert_eq!(json["category"], "operator");
    assert_eq!(json["lexeme"], "+");
    assert_eq!(json["children"][0]["kind"], "constant");
    assert_eq!(json["children"][1]["lexeme"], "2");
}

#[test]
fn test_dialect_serializes_kebab_case() {
    let json = serde_json::to_value(Dialect::PythonLike).unwrap();
    assert_eq!(json, "python-like");
}
