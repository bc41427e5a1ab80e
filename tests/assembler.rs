//! Integration tests for whole-program tree assembly.

use sapling_diagnostic::WarningCode;
use sapling_parser::{ParseConfig, build, build_with_config, parse_with_diagnostics};
use sapling_syntax::{Dialect, Node, NodeId, NodeKind};
use std::collections::HashSet;

const C_PROGRAM: &str = r#"
int add(int a, int b) {
    return a + b;
}

int main() {
    int x = 5;
    int y = add(x, 3);
    if (y > 5) {
        printf("big");
    } else {
        printf("small");
    }
    return 0;
}
"#;

const PYTHON_PROGRAM: &str = "\
# area of a rectangle
def area(w, h):
    return w * h

x = 10
if x > 5:
    print(area(x, 2))
else:
    pass
";

const JAVA_PROGRAM: &str = "\
public class Counter {
    private int count = 0;

    public void increment() {
        count += 1;
    }
}
";

fn kinds(nodes: &[Node]) -> Vec<NodeKind> {
    nodes.iter().map(Node::kind).collect()
}

fn lexemes(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().map(Node::lexeme).collect()
}

// ============================================================================
// Grouping
// ============================================================================

#[test]
fn test_c_program_groups() {
    let tree = build(C_PROGRAM, Dialect::CLike);
    assert_eq!(tree.kind(), NodeKind::Program);
    // Call lines shaped like headers land with the functions.
    assert_eq!(
        lexemes(tree.children()),
        vec![
            "Function: add",
            "Function: main",
            "Function: printf",
            "Function: printf",
            "Declarations",
            "Statements",
        ]
    );

    let decls = tree.child(4).unwrap();
    assert_eq!(decls.kind(), NodeKind::DeclarationsGroup);
    assert_eq!(lexemes(decls.children()), vec!["Variable: x", "Variable: y"]);

    let stmts = tree.child(5).unwrap();
    assert_eq!(stmts.kind(), NodeKind::StatementsGroup);
    assert_eq!(
        kinds(stmts.children()),
        vec![
            NodeKind::Return,
            NodeKind::If,
            NodeKind::Keyword,
            NodeKind::Return,
        ]
    );
}

#[test]
fn test_python_program_without_declarations() {
    let tree = build(PYTHON_PROGRAM, Dialect::PythonLike);
    assert_eq!(lexemes(tree.children()), vec!["Function: area", "Statements"]);

    let stmts = tree.child(1).unwrap();
    assert_eq!(
        kinds(stmts.children()),
        vec![
            NodeKind::Return,
            NodeKind::Assignment,
            NodeKind::If,
            NodeKind::Statement,
            NodeKind::Keyword,
            NodeKind::Keyword,
        ]
    );
}

#[test]
fn test_java_program() {
    let tree = build(JAVA_PROGRAM, Dialect::JavaLike);
    assert_eq!(
        lexemes(tree.children()),
        vec!["Function: increment", "Declarations", "Statements"]
    );
    let decls = tree.child(1).unwrap();
    assert_eq!(lexemes(decls.children()), vec!["Variable: count"]);
}

#[test]
fn test_functions_come_first_regardless_of_order() {
    let tree = build("x = 1;\nint y;\nvoid f() {\n}", Dialect::CLike);
    assert_eq!(
        kinds(tree.children()),
        vec![
            NodeKind::FunctionDeclaration,
            NodeKind::DeclarationsGroup,
            NodeKind::StatementsGroup,
        ]
    );
}

#[test]
fn test_expression_dialect_wraps_single_expression() {
    let tree = build("1 + 2", Dialect::Expression);
    assert_eq!(lexemes(tree.children()), vec!["Statements"]);
    let expr = tree.child(0).and_then(|g| g.child(0)).unwrap();
    assert_eq!(expr.kind(), NodeKind::BinaryOp);
}

#[test]
fn test_empty_program() {
    let tree = build("", Dialect::CLike);
    assert_eq!(tree.kind(), NodeKind::Program);
    assert!(tree.is_leaf());

    let tree = build("\n  \n// only a comment\n", Dialect::CLike);
    assert!(tree.is_leaf());
}

#[test]
fn test_extra_type_keywords() {
    let config = ParseConfig::for_dialect(Dialect::CLike).type_keyword("size_t");
    let tree = build_with_config("size_t n = 4;", &config);
    assert_eq!(tree.child(0).map(Node::kind), Some(NodeKind::DeclarationsGroup));

    let tree = build("size_t n = 4;", Dialect::CLike);
    assert_eq!(tree.child(0).map(Node::kind), Some(NodeKind::StatementsGroup));
}

#[test]
fn test_comments_kept_when_not_stripped() {
    let config = ParseConfig::for_dialect(Dialect::PythonLike).strip_comments(false);
    let tree = build_with_config("# note\nx = 1", &config);
    let stmts = tree.child(0).unwrap();
    assert_eq!(stmts.children().len(), 1);
    assert_eq!(stmts.child(0).map(Node::kind), Some(NodeKind::Assignment));
}

// ============================================================================
// Ids
// ============================================================================

#[test]
fn test_root_id_and_uniqueness() {
    let tree = build(C_PROGRAM, Dialect::CLike);
    assert_eq!(tree.id(), NodeId(1));
    let ids: HashSet<_> = tree.iter().map(Node::id).collect();
    assert_eq!(ids.len(), tree.len());
}

#[test]
fn test_ids_restart_per_parse() {
    let first = build(C_PROGRAM, Dialect::CLike);
    let second = build(C_PROGRAM, Dialect::CLike);
    assert_eq!(first, second);
    assert_eq!(build("1", Dialect::Expression).id(), NodeId(1));
}

// ============================================================================
// Never Failing
// ============================================================================

#[test]
fn test_hostile_inputs_still_build() {
    let inputs = [
        "",
        "(((",
        ")))",
        "= = =",
        "if",
        "for",
        "def",
        "int",
        "int (",
        "int x = = 5;",
        "return return",
        "}{",
        "\"unterminated",
        "a ++ ++ b",
        "for (;;)",
        "for x in",
        "f(,,)",
        "1 + * 2",
        "public static",
        "ü = 1",
        "😀 + ü",
        "\t\r\n",
        "if (x > 0",
        "def f(:",
        "x += ;",
    ];
    for dialect in Dialect::ALL {
        for input in inputs {
            let tree = build(input, dialect);
            assert_eq!(tree.kind(), NodeKind::Program, "{dialect}: {input:?}");
            assert_eq!(tree.id(), NodeId(1));
        }
    }
}

#[test]
fn test_long_operator_chain_is_bounded() {
    let source = format!("x = 1{};", " + 1".repeat(200_000));
    let (tree, diags) = parse_with_diagnostics(&source, &ParseConfig::for_dialect(Dialect::CLike));
    assert_eq!(tree.kind(), NodeKind::Program);
    assert!(tree.height() <= ParseConfig::new().max_depth + 8);

    let codes: Vec<_> = diags.iter().filter_map(|d| d.code).collect();
    assert!(codes.contains(&WarningCode::NestingTooDeep));
    assert!(codes.contains(&WarningCode::TrailingInput));

    let copy = tree.clone();
    assert_eq!(copy, tree);
    drop(copy);
    drop(tree);
}
