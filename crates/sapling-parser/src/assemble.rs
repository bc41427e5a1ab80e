//! Program tree assembly.
//! 程序树组装。

use crate::classify::{classify_line, is_comment};
use crate::context::Context;
use sapling_common::SourceLines;
use sapling_diagnostic::{DiagnosticKind, WarningCode};
use sapling_syntax::{Category, Node, NodeKind};

/// Build the `program` tree for `text`.
///
/// The root is created first so it always carries id 1.
pub(crate) fn assemble(cx: &mut Context<'_>, text: &str) -> Node {
    let root_id = cx.next_id();
    let root = Node::new(root_id, NodeKind::Program, Category::Keyword, "Program");

    if !cx.config.dialect.is_line_oriented() {
        let expr = cx.parse_expr_or_raw(text, 0);
        let group = statements_group(cx, vec![expr]);
        return root.with_child(group);
    }

    let mut functions = Vec::new();
    let mut declarations = Vec::new();
    let mut statements = Vec::new();

    for line in SourceLines::new(text) {
        let (trimmed, offset) = line.trimmed();
        if trimmed.is_empty() || (cx.config.strip_comments && is_comment(trimmed)) {
            continue;
        }

        match classify_line(cx, trimmed, offset) {
            Some(node) => match node.kind() {
                NodeKind::FunctionDeclaration => functions.push(node),
                NodeKind::VariableDeclaration => declarations.push(node),
                _ => statements.push(node),
            },
            // Lines reduced to nothing by pre-processing, such as a lone
            // `}`, are dropped without comment.
            None if is_punctuation(trimmed) => {}
            None => cx.warn(DiagnosticKind::Statement, line.span, WarningCode::UnparsedLine),
        }
    }

    let mut root = root.with_children(functions);
    if !declarations.is_empty() {
        let group = cx
            .node(NodeKind::DeclarationsGroup, Category::Keyword, "Declarations")
            .with_children(declarations);
        root = root.with_child(group);
    }
    if !statements.is_empty() {
        root = root.with_child(statements_group(cx, statements));
    }
    root
}

fn statements_group(cx: &mut Context<'_>, statements: Vec<Node>) -> Node {
    cx.node(NodeKind::StatementsGroup, Category::Keyword, "Statements")
        .with_children(statements)
}

fn is_punctuation(text: &str) -> bool {
    text.chars().all(|c| matches!(c, '{' | '}' | ';'))
}
