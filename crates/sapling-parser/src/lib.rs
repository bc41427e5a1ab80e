//! Best-effort parser for Sapling.
//! Sapling 的尽力而为解析器。
//!
//! Turns a snippet tagged with a [`Dialect`] into a `program`-rooted
//! [`Node`] tree. Three layers cooperate:
//!
//! - an operator-precedence expression parser driven by a per-dialect table
//! - a line classifier that matches each line against an ordered rule table
//! - an assembler grouping functions, declarations and other statements
//!
//! ## Never failing
//!
//! No input makes these entry points fail. Malformed text degrades into
//! partial nodes; [`parse_with_diagnostics`] additionally reports each place
//! where the parser had to guess.
//! 任何输入都不会导致失败；畸形文本会退化为部分节点。

mod assemble;
mod classify;
mod config;
mod context;
mod expr;
mod grammar;
mod text;

pub use config::ParseConfig;
pub use grammar::{Assoc, Grammar, Level};

use context::Context;
use sapling_common::Span;
use sapling_diagnostic::Diagnostic;
use sapling_lexer::Token;
use sapling_syntax::{Dialect, Node};

/// Build the tree for `text` in `dialect`.
/// 为 `dialect` 方言的 `text` 构建语法树。
pub fn build(text: &str, dialect: Dialect) -> Node {
    build_with_config(text, &ParseConfig::for_dialect(dialect))
}

/// Build the tree for `text` with a custom configuration.
pub fn build_with_config(text: &str, config: &ParseConfig) -> Node {
    parse_with_diagnostics(text, config).0
}

/// Build the tree and also return a warning for every degradation.
/// 构建语法树，并为每处降级返回一条警告。
pub fn parse_with_diagnostics(text: &str, config: &ParseConfig) -> (Node, Vec<Diagnostic>) {
    let mut cx = Context::new(config);
    let root = assemble::assemble(&mut cx, text);
    (root, cx.finish())
}

/// Parse `text` as a single arithmetic expression. Falls back to the raw
/// text as a constant when nothing parses.
pub fn parse_expression(text: &str) -> Node {
    parse_expression_in(text, Dialect::Expression)
}

/// Parse `text` as a single expression using `dialect`'s operator table.
pub fn parse_expression_in(text: &str, dialect: Dialect) -> Node {
    let config = ParseConfig::for_dialect(dialect);
    let mut cx = Context::new(&config);
    cx.parse_expr_or_raw(text, 0)
}

/// Parse an already tokenized expression. `None` when the first lexeme
/// cannot start an expression; an empty slice yields an empty identifier.
/// 解析已分词的表达式。
pub fn parse_tokens<S: AsRef<str>>(lexemes: &[S], dialect: Dialect) -> Option<Node> {
    let tokens: Vec<Token> = lexemes
        .iter()
        .map(|s| Token::new(s.as_ref(), Span::DUMMY))
        .collect();
    let config = ParseConfig::for_dialect(dialect);
    let mut cx = Context::new(&config);
    expr::ExprParser::new(&tokens, &mut cx).parse()
}

/// Classify one line of `dialect` code on its own. Comment lines and lines
/// that produce nothing yield `None`.
/// 单独分类一行代码。
pub fn classify(line: &str, dialect: Dialect) -> Option<Node> {
    let config = ParseConfig::for_dialect(dialect);
    let trimmed = line.trim();
    if config.strip_comments && classify::is_comment(trimmed) {
        return None;
    }
    let mut cx = Context::new(&config);
    classify::classify_line(&mut cx, trimmed, 0)
}

/// Name of the statement rule that would handle `line`, in priority order
/// `variable-declaration`, `function-declaration`, `conditional`, `for`,
/// `return`, `bare-keyword`, `assignment`, `expression-statement`.
pub fn statement_rule(line: &str, dialect: Dialect) -> Option<&'static str> {
    let config = ParseConfig::for_dialect(dialect);
    let cx = Context::new(&config);
    let line = classify::StmtLine::prepare(dialect, line, 0)?;
    classify::matching_rule(&cx, &line).map(|rule| rule.name)
}
