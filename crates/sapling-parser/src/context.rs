//! Per-parse state threaded through every node construction.
//! 每次解析的状态，贯穿所有节点构建。

use crate::ParseConfig;
use crate::expr::ExprParser;
use crate::grammar::Grammar;
use sapling_common::Span;
use sapling_diagnostic::{Diagnostic, DiagnosticKind, Label, WarningCode};
use sapling_lexer::Lexer;
use sapling_syntax::{Category, IdGen, Node, NodeId, NodeKind};

/// Everything one top-level parse owns: the id counter, collected warnings
/// and the configuration. Never shared between parses.
pub(crate) struct Context<'cfg> {
    pub config: &'cfg ParseConfig,
    pub grammar: &'static Grammar,
    ids: IdGen,
    diagnostics: Vec<Diagnostic>,
}

impl<'cfg> Context<'cfg> {
    pub fn new(config: &'cfg ParseConfig) -> Self {
        Self {
            config,
            grammar: Grammar::for_dialect(config.dialect),
            ids: IdGen::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn next_id(&mut self) -> NodeId {
        self.ids.next_id()
    }

    pub fn node(&mut self, kind: NodeKind, category: Category, lexeme: impl Into<String>) -> Node {
        Node::new(self.next_id(), kind, category, lexeme)
    }

    pub fn keyword(&mut self, lexeme: impl Into<String>) -> Node {
        self.node(NodeKind::Keyword, Category::Keyword, lexeme)
    }

    pub fn identifier(&mut self, lexeme: impl Into<String>) -> Node {
        self.node(NodeKind::Identifier, Category::Identifier, lexeme)
    }

    pub fn constant(&mut self, lexeme: impl Into<String>) -> Node {
        self.node(NodeKind::Constant, Category::Constant, lexeme)
    }

    pub fn warn(&mut self, kind: DiagnosticKind, span: Span, code: WarningCode) {
        self.diagnostics.push(
            Diagnostic::from_code(kind, span, code).with_label(Label::new(span, "here")),
        );
    }

    /// Parse `text`, which starts `offset` bytes into the whole source, as an
    /// expression. `None` when nothing usable was found.
    /// 将 `text` 解析为表达式，无可用结果时返回 `None`。
    pub fn parse_expr(&mut self, text: &str, offset: usize) -> Option<Node> {
        let tokens = Lexer::with_offset(text, self.grammar.table, offset).tokenize();
        ExprParser::new(&tokens, self).parse()
    }

    /// Like [`Context::parse_expr`] but falls back to the raw text as a
    /// constant, so the caller always gets a node.
    pub fn parse_expr_or_raw(&mut self, text: &str, offset: usize) -> Node {
        match self.parse_expr(text, offset) {
            Some(node) => node,
            None => {
                let span = Span::from_usize(offset, offset + text.len());
                self.warn(DiagnosticKind::Expression, span, WarningCode::RawFallback);
                self.constant(text.trim())
            }
        }
    }

    pub fn is_type_keyword(&self, word: &str) -> bool {
        crate::classify::is_dialect_type(self.config.dialect, word)
            || self.config.extra_type_keywords.iter().any(|w| w == word)
    }

    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
