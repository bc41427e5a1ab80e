//! Precedence-climbing expression parser.
//! 优先级爬升表达式解析器。
//!
//! The parser never fails. Missing operands leave operator nodes with fewer
//! children, unknown tokens stop consumption, and leftovers are reported as
//! warnings and ignored.

use crate::context::Context;
use crate::grammar::{Assoc, Grammar};
use sapling_common::Span;
use sapling_diagnostic::{DiagnosticKind, WarningCode};
use sapling_lexer::{LexemeClass, Token};
use sapling_syntax::{Category, Node, NodeKind};

/// Words that read as identifiers but denote literal values.
const LITERAL_WORDS: &[&str] = &["true", "false", "null", "True", "False", "None"];

/// Parses one token slice. The cursor only moves forward.
pub(crate) struct ExprParser<'t, 'p, 'cfg> {
    tokens: &'t [Token],
    pos: usize,
    grammar: &'static Grammar,
    cx: &'p mut Context<'cfg>,
    depth: usize,
    /// Set once the depth limit has been reported for this expression.
    too_deep: bool,
}

impl<'t, 'p, 'cfg> ExprParser<'t, 'p, 'cfg> {
    pub fn new(tokens: &'t [Token], cx: &'p mut Context<'cfg>) -> Self {
        Self {
            tokens,
            pos: 0,
            grammar: cx.grammar,
            cx,
            depth: 0,
            too_deep: false,
        }
    }

    /// Parse the whole slice.
    ///
    /// An empty slice yields an empty identifier placeholder. `None` means the
    /// first token could not start an expression at all.
    pub fn parse(mut self) -> Option<Node> {
        if self.tokens.is_empty() {
            self.cx
                .warn(DiagnosticKind::Expression, Span::DUMMY, WarningCode::EmptyExpression);
            return Some(self.cx.identifier(""));
        }

        let node = self.parse_level(0)?;

        if !self.at_end() {
            let span = self.current_span().merge(self.last_span());
            self.cx
                .warn(DiagnosticKind::Expression, span, WarningCode::TrailingInput);
        }

        Some(node)
    }

    /// One binary level, or the unary level once the table is exhausted.
    fn parse_level(&mut self, level: usize) -> Option<Node> {
        let Some(level_ops) = self.grammar.levels.get(level) else {
            return self.parse_unary();
        };

        let mut left = self.parse_level(level + 1)?;

        loop {
            // A chain stops growing at the nesting limit; the rest of the
            // line is left over as trailing input.
            if left.height() >= self.cx.config.max_depth && self.check_any(level_ops.ops) {
                self.report_too_deep();
                break;
            }
            let Some(op) = self.eat_any(level_ops.ops) else {
                break;
            };
            let right = match level_ops.assoc {
                Assoc::Left => self.parse_level(level + 1),
                Assoc::Right => self.descend(|p| p.parse_level(level)),
            };
            let missing = right.is_none();
            if missing {
                self.cx
                    .warn(DiagnosticKind::Expression, op.span, WarningCode::MissingOperand);
            }

            left = self
                .cx
                .node(NodeKind::BinaryOp, Category::Operator, op.text.as_str())
                .with_child(left)
                .with_children(right);

            if missing {
                break;
            }
        }

        Some(left)
    }

    fn parse_unary(&mut self) -> Option<Node> {
        let Some(op) = self.eat_any(self.grammar.prefixes) else {
            return self.parse_postfix();
        };

        let operand = self.descend(|p| p.parse_unary());
        if operand.is_none() {
            self.cx
                .warn(DiagnosticKind::Expression, op.span, WarningCode::MissingOperand);
        }

        Some(
            self.cx
                .node(NodeKind::UnaryOp, Category::Operator, op.text.as_str())
                .with_children(operand),
        )
    }

    fn parse_postfix(&mut self) -> Option<Node> {
        let primary = self.parse_primary()?;

        if primary.kind() != NodeKind::Identifier {
            return Some(primary);
        }
        match self.eat_any(self.grammar.postfixes) {
            Some(op) => Some(
                self.cx
                    .node(NodeKind::UnaryOp, Category::Operator, op.text.as_str())
                    .with_child(primary),
            ),
            None => Some(primary),
        }
    }

    fn parse_primary(&mut self) -> Option<Node> {
        let token = self.current()?;

        if token.is("(") {
            let open = token.span;
            self.advance();
            let inner = self.descend(|p| p.parse_level(0));
            if !self.eat(")") && self.at_end() {
                self.cx
                    .warn(DiagnosticKind::Expression, open, WarningCode::UnclosedDelimiter);
            }
            return inner;
        }

        match token.class() {
            LexemeClass::Number | LexemeClass::Quoted => {
                self.advance();
                Some(self.cx.constant(token.text.as_str()))
            }
            LexemeClass::Identifier => {
                self.advance();
                if self.check("(") {
                    Some(self.parse_call(token))
                } else if LITERAL_WORDS.contains(&token.text.as_str()) {
                    Some(self.cx.constant(token.text.as_str()))
                } else {
                    Some(self.cx.identifier(token.text.as_str()))
                }
            }
            LexemeClass::Other => None,
        }
    }

    /// `callee ( arg, ... )` with the cursor on `(`.
    fn parse_call(&mut self, callee: &Token) -> Node {
        let open = self.current_span();
        self.advance();

        let mut args = Vec::new();
        loop {
            if self.at_end() {
                self.cx
                    .warn(DiagnosticKind::Expression, open, WarningCode::UnclosedDelimiter);
                break;
            }
            if self.eat(")") {
                break;
            }

            let before = self.pos;
            if let Some(arg) = self.descend(|p| p.parse_level(0)) {
                args.push(arg);
            }
            if self.eat(",") {
                continue;
            }
            if self.pos == before || !self.check(")") {
                // Neither an argument nor a separator: leave the rest to the
                // caller, which reports it as trailing input.
                if self.at_end() {
                    self.cx
                        .warn(DiagnosticKind::Expression, open, WarningCode::UnclosedDelimiter);
                }
                break;
            }
        }

        self.cx
            .node(NodeKind::Call, Category::Identifier, callee.text.as_str())
            .with_children(args)
    }

    /// Run `f` one nesting level deeper, refusing past the configured limit.
    fn descend<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= self.cx.config.max_depth {
            self.report_too_deep();
            return None;
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Warn about the nesting limit, once per expression.
    fn report_too_deep(&mut self) {
        if !self.too_deep {
            self.too_deep = true;
            let span = self.current_span();
            self.cx
                .warn(DiagnosticKind::Expression, span, WarningCode::NestingTooDeep);
        }
    }

    // ========== Token Cursor ==========

    fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn current_span(&self) -> Span {
        self.current().map_or_else(|| self.last_span(), |t| t.span)
    }

    fn last_span(&self) -> Span {
        self.tokens.last().map_or(Span::DUMMY, |t| t.span)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn check(&self, text: &str) -> bool {
        self.current().is_some_and(|t| t.is(text))
    }

    fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, text: &str) -> bool {
        if self.check(text) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn check_any(&self, ops: &[&str]) -> bool {
        self.current().is_some_and(|t| ops.contains(&t.text.as_str()))
    }

    /// Consume the current token if it is one of `ops`.
    fn eat_any(&mut self, ops: &[&str]) -> Option<&'t Token> {
        let token = self.current()?;
        if ops.contains(&token.text.as_str()) {
            self.advance();
            Some(token)
        } else {
            None
        }
    }
}
