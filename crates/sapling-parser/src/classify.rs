//! Line-oriented statement classifier.
//! 按行的语句分类器。
//!
//! Each logical line is matched against an ordered rule table. The first
//! rule whose predicate accepts the line builds its node; later rules are
//! never consulted, even if the builder comes back empty. The order is a
//! tie-break: declarations precede function headers, which precede control
//! headers, which precede plain assignment.
//! 每行按顺序匹配规则表，第一个谓词接受该行的规则负责构建节点。

use crate::context::Context;
use crate::text::{
    after_word, find_assignment, first_group, first_word, offset_in, starts_with_word,
    strip_line_comment, strip_terminator,
};
use sapling_syntax::{Category, Dialect, Node, NodeKind};

const BASE_TYPES: &[&str] = &["int", "float", "double", "char", "void", "bool", "string"];
const C_TYPES: &[&str] = &["long", "short", "unsigned", "signed", "const"];
const JAVA_TYPES: &[&str] = &["String", "boolean", "long", "short", "byte", "var"];

const JAVA_MODIFIERS: &[&str] = &[
    "public",
    "private",
    "protected",
    "static",
    "final",
    "abstract",
];

/// Words that can never name a function or appear in its return type.
const CONTROL_WORDS: &[&str] = &[
    "if", "else", "elif", "while", "for", "return", "switch", "case", "new", "throw", "catch",
    "do", "sizeof",
];

/// Lines consisting of just one of these become a bare keyword node.
const BARE_KEYWORDS: &[&str] = &["break", "continue", "else", "pass", "try", "finally", "do"];

const FOR_LABELS: [&str; 3] = ["Init", "Condition", "Update"];

/// Whether `word` is one of the dialect's built-in declaration types.
pub(crate) fn is_dialect_type(dialect: Dialect, word: &str) -> bool {
    BASE_TYPES.contains(&word)
        || match dialect {
            Dialect::CLike => C_TYPES.contains(&word),
            Dialect::JavaLike => JAVA_TYPES.contains(&word),
            Dialect::Expression | Dialect::PythonLike => false,
        }
}

/// Whether a trimmed line is a comment.
pub(crate) fn is_comment(text: &str) -> bool {
    text.starts_with("//") || text.starts_with('#')
}

/// A pre-processed line: trimmed, leading `}` removed, trailing `//` or
/// `#` comment and Java modifiers stripped.
pub(crate) struct StmtLine<'a> {
    pub text: &'a str,
    /// Byte offset of `text` in the whole source.
    pub offset: usize,
}

impl<'a> StmtLine<'a> {
    pub fn prepare(dialect: Dialect, raw: &'a str, offset: usize) -> Option<Self> {
        let mut text = raw.trim().trim_start_matches('}').trim_start();

        match dialect {
            Dialect::CLike | Dialect::JavaLike => text = strip_line_comment(text, "//"),
            Dialect::PythonLike => text = strip_line_comment(text, "#"),
            Dialect::Expression => {}
        }
        if dialect == Dialect::JavaLike {
            while let Some(rest) = JAVA_MODIFIERS.iter().find_map(|m| after_word(text, m)) {
                text = rest;
            }
        }

        if text.is_empty() {
            return None;
        }
        Some(StmtLine {
            text,
            offset: offset + offset_in(raw, text),
        })
    }

    /// A sub-line for `part`, which must be a slice of this line's text.
    fn part(&self, part: &'a str) -> StmtLine<'a> {
        let part = part.trim();
        StmtLine {
            text: part,
            offset: self.offset_of(part),
        }
    }

    fn offset_of(&self, part: &str) -> usize {
        self.offset + offset_in(self.text, part)
    }
}

/// A predicate and the builder it guards.
pub(crate) struct Rule {
    pub name: &'static str,
    matches: fn(&Context<'_>, &StmtLine<'_>) -> bool,
    build: fn(&mut Context<'_>, &StmtLine<'_>) -> Option<Node>,
}

pub(crate) const RULES: &[Rule] = &[
    Rule {
        name: "variable-declaration",
        matches: is_variable_declaration,
        build: build_variable_declaration,
    },
    Rule {
        name: "function-declaration",
        matches: is_function_declaration,
        build: build_function_declaration,
    },
    Rule {
        name: "conditional",
        matches: is_conditional,
        build: build_conditional,
    },
    Rule {
        name: "for",
        matches: is_for,
        build: build_for,
    },
    Rule {
        name: "return",
        matches: is_return,
        build: build_return,
    },
    Rule {
        name: "bare-keyword",
        matches: is_bare_keyword,
        build: build_bare_keyword,
    },
    Rule {
        name: "assignment",
        matches: is_assignment,
        build: build_assignment,
    },
    Rule {
        name: "expression-statement",
        matches: |_, _| true,
        build: build_expression_statement,
    },
];

/// The first rule accepting `line`.
pub(crate) fn matching_rule(cx: &Context<'_>, line: &StmtLine<'_>) -> Option<&'static Rule> {
    RULES.iter().find(|rule| (rule.matches)(cx, line))
}

/// Classify one line. `None` when the line is empty after pre-processing
/// or its rule produced nothing.
pub(crate) fn classify_line(cx: &mut Context<'_>, raw: &str, offset: usize) -> Option<Node> {
    let line = StmtLine::prepare(cx.config.dialect, raw, offset)?;
    let rule = matching_rule(cx, &line)?;
    (rule.build)(cx, &line)
}

// ========== Variable Declarations ==========

/// Declared type word with `[]` and `*` suffixes removed.
fn base_type(word: &str) -> &str {
    word.trim_end_matches("[]").trim_end_matches('*')
}

/// Text before the assignment operator, or the whole line minus terminator.
fn declaration_lhs(text: &str) -> &str {
    match find_assignment(text) {
        Some((idx, _)) => text[..idx].trim(),
        None => strip_terminator(text),
    }
}

fn is_variable_declaration(cx: &Context<'_>, line: &StmtLine<'_>) -> bool {
    let Some(first) = first_word(line.text) else {
        return false;
    };
    if !cx.is_type_keyword(base_type(first)) {
        return false;
    }
    let lhs = declaration_lhs(line.text);
    !lhs.contains('(') && lhs.split_whitespace().count() >= 2
}

fn build_variable_declaration(cx: &mut Context<'_>, line: &StmtLine<'_>) -> Option<Node> {
    let lhs = declaration_lhs(line.text);
    let words: Vec<&str> = lhs.split_whitespace().collect();
    let ty = *words.first()?;
    let name = words.last()?.trim_start_matches(['*', '&']);

    let ty_node = cx.keyword(ty);
    let name_node = cx.identifier(name);
    let mut children = vec![ty_node, name_node];

    if let Some((idx, op)) = find_assignment(line.text) {
        let rhs = strip_terminator(&line.text[idx + op.len()..]);
        let target = cx.identifier(name);
        let value = cx.parse_expr_or_raw(rhs, line.offset_of(rhs));
        children.push(
            cx.node(NodeKind::Assignment, Category::Operator, op)
                .with_child(target)
                .with_child(value),
        );
    }

    Some(
        cx.node(
            NodeKind::VariableDeclaration,
            Category::Identifier,
            format!("Variable: {name}"),
        )
        .with_children(children),
    )
}

// ========== Function Declarations ==========

/// Return type words and name of a C or Java style header. The name is
/// whatever precedes the first `(`, dotted paths included.
fn split_c_header(text: &str) -> Option<(Vec<&str>, &str)> {
    let head = &text[..text.find('(')?];
    let mut words: Vec<&str> = head.split_whitespace().collect();
    let name = words.pop()?.trim_start_matches(['*', '&']);
    if name.is_empty() {
        return None;
    }
    Some((words, name))
}

fn is_function_declaration(cx: &Context<'_>, line: &StmtLine<'_>) -> bool {
    let text = line.text;

    if cx.config.dialect == Dialect::PythonLike {
        return after_word(text, "def").is_some_and(|rest| rest.contains('('));
    }

    let (Some(open), true) = (text.find('('), text.contains(')')) else {
        return false;
    };
    if !(text.contains('{') || text.ends_with(')') || text.ends_with(';')) {
        return false;
    }
    // `if (x > 0) {` and `return f(x);` are not headers.
    !text[..open]
        .split_whitespace()
        .any(|w| CONTROL_WORDS.contains(&w))
}

fn build_function_declaration(cx: &mut Context<'_>, line: &StmtLine<'_>) -> Option<Node> {
    let python = cx.config.dialect == Dialect::PythonLike;

    let (return_type, name) = if python {
        let rest = after_word(line.text, "def")?;
        let name = rest[..rest.find('(')?].trim();
        let ret = rest
            .rsplit_once("->")
            .map(|(_, ret)| strip_terminator(ret).to_string())
            .unwrap_or_else(|| "None".to_string());
        (ret, name)
    } else {
        let (ret, name) = split_c_header(line.text)?;
        let ret = if ret.is_empty() {
            "void".to_string()
        } else {
            ret.join(" ")
        };
        (ret, name)
    };

    let mut params = Vec::new();
    for param in first_group(line.text).unwrap_or("").split(',') {
        if let Some(decl) = parameter(cx, param, python) {
            params.push(decl);
        }
    }

    let ret_node = cx.keyword(return_type);
    let name_node = cx.identifier(name);
    let mut children = vec![ret_node, name_node];
    if !params.is_empty() {
        children.push(
            cx.node(NodeKind::ParameterList, Category::Keyword, "Parameters")
                .with_children(params),
        );
    }

    Some(
        cx.node(
            NodeKind::FunctionDeclaration,
            Category::Identifier,
            format!("Function: {name}"),
        )
        .with_children(children),
    )
}

/// One parameter declaration. C and Java parameters need a `<type> <name>`
/// pair; Python accepts `name`, `name: type` and `name=default`.
fn parameter(cx: &mut Context<'_>, param: &str, python: bool) -> Option<Node> {
    let param = param.trim();

    let (ty, name) = if python {
        let param = param.split_once('=').map_or(param, |(name, _)| name.trim());
        match param.split_once(':') {
            Some((name, ty)) => (Some(ty.trim().to_string()), name.trim()),
            None => (None, param),
        }
    } else {
        let words: Vec<&str> = param.split_whitespace().collect();
        if words.len() < 2 {
            return None;
        }
        let last = words[words.len() - 1];
        let name = last.trim_start_matches(['*', '&']);
        let mut ty = words[..words.len() - 1].join(" ");
        ty.push_str(&last[..last.len() - name.len()]);
        (Some(ty), name)
    };

    if name.is_empty() {
        return None;
    }

    let ty_node = ty.map(|ty| cx.keyword(ty));
    let name_node = cx.identifier(name);
    Some(
        cx.node(NodeKind::Declaration, Category::Identifier, name)
            .with_children(ty_node)
            .with_child(name_node),
    )
}

// ========== Control Headers ==========

/// The keyword a conditional header starts with.
fn conditional_keyword(text: &str) -> Option<(NodeKind, &'static str, &str)> {
    if let Some(rest) = after_word(text, "else").and_then(|r| after_word(r, "if")) {
        return Some((NodeKind::If, "else if", rest));
    }
    if let Some(rest) = after_word(text, "elif") {
        return Some((NodeKind::If, "elif", rest));
    }
    if let Some(rest) = after_word(text, "if") {
        return Some((NodeKind::If, "if", rest));
    }
    after_word(text, "while").map(|rest| (NodeKind::While, "while", rest))
}

/// Text a control header governs: the first parenthesized group, or the
/// rest of the line up to its terminator when there are no parentheses.
fn header_body(rest: &str) -> &str {
    if rest.starts_with('(') {
        first_group(rest).unwrap_or("").trim()
    } else {
        strip_terminator(rest)
    }
}

fn is_conditional(_cx: &Context<'_>, line: &StmtLine<'_>) -> bool {
    conditional_keyword(line.text).is_some()
}

fn build_conditional(cx: &mut Context<'_>, line: &StmtLine<'_>) -> Option<Node> {
    let (kind, keyword, rest) = conditional_keyword(line.text)?;
    let condition = header_body(rest);

    let child = if condition.is_empty() {
        None
    } else {
        Some(cx.parse_expr_or_raw(condition, line.offset_of(condition)))
    };

    Some(
        cx.node(kind, Category::Keyword, keyword)
            .with_children(child),
    )
}

fn is_for(_cx: &Context<'_>, line: &StmtLine<'_>) -> bool {
    starts_with_word(line.text, "for")
}

fn build_for(cx: &mut Context<'_>, line: &StmtLine<'_>) -> Option<Node> {
    let body = header_body(after_word(line.text, "for")?);

    let mut parts: Vec<(&str, &str)> = Vec::new();
    if body.contains(';') {
        parts.extend(FOR_LABELS.into_iter().zip(body.splitn(3, ';')));
    } else if let Some((var, iter)) = body.split_once(" in ").or_else(|| body.split_once(':')) {
        parts.push(("Variable", var));
        parts.push(("Iterable", iter));
    } else {
        parts.push(("Condition", body));
    }

    let mut children = Vec::new();
    for (label, part) in parts {
        if part.trim().is_empty() {
            continue;
        }
        let inner = for_part(cx, &line.part(part));
        children.push(
            cx.node(NodeKind::Expression, Category::Keyword, label)
                .with_child(inner),
        );
    }

    Some(
        cx.node(NodeKind::For, Category::Keyword, "for")
            .with_children(children),
    )
}

/// A `for` header part: a declaration, an assignment, or an expression.
fn for_part(cx: &mut Context<'_>, part: &StmtLine<'_>) -> Node {
    let built = if is_variable_declaration(cx, part) {
        build_variable_declaration(cx, part)
    } else if is_assignment(cx, part) {
        build_assignment(cx, part)
    } else {
        None
    };
    match built {
        Some(node) => node,
        None => cx.parse_expr_or_raw(part.text, part.offset),
    }
}

// ========== Simple Statements ==========

fn is_return(_cx: &Context<'_>, line: &StmtLine<'_>) -> bool {
    starts_with_word(line.text, "return")
}

fn build_return(cx: &mut Context<'_>, line: &StmtLine<'_>) -> Option<Node> {
    let value = strip_terminator(after_word(line.text, "return")?);
    let child = if value.is_empty() {
        None
    } else {
        Some(cx.parse_expr_or_raw(value, line.offset_of(value)))
    };
    Some(
        cx.node(NodeKind::Return, Category::Keyword, "return")
            .with_children(child),
    )
}

fn is_bare_keyword(_cx: &Context<'_>, line: &StmtLine<'_>) -> bool {
    BARE_KEYWORDS.contains(&strip_terminator(line.text))
}

fn build_bare_keyword(cx: &mut Context<'_>, line: &StmtLine<'_>) -> Option<Node> {
    Some(cx.keyword(strip_terminator(line.text)))
}

/// A line with an `=` but no `==` anywhere; `ok = a == b;` falls through
/// to the expression statement.
fn is_assignment(_cx: &Context<'_>, line: &StmtLine<'_>) -> bool {
    !line.text.contains("==")
        && find_assignment(line.text).is_some_and(|(idx, _)| !line.text[..idx].trim().is_empty())
}

fn build_assignment(cx: &mut Context<'_>, line: &StmtLine<'_>) -> Option<Node> {
    let (idx, op) = find_assignment(line.text)?;
    let target = line.text[..idx].trim();
    let value = strip_terminator(&line.text[idx + op.len()..]);

    let target = cx.identifier(target);
    let value = cx.parse_expr_or_raw(value, line.offset_of(value));
    Some(
        cx.node(NodeKind::Assignment, Category::Operator, op)
            .with_child(target)
            .with_child(value),
    )
}

fn build_expression_statement(cx: &mut Context<'_>, line: &StmtLine<'_>) -> Option<Node> {
    let text = strip_terminator(line.text);
    if text.is_empty() {
        return None;
    }
    let expr = cx.parse_expr(text, line.offset_of(text))?;
    Some(
        cx.node(NodeKind::Statement, Category::Keyword, "Statement")
            .with_child(expr),
    )
}
