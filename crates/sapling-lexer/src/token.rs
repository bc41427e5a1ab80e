//! Token definitions and operator tables.

use sapling_common::Span;

/// A lexeme with its position in the tokenized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }

    pub fn class(&self) -> LexemeClass {
        LexemeClass::of(&self.text)
    }
}

/// Shape of a lexeme, as far as the expression grammar cares.
/// 词素的形态分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeClass {
    /// `^\d+(\.\d+)?$`
    Number,
    /// Starts and ends with the same quote character.
    Quoted,
    /// A letter or `_`, then letters, digits, `_` or `.`.
    Identifier,
    /// Anything else, operators included.
    Other,
}

impl LexemeClass {
    pub fn of(text: &str) -> LexemeClass {
        if is_number(text) {
            LexemeClass::Number
        } else if is_quoted(text) {
            LexemeClass::Quoted
        } else if is_identifier(text) {
            LexemeClass::Identifier
        } else {
            LexemeClass::Other
        }
    }
}

fn is_number(text: &str) -> bool {
    let (int, frac) = match text.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (text, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    digits(int) && frac.is_none_or(digits)
}

fn is_quoted(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first @ ('"' | '\'')), Some(last)) => first == last,
        _ => false,
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '.')
        }
        _ => false,
    }
}

/// The operator glyphs a tokenizer splits on.
///
/// `compounds` are tried before `glyphs` at every position, in order, so
/// longer operators must come first.
/// 每个位置先按顺序尝试 `compounds`，再尝试单字符 `glyphs`。
#[derive(Debug)]
pub struct TokenTable {
    pub glyphs: &'static [char],
    pub compounds: &'static [&'static str],
}

impl TokenTable {
    /// Flat arithmetic expressions. Multi-character operators are not merged.
    pub const ARITHMETIC: TokenTable = TokenTable {
        glyphs: &['+', '-', '*', '/', '%', '(', ')', '^', ','],
        compounds: &[],
    };

    /// Line-oriented pseudo-code.
    pub const STATEMENT: TokenTable = TokenTable {
        glyphs: &[
            '+', '-', '*', '/', '%', '(', ')', '<', '>', '!', '=', ',', ';', '{', '}', '[',
            ']',
        ],
        compounds: &["==", "!=", "<=", ">=", "&&", "||", "++", "--"],
    };

    pub fn is_glyph(&self, ch: char) -> bool {
        self.glyphs.contains(&ch)
    }

    /// The compound operator `rest` starts with, if any.
    pub fn compound_at(&self, rest: &str) -> Option<&'static str> {
        self.compounds.iter().copied().find(|op| rest.starts_with(op))
    }
}
