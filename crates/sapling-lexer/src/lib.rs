//! Tokenizer for Sapling.
//! Sapling 分词器。
//!
//! Splits text on whitespace and on the operator glyphs of a [`TokenTable`].
//! Everything else accumulates into word tokens, so the output is a flat
//! list of lexemes with no escaping rules.
//! 按空白和 [`TokenTable`] 中的运算符切分文本，其余字符累积为单词 token。

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{LexemeClass, Token, TokenTable};

/// Tokenize `text` with the arithmetic table and return the bare lexemes.
/// 使用算术表分词并返回词素字符串。
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with(text, &TokenTable::ARITHMETIC)
}

/// Tokenize `text` with the given table and return the bare lexemes.
pub fn tokenize_with(text: &str, table: &'static TokenTable) -> Vec<String> {
    Lexer::new(text, table)
        .tokenize()
        .into_iter()
        .map(|t| t.text)
        .collect()
}
