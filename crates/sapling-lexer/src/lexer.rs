//! The Sapling tokenizer.
//! Sapling 分词器。

use crate::token::{Token, TokenTable};
use sapling_common::Span;

/// Splits text into lexemes according to a [`TokenTable`].
/// 根据 [`TokenTable`] 将文本切分为词素。
///
/// Scans left to right keeping a pending word. Whitespace ends the word;
/// an operator ends the word and is emitted on its own. There is no
/// lookahead beyond the operator being matched and no string escaping, so
/// a quoted literal containing spaces is split like any other text.
pub struct Lexer<'src> {
    source: &'src str,
    table: &'static TokenTable,
    /// Added to every span, for text that is a slice of a larger source.
    /// 加到每个范围上的偏移，用于较大源文本中的切片。
    offset: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, table: &'static TokenTable) -> Self {
        Self {
            source,
            table,
            offset: 0,
        }
    }

    /// Create a lexer for `source` that sits `offset` bytes into a larger text.
    /// 为位于较大文本 `offset` 字节处的切片创建分词器。
    pub fn with_offset(source: &'src str, table: &'static TokenTable, offset: usize) -> Self {
        Self {
            source,
            table,
            offset,
        }
    }

    /// Tokenize the whole input. Empty lexemes are never produced.
    /// 对整个输入分词，不会产生空词素。
    pub fn tokenize(self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pending: Option<usize> = None;
        let mut chars = self.source.char_indices();

        while let Some((pos, ch)) = chars.next() {
            if ch.is_whitespace() {
                self.flush(&mut tokens, &mut pending, pos);
                continue;
            }

            if let Some(op) = self.table.compound_at(&self.source[pos..]) {
                self.flush(&mut tokens, &mut pending, pos);
                self.push(&mut tokens, pos, pos + op.len());
                // Compound operators are ASCII, one byte per char.
                for _ in 1..op.len() {
                    chars.next();
                }
                continue;
            }

            if self.table.is_glyph(ch) {
                self.flush(&mut tokens, &mut pending, pos);
                self.push(&mut tokens, pos, pos + ch.len_utf8());
                continue;
            }

            pending.get_or_insert(pos);
        }

        self.flush(&mut tokens, &mut pending, self.source.len());
        tokens
    }

    /// Emit the pending word, if any, ending at `end`.
    fn flush(&self, tokens: &mut Vec<Token>, pending: &mut Option<usize>, end: usize) {
        if let Some(start) = pending.take() {
            self.push(tokens, start, end);
        }
    }

    fn push(&self, tokens: &mut Vec<Token>, start: usize, end: usize) {
        let text = &self.source[start..end];
        if !text.is_empty() {
            let span = Span::from_usize(start, end).shift(self.offset);
            tokens.push(Token::new(text, span));
        }
    }
}
