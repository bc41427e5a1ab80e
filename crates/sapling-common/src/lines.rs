//! Splitting text into logical lines.
//! 将文本拆分为逻辑行。

use crate::Span;

/// One line of source text with its position in the whole text.
/// 一行源文本及其在全文中的位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'src> {
    /// 1-based line number. / 从 1 开始的行号。
    pub number: usize,
    /// Line text without the terminator. / 不含换行符的行文本。
    pub text: &'src str,
    /// Byte range of `text` in the whole source. / `text` 在全文中的字节范围。
    pub span: Span,
}

impl<'src> Line<'src> {
    /// The line with surrounding whitespace removed, plus the byte offset of
    /// the trimmed text in the whole source.
    pub fn trimmed(&self) -> (&'src str, usize) {
        let leading = self.text.len() - self.text.trim_start().len();
        (self.text.trim(), usize::from(self.span.start) + leading)
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Iterator over the lines of a text. Handles `\n` and `\r\n` endings.
/// 文本行迭代器，支持 `\n` 与 `\r\n` 换行。
pub struct SourceLines<'src> {
    source: &'src str,
    pos: usize,
    number: usize,
}

impl<'src> SourceLines<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            number: 0,
        }
    }
}

impl<'src> Iterator for SourceLines<'src> {
    type Item = Line<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.source.len() {
            return None;
        }

        let rest = &self.source[self.pos..];
        let (raw, consumed) = match rest.find('\n') {
            Some(idx) => (&rest[..idx], idx + 1),
            None => (rest, rest.len()),
        };
        let text = raw.strip_suffix('\r').unwrap_or(raw);

        let start = self.pos;
        self.pos += consumed;
        self.number += 1;

        Some(Line {
            number: self.number,
            text,
            span: Span::from_usize(start, start + text.len()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_is_stripped() {
        let lines: Vec<_> = SourceLines::new("a\r\nbb\n").collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "a");
        assert_eq!(lines[1].text, "bb");
        assert_eq!(lines[1].span.range(), 3..5);
    }

    #[test]
    fn test_trimmed_offset() {
        let line = SourceLines::new("x\n   int y;").nth(1).unwrap();
        assert_eq!(line.trimmed(), ("int y;", 5));
    }
}
