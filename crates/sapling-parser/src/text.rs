//! Small string scanners used by the statement rules.

/// Whether `text` starts with the word `keyword` followed by a non-word
/// character or the end of the text.
pub(crate) fn starts_with_word(text: &str, keyword: &str) -> bool {
    match text.strip_prefix(keyword) {
        Some(rest) => rest
            .chars()
            .next()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_')),
        None => false,
    }
}

/// `text` with the leading word `keyword` removed and the rest trimmed.
pub(crate) fn after_word<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    if starts_with_word(text, keyword) {
        Some(text[keyword.len()..].trim())
    } else {
        None
    }
}

/// First whitespace-delimited word.
pub(crate) fn first_word(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

/// Strip one trailing statement terminator (`;`, `{` or `:`) and whitespace.
pub(crate) fn strip_terminator(text: &str) -> &str {
    let text = text.trim_end();
    text.strip_suffix(';')
        .or_else(|| text.strip_suffix('{'))
        .or_else(|| text.strip_suffix(':'))
        .unwrap_or(text)
        .trim()
}

/// Byte index of the `)` matching the `(` at `open`, or `None` when the
/// parenthesis is never closed.
pub(crate) fn matching_paren(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in text.bytes().enumerate().skip(open) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Contents of the first parenthesized group. An unclosed group runs to the
/// end of the text.
pub(crate) fn first_group(text: &str) -> Option<&str> {
    let open = text.find('(')?;
    let close = matching_paren(text, open).unwrap_or(text.len());
    Some(&text[open + 1..close])
}

/// The first assignment operator in `text`: byte index and operator text.
///
/// Skips `==`, `!=`, `<=`, `>=` and anything inside quotes. Compound
/// operators such as `+=` are returned whole.
pub(crate) fn find_assignment(text: &str) -> Option<(usize, &str)> {
    let bytes = text.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'=' => {
                if bytes.get(i + 1) == Some(&b'=') {
                    i += 2;
                    continue;
                }
                let prev = if i > 0 { Some(bytes[i - 1]) } else { None };
                match prev {
                    Some(b'!' | b'<' | b'>' | b'=') => {}
                    Some(b'+' | b'-' | b'*' | b'/' | b'%') => {
                        return Some((i - 1, &text[i - 1..=i]));
                    }
                    _ => return Some((i, &text[i..=i])),
                }
            }
            None => {}
        }
        i += 1;
    }
    None
}

/// Drop a trailing comment starting at `marker`, ignoring markers inside
/// quotes.
pub(crate) fn strip_line_comment<'a>(text: &'a str, marker: &str) -> &'a str {
    let bytes = text.as_bytes();
    let mut quote: Option<u8> = None;
    for (i, &b) in bytes.iter().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if bytes[i..].starts_with(marker.as_bytes()) => return text[..i].trim_end(),
            None => {}
        }
    }
    text
}

/// Byte offset of `inner` within `outer`. `inner` must be a subslice of
/// `outer`; anything else maps to 0.
pub(crate) fn offset_in(outer: &str, inner: &str) -> usize {
    let start = outer.as_ptr() as usize;
    let pos = inner.as_ptr() as usize;
    if pos >= start && pos + inner.len() <= start + outer.len() {
        pos - start
    } else {
        0
    }
}
