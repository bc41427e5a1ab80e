//! Integration tests for sapling-common crate.

use sapling_common::{SourceLines, Span};

#[test]
fn test_span_merge() {
    let a = Span::from_usize(10, 20);
    let b = Span::from_usize(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged.start.0, 10);
    assert_eq!(merged.end.0, 30);
}

#[test]
fn test_span_len_and_range() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.len(), 10);
    assert_eq!(span.range(), 5..15);
}

#[test]
fn test_lines_are_numbered_from_one() {
    let numbers: Vec<_> = SourceLines::new("a\nb\nc").map(|l| l.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn test_blank_lines_are_kept() {
    let lines: Vec<_> = SourceLines::new("a\n\n  \nb\n").collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].is_blank());
    assert!(lines[2].is_blank());
    assert!(!lines[3].is_blank());
}

#[test]
fn test_line_spans_index_the_source() {
    let source = "int x;\r\n  y = 2;\n";
    for line in SourceLines::new(source) {
        assert_eq!(&source[line.span.range()], line.text);
    }
}

#[test]
fn test_empty_source_has_no_lines() {
    assert_eq!(SourceLines::new("").count(), 0);
}
