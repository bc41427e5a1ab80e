//! Integration tests for degradation warnings.

use sapling_diagnostic::{Diagnostic, DiagnosticKind, Severity, WarningCode};
use sapling_parser::{ParseConfig, build, parse_with_diagnostics};
use sapling_syntax::{Dialect, NodeKind};

fn warnings(source: &str, dialect: Dialect) -> Vec<Diagnostic> {
    parse_with_diagnostics(source, &ParseConfig::for_dialect(dialect)).1
}

fn codes(source: &str, dialect: Dialect) -> Vec<WarningCode> {
    warnings(source, dialect)
        .iter()
        .filter_map(|d| d.code)
        .collect()
}

// ============================================================================
// Clean Input
// ============================================================================

#[test]
fn test_clean_input_has_no_warnings() {
    assert!(codes("int x = 5;\nif (x > 0) {\n    x = x - 1;\n}", Dialect::CLike).is_empty());
    assert!(codes("(1 + 2) * 3", Dialect::Expression).is_empty());
    assert!(codes("x = 5  # note\ny = x", Dialect::PythonLike).is_empty());
}

#[test]
fn test_tree_matches_plain_build() {
    let source = "int x = (1 + ;\nfoo(";
    let (tree, diags) = parse_with_diagnostics(source, &ParseConfig::for_dialect(Dialect::CLike));
    assert_eq!(tree, build(source, Dialect::CLike));
    assert!(!diags.is_empty());
}

// ============================================================================
// Expression Warnings
// ============================================================================

#[test]
fn test_trailing_input_span() {
    let diags = warnings("1 2", Dialect::Expression);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, Some(WarningCode::TrailingInput));
    assert_eq!(diags[0].span.range(), 2..3);
    assert_eq!(diags[0].kind, DiagnosticKind::Expression);
    assert_eq!(diags[0].severity, Severity::Warning);
}

#[test]
fn test_missing_operand_points_at_operator() {
    let diags = warnings("1 +", Dialect::Expression);
    assert_eq!(diags[0].code, Some(WarningCode::MissingOperand));
    assert_eq!(diags[0].span.range(), 2..3);
}

#[test]
fn test_unclosed_delimiter_in_whole_source_coordinates() {
    let source = "x = 1\ny = (2";
    let diags = warnings(source, Dialect::CLike);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, Some(WarningCode::UnclosedDelimiter));
    assert_eq!(diags[0].span.range(), 10..11);
    assert_eq!(&source[diags[0].span.range()], "(");
}

#[test]
fn test_raw_fallback() {
    assert_eq!(codes(")", Dialect::Expression), vec![WarningCode::RawFallback]);
}

#[test]
fn test_empty_expression_is_a_note() {
    let diags = warnings("", Dialect::Expression);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].is(WarningCode::EmptyExpression));
    assert_eq!(diags[0].severity, Severity::Note);
}

#[test]
fn test_nesting_limit_is_reported_once() {
    let config = ParseConfig::new().max_depth(4);
    let source = format!("{}1{}", "(".repeat(10), ")".repeat(10));
    let (tree, diags) = parse_with_diagnostics(&source, &config);
    assert_eq!(tree.kind(), NodeKind::Program);
    let deep = diags
        .iter()
        .filter(|d| d.code == Some(WarningCode::NestingTooDeep))
        .count();
    assert_eq!(deep, 1);
}

// ============================================================================
// Statement Warnings
// ============================================================================

#[test]
fn test_unparsed_line_span() {
    let source = "int x;\n  @@@\n";
    let diags = warnings(source, Dialect::CLike);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, Some(WarningCode::UnparsedLine));
    assert_eq!(diags[0].kind, DiagnosticKind::Statement);
    assert_eq!(&source[diags[0].span.range()], "  @@@");
}

#[test]
fn test_brace_lines_are_silent() {
    assert!(codes("{\n}\n;\n", Dialect::CLike).is_empty());
}

// ============================================================================
// Codes
// ============================================================================

#[test]
fn test_code_strings() {
    assert_eq!(WarningCode::TrailingInput.as_str(), "W0001");
    assert_eq!(WarningCode::NestingTooDeep.as_str(), "W0007");
}

#[test]
fn test_warnings_carry_labels() {
    let diags = warnings("f(1, 2", Dialect::Expression);
    assert_eq!(diags[0].code, Some(WarningCode::UnclosedDelimiter));
    assert_eq!(diags[0].labels.len(), 1);
    assert_eq!(diags[0].labels[0].span, diags[0].span);
    assert_eq!(diags[0].message, WarningCode::UnclosedDelimiter.description());
    assert_eq!(diags[0].help.as_deref(), WarningCode::UnclosedDelimiter.suggestion());
}

#[test]
fn test_one_line_rendering() {
    let diags = warnings("1 +", Dialect::Expression);
    assert_eq!(
        diags[0].to_string(),
        "warning[W0002]: operator is missing an operand at 2..3"
    );
}
